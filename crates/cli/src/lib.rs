// crates/cli/src/lib.rs
pub mod app;
pub mod args;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod presentation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Printed after an illegal option.
pub const USAGE: &str = "usage: wcv [-clmw] [file ...]";
