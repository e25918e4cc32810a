use clap::Parser;
use std::process::ExitCode;
use wcv_cli::app;
use wcv_cli::args::Args;
use wcv_cli::config::RunConfig;
use wcv_cli::presentation;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => return presentation::usage_error(&e),
    };
    let config = RunConfig::from(args);

    match app::run(&config) {
        Ok(summary) => summary.into(),
        Err(e) => {
            presentation::report_error(&e);
            ExitCode::FAILURE
        }
    }
}
