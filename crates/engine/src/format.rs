//! Line rendering for live and final output.

use crate::counts::{Counter, Tally};
use crate::options::{OutputFormat, Selection};
use serde_json::{Map, Value};
use std::fmt::Write;

pub const FIELD_WIDTH: usize = 7;

/// Selected counters in display order. Bytes and chars share the third slot
/// on the command line, so at most one of them is normally present.
fn columns(selection: &Selection) -> impl Iterator<Item = (Counter, &'static str)> {
    [
        (selection.lines, Counter::Lines, "lines"),
        (selection.words, Counter::Words, "words"),
        (selection.bytes, Counter::Bytes, "bytes"),
        (selection.chars, Counter::Chars, "chars"),
    ]
    .into_iter()
    .filter_map(|(on, counter, key)| on.then_some((counter, key)))
}

/// Renders `tally` as `wc` columns: `" {:>7}"` per selected counter, then the
/// name if there is one. No line terminator.
#[must_use]
pub fn render_plain(tally: &Tally, selection: &Selection, name: &str) -> String {
    let mut line = String::with_capacity(4 * (FIELD_WIDTH + 1) + name.len() + 1);
    for (counter, _) in columns(selection) {
        let _ = write!(line, " {:>width$}", tally.get(counter), width = FIELD_WIDTH);
    }
    if !name.is_empty() {
        line.push(' ');
        line.push_str(name);
    }
    line
}

/// Renders one JSON object with the selected counters.
///
/// `kind` is `"file"` for a source and `"total"` for the summary.
#[must_use]
pub fn render_json(tally: &Tally, selection: &Selection, name: &str, kind: &str) -> String {
    let mut obj = Map::new();
    obj.insert("type".to_string(), kind.into());
    if !name.is_empty() {
        obj.insert("name".to_string(), name.into());
    }
    for (counter, key) in columns(selection) {
        obj.insert(key.to_string(), tally.get(counter).into());
    }
    Value::Object(obj).to_string()
}

/// Renders the authoritative line for one source.
#[must_use]
pub fn render_final(
    tally: &Tally,
    selection: &Selection,
    name: &str,
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Plain => render_plain(tally, selection, name),
        OutputFormat::Jsonl => render_json(tally, selection, name, "file"),
    }
}

/// Renders the summary line across all sources.
#[must_use]
pub fn render_total(tally: &Tally, selection: &Selection, format: OutputFormat) -> String {
    match format {
        OutputFormat::Plain => render_plain(tally, selection, "total"),
        OutputFormat::Jsonl => render_json(tally, selection, "", "total"),
    }
}
