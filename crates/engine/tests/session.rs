//! Ordering of live and final output across a whole session.

use std::collections::VecDeque;
use std::io::{self, Read};
use std::thread;
use std::time::Duration;

use wcv_engine::reporter::ReporterState;
use wcv_engine::{Config, ConfigBuilder, EngineError, OutputFormat, ReportSink, Selection, Tally};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    Live(String),
    Final(String),
}

#[derive(Debug, Default)]
struct Recorder {
    events: Vec<Event>,
    fail_finish: bool,
}

impl ReportSink for Recorder {
    fn live(&mut self, line: &str) -> io::Result<()> {
        self.events.push(Event::Live(line.to_string()));
        Ok(())
    }

    fn finish(&mut self, line: &str) -> io::Result<()> {
        if self.fail_finish {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        }
        self.events.push(Event::Final(line.to_string()));
        Ok(())
    }
}

impl Recorder {
    fn live_lines(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Live(line) => Some(line.as_str()),
                Event::Final(_) => None,
            })
            .collect()
    }

    fn final_lines(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Final(line) => Some(line.as_str()),
                Event::Live(_) => None,
            })
            .collect()
    }
}

/// Hands out one chunk per read, sleeping before each.
struct Trickle {
    chunks: VecDeque<&'static [u8]>,
    delay: Duration,
    fail_at_end: bool,
}

impl Trickle {
    fn new(chunks: &[&'static [u8]], delay: Duration) -> Self {
        Self {
            chunks: chunks.iter().copied().collect(),
            delay,
            fail_at_end: false,
        }
    }
}

impl Read for Trickle {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        thread::sleep(self.delay);
        match self.chunks.pop_front() {
            Some(chunk) => {
                buf[..chunk.len()].copy_from_slice(chunk);
                Ok(chunk.len())
            }
            None if self.fail_at_end => Err(io::Error::other("connection reset")),
            None => Ok(0),
        }
    }
}

fn live_config(interval_ms: u64) -> Config {
    ConfigBuilder::default()
        .interval(Duration::from_millis(interval_ms))
        .build()
        .unwrap()
}

fn columns(line: &str) -> Vec<u64> {
    line.split_whitespace()
        .filter_map(|field| field.parse().ok())
        .collect()
}

#[test]
fn final_line_comes_last_after_many_ticks() {
    let source = Trickle::new(
        &[b"one two\n", b"three ", b"four\nfive", b" six\n"],
        Duration::from_millis(25),
    );
    let mut recorder = Recorder::default();

    let outcome = wcv_engine::run(source, &live_config(2), "trickle", &mut recorder);

    assert!(outcome.is_ok());
    assert_eq!(outcome.reporter, ReporterState::Stopped);
    assert!(!recorder.live_lines().is_empty());
    assert_eq!(recorder.final_lines(), ["       3       6      28 trickle"]);
    assert!(matches!(recorder.events.last(), Some(Event::Final(_))));
}

#[test]
fn consecutive_live_lines_differ() {
    let source = Trickle::new(&[b"a ", b"b ", b"c "], Duration::from_millis(30));
    let mut recorder = Recorder::default();

    wcv_engine::run(source, &live_config(1), "x", &mut recorder);

    let live = recorder.live_lines();
    assert!(live.windows(2).all(|pair| pair[0] != pair[1]), "{live:?}");
}

#[test]
fn live_counts_never_go_backwards() {
    let source = Trickle::new(
        &[b"alpha ", b"beta\n", b"gamma ", b"delta\n", b"epsilon"],
        Duration::from_millis(15),
    );
    let mut recorder = Recorder::default();

    wcv_engine::run(source, &live_config(1), "", &mut recorder);

    let mut previous = vec![0, 0, 0];
    for line in recorder.live_lines() {
        let now = columns(line);
        assert_eq!(now.len(), 3);
        assert!(now.iter().zip(&previous).all(|(n, p)| n >= p), "{line}");
        previous = now;
    }
    let last = columns(recorder.final_lines()[0]);
    assert!(last.iter().zip(&previous).all(|(n, p)| n >= p));
    assert_eq!(last, [2, 5, 30]);
}

#[test]
fn disabled_live_display_only_writes_final_line() {
    let config = Config {
        live: false,
        ..Config::default()
    };
    let mut recorder = Recorder::default();

    let outcome = wcv_engine::run(&b"hello world"[..], &config, "", &mut recorder);

    assert_eq!(outcome.reporter, ReporterState::Idle);
    assert_eq!(
        recorder.events,
        [Event::Final("       0       2      11".to_string())]
    );
}

#[test]
fn read_error_still_prints_partial_counts() {
    let mut source = Trickle::new(&[b"hello wor"], Duration::ZERO);
    source.fail_at_end = true;
    let mut recorder = Recorder::default();

    let outcome = wcv_engine::run(source, &live_config(5), "flaky.txt", &mut recorder);

    assert_eq!(
        outcome.tally(),
        Tally {
            bytes: 9,
            chars: 9,
            lines: 0,
            words: 2,
        }
    );
    assert!(matches!(outcome.error, Some(EngineError::Read { .. })));
    assert_eq!(
        outcome.error.unwrap().to_string(),
        "flaky.txt: connection reset"
    );
    assert_eq!(recorder.final_lines(), ["       0       2       9 flaky.txt"]);
    assert!(matches!(recorder.events.last(), Some(Event::Final(_))));
}

#[test]
fn failed_final_write_is_reported() {
    let mut recorder = Recorder {
        fail_finish: true,
        ..Recorder::default()
    };
    let config = Config {
        live: false,
        ..Config::default()
    };

    let outcome = wcv_engine::run(&b"abc\n"[..], &config, "out", &mut recorder);

    assert!(matches!(outcome.error, Some(EngineError::Output(_))));
    assert_eq!(outcome.tally().lines, 1);
}

#[test]
fn selection_and_format_apply_to_final_line() {
    let config = Config {
        selection: Selection {
            chars: true,
            ..Selection::NONE
        },
        format: OutputFormat::Jsonl,
        live: false,
        ..Config::default()
    };
    let mut recorder = Recorder::default();

    wcv_engine::run("😊 hey hi".as_bytes(), &config, "emoji", &mut recorder);

    let line = recorder.final_lines()[0].to_string();
    let value: serde_json::Value = serde_json::from_str(&line).unwrap();
    assert_eq!(value["name"], "emoji");
    assert_eq!(value["chars"], 8);
    assert!(value.get("bytes").is_none());
}

#[test]
fn sessions_do_not_share_state() {
    let config = Config {
        live: false,
        ..Config::default()
    };
    let total = wcv_engine::Counts::new();
    for text in ["hello world", "hello world\ntesting"] {
        let outcome = wcv_engine::run(text.as_bytes(), &config, "", &mut Recorder::default());
        total.add(&outcome.counts);
    }
    assert_eq!(
        total.snapshot(),
        Tally {
            bytes: 30,
            chars: 30,
            lines: 1,
            words: 5,
        }
    );
}
