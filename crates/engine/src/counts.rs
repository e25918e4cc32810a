//! Counter state shared between the decode loop and the live reporter.
//!
//! Each counter is its own atomic. There is no lock around the four of them,
//! so a [`Counts::snapshot`] taken while the decode loop is running can mix
//! values from before and after a single character update: a newline may show
//! up in `lines` before it shows up in `chars`. Only per-field monotonicity and
//! the values after the writer has finished are meaningful.

use serde::Serialize;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counter {
    Bytes,
    Chars,
    Lines,
    Words,
}

/// Live counter state for one source.
///
/// Single writer, any number of readers.
#[derive(Debug, Default)]
pub struct Counts {
    bytes: AtomicU64,
    chars: AtomicU64,
    lines: AtomicU64,
    words: AtomicU64,
}

impl Counts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    const fn cell(&self, counter: Counter) -> &AtomicU64 {
        match counter {
            Counter::Bytes => &self.bytes,
            Counter::Chars => &self.chars,
            Counter::Lines => &self.lines,
            Counter::Words => &self.words,
        }
    }

    #[inline]
    pub fn increment(&self, counter: Counter, delta: u64) {
        self.cell(counter).fetch_add(delta, Ordering::Relaxed);
    }

    #[inline]
    #[must_use]
    pub fn get(&self, counter: Counter) -> u64 {
        self.cell(counter).load(Ordering::Relaxed)
    }

    /// Reads all four counters. The reads are independent of each other.
    #[must_use]
    pub fn snapshot(&self) -> Tally {
        Tally {
            bytes: self.get(Counter::Bytes),
            chars: self.get(Counter::Chars),
            lines: self.get(Counter::Lines),
            words: self.get(Counter::Words),
        }
    }

    /// Adds `other` into `self` one field at a time.
    ///
    /// Only meaningful once the writers of both states have finished.
    pub fn add(&self, other: &Self) {
        for counter in [Counter::Bytes, Counter::Chars, Counter::Lines, Counter::Words] {
            self.increment(counter, other.get(counter));
        }
    }
}

impl From<Tally> for Counts {
    fn from(tally: Tally) -> Self {
        Self {
            bytes: AtomicU64::new(tally.bytes),
            chars: AtomicU64::new(tally.chars),
            lines: AtomicU64::new(tally.lines),
            words: AtomicU64::new(tally.words),
        }
    }
}

/// Plain point-in-time copy of [`Counts`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Tally {
    pub bytes: u64,
    pub chars: u64,
    pub lines: u64,
    pub words: u64,
}

impl Tally {
    #[must_use]
    pub const fn get(&self, counter: Counter) -> u64 {
        match counter {
            Counter::Bytes => self.bytes,
            Counter::Chars => self.chars,
            Counter::Lines => self.lines,
            Counter::Words => self.words,
        }
    }
}

impl Add for Tally {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            bytes: self.bytes + rhs.bytes,
            chars: self.chars + rhs.chars,
            lines: self.lines + rhs.lines,
            words: self.words + rhs.words,
        }
    }
}

impl AddAssign for Tally {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Tally {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, t| acc + t)
    }
}

impl<'a> Sum<&'a Self> for Tally {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
