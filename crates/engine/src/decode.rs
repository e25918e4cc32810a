//! Character decoding and the counting loop.

use crate::counts::{Counter, Counts};
use std::io::{self, ErrorKind, Read};

const BUF_SIZE: usize = 8 * 1024;
const MAX_UTF8_LEN: usize = 4;

/// One decoded character and the number of input bytes it consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    pub ch: char,
    pub len: usize,
}

/// Buffered UTF-8 decoder over any byte source.
///
/// Malformed input never aborts decoding: each byte that cannot start a valid
/// sequence comes out as U+FFFD with `len == 1`. A read error is held back
/// until every complete character already in the buffer has been returned.
pub struct CharReader<R> {
    inner: R,
    buf: Box<[u8]>,
    pos: usize,
    filled: usize,
    eof: bool,
    pending: Option<io::Error>,
}

impl<R: Read> CharReader<R> {
    pub fn new(inner: R) -> Self {
        Self::with_capacity(BUF_SIZE, inner)
    }

    /// Capacity is raised to at least four bytes so any character fits.
    pub fn with_capacity(capacity: usize, inner: R) -> Self {
        Self {
            inner,
            buf: vec![0; capacity.max(MAX_UTF8_LEN)].into_boxed_slice(),
            pos: 0,
            filled: 0,
            eof: false,
            pending: None,
        }
    }

    /// Returns the next character, `Ok(None)` at end of stream.
    ///
    /// # Errors
    ///
    /// Returns the underlying read error once the buffered input is used up.
    pub fn next_char(&mut self) -> io::Result<Option<Decoded>> {
        while !self.has_full_char() && !self.eof && self.pending.is_none() {
            self.fill();
        }

        if self.pos == self.filled {
            return match self.pending.take() {
                Some(err) => Err(err),
                None => Ok(None),
            };
        }

        Ok(Some(self.decode_one()))
    }

    fn available(&self) -> &[u8] {
        &self.buf[self.pos..self.filled]
    }

    fn has_full_char(&self) -> bool {
        match self.available().first() {
            None => false,
            Some(&lead) => match utf8_len(lead) {
                0 => true,
                len => self.filled - self.pos >= len,
            },
        }
    }

    fn fill(&mut self) {
        if self.pos > 0 {
            self.buf.copy_within(self.pos..self.filled, 0);
            self.filled -= self.pos;
            self.pos = 0;
        }

        match self.inner.read(&mut self.buf[self.filled..]) {
            Ok(0) => self.eof = true,
            Ok(n) => self.filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => self.pending = Some(e),
        }
    }

    fn decode_one(&mut self) -> Decoded {
        let bytes = self.available();
        let lead = bytes[0];
        let decoded = match utf8_len(lead) {
            1 => Decoded {
                ch: char::from(lead),
                len: 1,
            },
            0 => REPLACEMENT,
            len if bytes.len() < len => REPLACEMENT,
            len => std::str::from_utf8(&bytes[..len])
                .ok()
                .and_then(|s| s.chars().next())
                .map_or(REPLACEMENT, |ch| Decoded { ch, len }),
        };
        self.pos += decoded.len;
        decoded
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

const REPLACEMENT: Decoded = Decoded {
    ch: char::REPLACEMENT_CHARACTER,
    len: 1,
};

/// Sequence length announced by a lead byte, 0 if it cannot lead one.
const fn utf8_len(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

/// Latch deciding whether the next non-whitespace character opens a word.
#[derive(Debug, Clone, Copy)]
pub struct WordBoundary {
    at_word_start: bool,
}

impl Default for WordBoundary {
    fn default() -> Self {
        Self {
            at_word_start: true,
        }
    }
}

impl WordBoundary {
    /// Feeds one character; returns `true` when it starts a new word.
    #[inline]
    pub fn feed(&mut self, ch: char) -> bool {
        if ch.is_whitespace() {
            self.at_word_start = true;
            false
        } else if self.at_word_start {
            self.at_word_start = false;
            true
        } else {
            false
        }
    }
}

/// Decodes `source` to exhaustion, updating `counts` after every character.
///
/// Only `'\n'` counts as a line, so an unterminated last line is not counted.
///
/// # Errors
///
/// Returns the first read error other than `Interrupted`. Everything decoded
/// before the error stays counted.
pub fn count_into<R: Read>(source: R, counts: &Counts) -> io::Result<()> {
    let mut reader = CharReader::new(source);
    let mut words = WordBoundary::default();

    while let Some(Decoded { ch, len }) = reader.next_char()? {
        counts.increment(Counter::Bytes, len as u64);
        counts.increment(Counter::Chars, 1);
        if ch == '\n' {
            counts.increment(Counter::Lines, 1);
        }
        if words.feed(ch) {
            counts.increment(Counter::Words, 1);
        }
    }

    Ok(())
}
