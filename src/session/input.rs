use crate::error::Result;
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::num::IntErrorKind;

/// An integer token; values beyond `i64` are kept as out-of-range markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Number {
    Int(i64),
    TooLarge,
    TooSmall,
}

impl Number {
    /// Clamps out-of-range markers to the nearest representable value.
    pub fn saturating(self) -> i64 {
        match self {
            Number::Int(value) => value,
            Number::TooLarge => i64::MAX,
            Number::TooSmall => i64::MIN,
        }
    }
}

/// Whitespace-separated tokens read lazily from a line-oriented source.
pub struct TokenReader<R> {
    source: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            source,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` once the source is exhausted.
    ///
    /// Lines are read as bytes; invalid UTF-8 becomes a token that never parses.
    pub fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = Vec::new();
            if self.source.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                line.split(u8::is_ascii_whitespace)
                    .filter(|token| !token.is_empty())
                    .map(|token| String::from_utf8_lossy(token).into_owned()),
            );
        }
    }

    /// Reads tokens until one is an integer, printing `retry` before each new attempt.
    pub fn next_int<W: Write>(&mut self, out: &mut W, retry: &str) -> Result<Option<Number>> {
        while let Some(token) = self.next_token()? {
            match token.parse::<i64>() {
                Ok(value) => return Ok(Some(Number::Int(value))),
                Err(err) if *err.kind() == IntErrorKind::PosOverflow => {
                    return Ok(Some(Number::TooLarge))
                }
                Err(err) if *err.kind() == IntErrorKind::NegOverflow => {
                    return Ok(Some(Number::TooSmall))
                }
                Err(_) => {
                    tracing::debug!(token = %token, "discarded non-numeric input");
                    write!(out, "{retry}")?;
                    out.flush()?;
                }
            }
        }
        Ok(None)
    }
}
