use crate::error::DecodeError;
use std::iter::{Peekable, RepeatN};
use std::str::Chars;

/// A maximal run of identical characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub value: char,
    /// Number of consecutive occurrences, always at least 1
    pub count: usize,
}

impl Run {
    /// Yields `value` `count` times.
    pub fn expand(&self) -> RepeatN<char> {
        std::iter::repeat_n(self.value, self.count)
    }
}

/// Iterator over the runs of a string, left to right.
///
/// Created by [`runs`].
pub struct Runs<'a> {
    chars: Peekable<Chars<'a>>,
}

impl Iterator for Runs<'_> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        let value = self.chars.next()?;
        let mut count = 1;
        while self.chars.next_if_eq(&value).is_some() {
            count += 1;
        }
        Some(Run { value, count })
    }
}

/// Splits `data` into maximal runs of identical characters.
///
/// ```
/// use koans_rs::{runs, Run};
///
/// let collected: Vec<Run> = runs("aab").collect();
/// assert_eq!(collected, vec![
///     Run { value: 'a', count: 2 },
///     Run { value: 'b', count: 1 },
/// ]);
/// ```
pub fn runs(data: &str) -> Runs<'_> {
    Runs {
        chars: data.chars().peekable(),
    }
}

/// How [`RleEncoder::decode`] treats input that is not a well-formed stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodeMode {
    /// Reject malformed input with a [`DecodeError`].
    #[default]
    Strict,
    /// Best effort: drop characters without a count, zero-count runs and a
    /// trailing count with no character. Overflowing counts are still errors.
    Lenient,
}

/// Run-length encoder for strings.
///
/// Every run is written as its decimal length followed by the character:
/// `"WWWB"` becomes `"3W1B"`. Digits in the input are encoded like any other
/// character, so strings containing ASCII digits do not survive a round trip.
///
/// ```
/// use koans_rs::RleEncoder;
///
/// let encoder = RleEncoder::new();
/// let encoded = encoder.encode("WWWWWWWWWWWWBWWWWWWWWWWWWBBBWW");
/// assert_eq!(encoded, "12W1B12W3B2W");
/// assert_eq!(encoder.decode(&encoded).unwrap(), "WWWWWWWWWWWWBWWWWWWWWWWWWBBBWW");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RleEncoder {
    mode: DecodeMode,
}

impl RleEncoder {
    /// Creates an encoder that decodes in [`DecodeMode::Strict`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an encoder that decodes in the given mode.
    pub fn with_mode(mode: DecodeMode) -> Self {
        Self { mode }
    }

    /// Creates an encoder that decodes in [`DecodeMode::Lenient`].
    pub fn lenient() -> Self {
        Self::with_mode(DecodeMode::Lenient)
    }

    /// Returns the mode used by [`decode`](Self::decode) and [`parse`](Self::parse).
    pub fn mode(&self) -> DecodeMode {
        self.mode
    }

    /// Encodes `data` as a sequence of count/character pairs.
    pub fn encode(&self, data: &str) -> String {
        let mut encoded = String::with_capacity(data.len());
        for Run { value, count } in runs(data) {
            encoded.push_str(&count.to_string());
            encoded.push(value);
        }
        encoded
    }

    /// Decodes a stream produced by [`encode`](Self::encode).
    ///
    /// Fails with [`DecodeError::OutputTooLarge`] when the expanded string
    /// cannot be allocated, before anything is written.
    pub fn decode(&self, data: &str) -> Result<String, DecodeError> {
        let parsed = self.parse(data)?;
        let size = parsed
            .iter()
            .try_fold(0usize, |acc, run| {
                run.count
                    .checked_mul(run.value.len_utf8())
                    .and_then(|bytes| acc.checked_add(bytes))
            })
            .ok_or(DecodeError::OutputTooLarge)?;

        let mut decoded = String::new();
        decoded
            .try_reserve(size)
            .map_err(|_| DecodeError::OutputTooLarge)?;
        for run in &parsed {
            decoded.extend(run.expand());
        }
        Ok(decoded)
    }

    /// Scans an encoded stream into its runs without expanding them.
    ///
    /// Consecutive ASCII digits form a count, the next character closes the
    /// run. Adjacent runs of the same character are kept separate.
    pub fn parse(&self, data: &str) -> Result<Vec<Run>, DecodeError> {
        let mut parsed = Vec::new();
        let mut count: Option<usize> = None;
        let mut count_start = 0;

        for (position, ch) in data.char_indices() {
            if let Some(digit) = ch.to_digit(10) {
                if count.is_none() {
                    count_start = position;
                }
                let next = count
                    .unwrap_or(0)
                    .checked_mul(10)
                    .and_then(|c| c.checked_add(digit as usize))
                    .ok_or(DecodeError::CountOverflow {
                        position: count_start,
                    })?;
                count = Some(next);
                continue;
            }

            match (count.take(), self.mode) {
                (Some(0), DecodeMode::Strict) => {
                    return Err(DecodeError::ZeroCount {
                        position: count_start,
                    })
                }
                (None, DecodeMode::Strict) => {
                    return Err(DecodeError::MissingCount {
                        position,
                        value: ch,
                    })
                }
                (Some(0), DecodeMode::Lenient) => {
                    log::debug!("dropping zero-count run of {ch:?} at byte {count_start}");
                }
                (None, DecodeMode::Lenient) => {
                    log::debug!("dropping {ch:?} at byte {position}: no count");
                }
                (Some(count), _) => parsed.push(Run { value: ch, count }),
            }
        }

        if count.is_some() {
            match self.mode {
                DecodeMode::Strict => {
                    return Err(DecodeError::TrailingCount {
                        position: count_start,
                    })
                }
                DecodeMode::Lenient => {
                    log::debug!("dropping trailing count at byte {count_start}");
                }
            }
        }

        Ok(parsed)
    }
}
