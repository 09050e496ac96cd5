//! SMTP port

use std::fmt;

use thiserror::Error;

/// An error that can occur when parsing an SMTP port
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SmtpPortError {
    /// The value is an integer outside `1..=65535`
    #[error("port is out of range")]
    OutOfRange,

    /// The value is not an integer
    #[error("port is not a number")]
    NotANumber,
}

/// A TCP port in `1..=65535`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SmtpPort(u16);

impl SmtpPort {
    /// Parse a port from `raw`, trimming surrounding whitespace first.
    ///
    /// Single underscores between digits are accepted as group separators
    /// (`"5_87"` is 587). Integers that don't fit in 64 bits are still
    /// reported as [`SmtpPortError::OutOfRange`] rather than as non-numeric.
    pub fn parse(raw: &str) -> Result<Self, SmtpPortError> {
        let trimmed = strip_digit_separators(raw.trim());
        let trimmed = trimmed.as_str();

        match trimmed.parse::<i64>() {
            Ok(port) => u16::try_from(port)
                .ok()
                .filter(|port| *port >= 1)
                .map(Self)
                .ok_or(SmtpPortError::OutOfRange),
            Err(_) if is_integer(trimmed) => Err(SmtpPortError::OutOfRange),
            Err(_) => Err(SmtpPortError::NotANumber),
        }
    }

    /// Get the port number
    pub fn value(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for SmtpPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Removes `_` when it sits between two ASCII digits. Any other underscore is
/// left in place so the value fails to parse.
fn strip_digit_separators(raw: &str) -> String {
    let bytes = raw.as_bytes();

    raw.char_indices()
        .filter(|&(i, c)| {
            let between_digits = i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit);

            !(c == '_' && between_digits)
        })
        .map(|(_, c)| c)
        .collect()
}

fn is_integer(raw: &str) -> bool {
    let digits = raw.strip_prefix(&['+', '-'][..]).unwrap_or(raw);

    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
