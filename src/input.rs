//! Textual sequence parsing for driver layers.
//!
//! The scanner operations consume in-memory slices only; this module turns
//! the textual forms a driver receives (comma-separated integers, strings
//! of binary digits) into those slices.

use thiserror::Error;

/// Errors that can occur while parsing a textual sequence description.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseSequenceError {
    /// A comma-separated field did not parse as an integer.
    #[error("invalid integer '{text}' at field {field}")]
    InvalidInteger {
        /// The offending field, trimmed.
        text: String,
        /// 1-based field position within the list.
        field: usize,
    },
    /// A binary sequence contained a character other than `0` or `1`.
    #[error("invalid binary digit '{digit}' at position {position}")]
    NonBinaryDigit {
        /// The offending character.
        digit: char,
        /// 0-based character position within the string.
        position: usize,
    },
}

/// Parse a comma-separated list of integers.
///
/// Fields may carry surrounding whitespace; empty or all-whitespace input
/// parses to an empty sequence.
pub fn parse_integers(text: &str) -> Result<Vec<i64>, ParseSequenceError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    trimmed
        .split(',')
        .enumerate()
        .map(|(idx, field)| {
            let field = field.trim();
            field
                .parse()
                .map_err(|_| ParseSequenceError::InvalidInteger {
                    text: field.to_string(),
                    field: idx + 1,
                })
        })
        .collect()
}

/// Parse a string of `0`/`1` digits into a byte sequence.
pub fn parse_bits(text: &str) -> Result<Vec<u8>, ParseSequenceError> {
    text.trim()
        .char_indices()
        .map(|(position, digit)| match digit {
            '0' => Ok(0),
            '1' => Ok(1),
            _ => Err(ParseSequenceError::NonBinaryDigit { digit, position }),
        })
        .collect()
}
