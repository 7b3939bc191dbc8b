//! Fixed-column slicing helpers.
//!
//! Positional formats address fields by character offset, counted from zero.
//! Offsets past the end of a line behave like an empty slice rather than a
//! panic, so callers decide whether an empty field is an error.

use crate::error::{ExtractError, Result};

/// Text of `line` from character `column` to the end of the line.
///
/// Returns an empty string when the line is shorter than `column`.
#[must_use]
pub fn from_column(line: &str, column: usize) -> &str {
    match line.char_indices().nth(column) {
        Some((offset, _)) => &line[offset..],
        None => "",
    }
}

/// Single character at `column`, if the line reaches that far.
#[must_use]
pub fn char_at(line: &str, column: usize) -> Option<char> {
    line.chars().nth(column)
}

/// First whitespace-delimited token of `text`.
#[must_use]
pub fn first_token(text: &str) -> Option<&str> {
    text.split_whitespace().next()
}

/// Number of characters in a line (not bytes).
#[must_use]
pub fn char_len(line: &str) -> usize {
    line.chars().count()
}

/// Number of leading space characters.
#[must_use]
pub fn leading_spaces(line: &str) -> usize {
    line.chars().take_while(|c| *c == ' ').count()
}

/// Parse the first token found at or after `column` as a float.
///
/// # Errors
///
/// Returns [`ExtractError::InvalidFormat`] if nothing follows the column and
/// [`ExtractError::InvalidNumber`] if the token is not a number.
pub fn float_at(line: &str, column: usize, field: &'static str) -> Result<f64> {
    let token = first_token(from_column(line, column)).ok_or_else(|| {
        ExtractError::InvalidFormat(format!("missing {field} at column {column}"))
    })?;
    token.parse::<f64>().map_err(|_| ExtractError::InvalidNumber {
        field,
        value: token.to_string(),
    })
}

/// Parse the single decimal digit at `column`.
///
/// # Errors
///
/// Returns [`ExtractError::InvalidFormat`] if the column is missing or holds
/// anything other than `0`-`9`.
pub fn digit_at(line: &str, column: usize, field: &'static str) -> Result<usize> {
    let ch = char_at(line, column).ok_or_else(|| {
        ExtractError::InvalidFormat(format!("missing {field} at column {column}"))
    })?;
    ch.to_digit(10)
        .map(|d| d as usize)
        .ok_or_else(|| ExtractError::InvalidFormat(format!("invalid {field} digit: '{ch}'")))
}
