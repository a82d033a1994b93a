//! # Fixed-column field extraction
//!
//! Helpers to cut a column range out of a TLE line and convert it into a typed value.
//!
//! ## Conventions
//! -----------------
//! * Columns are **1-indexed** and counted in characters, as in the published TLE layout.
//! * Space padding around a field is tolerated; any other stray character is rejected.
//! * Every conversion error carries the **whole originating line**, not only the field,
//!   so callers can re-inspect the record.
//!
//! ## Numeric shapes
//! -----------------
//! * Integer – `25544`, `  292`, `-5`.
//! * Unsigned – `25544`, `  292`; no sign allowed.
//! * Fixed point – `51.6416`, `-.00002182`, `15.72125391`.
//! * Implied decimal – `0006703` → `0.0006703` (eccentricity).
//! * Exponential – `-11606-4` → `-0.11606e-4` (B*, second derivative of mean motion).
use std::sync::LazyLock;

use regex::Regex;

use crate::tle_errors::TleError;

static INTEGER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+$").unwrap());

static FIXED_POINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)$").unwrap());

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());

static EXPONENTIAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([ +-])([0-9]{5})([+-])([0-9])$").unwrap());

static PIECE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z]{1,3}$").unwrap());

/// Extract `length` characters starting at the 1-indexed `start_column`.
///
/// Arguments
/// -----------------
/// * `line` – The full TLE line.
/// * `start_column` – First column of the field (1-indexed).
/// * `length` – Number of columns of the field.
///
/// Return
/// ----------
/// * The field text, or [`TleError::TooShortString`] carrying `line` when the line has
///   fewer than `start_column + length - 1` characters.
pub fn substring(line: &str, start_column: usize, length: usize) -> Result<&str, TleError> {
    let too_short = || TleError::TooShortString(line.to_string());

    let mut offsets = line
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(line.len()));

    let begin = offsets
        .nth(start_column.saturating_sub(1))
        .ok_or_else(too_short)?;
    let end = match length {
        0 => begin,
        n => offsets.nth(n - 1).ok_or_else(too_short)?,
    };

    Ok(&line[begin..end])
}

/// Convert a field into an integer.
///
/// Return
/// ----------
/// * The parsed value, or [`TleError::InvalidFormat`] carrying `line` when the trimmed text
///   is empty or is not an optionally signed run of digits.
pub fn to_integer(text: &str, line: &str) -> Result<i64, TleError> {
    let invalid = || TleError::InvalidFormat(line.to_string());

    let trimmed = text.trim_matches(' ');
    if !INTEGER.is_match(trimmed) {
        return Err(invalid());
    }
    trimmed.parse::<i64>().map_err(|_| invalid())
}

/// Convert a field into an unsigned integer; any sign, `+` included, is rejected.
pub fn to_unsigned(text: &str, line: &str) -> Result<u64, TleError> {
    let invalid = || TleError::InvalidFormat(line.to_string());

    let trimmed = text.trim_matches(' ');
    if !DIGITS.is_match(trimmed) {
        return Err(invalid());
    }
    trimmed.parse::<u64>().map_err(|_| invalid())
}

/// Convert a field written as a plain decimal number (`51.6416`, `-.00002182`).
pub fn to_fixed_point(text: &str, line: &str) -> Result<f64, TleError> {
    let invalid = || TleError::InvalidFormat(line.to_string());

    let trimmed = text.trim_matches(' ');
    if !FIXED_POINT.is_match(trimmed) {
        return Err(invalid());
    }
    trimmed.parse::<f64>().map_err(|_| invalid())
}

/// Convert a field whose leading decimal point is implied (`0006703` → `0.0006703`).
pub fn to_implied_decimal(text: &str, line: &str) -> Result<f64, TleError> {
    let invalid = || TleError::InvalidFormat(line.to_string());

    let trimmed = text.trim_matches(' ');
    if !DIGITS.is_match(trimmed) {
        return Err(invalid());
    }
    format!("0.{trimmed}").parse::<f64>().map_err(|_| invalid())
}

/// Convert an 8-column TLE exponent field (`-11606-4` → `-1.1606e-5`).
///
/// The layout is one sign column (space, `+` or `-`), five mantissa digits with an
/// implied leading decimal point, an exponent sign and one exponent digit. The text is
/// matched as-is: a missing or misplaced sign column is a format error.
pub fn to_exponential(text: &str, line: &str) -> Result<f64, TleError> {
    let invalid = || TleError::InvalidFormat(line.to_string());

    let caps = EXPONENTIAL.captures(text).ok_or_else(invalid)?;
    let sign = if &caps[1] == "-" { "-" } else { "" };
    let literal = format!("{sign}0.{}e{}{}", &caps[2], &caps[3], &caps[4]);

    literal.parse::<f64>().map_err(|_| invalid())
}

/// Validate the piece-of-launch part of an international designator (`A`, `ABC`).
pub fn to_piece(text: &str, line: &str) -> Result<String, TleError> {
    let trimmed = text.trim_matches(' ');
    if !PIECE.is_match(trimmed) {
        return Err(TleError::InvalidFormat(line.to_string()));
    }
    Ok(trimmed.to_string())
}

/// Read a single-column field as a character.
pub fn to_char(text: &str, line: &str) -> Result<char, TleError> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(TleError::InvalidFormat(line.to_string())),
    }
}
