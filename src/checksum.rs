//! # TLE line checksum
//!
//! Modulo-10 checksum stored in the last column of every TLE data line: each decimal
//! digit counts for its value, each minus sign counts for 1, every other character
//! (letters, spaces, periods, plus signs) counts for 0.

use crate::tle_errors::TleError;

/// Compute the checksum of a TLE line, ignoring its last character.
///
/// Arguments
/// -----------------
/// * `line` – A TLE line including its trailing checksum digit.
///
/// Return
/// ----------
/// * The checksum in `0..=9`. An empty line yields `0`.
pub fn compute(line: &str) -> u8 {
    let mut chars = line.chars();
    chars.next_back();

    let sum: u32 = chars
        .map(|c| match c {
            '-' => 1,
            c => c.to_digit(10).unwrap_or(0),
        })
        .sum();

    (sum % 10) as u8
}

/// Check the trailing checksum digit of a TLE line against its computed checksum.
///
/// Arguments
/// -----------------
/// * `line` – A TLE line whose last character is the checksum digit.
///
/// Return
/// ----------
/// * `Ok(())` when the stored digit matches.
/// * [`TleError::ChecksumError`] with `expected` the stored digit and `actual` the
///   value computed over the rest of the line.
/// * [`TleError::TooShortString`] for an empty line, [`TleError::InvalidFormat`] when the
///   last character is not a digit.
pub fn verify(line: &str) -> Result<(), TleError> {
    let last = line
        .chars()
        .next_back()
        .ok_or_else(|| TleError::TooShortString(line.to_string()))?;

    let expected = last
        .to_digit(10)
        .ok_or_else(|| TleError::InvalidFormat(line.to_string()))? as u8;
    let actual = compute(line);

    if expected != actual {
        return Err(TleError::ChecksumError {
            line: line.to_string(),
            expected,
            actual,
        });
    }
    Ok(())
}

#[cfg(test)]
mod checksum_test {
    use super::*;

    const ISS_LINE1: &str =
        "1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927";
    const ISS_LINE2: &str =
        "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537";

    #[test]
    fn test_compute() {
        assert_eq!(compute(ISS_LINE1), 7);
        assert_eq!(compute(ISS_LINE2), 7);
        assert_eq!(compute(""), 0);
        assert_eq!(compute("5"), 0);
        // '-' counts as 1, '+' and letters as 0
        assert_eq!(compute("--+AB.9 0"), 1);
    }

    #[test]
    fn test_verify_valid_lines() {
        assert!(verify(ISS_LINE1).is_ok());
        assert!(verify(ISS_LINE2).is_ok());
    }

    #[test]
    fn test_verify_corrupted_digit() {
        let corrupted = format!("{}8", &ISS_LINE1[..68]);
        assert_eq!(
            verify(&corrupted),
            Err(TleError::ChecksumError {
                line: corrupted.clone(),
                expected: 8,
                actual: 7,
            })
        );
    }

    #[test]
    fn test_verify_bad_trailing_character() {
        let line = format!("{}X", &ISS_LINE1[..68]);
        assert_eq!(verify(&line), Err(TleError::InvalidFormat(line.clone())));
        assert_eq!(verify(""), Err(TleError::TooShortString(String::new())));
    }
}
