//! # Constants and shared types for TLE reading
//!
//! Line widths of the fixed-column format and the [`FileFormat`] mode that tells a
//! [`TleStream`](crate::tle_stream::TleStream) how many raw lines make up one record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::tle_errors::TleError;

// -------------------------------------------------------------------------------------------------
// Line geometry
// -------------------------------------------------------------------------------------------------

/// Nominal maximum width of a TLE text line
pub const TLE_LINE_LENGTH: usize = 72;

/// Number of significant columns of a TLE data line (the last one holds the checksum)
pub const TLE_DATA_LINE_WIDTH: usize = 69;

/// Two-digit epoch and launch years at or above this pivot belong to the 1900s
pub const TLE_CENTURY_PIVOT: i64 = 57;

// -------------------------------------------------------------------------------------------------
// File format
// -------------------------------------------------------------------------------------------------

/// Layout of a TLE file: bare data line pairs, or a title line before each pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileFormat {
    TwoLines,
    ThreeLines,
}

impl FileFormat {
    /// Number of raw lines consumed per record.
    pub fn lines_per_record(self) -> usize {
        match self {
            FileFormat::TwoLines => 2,
            FileFormat::ThreeLines => 3,
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileFormat::TwoLines => write!(f, "2le"),
            FileFormat::ThreeLines => write!(f, "3le"),
        }
    }
}

/// Parse a format selector such as `"2le"`, `"tle"` or `"3le"` (case insensitive).
impl FromStr for FileFormat {
    type Err = TleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "2le" | "tle" | "two" | "2" => Ok(FileFormat::TwoLines),
            "3le" | "three" | "3" => Ok(FileFormat::ThreeLines),
            _ => Err(TleError::InvalidFormat(s.to_string())),
        }
    }
}

#[cfg(test)]
mod constants_test {
    use super::*;

    #[test]
    fn test_lines_per_record() {
        assert_eq!(FileFormat::TwoLines.lines_per_record(), 2);
        assert_eq!(FileFormat::ThreeLines.lines_per_record(), 3);
    }

    #[test]
    fn test_file_format_from_str() {
        assert_eq!("3LE".parse::<FileFormat>().unwrap(), FileFormat::ThreeLines);
        assert_eq!("tle".parse::<FileFormat>().unwrap(), FileFormat::TwoLines);
        assert_eq!(
            "csv".parse::<FileFormat>(),
            Err(TleError::InvalidFormat("csv".into()))
        );
        assert_eq!(FileFormat::ThreeLines.to_string(), "3le");
    }
}
