//! # TLE record
//!
//! The parsed form of one Two-Line Element set: an optional title line and the typed
//! fields of the two data lines.
//!
//! ## Parsing order
//! -----------------
//! 1. **Width check** – every field column range of line 1, then of line 2, is checked in
//!    increasing column order. The first range running past the end of its line yields
//!    [`TleError::TooShortString`].
//! 2. **Conversion** – line 1 fields are converted in column order, then its checksum is
//!    verified (strict mode only); line 2 follows the same steps. The first failing field
//!    yields [`TleError::InvalidFormat`] carrying the whole line.
//!
//! A record is only produced when every step succeeds; [`TleRecord::assign_two_line`] and
//! [`TleRecord::assign_three_line`] leave the receiver untouched on error.
//!
//! ## Units
//! -----------------
//! Angles are kept in **degrees** and mean motion in **revolutions per day**, as written
//! in the TLE. The epoch is available as a [`hifitime::Epoch`] (UTC) or as MJD (UTC).
use std::fmt;

use hifitime::Epoch;
use serde::{Deserialize, Serialize};

use crate::{
    checksum,
    constants::{FileFormat, TLE_DATA_LINE_WIDTH},
    fields::{
        substring, to_char, to_exponential, to_fixed_point, to_implied_decimal, to_piece,
        to_unsigned,
    },
    time::{full_year, tle_epoch_to_epoch},
    tle_errors::TleError,
};

/// Column range of a field: first column (1-indexed) and width.
#[derive(Debug, Clone, Copy)]
struct Field {
    start: usize,
    len: usize,
}

impl Field {
    const fn new(start: usize, len: usize) -> Self {
        Field { start, len }
    }

    fn extract(self, line: &str) -> Result<&str, TleError> {
        substring(line, self.start, self.len)
    }
}

mod line1_fields {
    use super::Field;

    pub(super) const LINE_NUMBER: Field = Field::new(1, 1);
    pub(super) const SATELLITE_NUMBER: Field = Field::new(3, 5);
    pub(super) const CLASSIFICATION: Field = Field::new(8, 1);
    pub(super) const DESIGNATOR: Field = Field::new(10, 8);
    pub(super) const LAUNCH_YEAR: Field = Field::new(10, 2);
    pub(super) const LAUNCH_NUMBER: Field = Field::new(12, 3);
    pub(super) const PIECE: Field = Field::new(15, 3);
    pub(super) const EPOCH_YEAR: Field = Field::new(19, 2);
    pub(super) const EPOCH_DAY: Field = Field::new(21, 12);
    pub(super) const MEAN_MOTION_DOT: Field = Field::new(34, 10);
    pub(super) const MEAN_MOTION_DDOT: Field = Field::new(45, 8);
    pub(super) const BSTAR: Field = Field::new(54, 8);
    pub(super) const EPHEMERIS_TYPE: Field = Field::new(63, 1);
    pub(super) const ELEMENT_SET_NUMBER: Field = Field::new(65, 4);
    pub(super) const CHECKSUM: Field = Field::new(69, 1);

    pub(super) const LAYOUT: [Field; 14] = [
        LINE_NUMBER,
        SATELLITE_NUMBER,
        CLASSIFICATION,
        LAUNCH_YEAR,
        LAUNCH_NUMBER,
        PIECE,
        EPOCH_YEAR,
        EPOCH_DAY,
        MEAN_MOTION_DOT,
        MEAN_MOTION_DDOT,
        BSTAR,
        EPHEMERIS_TYPE,
        ELEMENT_SET_NUMBER,
        CHECKSUM,
    ];
}

mod line2_fields {
    use super::Field;

    pub(super) const LINE_NUMBER: Field = Field::new(1, 1);
    pub(super) const SATELLITE_NUMBER: Field = Field::new(3, 5);
    pub(super) const INCLINATION: Field = Field::new(9, 8);
    pub(super) const RIGHT_ASCENSION: Field = Field::new(18, 8);
    pub(super) const ECCENTRICITY: Field = Field::new(27, 7);
    pub(super) const ARGUMENT_OF_PERIGEE: Field = Field::new(35, 8);
    pub(super) const MEAN_ANOMALY: Field = Field::new(44, 8);
    pub(super) const MEAN_MOTION: Field = Field::new(53, 11);
    pub(super) const REVOLUTION_NUMBER: Field = Field::new(64, 5);
    pub(super) const CHECKSUM: Field = Field::new(69, 1);

    pub(super) const LAYOUT: [Field; 10] = [
        LINE_NUMBER,
        SATELLITE_NUMBER,
        INCLINATION,
        RIGHT_ASCENSION,
        ECCENTRICITY,
        ARGUMENT_OF_PERIGEE,
        MEAN_ANOMALY,
        MEAN_MOTION,
        REVOLUTION_NUMBER,
        CHECKSUM,
    ];
}

/// Security classification of an element set (line 1, column 8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Classification {
    #[default]
    Unclassified,
    Classified,
    Secret,
}

impl TryFrom<char> for Classification {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'U' => Ok(Classification::Unclassified),
            'C' => Ok(Classification::Classified),
            'S' => Ok(Classification::Secret),
            other => Err(other),
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Classification::Unclassified => 'U',
            Classification::Classified => 'C',
            Classification::Secret => 'S',
        };
        write!(f, "{c}")
    }
}

/// COSPAR international designator (line 1, columns 10–17).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InternationalDesignator {
    /// Last two digits of the launch year
    pub launch_year: u8,
    /// Launch number of the year
    pub launch_number: u16,
    /// Piece of the launch (`A`, `B`, ..., `ZZZ`)
    pub piece: String,
}

impl InternationalDesignator {
    /// Four-digit launch year, with the same century pivot as the epoch year.
    pub fn full_launch_year(&self) -> i32 {
        full_year(self.launch_year as i64)
    }
}

impl fmt::Display for InternationalDesignator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{:03}{}",
            self.full_launch_year(),
            self.launch_number,
            self.piece
        )
    }
}

/// A parsed Two-Line Element set.
///
/// Units:
/// * `epoch_day`: day of year with fraction (1.0 = January 1st, 00:00 UTC)
/// * `mean_motion_dot`: first derivative of mean motion divided by 2, rev/day²
/// * `mean_motion_ddot`: second derivative of mean motion divided by 6, rev/day³
/// * `bstar`: B* drag term, 1/earth radii
/// * `inclination`, `right_ascension`, `argument_of_perigee`, `mean_anomaly`: degrees
/// * `eccentricity`: unitless
/// * `mean_motion`: revolutions per day
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TleRecord {
    pub title: Option<String>,
    pub satellite_number: u32,
    pub classification: Classification,
    pub designator: Option<InternationalDesignator>,
    pub epoch_year: i32,
    pub epoch_day: f64,
    pub mean_motion_dot: f64,
    pub mean_motion_ddot: f64,
    pub bstar: f64,
    pub ephemeris_type: u8,
    pub element_set_number: u16,
    pub inclination: f64,
    pub right_ascension: f64,
    pub eccentricity: f64,
    pub argument_of_perigee: f64,
    pub mean_anomaly: f64,
    pub mean_motion: f64,
    pub revolution_number: u32,
}

impl TleRecord {
    /// Parse a record made of two data lines.
    ///
    /// Arguments
    /// -----------------
    /// * `line1`, `line2` – The data lines, without line terminator.
    /// * `enforce_checksum` – When `true`, a checksum mismatch on either line is an error;
    ///   when `false`, checksums are not checked at all.
    ///
    /// Return
    /// ----------
    /// * The parsed record, or the first [`TleError`] met (`TooShortString`, `InvalidFormat`
    ///   or `ChecksumError`).
    pub fn from_two_lines(
        line1: &str,
        line2: &str,
        enforce_checksum: bool,
    ) -> Result<Self, TleError> {
        Self::parse(None, line1, line2, enforce_checksum)
    }

    /// Parse a record made of a title line followed by two data lines.
    ///
    /// The title is kept verbatim; it carries no checksum and no column layout.
    pub fn from_three_lines(
        title: &str,
        line1: &str,
        line2: &str,
        enforce_checksum: bool,
    ) -> Result<Self, TleError> {
        Self::parse(Some(title), line1, line2, enforce_checksum)
    }

    /// Replace `self` with the record parsed from two data lines.
    ///
    /// On error `self` is left unchanged.
    pub fn assign_two_line(
        &mut self,
        line1: &str,
        line2: &str,
        enforce_checksum: bool,
    ) -> Result<(), TleError> {
        *self = Self::from_two_lines(line1, line2, enforce_checksum)?;
        Ok(())
    }

    /// Replace `self` with the record parsed from a title and two data lines.
    ///
    /// On error `self` is left unchanged.
    pub fn assign_three_line(
        &mut self,
        title: &str,
        line1: &str,
        line2: &str,
        enforce_checksum: bool,
    ) -> Result<(), TleError> {
        *self = Self::from_three_lines(title, line1, line2, enforce_checksum)?;
        Ok(())
    }

    /// Epoch of the element set in the UTC time scale.
    pub fn epoch(&self) -> Epoch {
        tle_epoch_to_epoch(self.epoch_year, self.epoch_day)
    }

    /// Epoch of the element set as modified julian date (UTC).
    pub fn epoch_mjd(&self) -> f64 {
        self.epoch().to_mjd_utc_days()
    }

    /// Satellite name from the title line, trimmed and without the `0 ` prefix of
    /// three-line catalog dumps.
    pub fn satellite_name(&self) -> Option<&str> {
        let title = self.title.as_deref()?.trim();
        let name = title.strip_prefix("0 ").unwrap_or(title).trim_start();
        (!name.is_empty()).then_some(name)
    }

    /// Layout the record was read from.
    pub fn file_format(&self) -> FileFormat {
        if self.title.is_some() {
            FileFormat::ThreeLines
        } else {
            FileFormat::TwoLines
        }
    }

    fn parse(
        title: Option<&str>,
        line1: &str,
        line2: &str,
        enforce_checksum: bool,
    ) -> Result<Self, TleError> {
        check_width(line1, &line1_fields::LAYOUT)?;
        check_width(line2, &line2_fields::LAYOUT)?;

        // line 1
        expect_line_number(line1, line1_fields::LINE_NUMBER, 1)?;
        let satellite_number: u32 =
            unsigned(line1_fields::SATELLITE_NUMBER.extract(line1)?, line1)?;

        let classification = Classification::try_from(to_char(
            line1_fields::CLASSIFICATION.extract(line1)?,
            line1,
        )?)
        .map_err(|_| TleError::InvalidFormat(line1.to_string()))?;

        let designator = if line1_fields::DESIGNATOR.extract(line1)?.trim().is_empty() {
            None
        } else {
            Some(InternationalDesignator {
                launch_year: two_digit_year(line1_fields::LAUNCH_YEAR.extract(line1)?, line1)?,
                launch_number: unsigned(line1_fields::LAUNCH_NUMBER.extract(line1)?, line1)?,
                piece: to_piece(line1_fields::PIECE.extract(line1)?, line1)?,
            })
        };

        let epoch_year = two_digit_year(line1_fields::EPOCH_YEAR.extract(line1)?, line1)?;
        let epoch_year = full_year(epoch_year as i64);
        let epoch_day = to_fixed_point(line1_fields::EPOCH_DAY.extract(line1)?, line1)?;
        if !(1.0..367.0).contains(&epoch_day) {
            return Err(TleError::InvalidFormat(line1.to_string()));
        }

        let mean_motion_dot = to_fixed_point(line1_fields::MEAN_MOTION_DOT.extract(line1)?, line1)?;
        let mean_motion_ddot =
            to_exponential(line1_fields::MEAN_MOTION_DDOT.extract(line1)?, line1)?;
        let bstar = to_exponential(line1_fields::BSTAR.extract(line1)?, line1)?;

        // Some historical element sets leave the ephemeris type blank
        let ephemeris_type: u8 = match line1_fields::EPHEMERIS_TYPE.extract(line1)? {
            " " => 0,
            text => unsigned(text, line1)?,
        };
        let element_set_number: u16 =
            unsigned(line1_fields::ELEMENT_SET_NUMBER.extract(line1)?, line1)?;

        if enforce_checksum {
            verify_checksum(line1)?;
        }

        // line 2
        expect_line_number(line2, line2_fields::LINE_NUMBER, 2)?;
        let satellite_number_2: u32 =
            unsigned(line2_fields::SATELLITE_NUMBER.extract(line2)?, line2)?;
        if satellite_number_2 != satellite_number {
            return Err(TleError::InvalidFormat(line2.to_string()));
        }

        let inclination = to_fixed_point(line2_fields::INCLINATION.extract(line2)?, line2)?;
        let right_ascension = to_fixed_point(line2_fields::RIGHT_ASCENSION.extract(line2)?, line2)?;
        let eccentricity = to_implied_decimal(line2_fields::ECCENTRICITY.extract(line2)?, line2)?;
        let argument_of_perigee =
            to_fixed_point(line2_fields::ARGUMENT_OF_PERIGEE.extract(line2)?, line2)?;
        let mean_anomaly = to_fixed_point(line2_fields::MEAN_ANOMALY.extract(line2)?, line2)?;
        let mean_motion = to_fixed_point(line2_fields::MEAN_MOTION.extract(line2)?, line2)?;
        let revolution_number: u32 =
            unsigned(line2_fields::REVOLUTION_NUMBER.extract(line2)?, line2)?;

        if enforce_checksum {
            verify_checksum(line2)?;
        }

        Ok(TleRecord {
            title: title.map(str::to_string),
            satellite_number,
            classification,
            designator,
            epoch_year,
            epoch_day,
            mean_motion_dot,
            mean_motion_ddot,
            bstar,
            ephemeris_type,
            element_set_number,
            inclination,
            right_ascension,
            eccentricity,
            argument_of_perigee,
            mean_anomaly,
            mean_motion,
            revolution_number,
        })
    }
}

/// Check that every field of `layout` fits in `line`, in increasing column order.
fn check_width(line: &str, layout: &[Field]) -> Result<(), TleError> {
    layout.iter().try_for_each(|field| field.extract(line).map(|_| ()))
}

fn expect_line_number(line: &str, field: Field, expected: u64) -> Result<(), TleError> {
    if to_unsigned(field.extract(line)?, line)? != expected {
        return Err(TleError::InvalidFormat(line.to_string()));
    }
    Ok(())
}

/// Unsigned field that must fit the target type.
fn unsigned<T: TryFrom<u64>>(text: &str, line: &str) -> Result<T, TleError> {
    let value = to_unsigned(text, line)?;
    T::try_from(value).map_err(|_| TleError::InvalidFormat(line.to_string()))
}

fn two_digit_year(text: &str, line: &str) -> Result<u8, TleError> {
    let year: u8 = unsigned(text, line)?;
    if year > 99 {
        return Err(TleError::InvalidFormat(line.to_string()));
    }
    Ok(year)
}

/// Verify the checksum over the data columns of `line`, reporting errors on the full line.
fn verify_checksum(line: &str) -> Result<(), TleError> {
    let data = substring(line, 1, TLE_DATA_LINE_WIDTH)?;
    checksum::verify(data).map_err(|err| match err {
        TleError::ChecksumError {
            expected, actual, ..
        } => {
            log::warn!("checksum mismatch (expected {expected}, computed {actual}): {line}");
            TleError::ChecksumError {
                line: line.to_string(),
                expected,
                actual,
            }
        }
        _ => TleError::InvalidFormat(line.to_string()),
    })
}
