//! # tle-reader
//!
//! Reader for **Two-Line Element** (TLE) satellite ephemeris records.
//!
//! * [`checksum`] – modulo-10 line checksum.
//! * [`fields`] – fixed-column extraction and strict numeric conversions.
//! * [`tle_record`] – the parsed [`TleRecord`] and its column layout.
//! * [`tle_stream`] – [`TleStream`], grouping raw lines of a [`BufRead`](std::io::BufRead)
//!   source into records.
//!
//! ```rust
//! use std::io::Cursor;
//! use tle_reader::{FileFormat, TleStream};
//!
//! let data = "1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927\n\
//!             2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537\n";
//! let mut source = Cursor::new(data);
//! let records: Vec<_> = TleStream::new(&mut source, FileFormat::TwoLines)
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].inclination, 51.6416);
//! ```
pub mod checksum;
pub mod constants;
pub mod fields;
pub mod time;
pub mod tle_errors;
pub mod tle_record;
pub mod tle_stream;

pub use constants::FileFormat;
pub use tle_errors::TleError;
pub use tle_record::{Classification, InternationalDesignator, TleRecord};
pub use tle_stream::TleStream;
