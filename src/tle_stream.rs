//! # TLE record stream
//!
//! [`TleStream`] pulls successive records out of a borrowed line-oriented source.
//!
//! ## Overview
//! -----------------
//! * The source is any [`BufRead`], borrowed mutably for the lifetime of the stream. The
//!   stream never owns, closes or buffers it beyond the source's own buffer.
//! * [`FileFormat`] is fixed at construction and decides whether a record spans two or
//!   three lines.
//! * The strictness flag (lenient by default) decides whether checksum mismatches are
//!   errors. It can be toggled between reads with [`TleStream::set_strict`].
//!
//! ## Error policy
//! -----------------
//! A read always consumes the full number of lines of a record before parsing. When the
//! input ends mid-record the missing lines are parsed as empty strings, so the failure
//! surfaces as [`TleError::TooShortString`]. Bytes that are not valid UTF-8 are decoded
//! lossily: in a title they are kept as U+FFFD, in a data line they end up as
//! [`TleError::InvalidFormat`]. Parse errors are per record: the next call continues with
//! the following lines. Read failures of the source are returned as [`TleError::IoError`]
//! once every line of the record has been attempted.
//!
//! ## Example
//! -----------------
//! ```rust
//! use std::io::Cursor;
//! use tle_reader::{FileFormat, TleStream};
//!
//! let data = "ISS (ZARYA)
//! 1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927
//! 2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537
//! ";
//! let mut source = Cursor::new(data);
//! let mut stream = TleStream::new(&mut source, FileFormat::ThreeLines);
//! stream.set_strict(true);
//!
//! while stream.has_more() {
//!     let record = stream.read_next().unwrap();
//!     assert_eq!(record.satellite_number, 25544);
//! }
//! ```
use std::io::BufRead;

use crate::{
    constants::{FileFormat, TLE_LINE_LENGTH},
    tle_errors::TleError,
    tle_record::TleRecord,
};

/// Sequential reader of TLE records over a borrowed source.
pub struct TleStream<'a, R: BufRead + ?Sized> {
    source: &'a mut R,
    file_format: FileFormat,
    strict: bool,
}

impl<'a, R: BufRead + ?Sized> TleStream<'a, R> {
    /// Create a lenient stream over `source`.
    pub fn new(source: &'a mut R, file_format: FileFormat) -> Self {
        TleStream {
            source,
            file_format,
            strict: false,
        }
    }

    /// Record layout (two or three lines) this stream reads.
    pub fn file_format(&self) -> FileFormat {
        self.file_format
    }

    /// Whether checksum mismatches are currently errors.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Enable or disable checksum enforcement for the following reads.
    ///
    /// Return
    /// ----------
    /// * The previous value of the flag.
    pub fn set_strict(&mut self, enabled: bool) -> bool {
        std::mem::replace(&mut self.strict, enabled)
    }

    /// Whether the source still has unread content.
    ///
    /// Peeks the source buffer without consuming it. A read error counts as exhaustion.
    pub fn has_more(&mut self) -> bool {
        match self.source.fill_buf() {
            Ok(buf) => {
                if buf.is_empty() {
                    log::trace!("TLE source exhausted");
                }
                !buf.is_empty()
            }
            Err(err) => {
                log::trace!("TLE source unreadable: {err}");
                false
            }
        }
    }

    /// Read the lines of one record and parse them.
    ///
    /// Return
    /// ----------
    /// * The parsed [`TleRecord`], or the first error met while reading or parsing.
    pub fn read_next(&mut self) -> Result<TleRecord, TleError> {
        let lines_per_record = self.file_format.lines_per_record();
        let mut lines = Vec::with_capacity(lines_per_record);
        let mut read_error = None;

        // The whole group is consumed even when one line fails, so the next call starts
        // on the following record.
        for _ in 0..lines_per_record {
            match self.next_line() {
                Ok(line) => lines.push(line),
                Err(err) => {
                    read_error.get_or_insert(err);
                    lines.push(String::new());
                }
            }
        }
        if let Some(err) = read_error {
            return Err(err);
        }

        let record = match self.file_format {
            FileFormat::TwoLines => TleRecord::from_two_lines(&lines[0], &lines[1], self.strict),
            FileFormat::ThreeLines => {
                TleRecord::from_three_lines(&lines[0], &lines[1], &lines[2], self.strict)
            }
        }?;

        log::debug!(
            "read TLE record for satellite {} (epoch {} day {})",
            record.satellite_number,
            record.epoch_year,
            record.epoch_day
        );
        Ok(record)
    }

    /// Next raw line without its terminator; empty once the source is exhausted.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD.
    fn next_line(&mut self) -> Result<String, TleError> {
        let mut bytes = Vec::new();
        self.source.read_until(b'\n', &mut bytes)?;

        while matches!(bytes.last(), Some(b'\n' | b'\r')) {
            bytes.pop();
        }
        let line = match String::from_utf8(bytes) {
            Ok(line) => line,
            Err(err) => {
                let line = String::from_utf8_lossy(err.as_bytes()).into_owned();
                log::warn!("undecodable bytes replaced in line: {line}");
                line
            }
        };

        if line.chars().count() > TLE_LINE_LENGTH {
            log::warn!("line wider than {TLE_LINE_LENGTH} columns: {line}");
        }
        Ok(line)
    }
}

impl<R: BufRead + ?Sized> Iterator for TleStream<'_, R> {
    type Item = Result<TleRecord, TleError>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_more() {
            return None;
        }
        Some(self.read_next())
    }
}
