use thiserror::Error;

#[derive(Error, Debug)]
pub enum TleError {
    #[error("Too short string: {0}")]
    TooShortString(String),

    #[error("Invalid element format in line: \"{0}\".")]
    InvalidFormat(String),

    #[error(
        "Invalid checksum in line \"{line}\". Expected checksum: {expected}. Actual checksum: {actual}."
    )]
    ChecksumError {
        line: String,
        expected: u8,
        actual: u8,
    },

    #[error("Unable to read TLE source: {0}")]
    IoError(#[from] std::io::Error),
}

impl TleError {
    /// The line that caused the error, if the error comes from parsing.
    pub fn line(&self) -> Option<&str> {
        match self {
            TleError::TooShortString(line)
            | TleError::InvalidFormat(line)
            | TleError::ChecksumError { line, .. } => Some(line),
            TleError::IoError(_) => None,
        }
    }
}

impl PartialEq for TleError {
    fn eq(&self, other: &Self) -> bool {
        use TleError::*;
        match (self, other) {
            (TooShortString(a), TooShortString(b)) => a == b,
            (InvalidFormat(a), InvalidFormat(b)) => a == b,
            (
                ChecksumError {
                    line: la,
                    expected: ea,
                    actual: aa,
                },
                ChecksumError {
                    line: lb,
                    expected: eb,
                    actual: ab,
                },
            ) => la == lb && ea == eb && aa == ab,

            // io::Error is not comparable: same variant means equal
            (IoError(_), IoError(_)) => true,

            _ => false,
        }
    }
}

#[cfg(test)]
mod tle_errors_test {
    use super::*;

    #[test]
    fn test_checksum_message_reports_both_values() {
        let err = TleError::ChecksumError {
            line: "1 25544U".into(),
            expected: 8,
            actual: 7,
        };
        assert_eq!(
            err.to_string(),
            "Invalid checksum in line \"1 25544U\". Expected checksum: 8. Actual checksum: 7."
        );
    }

    #[test]
    fn test_line_accessor() {
        assert_eq!(
            TleError::TooShortString("abc".into()).line(),
            Some("abc")
        );
        assert_eq!(
            TleError::InvalidFormat("1 2X544U".into()).line(),
            Some("1 2X544U")
        );
        let io = TleError::from(std::io::Error::other("broken pipe"));
        assert_eq!(io.line(), None);
    }

    #[test]
    fn test_io_errors_compare_by_variant() {
        let a = TleError::from(std::io::Error::other("a"));
        let b = TleError::from(std::io::Error::other("b"));
        assert_eq!(a, b);
        assert_ne!(a, TleError::InvalidFormat("a".into()));
    }
}
