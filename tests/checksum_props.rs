use proptest::prelude::*;
use tle_reader::{checksum, TleError};

proptest! {
    /// compute never changes its input and always yields the same digit
    #[test]
    fn test_compute_is_pure(line in "[0-9A-Z .+-]{1,72}") {
        let copy = line.clone();
        let first = checksum::compute(&line);

        prop_assert!(first < 10);
        prop_assert_eq!(first, checksum::compute(&line));
        prop_assert_eq!(line, copy);
    }

    /// any wrong trailing digit is reported with both values
    #[test]
    fn test_corrupted_digit_is_detected(body in "[0-9A-Z .+-]{68}", shift in 1u8..10) {
        let good = checksum::compute(&format!("{body}0"));
        let good_line = format!("{body}{good}");
        prop_assert!(checksum::verify(&good_line).is_ok());

        let digit = (good + shift) % 10;
        let corrupted = format!("{body}{digit}");
        match checksum::verify(&corrupted) {
            Err(TleError::ChecksumError { line, expected, actual }) => {
                prop_assert_eq!(line, corrupted);
                prop_assert_eq!(expected, digit);
                prop_assert_eq!(actual, good);
                prop_assert_ne!(expected, actual);
            }
            other => prop_assert!(false, "unexpected result {:?}", other),
        }
    }

    /// letters, spaces, periods and plus signs weigh nothing
    #[test]
    fn test_non_digits_count_zero(body in "[A-Z .+]{0,68}") {
        let line = format!("{body}0");
        prop_assert_eq!(checksum::compute(&line), 0);
    }
}
