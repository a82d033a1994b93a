use hifitime::Epoch;

use crate::constants::TLE_CENTURY_PIVOT;

/// Expand a two-digit TLE year into a full year
///
/// Argument
/// --------
/// * `two_digit_year`: the year as written in the TLE (`0..=99`)
///
/// Return
/// ------
/// * the full year: `57..=99` map to 1957–1999, `0..=56` to 2000–2056
pub fn full_year(two_digit_year: i64) -> i32 {
    if two_digit_year >= TLE_CENTURY_PIVOT {
        1900 + two_digit_year as i32
    } else {
        2000 + two_digit_year as i32
    }
}

/// Transformation from a TLE epoch (year, fractional day of year) to a UTC epoch
///
/// Argument
/// --------
/// * `year`: the full year
/// * `day_of_year`: day of year with fraction, day 1.0 being January 1st at 00:00 UTC
///
/// Return
/// ------
/// * the epoch in the UTC time scale
pub fn tle_epoch_to_epoch(year: i32, day_of_year: f64) -> Epoch {
    let new_year = Epoch::from_gregorian_utc_at_midnight(year, 1, 1).to_mjd_utc_days();
    Epoch::from_mjd_utc(new_year + day_of_year - 1.0)
}

/// Transformation from a TLE epoch to modified julian date (MJD) in the UTC frame
pub fn tle_epoch_to_mjd(year: i32, day_of_year: f64) -> f64 {
    tle_epoch_to_epoch(year, day_of_year).to_mjd_utc_days()
}

#[cfg(test)]
mod time_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_full_year() {
        assert_eq!(full_year(57), 1957);
        assert_eq!(full_year(98), 1998);
        assert_eq!(full_year(0), 2000);
        assert_eq!(full_year(8), 2008);
        assert_eq!(full_year(56), 2056);
    }

    #[test]
    fn test_tle_epoch_to_mjd() {
        let mjd = tle_epoch_to_mjd(2008, 264.51782528);
        assert_relative_eq!(mjd, 54729.51782528, epsilon = 1e-8);

        let mjd = tle_epoch_to_mjd(1980, 275.98708465);
        assert_relative_eq!(mjd, 44513.98708465, epsilon = 1e-8);

        let mjd = tle_epoch_to_mjd(2021, 1.0);
        assert_relative_eq!(mjd, 59215.0, epsilon = 1e-9);
    }

    #[test]
    fn test_tle_epoch_to_epoch() {
        let epoch = tle_epoch_to_epoch(2021, 1.5);
        let (y, m, d, h, min, s, _) = epoch.to_gregorian_utc();
        assert_eq!((y, m, d, h, min, s), (2021, 1, 1, 12, 0, 0));
    }
}
