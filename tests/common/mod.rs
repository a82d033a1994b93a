use std::fs::File;
use std::io::BufReader;

use approx::assert_relative_eq;
use tle_reader::TleRecord;

pub fn open_fixture(name: &str) -> BufReader<File> {
    let path = format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"));
    BufReader::new(File::open(&path).unwrap_or_else(|_| panic!("missing fixture {path}")))
}

/// Compare the orbital elements of two records.
pub fn assert_elements_close(actual: &TleRecord, expected: &TleRecord, epsilon: f64) {
    assert_eq!(actual.satellite_number, expected.satellite_number);
    assert_relative_eq!(actual.epoch_day, expected.epoch_day, epsilon = epsilon);
    assert_relative_eq!(actual.mean_motion_dot, expected.mean_motion_dot, epsilon = epsilon);
    assert_relative_eq!(actual.mean_motion_ddot, expected.mean_motion_ddot, epsilon = epsilon);
    assert_relative_eq!(actual.bstar, expected.bstar, epsilon = epsilon);
    assert_relative_eq!(actual.inclination, expected.inclination, epsilon = epsilon);
    assert_relative_eq!(actual.right_ascension, expected.right_ascension, epsilon = epsilon);
    assert_relative_eq!(actual.eccentricity, expected.eccentricity, epsilon = epsilon);
    assert_relative_eq!(
        actual.argument_of_perigee,
        expected.argument_of_perigee,
        epsilon = epsilon
    );
    assert_relative_eq!(actual.mean_anomaly, expected.mean_anomaly, epsilon = epsilon);
    assert_relative_eq!(actual.mean_motion, expected.mean_motion, epsilon = epsilon);
    assert_eq!(actual.revolution_number, expected.revolution_number);
}
