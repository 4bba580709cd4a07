//! Solar position: where the sun sits in the sky for an instant and place.
//!
//! A thin adapter over the `suncalc` crate, taking a `time::OffsetDateTime`
//! instead of raw Unix milliseconds. Angles are radians. Azimuth is measured
//! from south, positive toward west; altitude is positive above the horizon.

use suncalc::Timestamp;
use time::OffsetDateTime;

/// The sun's apparent position for an observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Direction along the horizon, radians from south (positive west).
    pub azimuth: f64,
    /// Elevation above the horizon, radians. Negative at night.
    pub altitude: f64,
}

/// Compute the sun's position at `at` for an observer at `latitude`,
/// `longitude` (degrees, north and east positive).
///
/// Only the instant matters: the UTC offset carried by `at` does not
/// affect the result.
#[must_use]
pub fn position(at: OffsetDateTime, latitude: f64, longitude: f64) -> SolarPosition {
    let sun = suncalc::get_position(Timestamp(unix_millis(at)), latitude, longitude);
    SolarPosition {
        azimuth: sun.azimuth,
        altitude: sun.altitude,
    }
}

fn unix_millis(at: OffsetDateTime) -> i64 {
    at.unix_timestamp() * 1000 + i64::from(at.millisecond())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{datetime, offset};

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    #[test]
    fn reference_position_kyiv() {
        // Published reference vector for 50.5°N 30.5°E.
        let pos = position(datetime!(2013-03-05 0:00 UTC), 50.5, 30.5);
        assert!(approx_eq(pos.azimuth, -2.500_317_590_716_838_5, 1e-9), "azimuth {}", pos.azimuth);
        assert!(approx_eq(pos.altitude, -0.700_040_683_878_161_1, 1e-9), "altitude {}", pos.altitude);
    }

    #[test]
    fn millis_keep_subsecond_part() {
        assert_eq!(unix_millis(datetime!(1970-01-01 0:00:01.250 UTC)), 1250);
        assert_eq!(unix_millis(datetime!(1969-12-31 23:59:59 UTC)), -1000);
    }

    #[test]
    fn equinox_noon_at_equator_is_overhead() {
        let pos = position(datetime!(2024-03-20 12:00 UTC), 0.0, 0.0);
        assert!(pos.altitude.to_degrees() > 85.0, "altitude {}", pos.altitude.to_degrees());
    }

    #[test]
    fn equinox_midnight_at_equator_is_below() {
        let pos = position(datetime!(2024-03-20 0:00 UTC), 0.0, 0.0);
        assert!(pos.altitude.to_degrees() < -85.0, "altitude {}", pos.altitude.to_degrees());
    }

    #[test]
    fn morning_sun_is_in_the_east() {
        // East is negative azimuth.
        let pos = position(datetime!(2024-03-20 8:00 UTC), 0.0, 0.0);
        assert!(pos.azimuth < 0.0);
    }

    #[test]
    fn offset_does_not_change_instant() {
        let utc = datetime!(2024-06-21 2:00 UTC);
        let sydney = utc.to_offset(offset!(+10));
        assert_eq!(position(utc, -33.9, 151.2), position(sydney, -33.9, 151.2));
    }

    #[test]
    fn longitude_shifts_solar_noon() {
        // 12:00 local at +150° is 02:00 UTC.
        let pos = position(datetime!(2024-03-20 2:00 UTC), 0.0, 150.0);
        assert!(pos.altitude.to_degrees() > 85.0);
    }
}
