//! Daylight temperature: from an instant to a Kelvin value.
//!
//! The sun's altitude drives a warm-to-cool ramp, clamped between
//! [`MIN_TEMPERATURE_KELVINS`] and [`MAX_TEMPERATURE_KELVINS`]:
//!
//! ```text
//! kelvin = clamp(altitude × RANGE / (π/8), 3500, 6500)
//! ```
//!
//! The ramp is proportional to altitude, not offset from the floor, so
//! anything below ~26° of altitude reads as night-warm and anything above
//! ~49° as full daylight.
//!
//! Without an explicit [`Observer`], the observer sits on the equator at
//! the longitude implied by the date-time's UTC offset (15° per hour).

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::trace;

use crate::solar;

/// Warmest temperature, used at night.
pub const MIN_TEMPERATURE_KELVINS: f64 = 3500.0;

/// Coolest temperature, used in full daylight.
pub const MAX_TEMPERATURE_KELVINS: f64 = 6500.0;

/// Span between the warmest and coolest temperatures.
pub const TEMPERATURE_RANGE: f64 = MAX_TEMPERATURE_KELVINS - MIN_TEMPERATURE_KELVINS;

/// Sun altitude (radians) that normalizes the ramp: π/8, i.e. 22.5°.
pub const MAX_TEMPERATURE_ALTITUDE: f64 = PI / 2.0 / 4.0;

/// Latitude assumed when the observer's location is unknown.
pub const EQUATOR: f64 = 0.0;

const MINUTES_PER_DAY: f64 = 24.0 * 60.0;

// ---------------------------------------------------------------------------
// Observer
// ---------------------------------------------------------------------------

/// Where on Earth the sky is being observed from, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observer {
    /// North positive.
    pub latitude: f64,
    /// East positive.
    pub longitude: f64,
}

impl Observer {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// The stand-in observer for a date-time with no known location: on
    /// the equator, at the longitude of its time zone.
    #[must_use]
    pub fn from_offset(datetime: OffsetDateTime) -> Self {
        Self::new(EQUATOR, approximate_longitude(datetime))
    }
}

/// Approximate the longitude of a date-time's time zone.
///
/// UTC+10 → 150°E, UTC−5 → 75°W (−75.0). Real zone boundaries, daylight
/// saving and half-hour zones make this rough, but it puts solar noon
/// within an hour or so of clock noon.
#[must_use]
pub fn approximate_longitude(datetime: OffsetDateTime) -> f64 {
    let offset_minutes = f64::from(datetime.offset().whole_minutes());
    offset_minutes * 360.0 / MINUTES_PER_DAY
}

// ---------------------------------------------------------------------------
// Temperature
// ---------------------------------------------------------------------------

/// Map a sun altitude (radians) onto the clamped Kelvin ramp.
#[must_use]
pub fn temperature_for_altitude(altitude: f64) -> f64 {
    let temperature = altitude * (TEMPERATURE_RANGE / MAX_TEMPERATURE_ALTITUDE);
    temperature.clamp(MIN_TEMPERATURE_KELVINS, MAX_TEMPERATURE_KELVINS)
}

/// Color temperature for `datetime`, observed from its time zone's
/// stand-in location (see [`Observer::from_offset`]).
#[must_use]
pub fn daylight_temperature(datetime: OffsetDateTime) -> f64 {
    daylight_temperature_for(datetime, Observer::from_offset(datetime))
}

/// Color temperature for `datetime` as seen by `observer`.
#[must_use]
pub fn daylight_temperature_for(datetime: OffsetDateTime, observer: Observer) -> f64 {
    let sun = solar::position(datetime, observer.latitude, observer.longitude);
    let kelvin = temperature_for_altitude(sun.altitude);
    trace!(
        latitude = observer.latitude,
        longitude = observer.longitude,
        altitude = sun.altitude,
        kelvin,
        "daylight temperature"
    );
    kelvin
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
