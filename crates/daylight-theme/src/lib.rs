//! # daylight-theme: a site theme that follows the sun
//!
//! Computes the site's color palette for a moment in time. Everything is
//! fixed except the background, which is tinted by the color temperature
//! of daylight at the observer's location.
//!
//! # Architecture
//!
//! ```text
//! OffsetDateTime (+ optional Observer)
//!     │
//!     ▼
//! daylight.rs: observer from UTC offset (equator, 15° per hour)
//!     │
//!     ▼
//! solar.rs:    sun altitude/azimuth (suncalc) for the instant and observer
//!     │
//!     ▼
//! daylight.rs: altitude → Kelvin, clamped to 3500..=6500
//!     │
//!     ▼
//! daylight-color: Kelvin → sRGB → "#rrggbb"
//!     │
//!     ▼
//! theme.rs:    Theme { colors, fonts }
//! ```
//!
//! [`style`] carries the static pieces a page needs alongside the theme:
//! the web-font import and the px → rem helper.

pub mod daylight;
pub mod solar;
pub mod style;
pub mod theme;

pub use daylight::{Observer, approximate_longitude, daylight_temperature, daylight_temperature_for};
pub use solar::SolarPosition;
pub use style::{GLOBAL_STYLES, px_rem};
pub use theme::{Colors, Fonts, Theme, get_theme, get_theme_for};
