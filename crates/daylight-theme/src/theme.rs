//! Theme assembly: fixed brand colors and fonts around a daylight background.
//!
//! A [`Theme`] is a plain value. It is rebuilt for every request or render
//! and handed explicitly to whatever applies it; nothing here keeps a
//! current theme around.

use daylight_color::contrast::contrast_ratio;
use daylight_color::{Rgb, kelvin_to_rgb};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::debug;

use crate::daylight::{Observer, daylight_temperature_for};

/// Brand purple.
pub const PRIMARY: &str = "#635cb3";
/// Brand yellow.
pub const SECONDARY: &str = "#ffd615";
/// Body text.
pub const TEXT: &str = "#292929";

/// Body copy font stack.
pub const BODY_FONT: &str = "'Merriweather', serif";
/// Heading font stack.
pub const HEADING_FONT: &str = "'Ubuntu', sans-serif";

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// Site colors, each a `#rrggbb` string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Colors {
    pub primary: String,
    pub secondary: String,
    /// Tinted by the sun: warm at night, near-white in daylight.
    pub background: String,
    pub text: String,
}

/// CSS `font-family` values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fonts {
    pub body: String,
    pub heading: String,
}

/// The complete site theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub colors: Colors,
    pub fonts: Fonts,
}

impl Theme {
    /// Assemble a theme around a background color.
    #[must_use]
    pub fn with_background(background: Rgb) -> Self {
        Self {
            colors: Colors {
                primary: PRIMARY.to_string(),
                secondary: SECONDARY.to_string(),
                background: background.to_hex(),
                text: TEXT.to_string(),
            },
            fonts: Fonts {
                body: BODY_FONT.to_string(),
                heading: HEADING_FONT.to_string(),
            },
        }
    }

    /// WCAG contrast ratio of the text color over the background.
    ///
    /// `None` if either color is not valid hex, which only happens for
    /// themes deserialized from elsewhere.
    #[must_use]
    pub fn text_contrast(&self) -> Option<f64> {
        let text = Rgb::hex(&self.colors.text)?;
        let background = Rgb::hex(&self.colors.background)?;
        Some(contrast_ratio(text, background))
    }
}

/// The theme for `datetime`, assuming an observer on the equator in the
/// date-time's time zone.
#[must_use]
pub fn get_theme(datetime: OffsetDateTime) -> Theme {
    get_theme_for(datetime, Observer::from_offset(datetime))
}

/// The theme for `datetime` as seen from a known location.
#[must_use]
pub fn get_theme_for(datetime: OffsetDateTime, observer: Observer) -> Theme {
    let kelvin = daylight_temperature_for(datetime, observer);
    let theme = Theme::with_background(kelvin_to_rgb(kelvin));
    debug!(
        kelvin,
        background = %theme.colors.background,
        contrast = theme.text_contrast(),
        "theme computed"
    );
    theme
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use daylight_color::contrast::WCAG_AA_TEXT;
    use daylight_color::rgb::is_hex6;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use time::macros::{datetime, offset};

    use crate::daylight::{EQUATOR, MAX_TEMPERATURE_KELVINS, MIN_TEMPERATURE_KELVINS};

    fn night_hex() -> String {
        kelvin_to_rgb(MIN_TEMPERATURE_KELVINS).to_hex()
    }

    fn day_hex() -> String {
        kelvin_to_rgb(MAX_TEMPERATURE_KELVINS).to_hex()
    }

    #[test]
    fn fixed_fields_are_constant() {
        let theme = get_theme(datetime!(2021-07-04 9:15).assume_offset(offset!(-4)));
        assert_eq!(theme.colors.primary, "#635cb3");
        assert_eq!(theme.colors.secondary, "#ffd615");
        assert_eq!(theme.colors.text, "#292929");
        assert_eq!(theme.fonts.body, "'Merriweather', serif");
        assert_eq!(theme.fonts.heading, "'Ubuntu', sans-serif");
    }

    #[test]
    fn deep_night_background_is_3500k() {
        let theme = get_theme(datetime!(2024-03-20 0:00 UTC));
        assert_eq!(theme.colors.background, night_hex());
        assert_eq!(theme.colors.background, "#ffc38a");
    }

    #[test]
    fn equatorial_noon_background_is_6500k() {
        let theme = get_theme(datetime!(2024-03-20 12:00 UTC));
        assert_eq!(theme.colors.background, day_hex());
        assert_eq!(theme.colors.background, "#fffafe");
    }

    #[test]
    fn local_midnight_in_another_zone_is_night() {
        let theme = get_theme(datetime!(2024-03-20 0:00).assume_offset(offset!(+9)));
        assert_eq!(theme.colors.background, night_hex());
    }

    #[test]
    fn mid_morning_background_is_intermediate() {
        // ~3736K at 08:00 on the equinox.
        let theme = get_theme(datetime!(2024-03-20 8:00 UTC));
        assert_eq!(theme.colors.background, "#ffca97");
    }

    #[test]
    fn identical_input_gives_identical_theme() {
        let dt = datetime!(2022-11-30 16:42:07).assume_offset(offset!(+1));
        assert_eq!(get_theme(dt), get_theme(dt));
    }

    #[test]
    fn get_theme_uses_offset_observer() {
        let dt = datetime!(2024-06-21 7:30).assume_offset(offset!(-3));
        assert_eq!(get_theme(dt), get_theme_for(dt, Observer::from_offset(dt)));
    }

    #[test]
    fn observer_location_changes_background() {
        let dt = datetime!(2024-03-20 12:00 UTC);
        let greenwich = get_theme_for(dt, Observer::new(EQUATOR, 0.0));
        let pacific = get_theme_for(dt, Observer::new(EQUATOR, 180.0));
        assert_eq!(greenwich.colors.background, day_hex());
        assert_eq!(pacific.colors.background, night_hex());
    }

    #[test]
    fn text_stays_readable_across_the_day() {
        for hour in 0..24 {
            let dt = datetime!(2024-03-20 0:00 UTC).replace_hour(hour).unwrap();
            let ratio = get_theme(dt).text_contrast().unwrap();
            assert!(ratio >= WCAG_AA_TEXT, "contrast {ratio} at {hour}:00");
        }
    }

    #[test]
    fn text_contrast_rejects_invalid_colors() {
        let mut theme = Theme::with_background(Rgb::WHITE);
        theme.colors.background = "transparent".to_string();
        assert!(theme.text_contrast().is_none());
    }

    #[test]
    fn serializes_to_nested_json() {
        let theme = Theme::with_background(Rgb::new(0xff, 0xc3, 0x8a));
        let json = serde_json::to_value(&theme).unwrap();
        assert_eq!(json["colors"]["background"], "#ffc38a");
        assert_eq!(json["colors"]["primary"], "#635cb3");
        assert_eq!(json["fonts"]["heading"], "'Ubuntu', sans-serif");

        let back: Theme = serde_json::from_value(json).unwrap();
        assert_eq!(back, theme);
    }

    proptest! {
        #[test]
        fn background_is_always_hex6(
            secs in -2_208_988_800i64..4_102_444_800,
            offset_minutes in -720i32..=840,
        ) {
            let offset = time::UtcOffset::from_whole_seconds(offset_minutes * 60).unwrap();
            let dt = OffsetDateTime::from_unix_timestamp(secs).unwrap().to_offset(offset);
            let theme = get_theme(dt);
            prop_assert!(is_hex6(&theme.colors.background), "{}", theme.colors.background);
            prop_assert_eq!(theme.colors.primary.as_str(), PRIMARY);
        }

        #[test]
        fn get_theme_is_deterministic(secs in 0i64..4_102_444_800) {
            let dt = OffsetDateTime::from_unix_timestamp(secs).unwrap();
            prop_assert_eq!(get_theme(dt), get_theme(dt));
        }
    }
}
