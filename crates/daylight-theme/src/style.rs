//! Static style assets and unit helpers.

/// Root font size the `rem` unit is relative to.
pub const BASE_FONT_SIZE_PX: f64 = 16.0;

/// Global stylesheet text: loads the theme's web fonts.
pub const GLOBAL_STYLES: &str =
    "@import url('https://fonts.googleapis.com/css?family=Merriweather|Ubuntu&display=swap');";

/// Convert a pixel length to `rem`, based on a 16px root font size.
///
/// ```
/// use daylight_theme::px_rem;
///
/// assert_eq!(px_rem(24.0), "1.5rem");
/// ```
#[must_use]
pub fn px_rem(px: f64) -> String {
    // Adding +0.0 turns -0.0 into 0.0, so px_rem(-0.0) reads "0rem".
    let rem = px / BASE_FONT_SIZE_PX + 0.0;
    format!("{rem}rem")
}
