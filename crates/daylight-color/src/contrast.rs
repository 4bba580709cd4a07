// SPDX-License-Identifier: MIT
//
// WCAG 2.1 relative luminance and contrast ratio.
//
// Used to check that the theme's fixed text color stays readable over a
// background whose warmth shifts through the day.

use crate::rgb::Rgb;

/// WCAG AA minimum contrast for body text.
pub const WCAG_AA_TEXT: f64 = 4.5;

/// Convert a single sRGB component to linear light (remove gamma).
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a color, in [0.0, 1.0].
///
///   L = 0.2126·R_lin + 0.7152·G_lin + 0.0722·B_lin
#[must_use]
pub fn relative_luminance(color: Rgb) -> f64 {
    let (r, g, b) = color.to_srgb();
    0.2126f64.mul_add(
        srgb_to_linear(r),
        0.7152f64.mul_add(srgb_to_linear(g), 0.0722 * srgb_to_linear(b)),
    )
}

/// Contrast ratio between two colors, in [1.0, 21.0].
///
/// Symmetric: argument order does not matter.
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_on_white_is_21() {
        let ratio = contrast_ratio(Rgb::BLACK, Rgb::WHITE);
        assert!((ratio - 21.0).abs() < 1e-9, "got {ratio}");
    }

    #[test]
    fn same_color_is_1() {
        let c = Rgb::new(0x63, 0x5c, 0xb3);
        assert!((contrast_ratio(c, c) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn ratio_is_symmetric() {
        let a = Rgb::new(0x29, 0x29, 0x29);
        let b = Rgb::new(0xff, 0xc3, 0x8a);
        assert!((contrast_ratio(a, b) - contrast_ratio(b, a)).abs() < 1e-12);
    }

    #[test]
    fn luminance_endpoints() {
        assert!(relative_luminance(Rgb::BLACK).abs() < 1e-12);
        assert!((relative_luminance(Rgb::WHITE) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn linear_segment_below_threshold() {
        assert!((srgb_to_linear(0.04) - 0.04 / 12.92).abs() < 1e-12);
    }
}
