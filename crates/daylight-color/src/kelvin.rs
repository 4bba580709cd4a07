// SPDX-License-Identifier: MIT
//
// Color temperature → sRGB.
//
// A piecewise fit of blackbody color against temperature, in hundreds of
// Kelvin (t = K / 100), by Neil Bartlett, refining Tanner Helland's
// original curve:
//
//   t < 66:  r = 255
//            g = a + b·(t−2)  + c·ln(t−2)     (0 below t = 6)
//            b = a + b·(t−10) + c·ln(t−10)    (0 below t = 20)
//   t ≥ 66:  r = a + b·(t−55) + c·ln(t−55)
//            g = a + b·(t−50) + c·ln(t−50)
//            b = 255
//
// Channels come out unclipped; `Rgb::from_channels` clips and rounds.
//
// Reference: https://www.zombieprototypes.com/?p=210

use crate::rgb::Rgb;

// Green channel, warm side (t < 66).
const G_WARM: (f64, f64, f64) = (-155.254_855_627_091_79, -0.445_969_504_695_791_33, 104.492_161_993_938_88);
// Blue channel, warm side (t < 66).
const B_WARM: (f64, f64, f64) = (-254.769_351_841_209_02, 0.827_409_606_400_739_5, 115.679_944_010_661_47);
// Red channel, cool side (t >= 66).
const R_COOL: (f64, f64, f64) = (351.976_905_668_056_93, 0.114_206_453_784_165, -40.253_663_093_321_27);
// Green channel, cool side (t >= 66).
const G_COOL: (f64, f64, f64) = (325.449_412_571_197_4, 0.079_434_565_366_623_42, -28.085_296_350_795_7);

/// Evaluate `a + b·x + c·ln(x)`.
#[inline]
fn fit((a, b, c): (f64, f64, f64), x: f64) -> f64 {
    c.mul_add(x.ln(), b.mul_add(x, a))
}

/// Unclipped sRGB channels (0–255 scale) for a color temperature in Kelvin.
#[must_use]
pub fn kelvin_to_channels(kelvin: f64) -> (f64, f64, f64) {
    let t = kelvin / 100.0;
    if t < 66.0 {
        let g = if t < 6.0 { 0.0 } else { fit(G_WARM, t - 2.0) };
        let b = if t < 20.0 { 0.0 } else { fit(B_WARM, t - 10.0) };
        (255.0, g, b)
    } else {
        (fit(R_COOL, t - 55.0), fit(G_COOL, t - 50.0), 255.0)
    }
}

/// The sRGB color of a blackbody light source at `kelvin`.
///
/// ```
/// use daylight_color::kelvin_to_rgb;
///
/// assert_eq!(kelvin_to_rgb(6500.0).to_hex(), "#fffafe");
/// ```
#[must_use]
pub fn kelvin_to_rgb(kelvin: f64) -> Rgb {
    let (r, g, b) = kelvin_to_channels(kelvin);
    Rgb::from_channels(r, g, b)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn warm_white_3500k() {
        assert_eq!(kelvin_to_rgb(3500.0).to_hex(), "#ffc38a");
    }

    #[test]
    fn daylight_6500k() {
        assert_eq!(kelvin_to_rgb(6500.0).to_hex(), "#fffafe");
    }

    #[test]
    fn known_values_across_range() {
        assert_eq!(kelvin_to_rgb(1000.0).to_hex(), "#ff3a00");
        assert_eq!(kelvin_to_rgb(2000.0).to_hex(), "#ff8b14");
        assert_eq!(kelvin_to_rgb(4000.0).to_hex(), "#ffd0a4");
        assert_eq!(kelvin_to_rgb(5000.0).to_hex(), "#ffe4cd");
    }

    #[test]
    fn cool_side_clips_red_overshoot() {
        // Red evaluates to ~256.7 at 6600K.
        let (r, _, b) = kelvin_to_channels(6600.0);
        assert!(r > 255.0);
        assert!((b - 255.0).abs() < f64::EPSILON);
        assert_eq!(kelvin_to_rgb(6600.0).to_hex(), "#fff9ff");
    }

    #[test]
    fn very_cold_is_bluish() {
        assert_eq!(kelvin_to_rgb(10_000.0).to_hex(), "#ccdcff");
    }

    #[test]
    fn candle_light_has_no_blue() {
        let rgb = kelvin_to_rgb(1500.0);
        assert_eq!(rgb.r, 255);
        assert_eq!(rgb.b, 0);
    }

    #[test]
    fn warmer_is_never_bluer() {
        let mut prev = kelvin_to_rgb(2000.0).b;
        for k in (2100..=6500).step_by(100) {
            let b = kelvin_to_rgb(f64::from(k)).b;
            assert!(b >= prev, "blue decreased at {k}K");
            prev = b;
        }
    }
}
