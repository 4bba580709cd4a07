// SPDX-License-Identifier: MIT
//
// daylight-color: the color math underneath the daylight theme and the
// code renderer.
//
// Colors travel through the system as 8-bit sRGB triples and leave it as
// `#rrggbb` strings. The interesting conversion is color temperature:
// a Kelvin value becomes an sRGB triple through Neil Bartlett's fit of
// the Planckian locus, the same curve web color libraries use.
//
//   Kelvin ─▶ kelvin::kelvin_to_rgb ─▶ Rgb ─▶ "#rrggbb"
//                                       │
//                                       └─▶ contrast::contrast_ratio

pub mod contrast;
pub mod kelvin;
pub mod rgb;

pub use kelvin::kelvin_to_rgb;
pub use rgb::Rgb;
