//! Reference conversions backed by palette
//!
//! Every function takes and returns plain triples so results line up with
//! the chroma API. All palette types use the D65 white point, matching
//! sRGB.

use palette::encoding::Srgb as SrgbEncoding;
use palette::white_point::D65;
use palette::{FromColor, Hsl, Hsv, Lab, Luv, Srgb, Xyz, Yxy};

fn srgb(rgb: [f64; 3]) -> Srgb<f64> {
    Srgb::new(rgb[0], rgb[1], rgb[2])
}

fn xyz(v: [f64; 3]) -> Xyz<D65, f64> {
    Xyz::new(v[0], v[1], v[2])
}

/// Encoded sRGB → XYZ
pub fn srgb_to_xyz(rgb: [f64; 3]) -> [f64; 3] {
    let out = Xyz::<D65, f64>::from_color(srgb(rgb));
    [out.x, out.y, out.z]
}

/// XYZ → encoded sRGB
pub fn xyz_to_srgb(v: [f64; 3]) -> [f64; 3] {
    let out = Srgb::<f64>::from_color(xyz(v));
    [out.red, out.green, out.blue]
}

/// XYZ → Lab (D65)
pub fn xyz_to_lab(v: [f64; 3]) -> [f64; 3] {
    let out = Lab::<D65, f64>::from_color(xyz(v));
    [out.l, out.a, out.b]
}

/// XYZ → Luv (D65)
pub fn xyz_to_luv(v: [f64; 3]) -> [f64; 3] {
    let out = Luv::<D65, f64>::from_color(xyz(v));
    [out.l, out.u, out.v]
}

/// XYZ → xyY
pub fn xyz_to_xyy(v: [f64; 3]) -> [f64; 3] {
    let out = Yxy::<D65, f64>::from_color(xyz(v));
    [out.x, out.y, out.luma]
}

/// Encoded sRGB → HSV, hue in [0, 360)
pub fn srgb_to_hsv(rgb: [f64; 3]) -> [f64; 3] {
    let out = Hsv::<SrgbEncoding, f64>::from_color(srgb(rgb));
    [out.hue.into_positive_degrees(), out.saturation, out.value]
}

/// Encoded sRGB → HSL, hue in [0, 360)
pub fn srgb_to_hsl(rgb: [f64; 3]) -> [f64; 3] {
    let out = Hsl::<SrgbEncoding, f64>::from_color(srgb(rgb));
    [out.hue.into_positive_degrees(), out.saturation, out.lightness]
}
