//! # chroma - colorimetric conversions
//!
//! Pure, allocation-free transforms between color representations:
//!
//! - RGB working spaces (sRGB, Adobe RGB, BT.2020, ProPhoto, ...) ↔ CIE XYZ
//! - XYZ ↔ Lab, LCh(ab), Luv, xyY and IPT
//! - RGB ↔ HSL, HSV, YIQ, YUV, CMY/CMYK and hex strings
//! - chromatic adaptation between reference illuminants
//! - spectral reflectance → XYZ
//!
//! Every conversion validates its input and returns a typed [`Error`]
//! instead of panicking.
//!
//! ## Quick Start
//!
//! ```
//! use chroma_core::{rgb_to_xyz, xyz_to_lab, apply_chromatic_adaptation};
//!
//! let [x, y, z] = rgb_to_xyz(1.0, 0.0, 0.0, "sRgb").unwrap();
//! let [l, a, b] = xyz_to_lab(x, y, z, "2", "D65").unwrap();
//! assert!((l - 53.24).abs() < 0.01);
//!
//! // Re-reference to D50 for print
//! let d50 = apply_chromatic_adaptation(x, y, z, "D65", "D50", "2", "bradford").unwrap();
//! # let _ = (a, b, d50);
//! ```

pub mod batch;
pub mod color;
pub mod error;
pub mod math;
pub mod spectral;

pub use batch::{lab_to_xyz_slice, rgb_to_xyz_slice, xyz_to_lab_slice, xyz_to_rgb_slice};
pub use color::{
    Illuminant, Observer, RgbWorkingSpace, YuvStandard, cmy_to_cmyk, cmy_to_rgb, cmyk_to_cmy,
    hex_to_rgb, hsl_to_rgb, hsv_to_rgb, ipt_to_xyz, lab_to_lch, lab_to_xyz, lch_to_lab, luv_to_xyz,
    named_color, rgb_to_cmy, rgb_to_hex, rgb_to_hsl, rgb_to_hsv, rgb_to_xyz, rgb_to_yiq, rgb_to_yuv,
    white_point, white_point_by_name, xyy_to_xyz, xyz_to_ipt, xyz_to_lab, xyz_to_luv, xyz_to_rgb,
    xyz_to_xyy, yiq_to_rgb, yuv_to_rgb,
};
pub use error::{Error, Result};
pub use math::{
    AdaptationMethod, Matrix3x3, TransferFunction, Vector3, adapt, adaptation_matrix,
    apply_chromatic_adaptation,
};
pub use spectral::{SpectralColor, illuminant_spd, spectral_to_xyz, spectral_to_xyz_with};

/// Version of chroma
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
