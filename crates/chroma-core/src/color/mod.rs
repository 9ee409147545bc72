//! Color spaces and the conversions between them

pub mod hex;
pub mod illuminant;
pub mod ipt;
pub mod lab;
pub mod luv;
pub mod rgb_xyz;
pub mod simple;
pub mod working_space;
pub mod xyy;

pub use hex::{hex_to_rgb, named_color, rgb_to_hex};
pub use illuminant::{Illuminant, Observer, white_point, white_point_by_name};
pub use ipt::{ipt_to_xyz, xyz_to_ipt};
pub use lab::{lab_to_lch, lab_to_xyz, lch_to_lab, xyz_to_lab};
pub use luv::{luv_to_xyz, xyz_to_luv};
pub use rgb_xyz::{rgb_to_xyz, xyz_to_rgb};
pub use simple::{
    YuvStandard, cmy_to_cmyk, cmy_to_rgb, cmyk_to_cmy, hsl_to_rgb, hsv_to_rgb, rgb_to_cmy,
    rgb_to_hsl, rgb_to_hsv, rgb_to_yiq, rgb_to_yuv, yiq_to_rgb, yuv_to_rgb,
};
pub use working_space::RgbWorkingSpace;
pub use xyy::{xyy_to_xyz, xyz_to_xyy};
