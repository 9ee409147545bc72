//! CIE L*u*v*

use crate::color::illuminant::white_point_by_name;
use crate::color::lab::{EPSILON, KAPPA, lightness_to_y};
use crate::error::{Result, check_finite};
use crate::math::Vector3;

/// u′v′ chromaticity of an XYZ triple, (0, 0) for black
#[inline]
fn uv_prime(xyz: Vector3) -> (f64, f64) {
    let [x, y, z] = xyz.to_array();
    let denominator = x + 15.0 * y + 3.0 * z;
    if denominator == 0.0 {
        (0.0, 0.0)
    } else {
        (4.0 * x / denominator, 9.0 * y / denominator)
    }
}

/// XYZ → Luv against an explicit white
pub fn from_xyz(xyz: Vector3, white: Vector3) -> Vector3 {
    let (u_prime, v_prime) = uv_prime(xyz);
    let (un_prime, vn_prime) = uv_prime(white);

    let yr = xyz[1] / white[1];
    let l = if yr > EPSILON {
        116.0 * yr.cbrt() - 16.0
    } else {
        KAPPA * yr
    };

    Vector3::new(l, 13.0 * l * (u_prime - un_prime), 13.0 * l * (v_prime - vn_prime))
}

/// Luv → XYZ against an explicit white
///
/// Zero or negative lightness is black.
pub fn to_xyz(luv: Vector3, white: Vector3) -> Vector3 {
    let [l, u, v] = luv.to_array();
    if l <= 0.0 {
        return Vector3::default();
    }

    let (un_prime, vn_prime) = uv_prime(white);
    let u_prime = u / (13.0 * l) + un_prime;
    let v_prime = v / (13.0 * l) + vn_prime;

    let y = lightness_to_y(l) * white[1];
    if v_prime == 0.0 {
        return Vector3::new(0.0, y, 0.0);
    }

    let x = y * 9.0 * u_prime / (4.0 * v_prime);
    let z = y * (12.0 - 3.0 * u_prime - 20.0 * v_prime) / (4.0 * v_prime);
    Vector3::new(x, y, z)
}

/// Convert XYZ to Luv for a named observer and illuminant
pub fn xyz_to_luv(x: f64, y: f64, z: f64, observer: &str, illuminant: &str) -> Result<[f64; 3]> {
    check_finite("x", x)?;
    check_finite("y", y)?;
    check_finite("z", z)?;
    let white = white_point_by_name(observer, illuminant)?;
    Ok(from_xyz(Vector3::new(x, y, z), white).to_array())
}

/// Convert Luv to XYZ for a named observer and illuminant
pub fn luv_to_xyz(l: f64, u: f64, v: f64, observer: &str, illuminant: &str) -> Result<[f64; 3]> {
    check_finite("l", l)?;
    check_finite("u", u)?;
    check_finite("v", v)?;
    let white = white_point_by_name(observer, illuminant)?;
    Ok(to_xyz(Vector3::new(l, u, v), white).to_array())
}
