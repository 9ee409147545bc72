//! RGB ↔ CIE XYZ through a named working space
//!
//! RGB components are stored (encoded) values in [0, 1]. XYZ is relative
//! to the working space's own reference white with Y normalized to 1.

use crate::color::working_space::{self, RgbWorkingSpace};
use crate::error::{Result, check_range, check_unit};
use crate::math::Vector3;

/// Slack allowed above the upper bound when validating XYZ input
const XYZ_TOLERANCE: f64 = 1e-9;

/// Linear components smaller than this are matrix rounding noise
///
/// `from_xyz · to_xyz` leaves residues near 3e-16 on channels that were
/// exactly zero, which a pure power curve would lift to about 1e-7.
const LINEAR_NOISE_FLOOR: f64 = 1e-14;

/// Convert encoded RGB to XYZ
///
/// Negative XYZ from rounding is clamped to zero.
pub fn rgb_to_xyz(r: f64, g: f64, b: f64, space: &str) -> Result<[f64; 3]> {
    check_unit("r", r)?;
    check_unit("g", g)?;
    check_unit("b", b)?;

    let space = working_space::lookup(space)?;
    Ok(encoded_rgb_to_xyz(space, Vector3::new(r, g, b)).to_array())
}

/// Convert XYZ to encoded RGB
///
/// Each component must lie in [0, 1], widened to the matching component of
/// the space's white point where that exceeds 1. The result is not
/// clamped, so colors outside the gamut come back below 0 or above 1.
pub fn xyz_to_rgb(x: f64, y: f64, z: f64, space: &str) -> Result<[f64; 3]> {
    let space = working_space::lookup(space)?;
    let xyz = Vector3::new(x, y, z);
    check_xyz(space, xyz)?;

    Ok(xyz_to_encoded_rgb(space, xyz).to_array())
}

/// Validate XYZ input for a resolved space
pub(crate) fn check_xyz(space: &RgbWorkingSpace, xyz: Vector3) -> Result<()> {
    for (k, component) in ["x", "y", "z"].into_iter().enumerate() {
        check_range(component, xyz[k], 0.0, space.white[k].max(1.0) + XYZ_TOLERANCE)?;
    }
    Ok(())
}

/// Unchecked RGB → XYZ for an already resolved space
#[inline]
pub(crate) fn encoded_rgb_to_xyz(space: &RgbWorkingSpace, rgb: Vector3) -> Vector3 {
    let linear = space.transfer.linearize_vector(rgb);
    space.to_xyz.dot(linear).max(0.0)
}

/// Unchecked XYZ → RGB for an already resolved space
#[inline]
pub(crate) fn xyz_to_encoded_rgb(space: &RgbWorkingSpace, xyz: Vector3) -> Vector3 {
    let linear = space
        .from_xyz
        .dot(xyz)
        .map(|c| if c.abs() < LINEAR_NOISE_FLOOR { 0.0 } else { c });
    space.transfer.delinearize_vector(linear)
}
