//! CIE xyY

use crate::error::{Result, check_finite};
use crate::math::Vector3;

/// XYZ → xyY
///
/// Black has no chromaticity and maps to (0, 0, Y).
pub fn from_xyz(xyz: Vector3) -> Vector3 {
    let sum = xyz.sum();
    if sum == 0.0 {
        Vector3::new(0.0, 0.0, xyz[1])
    } else {
        Vector3::new(xyz[0] / sum, xyz[1] / sum, xyz[1])
    }
}

/// xyY → XYZ
///
/// A chromaticity with y = 0 carries no luminance and maps to black.
pub fn to_xyz(xyy: Vector3) -> Vector3 {
    let [x, y, luminance] = xyy.to_array();
    if y == 0.0 {
        return Vector3::default();
    }
    Vector3::new(x * luminance / y, luminance, (1.0 - x - y) * luminance / y)
}

/// Convert XYZ to xyY
pub fn xyz_to_xyy(x: f64, y: f64, z: f64) -> Result<[f64; 3]> {
    check_finite("x", x)?;
    check_finite("y", y)?;
    check_finite("z", z)?;
    Ok(from_xyz(Vector3::new(x, y, z)).to_array())
}

/// Convert xyY to XYZ
pub fn xyy_to_xyz(x: f64, y: f64, luminance: f64) -> Result<[f64; 3]> {
    check_finite("x", x)?;
    check_finite("y", y)?;
    check_finite("Y", luminance)?;
    Ok(to_xyz(Vector3::new(x, y, luminance)).to_array())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-7;

    #[test]
    fn test_srgb_red_primary() {
        let [x, y, luminance] = xyz_to_xyy(0.4124564, 0.2126729, 0.0193339).unwrap();
        assert!((x - 0.64).abs() < EPSILON, "x = {}", x);
        assert!((y - 0.33).abs() < EPSILON, "y = {}", y);
        assert_eq!(luminance, 0.2126729);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(xyz_to_xyy(0.0, 0.0, 0.0).unwrap(), [0.0, 0.0, 0.0]);
        assert_eq!(xyy_to_xyz(0.3, 0.0, 0.5).unwrap(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_roundtrip() {
        let xyz = [0.3, 0.5, 0.7];
        let [x, y, luminance] = xyz_to_xyy(xyz[0], xyz[1], xyz[2]).unwrap();
        let back = xyy_to_xyz(x, y, luminance).unwrap();
        for k in 0..3 {
            assert!((back[k] - xyz[k]).abs() < 1e-12);
        }
    }

    #[test]
    fn test_rejects_nan() {
        assert!(xyz_to_xyy(f64::NAN, 0.0, 0.0).is_err());
    }
}
