//! CIE L*a*b* and its cylindrical form LCh(ab)
//!
//! Lab is computed relative to a reference white chosen by observer and
//! illuminant. The CIE constants are used in their exact rational form,
//! which keeps the two branches of `f` continuous at the junction.

use crate::color::illuminant::white_point_by_name;
use crate::error::{Result, check_finite, check_range};
use crate::math::Vector3;

/// CIE ε = (6/29)³
pub(crate) const EPSILON: f64 = 216.0 / 24389.0;

/// CIE κ = (29/3)³
pub(crate) const KAPPA: f64 = 24389.0 / 27.0;

/// Forward companding of a white-relative component
#[inline]
pub(crate) fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

/// White-relative luminance for a lightness value
#[inline]
pub(crate) fn lightness_to_y(l: f64) -> f64 {
    if l > KAPPA * EPSILON {
        ((l + 16.0) / 116.0).powi(3)
    } else {
        l / KAPPA
    }
}

/// XYZ → Lab against an explicit white
pub fn from_xyz(xyz: Vector3, white: Vector3) -> Vector3 {
    let [fx, fy, fz] = xyz.divide(white).map(lab_f).to_array();

    Vector3::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
}

/// Lab → XYZ against an explicit white
pub fn to_xyz(lab: Vector3, white: Vector3) -> Vector3 {
    let [l, a, b] = lab.to_array();
    let fy = (l + 16.0) / 116.0;
    let fx = fy + a / 500.0;
    let fz = fy - b / 200.0;

    let inverse_f = |f: f64| {
        let cube = f.powi(3);
        if cube > EPSILON {
            cube
        } else {
            (116.0 * f - 16.0) / KAPPA
        }
    };

    Vector3::new(
        inverse_f(fx) * white[0],
        lightness_to_y(l) * white[1],
        inverse_f(fz) * white[2],
    )
}

/// Convert XYZ to Lab for a named observer and illuminant
pub fn xyz_to_lab(x: f64, y: f64, z: f64, observer: &str, illuminant: &str) -> Result<[f64; 3]> {
    check_finite("x", x)?;
    check_finite("y", y)?;
    check_finite("z", z)?;
    let white = white_point_by_name(observer, illuminant)?;
    Ok(from_xyz(Vector3::new(x, y, z), white).to_array())
}

/// Convert Lab to XYZ for a named observer and illuminant
pub fn lab_to_xyz(l: f64, a: f64, b: f64, observer: &str, illuminant: &str) -> Result<[f64; 3]> {
    check_finite("l", l)?;
    check_finite("a", a)?;
    check_finite("b", b)?;
    let white = white_point_by_name(observer, illuminant)?;
    Ok(to_xyz(Vector3::new(l, a, b), white).to_array())
}

/// Convert Lab to LCh(ab)
///
/// Hue is in degrees, in [0, 360).
pub fn lab_to_lch(l: f64, a: f64, b: f64) -> Result<[f64; 3]> {
    check_finite("l", l)?;
    check_finite("a", a)?;
    check_finite("b", b)?;

    let c = a.hypot(b);
    let h = b.atan2(a).to_degrees().rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative angles
    let h = if h >= 360.0 { 0.0 } else { h };
    Ok([l, c, h])
}

/// Convert LCh(ab) to Lab
pub fn lch_to_lab(l: f64, c: f64, h: f64) -> Result<[f64; 3]> {
    check_finite("l", l)?;
    check_range("c", c, 0.0, f64::MAX)?;
    check_finite("h", h)?;

    let (sin, cos) = h.to_radians().sin_cos();
    Ok([l, c * cos, c * sin])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const EPS: f64 = 1e-6;

    #[test]
    fn test_srgb_red() {
        let [l, a, b] = xyz_to_lab(0.4124564, 0.2126729, 0.0193339, "2", "D65").unwrap();
        assert!((l - 53.2407941).abs() < EPS, "L = {}", l);
        assert!((a - 80.0924596).abs() < EPS, "a = {}", a);
        assert!((b - 67.2031965).abs() < EPS, "b = {}", b);
    }

    #[test]
    fn test_white_and_black() {
        let [l, a, b] = xyz_to_lab(0.95047, 1.0, 1.08883, "2", "D65").unwrap();
        assert!((l - 100.0).abs() < EPS && a.abs() < EPS && b.abs() < EPS);

        let [l, a, b] = xyz_to_lab(0.0, 0.0, 0.0, "2", "D65").unwrap();
        assert!(l.abs() < EPS && a.abs() < EPS && b.abs() < EPS);
    }

    #[test]
    fn test_roundtrip_both_branches() {
        for xyz in [[0.5, 0.4, 0.3], [0.001, 0.002, 0.003], [0.9, 0.005, 0.8]] {
            let [l, a, b] = xyz_to_lab(xyz[0], xyz[1], xyz[2], "10", "D50").unwrap();
            let back = lab_to_xyz(l, a, b, "10", "D50").unwrap();
            for k in 0..3 {
                assert!((back[k] - xyz[k]).abs() < 1e-12, "{:?} → {:?}", xyz, back);
            }
        }
    }

    #[test]
    fn test_lch() {
        let [l, c, h] = lab_to_lch(53.2407941, 80.0924596, 67.2031965).unwrap();
        assert!((l - 53.2407941).abs() < EPS);
        assert!((c - 104.5517657).abs() < EPS, "C = {}", c);
        assert!((h - 39.9990106).abs() < EPS, "h = {}", h);

        let [_, a, b] = lch_to_lab(l, c, h).unwrap();
        assert!((a - 80.0924596).abs() < EPS && (b - 67.2031965).abs() < EPS);
    }

    #[test]
    fn test_lch_hue_wraps() {
        let [_, _, h] = lab_to_lch(50.0, 10.0, -10.0).unwrap();
        assert!((h - 315.0).abs() < EPS);
        let [_, c, h] = lab_to_lch(50.0, 0.0, 0.0).unwrap();
        assert_eq!((c, h), (0.0, 0.0));
    }

    #[test]
    fn test_errors() {
        assert!(matches!(xyz_to_lab(0.5, 0.5, 0.5, "2", "D93"), Err(Error::UnknownIlluminant(_))));
        assert!(matches!(xyz_to_lab(0.5, 0.5, 0.5, "3", "D65"), Err(Error::UnknownObserver(_))));
        assert!(matches!(lab_to_xyz(f64::NAN, 0.0, 0.0, "2", "D65"), Err(Error::OutOfRange { .. })));
        assert!(matches!(lch_to_lab(50.0, -1.0, 0.0), Err(Error::OutOfRange { component: "c", .. })));
    }
}
