//! IPT (Ebner & Fairchild, 1998)
//!
//! IPT is defined for D65 under the 2° observer only. XYZ is mapped to
//! Hunt-Pointer-Estevez cone space normalized to D65, compressed with a
//! signed 0.43 power and rotated into intensity and two opponent axes.

use std::sync::LazyLock;

use crate::color::illuminant::{Illuminant, Observer};
use crate::error::{Error, Result, check_finite};
use crate::math::{Matrix3x3, Vector3};

/// Nonlinearity applied to the cone responses
const EXPONENT: f64 = 0.43;

const XYZ_TO_LMS: Matrix3x3 = Matrix3x3::new([
    [0.4002, 0.7075, -0.0807],
    [-0.2280, 1.1500, 0.0612],
    [0.0000, 0.0000, 0.9184],
]);

const LMS_TO_IPT: Matrix3x3 = Matrix3x3::new([
    [0.4000, 0.4000, 0.2000],
    [4.4550, -4.8510, 0.3960],
    [0.8056, 0.3572, -1.1628],
]);

/// (LMS → XYZ, IPT → LMS′)
static INVERSES: LazyLock<(Matrix3x3, Matrix3x3)> = LazyLock::new(|| {
    log::debug!("inverting IPT matrices");
    // Both literal matrices are far from singular
    (
        XYZ_TO_LMS.inverse().unwrap_or_else(Matrix3x3::identity),
        LMS_TO_IPT.inverse().unwrap_or_else(Matrix3x3::identity),
    )
});

#[inline]
fn signed_powf(v: f64, exponent: f64) -> f64 {
    v.signum() * v.abs().powf(exponent)
}

/// XYZ (D65, 2°) → IPT
pub fn from_xyz(xyz: Vector3) -> Vector3 {
    let lms = XYZ_TO_LMS.dot(xyz).map(|c| signed_powf(c, EXPONENT));
    LMS_TO_IPT.dot(lms)
}

/// IPT → XYZ (D65, 2°)
pub fn to_xyz(ipt: Vector3) -> Vector3 {
    let (lms_to_xyz, ipt_to_lms) = &*INVERSES;
    let lms = ipt_to_lms.dot(ipt).map(|c| signed_powf(c, 1.0 / EXPONENT));
    lms_to_xyz.dot(lms)
}

/// Convert XYZ to IPT
///
/// Fails with [`Error::UnsupportedReference`] unless observer and
/// illuminant name the 2° observer and D65.
pub fn xyz_to_ipt(x: f64, y: f64, z: f64, observer: &str, illuminant: &str) -> Result<[f64; 3]> {
    let parsed_observer: Observer = observer.parse()?;
    let parsed_illuminant: Illuminant = illuminant.parse()?;
    if parsed_observer != Observer::Two || parsed_illuminant != Illuminant::D65 {
        log::trace!("IPT requested for {} / {}", parsed_observer, parsed_illuminant);
        return Err(Error::UnsupportedReference {
            observer: observer.to_string(),
            illuminant: illuminant.to_string(),
        });
    }

    check_finite("x", x)?;
    check_finite("y", y)?;
    check_finite("z", z)?;
    Ok(from_xyz(Vector3::new(x, y, z)).to_array())
}

/// Convert IPT to XYZ (D65, 2°)
pub fn ipt_to_xyz(i: f64, p: f64, t: f64) -> Result<[f64; 3]> {
    check_finite("i", i)?;
    check_finite("p", p)?;
    check_finite("t", t)?;
    Ok(to_xyz(Vector3::new(i, p, t)).to_array())
}
