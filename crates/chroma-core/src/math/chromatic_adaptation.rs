//! Chromatic Adaptation Transforms
//!
//! Chromatic adaptation re-references XYZ values from one white point to
//! another. All supported methods belong to the von Kries family: XYZ is
//! mapped into a sharpened cone-response space, scaled by the ratio of the
//! two white points' responses, and mapped back.
//!
//! References:
//! - Lindbloom: http://www.brucelindbloom.com/index.html?Eqn_ChromAdapt.html

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::color::illuminant::{Illuminant, Observer, white_point};
use crate::error::{Error, Result};
use crate::math::{Matrix3x3, Vector3};

/// Chromatic adaptation method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AdaptationMethod {
    /// Bradford adaptation (ICC default, recommended)
    #[default]
    Bradford,
    /// Von Kries adaptation (Hunt-Pointer-Estevez cone space)
    VonKries,
    /// XYZ Scaling (identity cone space)
    XyzScaling,
    /// CIECAM02 adaptation matrix
    Cat02,
}

impl AdaptationMethod {
    /// All supported methods
    pub const ALL: [Self; 4] = [Self::Bradford, Self::VonKries, Self::XyzScaling, Self::Cat02];

    /// Canonical lowercase name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bradford => "bradford",
            Self::VonKries => "von_kries",
            Self::XyzScaling => "xyz_scaling",
            Self::Cat02 => "cat02",
        }
    }

    /// Forward/inverse cone-response pair for this method
    pub fn cone_response(&self) -> &'static ConeResponse {
        &CONE_RESPONSES[*self as usize]
    }
}

impl fmt::Display for AdaptationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AdaptationMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace([' ', '-'], "_").as_str() {
            "bradford" => Ok(Self::Bradford),
            "von_kries" | "vonkries" => Ok(Self::VonKries),
            "xyz_scaling" | "xyzscaling" | "xyz" => Ok(Self::XyzScaling),
            "cat02" => Ok(Self::Cat02),
            _ => {
                log::trace!("rejecting adaptation method {:?}", s);
                Err(Error::UnknownAdaptationMethod(s.to_string()))
            }
        }
    }
}

/// A sharpened cone-response matrix together with its inverse
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConeResponse {
    /// XYZ → cone response
    pub forward: Matrix3x3,
    /// Cone response → XYZ
    pub inverse: Matrix3x3,
}

// ============================================================================
// Cone-response matrices (XYZ → LMS)
// ============================================================================

const BRADFORD: Matrix3x3 = Matrix3x3::new([
    [0.8951000, 0.2664000, -0.1614000],
    [-0.7502000, 1.7135000, 0.0367000],
    [0.0389000, -0.0685000, 1.0296000],
]);

const VON_KRIES: Matrix3x3 = Matrix3x3::new([
    [0.4002400, 0.7076000, -0.0808100],
    [-0.2263000, 1.1653200, 0.0457000],
    [0.0000000, 0.0000000, 0.9182200],
]);

const CAT02: Matrix3x3 = Matrix3x3::new([
    [0.7328000, 0.4296000, -0.1624000],
    [-0.7036000, 1.6975000, 0.0061000],
    [0.0030000, 0.0136000, 0.9834000],
]);

/// Indexed by `AdaptationMethod as usize`
static CONE_RESPONSES: LazyLock<[ConeResponse; 4]> = LazyLock::new(|| {
    let pair = |forward: Matrix3x3| ConeResponse {
        forward,
        // The literal matrices above are all well conditioned
        inverse: forward.inverse().unwrap_or_else(Matrix3x3::identity),
    };
    log::debug!("inverting {} cone-response matrices", AdaptationMethod::ALL.len());
    [
        pair(BRADFORD),
        pair(VON_KRIES),
        pair(Matrix3x3::identity()),
        pair(CAT02),
    ]
});

/// Compute the chromatic adaptation matrix between two white points
///
/// The returned matrix T satisfies XYZ_dest = T × XYZ_src, with
/// T = M⁻¹ · diag((M · dst) / (M · src)) · M.
pub fn adaptation_matrix(
    src_white: Vector3,
    dst_white: Vector3,
    method: AdaptationMethod,
) -> Matrix3x3 {
    let cone = method.cone_response();

    // Sharpened cone responses of both whites
    let rho_src = cone.forward.dot(src_white);
    let rho_dst = cone.forward.dot(dst_white);

    let scale = rho_dst.divide(rho_src).to_diagonal();

    cone.inverse.multiply(&scale.multiply(&cone.forward))
}

/// Adapt an XYZ color between two illuminants of the same observer
///
/// The result is not clamped.
pub fn adapt(
    xyz: Vector3,
    source: Illuminant,
    target: Illuminant,
    observer: Observer,
    method: AdaptationMethod,
) -> Result<Vector3> {
    let src_white = white_point(observer, source)?;
    let dst_white = white_point(observer, target)?;
    Ok(adaptation_matrix(src_white, dst_white, method).dot(xyz))
}

/// Adapt an XYZ color, resolving illuminants, observer and method by name
///
/// Unknown names fail with the matching `Unknown*` error.
pub fn apply_chromatic_adaptation(
    x: f64,
    y: f64,
    z: f64,
    source: &str,
    target: &str,
    observer: &str,
    method: &str,
) -> Result<[f64; 3]> {
    let observer: Observer = observer.parse()?;
    let source: Illuminant = source.parse()?;
    let target: Illuminant = target.parse()?;
    let method: AdaptationMethod = method.parse()?;

    adapt(Vector3::new(x, y, z), source, target, observer, method).map(|v| v.to_array())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    /// Pre-computed D65 → D50 Bradford matrix (Lindbloom)
    const D65_TO_D50_BRADFORD: Matrix3x3 = Matrix3x3::new([
        [1.0478112, 0.0228866, -0.0501270],
        [0.0295424, 0.9904844, -0.0170491],
        [-0.0092345, 0.0150436, 0.7521316],
    ]);

    fn wp(illuminant: Illuminant) -> Vector3 {
        white_point(Observer::Two, illuminant).unwrap()
    }

    #[test]
    fn test_identity_adaptation() {
        for method in AdaptationMethod::ALL {
            let matrix = adaptation_matrix(wp(Illuminant::D65), wp(Illuminant::D65), method);
            assert!(matrix.is_identity(1e-12), "{} not identity", method);
        }
    }

    #[test]
    fn test_d65_to_d50_bradford() {
        let computed = adaptation_matrix(wp(Illuminant::D65), wp(Illuminant::D50), AdaptationMethod::Bradford);
        assert!(
            computed.approx_eq(&D65_TO_D50_BRADFORD, 1e-5),
            "D65→D50 matrix mismatch: computed={:?}",
            computed
        );
    }

    #[test]
    fn test_white_maps_to_white() {
        for method in AdaptationMethod::ALL {
            let adapted = adapt(
                wp(Illuminant::D65),
                Illuminant::D65,
                Illuminant::A,
                Observer::Two,
                method,
            )
            .unwrap();
            assert!(
                adapted.approx_eq(&wp(Illuminant::A), 1e-9),
                "{}: D65 white → A gave {:?}",
                method,
                adapted
            );
        }
    }

    #[test]
    fn test_xyz_scaling_is_diagonal() {
        let matrix = adaptation_matrix(wp(Illuminant::D65), wp(Illuminant::D50), AdaptationMethod::XyzScaling);
        for i in 0..3 {
            for j in 0..3 {
                if i != j {
                    assert!(matrix.m[i][j].abs() < EPSILON);
                }
            }
        }
        assert!((matrix.m[2][2] - 0.82521 / 1.08883).abs() < EPSILON);
    }

    #[test]
    fn test_adaptation_roundtrip() {
        let color = Vector3::new(0.5, 0.4, 0.3);
        for method in AdaptationMethod::ALL {
            let there = adapt(color, Illuminant::D65, Illuminant::F11, Observer::Two, method).unwrap();
            let back = adapt(there, Illuminant::F11, Illuminant::D65, Observer::Two, method).unwrap();
            assert!(color.approx_eq(&back, 1e-10), "{} roundtrip: {:?}", method, back);
        }
    }

    #[test]
    fn test_cone_response_inverse() {
        for method in AdaptationMethod::ALL {
            let cone = method.cone_response();
            assert!(cone.forward.multiply(&cone.inverse).is_identity(1e-12));
        }
    }

    #[test]
    fn test_apply_by_name() {
        let [x, y, z] = apply_chromatic_adaptation(0.5, 0.4, 0.3, "d65", "d65", "2", "bradford").unwrap();
        assert!((x - 0.5).abs() < 1e-10 && (y - 0.4).abs() < 1e-10 && (z - 0.3).abs() < 1e-10);

        assert!(matches!(
            apply_chromatic_adaptation(0.5, 0.4, 0.3, "d65", "d50", "2", "sharp"),
            Err(Error::UnknownAdaptationMethod(_))
        ));
        assert!(matches!(
            apply_chromatic_adaptation(0.5, 0.4, 0.3, "d65", "d93", "2", "bradford"),
            Err(Error::UnknownIlluminant(_))
        ));
        assert!(matches!(
            apply_chromatic_adaptation(0.5, 0.4, 0.3, "d65", "d50", "5", "bradford"),
            Err(Error::UnknownObserver(_))
        ));
        // The 10° table holds daylight illuminants only
        assert!(matches!(
            apply_chromatic_adaptation(0.5, 0.4, 0.3, "d65", "a", "10", "bradford"),
            Err(Error::UnknownIlluminant(_))
        ));
    }

    #[test]
    fn test_method_names() {
        assert_eq!("Von Kries".parse::<AdaptationMethod>().unwrap(), AdaptationMethod::VonKries);
        assert_eq!("von_kries".parse::<AdaptationMethod>().unwrap(), AdaptationMethod::VonKries);
        assert_eq!("CAT02".parse::<AdaptationMethod>().unwrap(), AdaptationMethod::Cat02);
        for method in AdaptationMethod::ALL {
            assert_eq!(method.name().parse::<AdaptationMethod>().unwrap(), method);
        }
    }
}
