//! RGB working space registry
//!
//! Every working space is defined by the xy chromaticities of its primaries,
//! a reference illuminant and a transfer function. The RGB→XYZ matrix is
//! derived from the primaries and the 2° white point of the illuminant, so
//! that RGB (1, 1, 1) lands exactly on the white point. The XYZ→RGB matrix
//! is its exact inverse.
//!
//! BT.2020 is the exception: ITU-R BT.2020 publishes its white as the
//! chromaticity (0.3127, 0.3290), which differs from the tabulated D65
//! white point in the fifth decimal. Its matrices use the published value.
//!
//! The registry is built on first use and never changes afterwards.

use std::sync::LazyLock;

use crate::color::illuminant::{Illuminant, Observer, white_point};
use crate::error::{Error, Result};
use crate::math::{Matrix3x3, TransferFunction, Vector3};

pub const ADOBE_RGB: &str = "Adobe RGB";
pub const APPLE_RGB: &str = "AppleRGB";
pub const BEST_RGB: &str = "Best RGB";
pub const BETA_RGB: &str = "Beta RGB";
pub const BRUCE_RGB: &str = "Bruce RGB";
pub const BT2020: &str = "ITU-R BT.2020";
pub const BT2020_12BIT: &str = "ITU-R BT.2020 12 bits";
pub const CIE_RGB: &str = "CIE RGB";
pub const COLOR_MATCH_RGB: &str = "ColorMatch RGB";
pub const DON_RGB_4: &str = "Don RGB 4";
pub const ECI_RGB: &str = "ECI RGB";
pub const EKTA_SPACE_PS5: &str = "Ekta Space PS5";
pub const NTSC_RGB: &str = "NTSC RGB";
pub const PAL_SECAM_RGB: &str = "PAL/SECAM RGB";
pub const PROPHOTO_RGB: &str = "ProPhoto RGB";
pub const SMPTE_C_RGB: &str = "SMPTE-C RGB";
pub const SRGB: &str = "sRgb";
pub const WIDE_GAMUT_RGB: &str = "Wide Gamut RGB";

/// A named RGB working space
#[derive(Debug, Clone, PartialEq)]
pub struct RgbWorkingSpace {
    /// Registry name
    pub name: &'static str,
    /// Encoding curve
    pub transfer: TransferFunction,
    /// Reference illuminant (2° observer)
    pub illuminant: Illuminant,
    /// xy chromaticities of the red, green and blue primaries
    pub primaries: [(f64, f64); 3],
    /// XYZ of the reference white
    pub white: Vector3,
    /// Linear RGB → XYZ
    pub to_xyz: Matrix3x3,
    /// XYZ → linear RGB
    pub from_xyz: Matrix3x3,
}

impl RgbWorkingSpace {
    /// Derive a working space from its primaries
    ///
    /// Returns None if the primaries are collinear.
    pub fn from_primaries(
        name: &'static str,
        transfer: TransferFunction,
        illuminant: Illuminant,
        primaries: [(f64, f64); 3],
    ) -> Option<Self> {
        let white = white_point(Observer::Two, illuminant).ok()?;
        Self::with_white(name, transfer, illuminant, primaries, white)
    }

    /// Derive a working space from its primaries and an explicit white
    pub fn with_white(
        name: &'static str,
        transfer: TransferFunction,
        illuminant: Illuminant,
        primaries: [(f64, f64); 3],
        white: Vector3,
    ) -> Option<Self> {
        let to_xyz = primaries_to_xyz_matrix(primaries, white)?;
        let from_xyz = to_xyz.inverse()?;

        Some(Self {
            name,
            transfer,
            illuminant,
            primaries,
            white,
            to_xyz,
            from_xyz,
        })
    }
}

/// Compute the linear RGB → XYZ matrix for a set of primaries
///
/// Each primary's chromaticity is lifted to XYZ with Y = 1, then the columns
/// are scaled so that their sum equals the white point.
pub fn primaries_to_xyz_matrix(primaries: [(f64, f64); 3], white: Vector3) -> Option<Matrix3x3> {
    let [red, green, blue] = primaries.map(chromaticity_to_xyz);
    let columns = Matrix3x3::from_columns(red, green, blue);

    let scale = columns.inverse()?.dot(white);
    Some(columns.multiply(&scale.to_diagonal()))
}

/// XYZ (Y = 1) of an xy chromaticity
pub fn chromaticity_to_xyz((x, y): (f64, f64)) -> Vector3 {
    Vector3::new(x / y, 1.0, (1.0 - x - y) / y)
}

struct Definition {
    name: &'static str,
    transfer: TransferFunction,
    illuminant: Illuminant,
    primaries: [(f64, f64); 3],
    /// Published white chromaticity, when it overrides the illuminant table
    white_xy: Option<(f64, f64)>,
}

/// ITU-R BT.2020 white chromaticity
const BT2020_WHITE_XY: (f64, f64) = (0.3127, 0.3290);

const DEFINITIONS: [Definition; 18] = [
    Definition {
        name: ADOBE_RGB,
        transfer: TransferFunction::Gamma(2.2),
        illuminant: Illuminant::D65,
        primaries: [(0.64, 0.33), (0.21, 0.71), (0.15, 0.06)],
        white_xy: None,
    },
    Definition {
        name: APPLE_RGB,
        transfer: TransferFunction::Gamma(1.8),
        illuminant: Illuminant::D65,
        primaries: [(0.625, 0.34), (0.28, 0.595), (0.155, 0.07)],
        white_xy: None,
    },
    Definition {
        name: BEST_RGB,
        transfer: TransferFunction::Gamma(2.2),
        illuminant: Illuminant::D50,
        primaries: [(0.7347, 0.2653), (0.215, 0.775), (0.13, 0.035)],
        white_xy: None,
    },
    Definition {
        name: BETA_RGB,
        transfer: TransferFunction::Gamma(2.2),
        illuminant: Illuminant::D50,
        primaries: [(0.6888, 0.3112), (0.1986, 0.7551), (0.1265, 0.0352)],
        white_xy: None,
    },
    Definition {
        name: BRUCE_RGB,
        transfer: TransferFunction::Gamma(2.2),
        illuminant: Illuminant::D65,
        primaries: [(0.64, 0.33), (0.28, 0.65), (0.15, 0.06)],
        white_xy: None,
    },
    Definition {
        name: BT2020,
        transfer: TransferFunction::BT2020_10BIT,
        illuminant: Illuminant::D65,
        primaries: [(0.708, 0.292), (0.170, 0.797), (0.131, 0.046)],
        white_xy: Some(BT2020_WHITE_XY),
    },
    Definition {
        name: BT2020_12BIT,
        transfer: TransferFunction::BT2020_12BIT,
        illuminant: Illuminant::D65,
        primaries: [(0.708, 0.292), (0.170, 0.797), (0.131, 0.046)],
        white_xy: Some(BT2020_WHITE_XY),
    },
    Definition {
        name: CIE_RGB,
        transfer: TransferFunction::Gamma(2.2),
        illuminant: Illuminant::E,
        primaries: [(0.735, 0.265), (0.274, 0.717), (0.167, 0.009)],
        white_xy: None,
    },
    Definition {
        name: COLOR_MATCH_RGB,
        transfer: TransferFunction::Gamma(1.8),
        illuminant: Illuminant::D50,
        primaries: [(0.63, 0.34), (0.295, 0.605), (0.15, 0.075)],
        white_xy: None,
    },
    Definition {
        name: DON_RGB_4,
        transfer: TransferFunction::Gamma(2.2),
        illuminant: Illuminant::D50,
        primaries: [(0.696, 0.3), (0.215, 0.765), (0.13, 0.035)],
        white_xy: None,
    },
    Definition {
        name: ECI_RGB,
        transfer: TransferFunction::Gamma(1.8),
        illuminant: Illuminant::D50,
        primaries: [(0.67, 0.33), (0.21, 0.71), (0.14, 0.08)],
        white_xy: None,
    },
    Definition {
        name: EKTA_SPACE_PS5,
        transfer: TransferFunction::Gamma(2.2),
        illuminant: Illuminant::D50,
        primaries: [(0.695, 0.305), (0.26, 0.7), (0.11, 0.005)],
        white_xy: None,
    },
    Definition {
        name: NTSC_RGB,
        transfer: TransferFunction::Gamma(2.2),
        illuminant: Illuminant::D50,
        primaries: [(0.67, 0.33), (0.21, 0.71), (0.14, 0.08)],
        white_xy: None,
    },
    Definition {
        name: PAL_SECAM_RGB,
        transfer: TransferFunction::Gamma(2.2),
        illuminant: Illuminant::D65,
        primaries: [(0.64, 0.33), (0.29, 0.6), (0.15, 0.06)],
        white_xy: None,
    },
    Definition {
        name: PROPHOTO_RGB,
        transfer: TransferFunction::Gamma(1.8),
        illuminant: Illuminant::D50,
        primaries: [(0.7347, 0.2653), (0.1596, 0.8404), (0.0366, 0.0001)],
        white_xy: None,
    },
    Definition {
        name: SMPTE_C_RGB,
        transfer: TransferFunction::Gamma(2.2),
        illuminant: Illuminant::D65,
        primaries: [(0.63, 0.34), (0.31, 0.595), (0.155, 0.07)],
        white_xy: None,
    },
    Definition {
        name: SRGB,
        transfer: TransferFunction::Srgb,
        illuminant: Illuminant::D65,
        primaries: [(0.64, 0.33), (0.30, 0.60), (0.15, 0.06)],
        white_xy: None,
    },
    Definition {
        name: WIDE_GAMUT_RGB,
        transfer: TransferFunction::Gamma(2.2),
        illuminant: Illuminant::D50,
        primaries: [(0.735, 0.265), (0.115, 0.826), (0.157, 0.018)],
        white_xy: None,
    },
];

static WORKING_SPACES: LazyLock<Vec<RgbWorkingSpace>> = LazyLock::new(|| {
    let spaces: Vec<_> = DEFINITIONS
        .iter()
        .filter_map(|def| {
            let space = match def.white_xy {
                Some(xy) => RgbWorkingSpace::with_white(
                    def.name,
                    def.transfer,
                    def.illuminant,
                    def.primaries,
                    chromaticity_to_xyz(xy),
                ),
                None => RgbWorkingSpace::from_primaries(
                    def.name,
                    def.transfer,
                    def.illuminant,
                    def.primaries,
                ),
            };
            if space.is_none() {
                log::error!("degenerate primaries for working space {}", def.name);
            }
            space
        })
        .collect();
    log::debug!("built {} RGB working spaces", spaces.len());
    spaces
});

/// Look up a working space by name
///
/// An exact match wins; otherwise names are compared ignoring ASCII case.
pub fn lookup(name: &str) -> Result<&'static RgbWorkingSpace> {
    let spaces: &'static [RgbWorkingSpace] = &WORKING_SPACES;
    spaces
        .iter()
        .find(|space| space.name == name)
        .or_else(|| spaces.iter().find(|space| space.name.eq_ignore_ascii_case(name.trim())))
        .ok_or_else(|| {
            log::trace!("rejecting working space {:?}", name);
            Error::UnknownColorSpace(name.to_string())
        })
}

/// All registered working spaces
pub fn all() -> impl Iterator<Item = &'static RgbWorkingSpace> {
    let spaces: &'static [RgbWorkingSpace] = &WORKING_SPACES;
    spaces.iter()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-7;

    #[test]
    fn test_registry_complete() {
        assert_eq!(all().count(), DEFINITIONS.len());
        for def in &DEFINITIONS {
            assert!(lookup(def.name).is_ok(), "{} missing", def.name);
        }
    }

    #[test]
    fn test_srgb_matrix() {
        let srgb = lookup(SRGB).unwrap();
        let expected = Matrix3x3::new([
            [0.4124564, 0.3575761, 0.1804375],
            [0.2126729, 0.7151522, 0.0721750],
            [0.0193339, 0.1191920, 0.9503041],
        ]);
        assert!(srgb.to_xyz.approx_eq(&expected, EPSILON), "{:?}", srgb.to_xyz);

        let expected_inverse = Matrix3x3::new([
            [3.2404542, -1.5371385, -0.4985314],
            [-0.9692660, 1.8760108, 0.0415560],
            [0.0556434, -0.2040259, 1.0572252],
        ]);
        assert!(srgb.from_xyz.approx_eq(&expected_inverse, EPSILON));
    }

    #[test]
    fn test_prophoto_matrix() {
        let prophoto = lookup(PROPHOTO_RGB).unwrap();
        let expected = Matrix3x3::new([
            [0.7976749, 0.1351917, 0.0313534],
            [0.2880402, 0.7118741, 0.0000857],
            [0.0000000, 0.0000000, 0.8252100],
        ]);
        assert!(prophoto.to_xyz.approx_eq(&expected, EPSILON));
    }

    #[test]
    fn test_rows_sum_to_white() {
        for space in all() {
            let white = space.to_xyz.dot(Vector3::new(1.0, 1.0, 1.0));
            assert!(white.approx_eq(&space.white, 1e-12), "{}", space.name);
            assert!(space.to_xyz.multiply(&space.from_xyz).is_identity(1e-12), "{}", space.name);
        }
    }

    #[test]
    fn test_bt2020_matrix() {
        let bt2020 = lookup(BT2020).unwrap();
        let expected = Matrix3x3::new([
            [0.6369580, 0.1446169, 0.1688810],
            [0.2627002, 0.6779981, 0.0593017],
            [0.0000000, 0.0280727, 1.0609851],
        ]);
        assert!(bt2020.to_xyz.approx_eq(&expected, EPSILON), "{:?}", bt2020.to_xyz);
        assert_eq!(lookup(BT2020_12BIT).unwrap().to_xyz, bt2020.to_xyz);
    }

    #[test]
    fn test_transfer_selection() {
        assert_eq!(lookup(SRGB).unwrap().transfer, TransferFunction::Srgb);
        assert_eq!(lookup(BT2020).unwrap().transfer, TransferFunction::BT2020_10BIT);
        assert_eq!(lookup(BT2020_12BIT).unwrap().transfer, TransferFunction::BT2020_12BIT);
        assert_eq!(lookup(PROPHOTO_RGB).unwrap().transfer, TransferFunction::Gamma(1.8));
        assert_eq!(lookup(ADOBE_RGB).unwrap().transfer, TransferFunction::Gamma(2.2));
    }

    #[test]
    fn test_lookup_case_insensitive() {
        assert_eq!(lookup("SRGB").unwrap().name, SRGB);
        assert_eq!(lookup("adobe rgb").unwrap().name, ADOBE_RGB);
    }

    #[test]
    fn test_unknown_space() {
        assert!(matches!(lookup("invalid space"), Err(Error::UnknownColorSpace(name)) if name == "invalid space"));
    }
}
