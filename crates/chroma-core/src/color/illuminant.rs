//! CIE standard observers, illuminants and white points
//!
//! White points are CIE XYZ coordinates normalized to Y = 1.0, keyed by
//! observer angle and illuminant. The 2° table covers all supported
//! illuminants; the 10° table only the daylight series.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::math::Vector3;

/// CIE standard observer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Observer {
    /// CIE 1931 2° standard observer
    #[default]
    Two,
    /// CIE 1964 10° supplementary standard observer
    Ten,
}

impl Observer {
    /// Field of view in degrees
    pub const fn degrees(&self) -> u32 {
        match self {
            Self::Two => 2,
            Self::Ten => 10,
        }
    }

    /// Observer for a field-of-view angle in degrees
    pub fn from_degrees(angle: u32) -> Result<Self> {
        match angle {
            2 => Ok(Self::Two),
            10 => Ok(Self::Ten),
            _ => Err(Error::UnknownObserver(angle.to_string())),
        }
    }
}

impl fmt::Display for Observer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

impl FromStr for Observer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().trim_end_matches('°') {
            "2" => Ok(Self::Two),
            "10" => Ok(Self::Ten),
            _ => {
                log::trace!("rejecting observer {:?}", s);
                Err(Error::UnknownObserver(s.to_string()))
            }
        }
    }
}

/// CIE standard reference illuminant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Illuminant {
    /// Incandescent / tungsten, ~2856K
    A,
    /// Direct noon sunlight (obsolete), ~4874K
    B,
    /// Average daylight (obsolete), ~6774K
    C,
    /// Horizon light, ~5003K. ICC profile connection space white.
    D50,
    /// Mid-morning daylight, ~5503K
    D55,
    /// Noon daylight, ~6504K
    D65,
    /// North sky daylight, ~7504K
    D75,
    /// Equal energy
    E,
    /// Cool white fluorescent
    F2,
    /// Broadband daylight fluorescent
    F7,
    /// Narrow band white fluorescent
    F11,
}

impl Illuminant {
    /// All supported illuminants
    pub const ALL: [Self; 11] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D50,
        Self::D55,
        Self::D65,
        Self::D75,
        Self::E,
        Self::F2,
        Self::F7,
        Self::F11,
    ];

    /// Canonical name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D50 => "D50",
            Self::D55 => "D55",
            Self::D65 => "D65",
            Self::D75 => "D75",
            Self::E => "E",
            Self::F2 => "F2",
            Self::F7 => "F7",
            Self::F11 => "F11",
        }
    }
}

impl fmt::Display for Illuminant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Illuminant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|illuminant| illuminant.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                log::trace!("rejecting illuminant {:?}", s);
                Error::UnknownIlluminant(s.to_string())
            })
    }
}

// ============================================================================
// White point tables
// ============================================================================

/// White points for the 2° observer, in `Illuminant::ALL` order
const WHITE_POINTS_2: [Vector3; 11] = [
    Vector3::new(1.09850, 1.00000, 0.35585),
    Vector3::new(0.99072, 1.00000, 0.85223),
    Vector3::new(0.98074, 1.00000, 1.18232),
    Vector3::new(0.96422, 1.00000, 0.82521),
    Vector3::new(0.95682, 1.00000, 0.92149),
    Vector3::new(0.95047, 1.00000, 1.08883),
    Vector3::new(0.94972, 1.00000, 1.22638),
    Vector3::new(1.00000, 1.00000, 1.00000),
    Vector3::new(0.99186, 1.00000, 0.67393),
    Vector3::new(0.95041, 1.00000, 1.08747),
    Vector3::new(1.00962, 1.00000, 0.64350),
];

/// White point for an observer and illuminant
///
/// Fails with [`Error::UnknownIlluminant`] when the 10° table has no entry
/// for the illuminant.
pub fn white_point(observer: Observer, illuminant: Illuminant) -> Result<Vector3> {
    match observer {
        Observer::Two => Ok(WHITE_POINTS_2[illuminant as usize]),
        Observer::Ten => match illuminant {
            Illuminant::D50 => Ok(Vector3::new(0.96720, 1.00000, 0.81430)),
            Illuminant::D55 => Ok(Vector3::new(0.95800, 1.00000, 0.90930)),
            Illuminant::D65 => Ok(Vector3::new(0.94810, 1.00000, 1.07300)),
            Illuminant::D75 => Ok(Vector3::new(0.94416, 1.00000, 1.20640)),
            _ => {
                log::trace!("no 10° white point for {}", illuminant);
                Err(Error::UnknownIlluminant(format!("{} ({} observer)", illuminant, observer)))
            }
        },
    }
}

/// White point looked up by observer and illuminant names
pub fn white_point_by_name(observer: &str, illuminant: &str) -> Result<Vector3> {
    white_point(observer.parse()?, illuminant.parse()?)
}

/// Chromaticity coordinates (x, y) of a white point
pub fn chromaticity(white: Vector3) -> (f64, f64) {
    let sum = white.sum();
    if sum > 0.0 {
        (white[0] / sum, white[1] / sum)
    } else {
        (0.0, 0.0)
    }
}
