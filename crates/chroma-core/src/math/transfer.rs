//! Transfer functions for RGB working spaces
//!
//! Each working space carries one [`TransferFunction`], chosen when the
//! registry is built:
//! - sRGB piecewise curve (IEC 61966-2-1)
//! - ITU-R BT.2020 video curve, 10-bit and 12-bit constants
//! - plain power-law gamma
//!
//! `linearize` maps stored (encoded) values to linear light, `delinearize`
//! goes the other way.

use crate::math::Vector3;

/// Exponent of the BT.2020 power segment (encode direction)
const BT2020_EXPONENT: f64 = 0.45;

/// Slope of the BT.2020 linear segment
const BT2020_SLOPE: f64 = 4.5;

/// Encoding curve of an RGB working space
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransferFunction {
    /// sRGB: linear toe below 0.04045, 2.4 power above
    Srgb,
    /// BT.2020 video curve
    ///
    /// `breakpoint` bounds the linear toe on the encoded side, `beta` on the
    /// linear side.
    Bt2020 {
        alpha: f64,
        beta: f64,
        breakpoint: f64,
    },
    /// Pure power law: linear = encoded^gamma
    ///
    /// Mirrored through the origin so that rounding noise below zero stays
    /// finite.
    Gamma(f64),
}

impl TransferFunction {
    /// BT.2020 curve for 10-bit systems
    pub const BT2020_10BIT: Self = Self::Bt2020 {
        alpha: 1.099,
        beta: 0.018,
        breakpoint: 0.081_247_944_035_140_49,
    };

    /// BT.2020 curve for 12-bit systems
    pub const BT2020_12BIT: Self = Self::Bt2020 {
        alpha: 1.0993,
        beta: 0.0181,
        breakpoint: 0.081_697_877_417_347,
    };

    /// Decode one encoded component to linear light
    #[inline]
    pub fn linearize(&self, v: f64) -> f64 {
        match *self {
            Self::Srgb => srgb_decode(v),
            Self::Bt2020 {
                alpha, breakpoint, ..
            } => {
                if v <= breakpoint {
                    v / BT2020_SLOPE
                } else {
                    ((v + (alpha - 1.0)) / alpha).powf(1.0 / BT2020_EXPONENT)
                }
            }
            Self::Gamma(gamma) => mirrored_powf(v, gamma),
        }
    }

    /// Encode one linear-light component
    #[inline]
    pub fn delinearize(&self, v: f64) -> f64 {
        match *self {
            Self::Srgb => srgb_encode(v),
            Self::Bt2020 { alpha, beta, .. } => {
                if v < beta {
                    v * BT2020_SLOPE
                } else {
                    alpha * v.powf(BT2020_EXPONENT) - (alpha - 1.0)
                }
            }
            Self::Gamma(gamma) => mirrored_powf(v, 1.0 / gamma),
        }
    }

    /// Decode every component of an RGB vector
    #[inline]
    pub fn linearize_vector(&self, rgb: Vector3) -> Vector3 {
        rgb.map(|c| self.linearize(c))
    }

    /// Encode every component of a linear RGB vector
    #[inline]
    pub fn delinearize_vector(&self, rgb: Vector3) -> Vector3 {
        rgb.map(|c| self.delinearize(c))
    }
}

#[inline]
fn mirrored_powf(v: f64, exponent: f64) -> f64 {
    v.signum() * v.abs().powf(exponent)
}

/// sRGB gamma decode (encoded → linear)
#[inline]
pub fn srgb_decode(encoded: f64) -> f64 {
    if encoded <= 0.04045 {
        encoded / 12.92
    } else {
        ((encoded + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB gamma encode (linear → encoded)
#[inline]
pub fn srgb_encode(linear: f64) -> f64 {
    if linear <= 0.0031308 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}
