//! Error types for chroma

use thiserror::Error;

/// Result type for chroma operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in chroma conversions
///
/// Every variant describes a caller-input or configuration problem. None of
/// them is transient, so nothing in the crate retries.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A component lies outside its valid domain
    #[error("{component} = {value} is out of range [{min}, {max}]")]
    OutOfRange {
        component: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// RGB working space name not in the registry
    #[error("Unknown color space: {0}")]
    UnknownColorSpace(String),

    /// Reference illuminant not known for the requested observer
    #[error("Unknown illuminant: {0}")]
    UnknownIlluminant(String),

    /// Observer angle other than 2° or 10°
    #[error("Unknown observer: {0}")]
    UnknownObserver(String),

    /// Chromatic adaptation method name not recognized
    #[error("Unknown adaptation method: {0}")]
    UnknownAdaptationMethod(String),

    /// Text input that does not match the expected form
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Spectral tables of differing lengths
    #[error("Mismatched length: expected {expected}, got {actual}")]
    MismatchedLength { expected: usize, actual: usize },

    /// Conversion only defined for a different observer/illuminant pair
    #[error("Unsupported reference white: {observer} observer, illuminant {illuminant}")]
    UnsupportedReference {
        observer: String,
        illuminant: String,
    },

    /// Buffer size mismatch
    #[error("Buffer size mismatch: expected {expected}, got {actual}")]
    BufferSize { expected: usize, actual: usize },
}

impl Error {
    /// Build an [`Error::OutOfRange`] for a named component
    pub(crate) fn out_of_range(component: &'static str, value: f64, min: f64, max: f64) -> Self {
        Self::OutOfRange {
            component,
            value,
            min,
            max,
        }
    }
}

/// Check that `value` lies in `[min, max]`
///
/// NaN is always rejected.
#[inline]
pub(crate) fn check_range(component: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(Error::out_of_range(component, value, min, max))
    }
}

/// Check that `value` lies in the unit interval
#[inline]
pub(crate) fn check_unit(component: &'static str, value: f64) -> Result<()> {
    check_range(component, value, 0.0, 1.0)
}

/// Check that a hue in degrees lies in `[0, 360)`
#[inline]
pub(crate) fn check_hue(component: &'static str, value: f64) -> Result<()> {
    if (0.0..360.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::out_of_range(component, value, 0.0, 360.0))
    }
}

/// Check that `value` is neither NaN nor infinite
#[inline]
pub(crate) fn check_finite(component: &'static str, value: f64) -> Result<()> {
    check_range(component, value, f64::MIN, f64::MAX)
}
