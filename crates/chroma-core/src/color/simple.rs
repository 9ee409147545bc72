//! Device-level conversions that need no reference white
//!
//! HSL, HSV, YIQ, YUV, CMY and CMYK are all direct functions of encoded
//! RGB in [0, 1]. Hue is expressed in degrees.

use crate::error::{Result, check_finite, check_hue, check_unit};

/// Validate an encoded RGB triple
#[inline]
fn check_rgb(r: f64, g: f64, b: f64) -> Result<()> {
    check_unit("r", r)?;
    check_unit("g", g)?;
    check_unit("b", b)
}

/// Fold a hue in degrees into [0, 360)
#[inline]
fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    if h >= 360.0 { 0.0 } else { h }
}

/// Hue of an RGB triple with a nonzero chroma `delta`
#[inline]
fn hue(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    let sector = if r == max {
        (g - b) / delta
    } else if g == max {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };
    normalize_hue(sector * 60.0)
}

// ============================================================================
// HSL / HSV
// ============================================================================

/// Convert RGB to HSL
///
/// Greys have hue and saturation 0.
pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> Result<[f64; 3]> {
    check_rgb(r, g, b)?;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let delta = max - min;
    if delta == 0.0 {
        return Ok([0.0, 0.0, l]);
    }

    let s = if l < 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };

    Ok([hue(r, g, b, max, delta), s, l])
}

/// Convert HSL to RGB
///
/// Hue must lie in [0, 360).
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Result<[f64; 3]> {
    check_hue("h", h)?;
    check_unit("s", s)?;
    check_unit("l", l)?;

    if s == 0.0 {
        return Ok([l, l, l]);
    }

    let upper = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let lower = 2.0 * l - upper;
    let sector = h / 60.0;

    let channel = |offset: f64| {
        let t = (sector + offset).rem_euclid(6.0);
        if t < 1.0 {
            lower + (upper - lower) * t
        } else if t < 3.0 {
            upper
        } else if t < 4.0 {
            lower + (upper - lower) * (4.0 - t)
        } else {
            lower
        }
    };

    Ok([channel(2.0), channel(0.0), channel(-2.0)])
}

/// Convert RGB to HSV
///
/// Greys have hue and saturation 0.
pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> Result<[f64; 3]> {
    check_rgb(r, g, b)?;

    let max = r.max(g).max(b);
    let delta = max - r.min(g).min(b);
    if delta == 0.0 {
        return Ok([0.0, 0.0, max]);
    }

    Ok([hue(r, g, b, max, delta), delta / max, max])
}

/// Convert HSV to RGB
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Result<[f64; 3]> {
    check_hue("h", h)?;
    check_unit("s", s)?;
    check_unit("v", v)?;

    if s == 0.0 {
        return Ok([v, v, v]);
    }

    let sector = h / 60.0;
    let chroma = v * s;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let m = v - chroma;

    let (r, g, b) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    Ok([r + m, g + m, b + m])
}

// ============================================================================
// YIQ / YUV
// ============================================================================

/// Convert RGB to NTSC YIQ
pub fn rgb_to_yiq(r: f64, g: f64, b: f64) -> Result<[f64; 3]> {
    check_rgb(r, g, b)?;
    Ok([
        0.29895808 * r + 0.58660979 * g + 0.11443213 * b,
        0.59590296 * r - 0.27405705 * g - 0.32184591 * b,
        0.21133576 * r - 0.52263517 * g + 0.31129940 * b,
    ])
}

/// Convert NTSC YIQ to RGB
///
/// Only luma is range checked; out-of-gamut chroma yields RGB outside [0, 1].
pub fn yiq_to_rgb(y: f64, i: f64, q: f64) -> Result<[f64; 3]> {
    check_unit("y", y)?;
    check_finite("i", i)?;
    check_finite("q", q)?;
    Ok([
        y + 0.9562 * i + 0.6210 * q,
        y - 0.2717 * i - 0.6485 * q,
        y - 1.1053 * i + 1.7020 * q,
    ])
}

/// Luma coefficients used for YUV
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum YuvStandard {
    /// ITU-R BT.601 standard definition
    #[default]
    Sd,
    /// ITU-R BT.709 high definition
    Hd,
}

/// Convert RGB to YUV
pub fn rgb_to_yuv(r: f64, g: f64, b: f64, standard: YuvStandard) -> Result<[f64; 3]> {
    check_rgb(r, g, b)?;
    Ok(match standard {
        YuvStandard::Sd => [
            0.299 * r + 0.587 * g + 0.114 * b,
            -0.14713 * r - 0.28886 * g + 0.436 * b,
            0.615 * r - 0.51499 * g - 0.10001 * b,
        ],
        YuvStandard::Hd => [
            0.2126 * r + 0.7152 * g + 0.0722 * b,
            -0.09991 * r - 0.33609 * g + 0.436 * b,
            0.615 * r - 0.55861 * g - 0.05639 * b,
        ],
    })
}

/// Convert YUV to RGB
///
/// Only luma is range checked.
pub fn yuv_to_rgb(y: f64, u: f64, v: f64, standard: YuvStandard) -> Result<[f64; 3]> {
    check_unit("y", y)?;
    check_finite("u", u)?;
    check_finite("v", v)?;
    Ok(match standard {
        YuvStandard::Sd => [y + 1.13983 * v, y - 0.39465 * u - 0.58060 * v, y + 2.03211 * u],
        YuvStandard::Hd => [y + 1.28033 * v, y - 0.21482 * u - 0.38059 * v, y + 2.12798 * u],
    })
}

// ============================================================================
// CMY / CMYK
// ============================================================================

/// Convert RGB to CMY
pub fn rgb_to_cmy(r: f64, g: f64, b: f64) -> Result<[f64; 3]> {
    check_rgb(r, g, b)?;
    Ok([1.0 - r, 1.0 - g, 1.0 - b])
}

/// Convert CMY to RGB
pub fn cmy_to_rgb(c: f64, m: f64, y: f64) -> Result<[f64; 3]> {
    check_unit("c", c)?;
    check_unit("m", m)?;
    check_unit("y", y)?;
    Ok([1.0 - c, 1.0 - m, 1.0 - y])
}

/// Convert CMY to CMYK by full grey-component replacement
///
/// Pure black has no chromatic ink: (0, 0, 0, 1).
pub fn cmy_to_cmyk(c: f64, m: f64, y: f64) -> Result<[f64; 4]> {
    check_unit("c", c)?;
    check_unit("m", m)?;
    check_unit("y", y)?;

    let k = c.min(m).min(y);
    if k == 1.0 {
        return Ok([0.0, 0.0, 0.0, 1.0]);
    }
    let scale = 1.0 - k;
    Ok([(c - k) / scale, (m - k) / scale, (y - k) / scale, k])
}

/// Convert CMYK to CMY
pub fn cmyk_to_cmy(c: f64, m: f64, y: f64, k: f64) -> Result<[f64; 3]> {
    check_unit("c", c)?;
    check_unit("m", m)?;
    check_unit("y", y)?;
    check_unit("k", k)?;

    let scale = 1.0 - k;
    Ok([c * scale + k, m * scale + k, y * scale + k])
}
