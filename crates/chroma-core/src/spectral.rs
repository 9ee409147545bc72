//! Spectral power distribution to CIE XYZ
//!
//! Spectra are sampled every 10 nm from 340 nm to 830 nm. The reflectance
//! (or transmittance) samples are weighted by a reference illuminant and
//! the observer's color matching functions, then normalized so that a
//! perfect reflector has Y = 1.

use std::sync::LazyLock;

use crate::color::illuminant::{Illuminant, Observer};
use crate::error::{Error, Result};

/// Number of samples in every spectral table
pub const SAMPLE_COUNT: usize = 50;

/// Wavelength of the first sample, in nm
pub const START_WAVELENGTH: u32 = 340;

/// Distance between samples, in nm
pub const WAVELENGTH_STEP: u32 = 10;

/// Sampled wavelengths in nm
pub fn wavelengths() -> impl Iterator<Item = u32> {
    (0..SAMPLE_COUNT as u32).map(|i| START_WAVELENGTH + i * WAVELENGTH_STEP)
}

/// A reflectance spectrum on the standard sampling grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralColor {
    pub samples: [f64; SAMPLE_COUNT],
}

impl SpectralColor {
    pub const fn new(samples: [f64; SAMPLE_COUNT]) -> Self {
        Self { samples }
    }

    /// XYZ of this spectrum under a reference illuminant
    pub fn to_xyz(&self, observer: Observer, illuminant: &[f64]) -> Result<[f64; 3]> {
        spectral_to_xyz_with(&self.samples, observer, illuminant)
    }
}

/// Color matching functions x̄, ȳ, z̄ for an observer
pub fn color_matching_functions(
    observer: Observer,
) -> (&'static [f64; SAMPLE_COUNT], &'static [f64; SAMPLE_COUNT], &'static [f64; SAMPLE_COUNT]) {
    match observer {
        Observer::Two => (&CIE1931_X, &CIE1931_Y, &CIE1931_Z),
        Observer::Ten => (&CIE1964_X, &CIE1964_Y, &CIE1964_Z),
    }
}

/// Integrate a spectrum against a reference illuminant
///
/// `observer` is the field of view in degrees. 2 selects the CIE 1931
/// tables; every other value selects the CIE 1964 10° tables. Use
/// [`spectral_to_xyz_with`] for a checked observer.
pub fn spectral_to_xyz(samples: &[f64], observer: u32, illuminant: &[f64]) -> Result<[f64; 3]> {
    let observer = if observer == 2 { Observer::Two } else { Observer::Ten };
    spectral_to_xyz_with(samples, observer, illuminant)
}

/// Integrate a spectrum against a reference illuminant for an observer
///
/// Samples, illuminant and color matching functions must all have
/// [`SAMPLE_COUNT`] entries.
pub fn spectral_to_xyz_with(samples: &[f64], observer: Observer, illuminant: &[f64]) -> Result<[f64; 3]> {
    if samples.len() != SAMPLE_COUNT {
        return Err(Error::MismatchedLength {
            expected: SAMPLE_COUNT,
            actual: samples.len(),
        });
    }
    if illuminant.len() != SAMPLE_COUNT {
        return Err(Error::MismatchedLength {
            expected: SAMPLE_COUNT,
            actual: illuminant.len(),
        });
    }

    let (x_bar, y_bar, z_bar) = color_matching_functions(observer);

    let mut denominator = 0.0;
    let mut xyz = [0.0; 3];
    for i in 0..SAMPLE_COUNT {
        denominator += y_bar[i] * illuminant[i];

        let weighted = samples[i] * illuminant[i];
        xyz[0] += weighted * x_bar[i];
        xyz[1] += weighted * y_bar[i];
        xyz[2] += weighted * z_bar[i];
    }

    Ok(xyz.map(|c| c / denominator))
}

/// Relative spectral power of a reference illuminant
///
/// Tabulated for D65, A and E. Other illuminants fail with
/// [`Error::UnknownIlluminant`].
pub fn illuminant_spd(illuminant: Illuminant) -> Result<&'static [f64; SAMPLE_COUNT]> {
    match illuminant {
        Illuminant::D65 => Ok(&D65_SPD),
        Illuminant::A => Ok(&*ILLUMINANT_A_SPD),
        Illuminant::E => Ok(&EQUAL_ENERGY_SPD),
        _ => {
            log::trace!("no spectral table for {}", illuminant);
            Err(Error::UnknownIlluminant(illuminant.to_string()))
        }
    }
}

/// Second radiation constant used for illuminant A, in nm·K
const PLANCK_C2: f64 = 1.435e7;

/// Color temperature of illuminant A
const ILLUMINANT_A_KELVIN: f64 = 2848.0;

/// Illuminant A from Planck's law, normalized to 100 at 560 nm
static ILLUMINANT_A_SPD: LazyLock<[f64; SAMPLE_COUNT]> = LazyLock::new(|| {
    log::debug!("computing illuminant A spectrum");
    let planck = |nm: f64| (PLANCK_C2 / (ILLUMINANT_A_KELVIN * nm)).exp_m1();
    let mut spd = [0.0; SAMPLE_COUNT];
    for (value, nm) in spd.iter_mut().zip(wavelengths()) {
        let nm = f64::from(nm);
        *value = 100.0 * (560.0 / nm).powi(5) * planck(560.0) / planck(nm);
    }
    spd
});

const EQUAL_ENERGY_SPD: [f64; SAMPLE_COUNT] = [100.0; SAMPLE_COUNT];

// ============================================================================
// Tables, 340 nm to 830 nm in 10 nm steps
// ============================================================================

/// CIE 1931 2° x̄
const CIE1931_X: [f64; SAMPLE_COUNT] = [
    0.0, 0.0, 0.0001299, 0.0004149, 0.001368,
    0.004243, 0.01431, 0.04351, 0.13438, 0.2839,
    0.34828, 0.3362, 0.2908, 0.19536, 0.09564,
    0.03201, 0.0049, 0.0093, 0.06327, 0.1655,
    0.2904, 0.4334499, 0.5945, 0.7621, 0.9163,
    1.0263, 1.0622, 1.0026, 0.8544499, 0.6424,
    0.4479, 0.2835, 0.1649, 0.0874, 0.04677,
    0.0227, 0.01135916, 0.005790346, 0.002899327, 0.001439971,
    0.0006900786, 0.0003323011, 0.0001661505, 0.00008307527, 0.00004150994,
    0.00002067383, 0.00001025398, 0.000005085868, 0.000002522525, 0.000001251141,
];

/// CIE 1931 2° ȳ
const CIE1931_Y: [f64; SAMPLE_COUNT] = [
    0.0, 0.0, 0.000003917, 0.00001239, 0.000039,
    0.00012, 0.000396, 0.00121, 0.004, 0.0116,
    0.023, 0.038, 0.06, 0.09098, 0.13902,
    0.20802, 0.323, 0.503, 0.71, 0.862,
    0.954, 0.9949501, 0.995, 0.952, 0.87,
    0.757, 0.631, 0.503, 0.381, 0.265,
    0.175, 0.107, 0.061, 0.032, 0.017,
    0.00821, 0.004102, 0.002091, 0.001047, 0.00052,
    0.0002492, 0.00012, 0.00006, 0.00003, 0.000014999,
    0.0000074657, 0.0000037029, 0.0000018366, 0.00000091093, 0.00000045181,
];

/// CIE 1931 2° z̄
const CIE1931_Z: [f64; SAMPLE_COUNT] = [
    0.0, 0.0, 0.0006061, 0.001946, 0.00645,
    0.02005, 0.06785, 0.2074, 0.6456, 1.3856,
    1.74706, 1.77211, 1.6692, 1.28764, 0.8129501,
    0.46518, 0.272, 0.1582, 0.07824999, 0.04216,
    0.0203, 0.008749999, 0.0039, 0.0021, 0.001650001,
    0.0011, 0.0008, 0.00034, 0.00019, 0.00004999999,
    0.00002, 0.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 0.0, 0.0,
];

/// CIE 1964 10° x̄
const CIE1964_X: [f64; SAMPLE_COUNT] = [
    0.0, 0.0, 0.0000001222, 0.0000059586, 0.000159952,
    0.0023616, 0.0191097, 0.084736, 0.204492, 0.314679,
    0.383734, 0.370702, 0.302273, 0.195618, 0.080507,
    0.016172, 0.003816, 0.037465, 0.117749, 0.236491,
    0.376772, 0.529826, 0.705224, 0.878655, 1.01416,
    1.11852, 1.12399, 1.03048, 0.856297, 0.647467,
    0.431567, 0.268329, 0.152568, 0.0812606, 0.0408508,
    0.0199413, 0.00957688, 0.00455263, 0.00217496, 0.00104476,
    0.000508258, 0.000250969, 0.00012639, 0.0000645258, 0.0000334117,
    0.0000176115, 0.00000941363, 0.00000509347, 0.00000279531, 0.00000155314,
];

/// CIE 1964 10° ȳ
const CIE1964_Y: [f64; SAMPLE_COUNT] = [
    0.0, 0.0, 0.000000013398, 0.0000006511, 0.000017364,
    0.0002534, 0.0020044, 0.008756, 0.021391, 0.038676,
    0.062077, 0.089456, 0.128201, 0.18519, 0.253589,
    0.339133, 0.460777, 0.606741, 0.761757, 0.875211,
    0.961988, 0.991761, 0.99734, 0.955552, 0.868934,
    0.777405, 0.658341, 0.527963, 0.398057, 0.283493,
    0.179828, 0.107633, 0.060281, 0.0318004, 0.0159051,
    0.0077488, 0.00371774, 0.00176847, 0.00084619, 0.00040741,
    0.00019873, 0.000098428, 0.000049737, 0.000025486, 0.0000132474,
    0.00000700859, 0.00000376883, 0.00000206455, 0.00000114541, 0.000000643,
];

/// CIE 1964 10° z̄
const CIE1964_Z: [f64; SAMPLE_COUNT] = [
    0.0, 0.0, 0.000000535027, 0.0000261437, 0.000704776,
    0.0104822, 0.0860109, 0.389366, 0.972542, 1.55348,
    1.96728, 1.9948, 1.74537, 1.31756, 0.772125,
    0.415254, 0.218502, 0.112044, 0.060709, 0.030451,
    0.013676, 0.003988, 0.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 0.0, 0.0,
];

/// CIE standard illuminant D65, relative spectral power
const D65_SPD: [f64; SAMPLE_COUNT] = [
    39.9488, 44.9117, 46.6383, 52.0891, 49.9755,
    54.6482, 82.7549, 91.486, 93.4318, 86.6823,
    104.865, 117.008, 117.812, 114.861, 115.923,
    108.811, 109.354, 107.802, 104.79, 107.689,
    104.405, 104.046, 100.0, 96.3342, 95.788,
    88.6856, 90.0062, 89.5991, 87.6987, 83.2886,
    83.6992, 80.0268, 80.2146, 82.2778, 78.2842,
    69.7213, 71.6091, 74.349, 61.604, 69.8856,
    75.087, 63.5927, 46.4182, 66.8054, 63.3828,
    64.304, 59.4519, 51.959, 57.4406, 60.3125,
];
