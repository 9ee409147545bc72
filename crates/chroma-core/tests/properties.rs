//! Public API properties
//!
//! Reference values are from Bruce Lindbloom's tables and ITU-R BT.2020.

use chroma_core::color::working_space;
use chroma_core::{
    Error, SpectralColor, apply_chromatic_adaptation, hex_to_rgb, illuminant_spd, lab_to_xyz,
    rgb_to_hex, rgb_to_xyz, spectral_to_xyz, xyz_to_lab, xyz_to_rgb,
};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

const EPSILON: f64 = 1e-6;

fn assert_triple(actual: [f64; 3], expected: [f64; 3], tolerance: f64, what: &str) {
    for k in 0..3 {
        assert!(
            (actual[k] - expected[k]).abs() < tolerance,
            "{}: expected {:?}, got {:?}",
            what,
            expected,
            actual
        );
    }
}

#[test]
fn black_is_black_in_every_space() {
    for space in working_space::all() {
        assert_eq!(rgb_to_xyz(0.0, 0.0, 0.0, space.name).unwrap(), [0.0, 0.0, 0.0], "{}", space.name);
    }
}

#[test]
fn reference_values() {
    assert_triple(rgb_to_xyz(1.0, 1.0, 1.0, "sRgb").unwrap(), [0.95047, 1.0, 1.08883], EPSILON, "sRGB white");
    assert_triple(
        rgb_to_xyz(1.0, 0.0, 0.0, "sRgb").unwrap(),
        [0.4124564, 0.2126729, 0.0193339],
        EPSILON,
        "sRGB red",
    );
    assert_triple(
        rgb_to_xyz(1.0, 0.0, 0.0, "ITU-R BT.2020").unwrap(),
        [0.6369581, 0.2627002, 0.0],
        EPSILON,
        "BT.2020 red",
    );
}

#[test]
fn white_maps_to_reference_white() {
    for space in working_space::all() {
        let xyz = rgb_to_xyz(1.0, 1.0, 1.0, space.name).unwrap();
        assert_triple(xyz, space.white.to_array(), 1e-12, space.name);
    }
}

#[test]
fn rgb_roundtrip_random() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for space in ["sRgb", "Adobe RGB", "ProPhoto RGB", "Wide Gamut RGB", "CIE RGB"] {
        for _ in 0..500 {
            let rgb: [f64; 3] = [rng.r#gen(), rng.r#gen(), rng.r#gen()];
            let [x, y, z] = rgb_to_xyz(rgb[0], rgb[1], rgb[2], space).unwrap();
            let back = xyz_to_rgb(x, y, z, space).unwrap();
            assert_triple(back, rgb, 1e-8, space);
        }
    }
}

#[test]
fn out_of_gamut_xyz_is_returned_unclamped() {
    // Pure Y is outside every working space triangle
    for space in working_space::all() {
        let [r, g, _] = xyz_to_rgb(0.0, 1.0, 0.0, space.name).unwrap();
        assert!(r < 0.0 && g > 1.0, "{}: r = {}, g = {}", space.name, r, g);
    }
    // Inside the unit box but above the D50 white Z
    let [_, _, b] = xyz_to_rgb(0.5, 0.5, 0.9, "ProPhoto RGB").unwrap();
    assert!(b > 1.0, "b = {}", b);
}

#[test]
fn zero_channels_roundtrip_in_every_space() {
    for space in working_space::all() {
        for rgb in [[0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [0.5, 0.0, 0.0], [0.2, 0.0, 0.7]] {
            let [x, y, z] = rgb_to_xyz(rgb[0], rgb[1], rgb[2], space.name).unwrap();
            let back = xyz_to_rgb(x, y, z, space.name).unwrap();
            assert_triple(back, rgb, 1e-8, space.name);
        }
    }
}

#[test]
fn lab_roundtrip_random() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..1000 {
        let xyz: [f64; 3] = [rng.r#gen(), rng.r#gen(), rng.r#gen()];
        let [l, a, b] = xyz_to_lab(xyz[0], xyz[1], xyz[2], "2", "D65").unwrap();
        let back = lab_to_xyz(l, a, b, "2", "D65").unwrap();
        assert_triple(back, xyz, 1e-10, "lab");
    }
}

#[test]
fn adaptation_identity_and_inverse() {
    let same = apply_chromatic_adaptation(0.3, 0.4, 0.5, "D65", "D65", "2", "bradford").unwrap();
    assert_triple(same, [0.3, 0.4, 0.5], 1e-10, "identity");

    for method in ["bradford", "von_kries", "xyz_scaling", "cat02"] {
        let there = apply_chromatic_adaptation(0.3, 0.4, 0.5, "D65", "A", "2", method).unwrap();
        let back = apply_chromatic_adaptation(there[0], there[1], there[2], "A", "D65", "2", method).unwrap();
        assert_triple(back, [0.3, 0.4, 0.5], 1e-10, method);
    }
}

#[test]
fn invalid_inputs_are_typed_errors() {
    assert!(matches!(rgb_to_xyz(-1.0, 0.0, 0.0, "sRgb"), Err(Error::OutOfRange { .. })));
    assert!(matches!(rgb_to_xyz(2.0, 0.0, 0.0, "sRgb"), Err(Error::OutOfRange { .. })));
    assert!(matches!(xyz_to_rgb(-1.0, 0.0, 0.0, "sRgb"), Err(Error::OutOfRange { .. })));
    assert!(matches!(xyz_to_rgb(2.0, 0.0, 0.0, "sRgb"), Err(Error::OutOfRange { .. })));
    assert!(matches!(rgb_to_xyz(0.5, 0.5, 0.5, "invalid space"), Err(Error::UnknownColorSpace(_))));
    assert!(matches!(
        apply_chromatic_adaptation(0.5, 0.5, 0.5, "D65", "D50", "2", "nope"),
        Err(Error::UnknownAdaptationMethod(_))
    ));
    assert!(matches!(hex_to_rgb("#xyz"), Err(Error::MalformedInput(_))));
}

#[test]
fn spectral_lengths_must_match() {
    let d65 = illuminant_spd("D65".parse().unwrap()).unwrap();
    assert!(matches!(
        spectral_to_xyz(&[0.5; 10], 2, d65),
        Err(Error::MismatchedLength { expected: 50, actual: 10 })
    ));

    let grey = SpectralColor::new([0.18; 50]);
    let [_, y, _] = grey.to_xyz(chroma_core::Observer::Two, d65).unwrap();
    assert!((y - 0.18).abs() < 1e-12);
}

#[test]
fn hex_through_xyz() {
    let [r, g, b] = hex_to_rgb("#336699").unwrap();
    let [x, y, z] = rgb_to_xyz(r, g, b, "sRgb").unwrap();
    let [r2, g2, b2] = xyz_to_rgb(x, y, z, "sRgb").unwrap();
    assert_eq!(rgb_to_hex(r2, g2, b2).unwrap(), "#336699");
}

#[cfg(feature = "serde")]
#[test]
fn serde_roundtrip_of_value_types() {
    use chroma_core::{AdaptationMethod, Illuminant, Matrix3x3, Observer, TransferFunction, Vector3, YuvStandard};

    let v = Vector3::new(0.5, 0.25, 2.0);
    let json = serde_json::to_string(&v).unwrap();
    assert_eq!(serde_json::from_str::<Vector3>(&json).unwrap(), v);

    let m = Matrix3x3::identity();
    assert_eq!(serde_json::from_str::<Matrix3x3>(&serde_json::to_string(&m).unwrap()).unwrap(), m);

    let t = TransferFunction::Gamma(2.0);
    assert_eq!(serde_json::from_str::<TransferFunction>(&serde_json::to_string(&t).unwrap()).unwrap(), t);

    assert_eq!(serde_json::to_string(&Illuminant::D65).unwrap(), "\"D65\"");
    assert_eq!(serde_json::from_str::<Observer>("\"Ten\"").unwrap(), Observer::Ten);
    assert_eq!(serde_json::from_str::<AdaptationMethod>("\"Cat02\"").unwrap(), AdaptationMethod::Cat02);
    assert_eq!(serde_json::from_str::<YuvStandard>("\"Hd\"").unwrap(), YuvStandard::Hd);
}
