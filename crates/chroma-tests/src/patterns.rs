//! Test pattern generation
//!
//! Patterns are lists of encoded RGB triples in [0, 1].

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Test pattern types
#[derive(Debug, Clone, Copy)]
pub enum TestPattern {
    /// RGB color cube corners (8 colors)
    ColorCube,
    /// Grayscale ramp from black to white
    Grayscale,
    /// Hue ramp at full saturation and value
    HueRamp,
    /// Uniform random triples with seed
    Random(u64),
    /// Skin tone samples
    SkinTones,
}

/// Generate `count` triples of a pattern
pub fn generate_pattern(pattern: TestPattern, count: usize) -> Vec<[f64; 3]> {
    match pattern {
        TestPattern::ColorCube => (0..count)
            .map(|i| {
                let corner = i % 8;
                [
                    (corner & 1) as f64,
                    ((corner >> 1) & 1) as f64,
                    ((corner >> 2) & 1) as f64,
                ]
            })
            .collect(),
        TestPattern::Grayscale => (0..count)
            .map(|i| {
                let v = i as f64 / (count.max(2) - 1) as f64;
                [v, v, v]
            })
            .collect(),
        TestPattern::HueRamp => (0..count)
            .map(|i| hue_to_rgb(i as f64 / count as f64 * 360.0))
            .collect(),
        TestPattern::Random(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..count).map(|_| [rng.r#gen(), rng.r#gen(), rng.r#gen()]).collect()
        }
        TestPattern::SkinTones => {
            let tones: [[u8; 3]; 6] = [
                [255, 224, 189],
                [241, 194, 125],
                [224, 172, 105],
                [198, 134, 66],
                [141, 85, 36],
                [89, 47, 42],
            ];
            (0..count)
                .map(|i| tones[i % tones.len()].map(|c| c as f64 / 255.0))
                .collect()
        }
    }
}

/// Fully saturated color for a hue in degrees
fn hue_to_rgb(h: f64) -> [f64; 3] {
    let x = 1.0 - ((h / 60.0) % 2.0 - 1.0).abs();

    if h < 60.0 {
        [1.0, x, 0.0]
    } else if h < 120.0 {
        [x, 1.0, 0.0]
    } else if h < 180.0 {
        [0.0, 1.0, x]
    } else if h < 240.0 {
        [0.0, x, 1.0]
    } else if h < 300.0 {
        [x, 0.0, 1.0]
    } else {
        [1.0, 0.0, x]
    }
}
