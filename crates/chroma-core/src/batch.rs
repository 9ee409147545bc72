//! Conversions over flat buffers of interleaved triples
//!
//! Buffers hold `[c0, c1, c2, c0, c1, c2, ...]` as `f64`. Every triple is
//! validated before anything is written, so on error the destination is
//! left untouched. The inner loops are compiled per CPU feature level and
//! dispatched at runtime.

use bytemuck::{cast_slice, cast_slice_mut};
use multiversion::multiversion;

use crate::color::illuminant::white_point_by_name;
use crate::color::rgb_xyz::{check_xyz, encoded_rgb_to_xyz, xyz_to_encoded_rgb};
use crate::color::{lab, working_space};
use crate::error::{Error, Result, check_finite, check_unit};
use crate::math::Vector3;

/// Apply `f` to every triple of `src`, writing into `dst`
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
fn map_triples<F>(src: &[Vector3], dst: &mut [Vector3], f: F)
where
    F: Fn(Vector3) -> Vector3,
{
    for (input, output) in src.iter().zip(dst.iter_mut()) {
        *output = f(*input);
    }
}

/// View both buffers as triples after checking their shapes
fn as_triples<'a>(src: &'a [f64], dst: &'a mut [f64]) -> Result<(&'a [Vector3], &'a mut [Vector3])> {
    if src.len() % 3 != 0 {
        return Err(Error::BufferSize {
            expected: src.len() - src.len() % 3,
            actual: src.len(),
        });
    }
    if dst.len() != src.len() {
        return Err(Error::BufferSize {
            expected: src.len(),
            actual: dst.len(),
        });
    }
    Ok((cast_slice(src), cast_slice_mut(dst)))
}

/// Convert encoded RGB triples to XYZ
pub fn rgb_to_xyz_slice(src: &[f64], dst: &mut [f64], space: &str) -> Result<()> {
    let (src, dst) = as_triples(src, dst)?;
    for rgb in src {
        check_unit("r", rgb[0])?;
        check_unit("g", rgb[1])?;
        check_unit("b", rgb[2])?;
    }

    let space = working_space::lookup(space)?;
    map_triples(src, dst, |rgb| encoded_rgb_to_xyz(space, rgb));
    Ok(())
}

/// Convert XYZ triples to encoded RGB
pub fn xyz_to_rgb_slice(src: &[f64], dst: &mut [f64], space: &str) -> Result<()> {
    let (src, dst) = as_triples(src, dst)?;
    let space = working_space::lookup(space)?;
    for xyz in src {
        check_xyz(space, *xyz)?;
    }

    map_triples(src, dst, |xyz| xyz_to_encoded_rgb(space, xyz));
    Ok(())
}

/// Convert XYZ triples to Lab
pub fn xyz_to_lab_slice(src: &[f64], dst: &mut [f64], observer: &str, illuminant: &str) -> Result<()> {
    let (src, dst) = as_triples(src, dst)?;
    let white = white_point_by_name(observer, illuminant)?;
    check_all_finite(src)?;

    map_triples(src, dst, |xyz| lab::from_xyz(xyz, white));
    Ok(())
}

/// Convert Lab triples to XYZ
pub fn lab_to_xyz_slice(src: &[f64], dst: &mut [f64], observer: &str, illuminant: &str) -> Result<()> {
    let (src, dst) = as_triples(src, dst)?;
    let white = white_point_by_name(observer, illuminant)?;
    check_all_finite(src)?;

    map_triples(src, dst, |lab| lab::to_xyz(lab, white));
    Ok(())
}

fn check_all_finite(src: &[Vector3]) -> Result<()> {
    src.iter()
        .flat_map(|v| v.to_array())
        .try_for_each(|c| check_finite("component", c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{rgb_to_xyz, xyz_to_lab};

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_matches_single_color_api() {
        let src = [0.0, 0.0, 0.0, 1.0, 0.5, 0.25, 0.2, 0.4, 0.6];
        let mut dst = [0.0; 9];
        rgb_to_xyz_slice(&src, &mut dst, "sRgb").unwrap();

        for (rgb, xyz) in src.chunks_exact(3).zip(dst.chunks_exact(3)) {
            let expected = rgb_to_xyz(rgb[0], rgb[1], rgb[2], "sRgb").unwrap();
            for k in 0..3 {
                assert!((xyz[k] - expected[k]).abs() < EPSILON);
            }
        }

        let mut lab = [0.0; 9];
        xyz_to_lab_slice(&dst, &mut lab, "2", "D65").unwrap();
        let expected = xyz_to_lab(dst[3], dst[4], dst[5], "2", "D65").unwrap();
        for k in 0..3 {
            assert!((lab[3 + k] - expected[k]).abs() < EPSILON);
        }
    }

    #[test]
    fn test_roundtrip() {
        let src = [0.1, 0.2, 0.3, 0.9, 0.8, 0.7];
        let mut xyz = [0.0; 6];
        let mut back = [0.0; 6];
        rgb_to_xyz_slice(&src, &mut xyz, "ProPhoto RGB").unwrap();
        xyz_to_rgb_slice(&xyz, &mut back, "ProPhoto RGB").unwrap();
        for (a, b) in src.iter().zip(&back) {
            assert!((a - b).abs() < 1e-10);
        }

        let mut lab = [0.0; 6];
        xyz_to_lab_slice(&xyz, &mut lab, "2", "D50").unwrap();
        lab_to_xyz_slice(&lab, &mut back, "2", "D50").unwrap();
        for (a, b) in xyz.iter().zip(&back) {
            assert!((a - b).abs() < 1e-10);
        }
    }

    #[test]
    fn test_buffer_shapes() {
        let mut dst = [0.0; 6];
        assert!(matches!(
            rgb_to_xyz_slice(&[0.5; 5], &mut dst[..5], "sRgb"),
            Err(Error::BufferSize { expected: 3, actual: 5 })
        ));
        assert!(matches!(
            rgb_to_xyz_slice(&[0.5; 6], &mut dst[..3], "sRgb"),
            Err(Error::BufferSize { expected: 6, actual: 3 })
        ));
        assert!(rgb_to_xyz_slice(&[], &mut [], "sRgb").is_ok());
    }

    #[test]
    fn test_xyz_bounds_match_single_color_api() {
        let src = [0.5, 0.5, 0.9, 0.97, 0.9, 0.5];
        let mut dst = [0.0; 6];
        xyz_to_rgb_slice(&src, &mut dst, "ProPhoto RGB").unwrap();
        assert!(matches!(
            xyz_to_rgb_slice(&[0.5, 0.5, 1.1], &mut dst[..3], "ProPhoto RGB"),
            Err(Error::OutOfRange { component: "z", .. })
        ));
    }

    #[test]
    fn test_invalid_triple_leaves_output_untouched() {
        let src = [0.5, 0.5, 0.5, 0.5, 2.0, 0.5];
        let mut dst = [-1.0; 6];
        assert!(matches!(
            rgb_to_xyz_slice(&src, &mut dst, "sRgb"),
            Err(Error::OutOfRange { component: "g", .. })
        ));
        assert_eq!(dst, [-1.0; 6]);
    }
}
