//! # chroma-tests
//!
//! Cross-implementation parity testing for chroma.
//!
//! This crate provides:
//! - Reference conversions backed by the `palette` crate
//! - Deterministic RGB test patterns
//! - Error statistics for comparing two conversion functions
//!
//! ## Test Categories
//!
//! 1. **Parity**: sRGB → XYZ, Lab, Luv, xyY, HSV, HSL against palette
//! 2. **Round trips**: seeded random sweeps through every working space

pub mod parity;
pub mod patterns;
pub mod reference;

pub use parity::{ErrorStats, compare};
pub use patterns::{TestPattern, generate_pattern};
