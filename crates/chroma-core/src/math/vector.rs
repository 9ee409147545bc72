//! 3-component vector for color triples
//!
//! A `Vector3` carries no color space tag. The caller decides whether it
//! holds linear RGB, XYZ, a white point or cone responses.

use std::ops::{Index, Mul};

use bytemuck::{Pod, Zeroable};

use crate::math::Matrix3x3;

/// An immutable triple of `f64` components
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector3 {
    /// Components in the order of the color space they belong to
    pub v: [f64; 3],
}

impl Vector3 {
    /// Create a new vector
    #[inline]
    pub const fn new(v0: f64, v1: f64, v2: f64) -> Self {
        Self { v: [v0, v1, v2] }
    }

    /// Create a vector from an array
    #[inline]
    pub const fn from_array(v: [f64; 3]) -> Self {
        Self { v }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        self.v
    }

    /// Divide component-wise
    ///
    /// Zero divisors are not checked. They yield infinities or NaN, exactly
    /// as scalar `f64` division does.
    #[inline]
    pub fn divide(self, divisor: Self) -> Self {
        Self::new(
            self.v[0] / divisor.v[0],
            self.v[1] / divisor.v[1],
            self.v[2] / divisor.v[2],
        )
    }

    /// Build the diagonal matrix holding these components
    #[inline]
    pub const fn to_diagonal(self) -> Matrix3x3 {
        Matrix3x3::diagonal(self.v[0], self.v[1], self.v[2])
    }

    /// Apply a scalar function to every component
    #[inline]
    pub fn map<F>(self, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        Self::new(f(self.v[0]), f(self.v[1]), f(self.v[2]))
    }

    /// Clamp every component to a lower bound
    #[inline]
    pub fn max(self, floor: f64) -> Self {
        self.map(|c| c.max(floor))
    }

    /// Sum of the three components
    #[inline]
    pub fn sum(&self) -> f64 {
        self.v[0] + self.v[1] + self.v[2]
    }

    /// Check if approximately equal to another vector
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.v[0] - other.v[0]).abs() < epsilon
            && (self.v[1] - other.v[1]).abs() < epsilon
            && (self.v[2] - other.v[2]).abs() < epsilon
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(v: [f64; 3]) -> Self {
        Self::from_array(v)
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        v.to_array()
    }
}

impl Index<usize> for Vector3 {
    type Output = f64;

    fn index(&self, i: usize) -> &Self::Output {
        &self.v[i]
    }
}

impl Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self.map(|c| c * rhs)
    }
}
