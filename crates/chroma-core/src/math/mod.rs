//! Linear algebra and curve primitives shared by every conversion

pub mod chromatic_adaptation;
pub mod matrix;
pub mod transfer;
pub mod vector;

pub use chromatic_adaptation::{
    AdaptationMethod, ConeResponse, adapt, adaptation_matrix, apply_chromatic_adaptation,
};
pub use matrix::Matrix3x3;
pub use transfer::{TransferFunction, srgb_decode, srgb_encode};
pub use vector::Vector3;
