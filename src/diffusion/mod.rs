//! Diffusion theory module
//!
//! This module contains the Farrell closed-form diffuse reflectance of a semi-infinite
//! homogeneous turbid medium, along with the scalar-or-sequence input type it operates on.

pub mod coefficients;
pub mod constants;
pub mod error;
pub mod farrell;

pub use coefficients::Coefficients;
pub use error::RdError;
pub use farrell::*;
