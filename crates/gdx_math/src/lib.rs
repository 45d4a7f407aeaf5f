//! 4D Vector Mathematics
//!
//! This crate provides the 4-component vector used by the engine's geometry
//! code, together with the shared vector capability trait.
//!
//! ## Core Types
//!
//! - [`Vec4`] - mutable, chainable 4D vector with x, y, z, w components
//! - [`Vector`] - operations shared by the engine's vector types
//! - [`Tolerances`] - calibrated margins for approximate comparisons
//! - [`MathError`] - failure of a non-total operation (projection)

mod vec4;
mod vector;
mod error;
mod tolerances;
pub mod math_utils;

pub use vec4::{Vec4, UNIT_MARGIN};
pub use vector::Vector;
pub use error::MathError;
pub use tolerances::Tolerances;
