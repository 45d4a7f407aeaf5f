//! gdxmath - 4D vector geometry for the engine's math module
//!
//! Re-exports the vector crate and the LinearMath constant table, and owns
//! the configuration layer that calibrates comparison tolerances.

pub mod config;

pub use gdx_math::{math_utils, MathError, Tolerances, Vec4, Vector, UNIT_MARGIN};
pub use gdx_linearmath as linearmath;
