//! Math error types

use std::fmt;

/// Error type for geometric operations that are not total
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// Projection target line has zero length
    DegenerateLine,
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::DegenerateLine => write!(f, "Line is a zero vector"),
        }
    }
}

impl std::error::Error for MathError {}
