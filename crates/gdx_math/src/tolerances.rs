//! Comparison tolerances
//!
//! Bundles the margins the `_with` predicates on [`Vec4`] accept, so a
//! caller can calibrate them once (usually from configuration) and reuse
//! them everywhere.

use crate::math_utils::FLOAT_ROUNDING_ERROR;
use crate::vec4::UNIT_MARGIN;
use crate::Vec4;

/// Margins used for approximate vector comparisons
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerances {
    /// Allowed |len² - 1| for a unit vector
    pub unit_margin: f32,
    /// Allowed dot product error for collinear/perpendicular tests
    pub rounding_error: f32,
    /// Per-component tolerance for approximate equality
    pub equality_epsilon: f32,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Tolerances {
    /// The margins the no-argument predicates use
    pub const DEFAULT: Self = Self {
        unit_margin: UNIT_MARGIN,
        rounding_error: FLOAT_ROUNDING_ERROR,
        equality_epsilon: 0.00001,
    };

    /// Create tolerances with custom margins
    ///
    /// Negative inputs are treated as zero.
    pub fn new(unit_margin: f32, rounding_error: f32, equality_epsilon: f32) -> Self {
        Self {
            unit_margin: unit_margin.max(0.0),
            rounding_error: rounding_error.max(0.0),
            equality_epsilon: equality_epsilon.max(0.0),
        }
    }

    #[inline]
    pub fn is_unit(&self, v: &Vec4) -> bool {
        v.is_unit_with(self.unit_margin)
    }

    #[inline]
    pub fn is_collinear(&self, a: &Vec4, b: &Vec4) -> bool {
        a.is_collinear_with(b, self.rounding_error)
    }

    #[inline]
    pub fn is_collinear_opposite(&self, a: &Vec4, b: &Vec4) -> bool {
        a.is_collinear_opposite_with(b, self.rounding_error)
    }

    #[inline]
    pub fn is_perpendicular(&self, a: &Vec4, b: &Vec4) -> bool {
        a.is_perpendicular_with(b, self.rounding_error)
    }

    #[inline]
    pub fn approx_eq(&self, a: &Vec4, b: &Vec4) -> bool {
        a.epsilon_equals(Some(b), self.equality_epsilon)
    }
}
