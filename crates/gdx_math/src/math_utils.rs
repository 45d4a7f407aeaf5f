//! Scalar helpers shared by the vector predicates

use crate::vector::Vector;

/// Default tolerance for float comparisons
pub const FLOAT_ROUNDING_ERROR: f32 = 0.000001;

/// `value` is within [`FLOAT_ROUNDING_ERROR`] of zero
#[inline]
pub fn is_zero(value: f32) -> bool {
    is_zero_with(value, FLOAT_ROUNDING_ERROR)
}

/// `value` is within `tolerance` of zero (inclusive)
#[inline]
pub fn is_zero_with(value: f32, tolerance: f32) -> bool {
    value.abs() <= tolerance
}

#[inline]
pub fn is_equal(a: f32, b: f32) -> bool {
    is_equal_with(a, b, FLOAT_ROUNDING_ERROR)
}

#[inline]
pub fn is_equal_with(a: f32, b: f32, tolerance: f32) -> bool {
    (a - b).abs() <= tolerance
}

/// Ease `current` towards `target` by `alpha`, returning the new value
///
/// Works for any vector type; `current` itself is not modified.
pub fn approach<V: Vector>(current: &V, target: &V, alpha: f32) -> V {
    let mut next = current.cpy();
    next.lerp(target, alpha);
    next
}
