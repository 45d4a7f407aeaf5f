//! 4D Vector type
//!
//! Mutating operations take `&mut self` and hand the same vector back, so
//! calls chain: `v.sub_vec(&origin).nor().scl(speed)`. The returned
//! reference is the receiver itself, never a fresh copy; use [`Vec4::cpy`]
//! (or plain `Copy`) when an independent value is needed.

use std::hash::{Hash, Hasher};

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::error::MathError;
use crate::math_utils;

/// Default margin for [`Vec4::is_unit`]
pub const UNIT_MARGIN: f32 = 0.000000001;

/// 4D Vector with x, y, z, w components
///
/// Equality is bit-exact per component (`f32::to_bits`): `-0.0` differs
/// from `0.0` and a NaN equals itself when the payload matches. Use
/// [`Vec4::epsilon_equals`] for tolerance comparison.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 0.0 };
    pub const X: Self = Self { x: 1.0, y: 0.0, z: 0.0, w: 0.0 };
    pub const Y: Self = Self { x: 0.0, y: 1.0, z: 0.0, w: 0.0 };
    pub const Z: Self = Self { x: 0.0, y: 0.0, z: 1.0, w: 0.0 };
    pub const W: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

    /// Create a new Vec4
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Independent copy of this vector
    #[inline]
    pub fn cpy(&self) -> Self {
        *self
    }

    /// Euclidean length of the given components
    #[inline]
    pub fn len_of(x: f32, y: f32, z: f32, w: f32) -> f32 {
        Self::len2_of(x, y, z, w).sqrt()
    }

    /// Squared Euclidean length of the given components
    #[inline]
    pub fn len2_of(x: f32, y: f32, z: f32, w: f32) -> f32 {
        x * x + y * y + z * z + w * w
    }

    /// Length (magnitude)
    #[inline]
    pub fn len(&self) -> f32 {
        Self::len_of(self.x, self.y, self.z, self.w)
    }

    /// Length squared (faster than length)
    #[inline]
    pub fn len2(&self) -> f32 {
        Self::len2_of(self.x, self.y, self.z, self.w)
    }

    /// Dot product
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Overwrite all four components
    #[inline]
    pub fn set(&mut self, x: f32, y: f32, z: f32, w: f32) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self.w = w;
        self
    }

    /// Copy the components of `other` into this vector
    #[inline]
    pub fn set_from(&mut self, other: &Self) -> &mut Self {
        self.set(other.x, other.y, other.z, other.w)
    }

    #[inline]
    pub fn add_xyzw(&mut self, x: f32, y: f32, z: f32, w: f32) -> &mut Self {
        self.set(self.x + x, self.y + y, self.z + z, self.w + w)
    }

    #[inline]
    pub fn add_vec(&mut self, other: &Self) -> &mut Self {
        self.add_xyzw(other.x, other.y, other.z, other.w)
    }

    #[inline]
    pub fn sub_xyzw(&mut self, x: f32, y: f32, z: f32, w: f32) -> &mut Self {
        self.set(self.x - x, self.y - y, self.z - z, self.w - w)
    }

    #[inline]
    pub fn sub_vec(&mut self, other: &Self) -> &mut Self {
        self.sub_xyzw(other.x, other.y, other.z, other.w)
    }

    /// Scale every component by `scalar`
    #[inline]
    pub fn scl(&mut self, scalar: f32) -> &mut Self {
        self.set(
            self.x * scalar,
            self.y * scalar,
            self.z * scalar,
            self.w * scalar,
        )
    }

    /// Component-wise multiplication (Hadamard product)
    #[inline]
    pub fn scl_vec(&mut self, other: &Self) -> &mut Self {
        self.set(
            self.x * other.x,
            self.y * other.y,
            self.z * other.z,
            self.w * other.w,
        )
    }

    /// Normalize to unit length in place
    ///
    /// Vectors whose squared length is exactly 0 or 1 are left untouched.
    #[inline]
    pub fn nor(&mut self) -> &mut Self {
        let len2 = self.len2();
        if len2 == 0.0 || len2 == 1.0 {
            return self;
        }
        self.scl(1.0 / len2.sqrt())
    }

    /// Normalized copy, leaving `self` untouched
    #[inline]
    pub fn normalized(self) -> Self {
        let mut v = self;
        v.nor();
        v
    }

    /// Shorten the vector to length `limit` if it is longer
    pub fn limit(&mut self, limit: f32) -> &mut Self {
        if self.len2() > limit * limit {
            self.nor().scl(limit);
        }
        self
    }

    /// Bring the length into `[min, max]`
    ///
    /// A zero vector has no direction and is returned as is, even when
    /// `min` is positive.
    pub fn clamp(&mut self, min: f32, max: f32) -> &mut Self {
        let len2 = self.len2();
        if len2 == 0.0 {
            return self;
        }
        if len2 > max * max {
            return self.nor().scl(max);
        }
        if len2 < min * min {
            return self.nor().scl(min);
        }
        self
    }

    /// Distance to `other`
    #[inline]
    pub fn dst(&self, other: &Self) -> f32 {
        Self::len_of(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
            self.w - other.w,
        )
    }

    /// Squared distance to `other`
    #[inline]
    pub fn dst2(&self, other: &Self) -> f32 {
        Self::len2_of(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
            self.w - other.w,
        )
    }

    /// Linear interpolation towards `target`
    ///
    /// Scales `self` by `1 - alpha` first, then adds `target * alpha`.
    pub fn lerp(&mut self, target: &Self, alpha: f32) -> &mut Self {
        self.scl(1.0 - alpha);
        self.add_xyzw(
            target.x * alpha,
            target.y * alpha,
            target.z * alpha,
            target.w * alpha,
        )
    }

    #[inline]
    pub fn is_unit(&self) -> bool {
        self.is_unit_with(UNIT_MARGIN)
    }

    #[inline]
    pub fn is_unit_with(&self, margin: f32) -> bool {
        (self.len2() - 1.0).abs() < margin
    }

    /// Bit-exact comparison against [`Vec4::ZERO`]
    #[inline]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Squared length below `margin`
    #[inline]
    pub fn is_zero_with(&self, margin: f32) -> bool {
        self.len2() < margin
    }

    /// Collinear and pointing the same way; both vectors are assumed unit length
    #[inline]
    pub fn is_collinear(&self, other: &Self) -> bool {
        math_utils::is_zero(self.dot(other) - 1.0)
    }

    #[inline]
    pub fn is_collinear_with(&self, other: &Self, epsilon: f32) -> bool {
        math_utils::is_zero_with(self.dot(other) - 1.0, epsilon)
    }

    /// Collinear and pointing opposite ways; both vectors are assumed unit length
    #[inline]
    pub fn is_collinear_opposite(&self, other: &Self) -> bool {
        math_utils::is_zero(self.dot(other) + 1.0)
    }

    #[inline]
    pub fn is_collinear_opposite_with(&self, other: &Self, epsilon: f32) -> bool {
        math_utils::is_zero_with(self.dot(other) + 1.0, epsilon)
    }

    #[inline]
    pub fn is_perpendicular(&self, other: &Self) -> bool {
        math_utils::is_zero(self.dot(other))
    }

    #[inline]
    pub fn is_perpendicular_with(&self, other: &Self, epsilon: f32) -> bool {
        math_utils::is_zero_with(self.dot(other), epsilon)
    }

    #[inline]
    pub fn has_same_direction(&self, other: &Self) -> bool {
        self.dot(other) > 0.0
    }

    #[inline]
    pub fn has_opposite_direction(&self, other: &Self) -> bool {
        self.dot(other) < 0.0
    }

    /// Component-wise IEEE bit pattern equality (same as `==`)
    #[inline]
    pub fn bits_eq(&self, other: &Self) -> bool {
        self.to_bits() == other.to_bits()
    }

    /// Every component within `epsilon` of `other`; `None` never matches
    pub fn epsilon_equals(&self, other: Option<&Self>, epsilon: f32) -> bool {
        let Some(other) = other else {
            return false;
        };
        if (other.x - self.x).abs() > epsilon {
            return false;
        }
        if (other.y - self.y).abs() > epsilon {
            return false;
        }
        if (other.z - self.z).abs() > epsilon {
            return false;
        }
        if (other.w - self.w).abs() > epsilon {
            return false;
        }
        true
    }

    /// `self += v * scalar`
    #[inline]
    pub fn mul_add(&mut self, v: &Self, scalar: f32) -> &mut Self {
        self.x += v.x * scalar;
        self.y += v.y * scalar;
        self.z += v.z * scalar;
        self.w += v.w * scalar;
        self
    }

    /// `self += v * mul` component-wise
    #[inline]
    pub fn mul_add_vec(&mut self, v: &Self, mul: &Self) -> &mut Self {
        self.x += v.x * mul.x;
        self.y += v.y * mul.y;
        self.z += v.z * mul.z;
        self.w += v.w * mul.w;
        self
    }

    /// Project this point onto the infinite line through the origin and `line`
    ///
    /// ```text
    ///  p · l
    /// ------- * l
    ///  l · l
    /// ```
    ///
    /// Fails with [`MathError::DegenerateLine`] when `l · l` is zero.
    pub fn prj(&mut self, line: &Self) -> Result<&mut Self, MathError> {
        let dot_lower = line.dot(line);
        if dot_lower == 0.0 {
            return Err(MathError::DegenerateLine);
        }
        Ok(self.project_unchecked(line, dot_lower))
    }

    /// Project this point onto the segment from `start` to `end`
    ///
    /// The point is first projected onto the line through the origin along
    /// `end - start`, then clamped to the segment endpoints. Clamping looks
    /// at the first axis (x, then y, z, w) on which `start` and `end`
    /// differ. A degenerate segment snaps the point to `start`.
    pub fn prj_segment(&mut self, start: &Self, end: &Self) -> &mut Self {
        let line = *end - *start;
        let dot_lower = line.dot(&line);
        if dot_lower == 0.0 {
            return self.set_from(start);
        }
        self.project_unchecked(&line, dot_lower);

        let from = start.to_array();
        let to = end.to_array();
        let axis = (0..3).find(|&i| from[i] != to[i]).unwrap_or(3);
        let (min, max) = if from[axis] < to[axis] {
            (start, end)
        } else {
            (end, start)
        };

        let point = self.to_array()[axis];
        if point < min.to_array()[axis] {
            self.set_from(min);
        } else if point > max.to_array()[axis] {
            self.set_from(max);
        }
        self
    }

    #[inline]
    fn project_unchecked(&mut self, line: &Self, dot_lower: f32) -> &mut Self {
        let dot_upper = self.dot(line);
        self.set_from(line).scl(dot_upper / dot_lower)
    }

    /// Components as `[x, y, z, w]`
    #[inline]
    pub fn to_array(&self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    #[inline]
    fn to_bits(&self) -> [u32; 4] {
        [
            self.x.to_bits(),
            self.y.to_bits(),
            self.z.to_bits(),
            self.w.to_bits(),
        ]
    }
}

impl PartialEq for Vec4 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.bits_eq(other)
    }
}

impl Eq for Vec4 {}

impl Hash for Vec4 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_bits().hash(state);
    }
}

impl From<[f32; 4]> for Vec4 {
    #[inline]
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<Vec4> for [f32; 4] {
    #[inline]
    fn from(v: Vec4) -> Self {
        v.to_array()
    }
}

// Operator overloads

impl std::ops::Add for Vec4 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }
}

impl std::ops::AddAssign for Vec4 {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.add_vec(&other);
    }
}

impl std::ops::Sub for Vec4 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
            self.w - other.w,
        )
    }
}

impl std::ops::SubAssign for Vec4 {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.sub_vec(&other);
    }
}

impl std::ops::Mul<f32> for Vec4 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self::new(
            self.x * scalar,
            self.y * scalar,
            self.z * scalar,
            self.w * scalar,
        )
    }
}

impl std::ops::MulAssign<f32> for Vec4 {
    #[inline]
    fn mul_assign(&mut self, scalar: f32) {
        self.scl(scalar);
    }
}

impl std::ops::Neg for Vec4 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl std::ops::Div<f32> for Vec4 {
    type Output = Self;
    #[inline]
    fn div(self, scalar: f32) -> Self {
        Self::new(
            self.x / scalar,
            self.y / scalar,
            self.z / scalar,
            self.w / scalar,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn samples() -> Vec<Vec4> {
        vec![
            Vec4::new(1.0, 2.0, 3.0, 4.0),
            Vec4::new(-0.5, 0.25, 8.0, -3.0),
            Vec4::new(0.001, -0.002, 0.003, 0.0),
            Vec4::new(12.5, -7.0, 0.0, 1.0),
        ]
    }

    #[test]
    fn test_new() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
        assert_eq!(v.w, 4.0);
        assert_eq!(Vec4::default(), Vec4::ZERO);
    }

    #[test]
    fn test_cpy_is_bit_exact_and_independent() {
        let mut v = Vec4::new(1.0, -0.0, f32::NAN, 4.0);
        let copy = v.cpy();
        assert!(copy == v);
        v.scl(2.0);
        assert_eq!(copy.x, 1.0);
    }

    #[test]
    fn test_set_and_chaining() {
        let mut v = Vec4::ZERO;
        v.set(1.0, 2.0, 3.0, 4.0)
            .add_vec(&Vec4::new(1.0, 1.0, 1.0, 1.0))
            .scl(2.0);
        assert_eq!(v, Vec4::new(4.0, 6.0, 8.0, 10.0));

        let mut w = Vec4::X;
        w.set_from(&v).sub_xyzw(4.0, 6.0, 8.0, 9.0);
        assert_eq!(w, Vec4::W);
    }

    #[test]
    fn test_dot() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(5.0, 6.0, 7.0, 8.0);
        // 1*5 + 2*6 + 3*7 + 4*8 = 5 + 12 + 21 + 32 = 70
        assert_eq!(a.dot(&b), 70.0);
        assert_eq!(b.dot(&a), 70.0);
    }

    #[test]
    fn test_dot_self_is_len2() {
        for v in samples() {
            assert_eq!(v.dot(&v), v.len2());
        }
    }

    #[test]
    fn test_length() {
        assert_eq!(Vec4::X.len(), 1.0);

        let v2 = Vec4::new(1.0, 1.0, 1.0, 1.0);
        assert!((v2.len() - 2.0).abs() < 0.0001);
        assert_eq!(v2.len2(), 4.0);
        assert_eq!(Vec4::len2_of(1.0, 2.0, 2.0, 0.0), 9.0);
        assert_eq!(Vec4::len_of(1.0, 2.0, 2.0, 0.0), 3.0);
    }

    #[test]
    fn test_nor() {
        let mut v = Vec4::new(3.0, 4.0, 0.0, 0.0);
        v.nor();
        assert!((v.len2() - 1.0).abs() < 1e-6);
        assert!((v.x - 0.6).abs() < 1e-6);
        assert!((v.y - 0.8).abs() < 1e-6);

        for sample in samples() {
            let mut n = sample;
            n.nor();
            assert!((n.len2() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_nor_leaves_zero_and_unit_untouched() {
        let mut zero = Vec4::ZERO;
        zero.nor();
        assert!(zero.is_zero());

        let mut unit = Vec4::new(0.0, 0.0, -1.0, 0.0);
        unit.nor();
        assert_eq!(unit, Vec4::new(0.0, 0.0, -1.0, 0.0));
    }

    #[test]
    fn test_normalized_copy() {
        let v = Vec4::new(3.0, 0.0, 0.0, 0.0);
        let n = v.normalized();
        assert!((n.x - 1.0).abs() < 0.0001);
        assert_eq!(v.x, 3.0);
    }

    #[test]
    fn test_limit() {
        let mut v = Vec4::new(3.0, 4.0, 0.0, 0.0);
        v.limit(1.0);
        assert!((v.len() - 1.0).abs() < 1e-6);

        let mut short = Vec4::new(3.0, 4.0, 0.0, 0.0);
        short.limit(10.0);
        assert_eq!(short, Vec4::new(3.0, 4.0, 0.0, 0.0));
    }

    #[test]
    fn test_clamp_to_max() {
        let mut v = Vec4::new(10.0, 0.0, 0.0, 0.0);
        v.clamp(1.0, 5.0);
        assert!((v.x - 5.0).abs() < 1e-6);
        assert_eq!(v.y, 0.0);
        assert!((v.len() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_clamp_to_min() {
        let mut v = Vec4::new(0.0, 0.5, 0.0, 0.0);
        v.clamp(2.0, 5.0);
        assert!((v.y - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_clamp_inside_range_is_noop() {
        let mut v = Vec4::new(0.0, 0.0, 3.0, 0.0);
        v.clamp(2.0, 5.0);
        assert_eq!(v, Vec4::new(0.0, 0.0, 3.0, 0.0));
    }

    #[test]
    fn test_clamp_zero_vector_skips_min() {
        let mut v = Vec4::ZERO;
        v.clamp(1.0, 5.0);
        assert!(v.is_zero());
    }

    #[test]
    fn test_scl() {
        let mut v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        v.scl(2.0);
        assert_eq!(v, Vec4::new(2.0, 4.0, 6.0, 8.0));

        v.scl_vec(&Vec4::new(0.5, 0.25, 2.0, 1.0));
        assert_eq!(v, Vec4::new(1.0, 1.0, 12.0, 8.0));
    }

    #[test]
    fn test_scl_round_trip() {
        for v in samples() {
            for s in [2.0_f32, -3.0, 0.125, 7.5] {
                let mut r = v.cpy();
                r.scl(s).scl(1.0 / s);
                assert!(r.epsilon_equals(Some(&v), 1e-5), "{:?} scaled by {}", v, s);
            }
        }
    }

    #[test]
    fn test_add_sub_round_trip() {
        let d = Vec4::new(0.5, -1.5, 2.25, 100.0);
        for v in samples() {
            let mut r = v.cpy();
            r.add_vec(&d).sub_vec(&d);
            assert!(r.epsilon_equals(Some(&v), 1e-5));
        }
    }

    #[test]
    fn test_dst() {
        let a = Vec4::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(a.dst(&Vec4::ZERO), 2.0);
        assert_eq!(a.dst2(&Vec4::ZERO), 4.0);
        assert_eq!(Vec4::X.dst2(&Vec4::Y), 2.0);
    }

    #[test]
    fn test_lerp() {
        let mut a = Vec4::ZERO;
        a.lerp(&Vec4::new(10.0, 10.0, 10.0, 10.0), 0.5);
        assert_eq!(a, Vec4::new(5.0, 5.0, 5.0, 5.0));

        let mut b = Vec4::new(2.0, 4.0, 6.0, 8.0);
        b.lerp(&Vec4::new(4.0, 4.0, 4.0, 4.0), 0.0);
        assert_eq!(b, Vec4::new(2.0, 4.0, 6.0, 8.0));

        b.lerp(&Vec4::new(4.0, 4.0, 4.0, 4.0), 1.0);
        assert_eq!(b, Vec4::new(4.0, 4.0, 4.0, 4.0));
    }

    #[test]
    fn test_is_unit() {
        assert!(Vec4::X.is_unit());
        assert!(!Vec4::new(1.001, 0.0, 0.0, 0.0).is_unit());
        assert!(Vec4::new(1.001, 0.0, 0.0, 0.0).is_unit_with(0.01));
    }

    #[test]
    fn test_is_zero_is_bit_exact() {
        assert!(Vec4::new(0.0, 0.0, 0.0, 0.0).is_zero());
        assert!(!Vec4::new(1e-10, 0.0, 0.0, 0.0).is_zero());
        assert!(Vec4::new(1e-10, 0.0, 0.0, 0.0).is_zero_with(1e-6));

        let negative_zero = Vec4::new(-0.0, 0.0, 0.0, 0.0);
        assert!(!negative_zero.is_zero());
        assert!(negative_zero.is_zero_with(1e-6));
    }

    #[test]
    fn test_direction_predicates() {
        let x = Vec4::X;
        assert!(x.is_collinear(&Vec4::X));
        assert!(!x.is_collinear(&Vec4::Y));
        assert!(x.is_collinear_opposite(&Vec4::new(-1.0, 0.0, 0.0, 0.0)));
        assert!(x.is_perpendicular(&Vec4::W));
        assert!(!x.is_perpendicular(&Vec4::new(0.1, 1.0, 0.0, 0.0)));
        assert!(x.is_perpendicular_with(&Vec4::new(0.1, 1.0, 0.0, 0.0), 0.2));
        assert!(x.is_collinear_with(&Vec4::new(0.95, 0.0, 0.0, 0.0), 0.1));
        assert!(x.is_collinear_opposite_with(&Vec4::new(-0.95, 0.0, 0.0, 0.0), 0.1));

        let diagonal = Vec4::new(1.0, 1.0, 0.0, 0.0);
        assert!(diagonal.has_same_direction(&Vec4::X));
        assert!(!diagonal.has_opposite_direction(&Vec4::X));
        assert!(diagonal.has_opposite_direction(&Vec4::new(-1.0, 0.0, 0.0, 0.0)));
        assert!(!diagonal.has_same_direction(&Vec4::Z));
    }

    #[test]
    fn test_equality_uses_bit_patterns() {
        let nan = Vec4::new(f32::NAN, 0.0, 0.0, 0.0);
        assert_eq!(nan, nan);
        assert!(nan.bits_eq(&nan.cpy()));
        assert_ne!(Vec4::new(0.0, -0.0, 0.0, 0.0), Vec4::ZERO);

        let mut set = HashSet::new();
        set.insert(Vec4::X);
        set.insert(Vec4::new(1.0, 0.0, 0.0, 0.0));
        set.insert(Vec4::new(-0.0, 0.0, 0.0, 0.0));
        set.insert(Vec4::ZERO);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_epsilon_equals() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(1.05, 2.0, 2.95, 4.0);
        assert!(a.epsilon_equals(Some(&b), 0.1));
        assert!(!a.epsilon_equals(Some(&b), 0.01));
        assert!(!a.epsilon_equals(None, 0.1));
        assert!(!a.epsilon_equals(None, f32::MAX));

        // Tolerance equality is separate from bit equality
        let negative_zero = Vec4::new(-0.0, 0.0, 0.0, 0.0);
        assert!(negative_zero.epsilon_equals(Some(&Vec4::ZERO), 0.0));
        assert_ne!(negative_zero, Vec4::ZERO);
    }

    #[test]
    fn test_mul_add() {
        let mut v = Vec4::new(1.0, 1.0, 1.0, 1.0);
        v.mul_add(&Vec4::new(1.0, 2.0, 3.0, 4.0), 2.0);
        assert_eq!(v, Vec4::new(3.0, 5.0, 7.0, 9.0));

        v.mul_add_vec(
            &Vec4::new(1.0, 2.0, 3.0, 4.0),
            &Vec4::new(2.0, 1.0, 0.0, -1.0),
        );
        assert_eq!(v, Vec4::new(5.0, 7.0, 7.0, 5.0));
    }

    #[test]
    fn test_prj_onto_line() {
        let mut v = Vec4::new(1.0, 0.0, 0.0, 0.0);
        v.prj(&Vec4::new(1.0, 0.0, 0.0, 0.0)).unwrap();
        assert_eq!(v, Vec4::new(1.0, 0.0, 0.0, 0.0));

        let mut p = Vec4::new(3.0, 7.0, 0.0, 0.0);
        p.prj(&Vec4::new(2.0, 0.0, 0.0, 0.0)).unwrap();
        assert_eq!(p, Vec4::new(3.0, 0.0, 0.0, 0.0));

        let mut q = Vec4::new(2.0, 0.0, 0.0, 0.0);
        q.prj(&Vec4::new(1.0, 1.0, 0.0, 0.0)).unwrap().scl(2.0);
        assert!(q.epsilon_equals(Some(&Vec4::new(2.0, 2.0, 0.0, 0.0)), 1e-6));
    }

    #[test]
    fn test_prj_onto_zero_line_fails() {
        let mut v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.prj(&Vec4::ZERO).unwrap_err(), MathError::DegenerateLine);
        assert_eq!(v, Vec4::new(1.0, 2.0, 3.0, 4.0));

        let signed_zero = Vec4::new(-0.0, 0.0, -0.0, 0.0);
        assert!(v.prj(&signed_zero).is_err());

        // l · l underflows to zero
        let tiny = Vec4::new(1e-30, 0.0, 0.0, 0.0);
        assert!(matches!(v.prj(&tiny), Err(MathError::DegenerateLine)));
    }

    #[test]
    fn test_prj_segment_inside() {
        let mut v = Vec4::new(2.0, 2.0, 0.0, 0.0);
        v.prj_segment(&Vec4::ZERO, &Vec4::new(4.0, 0.0, 0.0, 0.0));
        assert_eq!(v, Vec4::new(2.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_prj_segment_clamps_to_upper_end() {
        let mut v = Vec4::new(5.0, 0.0, 0.0, 0.0);
        v.prj_segment(&Vec4::ZERO, &Vec4::new(2.0, 0.0, 0.0, 0.0));
        assert_eq!(v, Vec4::new(2.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_prj_segment_reversed_clamps_to_lower_end() {
        let start = Vec4::new(4.0, 0.0, 0.0, 0.0);
        let end = Vec4::ZERO;
        let mut v = Vec4::new(-3.0, 0.0, 0.0, 0.0);
        v.prj_segment(&start, &end);
        assert_eq!(v, end);

        let mut above = Vec4::new(9.0, 1.0, 0.0, 0.0);
        above.prj_segment(&start, &end);
        assert_eq!(above, start);
    }

    #[test]
    fn test_prj_segment_uses_first_differing_axis() {
        // Only w varies, so w decides the clamp
        let start = Vec4::ZERO;
        let end = Vec4::new(0.0, 0.0, 0.0, 2.0);
        let mut v = Vec4::new(0.0, 0.0, 0.0, 5.0);
        v.prj_segment(&start, &end);
        assert_eq!(v, end);

        // x and y both vary; x wins even though y has the larger extent.
        // The projection (0.5, 1) is inside [0, 1] on x but below 2 on y.
        let start = Vec4::new(0.0, 2.0, 0.0, 0.0);
        let end = Vec4::new(1.0, 4.0, 0.0, 0.0);
        let mut p = Vec4::new(0.5, 1.0, 0.0, 0.0);
        p.prj_segment(&start, &end);
        assert_eq!(p, Vec4::new(0.5, 1.0, 0.0, 0.0));
    }

    #[test]
    fn test_prj_segment_degenerate_snaps_to_start() {
        let start = Vec4::new(1.0, 1.0, 1.0, 1.0);
        let mut v = Vec4::new(7.0, -2.0, 0.0, 3.0);
        v.prj_segment(&start, &start.cpy());
        assert_eq!(v, start);
    }

    #[test]
    fn test_prj_segment_projects_along_direction_through_origin() {
        // The line runs through the origin along end - start, not through start
        let start = Vec4::new(0.0, 1.0, 0.0, 0.0);
        let end = Vec4::new(4.0, 1.0, 0.0, 0.0);
        let mut v = Vec4::new(2.0, 5.0, 0.0, 0.0);
        v.prj_segment(&start, &end);
        assert_eq!(v, Vec4::new(2.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_named_constants_are_values() {
        let mut x = Vec4::X;
        x.scl(5.0);
        assert_eq!(Vec4::X, Vec4::new(1.0, 0.0, 0.0, 0.0));
        assert!(Vec4::ZERO.is_zero());
        assert!(Vec4::Y.is_perpendicular(&Vec4::Z));
    }

    #[test]
    fn test_array_conversion() {
        let v = Vec4::from([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(v, Vec4::new(1.0, 2.0, 3.0, 4.0));
        let a: [f32; 4] = v.into();
        assert_eq!(a, [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(bytemuck::cast::<Vec4, [f32; 4]>(v), a);
    }

    #[test]
    fn test_operators() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(5.0, 6.0, 7.0, 8.0);
        assert_eq!(a + b, Vec4::new(6.0, 8.0, 10.0, 12.0));
        assert_eq!(b - a, Vec4::new(4.0, 4.0, 4.0, 4.0));
        assert_eq!(a * 2.0, Vec4::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(b / 2.0, Vec4::new(2.5, 3.0, 3.5, 4.0));
        assert_eq!(-a, Vec4::new(-1.0, -2.0, -3.0, -4.0));

        let mut c = a;
        c += b;
        c -= a;
        c *= 0.5;
        assert_eq!(c, Vec4::new(2.5, 3.0, 3.5, 4.0));
    }

    #[test]
    fn test_serde_field_layout() {
        let v = Vec4::new(1.0, -2.0, 0.5, 4.0);
        let toml = toml::to_string(&v).unwrap();
        assert!(toml.contains("x = 1.0"));
        assert!(toml.contains("w = 4.0"));
        let back: Vec4 = toml::from_str(&toml).unwrap();
        assert_eq!(back, v);
    }
}
