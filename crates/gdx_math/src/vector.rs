//! Vector capability shared by the engine's vector types
//!
//! Geometry code that only needs arithmetic, metrics and direction tests
//! can be written once against [`Vector`] instead of a concrete type.

use crate::Vec4;

/// Common operations of 2D/3D/4D vectors
///
/// Mutating methods change the receiver and return it for chaining.
pub trait Vector: Copy {
    /// Independent copy of this vector
    fn cpy(&self) -> Self;

    fn len(&self) -> f32;

    /// Squared length, cheaper than [`Vector::len`] for comparisons
    fn len2(&self) -> f32;

    /// Shorten to length `limit` if longer
    fn limit(&mut self, limit: f32) -> &mut Self;

    /// Bring the length into `[min, max]`; zero vectors are left alone
    fn clamp(&mut self, min: f32, max: f32) -> &mut Self;

    fn set_from(&mut self, other: &Self) -> &mut Self;
    fn sub_vec(&mut self, other: &Self) -> &mut Self;
    fn add_vec(&mut self, other: &Self) -> &mut Self;
    fn scl(&mut self, scalar: f32) -> &mut Self;
    fn scl_vec(&mut self, other: &Self) -> &mut Self;
    fn dot(&self, other: &Self) -> f32;

    /// Normalize in place; zero and unit vectors are returned unchanged
    fn nor(&mut self) -> &mut Self;

    fn dst(&self, other: &Self) -> f32;
    fn dst2(&self, other: &Self) -> f32;
    fn lerp(&mut self, target: &Self, alpha: f32) -> &mut Self;

    fn is_unit(&self) -> bool;
    fn is_unit_with(&self, margin: f32) -> bool;

    /// Bit-exact zero test
    fn is_zero(&self) -> bool;
    fn is_zero_with(&self, margin: f32) -> bool;

    fn is_collinear(&self, other: &Self) -> bool;
    fn is_collinear_with(&self, other: &Self, epsilon: f32) -> bool;
    fn is_collinear_opposite(&self, other: &Self) -> bool;
    fn is_collinear_opposite_with(&self, other: &Self, epsilon: f32) -> bool;
    fn is_perpendicular(&self, other: &Self) -> bool;
    fn is_perpendicular_with(&self, other: &Self, epsilon: f32) -> bool;
    fn has_same_direction(&self, other: &Self) -> bool;
    fn has_opposite_direction(&self, other: &Self) -> bool;

    fn epsilon_equals(&self, other: Option<&Self>, epsilon: f32) -> bool;
    fn mul_add(&mut self, v: &Self, scalar: f32) -> &mut Self;
    fn mul_add_vec(&mut self, v: &Self, mul: &Self) -> &mut Self;
}

impl Vector for Vec4 {
    fn cpy(&self) -> Self {
        Vec4::cpy(self)
    }

    fn len(&self) -> f32 {
        Vec4::len(self)
    }

    fn len2(&self) -> f32 {
        Vec4::len2(self)
    }

    fn limit(&mut self, limit: f32) -> &mut Self {
        Vec4::limit(self, limit)
    }

    fn clamp(&mut self, min: f32, max: f32) -> &mut Self {
        Vec4::clamp(self, min, max)
    }

    fn set_from(&mut self, other: &Self) -> &mut Self {
        Vec4::set_from(self, other)
    }

    fn sub_vec(&mut self, other: &Self) -> &mut Self {
        Vec4::sub_vec(self, other)
    }

    fn add_vec(&mut self, other: &Self) -> &mut Self {
        Vec4::add_vec(self, other)
    }

    fn scl(&mut self, scalar: f32) -> &mut Self {
        Vec4::scl(self, scalar)
    }

    fn scl_vec(&mut self, other: &Self) -> &mut Self {
        Vec4::scl_vec(self, other)
    }

    fn dot(&self, other: &Self) -> f32 {
        Vec4::dot(self, other)
    }

    fn nor(&mut self) -> &mut Self {
        Vec4::nor(self)
    }

    fn dst(&self, other: &Self) -> f32 {
        Vec4::dst(self, other)
    }

    fn dst2(&self, other: &Self) -> f32 {
        Vec4::dst2(self, other)
    }

    fn lerp(&mut self, target: &Self, alpha: f32) -> &mut Self {
        Vec4::lerp(self, target, alpha)
    }

    fn is_unit(&self) -> bool {
        Vec4::is_unit(self)
    }

    fn is_unit_with(&self, margin: f32) -> bool {
        Vec4::is_unit_with(self, margin)
    }

    fn is_zero(&self) -> bool {
        Vec4::is_zero(self)
    }

    fn is_zero_with(&self, margin: f32) -> bool {
        Vec4::is_zero_with(self, margin)
    }

    fn is_collinear(&self, other: &Self) -> bool {
        Vec4::is_collinear(self, other)
    }

    fn is_collinear_with(&self, other: &Self, epsilon: f32) -> bool {
        Vec4::is_collinear_with(self, other, epsilon)
    }

    fn is_collinear_opposite(&self, other: &Self) -> bool {
        Vec4::is_collinear_opposite(self, other)
    }

    fn is_collinear_opposite_with(&self, other: &Self, epsilon: f32) -> bool {
        Vec4::is_collinear_opposite_with(self, other, epsilon)
    }

    fn is_perpendicular(&self, other: &Self) -> bool {
        Vec4::is_perpendicular(self, other)
    }

    fn is_perpendicular_with(&self, other: &Self, epsilon: f32) -> bool {
        Vec4::is_perpendicular_with(self, other, epsilon)
    }

    fn has_same_direction(&self, other: &Self) -> bool {
        Vec4::has_same_direction(self, other)
    }

    fn has_opposite_direction(&self, other: &Self) -> bool {
        Vec4::has_opposite_direction(self, other)
    }

    fn epsilon_equals(&self, other: Option<&Self>, epsilon: f32) -> bool {
        Vec4::epsilon_equals(self, other, epsilon)
    }

    fn mul_add(&mut self, v: &Self, scalar: f32) -> &mut Self {
        Vec4::mul_add(self, v, scalar)
    }

    fn mul_add_vec(&mut self, v: &Self, mul: &Self) -> &mut Self {
        Vec4::mul_add_vec(self, v, mul)
    }
}
