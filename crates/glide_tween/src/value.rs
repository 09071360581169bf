//! Interpolable value capability set
//!
//! Easing formulas are written once, generically, against the small
//! capability set below: additive arithmetic, scalar multiply/divide, and
//! an ordering. Any payload implementing `Interpolable` can be tweened;
//! unsupported payload types are rejected at compile time by the bound.

use std::cmp::Ordering;
use std::fmt::Debug;

use glide_core::{Vec2, Vec3};

/// Capability set required of a tweenable payload.
///
/// All operations are pure and return a new value. Scalar factors are
/// `f32`; integer payloads truncate toward zero on multiply/divide, the
/// same way an `as i32` cast does.
pub trait Interpolable: Copy + PartialEq + Debug {
    fn add(self, rhs: Self) -> Self;

    fn subtract(self, rhs: Self) -> Self;

    /// Additive inverse, defined as scaling by -1.0.
    fn negate(self) -> Self {
        self.scale(-1.0)
    }

    fn scale(self, factor: f32) -> Self;

    fn divide(self, divisor: f32) -> Self;

    /// Ordering between two values: scalars compare by value, vectors by
    /// Euclidean magnitude.
    fn compare(self, other: Self) -> Ordering;
}

impl Interpolable for i32 {
    fn add(self, rhs: Self) -> Self {
        self + rhs
    }

    fn subtract(self, rhs: Self) -> Self {
        self - rhs
    }

    fn scale(self, factor: f32) -> Self {
        (self as f32 * factor) as i32
    }

    fn divide(self, divisor: f32) -> Self {
        (self as f32 / divisor) as i32
    }

    fn compare(self, other: Self) -> Ordering {
        self.cmp(&other)
    }
}

impl Interpolable for f32 {
    fn add(self, rhs: Self) -> Self {
        self + rhs
    }

    fn subtract(self, rhs: Self) -> Self {
        self - rhs
    }

    fn scale(self, factor: f32) -> Self {
        self * factor
    }

    fn divide(self, divisor: f32) -> Self {
        self / divisor
    }

    fn compare(self, other: Self) -> Ordering {
        self.total_cmp(&other)
    }
}

impl Interpolable for Vec2 {
    fn add(self, rhs: Self) -> Self {
        self + rhs
    }

    fn subtract(self, rhs: Self) -> Self {
        self - rhs
    }

    fn scale(self, factor: f32) -> Self {
        self * factor
    }

    fn divide(self, divisor: f32) -> Self {
        self / divisor
    }

    fn compare(self, other: Self) -> Ordering {
        self.length().total_cmp(&other.length())
    }
}

impl Interpolable for Vec3 {
    fn add(self, rhs: Self) -> Self {
        self + rhs
    }

    fn subtract(self, rhs: Self) -> Self {
        self - rhs
    }

    fn scale(self, factor: f32) -> Self {
        self * factor
    }

    fn divide(self, divisor: f32) -> Self {
        self / divisor
    }

    fn compare(self, other: Self) -> Ordering {
        self.length().total_cmp(&other.length())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_scale_truncates_toward_zero() {
        assert_eq!(5_i32.scale(0.5), 2);
        assert_eq!((-5_i32).scale(0.5), -2);
        assert_eq!(7_i32.divide(2.0), 3);
        assert_eq!((-7_i32).divide(2.0), -3);
    }

    #[test]
    fn test_negate_is_scale_by_minus_one() {
        assert_eq!(3_i32.negate(), -3);
        assert_eq!(2.5f32.negate(), -2.5);
        assert_eq!(Vec2::new(1.0, -2.0).negate(), Vec2::new(-1.0, 2.0));
    }

    #[test]
    fn test_scalars_compare_by_value() {
        // -5 is smaller than 3 even though its magnitude is larger
        assert_eq!((-5_i32).compare(3), Ordering::Less);
        assert_eq!((-5.0f32).compare(3.0), Ordering::Less);
        assert_eq!(2.0f32.compare(2.0), Ordering::Equal);
    }

    #[test]
    fn test_vectors_compare_by_magnitude() {
        let long = Vec2::new(-3.0, -4.0); // length 5
        let short = Vec2::new(1.0, 1.0); // length sqrt(2)
        assert_eq!(long.compare(short), Ordering::Greater);

        let a = Vec3::new(0.0, 0.0, 2.0);
        let b = Vec3::new(1.0, 1.0, 1.0);
        assert_eq!(a.compare(b), Ordering::Greater);
    }

    #[test]
    fn test_vector_arithmetic_is_componentwise() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a.add(b), Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b.subtract(a), Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a.scale(2.0), Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(b.divide(2.0), Vec3::new(2.0, 2.5, 3.0));
    }
}
