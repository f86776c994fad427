//! Numeric bounds for vector coordinates.

use num_traits::Signed;

/// A numeric coordinate type.
///
/// Built from the `num-traits` tower: [`Signed`] brings `Zero`, `One`,
/// the arithmetic operators, and `abs`; `PartialOrd + Copy` on top make
/// coordinates cheap to move around and orderable for tolerance checks.
///
/// `EPSILON` is the default absolute tolerance used by `==` on vectors:
/// 1e-7 for the float impls, zero for integers (exact comparison). A
/// comparison with a different tolerance goes through
/// [`VecN::approx_eq_with`](crate::VecN::approx_eq_with).
pub trait Scalar: Signed + PartialOrd + Copy {
    /// Default absolute tolerance for equality comparisons.
    const EPSILON: Self;
}

impl Scalar for f32 {
    const EPSILON: Self = 1e-7;
}

impl Scalar for f64 {
    const EPSILON: Self = 1e-7;
}

impl Scalar for i32 {
    const EPSILON: Self = 0;
}

impl Scalar for i64 {
    const EPSILON: Self = 0;
}
