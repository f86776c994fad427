//! Operator implementations for [`VecN`].
//!
//! All operators are coordinate-wise over `[0, N)`. Equal dimension is
//! enforced by the type system — both operands share the `N` parameter,
//! so `+` and `-` need no runtime dimension check. Scalar division by
//! zero is deliberately unguarded and follows the scalar type's native
//! behavior (infinity/NaN for floats, panic for integers).

use std::ops::{
    Add, AddAssign, BitXor, BitXorAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::scalar::Scalar;
use crate::vector::VecN;

// ── Element-wise addition and subtraction ────────────────────────────

impl<T: Scalar, const N: usize> AddAssign for VecN<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        for (a, b) in self.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            *a = *a + *b;
        }
    }
}

impl<T: Scalar, const N: usize> Add for VecN<T, N> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<T: Scalar, const N: usize> SubAssign for VecN<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        for (a, b) in self.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            *a = *a - *b;
        }
    }
}

impl<T: Scalar, const N: usize> Sub for VecN<T, N> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

// ── Scalar scaling ───────────────────────────────────────────────────

impl<T: Scalar, const N: usize> MulAssign<T> for VecN<T, N> {
    fn mul_assign(&mut self, rhs: T) {
        for a in self.as_mut_slice() {
            *a = *a * rhs;
        }
    }
}

impl<T: Scalar, const N: usize> Mul<T> for VecN<T, N> {
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self {
        self *= rhs;
        self
    }
}

impl<T: Scalar, const N: usize> DivAssign<T> for VecN<T, N> {
    fn div_assign(&mut self, rhs: T) {
        for a in self.as_mut_slice() {
            *a = *a / rhs;
        }
    }
}

impl<T: Scalar, const N: usize> Div<T> for VecN<T, N> {
    type Output = Self;

    fn div(mut self, rhs: T) -> Self {
        self /= rhs;
        self
    }
}

// Scalar-on-the-left multiplication, per concrete scalar type — a
// blanket `impl Mul<VecN<T, N>> for T` is ruled out by coherence.
macro_rules! scalar_lhs_mul {
    ($($t:ty),*) => {$(
        impl<const N: usize> Mul<VecN<$t, N>> for $t {
            type Output = VecN<$t, N>;

            fn mul(self, rhs: VecN<$t, N>) -> VecN<$t, N> {
                rhs * self
            }
        }
    )*};
}

scalar_lhs_mul!(f32, f64, i32, i64);

// ── Negation ─────────────────────────────────────────────────────────

impl<T: Scalar, const N: usize> Neg for VecN<T, N> {
    type Output = Self;

    fn neg(mut self) -> Self {
        for a in self.as_mut_slice() {
            *a = -*a;
        }
        self
    }
}

// ── Cross product (`^`), dimension 3 only ────────────────────────────

impl<T: Scalar> BitXor for VecN<T, 3> {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        self.cross(&rhs)
    }
}

impl<T: Scalar> BitXorAssign for VecN<T, 3> {
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = self.cross(&rhs);
    }
}

// ── Tolerance-based equality ─────────────────────────────────────────

impl<T: Scalar, const N: usize> PartialEq for VecN<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq_with(other, T::EPSILON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn v3(coords: [f64; 3]) -> VecN<f64, 3> {
        VecN::from_coords(coords)
    }

    // ── Worked examples ─────────────────────────────────────────

    #[test]
    fn add_worked_example() {
        let a = v3([1.0, 2.0, 3.0]);
        let b = v3([4.0, 5.0, 6.0]);
        assert_eq!(a + b, v3([5.0, 7.0, 9.0]));
    }

    #[test]
    fn sub_worked_example() {
        let a = v3([1.0, 2.0, 3.0]);
        let b = v3([4.0, 5.0, 6.0]);
        assert_eq!(b - a, v3([3.0, 3.0, 3.0]));
    }

    #[test]
    fn scalar_mul_worked_example() {
        let a = v3([1.0, 2.0, 3.0]);
        assert_eq!(a * 5.0, v3([5.0, 10.0, 15.0]));
    }

    #[test]
    fn scalar_mul_commutes_with_side() {
        let a = v3([1.0, 2.0, 3.0]);
        assert_eq!(5.0 * a.clone(), a * 5.0);
    }

    #[test]
    fn scalar_div_worked_example() {
        let a = v3([5.0, 10.0, 15.0]);
        assert_eq!(a / 5.0, v3([1.0, 2.0, 3.0]));
    }

    #[test]
    fn float_division_by_zero_is_unguarded() {
        let a = v3([1.0, -1.0, 0.0]);
        let r = a / 0.0;
        assert_eq!(r.get(0).unwrap(), f64::INFINITY);
        assert_eq!(r.get(1).unwrap(), f64::NEG_INFINITY);
        assert!(r.get(2).unwrap().is_nan());
    }

    #[test]
    fn neg_worked_example() {
        let a = v3([1.0, 2.0, 3.0]);
        assert_eq!(-a, v3([-1.0, -2.0, -3.0]));
    }

    #[test]
    fn xor_is_the_cross_product() {
        let a = v3([1.0, 2.0, 3.0]);
        let b = v3([4.0, 5.0, 6.0]);
        assert_eq!(a ^ b, v3([-3.0, 6.0, -3.0]));
    }

    #[test]
    fn compound_assignment_forms_match() {
        let mut v = v3([1.0, 2.0, 3.0]);
        v += v3([1.0, 1.0, 1.0]);
        v -= v3([0.0, 1.0, 0.0]);
        v *= 2.0;
        v /= 4.0;
        assert_eq!(v, v3([1.0, 1.0, 2.0]));

        let mut c = v3([1.0, 0.0, 0.0]);
        c ^= v3([0.0, 1.0, 0.0]);
        assert_eq!(c, v3([0.0, 0.0, 1.0]));
    }

    #[test]
    fn integer_operators_work() {
        let a: VecN<i32, 3> = VecN::from_coords([1, 2, 3]);
        let b: VecN<i32, 3> = VecN::from_coords([4, 5, 6]);
        assert_eq!(a.clone() + b.clone(), VecN::from_coords([5, 7, 9]));
        assert_eq!(a.clone() * 2, VecN::from_coords([2, 4, 6]));
        assert_eq!(2 * a, VecN::from_coords([2, 4, 6]));
        assert_eq!(-b, VecN::from_coords([-4, -5, -6]));
    }

    // ── Equality ────────────────────────────────────────────────

    #[test]
    fn equality_within_default_epsilon() {
        let a = v3([1.0, 2.0, 3.0]);
        let b = v3([1.0 + 1e-8, 2.0 - 1e-8, 3.0]);
        assert_eq!(a, b);
    }

    #[test]
    fn inequality_beyond_default_epsilon() {
        let a = v3([1.0, 2.0, 3.0]);
        let b = v3([1.0 + 1e-6, 2.0, 3.0]);
        assert_ne!(a, b);
    }

    #[test]
    fn explicit_tolerance_overrides_default() {
        let a = v3([1.0, 2.0, 3.0]);
        let b = v3([1.0 + 1e-6, 2.0, 3.0]);
        assert!(a.approx_eq_with(&b, 1e-5));
        assert!(!a.approx_eq_with(&b, 1e-7));
    }

    // ── Algebraic laws ──────────────────────────────────────────

    fn arb_v3() -> impl Strategy<Value = VecN<f64, 3>> {
        proptest::array::uniform3(-1e3..1e3f64).prop_map(VecN::from_coords)
    }

    proptest! {
        #[test]
        fn additive_inverse_yields_zero(v in arb_v3()) {
            prop_assert_eq!(v.clone() + (-v), VecN::zero());
        }

        #[test]
        fn addition_is_commutative(a in arb_v3(), b in arb_v3()) {
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn scale_then_unscale_roundtrips(v in arb_v3(), s in 0.1..10.0f64) {
            prop_assert_eq!((v.clone() * s) / s, v);
        }

        #[test]
        fn cross_is_anticommutative(a in arb_v3(), b in arb_v3()) {
            prop_assert_eq!(a.cross(&b), -(b.cross(&a)));
        }

        #[test]
        fn cross_is_orthogonal_to_operands(a in arb_v3(), b in arb_v3()) {
            let c = a.cross(&b);
            // Coordinates up to 1e3 make the dot cancel at the rounding
            // scale of ~1e9 intermediates, not of 1.0.
            prop_assert!(c.dot(&a).abs() < 1e-4);
            prop_assert!(c.dot(&b).abs() < 1e-4);
        }
    }
}
