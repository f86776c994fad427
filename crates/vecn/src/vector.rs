//! The fixed-dimension vector type.

use crate::error::VecError;
use crate::scalar::Scalar;
use vecn_storage::RawStorage;

/// A fixed-dimension mathematical vector with `N` coordinates of type `T`.
///
/// Every live `VecN` is fully populated: construction always fills all
/// `N` slots (zero-padding short inputs, truncating long ones), so no
/// partially-initialized vector is ever observable. All memory concerns
/// are delegated to [`RawStorage`]; this type implements the numeric
/// semantics on top.
///
/// Element access is always bounds-checked — [`get`](VecN::get) and
/// [`set`](VecN::set) return [`VecError::OutOfRange`] rather than
/// touching memory past the last coordinate.
///
/// Equality (`==`) is tolerance-based: coordinates compare equal when
/// they differ by at most [`Scalar::EPSILON`].
pub struct VecN<T: Scalar, const N: usize = 3> {
    buf: RawStorage<T>,
}

impl<T: Scalar, const N: usize> VecN<T, N> {
    /// The dimension, exposed as an inherent constant.
    pub const DIM: usize = N;

    /// The zero vector.
    pub fn zero() -> Self {
        Self::from_fn(|_| T::zero())
    }

    /// Build a vector from exactly `N` coordinates.
    pub fn from_coords(coords: [T; N]) -> Self {
        let mut buf = RawStorage::with_capacity(N);
        for c in coords {
            buf.push(c);
        }
        Self { buf }
    }

    /// Build a vector from a coordinate list of any length.
    ///
    /// Copies the first `min(coords.len(), N)` entries; remaining slots
    /// are zero-filled, excess entries are ignored. Length mismatch is a
    /// documented policy, not an error.
    pub fn from_slice(coords: &[T]) -> Self {
        Self::from_fn(|i| coords.get(i).copied().unwrap_or_else(T::zero))
    }

    /// Build a vector by evaluating `f` at each index in order.
    pub fn from_fn(mut f: impl FnMut(usize) -> T) -> Self {
        let mut buf = RawStorage::with_capacity(N);
        for i in 0..N {
            buf.push(f(i));
        }
        Self { buf }
    }

    /// Read the coordinate at `index`.
    ///
    /// Returns `Err(VecError::OutOfRange)` when `index >= N`.
    pub fn get(&self, index: usize) -> Result<T, VecError> {
        self.as_slice()
            .get(index)
            .copied()
            .ok_or(VecError::OutOfRange { index, dim: N })
    }

    /// Write the coordinate at `index`.
    ///
    /// Returns `Err(VecError::OutOfRange)` when `index >= N`; the vector
    /// is unmodified on error.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), VecError> {
        match self.buf.as_mut_slice().get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(VecError::OutOfRange { index, dim: N }),
        }
    }

    /// All coordinates in index order.
    pub fn as_slice(&self) -> &[T] {
        self.buf.as_slice()
    }

    // In-bounds mutation for the operator impls; public writes go
    // through the checked `set`.
    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        self.buf.as_mut_slice()
    }

    /// Dot product: the sum of `self[i] * other[i]`.
    pub fn dot(&self, other: &Self) -> T {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .fold(T::zero(), |acc, (a, b)| acc + *a * *b)
    }

    /// Squared Euclidean length.
    ///
    /// Sufficient for ordering comparisons and avoids the square root.
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    /// Squared distance to `other`: the sum of `(self[i] - other[i])²`.
    pub fn distance_squared(&self, other: &Self) -> T {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .fold(T::zero(), |acc, (a, b)| {
                let d = *a - *b;
                acc + d * d
            })
    }

    /// True when this vector is strictly shorter than `other`.
    ///
    /// Compares squared lengths directly; no square root is taken, which
    /// is both cheaper and avoids precision loss near zero.
    pub fn shorter_than(&self, other: &Self) -> bool {
        self.length_squared() < other.length_squared()
    }

    /// Component-wise equality within an explicit absolute tolerance.
    pub fn approx_eq_with(&self, other: &Self, epsilon: T) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| (*a - *b).abs() <= epsilon)
    }

    /// Cross product for dimension-generic callers.
    ///
    /// Returns `Err(VecError::DimensionMismatch)` unless `N == 3`.
    /// Callers with a statically known dimension should prefer the
    /// inherent `cross` on `VecN<T, 3>`, which rejects other dimensions
    /// at compile time.
    pub fn try_cross(&self, other: &Self) -> Result<Self, VecError> {
        if N != 3 {
            return Err(VecError::DimensionMismatch {
                expected: 3,
                got: N,
            });
        }
        let a = self.as_slice();
        let b = other.as_slice();
        Ok(Self::from_fn(|i| match i {
            0 => a[1] * b[2] - a[2] * b[1],
            1 => a[2] * b[0] - a[0] * b[2],
            _ => a[0] * b[1] - a[1] * b[0],
        }))
    }
}

impl<T: Scalar> VecN<T, 3> {
    /// Cross product, defined for dimension 3 only:
    /// `(a1*b2 - a2*b1, a2*b0 - a0*b2, a0*b1 - a1*b0)`.
    pub fn cross(&self, other: &Self) -> Self {
        let a = self.as_slice();
        let b = other.as_slice();
        Self::from_coords([
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ])
    }
}

impl<T: Scalar, const N: usize> Default for VecN<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar, const N: usize> Clone for VecN<T, N> {
    // Deep element-wise copy into a freshly allocated buffer; the raw
    // storage itself is move-only.
    fn clone(&self) -> Self {
        Self::from_slice(self.as_slice())
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for VecN<T, N> {
    fn from(coords: [T; N]) -> Self {
        Self::from_coords(coords)
    }
}

impl<T: Scalar, const N: usize> From<&[T]> for VecN<T, N> {
    fn from(coords: &[T]) -> Self {
        Self::from_slice(coords)
    }
}
