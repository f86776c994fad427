//! Text formatting and parsing for [`VecN`].
//!
//! Rendering is brace-delimited and semicolon-separated (`{1; 2; 3}`).
//! Parsing reads exactly `N` whitespace-separated scalar tokens in index
//! order and assigns them through the checked setter; a wrong token
//! count or an unparsable token is [`VecError::MalformedInput`].

use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

use crate::error::VecError;
use crate::scalar::Scalar;
use crate::vector::VecN;

impl<T: Scalar + fmt::Display, const N: usize> fmt::Display for VecN<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, c) in self.as_slice().iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, "}}")
    }
}

impl<T: Scalar + fmt::Debug, const N: usize> fmt::Debug for VecN<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("VecN").field(&self.as_slice()).finish()
    }
}

impl<T: Scalar + FromStr, const N: usize> FromStr for VecN<T, N>
where
    T::Err: fmt::Display,
{
    type Err = VecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut coords: SmallVec<[T; 8]> = SmallVec::new();
        for token in s.split_whitespace() {
            if coords.len() == N {
                return Err(VecError::MalformedInput {
                    reason: format!("expected {N} coordinates, found more"),
                });
            }
            let value = token.parse::<T>().map_err(|e| VecError::MalformedInput {
                reason: format!("invalid coordinate '{token}': {e}"),
            })?;
            coords.push(value);
        }
        if coords.len() != N {
            return Err(VecError::MalformedInput {
                reason: format!("expected {N} coordinates, found {}", coords.len()),
            });
        }

        let mut v = Self::zero();
        for (i, c) in coords.into_iter().enumerate() {
            v.set(i, c).expect("i < N: token count was checked above");
        }
        Ok(v)
    }
}
