//! Fixed-dimension mathematical vectors over hand-managed storage.
//!
//! [`VecN<T, N>`] is a value type with `N` scalar coordinates backed by a
//! raw fixed-capacity buffer ([`storage::RawStorage`]) rather than a
//! language-provided array. The storage layer owns allocation, placement
//! construction, and destruction; this crate implements the numeric
//! semantics on top: arithmetic and geometric operators, tolerance-based
//! equality, and text formatting.
//!
//! # Quick start
//!
//! ```rust
//! use vecn::VecN;
//!
//! let a: VecN<f64, 3> = VecN::from_coords([1.0, 2.0, 3.0]);
//! let b = VecN::from_coords([4.0, 5.0, 6.0]);
//!
//! assert_eq!(a.clone() + b.clone(), VecN::from_coords([5.0, 7.0, 9.0]));
//! assert_eq!(a.dot(&b), 32.0);
//! assert_eq!(a.cross(&b), VecN::from_coords([-3.0, 6.0, -3.0]));
//! assert_eq!(a.clone() * 5.0, VecN::from_coords([5.0, 10.0, 15.0]));
//! assert_eq!(format!("{a}"), "{1; 2; 3}");
//! ```
//!
//! # Construction policy
//!
//! Every live `VecN` is fully populated. Building from a coordinate list
//! shorter than `N` zero-fills the remaining slots; a longer list is
//! truncated. This is a documented policy, not an error — no
//! partially-initialized vector is ever observable:
//!
//! ```rust
//! use vecn::VecN;
//!
//! let v: VecN<f64, 3> = VecN::from_slice(&[1.0, 2.0]);
//! assert_eq!(v, VecN::from_coords([1.0, 2.0, 0.0]));
//! ```
//!
//! # Equality
//!
//! `==` compares component-wise within an absolute tolerance
//! ([`Scalar::EPSILON`], 1e-7 for floats). Pass an explicit tolerance
//! with [`VecN::approx_eq_with`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod fmt;
pub mod ops;
pub mod scalar;
pub mod vector;

pub use error::VecError;
pub use scalar::Scalar;
pub use vector::VecN;

/// Raw storage layer (`vecn-storage`), re-exported for callers that need
/// the buffer type directly.
pub use vecn_storage as storage;
