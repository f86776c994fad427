//! Raw fixed-capacity storage for the vecn workspace.
//!
//! Provides [`RawStorage`], an owning block of uninitialized memory with
//! explicit placement construction and move-only transfer. This is the
//! only crate in the workspace that may contain `unsafe` code; every
//! unsafe block carries a `// SAFETY:` comment.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod raw;

pub use raw::RawStorage;
