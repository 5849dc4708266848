//!
//! Core sparse vector model for spvec.
//!
//! A [`SparseVector`] stores only the non-zero dimensions of a vector as two
//! parallel sequences, `indices` and `values`. This crate owns the value type
//! and its invariants:
//!
//! - indices and values have the same length
//! - indices are distinct
//! - the canonical form keeps indices in ascending order
//!
//! It also provides synthetic random vectors for tests and benchmarks and,
//! with the `serde` feature, JSON file I/O.
//!
//! # Example
//!
//! ```rust
//! use spvec_core::models::SparseVector;
//!
//! let v = SparseVector::try_new(vec![5, 1, 3], vec![4.0, 2.0, 1.0]).unwrap();
//! assert!(!v.is_sorted());
//!
//! let sorted = v.sort();
//! assert_eq!(sorted.indices, vec![1, 3, 5]);
//! assert_eq!(sorted.values, vec![2.0, 1.0, 4.0]);
//! ```
//!
pub mod errors;
#[cfg(feature = "serde")]
pub mod io;
pub mod models;
pub mod random;

// re-exports
pub use errors::{GenerateError, ValidationError};
pub use models::SparseVector;
pub use random::{generate_random, generate_random_batch};
