//!
//! Similarity scoring for sparse vectors.
//!
//! The core operation is a merge-scan dot product over vectors in canonical
//! (ascending index) order. It comes in two flavours:
//!
//! - [`dot_product`] is the fast path and assumes sorted input
//! - [`checked_dot_product`] validates and sorts on demand first
//!
//! A dot product between vectors that share no index is `None`. When a whole
//! batch is scored with [`batch_distance`], that case maps to
//! [`NO_OVERLAP_SCORE`] (negative infinity) so the scores sort directly.
//! [`batch_dot_product`] keeps the `Option`, which is what [`rank`] takes, so a
//! real overlap that overflows to `-inf` is not mistaken for "no overlap".
//!
//! ```rust
//! use spvec_core::SparseVector;
//! use spvec_scoring::{batch_distance, dot_product, NO_OVERLAP_SCORE};
//!
//! let a = SparseVector::new(vec![1, 3, 5], vec![2.0, 1.0, 4.0]);
//! let b = SparseVector::new(vec![3, 5, 7], vec![3.0, 2.0, 1.0]);
//! let c = SparseVector::new(vec![2, 4], vec![1.0, 1.0]);
//!
//! assert_eq!(dot_product(&a, &b), Some(11.0));
//! assert_eq!(dot_product(&a, &c), None);
//! assert_eq!(batch_distance(&a, &[b, c]), vec![11.0, NO_OVERLAP_SCORE]);
//! ```
//!
pub mod config;
pub mod consts;
pub mod distance;
pub mod dot;
pub mod ranking;

// re-exports
pub use config::{ScoringConfig, ScoringConfigError};
pub use consts::NO_OVERLAP_SCORE;
#[cfg(feature = "parallel")]
pub use distance::{par_batch_distance, par_batch_dot_product};
pub use distance::{batch_distance, batch_dot_product};
pub use dot::{checked_dot_product, dot_product};
pub use ranking::{ScoredCandidate, rank, search};
