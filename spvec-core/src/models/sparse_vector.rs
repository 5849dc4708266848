use std::borrow::Cow;
use std::collections::HashSet;

use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// A sparse vector: each non-zero dimension is stored as an index-value pair.
///
/// This mirrors the sparse vector format of the vector search service: two
/// parallel sequences of equal length, `indices` and `values`. Indices are
/// distinct, and the canonical form keeps them in ascending order, which is
/// what the merge-scan similarity functions expect.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SparseVector {
    pub indices: Vec<u64>,
    pub values: Vec<f32>,
}

impl SparseVector {
    /// Create a new sparse vector from indices and values without checking it.
    ///
    /// Use [`SparseVector::try_new`] for input that has not been validated yet.
    pub fn new(indices: Vec<u64>, values: Vec<f32>) -> Self {
        SparseVector { indices, values }
    }

    /// Create a new sparse vector, rejecting it if it breaks an invariant.
    pub fn try_new(indices: Vec<u64>, values: Vec<f32>) -> Result<Self, ValidationError> {
        let vector = SparseVector { indices, values };
        vector.validate()?;
        Ok(vector)
    }

    /// Create an empty sparse vector.
    pub fn empty() -> Self {
        SparseVector {
            indices: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Returns the number of non-zero entries.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if the vector has no entries.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterate over `(index, value)` pairs in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, f32)> + '_ {
        self.indices.iter().copied().zip(self.values.iter().copied())
    }

    ///
    /// Check the structural invariants of the vector.
    ///
    /// The length check runs first, so a vector that is both mismatched and
    /// duplicated reports [`ValidationError::LengthMismatch`].
    ///
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.indices.len() != self.values.len() {
            return Err(ValidationError::LengthMismatch {
                indices: self.indices.len(),
                values: self.values.len(),
            });
        }

        let mut seen = HashSet::with_capacity(self.indices.len());
        for &index in &self.indices {
            if !seen.insert(index) {
                return Err(ValidationError::DuplicateIndex(index));
            }
        }

        Ok(())
    }

    /// Returns true if `indices` is non-decreasing.
    pub fn is_sorted(&self) -> bool {
        self.indices.is_sorted()
    }

    ///
    /// Bring the vector into canonical (ascending index) order.
    ///
    /// A vector that is already sorted is borrowed back as-is. Otherwise a
    /// stable permutation of the indices is computed and applied to both
    /// sequences, producing a new vector.
    ///
    /// # Panics
    /// Panics if `values` is shorter than `indices`. Call
    /// [`SparseVector::validate`] first on untrusted input.
    ///
    pub fn sort(&self) -> Cow<'_, SparseVector> {
        if self.is_sorted() {
            return Cow::Borrowed(self);
        }

        debug!("sorting sparse vector with {} entries", self.len());

        let order = self.sort_permutation();
        Cow::Owned(SparseVector {
            indices: order.iter().map(|&i| self.indices[i]).collect(),
            values: order.iter().map(|&i| self.values[i]).collect(),
        })
    }

    /// Owning variant of [`SparseVector::sort`].
    pub fn into_sorted(self) -> SparseVector {
        if self.is_sorted() {
            return self;
        }
        self.sort().into_owned()
    }

    fn sort_permutation(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.indices.len()).collect();
        // sort_by_key is stable
        order.sort_by_key(|&i| self.indices[i]);
        order
    }
}

impl From<(Vec<u64>, Vec<f32>)> for SparseVector {
    fn from((indices, values): (Vec<u64>, Vec<f32>)) -> Self {
        SparseVector::new(indices, values)
    }
}

impl FromIterator<(u64, f32)> for SparseVector {
    fn from_iter<T: IntoIterator<Item = (u64, f32)>>(iter: T) -> Self {
        let (indices, values) = iter.into_iter().unzip();
        SparseVector { indices, values }
    }
}
