use std::cmp::Ordering;

use spvec_core::{SparseVector, ValidationError};

///
/// Dot product of two sparse vectors in canonical (ascending index) order.
///
/// Two pointers walk both index sequences; whichever points at the smaller
/// index advances, and equal indices contribute `a.values[i] * b.values[j]`
/// to the sum. The scan stops as soon as either side is exhausted.
///
/// Returns `None` when the vectors share no index, so "no common dimension"
/// stays distinguishable from a dot product that sums to zero.
///
/// Sort order is not checked in release builds. Use [`checked_dot_product`]
/// for input that may be unsorted or malformed.
///
pub fn dot_product(a: &SparseVector, b: &SparseVector) -> Option<f32> {
    debug_assert!(a.is_sorted(), "dot_product: left vector is not sorted");
    debug_assert!(b.is_sorted(), "dot_product: right vector is not sorted");

    let mut result: f32 = 0.0;
    let mut overlap = false;
    let mut i = 0;
    let mut j = 0;

    while i < a.indices.len() && j < b.indices.len() {
        match a.indices[i].cmp(&b.indices[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                overlap = true;
                result += a.values[i] * b.values[j];
                i += 1;
                j += 1;
            }
        }
    }

    overlap.then_some(result)
}

///
/// Validate both vectors, sort them when needed, then compute the dot product.
///
/// Vectors that are already sorted are not copied.
///
pub fn checked_dot_product(
    a: &SparseVector,
    b: &SparseVector,
) -> Result<Option<f32>, ValidationError> {
    a.validate()?;
    b.validate()?;

    Ok(dot_product(&a.sort(), &b.sort()))
}
