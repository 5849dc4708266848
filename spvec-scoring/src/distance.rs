use std::borrow::Borrow;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use spvec_core::SparseVector;

use crate::consts::NO_OVERLAP_SCORE;
use crate::dot::dot_product;

///
/// Score every candidate against the query with [`dot_product`].
///
/// The output has one score per candidate, in input order. A candidate that
/// shares no index with the query scores [`NO_OVERLAP_SCORE`], so the result
/// can be ranked directly.
///
/// All vectors must be in canonical order.
///
pub fn batch_distance<V: Borrow<SparseVector>>(query: &SparseVector, candidates: &[V]) -> Vec<f32> {
    candidates
        .iter()
        .map(|candidate| score(query, candidate.borrow()))
        .collect()
}

///
/// Parallel variant of [`batch_distance`] backed by the rayon thread pool.
///
/// Produces exactly the same sequence as [`batch_distance`].
///
#[cfg(feature = "parallel")]
pub fn par_batch_distance<V>(query: &SparseVector, candidates: &[V]) -> Vec<f32>
where
    V: Borrow<SparseVector> + Sync,
{
    candidates
        .par_iter()
        .map(|candidate| score(query, candidate.borrow()))
        .collect()
}

#[inline]
fn score(query: &SparseVector, candidate: &SparseVector) -> f32 {
    dot_product(query, candidate).unwrap_or(NO_OVERLAP_SCORE)
}

///
/// Like [`batch_distance`] but keeps the absent dot products as `None`.
///
/// Use this when a real overlap that sums to `-inf` (an `f32` overflow) must
/// stay distinguishable from "no shared index".
///
pub fn batch_dot_product<V: Borrow<SparseVector>>(
    query: &SparseVector,
    candidates: &[V],
) -> Vec<Option<f32>> {
    candidates
        .iter()
        .map(|candidate| dot_product(query, candidate.borrow()))
        .collect()
}

/// Parallel variant of [`batch_dot_product`].
#[cfg(feature = "parallel")]
pub fn par_batch_dot_product<V>(query: &SparseVector, candidates: &[V]) -> Vec<Option<f32>>
where
    V: Borrow<SparseVector> + Sync,
{
    candidates
        .par_iter()
        .map(|candidate| dot_product(query, candidate.borrow()))
        .collect()
}
