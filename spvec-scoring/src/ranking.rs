use std::borrow::Cow;
use std::cmp::Ordering;

use log::debug;
use serde::Serialize;

use spvec_core::{SparseVector, ValidationError};

use crate::config::ScoringConfig;
use crate::consts::NO_OVERLAP_SCORE;
use crate::distance::batch_dot_product;
#[cfg(feature = "parallel")]
use crate::distance::par_batch_dot_product;

/// A candidate's position in the scored batch and its similarity to the query.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate {
    pub position: usize,
    pub score: f32,
}

/// Present scores descending, absent scores last, ties by position.
fn by_score_desc(a: &(usize, Option<f32>), b: &(usize, Option<f32>)) -> Ordering {
    let by_score = match (a.1, b.1) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_score.then_with(|| a.0.cmp(&b.0))
}

///
/// Rank the output of [`batch_dot_product`] from most to least similar.
///
/// Ties keep the lower input position first. Candidates without a dot product
/// (`None`, no shared index) are dropped when `config.exclude_non_overlapping`
/// is set, otherwise they end up last with score [`NO_OVERLAP_SCORE`].
/// A real overlap whose sum overflowed to `-inf` is kept and still ranks
/// ahead of them. `config.limit` truncates the ranking.
///
pub fn rank(scores: &[Option<f32>], config: &ScoringConfig) -> Vec<ScoredCandidate> {
    let mut ranked: Vec<(usize, Option<f32>)> = scores
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, score)| !(config.exclude_non_overlapping && score.is_none()))
        .collect();

    ranked.sort_by(by_score_desc);

    if let Some(limit) = config.limit {
        ranked.truncate(limit);
    }

    ranked
        .into_iter()
        .map(|(position, score)| ScoredCandidate {
            position,
            score: score.unwrap_or(NO_OVERLAP_SCORE),
        })
        .collect()
}

///
/// Score and rank candidates against a query.
///
/// This is the checked entry point: the query and every candidate are
/// validated and brought into canonical order first (vectors that are
/// already sorted are not copied).
///
pub fn search(
    query: &SparseVector,
    candidates: &[SparseVector],
    config: &ScoringConfig,
) -> Result<Vec<ScoredCandidate>, ValidationError> {
    query.validate()?;
    let query = query.sort();

    let candidates = candidates
        .iter()
        .map(|candidate| candidate.validate().map(|_| candidate.sort()))
        .collect::<Result<Vec<Cow<'_, SparseVector>>, _>>()?;

    debug!(
        "scoring {} candidates (parallel: {})",
        candidates.len(),
        config.parallel
    );

    let scores = score_batch(&query, &candidates, config);

    Ok(rank(&scores, config))
}

#[cfg(feature = "parallel")]
fn score_batch(
    query: &SparseVector,
    candidates: &[Cow<'_, SparseVector>],
    config: &ScoringConfig,
) -> Vec<Option<f32>> {
    if config.parallel {
        par_batch_dot_product(query, candidates)
    } else {
        batch_dot_product(query, candidates)
    }
}

#[cfg(not(feature = "parallel"))]
fn score_batch(
    query: &SparseVector,
    candidates: &[Cow<'_, SparseVector>],
    _config: &ScoringConfig,
) -> Vec<Option<f32>> {
    batch_dot_product(query, candidates)
}
