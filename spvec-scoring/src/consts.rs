/// Batch score of a candidate that shares no index with the query.
///
/// Sorts below every finite score, both with `<` and with `f32::total_cmp`.
pub const NO_OVERLAP_SCORE: f32 = f32::NEG_INFINITY;

pub const DEFAULT_EXCLUDE_NON_OVERLAPPING: bool = true;
pub const DEFAULT_PARALLEL: bool = true;
