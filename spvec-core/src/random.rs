//!
//! Synthetic sparse vectors for tests and benchmarks.
//!
//! Indices are drawn without replacement with [`rand::seq::index::sample`],
//! which picks Floyd's algorithm or a partial Fisher-Yates shuffle depending
//! on the ratio of sample size to range, so a density close to 1.0 costs no
//! more than a full shuffle.
//!
use log::debug;
use rand::Rng;
use rand::seq::index;

use crate::errors::GenerateError;
use crate::models::SparseVector;

///
/// Generate a random sparse vector using the thread-local RNG.
///
/// # Arguments
/// - dimension_count: size of the dimension space, indices fall in `[0, dimension_count)`
/// - density: fraction of dimensions that are non-zero, within `[0, 1]`
///
pub fn generate_random(dimension_count: u64, density: f64) -> Result<SparseVector, GenerateError> {
    generate_random_with_rng(&mut rand::rng(), dimension_count, density)
}

///
/// Generate a random sparse vector from an explicit random source.
///
/// The vector holds `floor(dimension_count * density)` distinct indices in
/// ascending order, each paired with a uniform value in `[0, 1)`.
///
pub fn generate_random_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    dimension_count: u64,
    density: f64,
) -> Result<SparseVector, GenerateError> {
    if !(0.0..=1.0).contains(&density) {
        return Err(GenerateError::InvalidDensity(density));
    }

    let num_nonzero = (dimension_count as f64 * density).floor() as usize;
    if num_nonzero == 0 {
        return Ok(SparseVector::empty());
    }

    let mut indices: Vec<u64> = index::sample(rng, dimension_count as usize, num_nonzero)
        .iter()
        .map(|i| i as u64)
        .collect();
    indices.sort_unstable();

    let values: Vec<f32> = (0..num_nonzero).map(|_| rng.random::<f32>()).collect();

    Ok(SparseVector { indices, values })
}

/// Generate `count` independent random sparse vectors using the thread-local RNG.
pub fn generate_random_batch(
    count: usize,
    dimension_count: u64,
    density: f64,
) -> Result<Vec<SparseVector>, GenerateError> {
    generate_random_batch_with_rng(&mut rand::rng(), count, dimension_count, density)
}

/// Generate `count` independent random sparse vectors from an explicit random source.
pub fn generate_random_batch_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    dimension_count: u64,
    density: f64,
) -> Result<Vec<SparseVector>, GenerateError> {
    debug!(
        "generating {} sparse vectors (dimensions: {}, density: {})",
        count, dimension_count, density
    );
    (0..count)
        .map(|_| generate_random_with_rng(rng, dimension_count, density))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::*;

    #[fixture]
    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[rstest]
    fn test_generate_random_hundred_by_tenth() {
        let v = generate_random(100, 0.1).unwrap();

        assert_eq!(v.len(), 10);
        assert!(v.validate().is_ok());
        assert!(v.is_sorted());
        assert!(v.indices.windows(2).all(|w| w[0] < w[1]));
        assert!(v.indices.iter().all(|&i| i < 100));
        assert!(v.values.iter().all(|&x| (0.0..1.0).contains(&x)));
    }

    #[rstest]
    #[case(100, 0.0)]
    #[case(0, 0.5)]
    #[case(9, 0.1)]
    fn test_generate_random_empty(#[case] dimension_count: u64, #[case] density: f64) {
        let v = generate_random(dimension_count, density).unwrap();
        assert!(v.is_empty());
        assert!(v.validate().is_ok());
    }

    #[rstest]
    fn test_generate_random_full_density(mut rng: StdRng) {
        let v = generate_random_with_rng(&mut rng, 64, 1.0).unwrap();
        assert_eq!(v.indices, (0..64).collect::<Vec<u64>>());
    }

    #[rstest]
    #[case(-0.1)]
    #[case(1.5)]
    #[case(f64::NAN)]
    fn test_generate_random_invalid_density(#[case] density: f64) {
        let result = generate_random(100, density);
        assert!(matches!(result, Err(GenerateError::InvalidDensity(_))));
    }

    #[rstest]
    fn test_generate_random_is_reproducible() {
        let a = generate_random_with_rng(&mut StdRng::seed_from_u64(7), 1_000, 0.05).unwrap();
        let b = generate_random_with_rng(&mut StdRng::seed_from_u64(7), 1_000, 0.05).unwrap();
        assert_eq!(a, b);
    }

    #[rstest]
    fn test_generate_random_batch(mut rng: StdRng) {
        let batch = generate_random_batch_with_rng(&mut rng, 25, 500, 0.02).unwrap();

        assert_eq!(batch.len(), 25);
        for v in &batch {
            assert_eq!(v.len(), 10);
            assert!(v.validate().is_ok());
            assert!(v.is_sorted());
        }
    }

    #[rstest]
    fn test_generate_random_batch_propagates_error() {
        assert!(generate_random_batch(3, 10, 2.0).is_err());
    }
}
