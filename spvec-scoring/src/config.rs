use std::fs::read_to_string;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{DEFAULT_EXCLUDE_NON_OVERLAPPING, DEFAULT_PARALLEL};

fn default_exclude_non_overlapping() -> bool {
    DEFAULT_EXCLUDE_NON_OVERLAPPING
}

fn default_parallel() -> bool {
    DEFAULT_PARALLEL
}

/// How batch scores are turned into a ranking.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    /// Keep at most this many candidates. No limit when absent.
    #[serde(default)]
    pub limit: Option<usize>,
    /// Drop candidates that share no index with the query instead of ranking them last.
    #[serde(default = "default_exclude_non_overlapping")]
    pub exclude_non_overlapping: bool,
    /// Score candidates on the rayon thread pool. Ignored without the `parallel` feature.
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            limit: None,
            exclude_non_overlapping: DEFAULT_EXCLUDE_NON_OVERLAPPING,
            parallel: DEFAULT_PARALLEL,
        }
    }
}

impl ScoringConfig {
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_exclude_non_overlapping(mut self, exclude: bool) -> Self {
        self.exclude_non_overlapping = exclude;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

#[derive(Error, Debug)]
pub enum ScoringConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type ScoringConfigResult<T> = std::result::Result<T, ScoringConfigError>;

impl TryFrom<&Path> for ScoringConfig {
    type Error = ScoringConfigError;

    fn try_from(path: &Path) -> ScoringConfigResult<Self> {
        let toml_str = read_to_string(path)?;
        let config = toml::from_str(&toml_str)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use std::path::PathBuf;

    #[rstest]
    fn test_try_from_toml() {
        let path = PathBuf::from("tests/data/scoring.toml");
        let config = ScoringConfig::try_from(path.as_path()).unwrap();

        assert_eq!(config.limit, Some(5));
        assert_eq!(config.exclude_non_overlapping, false);
        assert_eq!(config.parallel, false);
    }

    #[rstest]
    fn test_defaults_for_missing_keys() {
        let path = PathBuf::from("tests/data/scoring_minimal.toml");
        let config = ScoringConfig::try_from(path.as_path()).unwrap();

        assert_eq!(config, ScoringConfig::default().with_limit(3));
    }

    #[rstest]
    fn test_empty_document_is_default() {
        let config: ScoringConfig = toml::from_str("").unwrap();
        assert_eq!(config, ScoringConfig::default());
    }

    #[rstest]
    fn test_missing_file() {
        let path = PathBuf::from("tests/data/missing.toml");
        let result = ScoringConfig::try_from(path.as_path());
        assert!(matches!(result, Err(ScoringConfigError::Io(_))));
    }

    #[rstest]
    fn test_invalid_toml() {
        let result: Result<ScoringConfig, _> = toml::from_str("limit = \"ten\"");
        assert!(result.is_err());
    }
}
