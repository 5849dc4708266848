use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Sparse vector has {indices} indices but {values} values")]
    LengthMismatch { indices: usize, values: usize },

    #[error("Sparse vector contains duplicate index: {0}")]
    DuplicateIndex(u64),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerateError {
    #[error("Density must be within [0, 1], got {0}")]
    InvalidDensity(f64),
}
