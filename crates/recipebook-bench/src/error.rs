use recipebook_store::StoreError;

/// Errors produced by the benchmark harness.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// The requested test count is not an integer.
    #[error("invalid number of tests: {0:?}")]
    NotANumber(String),

    /// The requested test count is zero or negative.
    #[error("Number of tests must be a positive integer (got {0})")]
    NonPositive(i64),

    /// A benchmark store failed to persist.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Convenience alias used throughout the bench crate.
pub type BenchResult<T> = std::result::Result<T, BenchError>;
