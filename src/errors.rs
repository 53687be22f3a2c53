//! Domain error types for dataset loading and preparation.

use thiserror::Error;

/// Errors raised while loading, parsing, or preparing the dataset.
///
/// Load and preparation failures are fatal to the session: the server binary
/// surfaces them and exits before any chart data is served.
#[derive(Debug, Error)]
pub enum DataError {
    /// The dataset file is missing or unreadable.
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// The file could not be parsed as tabular data, or required columns are
    /// absent.
    #[error("invalid dataset format: {0}")]
    Format(String),

    /// A feature column has zero variance, so standardization is undefined.
    /// Only raised in strict mode; the default policy maps the column to
    /// zeros and logs a warning.
    #[error("column '{0}' has zero variance; standardization is degenerate")]
    DegenerateColumn(String),
}
