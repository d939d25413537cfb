//! Error types for the xgrid-tools workspace.

use thiserror::Error;

/// Result type alias using XgridError.
pub type XgridResult<T> = Result<T, XgridError>;

/// Primary error type for weight-conversion operations.
#[derive(Debug, Error)]
pub enum XgridError {
    /// A required NetCDF variable is absent from an input file.
    #[error("missing required variable '{var}' in {path}")]
    MissingVariable { var: String, path: String },

    /// Input file content is structurally wrong.
    #[error("invalid input data: {0}")]
    InvalidFormat(String),

    /// A 1-based weight-file index falls outside the grid it refers to.
    #[error("{field} index {value} outside valid range 1..={max}")]
    IndexOutOfRange {
        field: &'static str,
        value: i64,
        max: usize,
    },

    /// Supplied grid dimensions disagree with what a file contains.
    #[error("shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: String, actual: String },

    /// The declared input weight convention is not one this tool can rescale.
    #[error("unsupported weight normalization '{0}', expected 'destination-fraction'")]
    UnsupportedNormalization(String),

    /// Underlying NetCDF library failure.
    #[error("NetCDF error: {0}")]
    NetCdf(String),

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl XgridError {
    /// Create a MissingVariable error.
    pub fn missing_variable(var: impl Into<String>, path: impl Into<String>) -> Self {
        Self::MissingVariable {
            var: var.into(),
            path: path.into(),
        }
    }

    /// Create an InvalidFormat error.
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::InvalidFormat(msg.into())
    }

    /// Create a ShapeMismatch error.
    pub fn shape_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::ShapeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Wrap a NetCDF library error.
    pub fn netcdf(err: impl std::fmt::Display) -> Self {
        Self::NetCdf(err.to_string())
    }
}
