//! Error taxonomy shared by every filter.

/// Convenience result type used across the crate.
pub type FilterResult<T> = Result<T, FilterError>;

/// Failures detected when a filter validates its inputs.
///
/// All checks run before any pixel is touched, so a filter either returns
/// a complete output buffer or one of these.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// Missing or malformed buffer: wrong byte length, wrong channel count,
    /// dimension overflow, or undecodable options.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A composite operand does not match the base image dimensions.
    #[error(
        "dimension mismatch: {operand} is {width}x{height}, expected {expected_width}x{expected_height}"
    )]
    DimensionMismatch {
        operand: &'static str,
        width: usize,
        height: usize,
        expected_width: usize,
        expected_height: usize,
    },
}

impl FilterError {
    /// Build a [`FilterError::InvalidInput`] value.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<ndarray::ShapeError> for FilterError {
    fn from(err: ndarray::ShapeError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

impl From<serde_json::Error> for FilterError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidInput(format!("options: {err}"))
    }
}
