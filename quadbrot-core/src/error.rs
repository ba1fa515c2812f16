use thiserror::Error;

/// Input-validation errors raised before any computation starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("degenerate viewport: {reason}")]
    DegenerateViewport { reason: String },

    #[error("invalid dimensions: {width}×{height} (both must be > 0)")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("invalid max iterations: {0} (must be >= 1)")]
    InvalidMaxIterations(u32),
}

impl CoreError {
    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateViewport {
            reason: reason.into(),
        }
    }
}
