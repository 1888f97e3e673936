//! Render error types.

use thiserror::Error;

/// Errors from the PDF backend.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The underlying PDF library failed.
    #[error("PDF backend error: {0}")]
    Backend(String),
}

impl RenderError {
    /// Create a backend error.
    #[must_use]
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}
