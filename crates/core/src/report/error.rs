//! Report generation error types.

use thiserror::Error;

use crate::render::RenderError;
use crate::storage::StorageError;

/// Errors that abort a report request.
///
/// Any failure during composition, rendering, or artifact storage fails
/// the whole operation; there is no partial-success state. The only
/// locally recovered failure is the optional logo asset, which never
/// reaches this type.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The PDF backend failed to render the block sequence.
    #[error("document rendering failed: {0}")]
    Render(#[from] RenderError),

    /// The output artifact could not be written.
    #[error("artifact storage failed: {0}")]
    Storage(#[from] StorageError),
}
