//! Report export error types.

use thiserror::Error;

/// Message shown when the rendering backend cannot be used.
pub const RENDERER_UNAVAILABLE_MESSAGE: &str =
    "PDF library is still loading. Please wait a moment and try again.";

/// Message shown for any failure during composition or encoding.
pub const EXPORT_FAILED_MESSAGE: &str = "PDF generation failed. Please try again.";

/// Errors that abort an export. No partial document is ever returned.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The rendering backend is not ready; checked before any work starts.
    #[error("renderer unavailable")]
    RendererUnavailable,

    /// The laid-out document could not be encoded.
    #[error("encoding failed: {0}")]
    Encoding(String),
}

impl ExportError {
    /// The single message surfaced to the user.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::RendererUnavailable => RENDERER_UNAVAILABLE_MESSAGE,
            Self::Encoding(_) => EXPORT_FAILED_MESSAGE,
        }
    }
}

impl From<ExportError> for zakah_shared::AppError {
    fn from(err: ExportError) -> Self {
        let message = err.user_message().to_string();
        match err {
            ExportError::RendererUnavailable => Self::Unavailable(message),
            ExportError::Encoding(_) => Self::Failed(message),
        }
    }
}
