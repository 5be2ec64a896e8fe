// Imports
use thiserror::Error;

/// Errors of the overlay engine.
#[derive(Debug, Error)]
pub enum OverlayError {
    /// The text content or its layout can not produce valid geometry.
    #[error("invalid overlay content: {0}")]
    InvalidContent(String),
    /// More action icons were requested than the row supports.
    #[error("tab count {0} is not supported, expected a value between 0 and 3")]
    InvalidTabCount(u32),
    /// The value does not name a corner.
    #[error("corner location try_from::<u32>() for value {0} failed")]
    InvalidCornerLocation(u32),
}
