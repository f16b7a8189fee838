//! Error types for CorgiArt Core

use thiserror::Error;

use crate::request::{MAX_TEXT_LEN, MIN_TEXT_LEN};

/// Result type for CorgiArt Core operations
pub type Result<T> = std::result::Result<T, ArtError>;

/// Input rejected before it reaches the glyph source.
///
/// The `Display` text is the message shown to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Text must be at least {min} characters long.")]
    TooShort { min: usize },

    #[error("Text must not exceed {max} characters.")]
    TooLong { max: usize },
}

impl ValidationError {
    pub fn too_short() -> Self {
        Self::TooShort { min: MIN_TEXT_LEN }
    }

    pub fn too_long() -> Self {
        Self::TooLong { max: MAX_TEXT_LEN }
    }
}

/// Core error types
#[derive(Error, Debug)]
pub enum ArtError {
    /// Input length out of bounds
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Glyph source failed or produced nothing printable
    #[error("Render error: {0}")]
    Render(String),

    /// Font name not known to the glyph source
    #[error("Unknown font: {0}")]
    UnknownFont(String),

    /// SVG export or download failed
    #[error("Export error: {0}")]
    Export(String),

    /// Clipboard write failed
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Font catalog could not be fetched or parsed
    #[error("Font catalog error: {0}")]
    Catalog(String),

    /// A generate request is already in flight
    #[error("A render is already in progress")]
    Busy,

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ArtError {
    /// Whether the failure happened while producing the art itself
    pub fn is_render_failure(&self) -> bool {
        matches!(self, Self::Render(_) | Self::UnknownFont(_))
    }
}
