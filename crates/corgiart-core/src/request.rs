//! Art requests and input validation
//!
//! A request is built once per user submit and flows through the whole
//! pipeline by value. Nothing downstream reads ambient state.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Fewest characters accepted after trimming
pub const MIN_TEXT_LEN: usize = 2;

/// Most characters accepted after trimming
pub const MAX_TEXT_LEN: usize = 40;

/// Font selected when nothing else is chosen, and after a clear
pub const DEFAULT_FONT: &str = "Standard";

/// How the text is turned into art
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleMode {
    /// Block letters from a named font
    #[default]
    GlyphFont,
    /// Text inside a speech bubble spoken by a cow
    SpeechBubble,
}

impl StyleMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::GlyphFont => "Figlet",
            Self::SpeechBubble => "Cowsay",
        }
    }
}

/// A validated request to render art
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtRequest {
    text: String,
    pub style: StyleMode,
    /// Only consulted for [`StyleMode::GlyphFont`]
    pub font: String,
    /// Colorize every glyph character
    pub rainbow: bool,
}

impl ArtRequest {
    /// Validate `text` and build a request.
    ///
    /// The stored text is the trimmed input.
    pub fn new(
        text: &str,
        style: StyleMode,
        font: impl Into<String>,
        rainbow: bool,
    ) -> Result<Self, ValidationError> {
        let text = validate_text(text)?;
        Ok(Self {
            text: text.to_string(),
            style,
            font: font.into(),
            rainbow,
        })
    }

    /// Glyph-font request with the default font and no colors
    pub fn glyph(text: &str) -> Result<Self, ValidationError> {
        Self::new(text, StyleMode::GlyphFont, DEFAULT_FONT, false)
    }

    /// Speech-bubble request with no colors
    pub fn bubble(text: &str) -> Result<Self, ValidationError> {
        Self::new(text, StyleMode::SpeechBubble, DEFAULT_FONT, false)
    }

    pub fn with_rainbow(mut self, rainbow: bool) -> Self {
        self.rainbow = rainbow;
        self
    }

    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = font.into();
        self
    }

    /// The trimmed input text
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Trim `text` and check its length in characters.
pub fn validate_text(text: &str) -> Result<&str, ValidationError> {
    let trimmed = text.trim();
    let len = trimmed.chars().count();

    if len < MIN_TEXT_LEN {
        Err(ValidationError::too_short())
    } else if len > MAX_TEXT_LEN {
        Err(ValidationError::too_long())
    } else {
        Ok(trimmed)
    }
}
