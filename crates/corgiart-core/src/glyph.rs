//! Glyph sources
//!
//! A glyph source turns `(text, font)` into a multi-line block of art.
//! The pipeline only sees the trait, so an external figlet engine can be
//! dropped in next to the bundled one.
//!
//! The speech-bubble style needs no engine at all: it is a fixed cow
//! template with the text interpolated into a bubble sized to fit it.

use async_trait::async_trait;

use crate::error::{ArtError, Result};
use crate::fonts::{all_fonts, find_font};

/// Anything that can draw text in a named font
#[async_trait]
pub trait GlyphSource: Send + Sync {
    /// Source name, for logs
    fn name(&self) -> &str;

    /// Render `text` in `font`. The result may have ragged lines.
    async fn render(&self, text: &str, font: &str) -> Result<String>;

    /// Fonts this source can draw, when it knows them up front
    fn fonts(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Glyph source backed by the bundled fonts
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinGlyphSource;

#[async_trait]
impl GlyphSource for BuiltinGlyphSource {
    fn name(&self) -> &str {
        "builtin"
    }

    async fn render(&self, text: &str, font: &str) -> Result<String> {
        let font = find_font(font).ok_or_else(|| ArtError::UnknownFont(font.to_string()))?;
        tracing::debug!("Rendering {} chars with builtin font {}", text.len(), font.name);
        Ok(font.render(text))
    }

    fn fonts(&self) -> Vec<String> {
        all_fonts().iter().map(|f| f.name.to_string()).collect()
    }
}

/// Indent applied to every bubble line
const BUBBLE_INDENT: &str = "  ";

const COW: [&str; 5] = [
    r"         \   ^__^",
    r"          \  (oo)\_______",
    r"             (__)\       )\/\",
    r"                 ||----w |",
    r"                 ||     ||",
];

/// Number of lines in a speech-bubble render
pub const SPEECH_BUBBLE_LINES: usize = 3 + COW.len();

/// Draw `text` in a speech bubble above a cow.
///
/// The bubble border spans the text plus one space of padding on each
/// side, so it always lines up with `< text >` below it. Line breaks and
/// other control characters become spaces so the bubble stays one line.
pub fn speech_bubble(text: &str) -> String {
    let text: String = text
        .chars()
        .map(|ch| if ch.is_control() { ' ' } else { ch })
        .collect();
    let border = text.chars().count() + 2;

    let mut lines = Vec::with_capacity(SPEECH_BUBBLE_LINES);
    lines.push(format!("{BUBBLE_INDENT} {}", "_".repeat(border)));
    lines.push(format!("{BUBBLE_INDENT}< {text} >"));
    lines.push(format!("{BUBBLE_INDENT} {}", "-".repeat(border)));
    lines.extend(COW.iter().map(|line| line.to_string()));

    lines.join("\n")
}
