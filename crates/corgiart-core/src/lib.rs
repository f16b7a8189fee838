//! # CorgiArt Core
//!
//! The rendering pipeline behind CorgiArt.
//!
//! This crate provides:
//! - Input validation and art requests
//! - Block-letter fonts and speech-bubble art
//! - Rainbow colorization on a shared character grid
//! - Screen markup and copy-safe plain text
//! - SVG export with the same geometry as the screen
//!
//! ```text
//!    ∩＿∩
//!   (・ω・)  CorgiArt Core
//!   /　 つ   Block letters, every color!
//! ```

pub mod catalog;
pub mod error;
pub mod fonts;
pub mod glyph;
pub mod grid;
pub mod markup;
pub mod metrics;
pub mod request;
pub mod screen;
pub mod sinks;
pub mod studio;
pub mod svg;

pub use catalog::{fetch_or_empty, BuiltinCatalog, FontCatalog, RemoteCatalog};
pub use error::{ArtError, Result, ValidationError};
pub use fonts::{all_fonts, find_font, BlockFont};
pub use glyph::{speech_bubble, BuiltinGlyphSource, GlyphSource};
pub use grid::{colorize, Cell, GlyphBlock, Grid};
pub use metrics::{hue_at, hue_color, hue_rgb, CanvasSize, TextMetrics};
pub use request::{ArtRequest, StyleMode, DEFAULT_FONT};
pub use screen::{extract_plain_text, Control, ScreenArtifact};
pub use sinks::{
    ClickTarget, Clipboard, DirectoryDownloads, DownloadSink, NotificationSlot, Notifier,
    Osc52Clipboard,
};
pub use studio::{ArtForm, ArtStudio, OutputArea, Rendering};
pub use svg::{export_file_name, SvgExporter, SvgOptions};

/// Core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the core engine
pub fn init() -> Result<()> {
    tracing::info!("Initializing CorgiArt Core v{}", VERSION);
    Ok(())
}
