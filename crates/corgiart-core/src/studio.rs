//! The art pipeline
//!
//! [`ArtStudio`] runs one request at a time: validate, ask the glyph
//! source, build the grid, then hand the result to the output area. Copy
//! and export work on whatever the output area currently shows.
//!
//! While a render is in flight further renders are refused with
//! [`ArtError::Busy`]; the pending one is left alone. Clearing while a
//! render is in flight discards its result.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{ArtError, Result, ValidationError};
use crate::glyph::{speech_bubble, GlyphSource};
use crate::grid::{GlyphBlock, Grid};
use crate::request::{ArtRequest, StyleMode, DEFAULT_FONT};
use crate::screen::{extract_plain_text, ScreenArtifact};
use crate::sinks::{Clipboard, DownloadSink, Notifier};
use crate::svg::{export_file_name, SvgExporter, DEFAULT_FILE_PREFIX, SVG_MIME};

/// Shown in the output area when rendering fails
pub const RENDER_FAILED: &str = "Error: Failed to generate ASCII art";
pub const COPY_SUCCEEDED: &str = "ASCII art copied to clipboard!";
pub const COPY_FAILED: &str = "Failed to copy ASCII art to clipboard";
pub const EXPORT_SUCCEEDED: &str = "ASCII art saved as SVG!";
pub const EXPORT_FAILED: &str = "Failed to save ASCII art as SVG";

/// Input controls as the user left them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtForm {
    pub text: String,
    pub style: StyleMode,
    pub font: String,
    pub rainbow: bool,
}

impl Default for ArtForm {
    fn default() -> Self {
        Self {
            text: String::new(),
            style: StyleMode::GlyphFont,
            font: DEFAULT_FONT.to_string(),
            rainbow: false,
        }
    }
}

impl ArtForm {
    /// Validate the form into a request
    pub fn submit(&self) -> std::result::Result<ArtRequest, ValidationError> {
        ArtRequest::new(&self.text, self.style, self.font.clone(), self.rainbow)
    }

    /// Empty the text and go back to the default font
    pub fn clear(&mut self) {
        self.text.clear();
        self.font = DEFAULT_FONT.to_string();
    }
}

/// A finished render: the request and the grid built for it
#[derive(Debug, Clone, PartialEq)]
pub struct Rendering {
    request: ArtRequest,
    grid: Arc<Grid>,
}

impl Rendering {
    pub fn request(&self) -> &ArtRequest {
        &self.request
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Screen view of the grid
    pub fn screen(&self) -> ScreenArtifact {
        ScreenArtifact::new(Arc::clone(&self.grid))
    }

    /// Copy-safe text of the art
    pub fn plain_text(&self) -> String {
        extract_plain_text(&self.screen().inner_text())
    }
}

/// What the output area shows
#[derive(Debug, Clone, PartialEq, Default)]
pub enum OutputArea {
    #[default]
    Hidden,
    /// A render is in flight
    Pending,
    Art(Rendering),
    /// Inline failure message; no controls are offered
    Error(String),
}

/// Marks a render as in flight for as long as it lives
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| Self(flag))
            .map_err(|_| ArtError::Busy)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Render, copy and export pipeline
pub struct ArtStudio {
    source: Arc<dyn GlyphSource>,
    notifier: Arc<dyn Notifier>,
    exporter: SvgExporter,
    file_prefix: String,
    output: RwLock<OutputArea>,
    in_flight: AtomicBool,
    /// Bumped by `clear`; a render started before the bump is stale
    generation: AtomicU64,
}

impl ArtStudio {
    pub fn new(source: Arc<dyn GlyphSource>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            source,
            notifier,
            exporter: SvgExporter::default(),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            output: RwLock::new(OutputArea::Hidden),
            in_flight: AtomicBool::new(false),
            generation: AtomicU64::new(0),
        }
    }

    pub fn with_exporter(mut self, exporter: SvgExporter) -> Self {
        self.exporter = exporter;
        self
    }

    pub fn with_file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.file_prefix = prefix.into();
        self
    }

    pub fn output(&self) -> OutputArea {
        self.output.read().clone()
    }

    /// The art on screen, if any
    pub fn current(&self) -> Option<Rendering> {
        match &*self.output.read() {
            OutputArea::Art(rendering) => Some(rendering.clone()),
            _ => None,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Validate the form and render it.
    ///
    /// Validation failures are notified and leave the output area as it was.
    pub async fn submit(&self, form: &ArtForm) -> Result<Rendering> {
        let request = form.submit().map_err(|e| {
            self.notifier.notify(&e.to_string());
            ArtError::from(e)
        })?;
        self.generate(request).await
    }

    /// Render an already validated request
    pub async fn generate(&self, request: ArtRequest) -> Result<Rendering> {
        let _in_flight = InFlight::acquire(&self.in_flight)?;
        let generation = self.generation.load(Ordering::Acquire);
        *self.output.write() = OutputArea::Pending;

        tracing::debug!(
            "Generating {} art for {:?} (font {}, rainbow {})",
            request.style.label(),
            request.text(),
            request.font,
            request.rainbow
        );

        let raw = match request.style {
            StyleMode::GlyphFont => self.source.render(request.text(), &request.font).await,
            StyleMode::SpeechBubble => Ok(speech_bubble(request.text())),
        };
        let grid = raw.and_then(|raw| {
            Grid::build(&GlyphBlock::new(&raw, request.style), request.rainbow)
        });

        let mut output = self.output.write();
        let stale = self.generation.load(Ordering::Acquire) != generation;
        if stale {
            tracing::debug!("Output cleared during render, discarding result");
        }

        match grid {
            Ok(grid) => {
                let rendering = Rendering {
                    request,
                    grid: Arc::new(grid),
                };
                if !stale {
                    *output = OutputArea::Art(rendering.clone());
                }
                Ok(rendering)
            }
            Err(e) => {
                tracing::warn!("Error generating ASCII art with {}: {}", self.source.name(), e);
                if !stale {
                    *output = OutputArea::Error(RENDER_FAILED.to_string());
                }
                Err(e)
            }
        }
    }

    /// Hide the output and reset the form
    pub fn clear(&self, form: &mut ArtForm) {
        let mut output = self.output.write();
        self.generation.fetch_add(1, Ordering::AcqRel);
        *output = OutputArea::Hidden;
        drop(output);
        form.clear();
    }

    /// Copy the art on screen as plain text
    pub async fn copy(&self, clipboard: &dyn Clipboard) -> Result<()> {
        let text = {
            let output = self.output.read();
            match &*output {
                OutputArea::Art(rendering) => rendering.plain_text(),
                _ => return Err(ArtError::Clipboard("no art to copy".to_string())),
            }
        };

        match clipboard.write_text(&text).await {
            Ok(()) => {
                tracing::info!("Copied {} bytes of ASCII art", text.len());
                self.notifier.notify(COPY_SUCCEEDED);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Error copying to clipboard: {}", e);
                self.notifier.notify(COPY_FAILED);
                Err(e)
            }
        }
    }

    /// Export the art on screen as SVG. Returns the file name used.
    pub fn export_svg(&self, sink: &dyn DownloadSink) -> Result<String> {
        let rendering = self
            .current()
            .ok_or_else(|| ArtError::Export("no art to export".to_string()))?;
        self.export_rendering(&rendering, sink)
    }

    /// Export a specific rendering as SVG
    pub fn export_rendering(&self, rendering: &Rendering, sink: &dyn DownloadSink) -> Result<String> {
        let text = rendering.request().text();
        let colorized = rendering.grid().is_colorized();
        let bytes = self.exporter.export(rendering.grid(), colorized, text);
        let file_name = export_file_name(&self.file_prefix, text, colorized);

        match sink.save(&bytes, &file_name, SVG_MIME) {
            Ok(()) => {
                self.notifier.notify(EXPORT_SUCCEEDED);
                Ok(file_name)
            }
            Err(e) => {
                tracing::warn!("Error saving {}: {}", file_name, e);
                self.notifier.notify(EXPORT_FAILED);
                Err(match e {
                    ArtError::Export(_) => e,
                    other => ArtError::Export(other.to_string()),
                })
            }
        }
    }
}
