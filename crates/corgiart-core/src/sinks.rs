//! Output boundaries: notifications, clipboard and downloads
//!
//! The pipeline talks to the outside world only through these traits.
//! Each has one implementation that works from a terminal.

use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use parking_lot::Mutex;

use crate::error::{ArtError, Result};

/// User-visible message channel
pub trait Notifier: Send + Sync {
    /// Show `message`, replacing whatever is currently shown
    fn notify(&self, message: &str);
}

/// Where a click on an open notification landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// On the notification content
    Inside,
    /// On the backdrop around it
    Outside,
}

/// Single-slot modal notification.
///
/// There is no queue: a new message replaces the open one.
#[derive(Debug, Default)]
pub struct NotificationSlot {
    current: Mutex<Option<String>>,
}

impl NotificationSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Message currently on screen
    pub fn current(&self) -> Option<String> {
        self.current.lock().clone()
    }

    pub fn is_open(&self) -> bool {
        self.current.lock().is_some()
    }

    /// Explicit close
    pub fn close(&self) {
        self.current.lock().take();
    }

    /// Clicking outside the notification dismisses it
    pub fn click(&self, target: ClickTarget) {
        if target == ClickTarget::Outside {
            self.close();
        }
    }
}

impl Notifier for NotificationSlot {
    fn notify(&self, message: &str) {
        *self.current.lock() = Some(message.to_string());
    }
}

/// System clipboard
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<()>;
}

/// Clipboard writes through the terminal with an OSC 52 escape sequence
pub struct Osc52Clipboard<W> {
    out: Mutex<W>,
}

impl<W: Write + Send> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl Osc52Clipboard<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

#[async_trait]
impl<W: Write + Send> Clipboard for Osc52Clipboard<W> {
    async fn write_text(&self, text: &str) -> Result<()> {
        let payload = STANDARD.encode(text);
        let mut out = self.out.lock();
        write!(out, "\x1b]52;c;{payload}\x07")
            .and_then(|_| out.flush())
            .map_err(|e| ArtError::Clipboard(e.to_string()))
    }
}

/// Client-side file save
pub trait DownloadSink: Send + Sync {
    fn save(&self, bytes: &[u8], file_name: &str, mime: &str) -> Result<()>;
}

/// Saves downloads into a directory.
///
/// Bytes go to a temporary file that is renamed into place once fully
/// written. On any failure the temporary file is removed when dropped.
#[derive(Debug, Clone)]
pub struct DirectoryDownloads {
    dir: PathBuf,
}

impl DirectoryDownloads {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Final location of `file_name`
    pub fn path_for(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }
}

impl DownloadSink for DirectoryDownloads {
    fn save(&self, bytes: &[u8], file_name: &str, mime: &str) -> Result<()> {
        if Path::new(file_name).file_name().and_then(|n| n.to_str()) != Some(file_name) {
            return Err(ArtError::Export(format!("invalid file name: {file_name}")));
        }

        std::fs::create_dir_all(&self.dir)?;
        let mut part = tempfile::Builder::new()
            .prefix(".corgiart-")
            .suffix(".part")
            .tempfile_in(&self.dir)?;
        part.write_all(bytes)?;
        part.flush()?;

        let target = self.path_for(file_name);
        part.persist(&target)
            .map_err(|e| ArtError::Export(e.error.to_string()))?;

        tracing::info!("Saved {} ({}, {} bytes)", target.display(), mime, bytes.len());
        Ok(())
    }
}
