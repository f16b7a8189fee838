//! The character grid
//!
//! One grid is built per request and never mutated afterwards. The screen
//! presenter and the SVG exporter are both views over it.

use crate::error::{ArtError, Result};
use crate::metrics::{hue_at, hue_color, CanvasSize, TextMetrics};
use crate::request::StyleMode;

/// One character of art and its position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    /// Row (0-indexed)
    pub row: usize,
    /// Column within the row (0-indexed)
    pub col: usize,
    /// Rainbow hue; always `None` for spaces and in plain grids
    pub hue: Option<u16>,
}

impl Cell {
    fn new(ch: char, row: usize, col: usize, colorized: bool) -> Self {
        let hue = (colorized && ch != ' ').then(|| hue_at(row, col));
        Self { ch, row, col, hue }
    }

    /// Shared CSS color for this cell, if it has one
    pub fn color(&self) -> Option<String> {
        self.hue.map(hue_color)
    }
}

/// Raw multi-line output of a glyph source
#[derive(Debug, Clone, Copy)]
pub struct GlyphBlock<'a> {
    raw: &'a str,
    style: StyleMode,
}

impl<'a> GlyphBlock<'a> {
    pub fn new(raw: &'a str, style: StyleMode) -> Self {
        Self { raw, style }
    }

    /// Lines that make up the grid.
    ///
    /// Glyph-font output loses its leading and trailing blank lines;
    /// speech bubbles keep every line as drawn.
    pub fn lines(&self) -> Vec<&'a str> {
        let lines: Vec<&'a str> = split_lines(self.raw).collect();
        match self.style {
            StyleMode::SpeechBubble => lines,
            StyleMode::GlyphFont => {
                let is_blank = |line: &&str| line.trim().is_empty();
                let start = lines.iter().position(|l| !is_blank(l)).unwrap_or(lines.len());
                let end = lines.iter().rposition(|l| !is_blank(l)).map_or(start, |i| i + 1);
                lines[start..end].to_vec()
            }
        }
    }

    /// True when there is nothing printable to draw
    pub fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }
}

fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Immutable grid of cells with ragged rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
    colorized: bool,
}

impl Grid {
    /// Build a grid from a glyph block.
    ///
    /// Fails without producing anything when the block is blank.
    pub fn build(block: &GlyphBlock<'_>, colorized: bool) -> Result<Self> {
        if block.is_blank() {
            return Err(ArtError::Render("glyph source returned no art".to_string()));
        }
        Ok(Self::from_lines(block.lines(), colorized))
    }

    fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>, colorized: bool) -> Self {
        let rows = lines
            .into_iter()
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .map(|(col, ch)| Cell::new(ch, row, col, colorized))
                    .collect()
            })
            .collect();
        Self { rows, colorized }
    }

    /// Uncolored grid of `text`, every line kept
    pub fn plain(text: &str) -> Self {
        Self::from_lines(split_lines(text), false)
    }

    /// Same characters with rainbow hues filled in
    pub fn to_colorized(&self) -> Self {
        let rows = self
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| Cell::new(cell.ch, cell.row, cell.col, true))
                    .collect()
            })
            .collect();
        Self {
            rows,
            colorized: true,
        }
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    pub fn is_colorized(&self) -> bool {
        self.colorized
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of the longest row, in characters
    pub fn max_column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Characters of one row
    pub fn line(&self, row: usize) -> Option<String> {
        self.rows
            .get(row)
            .map(|cells| cells.iter().map(|c| c.ch).collect())
    }

    /// All rows joined with `\n`
    pub fn text(&self) -> String {
        self.rows
            .iter()
            .map(|cells| cells.iter().map(|c| c.ch).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn canvas_size(&self, font_size: f64) -> CanvasSize {
        TextMetrics::new(font_size).canvas_size(self.row_count(), self.max_column_count())
    }
}

/// Rainbow-colorize a multi-line string.
///
/// Pure: the same text always yields the same hues.
pub fn colorize(text: &str) -> Grid {
    Grid::from_lines(split_lines(text), true)
}
