//! SVG export
//!
//! The document reproduces the screen layout with the shared metrics:
//! one `<text>` per row anchored at the left padding, rows one line height
//! apart. Rainbow grids wrap every non-space character in a `<tspan>` with
//! the shared color string. Characters are never positioned one by one;
//! the monospace font keeps the columns aligned.

use std::borrow::Cow;
use std::fmt::Write as _;

use crate::grid::Grid;
use crate::markup::{escape, push_escaped, sanitize_file_stem};
use crate::metrics::{format_px, TextMetrics, DEFAULT_FONT_SIZE};

/// MIME type handed to download sinks
pub const SVG_MIME: &str = "image/svg+xml";

/// Prefix of exported file names
pub const DEFAULT_FILE_PREFIX: &str = "ascii-art";

/// Suffix that marks rainbow exports
pub const RAINBOW_SUFFIX: &str = "-rainbow";

/// Visual settings for exported documents
#[derive(Debug, Clone, PartialEq)]
pub struct SvgOptions {
    pub font_size: f64,
    pub font_family: String,
    /// Fill for uncolored text
    pub foreground: String,
    pub background: String,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            font_family: "'Courier New', monospace".to_string(),
            foreground: "#fdcb6e".to_string(),
            background: "#2c001e".to_string(),
        }
    }
}

/// Serializes grids to standalone SVG documents
#[derive(Debug, Clone, Default)]
pub struct SvgExporter {
    options: SvgOptions,
}

impl SvgExporter {
    pub fn new(options: SvgOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SvgOptions {
        &self.options
    }

    /// Export `grid` as UTF-8 SVG bytes. `title` is the original input text.
    pub fn export(&self, grid: &Grid, colorized: bool, title: &str) -> Vec<u8> {
        self.render(grid, colorized, title).into_bytes()
    }

    /// Export `grid` as an SVG string
    pub fn render(&self, grid: &Grid, colorized: bool, title: &str) -> String {
        let grid = if colorized && !grid.is_colorized() {
            Cow::Owned(grid.to_colorized())
        } else {
            Cow::Borrowed(grid)
        };

        let metrics = TextMetrics::new(self.options.font_size);
        let size = metrics.canvas_size(grid.row_count(), grid.max_column_count());
        let width = format_px(size.width);
        let height = format_px(size.height);
        let title = escape(title);

        let mut svg = String::new();
        svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        let _ = writeln!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
        );
        let _ = writeln!(svg, "  <title>ASCII Art: {title}</title>");
        let _ = writeln!(svg, "  <desc>Generated ASCII art from text: {title}</desc>");
        svg.push_str("  <defs>\n    <style>\n      .ascii-text {\n");
        let _ = writeln!(svg, "        font-family: {};", escape(&self.options.font_family));
        let _ = writeln!(svg, "        font-size: {}px;", format_px(self.options.font_size));
        let _ = writeln!(svg, "        fill: {};", escape(&self.options.foreground));
        svg.push_str("        white-space: pre;\n      }\n    </style>\n  </defs>\n");
        let _ = writeln!(
            svg,
            "  <rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
            escape(&self.options.background)
        );

        svg.push_str("  <g class=\"ascii-text\">\n");
        let x = format_px(metrics.row_x());
        for (index, row) in grid.rows().iter().enumerate() {
            let y = format_px(metrics.baseline_y(index));
            let _ = write!(svg, "    <text x=\"{x}\" y=\"{y}\" xml:space=\"preserve\">");
            for cell in row {
                match (colorized, cell.color()) {
                    (true, Some(color)) => {
                        let _ = write!(svg, "<tspan fill=\"{color}\">");
                        push_escaped(&mut svg, cell.ch);
                        svg.push_str("</tspan>");
                    }
                    _ => push_escaped(&mut svg, cell.ch),
                }
            }
            svg.push_str("</text>\n");
        }
        svg.push_str("  </g>\n</svg>\n");

        tracing::debug!(
            "Exported {}x{} grid as {} byte SVG",
            grid.max_column_count(),
            grid.row_count(),
            svg.len()
        );
        svg
    }
}

/// Download name for an export of `text`
pub fn export_file_name(prefix: &str, text: &str, colorized: bool) -> String {
    let suffix = if colorized { RAINBOW_SUFFIX } else { "" };
    format!("{prefix}-{}{suffix}.svg", sanitize_file_stem(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::speech_bubble;
    use crate::grid::{colorize, GlyphBlock};
    use crate::request::StyleMode;

    fn parse(svg: &str) -> roxmltree::Document<'_> {
        roxmltree::Document::parse(svg).expect("exported SVG must be well-formed")
    }

    fn text_rows(doc: &roxmltree::Document<'_>) -> Vec<String> {
        doc.descendants()
            .filter(|n| n.has_tag_name("text"))
            .map(|n| {
                n.descendants()
                    .filter(|d| d.is_text())
                    .filter_map(|d| d.text())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_plain_export_geometry() {
        let grid = Grid::plain(&["x".repeat(20), "x".repeat(3), "x".repeat(12)].join("\n"));
        let svg = SvgExporter::default().render(&grid, false, "xx");
        let doc = parse(&svg);
        let root = doc.root_element();

        assert_eq!(root.attribute("width"), Some("208"));
        assert_eq!(root.attribute("height"), Some("90.4"));
        assert_eq!(root.attribute("viewBox"), Some("0 0 208 90.4"));

        let ys: Vec<&str> = doc
            .descendants()
            .filter(|n| n.has_tag_name("text"))
            .filter_map(|n| n.attribute("y"))
            .collect();
        assert_eq!(ys, vec!["36.8", "53.6", "70.4"]);
        assert!(!svg.contains("<tspan"));
    }

    #[test]
    fn test_reserved_characters_escaped() {
        let grid = Grid::plain("<&>\n\"'");
        let svg = SvgExporter::default().render(&grid, true, "a<b & 'c\"");
        assert!(svg.contains("ASCII Art: a&lt;b &amp; &#39;c&quot;"));
        assert!(svg.contains("&lt;</tspan>"));

        let doc = parse(&svg);
        assert_eq!(text_rows(&doc), vec!["<&>", "\"'"]);
        let title = doc
            .descendants()
            .find(|n| n.has_tag_name("title"))
            .and_then(|n| n.text());
        assert_eq!(title, Some("ASCII Art: a<b & 'c\""));
    }

    #[test]
    fn test_control_characters_keep_document_well_formed() {
        let grid = Grid::plain("a\u{1}b\n\u{1b}[0m");
        for colorized in [false, true] {
            let svg = SvgExporter::default().render(&grid, colorized, "a\u{1}b");
            let doc = parse(&svg);
            assert_eq!(text_rows(&doc), vec!["a\u{FFFD}b", "\u{FFFD}[0m"]);
            let desc = doc
                .descendants()
                .find(|n| n.has_tag_name("desc"))
                .and_then(|n| n.text());
            assert_eq!(desc, Some("Generated ASCII art from text: a\u{FFFD}b"));
        }
    }

    #[test]
    fn test_rainbow_export_colors_each_character() {
        let grid = colorize("a b\ncd");
        let svg = SvgExporter::default().render(&grid, true, "ab");
        let doc = parse(&svg);

        let fills: Vec<&str> = doc
            .descendants()
            .filter(|n| n.has_tag_name("tspan"))
            .filter_map(|n| n.attribute("fill"))
            .collect();
        assert_eq!(
            fills,
            vec![
                "hsl(0, 100%, 60%)",
                "hsl(6, 100%, 60%)",
                "hsl(10, 100%, 60%)",
                "hsl(13, 100%, 60%)",
            ]
        );
        // Characters keep their order and spacing
        assert_eq!(text_rows(&doc), vec!["a b", "cd"]);
    }

    #[test]
    fn test_colorized_flag_overrides_plain_grid() {
        let plain = Grid::plain("ab");
        let exporter = SvgExporter::default();
        assert_eq!(
            exporter.render(&plain, true, "ab"),
            exporter.render(&colorize("ab"), true, "ab")
        );
        assert!(!exporter.render(&colorize("ab"), false, "ab").contains("<tspan"));
    }

    #[test]
    fn test_speech_bubble_export() {
        let art = speech_bubble("hi");
        let grid = Grid::build(&GlyphBlock::new(&art, StyleMode::SpeechBubble), false).unwrap();
        let svg = SvgExporter::default().render(&grid, false, "hi");
        let doc = parse(&svg);

        let width: f64 = doc.root_element().attribute("width").unwrap().parse().unwrap();
        let metrics = TextMetrics::default();
        assert!(width > "hi".len() as f64 * metrics.char_width + 40.0);
        assert_eq!(text_rows(&doc)[1], "  < hi >");
    }

    #[test]
    fn test_custom_options() {
        let exporter = SvgExporter::new(SvgOptions {
            font_size: 10.0,
            background: "#000".to_string(),
            ..SvgOptions::default()
        });
        let svg = exporter.render(&Grid::plain("abc"), false, "abc");
        let doc = parse(&svg);
        assert_eq!(doc.root_element().attribute("width"), Some("58"));
        assert!(svg.contains("font-size: 10px;"));
        assert!(svg.contains("fill=\"#000\""));
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(
            export_file_name(DEFAULT_FILE_PREFIX, "Hi there!", false),
            "ascii-art-Hi-there-.svg"
        );
        assert_eq!(
            export_file_name(DEFAULT_FILE_PREFIX, "Hi there!", true),
            "ascii-art-Hi-there--rainbow.svg"
        );
    }
}
