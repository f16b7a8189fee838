//! Shared color and geometry constants
//!
//! Both the screen presenter and the SVG exporter read every hue, color
//! string and size from here. Neither renderer derives its own.

use palette::{FromColor, Hsl, Srgb};

/// Export font size in px
pub const DEFAULT_FONT_SIZE: f64 = 14.0;

/// Line height as a multiple of the font size
pub const LINE_HEIGHT_RATIO: f64 = 1.2;

/// Monospace advance as a multiple of the font size.
///
/// Fixed approximation; the exporter has no way to measure text.
pub const CHAR_WIDTH_RATIO: f64 = 0.6;

/// Space around the art, in px
pub const PADDING: f64 = 20.0;

/// HSL saturation of rainbow colors, in percent
pub const SATURATION: u8 = 100;

/// HSL lightness of rainbow colors, in percent
pub const LIGHTNESS: u8 = 60;

/// Rainbow hue for the character at `row`, `col` (both 0-based)
pub fn hue_at(row: usize, col: usize) -> u16 {
    ((row * 10 + col * 3) % 360) as u16
}

/// CSS color string for `hue`, shared by markup and SVG
pub fn hue_color(hue: u16) -> String {
    format!("hsl({hue}, {SATURATION}%, {LIGHTNESS}%)")
}

/// sRGB equivalent of [`hue_color`], for targets without CSS colors
pub fn hue_rgb(hue: u16) -> (u8, u8, u8) {
    let hsl: Hsl = Hsl::new(
        f32::from(hue),
        f32::from(SATURATION) / 100.0,
        f32::from(LIGHTNESS) / 100.0,
    );
    let rgb: Srgb = Srgb::from_color(hsl);
    let rgb: Srgb<u8> = rgb.into_format();
    (rgb.red, rgb.green, rgb.blue)
}

/// Text metrics derived from one font size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    pub font_size: f64,
    pub line_height: f64,
    pub char_width: f64,
}

impl TextMetrics {
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            line_height: font_size * LINE_HEIGHT_RATIO,
            char_width: font_size * CHAR_WIDTH_RATIO,
        }
    }

    /// Baseline of row `row` (0-based)
    pub fn baseline_y(&self, row: usize) -> f64 {
        PADDING + (row + 1) as f64 * self.line_height
    }

    /// Left edge shared by every row
    pub fn row_x(&self) -> f64 {
        PADDING
    }

    pub fn canvas_size(&self, rows: usize, max_columns: usize) -> CanvasSize {
        CanvasSize {
            width: max_columns as f64 * self.char_width + PADDING * 2.0,
            height: rows as f64 * self.line_height + PADDING * 2.0,
        }
    }
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_SIZE)
    }
}

/// Canvas dimensions in px
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

/// Format a px value with at most two decimals and no trailing zeros
pub fn format_px(value: f64) -> String {
    let text = format!("{:.2}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_hue_formula() {
        assert_eq!(hue_at(0, 0), 0);
        assert_eq!(hue_at(2, 5), 35);
        assert_eq!(hue_at(10, 40), 220);
        assert_eq!(hue_at(36, 0), 0);
        assert_eq!(hue_at(0, 121), 3);
    }

    #[test]
    fn test_hue_color_string() {
        assert_eq!(hue_color(35), "hsl(35, 100%, 60%)");
    }

    #[test]
    fn test_hue_rgb() {
        assert_eq!(hue_rgb(0), (255, 51, 51));
        assert_eq!(hue_rgb(120), (51, 255, 51));
        assert_eq!(hue_rgb(240), (51, 51, 255));
    }

    #[test]
    fn test_canvas_size() {
        let size = TextMetrics::default().canvas_size(3, 20);
        assert!(close(size.width, 208.0));
        assert!(close(size.height, 90.4));
    }

    #[test]
    fn test_empty_canvas_is_padding_only() {
        let size = TextMetrics::new(10.0).canvas_size(0, 0);
        assert!(close(size.width, 40.0));
        assert!(close(size.height, 40.0));
    }

    #[test]
    fn test_row_geometry() {
        let m = TextMetrics::default();
        assert!(close(m.row_x(), 20.0));
        assert!(close(m.baseline_y(0), 36.8));
        assert!(close(m.baseline_y(2), 70.4));
    }

    #[test]
    fn test_format_px() {
        assert_eq!(format_px(208.0), "208");
        assert_eq!(format_px(3.0 * 16.8 + 40.0), "90.4");
        assert_eq!(format_px(36.8), "36.8");
        assert_eq!(format_px(8.4 * 7.0), "58.8");
        assert_eq!(format_px(0.0), "0");
    }
}
