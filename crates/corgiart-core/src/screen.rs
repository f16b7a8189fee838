//! Screen presentation and copy-safe text
//!
//! The presenter does not touch any UI toolkit. It produces a
//! [`ScreenArtifact`]: the grid, whether it is colorized, and the controls
//! shown under it. Any front end can draw that; [`ScreenArtifact::markup`]
//! is the HTML rendering and [`ScreenArtifact::inner_text`] is what a user
//! selecting the whole output area would get, control captions included.
//!
//! ```text
//! ┌─────────────────────────────┐
//! │ ● ● ●                       │
//! │  _   _ _                    │
//! │ | | | (_)                   │
//! │ | |_| | |                   │
//! └─────────────────────────────┘
//!   [ Clear ] [ Copy ] [ Save as SVG ]
//! ```

use std::sync::Arc;

use crate::grid::Grid;
use crate::markup::push_escaped;

/// Buttons injected under rendered art
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Clear,
    Copy,
    SaveSvg,
}

impl Control {
    /// Controls in display order
    pub fn all() -> &'static [Control] {
        &[Control::Clear, Control::Copy, Control::SaveSvg]
    }

    pub fn caption(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::Copy => "Copy",
            Self::SaveSvg => "Save as SVG",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Clear => "button is-danger mr-2",
            Self::Copy => "button is-info mr-2",
            Self::SaveSvg => "button is-success",
        }
    }
}

/// Everything a front end needs to show a rendered grid
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenArtifact {
    grid: Arc<Grid>,
    controls: Vec<Control>,
}

impl ScreenArtifact {
    pub fn new(grid: Arc<Grid>) -> Self {
        Self {
            grid,
            controls: Control::all().to_vec(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn is_colorized(&self) -> bool {
        self.grid.is_colorized()
    }

    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    /// Art text followed by one line per control caption
    pub fn inner_text(&self) -> String {
        let mut text = self.grid.text();
        for control in &self.controls {
            text.push('\n');
            text.push_str(control.caption());
        }
        text
    }

    /// HTML fragment: a terminal-window frame around a `<pre>` of the art,
    /// then a centered button bar
    pub fn markup(&self) -> String {
        let mut html = String::new();
        html.push_str(
            "<section class=\"section\"><div class=\"container content\">\
             <div class=\"columns is-centered\"><div class=\"column is-full\">\
             <section id=\"terminal__bar\">\n\
             <div class=\"fakeButtons fakeClose\"></div>\n\
             <div class=\"fakeButtons fakeMinimize\"></div>\n\
             <div class=\"fakeButtons fakeZoom\"></div>\n\
             </section><pre>",
        );

        for (index, row) in self.grid.rows().iter().enumerate() {
            if index > 0 {
                html.push('\n');
            }
            for cell in row {
                match cell.color() {
                    Some(color) => {
                        html.push_str("<span style=\"color: ");
                        html.push_str(&color);
                        html.push_str("\">");
                        push_escaped(&mut html, cell.ch);
                        html.push_str("</span>");
                    }
                    None => push_escaped(&mut html, cell.ch),
                }
            }
        }

        html.push_str("</pre></div></div></div></section>\n<div class=\"has-text-centered\">");
        for control in &self.controls {
            html.push_str("<button class=\"");
            html.push_str(control.css_class());
            html.push_str("\"><span class=\"button-text\">");
            html.push_str(control.caption());
            html.push_str("</span></button>");
        }
        html.push_str("</div>");
        html
    }
}

/// Strip injected control captions from displayed text.
///
/// Only trailing lines made up entirely of captions are removed, so art
/// that happens to spell "Copy" survives untouched.
pub fn extract_plain_text(displayed: &str) -> String {
    let mut text = displayed;
    while let Some((head, last)) = text.rsplit_once('\n') {
        if !is_control_line(last) {
            break;
        }
        text = head;
    }
    text.to_string()
}

fn is_control_line(line: &str) -> bool {
    let mut rest = line.trim();
    if rest.is_empty() {
        return false;
    }
    while !rest.is_empty() {
        let Some(caption) = Control::all()
            .iter()
            .map(Control::caption)
            .find(|caption| rest.starts_with(caption))
        else {
            return false;
        };
        rest = rest[caption.len()..].trim_start();
    }
    true
}
