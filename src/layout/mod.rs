//! Reading-order line reconstruction from positioned text fragments.
//!
//! Transcript renderers hand back text as positioned runs, not lines. This
//! module groups the runs of each page into physical lines by vertical
//! proximity, orders them left to right, and re-synthesizes the column
//! whitespace the renderer dropped, so the record extractors downstream see
//! the same line shapes the registrar printed.

pub mod line_builder;

pub use line_builder::reconstruct_lines;

use serde::{Deserialize, Serialize};

/// One positioned text run produced by the external renderer.
///
/// Immutable input to the line reconstructor; nothing else consumes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedFragment {
    /// Raw text of the run.
    pub text: String,
    /// Zero-based page index.
    pub page: usize,
    /// Left edge of the run.
    pub x: f32,
    /// Baseline (or top, depending on the renderer convention) of the run.
    pub y: f32,
    /// Rendered width of the run; `0.0` when the renderer does not report
    /// one, in which case it is estimated from the text length.
    pub width: f32,
    /// Font size of the run.
    pub font_size: f32,
}

impl PositionedFragment {
    /// Fragment with no reported width or font size.
    pub fn new(page: usize, x: f32, y: f32, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            page,
            x,
            y,
            width: 0.0,
            font_size: 0.0,
        }
    }

    /// Reported width, or an estimate from the character count when the
    /// renderer reported none.
    pub fn effective_width(&self, char_width: f32) -> f32 {
        if self.width > 0.0 {
            self.width
        } else {
            self.text.chars().count() as f32 * char_width
        }
    }
}

/// One reconstructed physical line.
///
/// The ordered sequence of lines across all pages forms the document text.
/// Created once during reconstruction; never mutated afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Zero-based page index.
    pub page: usize,
    /// Vertical position of the line on its page.
    pub y: f32,
    /// Assembled text, including synthetic column whitespace.
    pub text: String,
}
