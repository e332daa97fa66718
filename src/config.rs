//! Extraction configuration.
//!
//! One small knob set for reconstructing reading-order lines from positioned
//! fragments. Defaults reproduce the renderer the transcript corpus was
//! calibrated against (PDF.js-style baselines: y grows upward, gaps measured
//! in text-space units).

/// Vertical axis convention of the fragment coordinates.
///
/// PDF baselines grow upward (`BottomUp`): within a page, a *larger* y means
/// an *earlier* line. Renderers that pre-flip coordinates report `TopDown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YAxis {
    /// y grows downward; smaller y is earlier in reading order.
    TopDown,
    /// y grows upward (PDF baseline convention); larger y is earlier.
    #[default]
    BottomUp,
}

/// Configuration for line reconstruction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtractionConfig {
    /// Fragments whose y coordinates differ by no more than this belong to
    /// the same line.
    pub line_tolerance: f32,

    /// Horizontal gap beyond which synthetic spaces are inserted between
    /// neighboring fragments on a line.
    pub gap_threshold: f32,

    /// Estimated width of one character, used both to turn a gap into a
    /// space count and to estimate fragment width when the renderer reports
    /// none.
    pub char_width: f32,

    /// Cap on synthetic spaces inserted for a single gap.
    pub max_gap_spaces: usize,

    /// Vertical axis convention of the incoming fragments.
    pub y_axis: YAxis,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            line_tolerance: 3.0,
            gap_threshold: 10.0,
            char_width: 6.0,
            max_gap_spaces: 10,
            y_axis: YAxis::BottomUp,
        }
    }
}

impl ExtractionConfig {
    /// Configuration for renderers that report top-origin coordinates
    /// (y grows downward).
    pub fn top_down() -> Self {
        Self {
            y_axis: YAxis::TopDown,
            ..Self::default()
        }
    }

    /// Configuration with a wider line tolerance for renderers that jitter
    /// baselines within a visual line (seen with OCR-derived positions).
    pub fn loose_lines() -> Self {
        Self {
            line_tolerance: 5.0,
            ..Self::default()
        }
    }
}
