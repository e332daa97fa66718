//! Transcript extraction pipeline with clean abstraction layers.
//!
//! This module ties the whole extraction together:
//!
//! ```text
//! PositionedFragment[]            raw text
//!     ↓                               ↓
//! [Line Reconstruction]          [Line Split + Trim]
//!     ↓                               ↓
//! lines: Vec<String> ←────────────────┘
//!     ↓
//! [Layout Detectors] (stacked / merged / credited)
//!     ↓
//! CourseRecord[] + full-text extractors (pending, equivalences,
//! suspensions, status tally, program/curriculum/averages)
//!     ↓
//! ExtractionResult (serializable)
//! ```
//!
//! # Key Design Principles
//!
//! 1. **Two entry points, one scan**: positioned fragments and raw text both
//!    normalize into the same line sequence before any pattern runs, so every
//!    extractor sees identical input regardless of source format.
//!
//! 2. **Compiled-once patterns**: the pipeline owns a [`Patterns`] set built at
//!    construction. No pattern is compiled during extraction.
//!
//! 3. **Record-level extractors stay pure**: each extractor is a free function
//!    over `(&Patterns, input)`. The pipeline only sequences them and stitches
//!    the derived semester metrics into the summary.

use chrono::Local;

use crate::config::ExtractionConfig;
use crate::error::{Error, Result};
use crate::extractors::{
    extract_equivalences, extract_pending, extract_summary, extract_suspensions, scan_courses,
    tally_statuses,
};
use crate::layout::{reconstruct_lines, PositionedFragment};
use crate::patterns::Patterns;
use crate::records::ExtractionResult;
use crate::semester::{current_semester, semester_count};

/// End-to-end extraction over a transcript document.
///
/// Construction compiles the full pattern set once; the pipeline is then
/// immutable and can be shared across threads or reused for any number of
/// documents.
///
/// # Examples
///
/// ```
/// use sigaa_historico::pipeline::TranscriptPipeline;
///
/// let pipeline = TranscriptPipeline::new();
/// let result = pipeline.extract_text("2023.1\nCÁLCULO 1\nA\nAPR\nMAT0025\n90\n95.0\nMM")?;
/// assert_eq!(result.courses.len(), 1);
/// # Ok::<(), sigaa_historico::Error>(())
/// ```
pub struct TranscriptPipeline {
    config: ExtractionConfig,
    patterns: Patterns,
}

impl TranscriptPipeline {
    /// Create a pipeline with default configuration.
    pub fn new() -> Self {
        Self::with_config(ExtractionConfig::default())
    }

    /// Create a pipeline with custom line-reconstruction configuration.
    pub fn with_config(config: ExtractionConfig) -> Self {
        Self {
            config,
            patterns: Patterns::new(),
        }
    }

    /// The line-reconstruction configuration this pipeline was built with.
    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Extract records from positioned text fragments.
    ///
    /// Fragments are grouped into reading-order lines first (see
    /// [`reconstruct_lines`]), then scanned exactly like pre-assembled text.
    ///
    /// Returns [`Error::EmptyDocument`] when the fragments produce no lines
    /// and nothing was extracted.
    pub fn extract_fragments(&self, fragments: &[PositionedFragment]) -> Result<ExtractionResult> {
        log::debug!("Reconstructing lines from {} fragments", fragments.len());
        let lines: Vec<String> = reconstruct_lines(fragments, &self.config)
            .into_iter()
            .map(|line| line.text)
            .collect();
        let full_text = lines.join("\n");
        self.run(&lines, &full_text)
    }

    /// Extract records from pre-assembled text.
    ///
    /// Line-oriented extractors see the text split on newlines with
    /// surrounding whitespace trimmed and blank lines dropped; full-text
    /// extractors see the input untouched, so multi-line patterns can span
    /// the original line breaks.
    ///
    /// Returns [`Error::EmptyDocument`] when the text holds no non-blank
    /// lines and nothing was extracted.
    pub fn extract_text(&self, text: &str) -> Result<ExtractionResult> {
        let lines: Vec<String> = text
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();
        self.run(&lines, text)
    }

    fn run(&self, lines: &[String], full_text: &str) -> Result<ExtractionResult> {
        log::debug!("Scanning {} lines", lines.len());

        let scan = scan_courses(&self.patterns, lines);
        let pending = extract_pending(&self.patterns, full_text);
        let equivalences = extract_equivalences(&self.patterns, full_text);
        let suspensions = extract_suspensions(&self.patterns, lines);
        let status_tally = tally_statuses(&self.patterns, full_text);

        let mut summary = extract_summary(&self.patterns, full_text, lines);
        summary.current_semester =
            current_semester(&scan.records, &pending, Local::now().date_naive());
        summary.semester_count = semester_count(&scan.records, &pending);

        let result = ExtractionResult {
            courses: scan.records,
            pending,
            equivalences,
            suspensions,
            summary,
            status_tally,
            discarded: scan.discarded,
        };

        if lines.is_empty() && result.is_empty() {
            return Err(Error::EmptyDocument);
        }

        log::info!(
            "Extraction complete: {} courses, {} pending, {} equivalences, {} suspensions",
            result.courses.len(),
            result.pending.len(),
            result.equivalences.len(),
            result.suspensions.len()
        );
        Ok(result)
    }
}

impl Default for TranscriptPipeline {
    fn default() -> Self {
        Self::new()
    }
}
