//! Summary-field detectors: program name, curriculum matrix, performance
//! index, weighted average.
//!
//! Each field tries its candidate patterns in a fixed priority order — the
//! most specific structured layout first, then a looser generic pattern,
//! then (for the curriculum matrix) a line-scan fallback that locates a
//! labeled line and inspects the following line when the label line itself
//! lacks the value. The first match wins; when nothing matches the field
//! stays absent, which is a valid outcome, not an error.

use crate::patterns::Patterns;
use crate::records::{DocumentSummary, Period};
use crate::text::{fold_ascii_upper, parse_decimal};

/// Runs every summary detector over the document.
///
/// `text` is the full document text (labeled block patterns need to see line
/// breaks); `lines` is the reconstructed line sequence used by the
/// curriculum line-scan fallback. The derived-metric fields
/// (`current_semester`, `semester_count`) are left absent here and filled in
/// by the caller once records are known.
pub fn extract_summary(patterns: &Patterns, text: &str, lines: &[String]) -> DocumentSummary {
    let summary = DocumentSummary {
        program: extract_program(patterns, text),
        curriculum: extract_curriculum(patterns, text, lines),
        weighted_average: patterns
            .weighted_average
            .captures(text)
            .and_then(|caps| parse_decimal(&caps[1])),
        performance_index: patterns
            .ira
            .captures(text)
            .and_then(|caps| parse_decimal(&caps[1])),
        current_semester: None,
        semester_count: None,
    };
    log::debug!(
        "summary: program={:?} curriculum={:?} mp={:?} ira={:?}",
        summary.program,
        summary.curriculum,
        summary.weighted_average,
        summary.performance_index
    );
    summary
}

/// Program-name cascade: labeled block, loose label, unlabeled layout line.
fn extract_program(patterns: &Patterns, text: &str) -> Option<String> {
    for pattern in [
        &patterns.program_block,
        &patterns.program_loose,
        &patterns.program_unlabeled,
    ] {
        if let Some(caps) = pattern.captures(text) {
            let name = caps[1].trim();
            if !name.is_empty() {
                return Some(name.to_string());
            }
        }
    }
    None
}

/// Curriculum-matrix cascade: labeled value, generic `digits/digits - YYYY.N`,
/// then a scan for a line labeled CURRICULO / INTEGRALIZACAO.
fn extract_curriculum(patterns: &Patterns, text: &str, lines: &[String]) -> Option<Period> {
    if let Some(caps) = patterns.curriculum_labeled.captures(text) {
        return Period::parse(&caps[2]);
    }
    if let Some(caps) = patterns.curriculum_generic.captures(text) {
        return Period::parse(&caps[1]);
    }
    scan_labeled_lines(patterns, lines)
}

/// Finds a line whose folded text carries a curriculum label and reads the
/// period from it, or from the immediately following line when the label
/// line has no value. Accepts the OCR variant `YYYY/N`.
fn scan_labeled_lines(patterns: &Patterns, lines: &[String]) -> Option<Period> {
    for (i, line) in lines.iter().enumerate() {
        let folded = fold_ascii_upper(line);
        if !folded.contains("CURRICULO") && !folded.contains("INTEGRALIZACAO") {
            continue;
        }
        let found = period_in(patterns, line)
            .or_else(|| lines.get(i + 1).and_then(|next| period_in(patterns, next)));
        if found.is_some() {
            return found;
        }
    }
    None
}

fn period_in(patterns: &Patterns, line: &str) -> Option<Period> {
    let caps = patterns.period_token_loose.captures(line)?;
    let year = caps[1].parse().ok()?;
    let number = caps[2].parse().ok()?;
    Some(Period::new(year, number))
}
