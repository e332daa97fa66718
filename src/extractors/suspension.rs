//! Suspension-period extraction.
//!
//! Transcripts carry a `Suspensões:` label followed by a comma-separated
//! list of term labels, either on the same line or on the line below. A
//! literal `Nenhum` (or an absent label) means the student was never
//! suspended.

use crate::patterns::Patterns;
use crate::records::{Period, SuspensionPeriod};
use crate::text::fold_ascii_upper;

/// Extracts the suspension list from the reconstructed lines.
///
/// Only the first labeled occurrence is read; the registrar prints the
/// block once.
pub fn extract_suspensions(patterns: &Patterns, lines: &[String]) -> Vec<SuspensionPeriod> {
    for (i, line) in lines.iter().enumerate() {
        let caps = match patterns.suspension_line.captures(line) {
            Some(caps) => caps,
            None => continue,
        };
        let remainder = caps[1].trim().to_string();
        let value = if remainder.is_empty() {
            lines.get(i + 1).cloned().unwrap_or_default()
        } else {
            remainder
        };
        if fold_ascii_upper(&value).contains("NENHUM") {
            return Vec::new();
        }
        let periods: Vec<SuspensionPeriod> = patterns
            .period_token
            .find_iter(&value)
            .filter_map(|m| Period::parse(m.as_str()))
            .map(SuspensionPeriod)
            .collect();
        log::debug!("suspension list: {} periods", periods.len());
        return periods;
    }
    Vec::new()
}
