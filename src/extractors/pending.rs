//! Pending-course extraction.
//!
//! A single full-text pass, independent of the record state machine. The
//! registrar lists unmet curriculum requirements as `NAME  NNN h  CODE`,
//! optionally followed by an enrollment annotation when the student is
//! already registered for the requirement (directly or through an
//! equivalent course).

use crate::extractors::courses::parse_hours;
use crate::patterns::Patterns;
use crate::records::{PendingCourse, PendingStatus};
use crate::text::clean_course_name;

/// Extracts every pending-course entry from the full document text.
pub fn extract_pending(patterns: &Patterns, text: &str) -> Vec<PendingCourse> {
    let pending: Vec<PendingCourse> = patterns
        .pending_course
        .captures_iter(text)
        .map(|caps| {
            let annotation = caps.get(4).map(|m| m.as_str().to_string());
            PendingCourse {
                name: clean_course_name(&caps[1]),
                hours: parse_hours(&caps[2]),
                code: caps[3].to_uppercase(),
                status: if annotation.is_some() {
                    PendingStatus::Enrolled
                } else {
                    PendingStatus::Pending
                },
                annotation,
            }
        })
        .collect();
    log::debug!("pending scan: {} entries", pending.len());
    pending
}
