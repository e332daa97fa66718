//! Raw status-token tally.
//!
//! One word-bounded, case-insensitive pass over the full document text
//! counting each registrar status code. The tally runs independently of the
//! record state machine: it counts raw tokens, including ones inside windows
//! the machine rejected, so it doubles as a cheap diagnostic for how much of
//! the document the structured scan actually captured.

use indexmap::IndexMap;

use crate::patterns::Patterns;
use crate::records::CourseStatus;
use crate::text::fold_ascii_upper;

/// Counts every standalone status code in the text.
///
/// Map order is first occurrence in the document.
pub fn tally_statuses(patterns: &Patterns, text: &str) -> IndexMap<CourseStatus, u32> {
    let mut tally = IndexMap::new();
    for token in patterns.status_token.find_iter(text) {
        if let Some(status) = CourseStatus::from_code(&fold_ascii_upper(token.as_str())) {
            *tally.entry(status).or_insert(0) += 1;
        }
    }
    tally
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_in_first_occurrence_order() {
        let p = Patterns::new();
        let tally = tally_statuses(&p, "APR MATR APR CUMP APR MATR");
        let entries: Vec<(CourseStatus, u32)> = tally.into_iter().collect();
        assert_eq!(
            entries,
            vec![
                (CourseStatus::Approved, 3),
                (CourseStatus::Enrolled, 2),
                (CourseStatus::EquivalenceCredited, 1),
            ]
        );
    }

    #[test]
    fn test_word_boundary_excludes_larger_words() {
        let p = Patterns::new();
        // APROVADO and CUMPRIDO contain status codes but are not tokens.
        let tally = tally_statuses(&p, "APROVADO CUMPRIDO REPROVADO");
        assert!(tally.is_empty());
    }

    #[test]
    fn test_case_insensitive_tokens() {
        let p = Patterns::new();
        let tally = tally_statuses(&p, "apr Apr APR");
        assert_eq!(tally.get(&CourseStatus::Approved), Some(&3));
    }

    #[test]
    fn test_longer_codes_win_over_prefixes() {
        let p = Patterns::new();
        let tally = tally_statuses(&p, "REPMF REPF REP");
        assert_eq!(tally.get(&CourseStatus::FailedByGradeAndAbsence), Some(&1));
        assert_eq!(tally.get(&CourseStatus::FailedByAbsence), Some(&1));
        assert_eq!(tally.get(&CourseStatus::FailedByGrade), Some(&1));
    }
}
