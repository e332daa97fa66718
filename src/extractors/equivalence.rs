//! Equivalence-grant extraction.
//!
//! The registrar records discharged requirements with a fixed idiom:
//!
//! ```text
//! Cumpriu MAT0025 - CÁLCULO 1 (90h) através de MAT0137 - CÁLCULO 1 - SEMIPRESENCIAL (90h)
//! ```
//!
//! One grant per occurrence, in document order. Codes are kept as opaque
//! strings; resolving them against a course catalog is a downstream concern.

use crate::extractors::courses::parse_hours;
use crate::patterns::Patterns;
use crate::records::EquivalenceGrant;
use crate::text::clean_course_name;

/// Extracts every equivalence grant from the full document text.
pub fn extract_equivalences(patterns: &Patterns, text: &str) -> Vec<EquivalenceGrant> {
    let grants: Vec<EquivalenceGrant> = patterns
        .equivalence
        .captures_iter(text)
        .map(|caps| EquivalenceGrant {
            satisfied_code: caps[1].to_uppercase(),
            satisfied_name: clean_course_name(&caps[2]),
            satisfied_hours: parse_hours(&caps[3]),
            granting_code: caps[4].to_uppercase(),
            granting_name: clean_course_name(&caps[5]),
            granting_hours: parse_hours(&caps[6]),
        })
        .collect();
    log::debug!("equivalence scan: {} grants", grants.len());
    grants
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_grant() {
        let p = Patterns::new();
        let text = "Cumpriu MAT0026 - CALCULO 2 (90h) através de MAT0099 - CALCULO NUMERICO (90h)";
        let grants = extract_equivalences(&p, text);
        assert_eq!(grants.len(), 1);
        assert_eq!(grants[0].satisfied_code, "MAT0026");
        assert_eq!(grants[0].satisfied_name, "CALCULO 2");
        assert_eq!(grants[0].satisfied_hours, 90);
        assert_eq!(grants[0].granting_code, "MAT0099");
        assert_eq!(grants[0].granting_name, "CALCULO NUMERICO");
        assert_eq!(grants[0].granting_hours, 90);
    }

    #[test]
    fn test_hyphenated_granting_name() {
        let p = Patterns::new();
        let text =
            "Cumpriu MAT0025 - CÁLCULO 1 (90h) através de MAT0137 - CÁLCULO 1 - SEMIPRESENCIAL (90h)";
        let grants = extract_equivalences(&p, text);
        assert_eq!(grants.len(), 1);
        assert_eq!(grants[0].granting_name, "CÁLCULO 1 - SEMIPRESENCIAL");
    }

    #[test]
    fn test_multiple_grants_in_document_order() {
        let p = Patterns::new();
        let text = "Cumpriu AAA111 - UM (30h) através de BBB222 - DOIS (30h)\n\
                    Cumpriu CCC333 - TRES (60h) atraves de DDD444 - QUATRO (60h)";
        let grants = extract_equivalences(&p, text);
        assert_eq!(grants.len(), 2);
        assert_eq!(grants[0].satisfied_code, "AAA111");
        assert_eq!(grants[1].satisfied_code, "CCC333");
        assert_eq!(grants[1].granting_hours, 60);
    }

    #[test]
    fn test_no_grants_in_unrelated_text() {
        let p = Patterns::new();
        assert!(extract_equivalences(&p, "Histórico Escolar sem equivalências").is_empty());
    }
}
