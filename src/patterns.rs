//! Compiled pattern bank for transcript extraction.
//!
//! Every regex the pipeline uses is compiled exactly once into a [`Patterns`]
//! value owned by the pipeline and passed by reference into the extractors.
//! Nothing here is global: two pipelines hold two independent banks.
//!
//! The patterns mirror the registrar's printed layouts. Transcripts come in
//! two generations — an older one that prints each record field on its own
//! line (the "stacked" layout) and a newer one that merges the term label
//! with the course name and packs the remaining fields into one composite
//! line — plus a special single-line row for equivalence-credited courses.
//! The bank carries the line patterns for each layout, the summary-field
//! cascades, and the full-text auxiliary patterns.

use regex::Regex;

/// The status-code alternation shared by the layout patterns.
///
/// Longer codes come first so that `REPMF` is never read as `REP`.
const STATUS_CODES: &str = "MATR|APR|REPMF|REPF|REP|CANC|DISP|TRANC|CUMP";

/// Read-only bank of compiled regexes, built once per pipeline.
#[derive(Debug)]
pub struct Patterns {
    // Stacked layout: one field per line, matched against trimmed lines.
    /// Term label alone on a line, `2023.2`.
    pub window_period: Regex,
    /// Course name line: letter-initial, at least two characters.
    pub window_name: Regex,
    /// Class-section code line, e.g. `AA` or `01`.
    pub window_section: Regex,
    /// Registrar status code alone on a line.
    pub window_status: Regex,
    /// Course code line, alphabetic prefix and numeric suffix.
    pub window_code: Regex,
    /// Credit-hour count line.
    pub window_hours: Regex,
    /// Attendance percentage line, `92,0`, a bare integer, or the `--`
    /// placeholder.
    pub window_attendance: Regex,
    /// Mention symbol line.
    pub window_mention: Regex,
    /// Course-nature symbol line trailing a stacked window, e.g. `*` or `#e`.
    pub nature_line: Regex,
    /// Instructor annotation with workload, `Prof. NAME (60h)`.
    pub instructor_note: Regex,

    // Merged layout: term label glued to the name, then one composite line.
    /// Header line `2023.2NOME DA DISCIPLINA`.
    pub merged_header: Regex,
    /// Composite data line: instructor `(NNh)`, section, status, code,
    /// hours, attendance, mention.
    pub composite_row: Regex,

    /// Single-line equivalence-credited row ending in `-- -- - CUMP`.
    pub credited_row: Regex,

    // Program-name cascade, most specific first.
    /// `Curso:` label with the `NAME/CAMPUS - shift - degree` value on the
    /// same or the following line.
    pub program_block: Regex,
    /// Loose `Curso: NAME` terminated by `Status:` or end of line.
    pub program_loose: Regex,
    /// Unlabeled `NAME/CAMPUS - shift - degree` line.
    pub program_unlabeled: Regex,

    // Curriculum-matrix cascade.
    /// `Currículo:` label with `digits/digits - YYYY.N`.
    pub curriculum_labeled: Regex,
    /// `digits/digits - YYYY.N` anywhere in the text.
    pub curriculum_generic: Regex,

    /// Bare term label `YYYY.N`, used to pick periods out of list values.
    pub period_token: Regex,
    /// Term label tolerating the OCR variant `YYYY/N`; captures year and
    /// half separately.
    pub period_token_loose: Regex,

    /// Performance index, `IRA: 3,8`.
    pub ira: Regex,
    /// Weighted average, `MP: 4,1`. Word-bounded so the `MP` inside `CUMP`
    /// can never anchor a match.
    pub weighted_average: Regex,

    /// `Suspensões:` label; captures the rest of the line.
    pub suspension_line: Regex,
    /// Pending-course entry: name, hour count with `h` marker, course code,
    /// optional enrollment annotation.
    pub pending_course: Regex,
    /// Equivalence grant, `Cumpriu X - NAME (NNh) através de Y - NAME (NNh)`.
    pub equivalence: Regex,
    /// Any registrar status code as a standalone word, for the tally pass.
    pub status_token: Regex,
}

impl Patterns {
    /// Compiles the bank. All patterns are literals, so compilation cannot
    /// fail at runtime.
    pub fn new() -> Self {
        Patterns {
            window_period: Regex::new(r"^\d{4}\.\d$").unwrap(),
            window_name: Regex::new(
                r"(?i)^[A-ZÀ-ÿ][A-ZÀ-ÿ0-9](?:[A-ZÀ-ÿ0-9 -]*[A-ZÀ-ÿ0-9])?$",
            )
            .unwrap(),
            window_section: Regex::new(r"^[A-Z0-9]{1,4}$").unwrap(),
            window_status: Regex::new(&format!(r"^({STATUS_CODES})$")).unwrap(),
            window_code: Regex::new(r"^[A-Z]{2,}\d{3,}$").unwrap(),
            window_hours: Regex::new(r"^\d{1,3}$").unwrap(),
            window_attendance: Regex::new(r"^(?:\d{1,3}[,.]\d+|--|\d{1,3})$").unwrap(),
            window_mention: Regex::new(r"^(SS|MS|MM|MI|II|SR|-)$").unwrap(),
            nature_line: Regex::new(r"^[*&#e@§%]+$").unwrap(),
            instructor_note: Regex::new(
                r"(?i)(?:Dra\.|Dr\.|MSc\.|Prof\.)?\s*([A-ZÀ-ÿ\s.]+?)\s*\((\d+)h\)",
            )
            .unwrap(),

            merged_header: Regex::new(
                r"(?i)^(\d{4}\.\d)([A-ZÀ-Ÿ\s0-9]+(?:DE\s+[A-ZÀ-Ÿ\s0-9]*)*)\s*$",
            )
            .unwrap(),
            composite_row: Regex::new(&format!(
                r"(?i)(?:Dra\.|Dr\.|MSc\.|Prof\.)?\s*([A-ZÀ-Ÿ\s.]+?)\s*\((\d+)h\)\s*([A-Z0-9]+)\s+({STATUS_CODES})\s+([A-Z]{{2,}}\d{{3,}})\s+(\d+)\s+(\d+(?:[,.]\d+)?|--)\s+(SS|MS|MM|MI|II|SR|-)",
            ))
            .unwrap(),

            credited_row: Regex::new(
                r"(?i)^(\d{4}\.\d)\s+([*&#e@§%]?)\s*([A-Z]{2,}\d{3,})\s*([A-ZÀ-Ÿ\s0-9]+?)\s+(\d+)\s+--\s+--\s+-\s+CUMP",
            )
            .unwrap(),

            program_block: Regex::new(
                r"(?im)Curso:\s*\n?\s*([A-ZÀ-ÿ][A-ZÀ-ÿ\s]+(?:DE\s+[A-ZÀ-ÿ\s]+)*)/[A-Z]+\s*-",
            )
            .unwrap(),
            program_loose: Regex::new(r"(?im)Curso[:\s]+([A-ZÀ-Ÿ\s/\\-]+?)(?:\s+Status:|$)")
                .unwrap(),
            program_unlabeled: Regex::new(
                r"(?im)^([A-ZÀ-Ÿ\s]+(?:DE\s+[A-ZÀ-Ÿ\s]+)*)/[A-Z]+ - [A-ZÀ-Ÿ\s]+ - [A-ZÀ-Ÿ]+",
            )
            .unwrap(),

            curriculum_labeled: Regex::new(r"(?im)Curr[ií]culo:\s*\n?(\d+/\d+)\s*-\s*(\d{4}\.\d)")
                .unwrap(),
            curriculum_generic: Regex::new(r"(?m)\d+/\d+\s*-\s*(\d{4}\.\d)").unwrap(),

            period_token: Regex::new(r"\d{4}\.\d").unwrap(),
            period_token_loose: Regex::new(r"(\d{4})[./](\d)").unwrap(),

            ira: Regex::new(r"(?i)\bIRA[:\s]+(\d+[.,]\d+)").unwrap(),
            weighted_average: Regex::new(r"(?i)\bMP[:\s]+(\d+[.,]\d+)").unwrap(),

            suspension_line: Regex::new(r"(?i)Suspens[õo]es:\s*(.*)").unwrap(),
            // Lazy name so consecutive entries never merge into one match;
            // space-only name class so a section heading on the line above
            // cannot glue into the first entry.
            pending_course: Regex::new(
                r"(?im)^\s*([A-ZÀ-Ÿ0-9 ]+?)[ \t]+(\d+)[ \t]*h[ \t]+([A-Z]{2,}\d{3,})(?:[ \t]+(Matriculado(?:\s+em\s+Equivalente)?))?",
            )
            .unwrap(),
            equivalence: Regex::new(
                r"(?i)Cumpriu\s+([A-Z]{2,}\d{3,})\s*-\s*([A-ZÀ-Ÿ\s0-9-]+?)\s*\((\d+)h\)\s*atrav[eé]s\s*de\s*([A-Z]{2,}\d{3,})\s*-\s*([A-ZÀ-Ÿ\s0-9-]+?)\s*\((\d+)h\)",
            )
            .unwrap(),
            status_token: Regex::new(&format!(r"(?i)\b({STATUS_CODES})\b")).unwrap(),
        }
    }
}

impl Default for Patterns {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_compiles() {
        let _ = Patterns::new();
    }

    #[test]
    fn test_window_lines_match_stacked_fields() {
        let p = Patterns::new();
        assert!(p.window_period.is_match("2023.2"));
        assert!(!p.window_period.is_match("2023.2 ALGORITMOS"));
        assert!(p.window_name.is_match("CÁLCULO 1"));
        assert!(!p.window_name.is_match("X"));
        assert!(p.window_section.is_match("AA"));
        assert!(p.window_status.is_match("REPMF"));
        assert!(p.window_code.is_match("MAT0025"));
        assert!(!p.window_code.is_match("M0025"));
        assert!(p.window_attendance.is_match("92,0"));
        assert!(p.window_attendance.is_match("--"));
        assert!(p.window_mention.is_match("MM"));
    }

    #[test]
    fn test_composite_row_captures_in_order() {
        let p = Patterns::new();
        let line = "Dr. JOÃO DA SILVA (60h) AA APR FGA0158 60 92,0 MM";
        let caps = p.composite_row.captures(line).unwrap();
        assert_eq!(&caps[1], "JOÃO DA SILVA");
        assert_eq!(&caps[2], "60");
        assert_eq!(&caps[3], "AA");
        assert_eq!(&caps[4], "APR");
        assert_eq!(&caps[5], "FGA0158");
        assert_eq!(&caps[6], "60");
        assert_eq!(&caps[7], "92,0");
        assert_eq!(&caps[8], "MM");
    }

    #[test]
    fn test_composite_row_keeps_dra_out_of_the_name() {
        let p = Patterns::new();
        let caps = p
            .composite_row
            .captures("Dra. ANA LÚCIA (90h) 01 MATR MAT0026 90 -- -")
            .unwrap();
        assert_eq!(&caps[1], "ANA LÚCIA");
    }

    #[test]
    fn test_credited_row_matches_with_and_without_nature() {
        let p = Patterns::new();
        let caps = p
            .credited_row
            .captures("2019.1  * FGA0221  INTELIGÊNCIA ARTIFICIAL  60  --  --  -  CUMP")
            .unwrap();
        assert_eq!(&caps[2], "*");
        assert_eq!(&caps[3], "FGA0221");
        assert!(p
            .credited_row
            .is_match("2019.1  FGA0221  INTELIGÊNCIA ARTIFICIAL  60  --  --  -  CUMP"));
        // OCR sometimes glues the code to the name.
        let caps = p
            .credited_row
            .captures("2019.1  * FGA0221INTELIGÊNCIA ARTIFICIAL  60  --  --  -  CUMP")
            .unwrap();
        assert_eq!(&caps[3], "FGA0221");
        assert_eq!(caps[4].trim(), "INTELIGÊNCIA ARTIFICIAL");
    }

    #[test]
    fn test_weighted_average_never_anchors_inside_cump() {
        let p = Patterns::new();
        assert!(p.weighted_average.is_match("MP: 4,1"));
        assert!(!p.weighted_average.is_match("CUMP: 4,1"));
    }

    #[test]
    fn test_pending_course_field_order() {
        let p = Patterns::new();
        let caps = p
            .pending_course
            .captures("  CÁLCULO 2  90 h  MAT0026  Matriculado em Equivalente")
            .unwrap();
        assert_eq!(caps[1].trim(), "CÁLCULO 2");
        assert_eq!(&caps[2], "90");
        assert_eq!(&caps[3], "MAT0026");
        assert_eq!(&caps[4], "Matriculado em Equivalente");
    }

    #[test]
    fn test_equivalence_accepts_accented_and_plain_spelling() {
        let p = Patterns::new();
        for idiom in ["através de", "atraves de"] {
            let text = format!("Cumpriu MAT0025 - CÁLCULO 1 (90h) {idiom} MAT0137 - CÁLCULO 1 - SEMIPRESENCIAL (90h)");
            let caps = p.equivalence.captures(&text).unwrap();
            assert_eq!(&caps[1], "MAT0025");
            assert_eq!(&caps[4], "MAT0137");
        }
    }

    #[test]
    fn test_status_token_is_word_bounded() {
        let p = Patterns::new();
        let hits: Vec<&str> = p
            .status_token
            .find_iter("APR APROVADO REPMF CUMPRIDO CUMP")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(hits, vec!["APR", "REPMF", "CUMP"]);
    }

    #[test]
    fn test_program_block_reads_value_on_next_line() {
        let p = Patterns::new();
        let text = "Curso:\nENGENHARIA DE SOFTWARE/FCTE - NOTURNO - BACHARELADO\n";
        let caps = p.program_block.captures(text).unwrap();
        assert_eq!(caps[1].trim(), "ENGENHARIA DE SOFTWARE");
    }

    #[test]
    fn test_curriculum_labeled_takes_the_period_half() {
        let p = Patterns::new();
        let caps = p.curriculum_labeled.captures("Currículo: 6360/1 - 2017.1").unwrap();
        assert_eq!(&caps[2], "2017.1");
        let caps = p.curriculum_labeled.captures("Curriculo: 6360/1 - 2017.1").unwrap();
        assert_eq!(&caps[2], "2017.1");
    }
}
