//! Field-level string normalization.
//!
//! Every value captured by the layout detectors passes through one of these
//! functions before it is stored on a record:
//!
//! - [`fold_ascii_upper`] folds diacritics and case for label matching
//!   (`Currículo` and `CURRICULO` compare equal).
//! - [`clean_course_name`] strips term labels, bullet markers, and edge
//!   punctuation that positional reconstruction leaves glued to names.
//! - [`clean_instructor_name`] strips honorific prefixes and trailing
//!   punctuation from instructor captures.
//! - [`parse_decimal`] reads locale-tolerant decimals (`85,5` or `85.5`).
//!
//! The cleaning functions run to a fixpoint, so they are safe to apply to
//! already-clean input.

/// Honorific prefixes stripped from instructor names, longest-match first.
///
/// `DRA.` must precede `DR.` so that "Dra. Ana" does not degrade to "A. Ana".
const INSTRUCTOR_TITLES: [&str; 8] = [
    "DRA.", "DR.", "MSC.", "PROF.", "PHD.", "PHD", "ME.", "MA.",
];

/// Folds a string to uppercase ASCII for label comparison.
///
/// Diacritics are transliterated away before uppercasing, so accented and
/// unaccented spellings of the same registrar label match the same way:
///
/// ```
/// use sigaa_historico::text::fold_ascii_upper;
///
/// assert_eq!(fold_ascii_upper("Currículo"), "CURRICULO");
/// assert_eq!(fold_ascii_upper("Integralização"), "INTEGRALIZACAO");
/// ```
///
/// The result is only suitable for matching; stored field values keep their
/// original accents.
pub fn fold_ascii_upper(s: &str) -> String {
    deunicode::deunicode(s).to_uppercase()
}

/// Collapses runs of whitespace to single spaces and trims the ends.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cleans a raw course-name capture.
///
/// Positional reconstruction can leave a term label glued to the front of a
/// name (`2023.2ALGORITMOS`), bullet markers from the pending-course section
/// (`-- CÁLCULO 1`), and stray punctuation at either edge. This strips all of
/// them, then repairs glued token boundaries by inserting a space where a
/// lowercase letter runs into an uppercase one or a letter runs into a digit:
///
/// ```
/// use sigaa_historico::text::clean_course_name;
///
/// assert_eq!(clean_course_name("2023.2ALGORITMOS"), "ALGORITMOS");
/// assert_eq!(clean_course_name("-- CÁLCULO 1"), "CÁLCULO 1");
/// assert_eq!(clean_course_name("TEORIA DOS GRAFOS2"), "TEORIA DOS GRAFOS 2");
/// ```
///
/// Internal punctuation is preserved; only leading and trailing
/// non-alphanumeric runs are removed.
pub fn clean_course_name(raw: &str) -> String {
    let mut name = raw.trim().to_string();
    loop {
        let before = name.clone();
        name = strip_leading_period_label(&name).to_string();
        name = strip_leading_bullets(&name).to_string();
        name = name
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_string();
        if name == before {
            break;
        }
    }
    collapse_whitespace(&repair_glued_boundaries(&name))
}

/// Cleans a raw instructor-name capture.
///
/// Strips stacked honorific prefixes (`Prof. Dr. JOANA LIMA` becomes
/// `JOANA LIMA`), then removes trailing non-letter characters left over from
/// the workload suffix:
///
/// ```
/// use sigaa_historico::text::clean_instructor_name;
///
/// assert_eq!(clean_instructor_name("Prof. Dr. JOANA LIMA"), "JOANA LIMA");
/// assert_eq!(clean_instructor_name("MSc. PEDRO ALVES."), "PEDRO ALVES");
/// ```
pub fn clean_instructor_name(raw: &str) -> String {
    let mut name = collapse_whitespace(raw);
    loop {
        let before = name.clone();
        let mut rest = name.as_str();
        while let Some(stripped) = strip_instructor_title(rest) {
            rest = stripped;
        }
        let rest = rest.trim_end_matches(|c: char| !c.is_alphabetic() && !c.is_whitespace());
        name = collapse_whitespace(rest);
        if name == before {
            break;
        }
    }
    name
}

/// Parses a decimal that may use either a comma or a dot separator.
///
/// Returns `None` for placeholders such as `--` and anything else that does
/// not read as a number.
pub fn parse_decimal(s: &str) -> Option<f64> {
    s.trim().replace(',', ".").parse().ok()
}

/// Strips one leading `YYYY.N` term label, if present.
///
/// The label may be glued directly to the following token, so no trailing
/// separator is required.
fn strip_leading_period_label(s: &str) -> &str {
    let b = s.as_bytes();
    if b.len() >= 6
        && b[..4].iter().all(u8::is_ascii_digit)
        && b[4] == b'.'
        && b[5].is_ascii_digit()
    {
        s[6..].trim_start()
    } else {
        s
    }
}

/// Strips leading `--` bullet markers, however many are stacked.
fn strip_leading_bullets(s: &str) -> &str {
    let mut rest = s;
    while let Some(stripped) = rest.strip_prefix("--") {
        rest = stripped.trim_start();
    }
    rest
}

/// Inserts a space where two tokens were glued together during line
/// reconstruction: a lowercase letter followed by an uppercase one, or a
/// letter followed by a digit. Digit-to-letter runs are left alone because
/// course names legitimately start with digits after a stripped term label.
fn repair_glued_boundaries(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prev: Option<char> = None;
    for c in s.chars() {
        if let Some(p) = prev {
            let lower_to_upper = p.is_lowercase() && c.is_uppercase();
            let letter_to_digit = p.is_alphabetic() && c.is_ascii_digit();
            if lower_to_upper || letter_to_digit {
                out.push(' ');
            }
        }
        out.push(c);
        prev = Some(c);
    }
    out
}

/// Strips one leading honorific title, case-insensitively. Returns the
/// remainder with leading whitespace removed, or `None` when no title leads
/// the string.
fn strip_instructor_title(name: &str) -> Option<&str> {
    for title in INSTRUCTOR_TITLES {
        let mut chars = name.chars();
        let matched = title
            .chars()
            .all(|tc| chars.next().map(|c| c.to_ascii_uppercase()) == Some(tc));
        if matched {
            return Some(chars.as_str().trim_start());
        }
    }
    None
}
