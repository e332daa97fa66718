//! Course-record extraction state machine.
//!
//! Walks the reconstructed line sequence once, left to right. At each index
//! the known layout detectors are tried in priority order; the first match
//! yields one [`CourseRecord`] plus the number of lines it consumed, and the
//! scan resumes after the consumed window. Lines no detector recognizes are
//! simply skipped, so page furniture, legends, and section headers never
//! fail a document.
//!
//! Three physical layouts are recognized:
//!
//! 1. **Stacked** — the older transcript generation prints each field on its
//!    own line: term, name, section, status, code, hours, attendance,
//!    mention, optionally followed by a course-nature symbol line and an
//!    instructor annotation.
//! 2. **Merged** — the newer generation glues the term label to the course
//!    name and packs the remaining fields into one composite line right
//!    below it.
//! 3. **Credited** — equivalence-credited courses print as one row ending in
//!    `-- -- - CUMP`.
//!
//! A detector is a pure function of the pattern bank, the line slice, and
//! the current index; adding a layout means adding one function to
//! [`LAYOUT_DETECTORS`].

use crate::patterns::Patterns;
use crate::records::{CourseRecord, CourseStatus, Mention, Period, HOURS_PER_CREDIT};
use crate::text::{clean_course_name, clean_instructor_name, fold_ascii_upper, parse_decimal};

/// Lines the stacked-layout detector may scan past its window for the
/// optional nature-symbol and instructor annotations.
const ANNOTATION_LOOKAHEAD: usize = 4;

/// One successful layout match: the parsed record and how many lines the
/// layout consumed starting at the match index.
#[derive(Debug)]
pub struct LayoutMatch {
    /// The record parsed from the consumed lines.
    pub record: CourseRecord,
    /// Total lines consumed, window plus any trailing annotation lines.
    pub consumed: usize,
}

/// A layout detector. Returns `None` when the lines at `index` do not form
/// a record under this layout.
pub type LayoutDetector = fn(&Patterns, &[String], usize) -> Option<LayoutMatch>;

/// Parses an hour field already shape-checked by a layout pattern. Several
/// patterns accept unbounded digit runs, so overflow is still possible; a
/// zero-hour record is more useful than a lost one.
pub(crate) fn parse_hours(raw: &str) -> u32 {
    match raw.parse() {
        Ok(hours) => hours,
        Err(_) => {
            log::warn!("unparsable hour field {:?}, recording 0 hours", raw);
            0
        }
    }
}

/// The known layouts, in priority order.
pub const LAYOUT_DETECTORS: [LayoutDetector; 3] = [
    detect_stacked_window,
    detect_merged_window,
    detect_credited_row,
];

/// Outcome of one pass of the record state machine.
#[derive(Debug, Default)]
pub struct CourseScan {
    /// Records accepted, in document order.
    pub records: Vec<CourseRecord>,
    /// Records parsed but dropped by the mention-exclusion rule.
    pub discarded: u32,
}

/// Runs the state machine over the reconstructed lines.
///
/// Records whose mention is an exclusion symbol (`II`, `MI`, `SR`) are
/// counted in [`CourseScan::discarded`] instead of being kept; the registrar
/// prints those rows for audit purposes and they do not represent completed
/// or pending coursework.
pub fn scan_courses(patterns: &Patterns, lines: &[String]) -> CourseScan {
    let mut scan = CourseScan::default();
    let mut i = 0;
    while i < lines.len() {
        let hit = LAYOUT_DETECTORS
            .iter()
            .find_map(|detect| detect(patterns, lines, i));
        match hit {
            Some(m) => {
                i += m.consumed;
                if m.record.mention.map_or(false, |mention| mention.is_excluded()) {
                    log::debug!(
                        "dropping {} {} with excluded mention",
                        m.record.code,
                        m.record.period
                    );
                    scan.discarded += 1;
                } else {
                    log::debug!(
                        "record {} {} [{}] {}h",
                        m.record.code,
                        m.record.period,
                        m.record.status.code(),
                        m.record.hours
                    );
                    scan.records.push(m.record);
                }
            }
            None => i += 1,
        }
    }
    log::info!(
        "course scan: {} records kept, {} discarded",
        scan.records.len(),
        scan.discarded
    );
    scan
}

/// Stacked layout: eight consecutive single-field lines, then up to
/// [`ANNOTATION_LOOKAHEAD`] annotation lines.
fn detect_stacked_window(p: &Patterns, lines: &[String], index: usize) -> Option<LayoutMatch> {
    if index + 8 > lines.len() {
        return None;
    }
    let window = &lines[index..index + 8];
    if !(p.window_period.is_match(&window[0])
        && p.window_name.is_match(&window[1])
        && p.window_section.is_match(&window[2])
        && p.window_status.is_match(&window[3])
        && p.window_code.is_match(&window[4])
        && p.window_hours.is_match(&window[5])
        && p.window_attendance.is_match(&window[6])
        && p.window_mention.is_match(&window[7]))
    {
        return None;
    }

    let period = Period::parse(&window[0])?;
    let status = CourseStatus::from_code(&window[3])?;
    let hours = parse_hours(&window[5]);

    let mut consumed = 8;
    let mut nature = None;
    let mut instructor = None;
    for line in lines.iter().skip(index + 8).take(ANNOTATION_LOOKAHEAD) {
        if nature.is_none() && p.nature_line.is_match(line) {
            nature = line.chars().next();
        } else if instructor.is_none() {
            match p.instructor_note.captures(line) {
                Some(caps) => instructor = Some(clean_instructor_name(&caps[1])),
                None => break,
            }
        } else {
            break;
        }
        consumed += 1;
    }

    Some(LayoutMatch {
        record: CourseRecord {
            code: window[4].clone(),
            name: clean_course_name(&window[1]),
            status,
            mention: Mention::from_code(&window[7]),
            hours,
            credits: hours / HOURS_PER_CREDIT,
            period,
            instructor,
            section: Some(window[2].clone()),
            attendance: parse_decimal(&window[6]).map(|v| v as f32),
            grade: None,
            nature,
        },
        consumed,
    })
}

/// Merged layout: term label glued to the name on one line, one composite
/// data line below it.
fn detect_merged_window(p: &Patterns, lines: &[String], index: usize) -> Option<LayoutMatch> {
    if index + 2 > lines.len() {
        return None;
    }
    let header = p.merged_header.captures(&lines[index])?;
    let raw_name = header.get(2)?.as_str();
    let folded = fold_ascii_upper(raw_name);
    // Registrar annotations such as "ENADE NAO CONCLUINTE" share the merged
    // header shape but are not courses.
    if folded.contains("ENADE") || folded.contains("INGRESSANTE") {
        return None;
    }

    let data = p.composite_row.captures(&lines[index + 1])?;
    let period = Period::parse(header.get(1)?.as_str())?;
    let status = CourseStatus::from_code(&fold_ascii_upper(&data[4]))?;
    let hours = parse_hours(&data[6]);

    Some(LayoutMatch {
        record: CourseRecord {
            code: data[5].to_uppercase(),
            name: clean_course_name(raw_name),
            status,
            mention: Mention::from_code(&fold_ascii_upper(&data[8])),
            hours,
            credits: hours / HOURS_PER_CREDIT,
            period,
            instructor: Some(clean_instructor_name(&data[1])),
            section: Some(data[3].to_uppercase()),
            attendance: parse_decimal(&data[7]).map(|v| v as f32),
            grade: None,
            nature: None,
        },
        consumed: 2,
    })
}

/// Single-line layout for equivalence-credited rows ending in `-- -- - CUMP`.
fn detect_credited_row(p: &Patterns, lines: &[String], index: usize) -> Option<LayoutMatch> {
    let caps = p.credited_row.captures(lines.get(index)?)?;
    let period = Period::parse(&caps[1])?;
    let hours = parse_hours(&caps[5]);

    Some(LayoutMatch {
        record: CourseRecord {
            code: caps[3].to_uppercase(),
            name: clean_course_name(&caps[4]),
            status: CourseStatus::EquivalenceCredited,
            mention: None,
            hours,
            credits: hours / HOURS_PER_CREDIT,
            period,
            instructor: None,
            section: None,
            attendance: None,
            grade: None,
            nature: caps.get(2).and_then(|m| m.as_str().chars().next()),
        },
        consumed: 1,
    })
}
