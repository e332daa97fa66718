//! Derived semester metrics.
//!
//! Two values computed from the extracted record set rather than read off
//! the document: the term the student is currently enrolled in, and how
//! many semesters of progress the transcript represents. The current date
//! is passed in by the caller so the calendar fallback stays deterministic
//! under test.

use chrono::{Datelike, NaiveDate};
use std::collections::HashSet;

use crate::records::{CourseRecord, CourseStatus, PendingCourse, PendingStatus, Period};

/// The term the student is currently enrolled in.
///
/// Prefers the highest period among records with status `MATR`. When no
/// record carries that status but a pending course is annotated as
/// enrolled, falls back to the academic period of `today`. Absent when
/// neither condition holds.
pub fn current_semester(
    courses: &[CourseRecord],
    pending: &[PendingCourse],
    today: NaiveDate,
) -> Option<Period> {
    let enrolled_max = courses
        .iter()
        .filter(|c| c.status == CourseStatus::Enrolled)
        .map(|c| c.period)
        .max();
    if enrolled_max.is_some() {
        return enrolled_max;
    }
    if pending.iter().any(|p| p.status == PendingStatus::Enrolled) {
        return Some(academic_period(today));
    }
    None
}

/// The academic period a calendar date falls in: first half of the year is
/// `.1`, second half is `.2`.
pub fn academic_period(date: NaiveDate) -> Period {
    let number = if date.month() <= 6 { 1 } else { 2 };
    Period::new(date.year() as u16, number)
}

/// How many semesters the transcript spans: distinct periods carrying a
/// concluded status, plus one for the semester in progress. Floors at 1
/// whenever the document yielded any record or pending course; absent only
/// when it yielded neither.
pub fn semester_count(courses: &[CourseRecord], pending: &[PendingCourse]) -> Option<u32> {
    if courses.is_empty() && pending.is_empty() {
        return None;
    }
    let completed: HashSet<Period> = courses
        .iter()
        .filter(|c| c.status.is_completed())
        .map(|c| c.period)
        .collect();
    if completed.is_empty() {
        Some(1)
    } else {
        Some(completed.len() as u32 + 1)
    }
}
