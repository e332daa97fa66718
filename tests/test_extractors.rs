//! Integration tests for individual extraction behaviors, driven through
//! the public pipeline on small purpose-built documents.

use sigaa_historico::{CourseStatus, Period, TranscriptPipeline};

fn extract(text: &str) -> sigaa_historico::ExtractionResult {
    TranscriptPipeline::new().extract_text(text).unwrap()
}

// ============================================================================
// Status Semantics
// ============================================================================

#[test]
fn test_absence_failures_are_distinguished_from_grade_failures() {
    let text = "\
2021.2
FISICA 1
A
REPF
IFD0171
60
45.0
-
2022.1
FISICA 2
B
REPMF
IFD0173
60
12.5
-
";
    let result = extract(text);

    assert_eq!(result.courses.len(), 2);
    assert_eq!(result.courses[0].status, CourseStatus::FailedByAbsence);
    assert_eq!(
        result.courses[1].status,
        CourseStatus::FailedByGradeAndAbsence
    );
    assert_eq!(result.discarded, 0);

    assert_eq!(
        result.status_tally.get(&CourseStatus::FailedByAbsence),
        Some(&1)
    );
    assert_eq!(
        result.status_tally.get(&CourseStatus::FailedByGradeAndAbsence),
        Some(&1)
    );
    assert_eq!(result.status_tally.get(&CourseStatus::FailedByGrade), None);

    // Both failures conclude their terms.
    assert_eq!(result.summary.semester_count, Some(3));
}

#[test]
fn test_exemption_does_not_advance_the_semester_count() {
    let text = "\
2020.1
INGLES INSTRUMENTAL
A
DISP
LET0331
60
--
-
2021.1
CÁLCULO 1
A
APR
MAT0025
90
95.0
MM
";
    let result = extract(text);

    assert_eq!(result.courses.len(), 2);
    assert_eq!(result.courses[0].status, CourseStatus::Exempted);
    // Only the approved term counts toward progression.
    assert_eq!(result.summary.semester_count, Some(2));
}

#[test]
fn test_locked_and_cancelled_records_are_kept_but_inconclusive() {
    let text = "\
2022.1
PROBABILIDADE E ESTATISTICA
A
TRANC
EST0023
60
--
-
2022.2
DESENHO INDUSTRIAL
B
CANC
FGA0055
60
--
-
";
    let result = extract(text);

    assert_eq!(result.courses.len(), 2);
    assert_eq!(result.courses[0].status, CourseStatus::Locked);
    assert_eq!(result.courses[1].status, CourseStatus::Cancelled);
    // No concluded term and no enrollment: the floor count applies.
    assert_eq!(result.summary.semester_count, Some(1));
    assert_eq!(result.summary.current_semester, None);
}

// ============================================================================
// Annotation Lines
// ============================================================================

#[test]
fn test_consecutive_records_each_keep_their_own_annotations() {
    let text = "\
2021.1
CÁLCULO 1
A
APR
MAT0025
90
95.0
MM
e
Dr. PEDRO ALMEIDA (90h)
2021.1
FISICA 1
B
APR
IFD0171
60
88.0
MS
&
MSc. JOAO PEREIRA (60h)
";
    let result = extract(text);

    assert_eq!(result.courses.len(), 2);
    assert_eq!(result.courses[0].nature, Some('e'));
    assert_eq!(result.courses[0].instructor.as_deref(), Some("PEDRO ALMEIDA"));
    assert_eq!(result.courses[1].nature, Some('&'));
    assert_eq!(result.courses[1].instructor.as_deref(), Some("JOAO PEREIRA"));
    // Annotation hours never override the record's own hour column.
    assert_eq!(result.courses[1].hours, 60);
}

#[test]
fn test_composite_row_without_instructor_title() {
    let text = "\
2024.1REQUISITOS DE SOFTWARE
ANA BEATRIZ COSTA (90h) A APR FGA0030 90 96.0 SS
";
    let result = extract(text);

    assert_eq!(result.courses.len(), 1);
    assert_eq!(
        result.courses[0].instructor.as_deref(),
        Some("ANA BEATRIZ COSTA")
    );
    assert_eq!(result.courses[0].mention, Some(sigaa_historico::Mention::SS));
}

// ============================================================================
// Numeric Fields
// ============================================================================

#[test]
fn test_comma_decimals_in_attendance_and_indices() {
    let text = "\
2021.1
CÁLCULO 1
A
APR
MAT0025
90
87,5
MM
MP: 4,0571 IRA: 3,9
";
    let result = extract(text);

    assert_eq!(result.courses[0].attendance, Some(87.5));
    assert_eq!(result.summary.weighted_average, Some(4.0571));
    assert_eq!(result.summary.performance_index, Some(3.9));
}

// ============================================================================
// Summary Fallbacks
// ============================================================================

#[test]
fn test_curriculum_recovered_from_labeled_line_scan() {
    // OCR output without the structured label:value form anywhere.
    let result = extract("Prazo para Integralização\n2017/1\n");
    assert_eq!(result.summary.curriculum, Some(Period::new(2017, 1)));
}

#[test]
fn test_unaccented_suspension_label_on_one_line() {
    let result = extract("Suspensoes: 2019.2\n");
    assert_eq!(result.suspensions.len(), 1);
    assert_eq!(result.suspensions[0].0, Period::new(2019, 2));
}
