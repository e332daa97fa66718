//! Typed result model for transcript extraction.
//!
//! Everything the pipeline produces lives here. The serialized field names
//! follow the registrar vocabulary consumed downstream (`codigo`, `mencao`,
//! `ano_periodo`, ...), so an `ExtractionResult` marshals to the same JSON
//! shape the owning service already speaks. Registrar sentinel strings
//! (`--`, `-`) never survive into these types; absence is `Option`.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Credit-hours per academic credit on SIGAA transcripts.
pub const HOURS_PER_CREDIT: u32 = 15;

/// An academic term label of the form `YYYY.N` (year and half, 1 or 2).
///
/// Periods order year-major, so `2024.1 < 2024.2 < 2025.1`:
///
/// ```
/// use sigaa_historico::records::Period;
///
/// let earlier = Period::new(2023, 2);
/// let later = Period::new(2024, 1);
/// assert!(earlier < later);
/// assert_eq!(later.to_string(), "2024.1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Period {
    /// Calendar year.
    pub year: u16,
    /// Half-year number (1 or 2 on current transcripts).
    pub number: u8,
}

impl Period {
    /// Create a period from its parts.
    pub fn new(year: u16, number: u8) -> Self {
        Self { year, number }
    }

    /// Parse a `YYYY.N` label. Returns `None` for anything else.
    pub fn parse(s: &str) -> Option<Self> {
        let (year, number) = s.trim().split_once('.')?;
        if year.len() != 4 || number.len() != 1 {
            return None;
        }
        Some(Self {
            year: year.parse().ok()?,
            number: number.parse().ok()?,
        })
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.year, self.number)
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("not a YYYY.N period label: '{s}'"))
    }
}

impl Serialize for Period {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Registrar status of one course attempt.
///
/// The superset of the codes printed by every transcript generation; older
/// layouts omit some of these from their own column but the engine accepts
/// all nine everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourseStatus {
    /// `MATR` - currently enrolled.
    #[serde(rename = "MATR")]
    Enrolled,
    /// `APR` - approved.
    #[serde(rename = "APR")]
    Approved,
    /// `REP` - failed by grade.
    #[serde(rename = "REP")]
    FailedByGrade,
    /// `REPF` - failed by absence.
    #[serde(rename = "REPF")]
    FailedByAbsence,
    /// `REPMF` - failed by grade and absence.
    #[serde(rename = "REPMF")]
    FailedByGradeAndAbsence,
    /// `CANC` - enrollment cancelled.
    #[serde(rename = "CANC")]
    Cancelled,
    /// `DISP` - exempted.
    #[serde(rename = "DISP")]
    Exempted,
    /// `TRANC` - locked by the student.
    #[serde(rename = "TRANC")]
    Locked,
    /// `CUMP` - requirement credited through an equivalent course.
    #[serde(rename = "CUMP")]
    EquivalenceCredited,
}

impl CourseStatus {
    /// Resolve an uppercase registrar code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "MATR" => Some(Self::Enrolled),
            "APR" => Some(Self::Approved),
            "REP" => Some(Self::FailedByGrade),
            "REPF" => Some(Self::FailedByAbsence),
            "REPMF" => Some(Self::FailedByGradeAndAbsence),
            "CANC" => Some(Self::Cancelled),
            "DISP" => Some(Self::Exempted),
            "TRANC" => Some(Self::Locked),
            "CUMP" => Some(Self::EquivalenceCredited),
            _ => None,
        }
    }

    /// The registrar code for this status.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Enrolled => "MATR",
            Self::Approved => "APR",
            Self::FailedByGrade => "REP",
            Self::FailedByAbsence => "REPF",
            Self::FailedByGradeAndAbsence => "REPMF",
            Self::Cancelled => "CANC",
            Self::Exempted => "DISP",
            Self::Locked => "TRANC",
            Self::EquivalenceCredited => "CUMP",
        }
    }

    /// Whether this status represents a concluded attempt that counts toward
    /// the semester progression metric. Exemptions (`DISP`) do not count.
    pub fn is_completed(&self) -> bool {
        matches!(
            self,
            Self::Approved
                | Self::FailedByGrade
                | Self::FailedByAbsence
                | Self::FailedByGradeAndAbsence
                | Self::EquivalenceCredited
        )
    }
}

impl fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Coarse letter grade printed instead of (or alongside) a numeric grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mention {
    /// Superior.
    SS,
    /// Medium-superior.
    MS,
    /// Medium.
    MM,
    /// Medium-inferior.
    MI,
    /// Inferior.
    II,
    /// No coursework registered.
    SR,
}

impl Mention {
    /// Resolve a printed mention code. The `-`/`---` placeholders and
    /// anything unknown map to `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "SS" => Some(Self::SS),
            "MS" => Some(Self::MS),
            "MM" => Some(Self::MM),
            "MI" => Some(Self::MI),
            "II" => Some(Self::II),
            "SR" => Some(Self::SR),
            _ => None,
        }
    }

    /// Whether this mention marks an administrative non-completion.
    ///
    /// Records carrying one of these must not appear as graded attempts:
    /// `II` (disqualified by absence), `MI` (insufficient average), `SR`
    /// (no coursework registered).
    pub fn is_excluded(&self) -> bool {
        matches!(self, Self::II | Self::MI | Self::SR)
    }
}

impl fmt::Display for Mention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Self::SS => "SS",
            Self::MS => "MS",
            Self::MM => "MM",
            Self::MI => "MI",
            Self::II => "II",
            Self::SR => "SR",
        };
        f.write_str(code)
    }
}

/// One course attempt extracted from the transcript body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Course code, alphabetic prefix + numeric suffix (`MAT0025`).
    #[serde(rename = "codigo")]
    pub code: String,
    /// Cleaned course name.
    #[serde(rename = "nome")]
    pub name: String,
    /// Registrar status.
    pub status: CourseStatus,
    /// Letter grade, when one was printed.
    #[serde(rename = "mencao")]
    pub mention: Option<Mention>,
    /// Credit-hours.
    #[serde(rename = "carga_horaria")]
    pub hours: u32,
    /// Derived credits, `hours / 15` rounded down.
    #[serde(rename = "creditos")]
    pub credits: u32,
    /// Term the course was taken in.
    #[serde(rename = "ano_periodo")]
    pub period: Period,
    /// Instructor name, when annotated.
    #[serde(rename = "professor")]
    pub instructor: Option<String>,
    /// Class-section code (`AA`, `01`).
    #[serde(rename = "turma")]
    pub section: Option<String>,
    /// Attendance percentage, when printed.
    #[serde(rename = "frequencia")]
    pub attendance: Option<f32>,
    /// Numeric grade. The supported layouts print a mention instead, so this
    /// stays absent; the field exists for downstream shape compatibility.
    #[serde(rename = "nota")]
    pub grade: Option<f32>,
    /// Course-nature legend symbol (`*`, `e`, `#`, ...), when annotated.
    #[serde(rename = "prefixo")]
    pub nature: Option<char>,
}

/// Enrollment state of a pending curriculum requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PendingStatus {
    /// Not yet attempted.
    #[serde(rename = "PENDENTE")]
    Pending,
    /// Currently enrolled (directly or in an equivalent course).
    #[serde(rename = "MATR")]
    Enrolled,
}

/// A curriculum requirement not yet satisfied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingCourse {
    /// Cleaned course name.
    #[serde(rename = "nome")]
    pub name: String,
    /// Required credit-hours.
    #[serde(rename = "carga_horaria")]
    pub hours: u32,
    /// Course code.
    #[serde(rename = "codigo")]
    pub code: String,
    /// Whether the student is already enrolled toward this requirement.
    pub status: PendingStatus,
    /// Verbatim enrollment-state suffix from the transcript, e.g.
    /// `Matriculado em Equivalente`.
    #[serde(rename = "observacao", skip_serializing_if = "Option::is_none", default)]
    pub annotation: Option<String>,
}

/// A requirement discharged by completing a different, equivalent course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquivalenceGrant {
    /// Code of the requirement that was satisfied.
    #[serde(rename = "cumpriu")]
    pub satisfied_code: String,
    /// Name of the satisfied requirement.
    #[serde(rename = "nome_cumpriu")]
    pub satisfied_name: String,
    /// Hour load of the satisfied requirement.
    #[serde(rename = "ch_cumpriu")]
    pub satisfied_hours: u32,
    /// Code of the course that granted the equivalence.
    #[serde(rename = "atraves_de")]
    pub granting_code: String,
    /// Name of the granting course.
    #[serde(rename = "nome_equivalente")]
    pub granting_name: String,
    /// Hour load of the granting course.
    #[serde(rename = "ch_equivalente")]
    pub granting_hours: u32,
}

/// A term during which enrollment was suspended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuspensionPeriod(pub Period);

/// Document-level summary fields. Absent fields simply did not match any
/// detector pattern; that is not an error.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentSummary {
    /// Degree program name.
    #[serde(rename = "curso")]
    pub program: Option<String>,
    /// Curriculum-matrix admission period.
    #[serde(rename = "matriz_curricular")]
    pub curriculum: Option<Period>,
    /// Weighted grade average (MP).
    #[serde(rename = "media_ponderada")]
    pub weighted_average: Option<f64>,
    /// Academic performance index (IRA).
    #[serde(rename = "ira")]
    pub performance_index: Option<f64>,
    /// Term the student is currently attending.
    #[serde(rename = "semestre_atual")]
    pub current_semester: Option<Period>,
    /// Number of semesters progressed, including the one in course.
    #[serde(rename = "numero_semestre")]
    pub semester_count: Option<u32>,
}

impl DocumentSummary {
    /// True when no detector found anything.
    pub fn is_empty(&self) -> bool {
        self.program.is_none()
            && self.curriculum.is_none()
            && self.weighted_average.is_none()
            && self.performance_index.is_none()
            && self.current_semester.is_none()
            && self.semester_count.is_none()
    }
}

/// Everything extracted from one document. Created fresh per extraction
/// call; no lifecycle beyond it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Course attempts, in document order.
    #[serde(rename = "disciplinas")]
    pub courses: Vec<CourseRecord>,
    /// Pending curriculum requirements, in document order.
    #[serde(rename = "pendentes")]
    pub pending: Vec<PendingCourse>,
    /// Equivalence grants, in document order.
    #[serde(rename = "equivalencias")]
    pub equivalences: Vec<EquivalenceGrant>,
    /// Enrollment suspensions, in document order.
    #[serde(rename = "suspensoes")]
    pub suspensions: Vec<SuspensionPeriod>,
    /// Summary fields, flattened into the top-level wire object.
    #[serde(flatten)]
    pub summary: DocumentSummary,
    /// Raw occurrence count per status code over the whole text, in
    /// first-occurrence order.
    #[serde(rename = "pendencias")]
    pub status_tally: IndexMap<CourseStatus, u32>,
    /// Records dropped by the mention exclusion rule.
    #[serde(rename = "ignoradas")]
    pub discarded: u32,
}

impl ExtractionResult {
    /// True when every extractor came back empty and nothing was discarded.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
            && self.pending.is_empty()
            && self.equivalences.is_empty()
            && self.suspensions.is_empty()
            && self.summary.is_empty()
            && self.status_tally.is_empty()
            && self.discarded == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_parse_and_display() {
        let p = Period::parse("2023.2").unwrap();
        assert_eq!(p, Period::new(2023, 2));
        assert_eq!(p.to_string(), "2023.2");
    }

    #[test]
    fn test_period_rejects_malformed_labels() {
        assert_eq!(Period::parse("2023"), None);
        assert_eq!(Period::parse("23.1"), None);
        assert_eq!(Period::parse("2023.12"), None);
        assert_eq!(Period::parse("--"), None);
        assert_eq!(Period::parse("2023,1"), None);
    }

    #[test]
    fn test_period_orders_year_major() {
        assert!(Period::new(2023, 2) < Period::new(2024, 1));
        assert!(Period::new(2024, 1) < Period::new(2024, 2));
        let max = [
            Period::new(2022, 2),
            Period::new(2024, 1),
            Period::new(2023, 2),
        ]
        .into_iter()
        .max();
        assert_eq!(max, Some(Period::new(2024, 1)));
    }

    #[test]
    fn test_period_serializes_as_label() {
        let json = serde_json::to_string(&Period::new(2024, 1)).unwrap();
        assert_eq!(json, "\"2024.1\"");
        let back: Period = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Period::new(2024, 1));
    }

    #[test]
    fn test_status_code_round_trip() {
        for code in ["MATR", "APR", "REP", "REPF", "REPMF", "CANC", "DISP", "TRANC", "CUMP"] {
            let status = CourseStatus::from_code(code).unwrap();
            assert_eq!(status.code(), code);
        }
        assert_eq!(CourseStatus::from_code("CURS"), None);
        assert_eq!(CourseStatus::from_code("apr"), None);
    }

    #[test]
    fn test_completed_statuses() {
        assert!(CourseStatus::Approved.is_completed());
        assert!(CourseStatus::FailedByGrade.is_completed());
        assert!(CourseStatus::FailedByAbsence.is_completed());
        assert!(CourseStatus::FailedByGradeAndAbsence.is_completed());
        assert!(CourseStatus::EquivalenceCredited.is_completed());
        assert!(!CourseStatus::Enrolled.is_completed());
        assert!(!CourseStatus::Cancelled.is_completed());
        assert!(!CourseStatus::Exempted.is_completed());
        assert!(!CourseStatus::Locked.is_completed());
    }

    #[test]
    fn test_mention_exclusion_set() {
        assert!(Mention::II.is_excluded());
        assert!(Mention::MI.is_excluded());
        assert!(Mention::SR.is_excluded());
        assert!(!Mention::SS.is_excluded());
        assert!(!Mention::MS.is_excluded());
        assert!(!Mention::MM.is_excluded());
    }

    #[test]
    fn test_mention_placeholder_maps_to_absent() {
        assert_eq!(Mention::from_code("-"), None);
        assert_eq!(Mention::from_code("---"), None);
        assert_eq!(Mention::from_code("MM"), Some(Mention::MM));
    }

    #[test]
    fn test_record_serializes_with_registrar_field_names() {
        let record = CourseRecord {
            code: "MAT0025".to_string(),
            name: "CALCULO 1".to_string(),
            status: CourseStatus::Approved,
            mention: Some(Mention::MS),
            hours: 90,
            credits: 6,
            period: Period::new(2023, 1),
            instructor: Some("LUIZA YOKO".to_string()),
            section: Some("AA".to_string()),
            attendance: Some(92.0),
            grade: None,
            nature: Some('*'),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["codigo"], "MAT0025");
        assert_eq!(json["mencao"], "MS");
        assert_eq!(json["ano_periodo"], "2023.1");
        assert_eq!(json["carga_horaria"], 90);
        assert_eq!(json["creditos"], 6);
        assert_eq!(json["prefixo"], "*");
        assert_eq!(json["nota"], serde_json::Value::Null);
    }

    #[test]
    fn test_result_flattens_summary_to_original_wire_shape() {
        let result = ExtractionResult {
            summary: DocumentSummary {
                program: Some("ENGENHARIA DE SOFTWARE".to_string()),
                performance_index: Some(4.2),
                ..Default::default()
            },
            ..Default::default()
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["curso"], "ENGENHARIA DE SOFTWARE");
        assert_eq!(json["ira"], 4.2);
        assert!(json.get("summary").is_none());
        assert_eq!(json["ignoradas"], 0);
    }

    #[test]
    fn test_empty_result_detection() {
        let mut result = ExtractionResult::default();
        assert!(result.is_empty());
        result.discarded = 1;
        assert!(!result.is_empty());
    }
}
