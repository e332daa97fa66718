//! Record and summary extraction from reconstructed transcript text.
//!
//! The course-record state machine walks the line sequence; the auxiliary
//! extractors (pending courses, equivalence grants, suspensions, status
//! tally) and the summary detectors each make one independent pass over the
//! full text. None of them share state, and any of them may come back empty
//! without affecting the others.

pub mod courses;
pub mod equivalence;
pub mod pending;
pub mod summary;
pub mod suspension;
pub mod tally;

pub use courses::{scan_courses, CourseScan, LayoutDetector, LayoutMatch, LAYOUT_DETECTORS};
pub use equivalence::extract_equivalences;
pub use pending::extract_pending;
pub use summary::extract_summary;
pub use suspension::extract_suspensions;
pub use tally::tally_statuses;
