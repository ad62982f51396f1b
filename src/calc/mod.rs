//! Grade point calculation core
//!
//! All document logic lives here. This module must stay pure:
//! - No I/O or platform dependencies
//! - Edits mutate an explicitly owned `Document`
//! - Averages are derived on demand, never stored

pub mod edit;
pub mod engine;
pub mod model;
pub mod scale;

pub use edit::{Edit, SubjectField, apply};
pub use engine::{
    SemesterSummary, Summary, Totals, cgpa, cgpa_string, countable, format_gpa, is_countable,
    sgpa, sgpa_string,
};
pub use model::{Credits, Document, Semester, Subject};
pub use scale::{GradeOption, GradingScale, grade_options, points_of};
