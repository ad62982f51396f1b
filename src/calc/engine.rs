//! SGPA / CGPA calculation
//!
//! Pure functions over the document tree. Subjects that lack usable credits or
//! a grade mapped by the active scale are skipped, never reported.

use serde::Serialize;

use super::model::{Document, Semester, Subject};
use super::scale::{GradingScale, points_of};

/// Running credit-weighted sums
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    /// Σ credits of counted subjects
    pub credits: f64,
    /// Σ credits × points of counted subjects
    pub points: f64,
}

impl Totals {
    /// Add a subject if it is countable under `scale`
    pub fn add(&mut self, subject: &Subject, scale: GradingScale) {
        if let Some((credits, points)) = countable(subject, scale) {
            self.credits += credits;
            self.points += credits * points;
        }
    }

    pub fn over<'a>(subjects: impl IntoIterator<Item = &'a Subject>, scale: GradingScale) -> Self {
        let mut totals = Self::default();
        for subject in subjects {
            totals.add(subject, scale);
        }
        totals
    }

    /// Weighted average, 0.0 when nothing counted
    pub fn average(&self) -> f64 {
        if self.credits > 0.0 {
            self.points / self.credits
        } else {
            0.0
        }
    }
}

/// Credits and point value of a subject that counts toward averages
pub fn countable(subject: &Subject, scale: GradingScale) -> Option<(f64, f64)> {
    let credits = subject.credits.value().filter(|c| *c != 0.0 && !c.is_nan())?;
    let points = points_of(scale, &subject.grade)?;
    Some((credits, points))
}

pub fn is_countable(subject: &Subject, scale: GradingScale) -> bool {
    countable(subject, scale).is_some()
}

/// Credit-weighted average of one semester
pub fn sgpa(semester: &Semester, scale: GradingScale) -> f64 {
    Totals::over(&semester.subjects, scale).average()
}

/// Credit-weighted average over every subject of every semester
pub fn cgpa(doc: &Document) -> f64 {
    Totals::over(doc.subjects(), doc.grade_system).average()
}

pub fn sgpa_string(semester: &Semester, scale: GradingScale) -> String {
    format_gpa(sgpa(semester, scale))
}

pub fn cgpa_string(doc: &Document) -> String {
    format_gpa(cgpa(doc))
}

/// Fixed two decimals, e.g. `7.14`
pub fn format_gpa(value: f64) -> String {
    format!("{:.2}", value)
}

/// Per-semester line of a summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SemesterSummary {
    pub id: u32,
    pub name: String,
    pub sgpa: String,
    /// Counted credits
    pub credits: f64,
}

/// Everything the page shows about a document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub cgpa: String,
    /// Scale maximum ("out of N")
    pub out_of: String,
    pub scale: &'static str,
    pub credits: f64,
    pub semesters: Vec<SemesterSummary>,
}

impl Summary {
    pub fn of(doc: &Document) -> Self {
        let scale = doc.grade_system;
        let semesters = doc
            .semesters
            .iter()
            .map(|sem| {
                let totals = Totals::over(&sem.subjects, scale);
                SemesterSummary {
                    id: sem.id,
                    name: sem.name.clone(),
                    sgpa: format_gpa(totals.average()),
                    credits: totals.credits,
                }
            })
            .collect();
        let totals = Totals::over(doc.subjects(), scale);

        Self {
            cgpa: format_gpa(totals.average()),
            out_of: scale.max_points().to_string(),
            scale: scale.label(),
            credits: totals.credits,
            semesters,
        }
    }
}
