//! Grading scales and their fixed grade → point tables

use serde::{Deserialize, Serialize};

/// 10-point table, in the order grades are offered
const TEN_POINT: &[(&str, f64)] = &[
    ("O", 10.0),
    ("A+", 9.0),
    ("A", 8.0),
    ("B+", 7.0),
    ("B", 6.0),
    ("C", 5.0),
    ("P", 4.0),
    ("F", 0.0),
];

/// 4-point (GPA) table, in the order grades are offered
const FOUR_POINT: &[(&str, f64)] = &[
    ("A", 4.0),
    ("A-", 3.7),
    ("B+", 3.3),
    ("B", 3.0),
    ("B-", 2.7),
    ("C+", 2.3),
    ("C", 2.0),
    ("D", 1.0),
    ("F", 0.0),
];

/// Active grading scale of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GradingScale {
    #[default]
    #[serde(rename = "10")]
    TenPoint,
    #[serde(rename = "4")]
    FourPoint,
}

impl GradingScale {
    pub const ALL: [GradingScale; 2] = [GradingScale::TenPoint, GradingScale::FourPoint];

    /// Wire identifier (`"10"` / `"4"`)
    pub fn as_str(&self) -> &'static str {
        match self {
            GradingScale::TenPoint => "10",
            GradingScale::FourPoint => "4",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "10" => Some(GradingScale::TenPoint),
            "4" => Some(GradingScale::FourPoint),
            _ => None,
        }
    }

    /// Label shown in the scale selector
    pub fn label(&self) -> &'static str {
        match self {
            GradingScale::TenPoint => "10-Point Scale",
            GradingScale::FourPoint => "4-Point Scale (GPA)",
        }
    }

    /// Highest attainable point value ("out of N")
    pub fn max_points(&self) -> f64 {
        match self {
            GradingScale::TenPoint => 10.0,
            GradingScale::FourPoint => 4.0,
        }
    }

    /// Grade table in display order
    pub fn table(&self) -> &'static [(&'static str, f64)] {
        match self {
            GradingScale::TenPoint => TEN_POINT,
            GradingScale::FourPoint => FOUR_POINT,
        }
    }
}

impl std::fmt::Display for GradingScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Point value of `grade` under `scale`, `None` for empty or unknown keys
pub fn points_of(scale: GradingScale, grade: &str) -> Option<f64> {
    if grade.is_empty() {
        return None;
    }
    scale
        .table()
        .iter()
        .find(|(key, _)| *key == grade)
        .map(|(_, points)| *points)
}

/// One entry of the grade selector
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeOption {
    pub grade: &'static str,
    pub points: f64,
    /// e.g. `A+ (9)` or `A- (3.7)`
    pub label: String,
}

/// Selector entries for `scale`, in display order
pub fn grade_options(scale: GradingScale) -> Vec<GradeOption> {
    scale
        .table()
        .iter()
        .map(|&(grade, points)| GradeOption {
            grade,
            points,
            // f64 Display drops a trailing ".0", matching how the points are shown
            label: format!("{} ({})", grade, points),
        })
        .collect()
}
