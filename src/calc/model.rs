//! Document tree: semesters holding subjects
//!
//! Everything that is exported/imported lives here.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::scale::GradingScale;

/// Credit weight of a subject, parsed once when entered
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Credits {
    /// Nothing entered yet
    #[default]
    Blank,
    /// A finite number (zero and negatives are kept as entered)
    Amount(f64),
    /// Text that does not parse as a number, kept verbatim
    Invalid(String),
}

impl Credits {
    /// Parse user text; surrounding whitespace is ignored
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Credits::Blank;
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Credits::Amount(value),
            _ => Credits::Invalid(text.to_string()),
        }
    }

    /// Numeric value, if any
    pub fn value(&self) -> Option<f64> {
        match self {
            Credits::Amount(value) => Some(*value),
            Credits::Blank | Credits::Invalid(_) => None,
        }
    }
}

impl From<f64> for Credits {
    fn from(value: f64) -> Self {
        if value.is_finite() {
            Credits::Amount(value)
        } else {
            Credits::Invalid(value.to_string())
        }
    }
}

impl Serialize for Credits {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Credits::Blank => serializer.serialize_str(""),
            Credits::Amount(value) => serializer.serialize_f64(*value),
            Credits::Invalid(text) => serializer.serialize_str(text),
        }
    }
}

/// Credits arrive either as numbers or as the raw text of an input field
#[derive(Deserialize)]
#[serde(untagged)]
enum RawCredits {
    Number(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Credits {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<RawCredits>::deserialize(deserializer)? {
            None => Credits::Blank,
            Some(RawCredits::Number(value)) => Credits::from(value),
            Some(RawCredits::Text(text)) => Credits::parse(&text),
        })
    }
}

/// Treat an explicit `null` like an absent field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One graded course
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Subject {
    /// Unique within its semester
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub credits: Credits,
    /// Key into the active scale; empty when unset. Not rewritten on scale change.
    #[serde(default, deserialize_with = "null_as_default")]
    pub grade: String,
}

impl Subject {
    /// Blank subject with the given id
    pub fn blank(id: u32) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    pub fn new(id: u32, name: &str, credits: impl Into<Credits>, grade: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            credits: credits.into(),
            grade: grade.to_string(),
        }
    }
}

/// A named group of subjects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Semester {
    /// Unique within the document
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Display order
    #[serde(default, deserialize_with = "null_as_default")]
    pub subjects: Vec<Subject>,
}

impl Semester {
    /// Fresh semester named `Semester {id}` with one blank subject
    pub fn new(id: u32) -> Self {
        Self {
            id,
            name: format!("Semester {}", id),
            subjects: vec![Subject::blank(1)],
        }
    }

    pub fn subject_mut(&mut self, sub_id: u32) -> Option<&mut Subject> {
        self.subjects.iter_mut().find(|s| s.id == sub_id)
    }

    /// Id for the next subject: max existing id + 1, or 1 when empty.
    /// `None` once the largest id is `u32::MAX`.
    pub fn next_subject_id(&self) -> Option<u32> {
        next_id(self.subjects.iter().map(|s| s.id))
    }
}

/// Root of the exportable state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub semesters: Vec<Semester>,
    #[serde(rename = "gradeSystem")]
    pub grade_system: GradingScale,
}

impl Default for Document {
    fn default() -> Self {
        Self::with_scale(GradingScale::default())
    }
}

impl Document {
    /// One semester with one blank subject, graded on `scale`
    pub fn with_scale(scale: GradingScale) -> Self {
        Self {
            semesters: vec![Semester::new(1)],
            grade_system: scale,
        }
    }

    pub fn semester(&self, sem_id: u32) -> Option<&Semester> {
        self.semesters.iter().find(|s| s.id == sem_id)
    }

    pub fn semester_mut(&mut self, sem_id: u32) -> Option<&mut Semester> {
        self.semesters.iter_mut().find(|s| s.id == sem_id)
    }

    /// Id for the next semester: max existing id + 1, or 1 when empty.
    /// `None` once the largest id is `u32::MAX`.
    pub fn next_semester_id(&self) -> Option<u32> {
        next_id(self.semesters.iter().map(|s| s.id))
    }

    /// Every subject across every semester, in display order
    pub fn subjects(&self) -> impl Iterator<Item = &Subject> {
        self.semesters.iter().flat_map(|s| s.subjects.iter())
    }
}

fn next_id(ids: impl Iterator<Item = u32>) -> Option<u32> {
    ids.max().unwrap_or(0).checked_add(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credits_parse() {
        assert_eq!(Credits::parse(""), Credits::Blank);
        assert_eq!(Credits::parse("   "), Credits::Blank);
        assert_eq!(Credits::parse("4"), Credits::Amount(4.0));
        assert_eq!(Credits::parse(" 3.5 "), Credits::Amount(3.5));
        assert_eq!(Credits::parse("0"), Credits::Amount(0.0));
        assert_eq!(Credits::parse("-2"), Credits::Amount(-2.0));
        assert_eq!(Credits::parse("abc"), Credits::Invalid("abc".to_string()));
        assert_eq!(Credits::parse("NaN"), Credits::Invalid("NaN".to_string()));
        assert_eq!(Credits::parse("inf"), Credits::Invalid("inf".to_string()));
    }

    #[test]
    fn test_credits_wire_forms() {
        assert_eq!(serde_json::to_string(&Credits::Blank).unwrap(), "\"\"");
        assert_eq!(serde_json::to_string(&Credits::Amount(3.0)).unwrap(), "3.0");
        assert_eq!(
            serde_json::to_string(&Credits::Invalid("x".into())).unwrap(),
            "\"x\""
        );

        let c: Credits = serde_json::from_str("\"4\"").unwrap();
        assert_eq!(c, Credits::Amount(4.0));
        let c: Credits = serde_json::from_str("2.5").unwrap();
        assert_eq!(c, Credits::Amount(2.5));
        let c: Credits = serde_json::from_str("null").unwrap();
        assert_eq!(c, Credits::Blank);
        let c: Credits = serde_json::from_str("\"\"").unwrap();
        assert_eq!(c, Credits::Blank);
    }

    #[test]
    fn test_default_document() {
        let doc = Document::default();
        assert_eq!(doc.grade_system, GradingScale::TenPoint);
        assert_eq!(doc.semesters.len(), 1);
        assert_eq!(doc.semesters[0].id, 1);
        assert_eq!(doc.semesters[0].name, "Semester 1");
        assert_eq!(doc.semesters[0].subjects, vec![Subject::blank(1)]);
    }

    #[test]
    fn test_next_ids() {
        let mut doc = Document::default();
        doc.semesters.push(Semester::new(7));
        assert_eq!(doc.next_semester_id(), Some(8));

        doc.semesters.clear();
        assert_eq!(doc.next_semester_id(), Some(1));

        let mut sem = Semester::new(1);
        sem.subjects.push(Subject::blank(4));
        assert_eq!(sem.next_subject_id(), Some(5));
        sem.subjects.clear();
        assert_eq!(sem.next_subject_id(), Some(1));
    }

    #[test]
    fn test_next_ids_exhausted() {
        let mut doc = Document::default();
        doc.semesters.push(Semester::new(u32::MAX));
        assert_eq!(doc.next_semester_id(), None);

        let mut sem = Semester::new(1);
        sem.subjects.push(Subject::blank(u32::MAX));
        assert_eq!(sem.next_subject_id(), None);
    }

    #[test]
    fn test_null_fields_default() {
        let sub: Subject =
            serde_json::from_str(r#"{"id": null, "name": null, "credits": null, "grade": null}"#)
                .unwrap();
        assert_eq!(sub, Subject::blank(0));

        let sem: Semester =
            serde_json::from_str(r#"{"id": 4, "name": null, "subjects": null}"#).unwrap();
        assert_eq!(sem.name, "");
        assert!(sem.subjects.is_empty());
    }

    #[test]
    fn test_subject_missing_fields_default() {
        let sub: Subject = serde_json::from_str(r#"{"id": 3}"#).unwrap();
        assert_eq!(sub, Subject::blank(3));
    }

    #[test]
    fn test_document_field_names() {
        let json = serde_json::to_value(Document::default()).unwrap();
        assert!(json.get("semesters").is_some());
        assert_eq!(json.get("gradeSystem").and_then(|v| v.as_str()), Some("10"));
    }
}
