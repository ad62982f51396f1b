//! Structural edits on a document
//!
//! Removing the last semester, or the last subject of a semester, is ignored
//! rather than reported. Edits addressing unknown ids are ignored as well.

use super::model::{Credits, Document, Semester, Subject};
use super::scale::GradingScale;

/// Editable field of a subject
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectField {
    Name,
    Credits,
    Grade,
}

impl SubjectField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubjectField::Name => "name",
            SubjectField::Credits => "credits",
            SubjectField::Grade => "grade",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "name" => Some(SubjectField::Name),
            "credits" => Some(SubjectField::Credits),
            "grade" => Some(SubjectField::Grade),
            _ => None,
        }
    }
}

/// One user-triggered change, as dispatched by the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    AddSemester,
    RemoveSemester { sem_id: u32 },
    RenameSemester { sem_id: u32, name: String },
    AddSubject { sem_id: u32 },
    RemoveSubject { sem_id: u32, sub_id: u32 },
    UpdateSubject {
        sem_id: u32,
        sub_id: u32,
        field: SubjectField,
        value: String,
    },
    SetGradeSystem(GradingScale),
}

impl Document {
    /// Append a new semester and return its id; `None` when ids are exhausted
    pub fn add_semester(&mut self) -> Option<u32> {
        let id = self.next_semester_id()?;
        self.semesters.push(Semester::new(id));
        Some(id)
    }

    /// Remove a semester unless it is the only one left
    pub fn remove_semester(&mut self, sem_id: u32) -> bool {
        if !self.can_remove_semester() {
            return false;
        }
        let before = self.semesters.len();
        self.semesters.retain(|s| s.id != sem_id);
        self.semesters.len() != before
    }

    pub fn rename_semester(&mut self, sem_id: u32, name: &str) -> bool {
        match self.semester_mut(sem_id) {
            Some(sem) if sem.name != name => {
                sem.name = name.to_string();
                true
            }
            _ => false,
        }
    }

    /// Append a blank subject to a semester and return its id
    pub fn add_subject(&mut self, sem_id: u32) -> Option<u32> {
        let sem = self.semester_mut(sem_id)?;
        let id = sem.next_subject_id()?;
        sem.subjects.push(Subject::blank(id));
        Some(id)
    }

    /// Remove a subject unless it is the only one in its semester
    pub fn remove_subject(&mut self, sem_id: u32, sub_id: u32) -> bool {
        let Some(sem) = self.semester_mut(sem_id) else {
            return false;
        };
        if sem.subjects.len() <= 1 {
            return false;
        }
        let before = sem.subjects.len();
        sem.subjects.retain(|s| s.id != sub_id);
        sem.subjects.len() != before
    }

    /// Replace a single field of one subject
    pub fn update_subject(
        &mut self,
        sem_id: u32,
        sub_id: u32,
        field: SubjectField,
        value: &str,
    ) -> bool {
        let Some(sub) = self
            .semester_mut(sem_id)
            .and_then(|sem| sem.subject_mut(sub_id))
        else {
            return false;
        };
        match field {
            SubjectField::Name => sub.name = value.to_string(),
            SubjectField::Credits => sub.credits = Credits::parse(value),
            SubjectField::Grade => sub.grade = value.to_string(),
        }
        true
    }

    /// Switch scale; stored grades are left as they are
    pub fn set_grade_system(&mut self, scale: GradingScale) -> bool {
        let changed = self.grade_system != scale;
        self.grade_system = scale;
        changed
    }

    pub fn can_remove_semester(&self) -> bool {
        self.semesters.len() > 1
    }

    pub fn can_remove_subject(&self, sem_id: u32) -> bool {
        self.semester(sem_id)
            .map(|sem| sem.subjects.len() > 1)
            .unwrap_or(false)
    }
}

/// Apply one edit; returns whether the document changed
pub fn apply(doc: &mut Document, edit: &Edit) -> bool {
    let changed = match edit {
        Edit::AddSemester => doc.add_semester().is_some(),
        Edit::RemoveSemester { sem_id } => doc.remove_semester(*sem_id),
        Edit::RenameSemester { sem_id, name } => doc.rename_semester(*sem_id, name),
        Edit::AddSubject { sem_id } => doc.add_subject(*sem_id).is_some(),
        Edit::RemoveSubject { sem_id, sub_id } => doc.remove_subject(*sem_id, *sub_id),
        Edit::UpdateSubject {
            sem_id,
            sub_id,
            field,
            value,
        } => doc.update_subject(*sem_id, *sub_id, *field, value),
        Edit::SetGradeSystem(scale) => doc.set_grade_system(*scale),
    };

    if changed {
        log::debug!("Applied {:?}", edit);
    } else {
        log::trace!("Ignored {:?}", edit);
    }
    changed
}
