//! CGPA Calc - semester and cumulative grade point calculator
//!
//! Core modules:
//! - `calc`: Document model, grading scales, edits and SGPA/CGPA calculation
//! - `persistence`: JSON export/import with all-or-nothing replacement
//! - `platform`: Native file storage and browser bindings
//! - `settings`: User preferences

pub mod calc;
pub mod persistence;
pub mod platform;
pub mod settings;

pub use calc::{Document, Edit, GradingScale, Semester, Subject, SubjectField, Summary};
pub use persistence::{PersistenceError, export_document, import_document};
pub use settings::Settings;
