//! Export/import of the whole document as pretty-printed JSON
//!
//! Features:
//! - Stable field order (`semesters`, then `gradeSystem`)
//! - Shape check before decoding
//! - All-or-nothing replacement on import

pub mod validation;

use thiserror::Error;

use crate::calc::Document;

/// Default file name offered for exports
pub const DEFAULT_EXPORT_FILENAME: &str = "cgpa_data.json";

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not encode document: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Invalid file format: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("Invalid file format: missing `{0}`")]
    MissingField(&'static str),

    #[error("Invalid file format: {0}")]
    Shape(#[source] serde_json::Error),
}

impl PersistenceError {
    /// Whether the failure came from the imported content rather than storage
    pub fn is_invalid_format(&self) -> bool {
        matches!(
            self,
            PersistenceError::Malformed(_)
                | PersistenceError::MissingField(_)
                | PersistenceError::Shape(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, PersistenceError>;

/// Serialize a document to UTF-8 JSON bytes
pub fn export_document(doc: &Document) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(doc).map_err(PersistenceError::Encode)
}

/// Parse exported bytes back into a document
///
/// Ids and the at-least-one invariants are not checked; any object carrying
/// non-empty `semesters` and `gradeSystem` that decodes is accepted.
pub fn import_document(bytes: &[u8]) -> Result<Document> {
    let root: serde_json::Value =
        serde_json::from_slice(bytes).map_err(PersistenceError::Malformed)?;

    if let Some(field) = validation::missing_field(&root) {
        return Err(PersistenceError::MissingField(field));
    }

    serde_json::from_value(root).map_err(PersistenceError::Shape)
}

/// Replace `doc` with the imported document, or leave it untouched on error
pub fn replace_from_import(doc: &mut Document, bytes: &[u8]) -> Result<()> {
    match import_document(bytes) {
        Ok(imported) => {
            log::info!(
                "Imported {} semesters ({}-point scale)",
                imported.semesters.len(),
                imported.grade_system
            );
            *doc = imported;
            Ok(())
        }
        Err(e) => {
            log::warn!("Import rejected: {}", e);
            Err(e)
        }
    }
}
