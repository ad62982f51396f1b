//! File storage for native builds

use std::fs;
use std::path::Path;

use crate::calc::Document;
use crate::persistence::{self, Result};

/// Write the exported document to `path`
pub fn save_to_path(doc: &Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let bytes = persistence::export_document(doc)?;
    fs::write(path, bytes)?;
    log::info!("Saved {} semesters to {}", doc.semesters.len(), path.display());
    Ok(())
}

/// Read `path` and replace `doc` with its contents; `doc` is untouched on error
pub fn load_from_path(doc: &mut Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    persistence::replace_from_import(doc, &bytes)?;
    log::info!("Loaded {}", path.display());
    Ok(())
}
