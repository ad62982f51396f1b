//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Writing an export to durable storage (file on disk, download in browser)
//! - Reading a user-selected file back for import

#[cfg(not(target_arch = "wasm32"))]
pub mod native;
#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(not(target_arch = "wasm32"))]
pub use native::{load_from_path, save_to_path};
