//! Browser bindings
//!
//! The page owns one `Calculator` and calls into it from its event handlers;
//! every method runs to completion before the next handler fires.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::calc::{Document, GradingScale, SubjectField, Summary, grade_options};
use crate::persistence;
use crate::settings::Settings;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("CGPA calculator loaded");
}

/// Delay before an export's object URL is released
const REVOKE_DELAY_MS: i32 = 1_000;

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse_scale(scale: &str) -> Result<GradingScale, JsError> {
    GradingScale::from_str(scale)
        .ok_or_else(|| JsError::new(&format!("Unknown grade system: {}", scale)))
}

/// Document handle exposed to the page
#[wasm_bindgen]
pub struct Calculator {
    doc: Document,
    settings: Settings,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Calculator {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Calculator {
        let settings = Settings::load();
        Self {
            doc: settings.new_document(),
            settings,
        }
    }

    pub fn add_semester(&mut self) -> Option<u32> {
        let id = self.doc.add_semester();
        log::debug!("Added semester {:?}", id);
        id
    }

    pub fn remove_semester(&mut self, sem_id: u32) -> bool {
        self.doc.remove_semester(sem_id)
    }

    pub fn rename_semester(&mut self, sem_id: u32, name: &str) -> bool {
        self.doc.rename_semester(sem_id, name)
    }

    pub fn add_subject(&mut self, sem_id: u32) -> Option<u32> {
        self.doc.add_subject(sem_id)
    }

    pub fn remove_subject(&mut self, sem_id: u32, sub_id: u32) -> bool {
        self.doc.remove_subject(sem_id, sub_id)
    }

    /// `field` is one of `name`, `credits`, `grade`
    pub fn update_subject(
        &mut self,
        sem_id: u32,
        sub_id: u32,
        field: &str,
        value: &str,
    ) -> Result<bool, JsError> {
        let field = SubjectField::from_str(field)
            .ok_or_else(|| JsError::new(&format!("Unknown subject field: {}", field)))?;
        Ok(self.doc.update_subject(sem_id, sub_id, field, value))
    }

    pub fn can_remove_semester(&self) -> bool {
        self.doc.can_remove_semester()
    }

    pub fn can_remove_subject(&self, sem_id: u32) -> bool {
        self.doc.can_remove_subject(sem_id)
    }

    pub fn grade_system(&self) -> String {
        self.doc.grade_system.as_str().to_string()
    }

    pub fn set_grade_system(&mut self, scale: &str) -> Result<bool, JsError> {
        Ok(self.doc.set_grade_system(parse_scale(scale)?))
    }

    /// Remember `scale` as the starting scale for new sessions
    pub fn set_default_scale(&mut self, scale: &str) -> Result<(), JsError> {
        self.settings.default_scale = parse_scale(scale)?;
        self.settings.save();
        Ok(())
    }

    /// Document tree as JSON, in the export layout
    pub fn document(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&self.doc)?)
    }

    /// CGPA and per-semester SGPA as JSON
    pub fn summary(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&Summary::of(&self.doc))?)
    }

    /// Grade selector entries for the active scale as JSON
    pub fn grade_options(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&grade_options(self.doc.grade_system))?)
    }

    /// Offer the exported document as a file download
    pub fn export_download(&self) -> Result<(), JsValue> {
        let bytes = persistence::export_document(&self.doc).map_err(js_err)?;
        let text = String::from_utf8(bytes).map_err(js_err)?;

        let parts = js_sys::Array::of1(&JsValue::from_str(&text));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("application/json");
        let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob)?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let link: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
        link.set_href(&url);
        link.set_download(self.settings.export_filename());
        link.click();

        // Revoking in the same tick can cancel the download in some browsers
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let revoke = Closure::once_into_js(move || {
            let _ = web_sys::Url::revoke_object_url(&url);
        });
        window.set_timeout_with_callback_and_timeout_and_arguments_0(
            revoke.unchecked_ref(),
            REVOKE_DELAY_MS,
        )?;

        log::info!("Exported {}", self.settings.export_filename());
        Ok(())
    }

    /// Replace the document with imported text; on error nothing changes
    pub fn import_text(&mut self, text: &str) -> Result<(), JsError> {
        persistence::replace_from_import(&mut self.doc, text.as_bytes())?;
        Ok(())
    }
}

/// Read a user-selected file; pass the result to `Calculator::import_text`
#[wasm_bindgen]
pub async fn read_file_text(file: web_sys::File) -> Result<String, JsValue> {
    let text = JsFuture::from(file.text()).await?;
    text.as_string()
        .ok_or_else(|| JsValue::from_str("file did not read as text"))
}
