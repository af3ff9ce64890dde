//! Открытие HTML документа в новой вкладке через временный blob URL.

use web_sys::{Blob, BlobPropertyBag, Url};

/// Временный object URL. Освобождается при drop.
pub struct ObjectUrl(String);

impl ObjectUrl {
    pub fn from_blob(blob: &Blob) -> Result<Self, String> {
        Url::create_object_url_with_blob(blob)
            .map(Self)
            .map_err(|e| format!("Failed to create object URL: {:?}", e))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        if let Err(e) = Url::revoke_object_url(&self.0) {
            log::warn!("Failed to revoke object URL: {:?}", e);
        }
    }
}

/// Создает Blob с HTML документом
fn create_html_blob(content: &str) -> Result<Blob, String> {
    let parts = js_sys::Array::new();
    parts.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/html");

    Blob::new_with_str_sequence_and_options(&parts, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Открывает документ в новом контексте просмотра без доступа к opener.
/// URL освобождается сразу после вызова `window.open`.
pub fn open_html_in_new_tab(document: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let blob = create_html_blob(document)?;
    let url = ObjectUrl::from_blob(&blob)?;

    window
        .open_with_url_and_target_and_features(url.as_str(), "_blank", "noopener,noreferrer")
        .map_err(|e| format!("Failed to open new tab: {:?}", e))?;

    Ok(())
}
