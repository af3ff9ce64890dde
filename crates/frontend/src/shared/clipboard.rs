//! Запись текста в системный буфер обмена (Web Clipboard API).

use wasm_bindgen_futures::{spawn_local, JsFuture};

/// Копирует текст как есть и вызывает `on_success` после записи.
/// Ошибка записи только логируется.
pub fn copy_to_clipboard<F>(text: &str, on_success: F)
where
    F: FnOnce() + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        let Some(window) = web_sys::window() else {
            log::warn!("clipboard: no window object");
            return;
        };
        let clipboard = window.navigator().clipboard();
        match JsFuture::from(clipboard.write_text(&text)).await {
            Ok(_) => on_success(),
            Err(e) => log::warn!("clipboard write failed: {:?}", e),
        }
    });
}
