//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Window;

use crate::core::error::ClipboardError;
use crate::utils::validate_redirect_url;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Set `document.title`.
pub fn set_document_title(title: &str) {
    if let Some(document) = window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

/// Best-effort readable message from a thrown JS value.
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| "unknown error".to_string())
}

// =============================================================================
// External Links
// =============================================================================

/// Open `url` in a new tab if it passes redirect validation.
///
/// Blocked URLs are reported on the console and not opened.
pub fn open_external(url: &str) {
    match validate_redirect_url(url) {
        Ok(url) => {
            if let Some(window) = window()
                && let Err(e) = window.open_with_url_and_target(&url, "_blank")
            {
                web_sys::console::warn_1(
                    &format!("failed to open {}: {}", url, js_error_message(&e)).into(),
                );
            }
        }
        Err(e) => {
            web_sys::console::warn_1(&format!("blocked link {}: {}", url, e).into());
        }
    }
}

// =============================================================================
// Clipboard
// =============================================================================

/// Write plain text with `navigator.clipboard.writeText`.
///
/// Looked up through `Reflect` so insecure contexts (where `clipboard` is
/// undefined) produce [`ClipboardError::Unavailable`] instead of a JS throw.
pub async fn write_clipboard_text(text: &str) -> Result<(), ClipboardError> {
    let window = window().ok_or(ClipboardError::NoWindow)?;
    let navigator = window.navigator();

    let clipboard = Reflect::get(&navigator, &"clipboard".into())
        .ok()
        .filter(|c| !c.is_undefined() && !c.is_null())
        .ok_or(ClipboardError::Unavailable)?;
    let write_text = Reflect::get(&clipboard, &"writeText".into())
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
        .ok_or(ClipboardError::Unavailable)?;

    let promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| ClipboardError::Rejected(js_error_message(&e)))?
        .dyn_into::<Promise>()
        .map_err(|_| ClipboardError::Unavailable)?;

    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| ClipboardError::Rejected(js_error_message(&e)))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_window_available() {
        assert!(window().is_some());
    }

    #[wasm_bindgen_test]
    fn test_set_document_title() {
        set_document_title("t2ne test");
        let title = window()
            .and_then(|w| w.document())
            .map(|d| d.title())
            .unwrap_or_default();
        assert_eq!(title, "t2ne test");
    }

    #[wasm_bindgen_test]
    fn test_js_error_message() {
        assert_eq!(js_error_message(&JsValue::from_str("boom")), "boom");
        let err = js_sys::Error::new("denied");
        assert_eq!(js_error_message(&err.into()), "denied");
        assert_eq!(js_error_message(&JsValue::NULL), "unknown error");
    }
}
