//! Reads what the browser reports about the user, and the analytics hook.

use altru_docs_client::HostHints;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;

use crate::storage::js_error_text;

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Locale and color-scheme hints for the initial resolution pass.
pub fn hints(window: &Window) -> HostHints {
    let prefers_dark = window
        .match_media(DARK_SCHEME_QUERY)
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false);

    HostHints {
        locale: window.navigator().language(),
        prefers_dark,
    }
}

/// Path of the current page, `/` when unknown.
pub fn pathname(window: &Window) -> String {
    window
        .location()
        .pathname()
        .unwrap_or_else(|_| "/".to_string())
}

/// Call `window[function_name]("page_view", path)` if it is a function.
/// A blank name skips the call.
///
/// Returns whether the hook was called successfully.
pub fn report_page_view(window: &Window, function_name: Option<&str>, path: &str) -> bool {
    let Some(name) = function_name.filter(|name| !name.is_empty()) else {
        return false;
    };

    let hook = js_sys::Reflect::get(window, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.dyn_into::<js_sys::Function>().ok());
    let Some(hook) = hook else {
        tracing::debug!(name, "analytics hook not present");
        return false;
    };

    match hook.call2(
        &JsValue::NULL,
        &JsValue::from_str("page_view"),
        &JsValue::from_str(path),
    ) {
        Ok(_) => true,
        Err(e) => {
            tracing::debug!(name, error = %js_error_text(&e), "analytics hook threw");
            false
        }
    }
}
