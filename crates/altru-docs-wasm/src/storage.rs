//! `window.localStorage` backed preference store.

use altru_docs_client::{PreferencesStore, StoreError};
use wasm_bindgen::JsValue;
use web_sys::{Storage, Window};

/// Preference store over the browser's local storage.
///
/// Storage can be missing (privacy modes, sandboxed iframes); reads then
/// yield nothing and writes report [`StoreError::Unavailable`].
pub struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    pub fn from_window(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                tracing::warn!(error = %js_error_text(&e), "local storage unavailable");
                None
            }
        };
        Self { storage }
    }
}

impl PreferencesStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| StoreError::Unavailable("window.localStorage".to_string()))?;

        storage
            .set_item(key, value)
            .map_err(|e| StoreError::Rejected {
                key: key.to_string(),
                message: js_error_text(&e),
            })
    }
}

/// Best-effort text of a thrown JS value.
pub(crate) fn js_error_text(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
