//! Altru Docs WASM Runtime
//!
//! Browser-side behaviour of the documentation site, compiled to
//! WebAssembly.
//!
//! # Features
//!
//! - **Preferences**: language and theme resolved from local storage, the
//!   browser locale and the OS color scheme, applied on load and on toggle
//! - **Fallback search**: keyword filter over the page catalog rendered into
//!   `#search-results`
//! - **Anchors**: smooth scrolling for in-page links
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { fallbackSearch, toggleTheme } from 'altru-docs-wasm';
//!
//! await init(); // resolves preferences and wires the page
//!
//! fallbackSearch('memory'); // renders two results
//! toggleTheme();            // "dark"
//! ```

pub mod dom;
pub mod events;
pub mod host;
pub mod page;
pub mod storage;

use std::{cell::RefCell, rc::Rc};

use altru_docs_client::{FallbackSearch, SearchQuery};
use altru_docs_core::{Config, Lang, PageEntry};
pub use page::Page;
use wasm_bindgen::{JsCast, closure::Closure, prelude::*};

thread_local! {
    static PAGE: RefCell<Option<Rc<Page>>> = const { RefCell::new(None) };
}

/// Initialize the WASM module.
///
/// Sets up the panic hook and console logging, then mounts the page once
/// the DOM is ready.
#[wasm_bindgen(start)]
pub fn init() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    // A logger may already be installed by an embedding page.
    let _ = console_log::init_with_level(log::Level::Info);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))?;

    if document.ready_state() == "loading" {
        let on_ready = Closure::once(move || {
            if let Err(e) = mount() {
                log::error!("failed to mount page: {e:?}");
            }
        });
        document.add_event_listener_with_callback(
            "DOMContentLoaded",
            on_ready.as_ref().unchecked_ref(),
        )?;
        on_ready.forget();
        Ok(())
    } else {
        mount()
    }
}

fn mount() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let config = site_config()?;
    let page = Page::mount(&window, &config)?;
    PAGE.with(|slot| *slot.borrow_mut() = Some(page));
    Ok(())
}

fn site_config() -> Result<Config, JsValue> {
    Config::bundled().map_err(|e| JsValue::from_str(&e.to_string()))
}

fn with_page<R>(f: impl FnOnce(&Page) -> R) -> Option<R> {
    let page = PAGE.with(|slot| slot.borrow().clone())?;
    Some(f(&page))
}

/// Run the fallback search and render into `#search-results`.
///
/// Returns the number of matches, or `undefined` when the query is too
/// short or the page is not mounted.
#[wasm_bindgen(js_name = fallbackSearch)]
pub fn fallback_search(query: &str) -> Option<usize> {
    with_page(|page| page.search(query)).flatten()
}

/// Matching catalog entries as `{ title, url, lang }` objects, without
/// rendering.
#[wasm_bindgen(js_name = searchCatalog)]
pub fn search_catalog(query: &str) -> Result<JsValue, JsValue> {
    let entries = match with_page(|page| matching_entries(page.fallback_search(), query)) {
        Some(entries) => entries,
        None => {
            let config = site_config()?;
            let search = FallbackSearch::with_config(config.search.pages, &config.client);
            matching_entries(&search, query)
        }
    };

    serde_wasm_bindgen::to_value(&entries).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn matching_entries(search: &FallbackSearch, query: &str) -> Vec<PageEntry> {
    let query = SearchQuery::parse(query);
    search
        .filter(&query)
        .map(|matches| matches.cloned().collect())
        .unwrap_or_default()
}

/// Apply and persist a language (`"zh"` or `"en"`).
#[wasm_bindgen(js_name = setLanguage)]
pub fn set_language(lang: &str) -> Result<(), JsValue> {
    let lang: Lang = lang
        .parse()
        .map_err(|e: altru_docs_core::CoreError| JsValue::from_str(&e.to_string()))?;
    with_page(|page| page.set_language(lang));
    Ok(())
}

/// Switch to the other language; returns the new language code.
#[wasm_bindgen(js_name = toggleLanguage)]
pub fn toggle_language() -> Option<String> {
    with_page(|page| page.toggle_language().code().to_string())
}

/// Flip the theme; returns the new theme name.
#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() -> Option<String> {
    with_page(|page| page.toggle_theme().code().to_string())
}

/// Currently applied language code.
#[wasm_bindgen(js_name = currentLanguage)]
pub fn current_language() -> Option<String> {
    with_page(|page| page.language())
        .flatten()
        .map(|lang| lang.code().to_string())
}

/// Currently applied theme name.
#[wasm_bindgen(js_name = currentTheme)]
pub fn current_theme() -> Option<String> {
    with_page(|page| page.theme())
        .flatten()
        .map(|theme| theme.code().to_string())
}

/// Get the version of the runtime.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
