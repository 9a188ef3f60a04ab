//! A mounted documentation page.

use std::{cell::RefCell, rc::Rc};

use altru_docs_client::{FallbackSearch, PreferenceController};
use altru_docs_core::{Config, Lang, Theme};
use wasm_bindgen::JsValue;
use web_sys::Window;

use crate::{
    dom::{DomPreferenceView, DomResultsView},
    events, host,
    storage::LocalStorageStore,
};

type DomPreferences = PreferenceController<LocalStorageStore, DomPreferenceView>;

/// Preference controller and search bound to the live document.
pub struct Page {
    prefs: RefCell<DomPreferences>,
    search: FallbackSearch,
    results: RefCell<DomResultsView>,
}

impl Page {
    /// Resolve and apply preferences, then attach event handlers.
    ///
    /// Handlers are attached only after the initial pass completes.
    pub fn mount(window: &Window, config: &Config) -> Result<Rc<Self>, JsValue> {
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))?;
        let path = host::pathname(window);

        let mut prefs = PreferenceController::new(
            LocalStorageStore::from_window(window),
            DomPreferenceView::new(document.clone()),
            &config.client,
        )
        .with_default_language(config.default_language_for_path(&path));
        prefs.initialize(&host::hints(window));

        let page = Rc::new(Self {
            prefs: RefCell::new(prefs),
            search: FallbackSearch::with_config(config.search.pages.clone(), &config.client),
            results: RefCell::new(DomResultsView::new(document.clone())),
        });

        events::attach(&document, &page);
        host::report_page_view(window, config.client.analytics_hook(), &path);

        tracing::info!(%path, "page mounted");
        Ok(page)
    }

    pub fn set_language(&self, lang: Lang) {
        self.prefs.borrow_mut().set_language(lang);
    }

    pub fn toggle_language(&self) -> Lang {
        self.prefs.borrow_mut().toggle_language()
    }

    pub fn toggle_theme(&self) -> Theme {
        self.prefs.borrow_mut().toggle_theme()
    }

    pub fn language(&self) -> Option<Lang> {
        self.prefs.borrow().language()
    }

    pub fn theme(&self) -> Option<Theme> {
        self.prefs.borrow().theme()
    }

    /// Run the fallback search into `#search-results`.
    pub fn search(&self, query: &str) -> Option<usize> {
        self.search.search(query, &mut *self.results.borrow_mut())
    }

    pub fn fallback_search(&self) -> &FallbackSearch {
        &self.search
    }
}
