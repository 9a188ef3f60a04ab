//! DOM implementations of the rendering ports.
//!
//! Element roles:
//! - `#lang-toggle`, `#theme-toggle`: toggle controls
//! - `[data-lang="zh"]`, `[data-lang="en"]`: per-language content
//! - `#search-results`: search output container
//!
//! Every role is optional; a missing element skips that update.

use altru_docs_client::{PreferenceView, ResultsView, language_display, results_markup};
use altru_docs_core::{Lang, PageEntry, Theme};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

pub const LANG_TOGGLE_ID: &str = "lang-toggle";
pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const SEARCH_INPUT_ID: &str = "search-input";
pub const SEARCH_RESULTS_ID: &str = "search-results";

/// Applies preferences to the live document.
pub struct DomPreferenceView {
    document: Document,
}

impl DomPreferenceView {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn set_display_for(&self, element_lang: Lang, active: Lang) {
        let selector = format!("[data-lang=\"{}\"]", element_lang.code());
        for element in query_all(&self.document, &selector) {
            let Ok(element) = element.dyn_into::<HtmlElement>() else {
                continue;
            };
            let display = language_display(element_lang, active);
            if let Err(e) = element.style().set_property("display", display) {
                tracing::debug!(?e, "failed to set display");
            }
        }
    }
}

impl PreferenceView for DomPreferenceView {
    fn apply_language_visuals(&mut self, lang: Lang) {
        if let Some(body) = self.document.body() {
            let classes = body.class_list();
            for candidate in Lang::ALL {
                if let Err(e) = classes.toggle_with_force(candidate.body_class(), candidate == lang)
                {
                    tracing::debug!(?e, "failed to toggle body class");
                }
            }
        }

        if let Some(toggle) = self.document.get_element_by_id(LANG_TOGGLE_ID) {
            toggle.set_text_content(Some(lang.toggle_label()));
        }

        for element_lang in Lang::ALL {
            self.set_display_for(element_lang, lang);
        }
    }

    fn apply_theme_visuals(&mut self, theme: Theme) {
        if let Some(root) = self.document.document_element() {
            if let Err(e) = root.set_attribute("data-theme", theme.code()) {
                tracing::debug!(?e, "failed to set data-theme");
            }
            if let Err(e) = root
                .class_list()
                .toggle_with_force("dark", theme == Theme::Dark)
            {
                tracing::debug!(?e, "failed to toggle dark class");
            }
        }

        if let Some(toggle) = self.document.get_element_by_id(THEME_TOGGLE_ID) {
            toggle.set_text_content(Some(theme.toggle_icon()));
        }
    }
}

/// Writes search results into `#search-results`.
pub struct DomResultsView {
    document: Document,
}

impl DomResultsView {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl ResultsView for DomResultsView {
    fn render_results(&mut self, results: &[&PageEntry]) {
        let Some(container) = self.document.get_element_by_id(SEARCH_RESULTS_ID) else {
            return;
        };
        container.set_inner_html(&results_markup(results));
    }
}

/// Elements matching `selector`; an invalid selector yields none.
pub(crate) fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|idx| nodes.item(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
