//! Rendering ports.
//!
//! Resolution and filtering logic talks to the page only through these
//! traits. The browser binding implements them over the DOM;
//! [`HeadlessView`] implements them over plain fields.

use altru_docs_core::{Lang, PageEntry, Theme};

/// Literal placeholder rendered for an empty result set.
pub const NO_RESULTS_MARKUP: &str = r#"<div class="no-results">No results found</div>"#;

/// Applies preference state to the page.
pub trait PreferenceView {
    /// Body marker, per-language element visibility and toggle label.
    fn apply_language_visuals(&mut self, lang: Lang);

    /// Theme marker and toggle glyph.
    fn apply_theme_visuals(&mut self, theme: Theme);
}

/// Displays search results.
pub trait ResultsView {
    fn render_results(&mut self, results: &[&PageEntry]);
}

/// Inline `display` value for an element tagged `element_lang` while
/// `active` is the applied language.
pub fn language_display(element_lang: Lang, active: Lang) -> &'static str {
    if element_lang == active { "inline" } else { "none" }
}

/// Markup for a result set. Titles and URLs are inserted verbatim.
pub fn results_markup(results: &[&PageEntry]) -> String {
    if results.is_empty() {
        return NO_RESULTS_MARKUP.to_string();
    }

    let mut html = String::from(r#"<ul class="search-results-list">"#);
    for entry in results {
        html.push_str(&format!(
            r#"<li><a href="{}">{}</a></li>"#,
            entry.url, entry.title
        ));
    }
    html.push_str("</ul>");
    html
}

/// An element tagged with `data-lang`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedElement {
    pub lang: Lang,
    pub display: Option<&'static str>,
}

/// Page state without a document: what a rendered page would show.
#[derive(Debug, Clone, Default)]
pub struct HeadlessView {
    /// Active language body class, if any was applied.
    pub body_class: Option<&'static str>,
    /// Elements tagged with a language.
    pub elements: Vec<TaggedElement>,
    /// Language toggle label; `None` when the page has no toggle.
    pub language_toggle: Option<String>,
    /// Applied theme marker.
    pub theme: Option<Theme>,
    /// Theme toggle glyph; `None` when the page has no toggle.
    pub theme_toggle: Option<String>,
    /// Contents of the result container; `None` until the first render.
    pub results: Option<String>,
    /// Number of result renders.
    pub renders: usize,
}

impl HeadlessView {
    /// A page with both toggle controls and the given tagged elements.
    pub fn with_elements(langs: impl IntoIterator<Item = Lang>) -> Self {
        Self {
            elements: langs
                .into_iter()
                .map(|lang| TaggedElement {
                    lang,
                    display: None,
                })
                .collect(),
            language_toggle: Some(String::new()),
            theme_toggle: Some(String::new()),
            ..Self::default()
        }
    }

    /// Languages whose tagged elements are currently shown.
    pub fn visible_languages(&self) -> Vec<Lang> {
        let mut langs = Vec::new();
        for element in self.elements.iter().filter(|el| el.display != Some("none")) {
            if !langs.contains(&element.lang) {
                langs.push(element.lang);
            }
        }
        langs
    }
}

impl PreferenceView for HeadlessView {
    fn apply_language_visuals(&mut self, lang: Lang) {
        self.body_class = Some(lang.body_class());
        for element in &mut self.elements {
            element.display = Some(language_display(element.lang, lang));
        }
        if let Some(label) = self.language_toggle.as_mut() {
            *label = lang.toggle_label().to_string();
        }
    }

    fn apply_theme_visuals(&mut self, theme: Theme) {
        self.theme = Some(theme);
        if let Some(icon) = self.theme_toggle.as_mut() {
            *icon = theme.toggle_icon().to_string();
        }
    }
}

impl ResultsView for HeadlessView {
    fn render_results(&mut self, results: &[&PageEntry]) {
        self.results = Some(results_markup(results));
        self.renders += 1;
    }
}
