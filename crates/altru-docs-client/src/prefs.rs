//! Language and theme preference controller.
//!
//! Resolution order:
//! - language: stored value → browser locale → deployment default
//! - theme: stored value → OS dark-mode preference → light

use altru_docs_core::{ClientConfig, Lang, Theme};

use crate::{store::PreferencesStore, view::PreferenceView};

/// What the host environment reports about the user, read once at load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostHints {
    /// Browser-reported locale tag, e.g. `zh-CN`.
    pub locale: Option<String>,

    /// Whether the OS asks for a dark color scheme.
    pub prefers_dark: bool,
}

/// Derives, applies and persists the effective language and theme.
pub struct PreferenceController<S, V> {
    store: S,
    view: V,
    language_key: String,
    theme_key: String,
    default_language: Lang,
    language: Option<Lang>,
    theme: Option<Theme>,
}

impl<S: PreferencesStore, V: PreferenceView> PreferenceController<S, V> {
    /// Create a controller using the storage keys and default language from
    /// `client`.
    pub fn new(store: S, view: V, client: &ClientConfig) -> Self {
        Self {
            store,
            view,
            language_key: client.language_key.clone(),
            theme_key: client.theme_key.clone(),
            default_language: client.default_language,
            language: None,
            theme: None,
        }
    }

    /// Override the fallback language for this entry point.
    pub fn with_default_language(mut self, lang: Lang) -> Self {
        self.default_language = lang;
        self
    }

    /// Run the initial resolve-then-apply pass.
    ///
    /// The resolved language is persisted; the resolved theme is only
    /// applied, so an unset theme keeps following the OS.
    pub fn initialize(&mut self, hints: &HostHints) -> (Lang, Theme) {
        let lang = self.resolve_language(hints.locale.as_deref());
        self.set_language(lang);

        let theme = self.resolve_theme(hints.prefers_dark);
        self.apply_theme(theme);

        tracing::debug!(%lang, %theme, "preferences initialized");
        (lang, theme)
    }

    /// Effective language: stored, then browser locale, then default.
    pub fn resolve_language(&self, browser_locale: Option<&str>) -> Lang {
        if let Some(stored) = self.store.get(&self.language_key) {
            match stored.parse::<Lang>() {
                Ok(lang) => return lang,
                Err(e) => tracing::debug!(error = %e, "ignoring stored language"),
            }
        }

        browser_locale
            .and_then(Lang::from_locale_tag)
            .unwrap_or(self.default_language)
    }

    /// Show `lang` on the page without persisting it.
    pub fn apply_language(&mut self, lang: Lang) {
        self.view.apply_language_visuals(lang);
        self.language = Some(lang);
    }

    /// Apply and persist `lang`.
    pub fn set_language(&mut self, lang: Lang) {
        self.apply_language(lang);
        let key = self.language_key.clone();
        self.persist(&key, lang.code());
    }

    /// Switch to the other language.
    pub fn toggle_language(&mut self) -> Lang {
        let next = self.language.unwrap_or(self.default_language).other();
        self.set_language(next);
        next
    }

    /// Effective theme: stored, then OS preference, then light.
    pub fn resolve_theme(&self, prefers_dark: bool) -> Theme {
        if let Some(stored) = self.store.get(&self.theme_key) {
            match stored.parse::<Theme>() {
                Ok(theme) => return theme,
                Err(e) => tracing::debug!(error = %e, "ignoring stored theme"),
            }
        }

        Theme::from_prefers_dark(prefers_dark)
    }

    pub fn apply_theme(&mut self, theme: Theme) {
        self.view.apply_theme_visuals(theme);
        self.theme = Some(theme);
    }

    /// Flip the applied theme and persist the result.
    pub fn toggle_theme(&mut self) -> Theme {
        let next = self.theme.unwrap_or_default().toggled();
        self.apply_theme(next);
        let key = self.theme_key.clone();
        self.persist(&key, next.code());
        next
    }

    /// Currently applied language.
    pub fn language(&self) -> Option<Lang> {
        self.language
    }

    /// Currently applied theme.
    pub fn theme(&self) -> Option<Theme> {
        self.theme
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    fn persist(&mut self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value) {
            tracing::warn!(error = %e, key, "preference not persisted");
        }
    }
}
