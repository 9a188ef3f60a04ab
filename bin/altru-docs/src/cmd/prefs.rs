//! Prefs command - resolve language and theme like a page load would

use std::path::Path;

use altru_docs_client::{HeadlessView, HostHints, MemoryStore, PreferenceController};
use altru_docs_core::{Config, Lang, Theme};
use color_eyre::eyre::{Result, WrapErr};

/// Simulated browser state.
#[derive(Debug, Clone, Default)]
pub struct PrefsInput {
    pub stored_lang: Option<String>,
    pub stored_theme: Option<String>,
    pub locale: Option<String>,
    pub prefers_dark: bool,
    pub path: String,
}

/// Outcome of a simulated page load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub lang: Lang,
    pub theme: Theme,
    pub toggle_label: Option<String>,
    pub theme_icon: Option<String>,
}

/// Run the prefs command.
pub fn run(config_path: &Path, input: &PrefsInput) -> Result<()> {
    let config = Config::load_with_env(config_path).wrap_err("Failed to load configuration")?;
    let resolution = resolve(&config, input);

    println!("Language:      {}", resolution.lang);
    println!("Theme:         {}", resolution.theme);
    if let Some(label) = &resolution.toggle_label {
        println!("Toggle label:  {label}");
    }
    if let Some(icon) = &resolution.theme_icon {
        println!("Theme icon:    {icon}");
    }

    Ok(())
}

/// Initialize a controller over an in-memory store seeded from `input`.
pub fn resolve(config: &Config, input: &PrefsInput) -> Resolution {
    let client = &config.client;
    let mut seeded = Vec::new();
    if let Some(lang) = &input.stored_lang {
        seeded.push((client.language_key.as_str(), lang.as_str()));
    }
    if let Some(theme) = &input.stored_theme {
        seeded.push((client.theme_key.as_str(), theme.as_str()));
    }

    let mut controller = PreferenceController::new(
        MemoryStore::with_entries(seeded),
        HeadlessView::with_elements(Lang::ALL),
        client,
    )
    .with_default_language(config.default_language_for_path(&input.path));

    let (lang, theme) = controller.initialize(&HostHints {
        locale: input.locale.clone(),
        prefers_dark: input.prefers_dark,
    });

    let view = controller.view();
    Resolution {
        lang,
        theme,
        toggle_label: view.language_toggle.clone(),
        theme_icon: view.theme_toggle.clone(),
    }
}
