//! Site configuration management.
//!
//! Mirrors the declarative document the site generator consumes (locales,
//! navigation, sidebar, theme metadata) and adds the `[client]` settings the
//! browser scripts read.

use std::{collections::BTreeMap, path::Path};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::{
    catalog::{PageEntry, builtin_catalog},
    error::{CoreError, Result},
    preference::Lang,
};

/// The site configuration shipped with the repository.
pub const BUNDLED_SITE_TOML: &str = include_str!("../../../site.toml");

/// Prefix of environment variables overriding file settings.
pub const ENV_PREFIX: &str = "ALTRU_DOCS";

/// Key of the locale served from the site root.
pub const ROOT_LOCALE: &str = "root";

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteConfig,

    /// Browser-side preference and search settings.
    #[serde(default)]
    pub client: ClientConfig,

    /// Fallback search settings.
    #[serde(default)]
    pub search: SearchConfig,

    /// Locale roots keyed by locale id (`root`, `zh`, ...).
    #[serde(default)]
    pub locales: BTreeMap<String, LocaleConfig>,

    /// Global theme metadata.
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,

    /// Site description for meta tags.
    #[serde(default)]
    pub description: Option<String>,
}

/// Settings for the in-page preference controller and search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Language used when neither storage nor the browser decides.
    #[serde(default = "default_language")]
    pub default_language: Lang,

    /// Local storage key holding the language preference.
    #[serde(default = "default_language_key")]
    pub language_key: String,

    /// Local storage key holding the theme preference.
    #[serde(default = "default_theme_key")]
    pub theme_key: String,

    /// Minimum trimmed query length, in characters, before searching.
    #[serde(default = "default_search_min_chars")]
    pub search_min_chars: usize,

    /// Name of the optional global analytics function. An empty name
    /// disables the page-view call.
    #[serde(default = "default_analytics_function")]
    pub analytics_function: Option<String>,
}

/// Fallback search configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Pages searched by the fallback search, in result order.
    #[serde(default = "builtin_catalog")]
    pub pages: Vec<PageEntry>,
}

/// One locale root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleConfig {
    /// Label shown in the locale switcher.
    pub label: String,

    /// Language of pages under this root.
    pub lang: Lang,

    /// URL prefix of this locale, e.g. `/zh/`.
    pub link: String,

    /// Top navigation bar.
    #[serde(default)]
    pub nav: Vec<NavLink>,

    /// Sidebar groups.
    #[serde(default)]
    pub sidebar: Vec<SidebarGroup>,
}

/// A navigation or sidebar link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub text: String,
    pub link: String,
}

/// A titled group of sidebar links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarGroup {
    pub text: String,
    #[serde(default)]
    pub items: Vec<NavLink>,
}

/// Global theme metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Logo path.
    #[serde(default)]
    pub logo: Option<String>,

    #[serde(default)]
    pub social_links: Vec<SocialLink>,

    #[serde(default)]
    pub footer: Option<FooterConfig>,
}

/// A social link in the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub icon: String,
    pub link: String,
}

/// Footer text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterConfig {
    pub message: String,
    pub copyright: String,
}

// Default value functions
fn default_language() -> Lang {
    Lang::En
}

fn default_language_key() -> String {
    "preferred-lang".to_string()
}

fn default_theme_key() -> String {
    "preferred-theme".to_string()
}

fn default_search_min_chars() -> usize {
    2
}

fn default_analytics_function() -> Option<String> {
    Some("altruAnalytics".to_string())
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            language_key: default_language_key(),
            theme_key: default_theme_key(),
            search_min_chars: default_search_min_chars(),
            analytics_function: default_analytics_function(),
        }
    }
}

fn env_overrides() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX).separator("__")
}

impl ClientConfig {
    /// The analytics function to call, `None` when unset or blank.
    pub fn analytics_hook(&self) -> Option<&str> {
        self.analytics_function
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            pages: builtin_catalog(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML or YAML file, chosen by extension.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let is_yaml = matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("yaml" | "yml")
        );

        let config: Config = if is_yaml {
            serde_yaml::from_str(&content).map_err(|e| {
                CoreError::config_with_source(
                    format!("Failed to parse config file: {}", path.display()),
                    e,
                )
            })?
        } else {
            toml::from_str(&content).map_err(|e| {
                CoreError::config_with_source(
                    format!("Failed to parse config file: {}", path.display()),
                    e,
                )
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration using the config crate, with `ALTRU_DOCS__*`
    /// environment overrides.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        Self::load_layered(path, env_overrides())
    }

    fn load_layered(path: &Path, env: config::Environment) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(env)
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// The configuration shipped with the repository.
    pub fn bundled() -> Result<Self> {
        Self::from_toml_str(BUNDLED_SITE_TOML)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.site.title.is_empty() {
            return Err(CoreError::config("site.title cannot be empty"));
        }

        if !self.locales.contains_key(ROOT_LOCALE) {
            return Err(CoreError::config("locales.root is required"));
        }

        let mut seen_links = Vec::new();
        for (key, locale) in &self.locales {
            if !locale.link.starts_with('/') || !locale.link.ends_with('/') {
                return Err(CoreError::config(format!(
                    "locales.{key}.link must start and end with '/': {}",
                    locale.link
                )));
            }
            if seen_links.contains(&locale.link.as_str()) {
                return Err(CoreError::config(format!(
                    "locales.{key}.link is used by another locale: {}",
                    locale.link
                )));
            }
            seen_links.push(locale.link.as_str());

            for nav in &locale.nav {
                check_link(&format!("locales.{key}.nav"), nav)?;
            }
            for group in &locale.sidebar {
                if group.items.is_empty() {
                    return Err(CoreError::config(format!(
                        "locales.{key}.sidebar group '{}' has no items",
                        group.text
                    )));
                }
                for item in &group.items {
                    check_link(&format!("locales.{key}.sidebar"), item)?;
                }
            }
        }

        if self.client.search_min_chars == 0 {
            return Err(CoreError::config(
                "client.search_min_chars must be at least 1",
            ));
        }

        if self.client.language_key.is_empty() || self.client.theme_key.is_empty() {
            return Err(CoreError::config("client storage keys cannot be empty"));
        }

        if self.client.language_key == self.client.theme_key {
            return Err(CoreError::config(
                "client.language_key and client.theme_key must differ",
            ));
        }

        Ok(())
    }

    /// Non-fatal findings: incomplete translations and inconsistent links.
    pub fn lint(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        for (key, locale) in &self.locales {
            if locale.nav.is_empty() {
                warnings.push(format!("locales.{key} has no navigation links"));
            }
            for group in &locale.sidebar {
                for item in &group.items {
                    if item.link.starts_with('/') && !item.link.starts_with(&locale.link) {
                        warnings.push(format!(
                            "locales.{key}.sidebar link '{}' is outside {}",
                            item.link, locale.link
                        ));
                    }
                }
            }
        }

        if let Some(root) = self.locales.get(ROOT_LOCALE) {
            let root_shape = sidebar_shape(root);
            for (key, locale) in self.locales.iter().filter(|(k, _)| *k != ROOT_LOCALE) {
                if sidebar_shape(locale) != root_shape {
                    warnings.push(format!(
                        "locales.{key}.sidebar does not mirror the root sidebar"
                    ));
                }
            }
        }

        let mut langs: Vec<Lang> = self.locales.values().map(|l| l.lang).collect();
        langs.sort_by_key(|l| l.code());
        langs.dedup();
        if langs.len() != self.locales.len() {
            warnings.push("two locales share the same language".to_string());
        }

        if self.search.pages.is_empty() {
            warnings.push("search.pages is empty; fallback search never matches".to_string());
        }

        warnings
    }

    /// Locale whose link prefixes `path`; the longest prefix wins.
    pub fn locale_for_path(&self, path: &str) -> Option<&LocaleConfig> {
        self.locales
            .values()
            .filter(|locale| {
                path.starts_with(&locale.link) || path == locale.link.trim_end_matches('/')
            })
            .max_by_key(|locale| locale.link.len())
    }

    /// Default language for a page served at `path`.
    pub fn default_language_for_path(&self, path: &str) -> Lang {
        self.locale_for_path(path)
            .map(|locale| locale.lang)
            .unwrap_or(self.client.default_language)
    }

    /// The document handed to the site generator.
    pub fn to_generator_json(&self) -> Value {
        let mut locales = Map::new();
        for (key, locale) in &self.locales {
            let sidebar: Vec<Value> = locale
                .sidebar
                .iter()
                .map(|group| json!({ "text": group.text, "items": group.items }))
                .collect();
            let mut sidebar_by_root = Map::new();
            sidebar_by_root.insert(locale.link.clone(), Value::Array(sidebar));

            locales.insert(
                key.clone(),
                json!({
                    "label": locale.label,
                    "lang": locale.lang,
                    "link": locale.link,
                    "themeConfig": {
                        "nav": locale.nav,
                        "sidebar": sidebar_by_root,
                    },
                }),
            );
        }

        let mut theme = Map::new();
        if let Some(logo) = &self.theme.logo {
            theme.insert("logo".to_string(), json!(logo));
        }
        theme.insert("socialLinks".to_string(), json!(self.theme.social_links));
        if let Some(footer) = &self.theme.footer {
            theme.insert("footer".to_string(), json!(footer));
        }

        json!({
            "title": self.site.title,
            "description": self.site.description,
            "locales": locales,
            "themeConfig": theme,
        })
    }
}

fn check_link(context: &str, link: &NavLink) -> Result<()> {
    let valid = link.link.starts_with('/')
        || link.link.starts_with("https://")
        || link.link.starts_with("http://");
    if valid {
        Ok(())
    } else {
        Err(CoreError::config(format!(
            "{context} link '{}' must be an absolute path or http(s) URL: {}",
            link.text, link.link
        )))
    }
}

fn sidebar_shape(locale: &LocaleConfig) -> Vec<usize> {
    locale.sidebar.iter().map(|group| group.items.len()).collect()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn create_test_config() -> String {
        r#"
[site]
title = "Test Site"
description = "A test site"

[client]
default_language = "zh"
language_key = "lang"
theme_key = "theme"
search_min_chars = 3

[locales.root]
label = "English"
lang = "en"
link = "/en/"
nav = [{ text = "Home", link = "/en/" }]

[[locales.root.sidebar]]
text = "Introduction"
items = [{ text = "Quick Start", link = "/en/guide/quick-start" }]

[locales.zh]
label = "中文"
lang = "zh"
link = "/zh/"
nav = [{ text = "首页", link = "/zh/" }]

[[locales.zh.sidebar]]
text = "介绍"
items = [{ text = "快速开始", link = "/zh/guide/quick-start" }]

[theme]
logo = "/logo.png"
social_links = [{ icon = "github", link = "https://github.com/example/repo" }]
footer = { message = "MIT", copyright = "Copyright" }
"#
        .to_string()
    }

    fn minimal_config() -> &'static str {
        r#"
[site]
title = "Minimal Site"

[locales.root]
label = "English"
lang = "en"
link = "/en/"
"#
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("site.toml");
        let mut file = std::fs::File::create(&config_path).expect("create file");
        file.write_all(create_test_config().as_bytes())
            .expect("write");

        let config = Config::load(&config_path).expect("load config");

        assert_eq!(config.site.title, "Test Site");
        assert_eq!(config.client.default_language, Lang::Zh);
        assert_eq!(config.client.language_key, "lang");
        assert_eq!(config.client.search_min_chars, 3);
        assert_eq!(config.locales.len(), 2);
        assert_eq!(config.locales["zh"].sidebar[0].items[0].text, "快速开始");
        assert_eq!(config.theme.logo.as_deref(), Some("/logo.png"));
        assert!(config.lint().is_empty());
    }

    #[test]
    fn test_load_yaml_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("site.yaml");
        let yaml = r#"
site:
  title: YAML Site
locales:
  root:
    label: English
    lang: en
    link: /en/
"#;
        std::fs::write(&config_path, yaml).expect("write");

        let config = Config::load(&config_path).expect("load config");
        assert_eq!(config.site.title, "YAML Site");
        assert_eq!(config.locales["root"].lang, Lang::En);
    }

    #[test]
    fn test_load_with_env_overrides() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("site.toml");
        std::fs::write(&config_path, BUNDLED_SITE_TOML).expect("write");

        let config = Config::load_with_env(&config_path).expect("load config");
        assert_eq!(config.site.title, "Altru Programming Language");
        assert_eq!(config.locales["zh"].link, "/zh/");

        let vars = [
            ("ALTRU_DOCS__CLIENT__SEARCH_MIN_CHARS", "4"),
            ("ALTRU_DOCS__CLIENT__THEME_KEY", "site-theme"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        let config = Config::load_layered(&config_path, env_overrides().source(Some(vars)))
            .expect("load config");
        assert_eq!(config.client.search_min_chars, 4);
        assert_eq!(config.client.theme_key, "site-theme");
        assert_eq!(config.client.language_key, "preferred-lang");
    }

    #[test]
    fn test_load_with_env_rejects_invalid_override() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("site.toml");
        std::fs::write(&config_path, BUNDLED_SITE_TOML).expect("write");

        let vars = [(
            "ALTRU_DOCS__CLIENT__SEARCH_MIN_CHARS".to_string(),
            "0".to_string(),
        )]
        .into_iter()
        .collect();
        let result = Config::load_layered(&config_path, env_overrides().source(Some(vars)));
        assert!(result.is_err());

        let missing = Config::load_with_env(&dir.path().join("missing.toml"));
        assert!(missing.unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_analytics_hook() {
        let mut client = ClientConfig::default();
        assert_eq!(client.analytics_hook(), Some("altruAnalytics"));

        client.analytics_function = Some("  ".to_string());
        assert_eq!(client.analytics_hook(), None);

        let config = Config::from_toml_str(&format!(
            "{}\n[client]\nanalytics_function = \"\"\n",
            minimal_config()
        ))
        .expect("parse config");
        assert_eq!(config.client.analytics_hook(), None);
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_toml_str(minimal_config()).expect("parse config");

        assert_eq!(config.client.default_language, Lang::En);
        assert_eq!(config.client.language_key, "preferred-lang");
        assert_eq!(config.client.theme_key, "preferred-theme");
        assert_eq!(config.client.search_min_chars, 2);
        assert_eq!(
            config.client.analytics_function.as_deref(),
            Some("altruAnalytics")
        );
        assert_eq!(config.search.pages, builtin_catalog());
        assert!(config.theme.social_links.is_empty());
    }

    #[test]
    fn test_bundled_config() {
        let config = Config::bundled().expect("bundled config is valid");

        assert_eq!(config.site.title, "Altru Programming Language");
        assert_eq!(config.locales["root"].link, "/en/");
        assert_eq!(config.locales["zh"].link, "/zh/");

        for locale in config.locales.values() {
            assert_eq!(locale.sidebar.len(), 2);
            assert_eq!(locale.sidebar[0].items.len(), 3);
            assert_eq!(locale.sidebar[1].items.len(), 7);
        }
        assert_eq!(
            config.locales["root"].sidebar[1].items[2].text,
            "Memory Management"
        );
        assert!(config.lint().is_empty(), "{:?}", config.lint());
    }

    #[test]
    fn test_default_language_for_path() {
        let config = Config::bundled().expect("bundled config is valid");

        assert_eq!(config.default_language_for_path("/zh/guide/quick-start"), Lang::Zh);
        assert_eq!(config.default_language_for_path("/zh"), Lang::Zh);
        assert_eq!(config.default_language_for_path("/en/"), Lang::En);
        assert_eq!(config.default_language_for_path("/"), Lang::En);
        assert_eq!(config.default_language_for_path("/zhx/"), Lang::En);
    }

    #[test]
    fn test_config_validation_empty_title() {
        let content = minimal_config().replace("Minimal Site", "");
        let result = Config::from_toml_str(&content);
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("title cannot be empty")
        );
    }

    #[test]
    fn test_config_validation_requires_root_locale() {
        let content = minimal_config().replace("[locales.root]", "[locales.en]");
        let result = Config::from_toml_str(&content);
        assert!(result.unwrap_err().to_string().contains("locales.root"));
    }

    #[test]
    fn test_config_validation_rejects_unknown_language() {
        let content = minimal_config().replace("lang = \"en\"", "lang = \"fr\"");
        assert!(Config::from_toml_str(&content).is_err());
    }

    #[test]
    fn test_config_validation_link_shape() {
        let content = minimal_config().replace("link = \"/en/\"", "link = \"/en\"");
        let result = Config::from_toml_str(&content);
        assert!(result.unwrap_err().to_string().contains("start and end"));
    }

    #[test]
    fn test_config_validation_same_storage_keys() {
        let content = format!(
            "{}\n[client]\nlanguage_key = \"pref\"\ntheme_key = \"pref\"\n",
            minimal_config()
        );
        let result = Config::from_toml_str(&content);
        assert!(result.unwrap_err().to_string().contains("must differ"));
    }

    #[test]
    fn test_lint_reports_mismatched_sidebar() {
        let content = create_test_config().replace(
            "items = [{ text = \"快速开始\", link = \"/zh/guide/quick-start\" }]",
            "items = [{ text = \"快速开始\", link = \"/zh/guide/quick-start\" }, { text = \"原则\", link = \"/zh/guide/design-principles\" }]",
        );
        let config = Config::from_toml_str(&content).expect("parse config");
        let warnings = config.lint();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("does not mirror"));
    }

    #[test]
    fn test_generator_json() {
        let config = Config::bundled().expect("bundled config is valid");
        let json = config.to_generator_json();

        assert_eq!(json["title"], "Altru Programming Language");
        assert_eq!(json["locales"]["zh"]["lang"], "zh");
        assert_eq!(json["locales"]["root"]["link"], "/en/");
        assert_eq!(
            json["locales"]["root"]["themeConfig"]["sidebar"]["/en/"][0]["text"],
            "Introduction"
        );
        assert_eq!(json["themeConfig"]["logo"], "/logo.png");
        assert_eq!(json["themeConfig"]["socialLinks"][0]["icon"], "github");
        assert_eq!(
            json["themeConfig"]["footer"]["message"],
            "Released under the MIT License."
        );
    }

    #[test]
    fn test_config_not_found() {
        let result = Config::load(Path::new("/nonexistent/site.toml"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }
}
