//! Check command - validate the site configuration

use std::path::Path;

use altru_docs_core::Config;
use color_eyre::eyre::{Result, bail};

/// Validation result.
#[derive(Debug, Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
pub fn run(config_path: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking configuration");

    let result = validate(config_path);

    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

fn validate(config_path: &Path) -> ValidationResult {
    let mut result = ValidationResult::default();

    println!("Checking configuration...");
    let config = match Config::load_with_env(config_path) {
        Ok(c) => {
            println!("  ✓ Configuration valid");
            c
        }
        Err(e) => {
            result.add_error(format!("Configuration error: {e}"));
            println!("  ✗ Configuration invalid: {e}");
            return result;
        }
    };

    println!("\nChecking locales...");
    for (key, locale) in &config.locales {
        let pages: usize = locale.sidebar.iter().map(|g| g.items.len()).sum();
        println!(
            "  ✓ {key} ({}) at {}: {} nav links, {} sidebar pages",
            locale.lang,
            locale.link,
            locale.nav.len(),
            pages
        );
    }

    println!("\nChecking search catalog...");
    check_catalog(&config, &mut result);

    for warning in config.lint() {
        result.add_warning(warning);
    }

    result
}

/// Catalog entries should point into a configured locale of the same
/// language.
fn check_catalog(config: &Config, result: &mut ValidationResult) {
    for entry in &config.search.pages {
        let path = format!("/{}", entry.url.trim_start_matches('/'));
        match config.locale_for_path(&path) {
            Some(locale) if locale.lang == entry.lang => {}
            Some(locale) => result.add_warning(format!(
                "search page '{}' is tagged {} but lives under {} ({})",
                entry.title, entry.lang, locale.link, locale.lang
            )),
            None => result.add_warning(format!(
                "search page '{}' is outside every locale: {}",
                entry.title, entry.url
            )),
        }
    }
    println!("  ✓ {} searchable pages", config.search.pages.len());
}
