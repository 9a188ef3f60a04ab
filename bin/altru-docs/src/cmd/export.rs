//! Export command - write the generator-facing configuration

use std::path::Path;

use altru_docs_core::Config;
use color_eyre::eyre::{Result, WrapErr};

/// Run the export command.
pub fn run(config_path: &Path, output: Option<&Path>) -> Result<()> {
    let config = Config::load_with_env(config_path).wrap_err("Failed to load configuration")?;
    let json = serde_json::to_string_pretty(&config.to_generator_json())?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .wrap_err_with(|| format!("Failed to create {}", parent.display()))?;
            }
            std::fs::write(path, json)
                .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(?path, "Exported generator configuration");
            println!("✓ Wrote {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
