//! Altru Docs CLI
//!
//! Validates, exports and previews the documentation site configuration,
//! and runs the page-side preference and search logic from the terminal.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for the Altru docs site.
#[derive(Parser)]
#[command(
    name = "altru-docs",
    version,
    about = "Tooling for the Altru documentation site"
)]
struct Cli {
    /// Path to the site configuration file (`ALTRU_DOCS__*` variables override it)
    #[arg(short, long, default_value = "site.toml")]
    config: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Validate the site configuration
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
    /// Run the fallback search over the page catalog
    Search {
        /// Free-text query
        query: String,
        /// Print the rendered result markup instead of a list
        #[arg(long)]
        html: bool,
    },
    /// Resolve language and theme the way a page load would
    Prefs {
        /// Stored language value
        #[arg(long)]
        stored_lang: Option<String>,
        /// Stored theme value
        #[arg(long)]
        stored_theme: Option<String>,
        /// Browser locale tag (e.g. zh-CN)
        #[arg(long)]
        locale: Option<String>,
        /// OS prefers a dark color scheme
        #[arg(long)]
        prefers_dark: bool,
        /// Page path, selects the entry point's default language
        #[arg(long, default_value = "/")]
        path: String,
    },
    /// Export the site generator configuration as JSON
    Export {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },
    /// Serve a built site directory for preview
    Serve {
        /// Directory to serve
        #[arg(short, long, default_value = "public")]
        dir: std::path::PathBuf,
        /// Port to listen on
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    altru_docs::init_tracing(cli.verbose);

    match cli.command {
        Commands::Check { strict } => {
            altru_docs::cmd::check::run(&cli.config, strict)?;
        }
        Commands::Search { query, html } => {
            altru_docs::cmd::search::run(&cli.config, &query, html)?;
        }
        Commands::Prefs {
            stored_lang,
            stored_theme,
            locale,
            prefers_dark,
            path,
        } => {
            let input = altru_docs::cmd::prefs::PrefsInput {
                stored_lang,
                stored_theme,
                locale,
                prefers_dark,
                path,
            };
            altru_docs::cmd::prefs::run(&cli.config, &input)?;
        }
        Commands::Export { output } => {
            altru_docs::cmd::export::run(&cli.config, output.as_deref())?;
        }
        Commands::Serve { dir, port } => {
            altru_docs::cmd::serve::run(&dir, port).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_check_command_parsing() {
        let args = ["altru-docs", "check", "--strict"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.config, std::path::PathBuf::from("site.toml"));
        match cli.command {
            Commands::Check { strict } => assert!(strict),
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_search_command_parsing() {
        let args = ["altru-docs", "search", "memory", "--html"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Search { query, html } => {
                assert_eq!(query, "memory");
                assert!(html);
            }
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_cli_prefs_command_parsing() {
        let args = [
            "altru-docs",
            "prefs",
            "--stored-lang",
            "zh",
            "--locale",
            "en-US",
            "--prefers-dark",
            "--path",
            "/zh/guide/quick-start",
        ];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Prefs {
                stored_lang,
                stored_theme,
                locale,
                prefers_dark,
                path,
            } => {
                assert_eq!(stored_lang.as_deref(), Some("zh"));
                assert!(stored_theme.is_none());
                assert_eq!(locale.as_deref(), Some("en-US"));
                assert!(prefers_dark);
                assert_eq!(path, "/zh/guide/quick-start");
            }
            _ => panic!("Expected Prefs command"),
        }
    }

    #[test]
    fn test_cli_prefs_defaults() {
        let cli = Cli::parse_from(["altru-docs", "prefs"]);

        match cli.command {
            Commands::Prefs {
                prefers_dark, path, ..
            } => {
                assert!(!prefers_dark);
                assert_eq!(path, "/");
            }
            _ => panic!("Expected Prefs command"),
        }
    }

    #[test]
    fn test_cli_export_command_parsing() {
        let args = ["altru-docs", "export", "-o", "config.json"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Export { output } => {
                assert_eq!(output, Some(std::path::PathBuf::from("config.json")));
            }
            _ => panic!("Expected Export command"),
        }
    }

    #[test]
    fn test_cli_serve_command_parsing() {
        let args = ["altru-docs", "serve", "--dir", "dist", "--port", "8080"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Serve { dir, port } => {
                assert_eq!(dir, std::path::PathBuf::from("dist"));
                assert_eq!(port, 8080);
            }
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_cli_verbosity_flags() {
        let args = ["altru-docs", "-vvv", "check"];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_cli_custom_config_path() {
        let args = ["altru-docs", "--config", "docs/site.yaml", "check"];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.config, std::path::PathBuf::from("docs/site.yaml"));
    }
}
