//! Altru Docs CLI Library
//!
//! Command implementations behind the `altru-docs` binary.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (check, search, prefs, export, serve)
//! - [`server`] - Static preview server
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use altru_docs::cmd;
//!
//! cmd::check::run(Path::new("site.toml"), true).unwrap();
//! ```

pub mod cmd;
pub mod server;

// Re-export core types for convenience
pub use altru_docs_core::{Config, Lang, Theme};

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
