//! Altru Docs Core Library
//!
//! Core types, site configuration and error handling shared by the browser
//! client and the `altru-docs` CLI.

pub mod catalog;
pub mod config;
pub mod error;
pub mod preference;

pub use catalog::{PageEntry, builtin_catalog};
pub use config::{ClientConfig, Config, LocaleConfig};
pub use error::{CoreError, Result};
pub use preference::{Lang, Theme};
