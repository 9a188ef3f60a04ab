//! CLI command implementations.

pub mod check;
pub mod export;
pub mod prefs;
pub mod search;
pub mod serve;
