//! Altru Docs Client
//!
//! Page-side behaviour of the documentation site, free of any DOM
//! dependency:
//!
//! - [`PreferenceController`] resolves, applies and persists the language
//!   and theme through the [`PreferencesStore`] and [`PreferenceView`] ports
//! - [`FallbackSearch`] filters the page catalog and renders through a
//!   [`ResultsView`]
//!
//! # Example
//!
//! ```
//! use altru_docs_client::{FallbackSearch, HeadlessView, HostHints, MemoryStore, PreferenceController};
//! use altru_docs_core::{ClientConfig, Lang};
//!
//! let mut prefs = PreferenceController::new(
//!     MemoryStore::new(),
//!     HeadlessView::with_elements([Lang::Zh, Lang::En]),
//!     &ClientConfig::default(),
//! );
//! prefs.initialize(&HostHints { locale: Some("zh-CN".into()), prefers_dark: false });
//! assert_eq!(prefs.view().visible_languages(), vec![Lang::Zh]);
//!
//! let mut page = HeadlessView::default();
//! assert_eq!(FallbackSearch::default().search("memory", &mut page), Some(2));
//! ```

pub mod anchor;
pub mod prefs;
pub mod search;
pub mod store;
pub mod view;

pub use anchor::fragment_target;
pub use prefs::{HostHints, PreferenceController};
pub use search::{FallbackSearch, SearchQuery};
pub use store::{MemoryStore, PreferencesStore, StoreError};
pub use view::{
    HeadlessView, NO_RESULTS_MARKUP, PreferenceView, ResultsView, language_display,
    results_markup,
};
