//! The hand-maintained page catalog used by the fallback search.

use serde::{Deserialize, Serialize};

use crate::preference::Lang;

/// A catalog record: one documentation page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEntry {
    /// Page title, shown verbatim in search results.
    pub title: String,

    /// Page URL, relative to the site root.
    pub url: String,

    /// Language the page is written in.
    pub lang: Lang,
}

impl PageEntry {
    /// Create a new page entry.
    pub fn new(title: impl Into<String>, url: impl Into<String>, lang: Lang) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            lang,
        }
    }

    /// File stem of the URL, e.g. `memory-management` for
    /// `zh/memory-management.html`.
    pub fn slug(&self) -> &str {
        let path = self.url.split(['?', '#']).next().unwrap_or("");
        let file = path.trim_end_matches('/').rsplit('/').next().unwrap_or("");
        file.strip_suffix(".html").unwrap_or(file)
    }
}

/// The built-in catalog, in display order.
pub fn builtin_catalog() -> Vec<PageEntry> {
    vec![
        PageEntry::new(
            "Specification v0.2.1",
            "en/specification-0.2.1-full.html",
            Lang::En,
        ),
        PageEntry::new(
            "设计规范 v0.2.1",
            "zh/specification-0.2.1-full.html",
            Lang::Zh,
        ),
        PageEntry::new("Memory Management", "en/memory-management.html", Lang::En),
        PageEntry::new("内存管理", "zh/memory-management.html", Lang::Zh),
        PageEntry::new("Concurrency Model", "en/concurrency-model.html", Lang::En),
        PageEntry::new("并发模型", "zh/concurrency-model.html", Lang::Zh),
        PageEntry::new("AI Integration", "en/ai-integration.html", Lang::En),
        PageEntry::new("AI集成特性", "zh/ai-integration.html", Lang::Zh),
    ]
}
