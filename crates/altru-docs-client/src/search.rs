//! Keyword fallback search over the page catalog.
//!
//! A linear, case-insensitive substring scan. Results keep catalog order.

use altru_docs_core::{ClientConfig, PageEntry, builtin_catalog};

use crate::view::ResultsView;

/// A normalized search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Raw query string.
    pub raw: String,

    /// Trimmed, lower-cased needle.
    pub needle: String,
}

impl SearchQuery {
    /// Normalize a raw query.
    pub fn parse(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            needle: raw.trim().to_lowercase(),
        }
    }

    /// Length of the needle in characters.
    pub fn len(&self) -> usize {
        self.needle.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Whether `entry` matches: the needle occurs in the lower-cased title
    /// or in the page slug.
    ///
    /// The slug match reaches past titles, so translated pages share their
    /// English slug: `memory`, `management` and `model` also return the zh
    /// pages.
    pub fn matches(&self, entry: &PageEntry) -> bool {
        entry.title.to_lowercase().contains(&self.needle)
            || entry.slug().to_lowercase().contains(&self.needle)
    }
}

/// Fallback search engine over a fixed catalog.
#[derive(Debug, Clone)]
pub struct FallbackSearch {
    pages: Vec<PageEntry>,
    min_chars: usize,
}

impl Default for FallbackSearch {
    fn default() -> Self {
        Self::new(builtin_catalog(), 2)
    }
}

impl FallbackSearch {
    /// Create a search over `pages`; queries shorter than `min_chars` are
    /// ignored.
    pub fn new(pages: Vec<PageEntry>, min_chars: usize) -> Self {
        Self { pages, min_chars }
    }

    /// Create a search using the configured threshold.
    pub fn with_config(pages: Vec<PageEntry>, client: &ClientConfig) -> Self {
        Self::new(pages, client.search_min_chars)
    }

    /// The catalog, in result order.
    pub fn pages(&self) -> &[PageEntry] {
        &self.pages
    }

    /// Whether a query is long enough to run.
    pub fn accepts(&self, query: &SearchQuery) -> bool {
        !query.is_empty() && query.len() >= self.min_chars
    }

    /// Lazily filter the catalog. Yields `None` for queries below the
    /// threshold.
    pub fn filter<'a>(
        &'a self,
        query: &'a SearchQuery,
    ) -> Option<impl Iterator<Item = &'a PageEntry> + 'a> {
        if !self.accepts(query) {
            return None;
        }
        Some(self.pages.iter().filter(move |entry| query.matches(entry)))
    }

    /// Run `raw` and render matches into `view`.
    ///
    /// Returns the number of matches, or `None` when the query was too
    /// short and `view` was left untouched.
    pub fn search<V: ResultsView + ?Sized>(&self, raw: &str, view: &mut V) -> Option<usize> {
        let query = SearchQuery::parse(raw);
        let Some(matches) = self.filter(&query) else {
            tracing::trace!(query = raw, "query below threshold");
            return None;
        };

        let results: Vec<&PageEntry> = matches.collect();
        tracing::debug!(query = %query.needle, matches = results.len(), "fallback search");
        view.render_results(&results);
        Some(results.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{HeadlessView, NO_RESULTS_MARKUP};

    fn titles(search: &FallbackSearch, raw: &str) -> Option<Vec<String>> {
        let query = SearchQuery::parse(raw);
        search
            .filter(&query)
            .map(|matches| matches.map(|entry| entry.title.clone()).collect())
    }

    #[test]
    fn test_parse_query() {
        let query = SearchQuery::parse("  Memory ");
        assert_eq!(query.raw, "  Memory ");
        assert_eq!(query.needle, "memory");
        assert_eq!(query.len(), 6);
    }

    #[test]
    fn test_short_queries_do_not_render() {
        let search = FallbackSearch::default();
        let mut view = HeadlessView::default();
        view.results = Some("<ul>previous</ul>".to_string());

        assert_eq!(search.search("", &mut view), None);
        assert_eq!(search.search("a", &mut view), None);
        assert_eq!(search.search("  a  ", &mut view), None);

        assert_eq!(view.results.as_deref(), Some("<ul>previous</ul>"));
        assert_eq!(view.renders, 0);
    }

    #[test]
    fn test_memory_matches_both_languages_in_catalog_order() {
        let search = FallbackSearch::default();
        assert_eq!(
            titles(&search, "memory"),
            Some(vec!["Memory Management".to_string(), "内存管理".to_string()])
        );
        assert_eq!(titles(&search, "MEMORY"), titles(&search, "memory"));
    }

    #[test]
    fn test_slug_match_reaches_translated_pages() {
        let search = FallbackSearch::default();
        assert_eq!(
            titles(&search, "model"),
            Some(vec!["Concurrency Model".to_string(), "并发模型".to_string()])
        );
        assert_eq!(titles(&search, "management").map(|t| t.len()), Some(2));
        assert_eq!(titles(&search, "html"), Some(Vec::new()));
    }

    #[test]
    fn test_cjk_query_counts_characters() {
        let search = FallbackSearch::default();
        assert_eq!(titles(&search, "内存"), Some(vec!["内存管理".to_string()]));
        assert_eq!(titles(&search, "内"), None);
    }

    #[test]
    fn test_title_substring_match() {
        let search = FallbackSearch::default();
        assert_eq!(
            titles(&search, "ai"),
            Some(vec!["AI Integration".to_string(), "AI集成特性".to_string()])
        );
        assert_eq!(
            titles(&search, "v0.2"),
            Some(vec![
                "Specification v0.2.1".to_string(),
                "设计规范 v0.2.1".to_string()
            ])
        );
    }

    #[test]
    fn test_no_match_renders_placeholder() {
        let search = FallbackSearch::default();
        let mut view = HeadlessView::default();

        assert_eq!(search.search("zzz-no-match", &mut view), Some(0));
        assert_eq!(view.results.as_deref(), Some(NO_RESULTS_MARKUP));
        assert_eq!(view.renders, 1);
    }

    #[test]
    fn test_search_renders_links() {
        let search = FallbackSearch::default();
        let mut view = HeadlessView::default();

        assert_eq!(search.search("Concurrency", &mut view), Some(2));
        let markup = view.results.expect("rendered");
        assert!(markup.starts_with(r#"<ul class="search-results-list">"#));
        assert!(markup.contains(r#"<a href="en/concurrency-model.html">Concurrency Model</a>"#));
        assert!(markup.contains(r#"<a href="zh/concurrency-model.html">并发模型</a>"#));
    }

    #[test]
    fn test_custom_threshold() {
        let client = ClientConfig {
            search_min_chars: 4,
            ..ClientConfig::default()
        };
        let search = FallbackSearch::with_config(builtin_catalog(), &client);
        assert_eq!(titles(&search, "ai"), None);
        assert_eq!(titles(&search, "model").map(|t| t.len()), Some(2));
    }
}
