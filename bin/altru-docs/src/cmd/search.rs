//! Search command - run the fallback search from the terminal

use std::path::Path;

use altru_docs_client::{FallbackSearch, HeadlessView, SearchQuery};
use altru_docs_core::Config;
use color_eyre::eyre::{Result, WrapErr};

/// Run the search command.
pub fn run(config_path: &Path, query: &str, html: bool) -> Result<()> {
    let config = Config::load_with_env(config_path).wrap_err("Failed to load configuration")?;
    let search = FallbackSearch::with_config(config.search.pages, &config.client);

    match render(&search, query, html) {
        Some(output) => println!("{output}"),
        None => println!(
            "Query too short: at least {} characters are needed",
            config.client.search_min_chars
        ),
    }

    Ok(())
}

/// Text shown for `query`, or `None` when the query is below the threshold.
fn render(search: &FallbackSearch, query: &str, html: bool) -> Option<String> {
    if html {
        let mut page = HeadlessView::default();
        search.search(query, &mut page)?;
        return page.results;
    }

    let parsed = SearchQuery::parse(query);
    let lines: Vec<String> = search
        .filter(&parsed)?
        .map(|entry| format!("  [{}] {}  →  {}", entry.lang, entry.title, entry.url))
        .collect();

    if lines.is_empty() {
        Some("No results found".to_string())
    } else {
        Some(lines.join("\n"))
    }
}
