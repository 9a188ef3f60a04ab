//! Static preview server

use std::path::Path;

use axum::Router;
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Create the preview server router.
///
/// Serves `site_dir` as-is; directory requests fall back to `index.html`.
pub fn create_router(site_dir: &Path) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(site_dir).append_index_html_on_directories(true))
        .layer(TraceLayer::new_for_http())
}
