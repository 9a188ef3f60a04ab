//! In-page anchor handling.

/// Element id targeted by an in-page link, if `href` is one.
///
/// Bare `#` links have no target.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
