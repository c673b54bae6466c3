//! Detail-view route construction and parsing.
//!
//! Every record's `detail_url` is built here, and the detail view parses
//! incoming paths back to slugs with the same base path, so the two
//! directions cannot drift apart.

/// Build the canonical detail path for a slug, e.g. `/work/tide-tracker`.
pub fn detail_url(base_path: &str, slug: &str) -> String {
    format!("{}/{}", base_path, slug)
}

/// Recover the slug from a detail path, if the path belongs to `base_path`.
///
/// Accepts an optional trailing slash. Returns `None` for paths outside the
/// base, or for the bare base path itself.
pub fn parse_detail_path<'a>(base_path: &str, path: &'a str) -> Option<&'a str> {
    let rest = path.strip_prefix(base_path)?;
    let slug = rest.strip_prefix('/')?.trim_end_matches('/');
    if slug.is_empty() || slug.contains('/') {
        return None;
    }
    Some(slug)
}
