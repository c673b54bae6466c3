//! Frontmatter extraction for content documents.
//!
//! Documents are markdown with an optional YAML frontmatter block delimited
//! by `---` lines:
//!
//! ```text
//! ---
//! title: Tide Tracker
//! date: 2024-06-01
//! ---
//! Body markdown...
//! ```
//!
//! Parsing is deliberately permissive: a document with no frontmatter block
//! yields empty metadata and the whole file as body. Only YAML that is
//! present but unparseable is an error; the catalog loader skips such
//! documents instead of aborting the load.

use serde::Deserialize;

use crate::models::ExternalLink;

/// Raw metadata as authored, before normalization into a `ProjectRecord`.
///
/// Every field is optional; defaults here mirror the permissiveness of the
/// authoring format (missing lists are empty, missing flags are false).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Frontmatter {
    pub title: Option<String>,

    pub slug: Option<String>,

    /// Date string as authored (e.g. "2024-06-01"); parsed during
    /// normalization so a bad value degrades per-record, not per-file.
    pub date: Option<String>,

    #[serde(default)]
    pub role: Vec<String>,

    pub cover: Option<String>,

    pub summary: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub highlight: bool,

    #[serde(default)]
    pub links: Vec<ExternalLink>,
}

/// Split a document into its frontmatter YAML and markdown body.
///
/// Returns `(None, contents)` when the document has no frontmatter block.
/// The opening `---` must be the first line; the block ends at the next
/// line that is exactly `---`. An unterminated block is treated as absent
/// (the whole file is body) rather than an error.
pub fn split(contents: &str) -> (Option<&str>, &str) {
    let rest = match contents.strip_prefix("---") {
        Some(rest) => rest,
        None => return (None, contents),
    };
    // Opening fence must be the whole first line.
    let rest = match rest.strip_prefix('\n').or_else(|| rest.strip_prefix("\r\n")) {
        Some(rest) => rest,
        None => return (None, contents),
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return (Some(yaml), body);
        }
        offset += line.len();
    }
    (None, contents)
}

/// Parse a document into metadata and body.
///
/// The error carries the YAML parser's message; the caller attaches the
/// file path.
pub fn parse(contents: &str) -> Result<(Frontmatter, String), String> {
    let (yaml, body) = split(contents);
    let meta = match yaml {
        Some(yaml) => serde_yaml::from_str(yaml).map_err(|e| e.to_string())?,
        None => Frontmatter::default(),
    };
    Ok((meta, body.trim().to_string()))
}
