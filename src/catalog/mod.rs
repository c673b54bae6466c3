//! The content catalog: eager document ingestion and read-only queries.
//!
//! A `Catalog` is built exactly once from a content directory and never
//! mutated afterwards. Loading walks the directory, splits each document's
//! frontmatter from its body, and normalizes the result into a
//! `ProjectRecord`. Queries (`find_by_slug`, `list`) are pure reads: `list`
//! returns a freshly computed sequence on every call.
//!
//! ## Failure isolation
//!
//! One broken document (unreadable file, unparseable YAML) is skipped and
//! recorded, never aborting the load. Only two conditions are fatal: a
//! missing content directory, and two documents resolving to the same slug.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use chrono::{DateTime, NaiveDate};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::FolioConfig;
use crate::frontmatter::{self, Frontmatter};
use crate::models::{ListOrder, ProjectBody, ProjectRecord, month_label};
use crate::routes;
use crate::{Error, Result};

/// A document that failed to load, with the reason it was skipped.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SkippedDoc {
    /// File name within the content directory
    pub source: String,
    /// Human-readable reason
    pub reason: String,
}

/// The full in-memory set of normalized project records.
#[derive(Debug)]
pub struct Catalog {
    records: Vec<ProjectRecord>,
    skipped: Vec<SkippedDoc>,
}

impl Catalog {
    /// Load every `.md`/`.mdx` document under the content directory.
    ///
    /// Documents are visited in sorted file-name order, which is also the
    /// insertion order that stable sorting preserves for tie-breaks.
    pub fn load(content_dir: &Path, config: &FolioConfig) -> Result<Self> {
        if !content_dir.is_dir() {
            return Err(Error::ContentDirMissing(content_dir.to_path_buf()));
        }

        let mut records: Vec<ProjectRecord> = Vec::new();
        let mut skipped: Vec<SkippedDoc> = Vec::new();
        // slug -> source file, for duplicate detection
        let mut seen: HashMap<String, String> = HashMap::new();

        // depth 0 is the content dir itself; only entries below it can be
        // skipped as hidden
        let walker = WalkDir::new(content_dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(error = %err, "skipping unreadable directory entry");
                    skipped.push(SkippedDoc {
                        source: String::new(),
                        reason: format!("unreadable entry: {}", err),
                    });
                    continue;
                }
            };
            if !entry.file_type().is_file() || !is_content_file(entry.path()) {
                continue;
            }

            let source = entry
                .path()
                .strip_prefix(content_dir)
                .unwrap_or(entry.path())
                .to_string_lossy()
                .replace('\\', "/");

            let contents = match fs::read_to_string(entry.path()) {
                Ok(contents) => contents,
                Err(err) => {
                    warn!(source = %source, error = %err, "skipping unreadable document");
                    skipped.push(SkippedDoc {
                        source,
                        reason: format!("read failed: {}", err),
                    });
                    continue;
                }
            };

            let (meta, body) = match frontmatter::parse(&contents) {
                Ok(parsed) => parsed,
                Err(message) => {
                    warn!(source = %source, error = %message, "skipping document with broken frontmatter");
                    skipped.push(SkippedDoc {
                        source,
                        reason: format!("frontmatter: {}", message),
                    });
                    continue;
                }
            };

            let record = normalize(&source, meta, body, config);
            debug!(slug = %record.slug, source = %source, "loaded document");

            if let Some(first) = seen.get(&record.slug) {
                return Err(Error::DuplicateSlug {
                    slug: record.slug,
                    first: first.clone(),
                    second: source,
                });
            }
            seen.insert(record.slug.clone(), source);
            records.push(record);
        }

        Ok(Self { records, skipped })
    }

    /// Build a catalog directly from already-normalized records, with the
    /// same duplicate-slug check as `load`.
    pub fn from_records(records: Vec<ProjectRecord>) -> Result<Self> {
        let mut seen: HashMap<String, String> = HashMap::new();
        for record in &records {
            if let Some(first) = seen.get(&record.slug) {
                return Err(Error::DuplicateSlug {
                    slug: record.slug.clone(),
                    first: first.clone(),
                    second: record.source.clone(),
                });
            }
            seen.insert(record.slug.clone(), record.source.clone());
        }
        Ok(Self {
            records,
            skipped: Vec::new(),
        })
    }

    /// Exact-match lookup by slug. Absence is a normal caller-visible
    /// state (the detail view renders not-found), never an error.
    pub fn find_by_slug(&self, slug: &str) -> Option<&ProjectRecord> {
        self.records.iter().find(|r| r.slug == slug)
    }

    /// Return all records in the requested ordering.
    ///
    /// - `Chronological`: date descending; dateless records last. Ties keep
    ///   insertion order (stable sort).
    /// - `Relevance`: the chronological order, stably partitioned so every
    ///   highlighted record precedes every non-highlighted one.
    ///
    /// Each call computes a fresh sequence; the catalog itself is never
    /// reordered.
    pub fn list(&self, order: ListOrder) -> Vec<&ProjectRecord> {
        let mut sorted: Vec<&ProjectRecord> = self.records.iter().collect();
        sorted.sort_by(|a, b| match (a.date, b.date) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });

        match order {
            ListOrder::Chronological => sorted,
            ListOrder::Relevance => {
                let (highlighted, regular): (Vec<_>, Vec<_>) =
                    sorted.into_iter().partition(|r| r.highlight);
                let mut out = highlighted;
                out.extend(regular);
                out
            }
        }
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    /// Documents that failed to load.
    pub fn skipped(&self) -> &[SkippedDoc] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Normalize one parsed document into a `ProjectRecord`.
///
/// Permissive by design: missing optional fields default, missing required
/// fields become empty strings, and a malformed date yields a record with
/// no date rather than an error. `folio check` reports all of these.
pub fn normalize(
    source: &str,
    meta: Frontmatter,
    body: String,
    config: &FolioConfig,
) -> ProjectRecord {
    let slug = match meta.slug {
        Some(slug) if !slug.is_empty() => slug,
        _ => file_stem(source),
    };

    let date = meta.date.as_deref().and_then(parse_date);
    let year = date.map(|d| chrono::Datelike::year(&d));
    let label = date.map(month_label);

    let summary = meta.summary.unwrap_or_default();
    let body = if body.is_empty() {
        ProjectBody::PlainText(summary.clone())
    } else {
        ProjectBody::Markdown(body)
    };

    ProjectRecord {
        detail_url: routes::detail_url(config.base_path(), &slug),
        slug,
        title: meta.title.unwrap_or_default(),
        summary,
        date,
        roles: meta.role,
        cover: meta
            .cover
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| config.placeholder_cover().to_string()),
        tags: meta.tags,
        highlight: meta.highlight,
        links: meta.links,
        body,
        year,
        month_label: label,
        source: source.to_string(),
    }
}

/// Parse an authored date string.
///
/// Accepts `YYYY-MM-DD` and full RFC 3339 timestamps; anything else is
/// treated as the invalid-date sentinel (`None`).
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    None
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|s| s.starts_with('.'))
        .unwrap_or(false)
}

fn is_content_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("md") | Some("mdx")
    )
}

fn file_stem(source: &str) -> String {
    let name = source.rsplit('/').next().unwrap_or(source);
    match name.rsplit_once('.') {
        Some((stem, _)) => stem.to_string(),
        None => name.to_string(),
    }
}
