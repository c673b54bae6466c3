//! Command implementations for the folio CLI.
//!
//! Each command loads the catalog fresh (the binary is the unit of
//! "process lifetime" here - one invocation, one immutable catalog) and
//! returns a result struct that renders as JSON or human-readable text.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::catalog::{Catalog, SkippedDoc};
use crate::config::FolioConfig;
use crate::models::{ListOrder, ProjectRecord};
use crate::routes;
use crate::Result;

/// Command results that can be serialized to JSON or formatted for humans.
pub trait Output: Serialize {
    /// Serialize to JSON string.
    fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| format!(r#"{{"error":"{}"}}"#, e))
    }

    /// Format for human-readable output.
    fn to_human(&self) -> String;
}

/// Load config and catalog for a site root, honoring a content-dir override.
fn load_catalog(site_root: &Path, content_dir: Option<&Path>) -> Result<(FolioConfig, Catalog)> {
    let config = FolioConfig::load(site_root)?;
    let dir: PathBuf = match content_dir {
        Some(dir) if dir.is_absolute() => dir.to_path_buf(),
        Some(dir) => site_root.join(dir),
        None => config.content_dir_in(site_root),
    };
    let catalog = Catalog::load(&dir, &config)?;
    Ok((config, catalog))
}

// === list ===

/// Result of `folio list`.
#[derive(Debug, Serialize)]
pub struct ListResult {
    pub order: ListOrder,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    pub count: usize,
    pub projects: Vec<ProjectRecord>,
}

impl Output for ListResult {
    fn to_human(&self) -> String {
        let mut out = match &self.tag {
            Some(tag) => format!("{} project(s) tagged '{}' ({})", self.count, tag, self.order),
            None => format!("{} project(s) ({})", self.count, self.order),
        };
        for p in &self.projects {
            let marker = if p.highlight { "*" } else { " " };
            let when = p.month_label.as_deref().unwrap_or("undated");
            out.push_str(&format!("\n{} {:<14} {} ({})", marker, when, p.title, p.slug));
        }
        out
    }
}

/// List the catalog in the requested ordering, optionally filtered by tag.
///
/// `order` carries the raw query-parameter string; unknown values fall back
/// to relevance, exactly like the listing page's URL parameter.
pub fn list(
    site_root: &Path,
    content_dir: Option<&Path>,
    order: Option<&str>,
    tag: Option<&str>,
) -> Result<ListResult> {
    let (_, catalog) = load_catalog(site_root, content_dir)?;
    let order = ListOrder::from_query(order);

    let projects: Vec<ProjectRecord> = catalog
        .list(order)
        .into_iter()
        .filter(|p| tag.is_none_or(|t| p.tags.iter().any(|have| have == t)))
        .cloned()
        .collect();

    Ok(ListResult {
        order,
        tag: tag.map(str::to_string),
        count: projects.len(),
        projects,
    })
}

// === show ===

/// Result of `folio show`.
#[derive(Debug, Serialize)]
pub struct ShowResult {
    pub found: bool,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectRecord>,
}

impl Output for ShowResult {
    fn to_human(&self) -> String {
        match &self.project {
            None => format!("No project with slug '{}'", self.slug),
            Some(p) => {
                let mut out = format!("{} ({})", p.title, p.slug);
                if let Some(label) = &p.month_label {
                    out.push_str(&format!("\n  date:  {}", label));
                }
                if !p.roles.is_empty() {
                    out.push_str(&format!("\n  roles: {}", p.roles.join(", ")));
                }
                if !p.tags.is_empty() {
                    out.push_str(&format!("\n  tags:  {}", p.tags.join(", ")));
                }
                out.push_str(&format!("\n  url:   {}", p.detail_url));
                out.push_str(&format!("\n  {}", p.summary));
                for link in &p.links {
                    out.push_str(&format!("\n  {} -> {}", link.label, link.href));
                }
                out
            }
        }
    }
}

/// Look up one record by slug, or by its detail path (`/work/<slug>`).
///
/// A missing record is a normal outcome (`found: false`), not an error:
/// the detail view renders a not-found state from it.
pub fn show(site_root: &Path, content_dir: Option<&Path>, slug: &str) -> Result<ShowResult> {
    let (config, catalog) = load_catalog(site_root, content_dir)?;

    // Accept the canonical detail path as well as the bare slug, so the
    // round-trip contract is exercised where it matters.
    let slug = routes::parse_detail_path(config.base_path(), slug).unwrap_or(slug);

    let project = catalog.find_by_slug(slug).cloned();
    Ok(ShowResult {
        found: project.is_some(),
        slug: slug.to_string(),
        project,
    })
}

// === routes ===

/// One entry in the route manifest.
#[derive(Debug, Serialize)]
pub struct Route {
    pub slug: String,
    pub detail_url: String,
    pub source: String,
}

/// Result of `folio routes`.
#[derive(Debug, Serialize)]
pub struct RoutesResult {
    pub base_path: String,
    pub count: usize,
    pub routes: Vec<Route>,
}

impl Output for RoutesResult {
    fn to_human(&self) -> String {
        let mut out = format!("{} route(s) under {}", self.count, self.base_path);
        for route in &self.routes {
            out.push_str(&format!("\n{} -> {}", route.slug, route.detail_url));
        }
        out
    }
}

/// Emit the slug -> detail URL manifest the page layer links against.
pub fn routes(site_root: &Path, content_dir: Option<&Path>) -> Result<RoutesResult> {
    let (config, catalog) = load_catalog(site_root, content_dir)?;
    let routes: Vec<Route> = catalog
        .records()
        .iter()
        .map(|p| Route {
            slug: p.slug.clone(),
            detail_url: p.detail_url.clone(),
            source: p.source.clone(),
        })
        .collect();
    Ok(RoutesResult {
        base_path: config.base_path().to_string(),
        count: routes.len(),
        routes,
    })
}

// === check ===

/// A per-record problem found by `folio check`.
#[derive(Debug, Serialize)]
pub struct Problem {
    pub slug: String,
    pub source: String,
    pub issue: String,
}

/// Result of `folio check`.
#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub ok: bool,
    pub total: usize,
    pub skipped: Vec<SkippedDoc>,
    pub problems: Vec<Problem>,
}

impl Output for CheckResult {
    fn to_human(&self) -> String {
        if self.ok {
            return format!("Catalog OK: {} project(s), no problems", self.total);
        }
        let mut out = format!(
            "Catalog has issues: {} project(s), {} skipped, {} problem(s)",
            self.total,
            self.skipped.len(),
            self.problems.len()
        );
        for s in &self.skipped {
            out.push_str(&format!("\nskipped {}: {}", s.source, s.reason));
        }
        for p in &self.problems {
            out.push_str(&format!("\n{} ({}): {}", p.slug, p.source, p.issue));
        }
        out
    }
}

/// Catalog health check: skipped documents plus per-record metadata gaps.
///
/// Duplicate slugs are not listed here - they fail the load itself, for
/// this and every other command.
pub fn check(site_root: &Path, content_dir: Option<&Path>) -> Result<CheckResult> {
    let (config, catalog) = load_catalog(site_root, content_dir)?;

    let mut problems = Vec::new();
    for p in catalog.records() {
        let mut push = |issue: &str| {
            problems.push(Problem {
                slug: p.slug.clone(),
                source: p.source.clone(),
                issue: issue.to_string(),
            })
        };
        if p.title.is_empty() {
            push("missing title");
        }
        if p.summary.is_empty() {
            push("missing summary");
        }
        if !p.is_dated() {
            push("missing or unparseable date");
        }
        if p.cover == config.placeholder_cover() {
            push("no cover image (placeholder in use)");
        }
    }

    Ok(CheckResult {
        ok: catalog.skipped().is_empty() && problems.is_empty(),
        total: catalog.len(),
        skipped: catalog.skipped().to_vec(),
        problems,
    })
}
