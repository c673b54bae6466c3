//! Data models for folio entities.
//!
//! This module defines the core data structures:
//! - `ProjectRecord` - One normalized entry per authored document
//! - `ProjectBody` - The rich body of a document, or its plain-text fallback
//! - `ExternalLink` - Labeled outbound links attached to a record
//! - `ListOrder` - The two total orderings the listing view can request

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordering requested for the listing view.
///
/// The page layer reads this from a URL query parameter, so unknown values
/// must degrade to the default rather than error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListOrder {
    /// Highlighted records first, then recency within each group (default)
    #[default]
    Relevance,
    /// Pure recency-descending order
    Chronological,
}

impl ListOrder {
    /// Parse from string, case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "relevance" => Some(ListOrder::Relevance),
            "chronological" => Some(ListOrder::Chronological),
            _ => None,
        }
    }

    /// Parse a query-parameter value, falling back to `Relevance` when the
    /// value is absent or unrecognized.
    pub fn from_query(s: Option<&str>) -> Self {
        s.and_then(Self::parse).unwrap_or_default()
    }

    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ListOrder::Relevance => "relevance",
            ListOrder::Chronological => "chronological",
        }
    }
}

impl fmt::Display for ListOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A labeled outbound link (e.g. "Live site", "Paper").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalLink {
    /// Link text shown by the page layer
    pub label: String,

    /// Link target
    pub href: String,
}

/// The body of a document, as handed to the page layer's renderer.
///
/// Documents usually carry a markdown body below the frontmatter; when one
/// doesn't, consumers get an explicit plain-text fallback (the summary)
/// instead of an absent field they might forget to handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum ProjectBody {
    /// Raw markdown source for the rich-content renderer
    Markdown(String),
    /// Plain-text fallback when the document has no body
    PlainText(String),
}

impl ProjectBody {
    /// Whether this body carries rich content.
    pub fn is_rich(&self) -> bool {
        matches!(self, ProjectBody::Markdown(_))
    }

    /// The underlying text, regardless of variant.
    pub fn text(&self) -> &str {
        match self {
            ProjectBody::Markdown(s) | ProjectBody::PlainText(s) => s,
        }
    }
}

/// One normalized project entry in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Unique URL-safe identifier (frontmatter `slug`, else the file stem)
    pub slug: String,

    /// Project title
    pub title: String,

    /// One-paragraph summary shown on cards
    pub summary: String,

    /// Source date; `None` when the frontmatter date was missing or malformed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    /// Roles held on the project, in authored order
    #[serde(default)]
    pub roles: Vec<String>,

    /// Cover image path (placeholder substituted when absent)
    pub cover: String,

    /// Tags for categorization
    #[serde(default)]
    pub tags: Vec<String>,

    /// Promotes the record in relevance ordering
    #[serde(default)]
    pub highlight: bool,

    /// Labeled outbound links
    #[serde(default)]
    pub links: Vec<ExternalLink>,

    /// Document body handed to the renderer
    pub body: ProjectBody,

    /// Derived: publication year
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    /// Derived: human-readable "Month YYYY" label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month_label: Option<String>,

    /// Derived: canonical detail-view path (round-trips to `slug`)
    pub detail_url: String,

    /// Source file name within the content directory
    pub source: String,
}

impl ProjectRecord {
    /// Whether the record carries a usable date.
    ///
    /// Records without one still load, but they sort after all dated
    /// records and `folio check` flags them.
    pub fn is_dated(&self) -> bool {
        self.date.is_some()
    }
}

/// Format a date as a "Month YYYY" display label.
pub fn month_label(date: NaiveDate) -> String {
    let month = match date.month() {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    };
    format!("{} {}", month, date.year())
}
