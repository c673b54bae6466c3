//! Folio - a content catalog for portfolio sites.
//!
//! This library provides the core functionality for the `folio` CLI tool:
//! loading a directory of frontmatter-bearing markdown documents into an
//! immutable in-memory catalog, and answering the queries a static page
//! layer needs (slug lookup, relevance/chronological listings, route
//! manifests).

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod frontmatter;
pub mod models;
pub mod routes;


/// Library-level error type for folio operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("content directory not found: {}", .0.display())]
    ContentDirMissing(std::path::PathBuf),

    #[error("duplicate slug '{slug}' (first in {first}, again in {second})")]
    DuplicateSlug {
        slug: String,
        first: String,
        second: String,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for folio operations.
pub type Result<T> = std::result::Result<T, Error>;
