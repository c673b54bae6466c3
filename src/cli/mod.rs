//! CLI argument definitions for folio.

use clap::{Parser, Subcommand};

/// Version string with build metadata from build.rs.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("FOLIO_GIT_COMMIT"),
    ", built ",
    env!("FOLIO_BUILD_TIMESTAMP"),
    ")"
);

/// Folio - a content catalog and query tool for portfolio sites.
///
/// Run from the site root (or point at one with -C). The page generator
/// consumes the JSON output; humans pass -H.
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, long_version = LONG_VERSION)]
#[command(about = "Query a portfolio content catalog", long_about = None)]
pub struct Cli {
    /// Output in human-readable format instead of JSON
    #[arg(short = 'H', long = "human", global = true)]
    pub human_readable: bool,

    /// Run as if folio was started in <path> instead of the current
    /// directory. Can also be set via the FOLIO_ROOT environment variable.
    #[arg(short = 'C', long = "root", global = true, env = "FOLIO_ROOT")]
    pub site_root: Option<std::path::PathBuf>,

    /// Override the content directory (default: from folio.toml, else
    /// content/projects)
    #[arg(long = "content-dir", global = true)]
    pub content_dir: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the catalog in a chosen ordering
    List {
        /// Ordering: "relevance" (highlights first) or "chronological".
        /// Unrecognized values fall back to relevance, matching the URL
        /// query parameter the listing page reads.
        #[arg(short, long)]
        order: Option<String>,

        /// Only records carrying this tag
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// Show one record by slug
    Show {
        /// Record slug (e.g. tide-tracker), or a detail path like
        /// /work/tide-tracker
        slug: String,
    },

    /// Emit the slug -> detail URL manifest for the page layer
    Routes,

    /// Catalog health: skipped documents, bad dates, missing fields
    ///
    /// Exits non-zero when problems exist, so site builds can gate on it.
    Check,
}
