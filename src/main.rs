//! Folio CLI - query a portfolio content catalog from the command line.

use std::env;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use folio::cli::{Cli, Commands};
use folio::commands::{self, Output};
use folio::config::{FolioConfig, OutputFormat};

fn main() {
    init_logging();

    let cli = Cli::parse();

    // Determine site root: --root flag > FOLIO_ROOT env > cwd
    let site_root = resolve_site_root(cli.site_root);

    // Output format precedence: -H flag > folio.toml > default (json)
    let human = cli.human_readable || config_prefers_human(&site_root);

    let content_dir = cli.content_dir.as_deref();

    let result = match cli.command {
        Commands::List { order, tag } => {
            commands::list(&site_root, content_dir, order.as_deref(), tag.as_deref())
                .map(|r| output(&r, human))
        }
        Commands::Show { slug } => {
            commands::show(&site_root, content_dir, &slug).map(|r| output(&r, human))
        }
        Commands::Routes => commands::routes(&site_root, content_dir).map(|r| output(&r, human)),
        Commands::Check => commands::check(&site_root, content_dir).map(|r| {
            output(&r, human);
            // Build-time guard: a catalog with problems fails the check.
            if !r.ok {
                process::exit(1);
            }
        }),
    };

    if let Err(e) = result {
        if human {
            eprintln!("Error: {}", e);
        } else {
            eprintln!(
                r#"{{"error": {}}}"#,
                serde_json::to_string(&e.to_string()).unwrap_or_else(|_| "\"error\"".to_string())
            );
        }
        process::exit(1);
    }
}

/// Initialize tracing to stderr, filtered by FOLIO_LOG (default: warn).
///
/// Stdout is reserved for command output so the page generator can parse it.
fn init_logging() {
    let filter = EnvFilter::try_from_env("FOLIO_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Resolve the site root based on explicit flag/env or the current directory.
///
/// An explicit path must exist; there is no marker-file detection - the
/// config file is optional, so any directory can serve as a site root.
fn resolve_site_root(explicit_path: Option<PathBuf>) -> PathBuf {
    match explicit_path {
        Some(path) => {
            if !path.exists() {
                eprintln!(
                    r#"{{"error": "Specified site root does not exist: {}"}}"#,
                    path.display()
                );
                process::exit(1);
            }
            path
        }
        None => env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Whether folio.toml asks for human output. Config errors are ignored
/// here; the command itself will surface them.
fn config_prefers_human(site_root: &std::path::Path) -> bool {
    FolioConfig::load(site_root)
        .map(|c| c.output() == OutputFormat::Human)
        .unwrap_or(false)
}

fn output<T: Output>(result: &T, human: bool) {
    if human {
        println!("{}", result.to_human());
    } else {
        println!("{}", result.to_json());
    }
}
