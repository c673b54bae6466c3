//! Common test utilities for folio integration tests.
//!
//! Provides `TestEnv`, a throwaway site root with a content directory.
//! Every test owns its own temp directories, so tests are parallel-safe
//! without any shared state.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use assert_cmd::Command;
pub use tempfile::TempDir;

/// A test site root with a `content/projects` directory.
pub struct TestEnv {
    pub site_dir: TempDir,
}

impl TestEnv {
    /// Create a new empty site root (content directory included).
    pub fn new() -> Self {
        let site_dir = TempDir::new().unwrap();
        fs::create_dir_all(site_dir.path().join("content/projects")).unwrap();
        Self { site_dir }
    }

    /// Create a site root pre-populated with three documents:
    /// june (highlighted), march, and january - the worked example the
    /// orderings are easiest to eyeball with.
    pub fn with_sample_projects() -> Self {
        let env = Self::new();
        env.write_doc(
            "january.md",
            "---\n\
             title: January Project\n\
             date: \"2024-01-01\"\n\
             summary: The oldest one.\n\
             cover: /img/january.png\n\
             tags: [archive]\n\
             ---\n\
             January body.\n",
        );
        env.write_doc(
            "june.md",
            "---\n\
             title: June Project\n\
             date: \"2024-06-01\"\n\
             summary: The newest one.\n\
             cover: /img/june.png\n\
             highlight: true\n\
             tags: [featured, archive]\n\
             ---\n\
             June body.\n",
        );
        env.write_doc(
            "march.md",
            "---\n\
             title: March Project\n\
             date: \"2024-03-01\"\n\
             summary: The middle one.\n\
             cover: /img/march.png\n\
             ---\n\
             March body.\n",
        );
        env
    }

    /// Write a document into the content directory.
    pub fn write_doc(&self, name: &str, contents: &str) {
        let path = self.site_dir.path().join("content/projects").join(name);
        fs::write(path, contents).unwrap();
    }

    /// Write a folio.toml at the site root.
    pub fn write_config(&self, contents: &str) {
        fs::write(self.site_dir.path().join("folio.toml"), contents).unwrap();
    }

    /// Get a Command for the folio binary, running in the site root.
    pub fn folio(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_folio"));
        cmd.current_dir(self.site_dir.path());
        cmd
    }

    /// Path to the site root.
    pub fn path(&self) -> &Path {
        self.site_dir.path()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
