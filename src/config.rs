//! Configuration for where the corpus lives and where topic files go.
//!
//! We look for a docsplit.toml at the repository root and, if present, load settings from there.
//! Paths are relative to the repository root. Command line flags override these values.

use facet::Facet;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the optional configuration file at the repository root.
pub const CONFIG_FILE: &str = "docsplit.toml";
/// Corpus document read when nothing else is configured.
pub const DEFAULT_SOURCE: &str = "patrol-llms-full.txt";
/// Directory that receives topic files when nothing else is configured.
pub const DEFAULT_OUTPUT_DIR: &str = "skills/patrol-doc/references";

#[derive(Facet, Clone, Debug, PartialEq, Eq)]
/// Repository-relative locations loaded from docsplit.toml or falling back to defaults.
pub struct Config {
    #[facet(default = DEFAULT_SOURCE.to_string())]
    /// Concatenated corpus document to split.
    pub source: String,
    #[facet(default = DEFAULT_OUTPUT_DIR.to_string())]
    /// Directory the topic files are written to, created if missing.
    pub output_dir: String,
    #[facet(default)]
    /// JSON topic table to use instead of the built-in one.
    pub topics: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            topics: None,
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from docsplit.toml under `root` if present.
    ///
    /// An unreadable or malformed file is reported and the defaults are used.
    pub fn load(root: &Path) -> Self {
        let path = root.join(CONFIG_FILE);
        let Ok(contents) = fs::read_to_string(&path) else {
            return Self::default();
        };
        match facet_toml::from_str::<Self>(&contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring malformed config");
                Self::default()
            }
        }
    }

    #[must_use]
    /// Absolute location of the corpus document.
    pub fn source_path(&self, root: &Path) -> PathBuf {
        root.join(&self.source)
    }

    #[must_use]
    /// Absolute location of the output directory.
    pub fn output_path(&self, root: &Path) -> PathBuf {
        root.join(&self.output_dir)
    }

    #[must_use]
    /// Absolute location of the configured topic table, if one is set.
    pub fn topics_path(&self, root: &Path) -> Option<PathBuf> {
        self.topics.as_ref().map(|t| root.join(t))
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
