//! Driver options and their TOML loader.
//!
//! ```toml
//! # migrate.toml
//! target_version = "2021-08-16"
//! prune_orphans = false
//! ```
//!
//! Both keys are optional. Without a file the driver migrates to the latest
//! version and prunes orphans.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Options for [`MigrationDriver`](crate::migration::MigrationDriver).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MigrationOptions {
    /// Version to migrate to. `None` means the latest version.
    pub target_version: Option<String>,
    /// Drop filters, date ranges and settings no item references.
    pub prune_orphans: bool,
}

impl Default for MigrationOptions {
    fn default() -> Self {
        Self {
            target_version: None,
            prune_orphans: true,
        }
    }
}

impl MigrationOptions {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse migration options")
    }

    /// Loads options from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read migration options from {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid migration options in {}", path.display()))
    }

    pub fn with_target(mut self, version: impl Into<String>) -> Self {
        self.target_version = Some(version.into());
        self
    }

    pub fn with_pruning(mut self, prune_orphans: bool) -> Self {
        self.prune_orphans = prune_orphans;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let options = MigrationOptions::default();
        assert_eq!(options.target_version, None);
        assert!(options.prune_orphans);
        assert_eq!(MigrationOptions::from_toml_str("").unwrap(), options);
    }

    #[test]
    fn test_parse_partial_toml() {
        let options = MigrationOptions::from_toml_str("target_version = \"2021-08-16\"").unwrap();
        assert_eq!(options.target_version.as_deref(), Some("2021-08-16"));
        assert!(options.prune_orphans);

        let options = MigrationOptions::from_toml_str("prune_orphans = false").unwrap();
        assert_eq!(options.target_version, None);
        assert!(!options.prune_orphans);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(MigrationOptions::from_toml_str("prune = false").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "target_version = \"2021-10-14\"").unwrap();
        writeln!(file, "prune_orphans = false").unwrap();

        let options = MigrationOptions::load(file.path()).unwrap();
        assert_eq!(
            options,
            MigrationOptions::default()
                .with_target("2021-10-14")
                .with_pruning(false)
        );
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = MigrationOptions::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("missing.toml"));
    }
}
