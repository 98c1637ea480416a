//! # Configuration
//!
//! Definition and parsing of a command directory's configuration.

use std::{
    collections::HashSet,
    fs::read_to_string,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Result};
use serde::Deserialize;

/// Configuration of a command directory scan.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ScanConfig {
    /// Directory to look up command modules in.
    pub path: PathBuf,
    /// Display name of the directory. Defaults to the directory's file name.
    #[serde(default)]
    pub name: Option<String>,
    /// File names to skip during the scan, matched verbatim.
    #[serde(default)]
    pub exclude: HashSet<String>,
}

impl ScanConfig {
    /// Default configuration for a directory path.
    pub fn new<P>(path: P) -> ScanConfig
    where
        P: Into<PathBuf>,
    {
        ScanConfig {
            path: path.into(),
            name: None,
            exclude: HashSet::new(),
        }
    }

    /// Set the display name of the directory.
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Add a file name to skip during the scan.
    pub fn exclude(mut self, file: &str) -> Self {
        self.exclude.insert(file.to_string());
        self
    }

    /// Load a configuration from a YAML file.
    pub fn from_file<P>(path: P) -> Result<ScanConfig>
    where
        P: AsRef<Path>,
    {
        let contents = read_to_string(&path)
            .map_err(|e| anyhow!("could not read {}: {e}", path.as_ref().display()))?;
        Self::from_str(contents.as_str())
    }

    /// Load a configuration from a string.
    pub fn from_str(contents: &str) -> Result<ScanConfig> {
        Ok(serde_yaml::from_str(contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str() {
        let config = ScanConfig::from_str(
            "path: plugins/commands
name: plugins
exclude:
  - wip.rs
  - scratch.rs
",
        )
        .unwrap();

        assert_eq!(config.path, PathBuf::from("plugins/commands"));
        assert_eq!(config.name.as_deref(), Some("plugins"));
        assert!(config.exclude.contains("wip.rs"));
        assert!(config.exclude.contains("scratch.rs"));
    }

    #[test]
    fn defaults() {
        let config = ScanConfig::from_str("path: plugins").unwrap();
        assert!(config.name.is_none());
        assert!(config.exclude.is_empty());
    }

    #[test]
    fn from_file() {
        let config = ScanConfig::from_file("test_data/scan.yaml").unwrap();
        assert_eq!(config.path, PathBuf::from("test_data/commands"));
        assert_eq!(config.name.as_deref(), Some("commands"));
        assert!(config.exclude.contains("skipme.rs"));
    }

    #[test]
    fn builder() {
        let config = ScanConfig::new("plugins").name("tools").exclude("wip.rs");
        assert_eq!(config.path, PathBuf::from("plugins"));
        assert_eq!(config.name.as_deref(), Some("tools"));
        assert!(config.exclude.contains("wip.rs"));
    }
}
