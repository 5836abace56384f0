use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Root directory used when neither the command line nor a settings file
/// names one. Relative to the current working directory.
pub const DEFAULT_ROOT: &str = "testbed";

/// Options for a fixture build. Every field is optional so the same type
/// describes a settings file and the command-line overrides layered on top.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub root: Option<PathBuf>,
    pub seed: Option<u64>,
    pub manifest: Option<PathBuf>,
}

impl Settings {
    /// Values set in `over` win; unset ones fall back to `self`.
    pub fn overlay(self, over: Settings) -> Settings {
        Settings {
            root: over.root.or(self.root),
            seed: over.seed.or(self.seed),
            manifest: over.manifest.or(self.manifest),
        }
    }

    pub fn root_or_default(&self) -> PathBuf {
        self.root
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT))
    }
}

pub fn parse_settings(text: &str) -> Result<Settings> {
    toml::from_str(text).context("invalid settings")
}

/// Read settings from a TOML file.
pub fn load_settings(path: &Path) -> Result<Settings> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file {}", path.display()))?;
    parse_settings(&text).with_context(|| format!("in settings file {}", path.display()))
}
