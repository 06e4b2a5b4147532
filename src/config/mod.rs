// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::types::{
    CrossLayerConfig, DiscoveryConfig, FsdToml, RuleConfig, RuleMode, SegmentsConfig,
};

use regex::Regex;
use std::path::Path;

use crate::error::Result;

/// Name of the per-project configuration file.
pub const CONFIG_FILE: &str = "fsdlint.toml";

/// Analysis-run configuration. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub rules: RuleConfig,
    pub discovery: DiscoveryConfig,
    pub ignore_patterns: Vec<Regex>,
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `fsdlint.toml` from `root`, or defaults when it does not exist.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed, or an ignore
    /// pattern is not a valid regular expression.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if !path.is_file() {
            return Ok(Self::new());
        }
        Self::load_file(&path)
    }

    /// Loads an explicit configuration file.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load_file(path: &Path) -> Result<Self> {
        let raw = io::read_toml(path)?;
        Self::from_toml(raw)
    }

    /// Compiles the raw file shape into a run configuration.
    ///
    /// # Errors
    /// Returns error if an ignore pattern is not a valid regular expression.
    pub fn from_toml(raw: FsdToml) -> Result<Self> {
        let ignore_patterns = io::compile_patterns(&raw.rules.no_cross_layer_import.ignore_patterns)?;
        Ok(Self {
            rules: raw.rules,
            discovery: raw.discovery,
            ignore_patterns,
        })
    }

    /// Returns true if the cross-layer rule skips this file.
    #[must_use]
    pub fn is_ignored(&self, normalized_path: &str) -> bool {
        self.ignore_patterns.iter().any(|re| re.is_match(normalized_path))
    }
}
