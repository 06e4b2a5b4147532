// src/config/types.rs
use serde::{Deserialize, Serialize};

use crate::policy::AllowedSegments;

/// Enforcement mode of a single rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleMode {
    #[default]
    Error,
    Warn,
    Off,
}

/// `[rules.no_cross_layer_import]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CrossLayerConfig {
    pub mode: RuleMode,
    /// Path alias prefix, e.g. `@` for `@/entities/user`. Default: `@`
    pub alias: String,
    /// Regular expressions; matching files are not checked.
    pub ignore_patterns: Vec<String>,
}

impl Default for CrossLayerConfig {
    fn default() -> Self {
        Self {
            mode: RuleMode::Error,
            alias: default_alias(),
            ignore_patterns: Vec::new(),
        }
    }
}

impl CrossLayerConfig {
    /// Configured alias, falling back to `@` when left empty.
    #[must_use]
    pub fn alias(&self) -> &str {
        if self.alias.is_empty() {
            DEFAULT_ALIAS
        } else {
            &self.alias
        }
    }
}

/// `[rules.enforce_slice_segments]`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SegmentsConfig {
    pub mode: RuleMode,
    pub allowed_segments: AllowedSegments,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuleConfig {
    pub no_cross_layer_import: CrossLayerConfig,
    pub enforce_slice_segments: SegmentsConfig,
}

/// `[discovery]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiscoveryConfig {
    pub extensions: Vec<String>,
    pub prune_dirs: Vec<String>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            prune_dirs: default_prune_dirs(),
        }
    }
}

/// On-disk shape of `fsdlint.toml`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FsdToml {
    pub rules: RuleConfig,
    pub discovery: DiscoveryConfig,
}

pub const DEFAULT_ALIAS: &str = "@";

fn default_alias() -> String {
    DEFAULT_ALIAS.to_string()
}

fn default_extensions() -> Vec<String> {
    ["ts", "tsx", "js", "jsx", "mjs", "cjs"].map(String::from).to_vec()
}

fn default_prune_dirs() -> Vec<String> {
    ["node_modules", ".git", "dist", "build", "coverage"].map(String::from).to_vec()
}
