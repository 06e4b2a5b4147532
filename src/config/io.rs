// src/config/io.rs
use regex::Regex;
use std::fs;
use std::path::Path;

use super::types::FsdToml;
use crate::error::{FsdError, Result};

/// Reads and parses a TOML configuration file.
///
/// # Errors
/// Returns error if the file cannot be read or is not a valid config.
pub fn read_toml(path: &Path) -> Result<FsdToml> {
    let content = fs::read_to_string(path).map_err(|source| FsdError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    parse_toml(&content, path)
}

/// Parses configuration text; `path` is only used for error context.
///
/// # Errors
/// Returns error on malformed TOML, unknown keys, or wrongly typed values.
pub fn parse_toml(content: &str, path: &Path) -> Result<FsdToml> {
    toml::from_str(content).map_err(|source| FsdError::Config {
        source,
        path: path.to_path_buf(),
    })
}

/// Compiles ignore patterns.
///
/// # Errors
/// Returns error on the first invalid regular expression.
pub fn compile_patterns(patterns: &[String]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|p| Regex::new(p).map_err(FsdError::from))
        .collect()
}
