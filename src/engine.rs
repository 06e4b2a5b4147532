// src/engine.rs
//! Runs the rule set over discovered files.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{FsdError, Result};
use crate::imports::ReferenceExtractor;
use crate::rules::RuleSet;
use crate::types::{FileReport, ScanReport};

/// The check engine. Holds compiled queries and the run's rules.
pub struct Engine {
    rules: RuleSet,
    extractor: ReferenceExtractor,
}

impl Engine {
    /// # Errors
    /// Returns error if the reference queries fail to compile.
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self {
            rules: RuleSet::new(config),
            extractor: ReferenceExtractor::new()?,
        })
    }

    /// Checks in-memory source attributed to `path`.
    ///
    /// # Errors
    /// Returns error if the source cannot be parsed.
    pub fn check_source(&self, path: &Path, content: &str) -> Result<FileReport> {
        let references = self.extractor.extract(path, content)?;
        let violations = self.rules.check(&path.to_string_lossy(), &references);
        debug!(
            file = %path.display(),
            references = references.len(),
            violations = violations.len(),
            "checked"
        );
        Ok(FileReport {
            path: path.to_path_buf(),
            references: references.len(),
            violations,
        })
    }

    /// Reads and checks one file.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn check_file(&self, path: &Path) -> Result<FileReport> {
        let content = fs::read_to_string(path).map_err(|source| FsdError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        self.check_source(path, &content)
    }

    /// Checks all files in parallel. Unreadable files are recorded as skipped.
    #[must_use]
    pub fn scan(&self, files: &[PathBuf]) -> ScanReport {
        let start = Instant::now();

        let results: Vec<(PathBuf, Result<FileReport>)> = files
            .par_iter()
            .map(|path| (path.clone(), self.check_file(path)))
            .collect();

        let mut report = ScanReport::default();
        for (path, result) in results {
            match result {
                Ok(file) => report.files.push(file),
                Err(e) => {
                    warn!(file = %path.display(), error = %e, "skipping file");
                    report.skipped.push(path);
                }
            }
        }

        report.files.sort_by(|a, b| a.path.cmp(&b.path));
        report.total_references = report.files.iter().map(|f| f.references).sum();
        let all = report.files.iter().flat_map(|f| &f.violations);
        let (errors, warnings): (Vec<_>, Vec<_>) = all.partition(|v| v.is_error());
        report.errors = errors.len();
        report.warnings = warnings.len();
        report.duration_ms = start.elapsed().as_millis();
        report
    }
}
