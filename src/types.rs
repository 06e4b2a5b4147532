// src/types.rs
use serde::Serialize;
use std::path::PathBuf;

use crate::config::RuleMode;
use crate::imports::ReferenceKind;
use crate::policy::{LayerDecision, SegmentDecision};

/// How loudly a violation is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// Severity for an enabled rule mode; `None` when the rule is off.
    #[must_use]
    pub fn from_mode(mode: RuleMode) -> Option<Self> {
        match mode {
            RuleMode::Error => Some(Self::Error),
            RuleMode::Warn => Some(Self::Warning),
            RuleMode::Off => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

/// Decision data behind a violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViolationDetails {
    CrossLayer {
        specifier: String,
        reference: ReferenceKind,
        decision: LayerDecision,
    },
    Segment {
        decision: SegmentDecision,
    },
}

/// A single violation detected during a check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub row: usize,
    pub message: String,
    pub rule: &'static str,
    pub severity: Severity,
    pub details: ViolationDetails,
}

impl Violation {
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Check results for a single file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub references: usize,
    pub violations: Vec<Violation>,
}

impl FileReport {
    /// Returns true if no violations were found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Aggregated results from checking multiple files.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanReport {
    pub files: Vec<FileReport>,
    pub total_references: usize,
    pub errors: usize,
    pub warnings: usize,
    /// Files that could not be read or parsed.
    pub skipped: Vec<PathBuf>,
    pub duration_ms: u128,
}

impl ScanReport {
    /// Returns true if any error-severity violations were found.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    #[must_use]
    pub fn total_violations(&self) -> usize {
        self.errors + self.warnings
    }

    /// Returns the number of clean files.
    #[must_use]
    pub fn clean_file_count(&self) -> usize {
        self.files.iter().filter(|f| f.is_clean()).count()
    }
}
