// src/policy/segments.rs
//! Closed set of segment names permitted inside a slice.

use serde::{Deserialize, Serialize};

use crate::classify::Classification;
use crate::layer::Layer;

/// Segment names a slice may contain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllowedSegments(Vec<String>);

impl AllowedSegments {
    pub const DEFAULT: [&'static str; 5] = ["model", "ui", "api", "lib", "config"];

    /// Replaces the default set wholesale.
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn contains(&self, segment: &str) -> bool {
        self.0.iter().any(|s| s == segment)
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.0
    }

    /// Comma-separated listing for diagnostics.
    #[must_use]
    pub fn joined(&self) -> String {
        self.0.join(", ")
    }
}

impl Default for AllowedSegments {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

/// Outcome of a segment check, with the data a diagnostic needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentDecision {
    pub allowed: bool,
    pub segment: Option<String>,
    pub layer: Option<Layer>,
    pub slice: Option<String>,
    pub allowed_segments: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct SegmentPolicy {
    allowed: AllowedSegments,
}

impl SegmentPolicy {
    #[must_use]
    pub fn new(allowed: AllowedSegments) -> Self {
        Self { allowed }
    }

    #[must_use]
    pub fn allowed(&self) -> &AllowedSegments {
        &self.allowed
    }

    /// Slice-root files (no segment) are always allowed.
    #[must_use]
    pub fn is_allowed(&self, segment: Option<&str>) -> bool {
        segment.map_or(true, |s| self.allowed.contains(s))
    }

    #[must_use]
    pub fn decide(&self, classification: &Classification) -> SegmentDecision {
        SegmentDecision {
            allowed: self.is_allowed(classification.segment()),
            segment: classification.segment().map(ToString::to_string),
            layer: classification.layer(),
            slice: classification.slice().map(ToString::to_string),
            allowed_segments: self.allowed.names().to_vec(),
        }
    }
}
