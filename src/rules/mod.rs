// src/rules/mod.rs
//! The two FSD rules, composed from the classifiers and policies.

pub mod cross_layer;
pub mod segments;

use tracing::debug;

use crate::config::Config;
use crate::imports::Reference;
use crate::layer::LayerOrder;
use crate::policy::{LayerOrderPolicy, SegmentPolicy};
use crate::scan::normalize_separators;
use crate::types::{Severity, Violation};

/// Rule state for one analysis run. Immutable and shared across workers.
#[derive(Debug, Clone)]
pub struct RuleSet {
    config: Config,
    layer_policy: LayerOrderPolicy,
    segment_policy: SegmentPolicy,
}

impl RuleSet {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_order(config, LayerOrder::fsd())
    }

    #[must_use]
    pub fn with_order(config: Config, order: LayerOrder) -> Self {
        let segment_policy =
            SegmentPolicy::new(config.rules.enforce_slice_segments.allowed_segments.clone());
        Self {
            config,
            layer_policy: LayerOrderPolicy::new(order),
            segment_policy,
        }
    }

    /// Runs every enabled rule over one file and its literal references.
    #[must_use]
    pub fn check(&self, file: &str, references: &[Reference]) -> Vec<Violation> {
        let file = normalize_separators(file);
        let mut violations = self.check_layer_order(&file, references);

        let mode = self.config.rules.enforce_slice_segments.mode;
        if let Some(severity) = Severity::from_mode(mode) {
            let order = self.layer_policy.order();
            violations.extend(segments::check(&file, &self.segment_policy, order, severity));
        }

        violations.sort_by_key(|v| v.row);
        violations
    }

    fn check_layer_order(&self, file: &str, references: &[Reference]) -> Vec<Violation> {
        let rule = &self.config.rules.no_cross_layer_import;
        let Some(severity) = Severity::from_mode(rule.mode) else {
            return Vec::new();
        };
        if self.config.is_ignored(file) {
            debug!(file, "matches an ignore pattern, skipping layer order");
            return Vec::new();
        }
        cross_layer::check(file, references, rule.alias(), &self.layer_policy, severity)
    }
}
