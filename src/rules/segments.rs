// src/rules/segments.rs
//! `enforce-slice-segments`: files inside a slice live in a known segment.

use crate::classify::classify_path;
use crate::layer::LayerOrder;
use crate::policy::SegmentPolicy;
use crate::types::{Severity, Violation, ViolationDetails};

pub const RULE_ID: &str = "enforce-slice-segments";

/// Checks the file's own location. Reported on row 1.
#[must_use]
pub fn check(
    file: &str,
    policy: &SegmentPolicy,
    order: &LayerOrder,
    severity: Severity,
) -> Option<Violation> {
    let classification = classify_path(file, order);
    if !classification.is_classified() {
        return None;
    }

    let decision = policy.decide(&classification);
    if decision.allowed {
        return None;
    }

    let (Some(layer), Some(slice), Some(segment)) = (
        classification.layer(),
        classification.slice(),
        classification.segment(),
    ) else {
        return None;
    };

    let message = format!(
        "File is in invalid segment \"{segment}\" within {layer}/{slice}/. Only these segments are allowed: {}",
        policy.allowed().joined()
    );

    Some(Violation {
        row: 1,
        message,
        rule: RULE_ID,
        severity,
        details: ViolationDetails::Segment { decision },
    })
}
