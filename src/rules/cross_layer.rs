// src/rules/cross_layer.rs
//! `no-cross-layer-import`: a layer may only reference layers below it.

use tracing::debug;

use crate::classify::{path_layer, reference_layer};
use crate::imports::Reference;
use crate::layer::Layer;
use crate::origin::is_internal;
use crate::policy::LayerOrderPolicy;
use crate::types::{Severity, Violation, ViolationDetails};

pub const RULE_ID: &str = "no-cross-layer-import";

/// Checks every reference of one file against the layer order.
#[must_use]
pub fn check(
    file: &str,
    references: &[Reference],
    alias: &str,
    policy: &LayerOrderPolicy,
    severity: Severity,
) -> Vec<Violation> {
    let Some(current) = path_layer(file, policy.order()) else {
        debug!(file, "not inside an FSD layer, skipping layer order");
        return Vec::new();
    };

    references
        .iter()
        .filter_map(|r| check_reference(current, r, alias, policy, severity))
        .collect()
}

fn check_reference(
    current: Layer,
    reference: &Reference,
    alias: &str,
    policy: &LayerOrderPolicy,
    severity: Severity,
) -> Option<Violation> {
    let specifier = reference.specifier.as_str();
    if !is_internal(specifier, alias, policy.order()) {
        return None;
    }

    let target = reference_layer(specifier, alias, policy.order())?;
    let decision = policy.decide(Some(current), Some(target));
    if decision.allowed {
        return None;
    }

    Some(Violation {
        row: reference.row,
        message: message(current, target),
        rule: RULE_ID,
        severity,
        details: ViolationDetails::CrossLayer {
            specifier: specifier.to_string(),
            reference: reference.kind,
            decision,
        },
    })
}

fn message(from: Layer, to: Layer) -> String {
    format!(
        "Layer hierarchy violation: \"{from}\" layer cannot import from \"{to}\" layer. Follow FSD layer order"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imports::ReferenceKind;

    fn run(file: &str, specifier: &str) -> Vec<Violation> {
        let reference = Reference {
            specifier: specifier.to_string(),
            row: 1,
            kind: ReferenceKind::Static,
        };
        check(file, &[reference], "@", &LayerOrderPolicy::default(), Severity::Error)
    }

    #[test]
    fn test_downward_imports_pass() {
        assert!(run("/project/src/app/App.js", "@/pages/main").is_empty());
        assert!(run("/project/src/pages/home/index.js", "@/widgets/header").is_empty());
        assert!(run("/project/src/widgets/sidebar/Sidebar.js", "@/features/auth").is_empty());
        assert!(run("/project/src/features/profile/index.js", "@/entities/user").is_empty());
        assert!(run("/project/src/entities/post/ui/PostCard.js", "@/shared/ui").is_empty());
    }

    #[test]
    fn test_same_layer_and_external_pass() {
        assert!(run("/project/src/entities/user/index.js", "./UserCard").is_empty());
        assert!(run("/project/src/pages/home/index.js", "react").is_empty());
    }

    #[test]
    fn test_non_fsd_file_is_skipped() {
        assert!(run("/project/src/config/index.js", "@/app/config").is_empty());
    }

    #[test]
    fn test_upward_import_fails() {
        let violations = run("/project/src/pages/home/index.js", "@/app/config");
        assert_eq!(violations.len(), 1);
        let v = &violations[0];
        assert_eq!(v.rule, RULE_ID);
        assert_eq!(
            v.message,
            "Layer hierarchy violation: \"pages\" layer cannot import from \"app\" layer. Follow FSD layer order"
        );
        match &v.details {
            ViolationDetails::CrossLayer { decision, .. } => {
                assert_eq!(decision.from_layer, Some(Layer::Pages));
                assert_eq!(decision.to_layer, Some(Layer::App));
            }
            other => panic!("unexpected details: {other:?}"),
        }
    }

    #[test]
    fn test_skipping_layers_upward_fails() {
        assert_eq!(run("/project/src/shared/config/index.js", "@/app").len(), 1);
        assert_eq!(run("/project/src/entities/user/index.js", "../../../pages/home").len(), 1);
    }
}
