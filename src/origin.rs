// src/origin.rs
//! Decides whether a reference is governed by the layering rules.

use serde::Serialize;

use crate::layer::LayerOrder;

/// Where a module reference points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Relative, aliased or layer-rooted; subject to layering rules.
    Internal,
    /// Third-party package; exempt.
    External,
}

impl Origin {
    #[must_use]
    pub fn of(reference: &str, alias: &str, order: &LayerOrder) -> Self {
        if is_internal(reference, alias, order) {
            Self::Internal
        } else {
            Self::External
        }
    }
}

/// Returns true if `reference` must be checked against the layer order.
///
/// Check order matters: the alias rule runs before the bare-name rule.
#[must_use]
pub fn is_internal(reference: &str, alias: &str, order: &LayerOrder) -> bool {
    if reference.is_empty() {
        return false;
    }
    if reference.starts_with('.') {
        return true;
    }
    if starts_with_alias_dir(reference, alias) {
        return true;
    }
    if !reference.contains('/') {
        return false;
    }

    let first = reference.split('/').next().unwrap_or_default();
    let first = first.strip_prefix(alias).filter(|_| !alias.is_empty()).unwrap_or(first);
    order.token(first).is_some()
}

fn starts_with_alias_dir(reference: &str, alias: &str) -> bool {
    !alias.is_empty()
        && reference
            .strip_prefix(alias)
            .is_some_and(|rest| rest.starts_with('/'))
}
