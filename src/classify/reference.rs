// src/classify/reference.rs
//! Classification of module reference strings (import specifiers).

use super::types::Classification;
use crate::layer::{Layer, LayerOrder};
use crate::scan::{find_layer, normalize_separators, split_components};

/// Maps a reference such as `@/entities/user/model` or
/// `../../features/auth` to its `{layer, slice, segment}`.
///
/// Every component is scanned, so any number of leading `../` is fine.
/// A layer token with nothing after it yields an unclassified result.
#[must_use]
pub fn classify_reference(reference: &str, alias: &str, order: &LayerOrder) -> Classification {
    if reference.is_empty() {
        return Classification::unclassified();
    }

    let normalized = normalize_separators(reference);
    let parts = split_components(strip_alias(&normalized, alias));

    let Some((idx, layer)) = find_layer(&parts, order) else {
        return Classification::unclassified();
    };

    Classification::from_match(layer, &parts[idx + 1..])
}

/// First layer token of a reference, with no slice requirement.
#[must_use]
pub fn reference_layer(reference: &str, alias: &str, order: &LayerOrder) -> Option<Layer> {
    let normalized = normalize_separators(reference);
    let parts = split_components(strip_alias(&normalized, alias));
    find_layer(&parts, order).map(|(_, layer)| layer)
}

/// Drops a leading `<alias><anything but '/'>/` run.
///
/// This takes `@/`, `@shared/` and `@scope/` alike, not only the configured
/// alias followed by `/`.
#[must_use]
pub fn strip_alias<'a>(normalized: &'a str, alias: &str) -> &'a str {
    if alias.is_empty() {
        return normalized;
    }
    normalized
        .strip_prefix(alias)
        .and_then(|rest| rest.find('/').map(|idx| &rest[idx + 1..]))
        .unwrap_or(normalized)
}
