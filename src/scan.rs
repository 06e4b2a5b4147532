// src/scan.rs
//! Token scanning shared by the path and reference classifiers.

use crate::layer::{Layer, LayerOrder};

/// Rewrites Windows separators so every input uses `/`.
#[must_use]
pub fn normalize_separators(raw: &str) -> String {
    raw.replace('\\', "/")
}

/// Splits a normalized string on `/`, keeping empty components.
#[must_use]
pub fn split_components(normalized: &str) -> Vec<&str> {
    normalized.split('/').collect()
}

/// Returns the index and layer of the first component naming a layer in `order`.
#[must_use]
pub fn find_layer(components: &[&str], order: &LayerOrder) -> Option<(usize, Layer)> {
    components
        .iter()
        .enumerate()
        .find_map(|(idx, part)| order.token(part).map(|layer| (idx, layer)))
}
