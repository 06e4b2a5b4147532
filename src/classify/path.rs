// src/classify/path.rs
//! Classification of source file locations.

use super::types::Classification;
use crate::layer::{Layer, LayerOrder};
use crate::scan::{find_layer, normalize_separators, split_components};

/// Maps a file path to its `{layer, slice, segment}`.
///
/// A last component containing `.` is taken to be the file itself and is
/// not eligible as a layer, slice or segment. Directories with a dot in
/// their name are misread by this; it is a known approximation.
#[must_use]
pub fn classify_path(path: &str, order: &LayerOrder) -> Classification {
    if path.is_empty() {
        return Classification::unclassified();
    }

    let normalized = normalize_separators(path);
    let parts = split_components(&normalized);
    let dirs = directory_components(&parts);

    let Some((idx, layer)) = find_layer(dirs, order) else {
        return Classification::unclassified();
    };

    Classification::from_match(layer, &dirs[idx + 1..])
}

/// First layer token anywhere in the path, file leaf included.
///
/// Unlike [`classify_path`] this needs no slice after the token, so
/// `src/app/App.tsx` belongs to `app`.
#[must_use]
pub fn path_layer(path: &str, order: &LayerOrder) -> Option<Layer> {
    let normalized = normalize_separators(path);
    let parts = split_components(&normalized);
    find_layer(&parts, order).map(|(_, layer)| layer)
}

fn directory_components<'a, 'b>(parts: &'b [&'a str]) -> &'b [&'a str] {
    match parts.split_last() {
        Some((leaf, dirs)) if leaf.contains('.') => dirs,
        _ => parts,
    }
}
