// src/classify/types.rs
use serde::Serialize;

use crate::layer::Layer;

/// Where a path or reference sits in the FSD hierarchy.
///
/// A slice is never present without a layer, and a segment never without
/// a slice; the constructors enforce this.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Classification {
    layer: Option<Layer>,
    slice: Option<String>,
    segment: Option<String>,
}

impl Classification {
    #[must_use]
    pub fn unclassified() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn new(layer: Layer, slice: &str, segment: Option<&str>) -> Self {
        Self {
            layer: Some(layer),
            slice: Some(slice.to_string()),
            segment: segment.map(ToString::to_string),
        }
    }

    /// Builds a classification from the components following a layer token.
    /// Empty components (`a//b`, trailing `/`) count as absent.
    pub(crate) fn from_match(layer: Layer, rest: &[&str]) -> Self {
        let slice = rest.first().copied().filter(|s| !s.is_empty());
        let segment = rest.get(1).copied().filter(|s| !s.is_empty());
        match slice {
            Some(slice) => Self::new(layer, slice, segment),
            None => Self::unclassified(),
        }
    }

    #[must_use]
    pub fn layer(&self) -> Option<Layer> {
        self.layer
    }

    #[must_use]
    pub fn slice(&self) -> Option<&str> {
        self.slice.as_deref()
    }

    #[must_use]
    pub fn segment(&self) -> Option<&str> {
        self.segment.as_deref()
    }

    #[must_use]
    pub fn is_classified(&self) -> bool {
        self.layer.is_some()
    }
}
