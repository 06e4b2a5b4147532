// src/layer.rs
//! The Feature-Sliced Design layer model.
//!
//! Layers are a closed set. Their relative order lives in a [`LayerOrder`]
//! value that is built once and handed to whoever needs ordinals, so the
//! production ordering never has to be read from global state.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{FsdError, Result};

/// A named tier of the FSD hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layer {
    App,
    Pages,
    Widgets,
    Features,
    Entities,
    Shared,
}

impl Layer {
    /// Every layer, outermost first.
    pub const ALL: [Self; 6] = [
        Self::App,
        Self::Pages,
        Self::Widgets,
        Self::Features,
        Self::Entities,
        Self::Shared,
    ];

    /// Directory / module token naming this layer.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::App => "app",
            Self::Pages => "pages",
            Self::Widgets => "widgets",
            Self::Features => "features",
            Self::Entities => "entities",
            Self::Shared => "shared",
        }
    }

    /// Exact, case-sensitive token lookup.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.name() == token)
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Layer {
    type Err = FsdError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_token(s).ok_or_else(|| FsdError::Order(format!("unknown layer '{s}'")))
    }
}

impl Serialize for Layer {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Immutable ordinal table: position 0 is the layer closest to the entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerOrder {
    layers: Vec<Layer>,
}

impl LayerOrder {
    /// The FSD convention: app, pages, widgets, features, entities, shared.
    #[must_use]
    pub fn fsd() -> Self {
        Self {
            layers: Layer::ALL.to_vec(),
        }
    }

    /// Builds an alternate ordering, outermost first.
    ///
    /// Layers left out are not recognized as tokens by anything holding
    /// this order.
    ///
    /// # Errors
    /// Returns [`FsdError::Order`] if a layer appears twice or the list is empty.
    pub fn from_layers<I>(layers: I) -> Result<Self>
    where
        I: IntoIterator<Item = Layer>,
    {
        let mut seen = Vec::new();
        for layer in layers {
            if seen.contains(&layer) {
                return Err(FsdError::Order(format!("layer '{layer}' listed twice")));
            }
            seen.push(layer);
        }
        if seen.is_empty() {
            return Err(FsdError::Order("no layers given".to_string()));
        }
        Ok(Self { layers: seen })
    }

    /// Ordinal of `layer`; smaller means closer to the entry point.
    #[must_use]
    pub fn ordinal(&self, layer: Layer) -> Option<usize> {
        self.layers.iter().position(|l| *l == layer)
    }

    /// Resolves a path component to a layer known to this order.
    #[must_use]
    pub fn token(&self, component: &str) -> Option<Layer> {
        Layer::from_token(component).filter(|l| self.layers.contains(l))
    }
}

impl Default for LayerOrder {
    fn default() -> Self {
        Self::fsd()
    }
}
