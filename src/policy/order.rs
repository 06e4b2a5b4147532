// src/policy/order.rs
//! Import direction between layers.

use serde::Serialize;

use crate::layer::{Layer, LayerOrder};

/// Outcome of a layer-order check.
///
/// `from_layer` and `to_layer` are set only when both sides were classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayerDecision {
    pub allowed: bool,
    pub from_layer: Option<Layer>,
    pub to_layer: Option<Layer>,
}

/// Dependencies must flow towards larger ordinals, never back.
#[derive(Debug, Clone, Default)]
pub struct LayerOrderPolicy {
    order: LayerOrder,
}

impl LayerOrderPolicy {
    #[must_use]
    pub fn new(order: LayerOrder) -> Self {
        Self { order }
    }

    #[must_use]
    pub fn order(&self) -> &LayerOrder {
        &self.order
    }

    /// Returns true unless `from` references a layer above itself.
    ///
    /// Unclassified sides (or layers this order does not know) are outside
    /// the scheme and always pass.
    #[must_use]
    pub fn is_allowed(&self, from: Option<Layer>, to: Option<Layer>) -> bool {
        let (Some(from), Some(to)) = (from, to) else {
            return true;
        };
        if from == to {
            return true;
        }
        match (self.order.ordinal(from), self.order.ordinal(to)) {
            (Some(a), Some(b)) => a < b,
            _ => true,
        }
    }

    #[must_use]
    pub fn decide(&self, from: Option<Layer>, to: Option<Layer>) -> LayerDecision {
        let allowed = self.is_allowed(from, to);
        match (from, to) {
            (Some(_), Some(_)) => LayerDecision { allowed, from_layer: from, to_layer: to },
            _ => LayerDecision { allowed, from_layer: None, to_layer: None },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_downward_allowed() {
        let policy = LayerOrderPolicy::default();
        assert!(policy.is_allowed(Some(Layer::Features), Some(Layer::Entities)));
        assert!(policy.is_allowed(Some(Layer::App), Some(Layer::Shared)));
    }

    #[test]
    fn test_upward_rejected() {
        let policy = LayerOrderPolicy::default();
        assert!(!policy.is_allowed(Some(Layer::Pages), Some(Layer::App)));
        assert!(!policy.is_allowed(Some(Layer::Shared), Some(Layer::App)));
    }

    #[test]
    fn test_same_layer_allowed() {
        let policy = LayerOrderPolicy::default();
        for layer in Layer::ALL {
            assert!(policy.is_allowed(Some(layer), Some(layer)));
        }
    }

    #[test]
    fn test_unclassified_has_no_opinion() {
        let policy = LayerOrderPolicy::default();
        assert!(policy.is_allowed(None, Some(Layer::App)));
        assert!(policy.is_allowed(Some(Layer::Shared), None));

        let decision = policy.decide(None, Some(Layer::App));
        assert!(decision.allowed);
        assert_eq!(decision.from_layer, None);
        assert_eq!(decision.to_layer, None);
    }

    #[test]
    fn test_decide_carries_layers() {
        let policy = LayerOrderPolicy::default();
        let decision = policy.decide(Some(Layer::Widgets), Some(Layer::Pages));
        assert!(!decision.allowed);
        assert_eq!(decision.from_layer, Some(Layer::Widgets));
        assert_eq!(decision.to_layer, Some(Layer::Pages));
    }

    #[test]
    fn test_alternate_order_is_respected() {
        let order = match LayerOrder::from_layers([Layer::Shared, Layer::App]) {
            Ok(o) => o,
            Err(e) => panic!("valid order rejected: {e}"),
        };
        let policy = LayerOrderPolicy::new(order);
        assert!(policy.is_allowed(Some(Layer::Shared), Some(Layer::App)));
        assert!(!policy.is_allowed(Some(Layer::App), Some(Layer::Shared)));
        assert!(policy.is_allowed(Some(Layer::Pages), Some(Layer::App)));
    }
}
