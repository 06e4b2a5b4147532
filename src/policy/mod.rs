// src/policy/mod.rs
//! Layer-order and segment policies.

pub mod order;
pub mod segments;

pub use order::{LayerDecision, LayerOrderPolicy};
pub use segments::{AllowedSegments, SegmentDecision, SegmentPolicy};
