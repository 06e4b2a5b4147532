// src/classify/mod.rs
//! Path and reference classification into `{layer, slice, segment}`.
//!
//! The two classifiers share one scan primitive but prepare their input
//! differently: paths drop a file leaf and stop at the first directory
//! match, references strip an alias run and scan every component.

pub mod path;
pub mod reference;
pub mod types;

pub use path::{classify_path, path_layer};
pub use reference::{classify_reference, reference_layer, strip_alias};
pub use types::Classification;
