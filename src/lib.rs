pub mod classify;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod exit;
pub mod imports;
pub mod layer;
pub mod logger;
pub mod origin;
pub mod policy;
pub mod reporting;
pub mod rules;
pub mod scan;
pub mod types;
