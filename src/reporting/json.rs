// src/reporting/json.rs
use anyhow::Result;

use crate::types::ScanReport;

/// Serializes the report as pretty-printed JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn to_json(report: &ScanReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Prints the report as JSON on stdout.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json(report: &ScanReport) -> Result<()> {
    println!("{}", to_json(report)?);
    Ok(())
}
