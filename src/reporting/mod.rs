// src/reporting/mod.rs
//! Rendering of scan results.

pub mod console;
pub mod json;

pub use console::print_report;
pub use json::{print_json, to_json};

fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
