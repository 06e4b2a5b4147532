// src/reporting/console.rs
//! Terminal output for scan results.

use colored::Colorize;
use std::fs;
use std::path::Path;

use super::pluralize;
use crate::rules::segments;
use crate::types::{ScanReport, Severity, Violation};

/// Prints every violation with a source excerpt, then a summary line.
pub fn print_report(report: &ScanReport) {
    for file in &report.files {
        for v in &file.violations {
            print_violation(&file.path, v);
        }
    }
    for path in &report.skipped {
        println!("{} could not check {}", "skipped:".yellow(), path.display());
    }
    print_summary(report);
}

fn print_violation(path: &Path, v: &Violation) {
    let header = format!("{}: {}", v.severity.label(), v.message);
    match v.severity {
        Severity::Error => println!("{}", header.red().bold()),
        Severity::Warning => println!("{}", header.yellow()),
    }
    println!("  {} {}:{}", "-->".blue(), path.display(), v.row);
    // Segment findings are about the file's location, not a line in it.
    if v.rule != segments::RULE_ID {
        print_snippet(path, v.row);
    }
    println!("   {} {}", "=".blue(), v.rule.yellow());
    println!();
}

fn print_snippet(path: &Path, row: usize) {
    let Ok(content) = fs::read_to_string(path) else {
        return;
    };
    let Some(line) = content.lines().nth(row.saturating_sub(1)) else {
        return;
    };

    let gutter = format!("{row:3} |");
    println!("   {}", "|".blue());
    println!("   {} {}", gutter.blue(), line);

    let trimmed = line.trim_start();
    let padding = " ".repeat(line.len() - trimmed.len());
    let carets = "^".repeat(trimmed.len().max(1));
    println!("   {} {}{}", "|".blue(), padding, carets.red().bold());
}

fn print_summary(report: &ScanReport) {
    let checked = report.files.len();
    let files = pluralize("file", checked);

    if report.total_violations() == 0 {
        println!(
            "{} No FSD violations in {checked} {files} ({} ms).",
            "OK".green().bold(),
            report.duration_ms
        );
        return;
    }

    let mut parts = Vec::new();
    let clean = report.clean_file_count();
    if report.errors > 0 {
        parts.push(format!("{} {}", report.errors, pluralize("error", report.errors)));
    }
    if report.warnings > 0 {
        parts.push(format!("{} {}", report.warnings, pluralize("warning", report.warnings)));
    }

    let label = if report.has_errors() {
        "FAILED".red().bold()
    } else {
        "WARN".yellow().bold()
    };
    println!(
        "{label} {} across {checked} {files}, {clean} clean ({} ms).",
        parts.join(", "),
        report.duration_ms
    );
}
