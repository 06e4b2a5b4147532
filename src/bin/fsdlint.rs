// src/bin/fsdlint.rs
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;

use fsdlint_core::classify::{classify_path, classify_reference};
use fsdlint_core::cli::{Cli, Commands};
use fsdlint_core::config::Config;
use fsdlint_core::discovery;
use fsdlint_core::engine::Engine;
use fsdlint_core::exit::FsdExit;
use fsdlint_core::layer::LayerOrder;
use fsdlint_core::logger;
use fsdlint_core::origin::Origin;
use fsdlint_core::reporting;

fn main() -> FsdExit {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return usage_exit(&e),
    };
    logger::init_cli_logger(cli.verbose);
    run(cli).into()
}

/// Usage errors are operational failures; `--help` and `--version` succeed.
fn usage_exit(e: &clap::Error) -> FsdExit {
    e.print().ok();
    if e.use_stderr() {
        FsdExit::Error
    } else {
        FsdExit::Success
    }
}

fn run(cli: Cli) -> Result<FsdExit> {
    match cli.command {
        Some(Commands::Check { paths, json, config }) => run_check(&paths, json, config.as_deref()),
        Some(Commands::Classify { input, reference, alias }) => {
            run_classify(&input, reference, &alias)
        }
        None => run_check(&[PathBuf::from(".")], false, None),
    }
}

fn run_check(paths: &[PathBuf], json: bool, config_path: Option<&Path>) -> Result<FsdExit> {
    let config = match config_path {
        Some(path) => Config::load_file(path)?,
        None => Config::load(config_root(paths))?,
    };

    let files = discovery::discover(paths, &config.discovery).context("file discovery failed")?;
    let engine = Engine::new(config)?;
    let report = engine.scan(&files);

    if json {
        reporting::print_json(&report)?;
    } else {
        reporting::print_report(&report);
    }

    if report.has_errors() {
        Ok(FsdExit::CheckFailed)
    } else {
        Ok(FsdExit::Success)
    }
}

/// The first checked path when it is a directory, else the working directory.
fn config_root(paths: &[PathBuf]) -> &Path {
    paths
        .first()
        .map(PathBuf::as_path)
        .filter(|p| p.is_dir())
        .unwrap_or_else(|| Path::new("."))
}

fn run_classify(input: &str, reference: bool, alias: &str) -> Result<FsdExit> {
    let order = LayerOrder::fsd();
    let value = if reference {
        json!({
            "input": input,
            "origin": Origin::of(input, alias, &order),
            "classification": classify_reference(input, alias, &order),
        })
    } else {
        json!({
            "input": input,
            "classification": classify_path(input, &order),
        })
    };
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(FsdExit::Success)
}
