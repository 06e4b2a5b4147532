// src/cli.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fsdlint", version, about = "Feature-Sliced Design architecture guard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Log rule decisions to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check layer order and slice segments
    Check {
        /// Files or directories to check
        #[arg(default_value = ".")]
        paths: Vec<PathBuf>,
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
        /// Configuration file (default: fsdlint.toml in the first PATH if it is a
        /// directory, else in the working directory)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
    /// Print how a path or reference string is classified
    Classify {
        input: String,
        /// Treat INPUT as a module reference instead of a file path
        #[arg(long)]
        reference: bool,
        /// Alias prefix for references
        #[arg(long, default_value = "@")]
        alias: String,
    },
}
