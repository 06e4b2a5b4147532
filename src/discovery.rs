// src/discovery.rs
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::config::DiscoveryConfig;
use crate::error::Result;

/// Collects the script files under each root, sorted and deduplicated.
///
/// A root that is itself a file is taken as-is when its extension matches.
///
/// # Errors
/// Returns error if a root cannot be walked.
pub fn discover(roots: &[PathBuf], config: &DiscoveryConfig) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for root in roots {
        walk_root(root, config, &mut files)?;
    }
    files.sort();
    files.dedup();
    debug!(count = files.len(), "discovered script files");
    Ok(files)
}

fn walk_root(root: &Path, config: &DiscoveryConfig, files: &mut Vec<PathBuf>) -> Result<()> {
    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !should_prune(e, config));

    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file() && has_script_extension(entry.path(), config) {
            files.push(clean_path(entry.path()));
        }
    }
    Ok(())
}

fn should_prune(entry: &DirEntry, config: &DiscoveryConfig) -> bool {
    entry.file_type().is_dir()
        && config
            .prune_dirs
            .iter()
            .any(|d| entry.file_name().to_string_lossy() == d.as_str())
}

fn has_script_extension(path: &Path, config: &DiscoveryConfig) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| config.extensions.iter().any(|x| x == ext))
}

fn clean_path(path: &Path) -> PathBuf {
    path.strip_prefix(".").unwrap_or(path).to_path_buf()
}
