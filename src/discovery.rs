//! Finds rune sources on disk.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// File extension of rune sources.
pub const RUNE_EXTENSION: &str = "rune";

/// Recursively collects `*.rune` files under `root`, sorted so that batch
/// runs are deterministic. A file path is returned as-is.
pub fn discover_rune_files<P: AsRef<Path>>(root: P) -> Result<Vec<PathBuf>, walkdir::Error> {
    let root = root.as_ref();
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if !is_rune_file(entry.path()) {
            continue;
        }
        files.push(entry.into_path());
    }
    files.sort();
    Ok(files)
}

pub fn is_rune_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == RUNE_EXTENSION)
}
