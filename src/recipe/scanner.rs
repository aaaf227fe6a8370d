//! File system scanner for recipe files.
//!
//! Recursively scans directories for `.texture.yaml` / `.texture.yml` files.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::manifest::Manifest;

/// Recipe file suffixes.
pub const RECIPE_SUFFIXES: [&str; 2] = [".texture.yaml", ".texture.yml"];

/// Result of scanning for recipe files.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ScanResult {
    /// Discovered recipe files, in walk order.
    pub recipes: Vec<PathBuf>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Merge another scan result into this one, skipping files already seen.
    pub fn merge(&mut self, other: ScanResult) {
        for path in other.recipes {
            if !self.recipes.contains(&path) {
                self.recipes.push(path);
            }
        }
    }
}

/// Scan a directory for recipe files.
///
/// Entries are visited in file-name order so repeated builds see the same
/// sequence.
pub fn scan_directory(root: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    if !root.exists() {
        return result;
    }

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !entry.file_type().is_file() {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        if manifest.is_excluded(relative) {
            continue;
        }

        if is_recipe_file(path) {
            result.recipes.push(path.to_path_buf());
        }
    }

    result
}

/// Scan multiple source paths relative to `base_path`.
pub fn scan_sources(sources: &[String], base_path: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    for source in sources {
        let source_path = if Path::new(source).is_absolute() {
            PathBuf::from(source)
        } else {
            base_path.join(source)
        };

        result.merge(scan_directory(&source_path, manifest));
    }

    result
}

/// Whether a path names a recipe file.
pub fn is_recipe_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| RECIPE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)))
}
