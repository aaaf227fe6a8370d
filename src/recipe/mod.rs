//! Recipe discovery and loading for texgen projects.
//!
//! A project is a directory with an optional `texgen.yaml` manifest and any
//! number of `*.texture.yaml` recipe files.
//!
//! # Example
//!
//! ```ignore
//! use texgen::recipe::discover;
//!
//! let result = discover("./my-project")?;
//! for recipe in result.load_recipes()? {
//!     println!("{}: {} textures", recipe.path.display(), recipe.textures.len());
//! }
//! ```

mod manifest;
mod scanner;
mod texture;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use manifest::{Manifest, DEFAULT_SIZE};
pub use scanner::{is_recipe_file, scan_directory, scan_sources, ScanResult, RECIPE_SUFFIXES};
pub use texture::{RecipeFile, TextureDef};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "texgen.yaml";

/// Result of discovering recipes in a project.
#[derive(Debug)]
pub struct DiscoveryResult {
    /// The project root directory.
    pub root: PathBuf,

    /// The loaded manifest (default if no texgen.yaml was found).
    pub manifest: Manifest,

    pub has_manifest: bool,

    pub scan: ScanResult,
}

impl DiscoveryResult {
    /// Parse every discovered recipe file, stopping at the first error.
    pub fn load_recipes(&self) -> Result<Vec<RecipeFile>> {
        self.scan
            .recipes
            .iter()
            .map(|path| RecipeFile::load(path))
            .collect()
    }

    /// Output directory, resolved against the project root.
    pub fn output_dir(&self) -> PathBuf {
        if self.manifest.output.is_absolute() {
            self.manifest.output.clone()
        } else {
            self.root.join(&self.manifest.output)
        }
    }
}

/// Discover recipes in a project directory.
///
/// Reads `texgen.yaml` from `root` when present and scans its sources;
/// otherwise scans the whole directory.
pub fn discover(root: impl AsRef<Path>) -> Result<DiscoveryResult> {
    let root = root.as_ref().to_path_buf();

    let manifest_path = root.join(MANIFEST_FILENAME);
    let (manifest, has_manifest) = if manifest_path.exists() {
        (Manifest::load(&manifest_path)?, true)
    } else {
        (Manifest::default(), false)
    };

    let scan = scan_sources(&manifest.effective_sources(), &root, &manifest);

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest,
        scan,
    })
}

/// Discover recipes from explicit files and directories (no manifest lookup).
///
/// Files are taken as given, whatever their suffix; directories are scanned.
pub fn discover_paths(paths: &[PathBuf]) -> Result<DiscoveryResult> {
    let manifest = Manifest::default();
    let mut scan = ScanResult::new();

    for path in paths {
        if path.is_dir() {
            scan.merge(scan_directory(path, &manifest));
        } else {
            scan.merge(ScanResult {
                recipes: vec![path.clone()],
            });
        }
    }

    Ok(DiscoveryResult {
        root: PathBuf::from("."),
        manifest,
        has_manifest: false,
        scan,
    })
}
