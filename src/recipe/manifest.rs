//! Project manifest (texgen.yaml) parsing.
//!
//! The manifest names the directories that hold recipe files, where rendered
//! textures go, and the defaults applied to textures that leave them unset.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TexError};

/// Canvas edge length used when neither the recipe nor the manifest sets one.
pub const DEFAULT_SIZE: u32 = 128;

/// Project manifest loaded from texgen.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Source directories to scan for recipes.
    /// Defaults to current directory if empty.
    pub sources: Vec<String>,

    /// Output directory for rendered textures.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Default canvas edge length for textures without a size.
    pub size: Option<u32>,

    /// Default integer upscale applied when writing PNGs.
    pub scale: Option<u32>,

    /// Patterns to exclude from discovery.
    pub excludes: Vec<String>,
}

fn default_output() -> PathBuf {
    PathBuf::from("dist")
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            sources: vec![],
            output: default_output(),
            size: None,
            scale: None,
            excludes: vec![],
        }
    }
}

impl Manifest {
    /// Load manifest from a texgen.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| TexError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| TexError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check texgen.yaml syntax".to_string()),
        })
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy().replace('\\', "/");
        self.excludes
            .iter()
            .any(|pattern| matches_pattern(&path_str, pattern))
    }

    /// Get effective source paths, defaulting to current directory.
    pub fn effective_sources(&self) -> Vec<String> {
        if self.sources.is_empty() {
            vec![".".to_string()]
        } else {
            self.sources.clone()
        }
    }

    pub fn effective_size(&self) -> u32 {
        self.size.filter(|&s| s > 0).unwrap_or(DEFAULT_SIZE)
    }

    pub fn effective_scale(&self) -> u32 {
        self.scale.filter(|&s| s > 0).unwrap_or(1)
    }
}

/// Simple glob matching: `*.ext`, `dir/*`, `**/dir/*`, or a plain substring.
fn matches_pattern(path: &str, pattern: &str) -> bool {
    if let Some(suffix) = pattern.strip_prefix("**/") {
        if let Some(dir) = suffix.strip_suffix("/*") {
            return path.starts_with(&format!("{}/", dir))
                || path.contains(&format!("/{}/", dir));
        }
        return path.ends_with(suffix) || path.contains(&format!("/{}", suffix));
    }

    if let Some(suffix) = pattern.strip_prefix('*') {
        if !suffix.contains('/') {
            return path.ends_with(suffix);
        }
    }

    if let Some(dir) = pattern.strip_suffix("/*") {
        return path.starts_with(&format!("{}/", dir)) || path.contains(&format!("/{}/", dir));
    }

    path.contains(pattern)
}
