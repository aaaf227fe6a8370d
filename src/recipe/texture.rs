//! Recipe files (`*.texture.yaml`).
//!
//! A recipe lists one or more textures:
//!
//! ```yaml
//! textures:
//!   - name: orb
//!     size: 64
//!     shape: { kind: circle, center: [32, 32], radius: 28 }
//!     fill:
//!       type: gradient
//!       background: transparent
//!       gradient:
//!         colours:
//!           - { at: 0.0, colour: white }
//!           - { at: 1.0, colour: "#3366FF" }
//! ```
//!
//! Hex colours must be quoted, since `#` starts a YAML comment.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TexError};
use crate::render::rasterize_shape;
use crate::types::{Bitmap, Fill, Shape, ShapeParams};

/// One texture to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TextureDef {
    /// Output name; the PNG is written as `<name>.png`.
    pub name: String,

    /// Square canvas edge. `width`/`height` override it per axis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    /// Integer upscale for this texture, overriding the manifest default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<u32>,

    pub shape: Shape,
    pub fill: Fill,
}

impl TextureDef {
    /// Canvas dimensions, falling back to `default_size` for unset axes.
    pub fn dimensions(&self, default_size: u32) -> (u32, u32) {
        let base = self.size.unwrap_or(default_size);
        (self.width.unwrap_or(base), self.height.unwrap_or(base))
    }

    pub fn params(&self) -> ShapeParams {
        ShapeParams::new(self.shape.clone(), self.fill.clone())
    }

    /// Rasterize this texture.
    pub fn render(&self, default_size: u32) -> Result<Bitmap> {
        let (width, height) = self.dimensions(default_size);
        rasterize_shape(&self.params(), width, height).map_err(|e| match e {
            TexError::InvalidArgument { message, help } => TexError::Build {
                message: format!("Texture '{}': {}", self.name, message),
                help,
            },
            other => other,
        })
    }
}

/// A parsed recipe file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeFile {
    /// Where the recipe was loaded from; empty for in-memory recipes.
    #[serde(skip)]
    pub path: PathBuf,

    #[serde(default)]
    pub textures: Vec<TextureDef>,
}

impl RecipeFile {
    /// Load and parse a recipe file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| TexError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read recipe: {}", e),
        })?;

        let mut recipe = Self::parse(&content).map_err(|e| match e {
            TexError::Parse { message, help } => TexError::Parse {
                message: format!("{}: {}", path.display(), message),
                help,
            },
            other => other,
        })?;
        recipe.path = path.to_path_buf();
        Ok(recipe)
    }

    /// Parse a recipe from YAML.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self {
                path: PathBuf::new(),
                textures: vec![],
            });
        }
        serde_yaml::from_str(content).map_err(|e| TexError::Parse {
            message: format!("Invalid recipe: {}", e),
            help: Some(
                "Each texture needs a name, a shape with a `kind` and a fill with a `type`"
                    .to_string(),
            ),
        })
    }
}
