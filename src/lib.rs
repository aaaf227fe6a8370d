//! texgen - Shape texture generator and image tile splitter
//!
//! Rasterizes filled shapes (circles, rings, rectangles, triangles,
//! checkerboards) with flat or gradient fills into RGBA bitmaps, and
//! post-processes existing images by splitting them into tile grids or
//! replacing exact colours.

pub mod cli;
pub mod error;
pub mod output;
pub mod process;
pub mod recipe;
pub mod render;
pub mod types;
pub mod validation;

pub use error::{Result, TexError};
pub use process::{compute_output_index, replace_colour, split_bitmap, SplitOrder, Tile};
pub use recipe::{discover, discover_paths, DiscoveryResult, Manifest, RecipeFile, TextureDef};
pub use render::{rasterize_grid, rasterize_shape, read_png, write_png};
pub use types::{
    evaluate_gradient, AlphaStop, Bitmap, Colour, ColourStop, Fill, Gradient, GradientDirection,
    Point, Shape, ShapeParams,
};
pub use validation::{validate_recipes, Diagnostic, Severity, ValidationResult};
