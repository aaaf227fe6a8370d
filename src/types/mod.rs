//! Core domain types for texgen.
//!
//! - `Colour` - RGBA colour values
//! - `Bitmap` - owned pixel grids with a bottom-left origin
//! - `Gradient` - colour/alpha stop curves
//! - `Shape`, `Fill`, `ShapeParams` - what to rasterize and how to colour it

mod bitmap;
mod colour;
mod gradient;
mod shape;

pub(crate) use bitmap::check_dimensions;

pub use bitmap::Bitmap;
pub use colour::Colour;
pub use gradient::{evaluate_gradient, AlphaStop, ColourStop, Gradient};
pub use shape::{Fill, GradientDirection, Point, Shape, ShapeParams};
