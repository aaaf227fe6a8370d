//! Rendering module for texgen.
//!
//! Turns shape parameters into bitmaps (geometry predicates, gradient
//! policies, the shape and checkerboard rasterizers) and moves bitmaps in and
//! out of PNG files.

pub mod geometry;
pub mod gradient;
mod grid;
mod png;
mod shape;

pub use grid::rasterize_grid;
pub use png::{from_image, read_png, scaled_size, to_image, write_png};
pub use shape::rasterize_shape;
