//! Exact colour substitution.

use crate::types::{Bitmap, Colour};

/// Return a copy of `bitmap` with every pixel equal to `from` (all four
/// channels) replaced by `to`. Other pixels are untouched.
pub fn replace_colour(bitmap: &Bitmap, from: Colour, to: Colour) -> Bitmap {
    bitmap.map(|c| if c == from { to } else { c })
}

/// Number of pixels exactly equal to `colour`.
pub fn count_colour(bitmap: &Bitmap, colour: Colour) -> usize {
    bitmap.pixels().iter().filter(|&&c| c == colour).count()
}
