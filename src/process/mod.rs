//! Post-processing of existing bitmaps: grid splitting and colour
//! replacement.

mod replace;
mod split;

pub use replace::{count_colour, replace_colour};
pub use split::{compute_output_index, spans, split_bitmap, Span, SplitOrder, Tile};
