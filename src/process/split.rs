//! Grid splitting of a bitmap into tiles.
//!
//! A length that does not divide evenly hands its remainder to the first
//! tiles, one extra pixel each. Splitting 103 pixels into 3 gives 35, 34, 34.
//!
//! Tiles are produced from the bottom row up (bitmaps have a bottom-left
//! origin), left to right within a row:
//!
//! ```text
//!      +----+----+----+
//!  39  | 9  | 10 | 11 |
//!      +----+----+----+
//!  39  | 6  | 7  | 8  |
//!      +----+----+----+
//!  39  | 3  | 4  | 5  |
//!      +----+----+----+
//!  40  | 0  | 1  | 2  |
//!      +----+----+----+
//!        35   34   34
//! ```

use serde::Serialize;

use crate::error::{Result, TexError};
use crate::types::Bitmap;

/// A contiguous run of pixels along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: u32,
    pub len: u32,
}

/// One tile cut from a source bitmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    /// Column in the split grid, 0 = leftmost.
    pub column: u32,
    /// Row in the split grid, 0 = bottom.
    pub row: u32,
    /// Offset of the tile's bottom-left pixel in the source.
    pub x: u32,
    pub y: u32,
    pub bitmap: Bitmap,
}

/// Output ordering flags for split tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SplitOrder {
    pub reverse_x: bool,
    pub reverse_y: bool,
}

/// Divide `length` pixels into `count` spans, the first `length % count`
/// spans one pixel longer than the rest.
///
/// `count` must be non-zero.
pub fn spans(length: u32, count: u32) -> Vec<Span> {
    let avg = length / count;
    let rem = length % count;
    (0..count)
        .map(|i| Span {
            start: i * avg + i.min(rem),
            len: avg + u32::from(i < rem),
        })
        .collect()
}

/// Split a bitmap into `columns` x `rows` tiles.
///
/// Every tile is at least one pixel wide and tall, so neither count may
/// exceed the matching bitmap dimension.
pub fn split_bitmap(bitmap: &Bitmap, columns: u32, rows: u32) -> Result<Vec<Tile>> {
    if columns == 0 || rows == 0 {
        return Err(TexError::InvalidArgument {
            message: format!("Split counts must be at least 1, got {}x{}", columns, rows),
            help: Some("Use --columns and --rows values of 1 or more".to_string()),
        });
    }
    let (width, height) = bitmap.size();
    if columns > width || rows > height {
        return Err(TexError::InvalidArgument {
            message: format!(
                "Cannot split a {}x{} image into {}x{} tiles",
                width, height, columns, rows
            ),
            help: Some("Each tile needs at least one pixel in each direction".to_string()),
        });
    }

    let xs = spans(width, columns);
    let ys = spans(height, rows);

    let mut tiles = Vec::with_capacity(columns as usize * rows as usize);
    for (row, y) in ys.iter().enumerate() {
        for (column, x) in xs.iter().enumerate() {
            tiles.push(Tile {
                column: column as u32,
                row: row as u32,
                x: x.start,
                y: y.start,
                bitmap: bitmap.region(x.start, y.start, x.len, y.len),
            });
        }
    }
    Ok(tiles)
}

/// Output index of the tile at column `x`, row `y`.
///
/// Reversing X mirrors columns and reversing Y mirrors rows, each within its
/// own axis count. The result is always a permutation of
/// `0..columns * rows`.
pub fn compute_output_index(
    x: u32,
    y: u32,
    columns: u32,
    rows: u32,
    reverse_x: bool,
    reverse_y: bool,
) -> usize {
    debug_assert!(x < columns && y < rows, "tile ({}, {}) outside {}x{} grid", x, y, columns, rows);

    let column = if reverse_x { columns - 1 - x } else { x };
    let row = if reverse_y { rows - 1 - y } else { y };
    row as usize * columns as usize + column as usize
}

impl SplitOrder {
    /// Output index for `tile` in a `columns` x `rows` split.
    pub fn output_index(&self, tile: &Tile, columns: u32, rows: u32) -> usize {
        compute_output_index(tile.column, tile.row, columns, rows, self.reverse_x, self.reverse_y)
    }
}
