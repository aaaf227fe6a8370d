//! Checkerboard rasterizer.

use crate::error::{Result, TexError};
use crate::types::{check_dimensions, Bitmap, Colour};

use super::geometry::chunk_value;

/// Fill a canvas with `chunk_length`-sized squares alternating between two
/// colours. The chunk containing the origin gets `colour_a`.
pub fn rasterize_grid(
    width: u32,
    height: u32,
    chunk_length: u32,
    colour_a: Colour,
    colour_b: Colour,
) -> Result<Bitmap> {
    check_dimensions(width, height)?;
    if chunk_length == 0 {
        return Err(TexError::InvalidArgument {
            message: "Grid chunk length must be non-zero".to_string(),
            help: Some("Use a chunk length of at least 1 pixel".to_string()),
        });
    }

    Bitmap::from_fn(width, height, |x, y| {
        if chunk_value(x, y, chunk_length) % 2 == 0 {
            colour_a
        } else {
            colour_b
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_scenario() {
        let bitmap = rasterize_grid(128, 128, 32, Colour::RED, Colour::GREEN).unwrap();
        assert_eq!(bitmap.get(0, 0), Some(Colour::RED));
        assert_eq!(bitmap.get(31, 31), Some(Colour::RED));
        assert_eq!(bitmap.get(32, 0), Some(Colour::GREEN));
        assert_eq!(bitmap.get(63, 31), Some(Colour::GREEN));
        assert_eq!(bitmap.get(0, 32), Some(Colour::GREEN));
        assert_eq!(bitmap.get(32, 32), Some(Colour::RED));
        assert_eq!(bitmap.get(127, 127), Some(Colour::RED));
    }

    #[test]
    fn test_partial_chunks_at_edges() {
        let bitmap = rasterize_grid(5, 3, 2, Colour::BLACK, Colour::WHITE).unwrap();
        assert_eq!(bitmap.get(4, 0), Some(Colour::BLACK));
        assert_eq!(bitmap.get(4, 2), Some(Colour::WHITE));
    }

    #[test]
    fn test_chunk_larger_than_canvas_is_solid() {
        let bitmap = rasterize_grid(8, 8, 64, Colour::BLACK, Colour::WHITE).unwrap();
        assert!(bitmap.pixels().iter().all(|&c| c == Colour::BLACK));
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(matches!(
            rasterize_grid(8, 8, 0, Colour::BLACK, Colour::WHITE),
            Err(TexError::InvalidArgument { .. })
        ));
        assert!(rasterize_grid(0, 8, 4, Colour::BLACK, Colour::WHITE).is_err());
    }
}
