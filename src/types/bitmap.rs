//! Owned RGBA pixel grid.
//!
//! A `Bitmap` addresses pixels as `(x, y)` with the origin at the bottom-left
//! corner: row 0 is the bottom row. Generators and the tile splitter all work
//! in this space, and only the PNG layer flips rows to the top-down order
//! image files use.

use crate::error::{TexError, Result};

use super::Colour;

/// A width x height grid of colours, stored row-major from the bottom row up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<Colour>,
}

impl Bitmap {
    /// Create a bitmap filled with a single colour.
    ///
    /// Both dimensions must be at least 1.
    pub fn new(width: u32, height: u32, fill: Colour) -> Result<Self> {
        check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![fill; width as usize * height as usize],
        })
    }

    /// Create a bitmap by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Colour) -> Result<Self> {
        check_dimensions(width, height)?;
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Wrap an existing bottom-up, row-major pixel buffer.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Colour>) -> Result<Self> {
        check_dimensions(width, height)?;
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(TexError::invalid(format!(
                "Pixel buffer has {} entries, expected {} for {}x{}",
                pixels.len(),
                expected,
                width,
                height
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get a pixel, or `None` when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<Colour> {
        if x < self.width && y < self.height {
            Some(self.pixels[self.index(x, y)])
        } else {
            None
        }
    }

    /// All pixels, bottom row first.
    pub fn pixels(&self) -> &[Colour] {
        &self.pixels
    }

    /// Copy a rectangular region starting at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the region does not lie entirely inside the bitmap or is
    /// empty. Callers compute regions from the bitmap's own size, so a bad
    /// region is a logic error.
    pub fn region(&self, x: u32, y: u32, width: u32, height: u32) -> Bitmap {
        assert!(width > 0 && height > 0, "empty region {}x{}", width, height);
        assert!(
            x as u64 + width as u64 <= self.width as u64
                && y as u64 + height as u64 <= self.height as u64,
            "region {}x{} at ({}, {}) outside {}x{} bitmap",
            width,
            height,
            x,
            y,
            self.width,
            self.height
        );

        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for row in y..y + height {
            let start = self.index(x, row);
            pixels.extend_from_slice(&self.pixels[start..start + width as usize]);
        }
        Bitmap {
            width,
            height,
            pixels,
        }
    }

    /// Paste `other` with its bottom-left corner at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `other` does not fit.
    pub fn blit(&mut self, other: &Bitmap, x: u32, y: u32) {
        assert!(
            x as u64 + other.width as u64 <= self.width as u64
                && y as u64 + other.height as u64 <= self.height as u64,
            "cannot blit {}x{} at ({}, {}) into {}x{} bitmap",
            other.width,
            other.height,
            x,
            y,
            self.width,
            self.height
        );
        for row in 0..other.height {
            let src = other.index(0, row);
            let dst = self.index(x, y + row);
            self.pixels[dst..dst + other.width as usize]
                .copy_from_slice(&other.pixels[src..src + other.width as usize]);
        }
    }

    /// Apply `f` to every pixel, producing a new bitmap.
    pub fn map(&self, f: impl Fn(Colour) -> Colour) -> Bitmap {
        Bitmap {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().map(|&c| f(c)).collect(),
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Reject zero-sized canvases before any allocation.
pub(crate) fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(TexError::InvalidArgument {
            message: format!("Bitmap dimensions must be non-zero, got {}x{}", width, height),
            help: Some("Both width and height must be at least 1".to_string()),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(width: u32, height: u32) -> Bitmap {
        Bitmap::from_fn(width, height, |x, y| Colour::new(x as u8, y as u8, 0, 255)).unwrap()
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            Bitmap::new(0, 4, Colour::BLACK),
            Err(TexError::InvalidArgument { .. })
        ));
        assert!(Bitmap::from_fn(4, 0, |_, _| Colour::BLACK).is_err());
    }

    #[test]
    fn test_row_zero_is_first_in_storage() {
        let bitmap = numbered(3, 2);
        assert_eq!(bitmap.pixels()[0], Colour::new(0, 0, 0, 255));
        assert_eq!(bitmap.pixels()[5], Colour::new(2, 1, 0, 255));
        assert_eq!(bitmap.get(2, 1), Some(Colour::new(2, 1, 0, 255)));
        assert_eq!(bitmap.get(0, 2), None);
        assert_eq!(bitmap.get(3, 0), None);
    }

    #[test]
    fn test_region_then_blit_restores() {
        let source = numbered(5, 4);
        let part = source.region(1, 2, 3, 2);
        assert_eq!(part.size(), (3, 2));
        assert_eq!(part.get(0, 0), source.get(1, 2));
        assert_eq!(part.get(2, 1), source.get(3, 3));

        let mut target = Bitmap::new(5, 4, Colour::TRANSPARENT).unwrap();
        target.blit(&part, 1, 2);
        assert_eq!(target.get(3, 3), source.get(3, 3));
        assert_eq!(target.get(0, 0), Some(Colour::TRANSPARENT));
    }

    #[test]
    #[should_panic]
    fn test_region_outside_panics() {
        numbered(4, 4).region(2, 2, 3, 1);
    }

    #[test]
    fn test_from_pixels_checks_length() {
        assert!(Bitmap::from_pixels(2, 2, vec![Colour::BLACK; 3]).is_err());
        assert!(Bitmap::from_pixels(2, 2, vec![Colour::BLACK; 4]).is_ok());
    }
}
