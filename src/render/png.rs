//! PNG input and output for bitmaps.
//!
//! Bitmaps keep row 0 at the bottom; image files keep it at the top. The
//! conversion happens here and nowhere else.

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::error::{Result, TexError};
use crate::types::{Bitmap, Colour};

/// Pixel size of a `width` x `height` bitmap written at `scale`.
///
/// `None` when a scaled edge or the RGBA buffer length overflows. A scale of
/// 0 is treated as 1.
pub fn scaled_size(width: u32, height: u32, scale: u32) -> Option<(u32, u32)> {
    let scale = scale.max(1);
    let scaled_width = width.checked_mul(scale)?;
    let scaled_height = height.checked_mul(scale)?;
    (scaled_width as usize)
        .checked_mul(scaled_height as usize)?
        .checked_mul(4)?;
    Some((scaled_width, scaled_height))
}

/// Convert a bitmap to an image buffer, upscaled by an integer factor.
///
/// Uses nearest-neighbour scaling; a scale of 0 is treated as 1. Fails with
/// `InvalidArgument` when the scaled image would not fit in memory.
pub fn to_image(bitmap: &Bitmap, scale: u32) -> Result<RgbaImage> {
    let scale = scale.max(1);
    let (width, height) = bitmap.size();
    let (scaled_width, scaled_height) =
        scaled_size(width, height, scale).ok_or_else(|| TexError::InvalidArgument {
            message: format!("A {}x{} image at scale {} is too large", width, height, scale),
            help: Some("Use a smaller scale".to_string()),
        })?;

    let mut img: RgbaImage = ImageBuffer::new(scaled_width, scaled_height);
    for y in 0..height {
        let flipped = height - 1 - y;
        for x in 0..width {
            let rgba = Rgba(bitmap.get(x, y).unwrap_or(Colour::TRANSPARENT).to_rgba());
            for sy in 0..scale {
                for sx in 0..scale {
                    img.put_pixel(x * scale + sx, flipped * scale + sy, rgba);
                }
            }
        }
    }
    Ok(img)
}

/// Convert an image buffer to a bitmap.
pub fn from_image(img: &RgbaImage) -> Result<Bitmap> {
    let (width, height) = img.dimensions();
    Bitmap::from_fn(width, height, |x, y| {
        Colour::from_rgba(img.get_pixel(x, height - 1 - y).0)
    })
}

/// Write a bitmap to a PNG file.
///
/// # Arguments
///
/// * `bitmap` - The pixels to write
/// * `path` - Output file path
/// * `scale` - Integer scale factor (1 = no scaling)
pub fn write_png(bitmap: &Bitmap, path: &Path, scale: u32) -> Result<()> {
    let img = to_image(bitmap, scale)?;

    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| TexError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write PNG: {}", e),
        })?;

    Ok(())
}

/// Read any image file `image` can decode into a bitmap.
pub fn read_png(path: &Path) -> Result<Bitmap> {
    let img = image::open(path)
        .map_err(|e| TexError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to load image: {}", e),
        })?
        .to_rgba8();

    from_image(&img).map_err(|_| TexError::Build {
        message: format!("Image {} has zero dimensions", path.display()),
        help: Some("Input image must have non-zero width and height".to_string()),
    })
}
