//! Shape rasterizer - converts shape parameters to bitmaps.
//!
//! Every pixel of the canvas is tested against the shape and coloured by the
//! fill rule. Output is fully determined by the inputs.

use crate::error::{Result, TexError};
use crate::types::{check_dimensions, Bitmap, Colour, Fill, Gradient, GradientDirection, Point, Shape, ShapeParams};

use super::geometry::{in_circle, in_rectangle, is_inside, ring_zone, RingZone};
use super::gradient::{box_t, radial_t, Bounds};
use super::grid::rasterize_grid;

/// Rasterize a shape onto a `width` x `height` canvas.
///
/// Fails with `InvalidArgument` for an empty canvas, a zero grid chunk, or a
/// gradient fill on a shape that has no gradient form.
pub fn rasterize_shape(params: &ShapeParams, width: u32, height: u32) -> Result<Bitmap> {
    check_dimensions(width, height)?;

    let shape = &params.shape;
    match &params.fill {
        Fill::Flat {
            inside,
            outside,
            inner,
        } => {
            if let Shape::Grid { chunk_length } = *shape {
                return rasterize_grid(width, height, chunk_length, *inside, *outside);
            }
            let inner = inner.unwrap_or(*outside);
            Bitmap::from_fn(width, height, |x, y| {
                flat_colour(shape, pixel_point(x, y), *inside, *outside, inner)
            })
        }

        Fill::Gradient {
            gradient,
            background,
            direction,
        } => {
            if !shape.supports_gradient() {
                return Err(TexError::InvalidArgument {
                    message: format!("Gradient fill is not supported for {} shapes", shape.kind()),
                    help: Some(
                        "Use a flat fill, or a circle, ring, rectangle or square shape".to_string(),
                    ),
                });
            }
            Bitmap::from_fn(width, height, |x, y| {
                gradient_colour(shape, pixel_point(x, y), gradient, *background, *direction)
            })
        }
    }
}

fn pixel_point(x: u32, y: u32) -> Point {
    Point::new(x as f32, y as f32)
}

fn flat_colour(shape: &Shape, point: Point, inside: Colour, outside: Colour, inner: Colour) -> Colour {
    if let Shape::Ring {
        center,
        outer_radius,
        inner_radius,
    } = *shape
    {
        return match ring_zone(point, center, outer_radius, inner_radius) {
            RingZone::Inner => inner,
            RingZone::Band => inside,
            RingZone::Outside => outside,
        };
    }

    if is_inside(point, shape) {
        inside
    } else {
        outside
    }
}

fn gradient_colour(
    shape: &Shape,
    point: Point,
    gradient: &Gradient,
    background: Colour,
    direction: GradientDirection,
) -> Colour {
    match *shape {
        Shape::Circle { center, radius } => {
            if in_circle(point, center, radius) {
                gradient.evaluate(radial_t(point, center, radius))
            } else {
                background
            }
        }
        Shape::Ring {
            center,
            outer_radius,
            inner_radius,
        } => match ring_zone(point, center, outer_radius, inner_radius) {
            RingZone::Band => gradient.evaluate(radial_t(point, center, outer_radius)),
            RingZone::Inner | RingZone::Outside => background,
        },
        // Gradient squares cover the half-extent box and always shade by the
        // distance to the nearest side: 1 at the center, 0 on the edge.
        Shape::Square {
            center,
            width,
            height,
        } => match Bounds::of(shape) {
            Some(bounds) if in_rectangle(point, center, width, height) => {
                gradient.evaluate(box_t(point, &bounds, GradientDirection::ToCenterEdge))
            }
            _ => background,
        },
        _ => match Bounds::of(shape) {
            Some(bounds) if is_inside(point, shape) => {
                gradient.evaluate(box_t(point, &bounds, direction))
            }
            _ => background,
        },
    }
}
