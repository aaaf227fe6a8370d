//! Gradient position policies.
//!
//! These map a pixel to the gradient parameter t. Box policies work on the
//! shape's bounding box; circles and rings use the radial distance. A zero
//! extent or radius always gives t = 0.

use crate::types::{GradientDirection, Point, Shape};

/// Axis-aligned box described by its center and half extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub center: Point,
    pub half_width: f32,
    pub half_height: f32,
}

impl Bounds {
    pub fn new(center: Point, half_width: f32, half_height: f32) -> Self {
        Self {
            center,
            half_width,
            half_height,
        }
    }

    /// The gradient box of a rectangle or square. `None` for other shapes.
    ///
    /// Both use half of width and height. A gradient square is the same box
    /// as a rectangle, unlike a flat square which reaches the full extents.
    pub fn of(shape: &Shape) -> Option<Self> {
        match *shape {
            Shape::Rectangle {
                center,
                width,
                height,
            }
            | Shape::Square {
                center,
                width,
                height,
            } => Some(Self::new(center, width / 2.0, height / 2.0)),
            _ => None,
        }
    }

    fn left(&self) -> f32 {
        self.center.x - self.half_width
    }

    fn right(&self) -> f32 {
        self.center.x + self.half_width
    }

    fn bottom(&self) -> f32 {
        self.center.y - self.half_height
    }

    fn top(&self) -> f32 {
        self.center.y + self.half_height
    }
}

/// Gradient parameter for `point` inside `bounds` under `direction`.
///
/// The center-relative policies are clamped to [0, 1]; the four side ramps
/// are not (the gradient clamps on lookup).
pub fn box_t(point: Point, bounds: &Bounds, direction: GradientDirection) -> f32 {
    use GradientDirection::*;

    let dx = (point.x - bounds.center.x).abs();
    let dy = (point.y - bounds.center.y).abs();

    let t = match direction {
        FromCenterEdge => edge_ratio(point, bounds).map(|r| 1.0 - r),
        ToCenterEdge => edge_ratio(point, bounds),
        FromCenterAxisMax => axis_max(dx, dy, bounds),
        ToCenterAxisMax => axis_max(dx, dy, bounds).map(|r| 1.0 - r),
        FromCenterX => axis_ratio(dx, bounds.half_width),
        ToCenterX => axis_ratio(dx, bounds.half_width).map(|r| 1.0 - r),
        FromCenterY => axis_ratio(dy, bounds.half_height),
        ToCenterY => axis_ratio(dy, bounds.half_height).map(|r| 1.0 - r),
        ToUp => ramp(point.y - bounds.bottom(), bounds.half_height * 2.0),
        ToDown => ramp(bounds.top() - point.y, bounds.half_height * 2.0),
        ToLeft => ramp(bounds.right() - point.x, bounds.half_width * 2.0),
        ToRight => ramp(point.x - bounds.left(), bounds.half_width * 2.0),
    };

    t.unwrap_or(0.0)
}

/// Distance from `center` as a fraction of `radius`, unclamped.
pub fn radial_t(point: Point, center: Point, radius: f32) -> f32 {
    if radius <= 0.0 {
        return 0.0;
    }
    point.distance(center) / radius
}

/// Distance to the nearest side over the smaller half extent, clamped.
/// 1 at the center of a square box, 0 on any side.
fn edge_ratio(point: Point, bounds: &Bounds) -> Option<f32> {
    let min_half = bounds.half_width.min(bounds.half_height);
    if min_half <= 0.0 {
        return None;
    }

    let to_side_x = (point.x - bounds.left()).abs().min((point.x - bounds.right()).abs());
    let to_side_y = (point.y - bounds.bottom()).abs().min((point.y - bounds.top()).abs());

    Some((to_side_x.min(to_side_y) / min_half).clamp(0.0, 1.0))
}

fn axis_ratio(distance: f32, half: f32) -> Option<f32> {
    if half <= 0.0 {
        return None;
    }
    Some((distance / half).clamp(0.0, 1.0))
}

fn axis_max(dx: f32, dy: f32, bounds: &Bounds) -> Option<f32> {
    let x = axis_ratio(dx, bounds.half_width)?;
    let y = axis_ratio(dy, bounds.half_height)?;
    Some(x.max(y))
}

fn ramp(offset: f32, extent: f32) -> Option<f32> {
    if extent <= 0.0 {
        return None;
    }
    Some(offset / extent)
}
