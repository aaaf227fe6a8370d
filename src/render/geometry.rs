//! Point-in-shape predicates.
//!
//! Pixels are sampled at their integer coordinates, so pixel `(x, y)` is the
//! point `(x as f32, y as f32)`.

use crate::types::{Point, Shape};

/// Which part of a ring a point falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingZone {
    /// Inside the inner disc. Takes precedence even when the inner radius
    /// is larger than the outer one.
    Inner,
    /// Inside the outer disc only.
    Band,
    Outside,
}

/// Strictly inside the disc: a point exactly `radius` away is outside.
pub fn in_circle(point: Point, center: Point, radius: f32) -> bool {
    point.distance(center) < radius
}

pub fn ring_zone(point: Point, center: Point, outer_radius: f32, inner_radius: f32) -> RingZone {
    if in_circle(point, center, inner_radius) {
        RingZone::Inner
    } else if in_circle(point, center, outer_radius) {
        RingZone::Band
    } else {
        RingZone::Outside
    }
}

/// Inside a box whose full side lengths are `width` x `height`, edges
/// included.
pub fn in_rectangle(point: Point, center: Point, width: f32, height: f32) -> bool {
    (point.x - center.x).abs() <= width / 2.0 && (point.y - center.y).abs() <= height / 2.0
}

/// Inside a box reaching `width` and `height` from the center, edges
/// included.
pub fn in_square(point: Point, center: Point, width: f32, height: f32) -> bool {
    (point.x - center.x).abs() <= width && (point.y - center.y).abs() <= height
}

/// Inside or on the edge of the triangle.
///
/// Uses the edge-sign test: the point is outside only when it lies strictly
/// on the left of one edge and strictly on the right of another. Zero signs
/// never exclude a point, so collinear vertices still classify points on the
/// line as inside.
pub fn in_triangle(point: Point, vertices: &[Point; 3]) -> bool {
    let [a, b, c] = *vertices;
    let d1 = edge_sign(point, a, b);
    let d2 = edge_sign(point, b, c);
    let d3 = edge_sign(point, c, a);

    let has_negative = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_positive = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_negative && has_positive)
}

fn edge_sign(p: Point, a: Point, b: Point) -> f32 {
    (p.x - b.x) * (a.y - b.y) - (a.x - b.x) * (p.y - b.y)
}

/// Unsigned area of a triangle. Zero for collinear vertices.
pub fn triangle_area(vertices: &[Point; 3]) -> f32 {
    let [a, b, c] = *vertices;
    edge_sign(c, a, b).abs() / 2.0
}

pub fn in_diagonal(point: Point) -> bool {
    point.x > point.y
}

/// Sum of the chunk coordinates containing pixel `(x, y)`.
///
/// `chunk_length` must be non-zero.
pub fn chunk_value(x: u32, y: u32, chunk_length: u32) -> u32 {
    x / chunk_length + y / chunk_length
}

/// Whether `point` belongs to `shape`.
///
/// For rings this is the band between the two discs; for grids it is the
/// even chunks (a zero chunk length has no chunks and matches nothing).
pub fn is_inside(point: Point, shape: &Shape) -> bool {
    match *shape {
        Shape::Circle { center, radius } => in_circle(point, center, radius),
        Shape::Ring {
            center,
            outer_radius,
            inner_radius,
        } => ring_zone(point, center, outer_radius, inner_radius) == RingZone::Band,
        Shape::Rectangle {
            center,
            width,
            height,
        } => in_rectangle(point, center, width, height),
        Shape::Square {
            center,
            width,
            height,
        } => in_square(point, center, width, height),
        Shape::Triangle { ref vertices } => in_triangle(point, vertices),
        Shape::Diagonal => in_diagonal(point),
        Shape::Grid { chunk_length } => {
            if chunk_length == 0 || point.x < 0.0 || point.y < 0.0 {
                return false;
            }
            chunk_value(point.x as u32, point.y as u32, chunk_length) % 2 == 0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_circle_is_strict() {
        let c = p(64.0, 64.0);
        assert!(in_circle(p(64.0, 64.0), c, 50.0));
        assert!(in_circle(p(64.0, 113.0), c, 50.0));
        assert!(!in_circle(p(64.0, 114.0), c, 50.0));
        assert!(!in_circle(p(114.0, 64.0), c, 50.0));
    }

    #[test]
    fn test_zero_radius_circle_is_empty() {
        assert!(!in_circle(p(3.0, 3.0), p(3.0, 3.0), 0.0));
    }

    #[test]
    fn test_ring_zones() {
        let c = p(10.0, 10.0);
        assert_eq!(ring_zone(p(10.0, 10.0), c, 8.0, 4.0), RingZone::Inner);
        assert_eq!(ring_zone(p(16.0, 10.0), c, 8.0, 4.0), RingZone::Band);
        assert_eq!(ring_zone(p(18.0, 10.0), c, 8.0, 4.0), RingZone::Outside);
    }

    #[test]
    fn test_inverted_ring_inner_wins() {
        let c = p(10.0, 10.0);
        // Inner radius larger than outer: everything in the big disc is inner.
        assert_eq!(ring_zone(p(16.0, 10.0), c, 4.0, 8.0), RingZone::Inner);
        assert_eq!(ring_zone(p(11.0, 10.0), c, 4.0, 8.0), RingZone::Inner);
    }

    #[test]
    fn test_rectangle_uses_half_extents() {
        let c = p(10.0, 10.0);
        assert!(in_rectangle(p(13.0, 12.0), c, 6.0, 4.0));
        assert!(in_rectangle(p(7.0, 8.0), c, 6.0, 4.0));
        assert!(!in_rectangle(p(14.0, 10.0), c, 6.0, 4.0));
        assert!(!in_rectangle(p(10.0, 13.0), c, 6.0, 4.0));
    }

    #[test]
    fn test_square_uses_full_extents() {
        let c = p(10.0, 10.0);
        assert!(in_square(p(16.0, 14.0), c, 6.0, 4.0));
        assert!(in_square(p(4.0, 6.0), c, 6.0, 4.0));
        assert!(!in_square(p(17.0, 10.0), c, 6.0, 4.0));
        assert!(!in_square(p(10.0, 15.0), c, 6.0, 4.0));
    }

    #[test]
    fn test_triangle_inside_outside_and_edge() {
        let tri = [p(0.0, 0.0), p(10.0, 0.0), p(0.0, 10.0)];
        assert!(in_triangle(p(2.0, 2.0), &tri));
        assert!(in_triangle(p(5.0, 5.0), &tri)); // on the hypotenuse
        assert!(in_triangle(p(0.0, 0.0), &tri));
        assert!(!in_triangle(p(6.0, 6.0), &tri));
        assert!(!in_triangle(p(-1.0, 2.0), &tri));
    }

    #[test]
    fn test_triangle_rotation_and_reflection_invariant() {
        let (a, b, c) = (p(3.0, 1.0), p(20.0, 6.0), p(8.0, 18.0));
        let orders = [[a, b, c], [b, c, a], [c, a, b], [a, c, b]];
        for y in 0..24 {
            for x in 0..24 {
                let point = p(x as f32, y as f32);
                let expected = in_triangle(point, &orders[0]);
                for order in &orders[1..] {
                    assert_eq!(in_triangle(point, order), expected, "at ({}, {})", x, y);
                }
            }
        }
    }

    #[test]
    fn test_degenerate_triangle_accepts_collinear_points() {
        let line = [p(0.0, 0.0), p(5.0, 5.0), p(10.0, 10.0)];
        assert!(in_triangle(p(3.0, 3.0), &line));
        assert!(!in_triangle(p(3.0, 4.0), &line));

        let dot = [p(2.0, 2.0); 3];
        assert!(in_triangle(p(7.0, 1.0), &dot));
    }

    #[test]
    fn test_diagonal() {
        assert!(in_diagonal(p(3.0, 2.0)));
        assert!(!in_diagonal(p(2.0, 2.0)));
        assert!(!in_diagonal(p(1.0, 2.0)));
    }

    #[test]
    fn test_chunk_value() {
        assert_eq!(chunk_value(0, 0, 32), 0);
        assert_eq!(chunk_value(31, 31, 32), 0);
        assert_eq!(chunk_value(32, 0, 32), 1);
        assert_eq!(chunk_value(40, 70, 32), 3);
    }

    #[test]
    fn test_is_inside_dispatch() {
        let ring = Shape::Ring {
            center: p(10.0, 10.0),
            outer_radius: 8.0,
            inner_radius: 4.0,
        };
        assert!(!is_inside(p(10.0, 10.0), &ring));
        assert!(is_inside(p(16.0, 10.0), &ring));

        let grid = Shape::Grid { chunk_length: 4 };
        assert!(is_inside(p(1.0, 1.0), &grid));
        assert!(!is_inside(p(5.0, 1.0), &grid));
        assert!(!is_inside(p(1.0, 1.0), &Shape::Grid { chunk_length: 0 }));
    }

    #[test]
    fn test_triangle_area() {
        let tri = [p(0.0, 0.0), p(4.0, 0.0), p(0.0, 3.0)];
        assert_eq!(triangle_area(&tri), 6.0);
        assert_eq!(triangle_area(&[tri[2], tri[1], tri[0]]), 6.0);
        assert_eq!(triangle_area(&[p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0)]), 0.0);
    }
}
