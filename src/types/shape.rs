//! Shape parameters: which primitive to draw and how to colour it.
//!
//! Geometry lives in [`Shape`], colouring in [`Fill`]. Both deserialize from
//! recipe YAML:
//!
//! ```yaml
//! shape: { kind: ring, center: [64, 64], outer-radius: 60, inner-radius: 40 }
//! fill: { type: flat, inside: red, outside: lime, inner: blue }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Colour, Gradient};

/// A position in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Geometric primitive, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case", rename_all_fields = "kebab-case")]
pub enum Shape {
    /// Disc; boundary pixels (distance == radius) are outside.
    Circle { center: Point, radius: f32 },

    /// Annulus made of two concentric discs.
    Ring {
        center: Point,
        outer_radius: f32,
        inner_radius: f32,
    },

    /// Axis-aligned box; `width`/`height` are full side lengths.
    Rectangle {
        center: Point,
        width: f32,
        height: f32,
    },

    /// Axis-aligned box; `width`/`height` are distances from the center to
    /// the sides, so the covered area is twice as wide as a rectangle with
    /// the same numbers. Gradient fills only cover the inner half of that.
    Square {
        center: Point,
        width: f32,
        height: f32,
    },

    Triangle { vertices: [Point; 3] },

    /// Half-split along the x == y diagonal: inside where x > y.
    Diagonal,

    /// Checkerboard of square chunks.
    Grid { chunk_length: u32 },
}

impl Shape {
    /// Short kind name as used in recipes.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Circle { .. } => "circle",
            Shape::Ring { .. } => "ring",
            Shape::Rectangle { .. } => "rectangle",
            Shape::Square { .. } => "square",
            Shape::Triangle { .. } => "triangle",
            Shape::Diagonal => "diagonal",
            Shape::Grid { .. } => "grid",
        }
    }

    /// Whether a gradient fill can be applied to this shape.
    pub fn supports_gradient(&self) -> bool {
        matches!(
            self,
            Shape::Circle { .. } | Shape::Ring { .. } | Shape::Rectangle { .. } | Shape::Square { .. }
        )
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}

/// How t is derived from a pixel inside a rectangle.
///
/// "Edge" policies measure the distance to the nearest side, "AxisMax" takes
/// the larger of the per-axis distances from the center, and X/Y use a single
/// axis. The `ToCenter` forms are the `FromCenter` forms inverted. The four
/// `To<Side>` policies ramp linearly across the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GradientDirection {
    #[default]
    FromCenterEdge,
    FromCenterAxisMax,
    FromCenterX,
    FromCenterY,
    ToCenterEdge,
    ToCenterAxisMax,
    ToCenterX,
    ToCenterY,
    ToUp,
    ToDown,
    ToLeft,
    ToRight,
}

impl GradientDirection {
    pub const ALL: [GradientDirection; 12] = [
        GradientDirection::FromCenterEdge,
        GradientDirection::FromCenterAxisMax,
        GradientDirection::FromCenterX,
        GradientDirection::FromCenterY,
        GradientDirection::ToCenterEdge,
        GradientDirection::ToCenterAxisMax,
        GradientDirection::ToCenterX,
        GradientDirection::ToCenterY,
        GradientDirection::ToUp,
        GradientDirection::ToDown,
        GradientDirection::ToLeft,
        GradientDirection::ToRight,
    ];
}

/// Colouring rule, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Fill {
    /// Two flat colours. `inner` colours a ring's inner disc and is ignored
    /// by other shapes; without it the disc shows `outside`.
    ///
    /// For grids, `inside` colours even chunks and `outside` odd chunks.
    Flat {
        inside: Colour,
        outside: Colour,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        inner: Option<Colour>,
    },

    /// Gradient inside the shape, `background` everywhere else.
    ///
    /// `direction` only applies to rectangles. Circles and rings are always
    /// radial, and squares always shade from the nearest side (1 at the
    /// center, 0 on the edge) over the box of half their width and height.
    Gradient {
        gradient: Gradient,
        background: Colour,
        #[serde(default)]
        direction: GradientDirection,
    },
}

impl Fill {
    /// A two-colour flat fill.
    pub fn flat(inside: Colour, outside: Colour) -> Self {
        Fill::Flat {
            inside,
            outside,
            inner: None,
        }
    }
}

/// Everything needed to rasterize one shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeParams {
    pub shape: Shape,
    pub fill: Fill,
}

impl ShapeParams {
    pub fn new(shape: Shape, fill: Fill) -> Self {
        Self { shape, fill }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_point_distance() {
        assert_eq!(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn test_deserialize_ring() {
        let yaml = "kind: ring\ncenter: [64, 64]\nouter-radius: 60\ninner-radius: 40\n";
        let shape: Shape = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            shape,
            Shape::Ring {
                center: Point::new(64.0, 64.0),
                outer_radius: 60.0,
                inner_radius: 40.0,
            }
        );
    }

    #[test]
    fn test_deserialize_point_as_map() {
        let yaml = "kind: circle\ncenter: { x: 3, y: 4.5 }\nradius: 2\n";
        let shape: Shape = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            shape,
            Shape::Circle {
                center: Point::new(3.0, 4.5),
                radius: 2.0
            }
        );
    }

    #[test]
    fn test_deserialize_unit_and_grid() {
        let shape: Shape = serde_yaml::from_str("kind: diagonal").unwrap();
        assert_eq!(shape, Shape::Diagonal);

        let shape: Shape = serde_yaml::from_str("kind: grid\nchunk-length: 16").unwrap();
        assert_eq!(shape, Shape::Grid { chunk_length: 16 });
    }

    #[test]
    fn test_deserialize_unknown_kind() {
        assert!(serde_yaml::from_str::<Shape>("kind: hexagon").is_err());
    }

    #[test]
    fn test_deserialize_gradient_fill_default_direction() {
        let yaml = r#"
type: gradient
background: lime
gradient:
  colours:
    - { at: 0, colour: red }
"#;
        let fill: Fill = serde_yaml::from_str(yaml).unwrap();
        match fill {
            Fill::Gradient {
                direction,
                background,
                ..
            } => {
                assert_eq!(direction, GradientDirection::FromCenterEdge);
                assert_eq!(background, Colour::GREEN);
            }
            other => panic!("expected gradient fill, got {:?}", other),
        }
    }

    #[test]
    fn test_direction_names() {
        let d: GradientDirection = serde_yaml::from_str("to-center-axis-max").unwrap();
        assert_eq!(d, GradientDirection::ToCenterAxisMax);
        let d: GradientDirection = serde_yaml::from_str("to-left").unwrap();
        assert_eq!(d, GradientDirection::ToLeft);
    }

    #[test]
    fn test_supports_gradient() {
        assert!(Shape::Circle {
            center: Point::default(),
            radius: 1.0
        }
        .supports_gradient());
        assert!(!Shape::Diagonal.supports_gradient());
        assert!(!Shape::Grid { chunk_length: 4 }.supports_gradient());
    }
}
