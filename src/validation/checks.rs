//! Validation checks over loaded recipes.
//!
//! Each check takes the recipes (and the manifest where defaults matter) and
//! returns a `ValidationResult`.

use std::collections::HashMap;

use crate::recipe::{Manifest, RecipeFile, TextureDef};
use crate::render::geometry::triangle_area;
use crate::render::scaled_size;
use crate::types::{Fill, GradientDirection, Point, Shape};

use super::warning::{Diagnostic, ValidationResult};

fn textures(recipes: &[RecipeFile]) -> impl Iterator<Item = (&RecipeFile, &TextureDef)> {
    recipes
        .iter()
        .flat_map(|recipe| recipe.textures.iter().map(move |t| (recipe, t)))
}

fn origin(recipe: &RecipeFile) -> String {
    if recipe.path.as_os_str().is_empty() {
        "<inline>".to_string()
    } else {
        recipe.path.display().to_string()
    }
}

/// Recipe files that define no textures.
pub fn check_empty_recipes(recipes: &[RecipeFile]) -> ValidationResult {
    let mut result = ValidationResult::new();

    for recipe in recipes.iter().filter(|r| r.textures.is_empty()) {
        result.push(
            Diagnostic::warning(
                "texgen::validate::empty-recipe",
                format!("{} defines no textures", origin(recipe)),
            )
            .with_help("Add entries under `textures:` or remove the file"),
        );
    }

    result
}

/// Texture names must be usable as file names and unique across the project,
/// since each one becomes `<name>.png` in the same output directory.
pub fn check_names(recipes: &[RecipeFile]) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut seen: HashMap<&str, String> = HashMap::new();

    for (recipe, texture) in textures(recipes) {
        let name = texture.name.as_str();

        if name.trim().is_empty() {
            result.push(
                Diagnostic::error(
                    "texgen::validate::empty-name",
                    format!("A texture in {} has an empty name", origin(recipe)),
                )
                .with_help("Give every texture a name; it becomes the output file name"),
            );
            continue;
        }

        if name.contains(['/', '\\']) || name == "." || name == ".." {
            result.push(
                Diagnostic::error(
                    "texgen::validate::invalid-name",
                    format!("Texture name '{}' is not a plain file name", name),
                )
                .with_help("Remove path separators from the name"),
            );
        }

        if let Some(first) = seen.get(name) {
            result.push(
                Diagnostic::error(
                    "texgen::validate::duplicate-name",
                    format!(
                        "Texture '{}' in {} is already defined in {}",
                        name,
                        origin(recipe),
                        first
                    ),
                )
                .with_help("Rename one of the textures; both would write the same PNG"),
            );
        } else {
            seen.insert(name, origin(recipe));
        }
    }

    result
}

/// Canvas sizes must be non-zero on both axes.
pub fn check_sizes(recipes: &[RecipeFile], manifest: &Manifest) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (_, texture) in textures(recipes) {
        let (width, height) = texture.dimensions(manifest.effective_size());
        if width == 0 || height == 0 {
            result.push(
                Diagnostic::error(
                    "texgen::validate::zero-size",
                    format!(
                        "Texture '{}' has an empty canvas ({}x{})",
                        texture.name, width, height
                    ),
                )
                .with_help("Set `size`, or `width` and `height`, to at least 1"),
            );
        }
        if texture.scale == Some(0) {
            result.push(Diagnostic::warning(
                "texgen::validate::zero-scale",
                format!("Texture '{}' has scale 0; it will be written at scale 1", texture.name),
            ));
        }
        let scale = texture.scale.unwrap_or(manifest.effective_scale());
        if scaled_size(width, height, scale).is_none() {
            result.push(
                Diagnostic::error(
                    "texgen::validate::too-large",
                    format!(
                        "Texture '{}' ({}x{}) is too large to write at scale {}",
                        texture.name, width, height, scale
                    ),
                )
                .with_help("Lower `scale` or the canvas size"),
            );
        }
    }

    result
}

/// Geometry that cannot render or renders nothing.
pub fn check_geometry(recipes: &[RecipeFile]) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (_, texture) in textures(recipes) {
        let name = &texture.name;

        if !shape_is_finite(&texture.shape) {
            result.push(Diagnostic::error(
                "texgen::validate::non-finite",
                format!("Texture '{}' has a non-finite coordinate or extent", name),
            ));
            continue;
        }

        match texture.shape {
            Shape::Circle { radius, .. } => {
                check_extent(&mut result, name, "radius", radius);
            }
            Shape::Ring {
                outer_radius,
                inner_radius,
                ..
            } => {
                check_extent(&mut result, name, "outer-radius", outer_radius);
                check_extent(&mut result, name, "inner-radius", inner_radius);
                if inner_radius >= outer_radius && outer_radius > 0.0 {
                    result.push(
                        Diagnostic::warning(
                            "texgen::validate::inverted-ring",
                            format!(
                                "Ring '{}' has inner radius {} not smaller than outer radius {}",
                                name, inner_radius, outer_radius
                            ),
                        )
                        .with_help("The band is empty; every covered pixel gets the inner colour"),
                    );
                }
            }
            Shape::Rectangle { width, height, .. } | Shape::Square { width, height, .. } => {
                check_extent(&mut result, name, "width", width);
                check_extent(&mut result, name, "height", height);
            }
            Shape::Triangle { ref vertices } => {
                if triangle_area(vertices) == 0.0 {
                    result.push(
                        Diagnostic::warning(
                            "texgen::validate::degenerate-triangle",
                            format!("Triangle '{}' has collinear vertices", name),
                        )
                        .with_help("Only pixels on the line through the vertices will be filled"),
                    );
                }
            }
            Shape::Diagonal => {}
            Shape::Grid { chunk_length } => {
                if chunk_length == 0 {
                    result.push(
                        Diagnostic::error(
                            "texgen::validate::zero-chunk",
                            format!("Grid '{}' has a chunk length of 0", name),
                        )
                        .with_help("Use a chunk length of at least 1 pixel"),
                    );
                }
            }
        }
    }

    result
}

fn check_extent(result: &mut ValidationResult, name: &str, field: &str, value: f32) {
    if value < 0.0 {
        result.push(
            Diagnostic::error(
                "texgen::validate::negative-extent",
                format!("Texture '{}' has a negative {} ({})", name, field, value),
            )
            .with_help("Extents and radii must be zero or positive"),
        );
    } else if value == 0.0 {
        result.push(Diagnostic::warning(
            "texgen::validate::zero-extent",
            format!("Texture '{}' has {} 0; the shape covers no pixels", name, field),
        ));
    }
}

fn shape_is_finite(shape: &Shape) -> bool {
    let finite = |p: &Point| p.x.is_finite() && p.y.is_finite();
    match shape {
        Shape::Circle { center, radius } => finite(center) && radius.is_finite(),
        Shape::Ring {
            center,
            outer_radius,
            inner_radius,
        } => finite(center) && outer_radius.is_finite() && inner_radius.is_finite(),
        Shape::Rectangle {
            center,
            width,
            height,
        }
        | Shape::Square {
            center,
            width,
            height,
        } => finite(center) && width.is_finite() && height.is_finite(),
        Shape::Triangle { vertices } => vertices.iter().all(finite),
        Shape::Diagonal | Shape::Grid { .. } => true,
    }
}

/// Fills that do not fit their shape.
pub fn check_fills(recipes: &[RecipeFile]) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (_, texture) in textures(recipes) {
        let name = &texture.name;
        let shape = &texture.shape;

        match &texture.fill {
            Fill::Flat {
                inside,
                outside,
                inner,
            } => {
                if inner.is_some() && !matches!(shape, Shape::Ring { .. }) {
                    result.push(
                        Diagnostic::warning(
                            "texgen::validate::unused-inner",
                            format!(
                                "Texture '{}' sets `inner` on a {} shape; it only applies to rings",
                                name,
                                shape.kind()
                            ),
                        )
                        .with_help("Remove `inner` from the fill"),
                    );
                }
                if inside == outside && inner.map_or(true, |c| c == *inside) {
                    result.push(Diagnostic::warning(
                        "texgen::validate::uniform-fill",
                        format!("Texture '{}' uses the same colour inside and outside", name),
                    ));
                }
            }
            Fill::Gradient { direction, .. } => {
                if !shape.supports_gradient() {
                    result.push(
                        Diagnostic::error(
                            "texgen::validate::unsupported-gradient",
                            format!(
                                "Texture '{}' uses a gradient fill on a {} shape",
                                name,
                                shape.kind()
                            ),
                        )
                        .with_help("Gradients work on circle, ring, rectangle and square shapes"),
                    );
                } else if *direction != GradientDirection::default() {
                    let fixed = match shape {
                        Shape::Circle { .. } | Shape::Ring { .. } => Some("always radial"),
                        Shape::Square { .. } => Some("always shaded by distance to the nearest side"),
                        _ => None,
                    };
                    if let Some(fixed) = fixed {
                        result.push(Diagnostic::warning(
                            "texgen::validate::ignored-direction",
                            format!(
                                "Texture '{}' sets a gradient direction on a {}; {} gradients are {}",
                                name,
                                shape.kind(),
                                shape.kind(),
                                fixed
                            ),
                        ));
                    }
                }
            }
        }
    }

    result
}
