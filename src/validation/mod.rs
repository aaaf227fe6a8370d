//! Static checks over texture recipes.
//!
//! Runs every check against the loaded recipes and reports errors and
//! warnings without rendering anything. Used by `texgen validate` and as a
//! gate in `texgen build`.

mod checks;
mod warning;

pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::output::{plural, Printer};
use crate::recipe::{Manifest, RecipeFile};

/// Run all validation checks against the recipes.
pub fn validate_recipes(recipes: &[RecipeFile], manifest: &Manifest) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_empty_recipes(recipes));
    result.merge(checks::check_names(recipes));
    result.merge(checks::check_sizes(recipes, manifest));
    result.merge(checks::check_geometry(recipes));
    result.merge(checks::check_fills(recipes));

    result
}

/// Print diagnostics followed by a one-line summary.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let label = printer.severity(&d.severity.to_string(), d.severity == Severity::Error);
        printer.raw(&format!("{}[{}]: {}", label, printer.dim(&d.code), d.message));
        if let Some(help) = &d.help {
            printer.raw(&format!("  {} {}", printer.cyan("help:"), help));
        }
    }

    let errors = result.error_count();
    let warnings = result.warning_count();

    if errors > 0 {
        printer.error(
            "Failed",
            &format!(
                "validation with {} and {}",
                plural(errors, "error", "errors"),
                plural(warnings, "warning", "warnings")
            ),
        );
    } else if warnings > 0 {
        printer.warning(
            "Validated",
            &format!("with {}", plural(warnings, "warning", "warnings")),
        );
    } else {
        printer.success("Validated", "no problems found");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD: &str = "textures:\n  - name: dot\n    size: 8\n    shape: { kind: circle, center: [4, 4], radius: 3 }\n    fill: { type: flat, inside: white, outside: black }\n";

    #[test]
    fn test_validate_empty_project() {
        let result = validate_recipes(&[], &Manifest::default());
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_valid_recipe() {
        let recipes = vec![RecipeFile::parse(GOOD).unwrap()];
        let result = validate_recipes(&recipes, &Manifest::default());
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_collects_across_checks() {
        let bad = "textures:\n  - name: dot\n    size: 0\n    shape: { kind: circle, center: [4, 4], radius: -3 }\n    fill: { type: flat, inside: white, outside: black }\n";
        let recipes = vec![
            RecipeFile::parse(GOOD).unwrap(),
            RecipeFile::parse(bad).unwrap(),
        ];
        let result = validate_recipes(&recipes, &Manifest::default());

        assert_eq!(result.error_count(), 3);
        assert!(result.contains("texgen::validate::duplicate-name"));
        assert!(result.contains("texgen::validate::zero-size"));
        assert!(result.contains("texgen::validate::negative-extent"));
    }
}
