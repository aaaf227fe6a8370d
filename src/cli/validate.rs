//! Validate command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::error::{Result, TexError};
use crate::output::{plural, Printer};
use crate::validation::{print_diagnostics, validate_recipes, ValidationResult};

use super::build::discover_inputs;

/// Check recipe files without rendering
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Recipe files or directories (default: the current project)
    pub paths: Vec<PathBuf>,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<ValidationResult> {
    let discovery = discover_inputs(&args.paths)?;
    let recipes = discovery.load_recipes()?;

    let textures: usize = recipes.iter().map(|r| r.textures.len()).sum();
    printer.status(
        "Checking",
        &format!(
            "{} in {}",
            plural(textures, "texture", "textures"),
            plural(recipes.len(), "recipe", "recipes")
        ),
    );

    let result = validate_recipes(&recipes, &discovery.manifest);
    print_diagnostics(&result, printer);

    if result.has_errors() {
        return Err(TexError::Validation {
            message: plural(result.error_count(), "error", "errors"),
            help: None,
        });
    }
    Ok(result)
}
