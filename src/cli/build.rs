//! Build command implementation.
//!
//! Discovers recipe files, validates them, and writes one PNG per texture.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::{Result, TexError};
use crate::output::{display_path, plural, Printer};
use crate::recipe::{discover, discover_paths, DiscoveryResult};
use crate::render::write_png;
use crate::validation::{print_diagnostics, validate_recipes};

/// Render textures from recipe files
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Recipe files or directories (default: the current project)
    pub paths: Vec<PathBuf>,

    /// Output directory (default: manifest `output`, or dist)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Scale factor for output (integer upscaling); overrides recipes
    #[arg(long)]
    pub scale: Option<u32>,
}

/// Find recipes for `paths`: a single directory is treated as a project
/// root (its texgen.yaml applies), anything else is taken literally.
pub(crate) fn discover_inputs(paths: &[PathBuf]) -> Result<DiscoveryResult> {
    match paths {
        [] => discover("."),
        [dir] if dir.is_dir() => discover(dir),
        _ => {
            for path in paths {
                if !path.exists() {
                    return Err(TexError::Io {
                        path: path.clone(),
                        message: "No such file or directory".to_string(),
                    });
                }
            }
            discover_paths(paths)
        }
    }
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let discovery = discover_inputs(&args.paths)?;
    let recipes = discovery.load_recipes()?;

    if recipes.is_empty() {
        printer.warning("Warning", "no recipe files found");
        return Ok(());
    }

    let result = validate_recipes(&recipes, &discovery.manifest);
    if !result.is_ok() {
        print_diagnostics(&result, printer);
    }
    if result.has_errors() {
        return Err(TexError::Validation {
            message: format!(
                "{} in recipes",
                plural(result.error_count(), "error", "errors")
            ),
            help: Some("Fix the errors above, or run `texgen validate` for details".to_string()),
        });
    }

    let output = args.output.clone().unwrap_or_else(|| discovery.output_dir());
    ensure_dir(&output)?;

    let manifest = &discovery.manifest;
    let mut count = 0;
    for recipe in &recipes {
        printer.verbose("Reading", &display_path(&recipe.path));

        for texture in &recipe.textures {
            let bitmap = texture.render(manifest.effective_size())?;
            let scale = args
                .scale
                .or(texture.scale)
                .filter(|&s| s > 0)
                .unwrap_or(manifest.effective_scale());

            let path = output.join(format!("{}.png", texture.name));
            write_png(&bitmap, &path, scale)?;

            let (width, height) = bitmap.size();
            let detail = if scale > 1 {
                format!("{} ({}x{}, x{})", texture.name, width, height, scale)
            } else {
                format!("{} ({}x{})", texture.name, width, height)
            };
            printer.status("Rendered", &detail);
            printer.verbose("Wrote", &display_path(&path));
            count += 1;
        }
    }

    printer.success(
        "Finished",
        &format!(
            "{} to {}",
            plural(count, "texture", "textures"),
            display_path(&output)
        ),
    );

    Ok(())
}

pub(crate) fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| TexError::Io {
            path: dir.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const RECIPE: &str = r#"
textures:
  - name: dot
    size: 9
    shape: { kind: circle, center: [4, 4], radius: 3.5 }
    fill: { type: flat, inside: white, outside: transparent }
  - name: checker
    width: 8
    height: 4
    shape: { kind: grid, chunk-length: 2 }
    fill: { type: flat, inside: black, outside: white }
"#;

    fn quiet() -> Printer {
        Printer::plain().with_verbosity(crate::output::Verbosity::Quiet)
    }

    #[test]
    fn test_build_recipe_file() {
        let dir = tempdir().unwrap();
        let recipe = dir.path().join("shapes.texture.yaml");
        fs::write(&recipe, RECIPE).unwrap();
        let output = dir.path().join("out");

        let args = BuildArgs {
            paths: vec![recipe],
            output: Some(output.clone()),
            scale: None,
        };
        run(args, &quiet()).unwrap();

        let dot = image::open(output.join("dot.png")).unwrap().to_rgba8();
        assert_eq!(dot.dimensions(), (9, 9));
        assert_eq!(dot.get_pixel(4, 4).0, [255, 255, 255, 255]);
        assert_eq!(dot.get_pixel(0, 0).0[3], 0);

        let checker = image::open(output.join("checker.png")).unwrap().to_rgba8();
        assert_eq!(checker.dimensions(), (8, 4));
    }

    #[test]
    fn test_build_with_scale() {
        let dir = tempdir().unwrap();
        let recipe = dir.path().join("shapes.texture.yaml");
        fs::write(&recipe, RECIPE).unwrap();
        let output = dir.path().join("out");

        let args = BuildArgs {
            paths: vec![recipe],
            output: Some(output.clone()),
            scale: Some(3),
        };
        run(args, &quiet()).unwrap();

        let dot = image::open(output.join("dot.png")).unwrap().to_rgba8();
        assert_eq!(dot.dimensions(), (27, 27));
    }

    #[test]
    fn test_build_project_uses_manifest() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("texgen.yaml"),
            "sources:\n  - textures/\noutput: build\nsize: 16\nscale: 2\n",
        )
        .unwrap();
        fs::create_dir_all(dir.path().join("textures")).unwrap();
        fs::write(
            dir.path().join("textures/half.texture.yaml"),
            "textures:\n  - name: half\n    shape: { kind: diagonal }\n    fill: { type: flat, inside: red, outside: blue }\n",
        )
        .unwrap();

        let args = BuildArgs {
            paths: vec![dir.path().to_path_buf()],
            output: None,
            scale: None,
        };
        run(args, &quiet()).unwrap();

        let half = image::open(dir.path().join("build/half.png")).unwrap().to_rgba8();
        assert_eq!(half.dimensions(), (32, 32));
    }

    #[test]
    fn test_build_rejects_invalid_recipe() {
        let dir = tempdir().unwrap();
        let recipe = dir.path().join("bad.texture.yaml");
        fs::write(
            &recipe,
            "textures:\n  - name: bad\n    size: 8\n    shape: { kind: diagonal }\n    fill: { type: gradient, background: black, gradient: { colours: [{ at: 0, colour: red }] } }\n",
        )
        .unwrap();
        let output = dir.path().join("out");

        let args = BuildArgs {
            paths: vec![recipe],
            output: Some(output.clone()),
            scale: None,
        };
        let err = run(args, &quiet()).unwrap_err();
        assert!(matches!(err, TexError::Validation { .. }));
        assert!(!output.join("bad.png").exists());
    }

    #[test]
    fn test_build_missing_path() {
        let dir = tempdir().unwrap();
        let args = BuildArgs {
            paths: vec![dir.path().join("a.texture.yaml"), dir.path().join("b.texture.yaml")],
            output: None,
            scale: None,
        };
        assert!(matches!(run(args, &quiet()), Err(TexError::Io { .. })));
    }

    #[test]
    fn test_build_empty_project_is_ok() {
        let dir = tempdir().unwrap();
        let args = BuildArgs {
            paths: vec![dir.path().to_path_buf()],
            output: None,
            scale: None,
        };
        run(args, &quiet()).unwrap();
        assert!(!dir.path().join("dist").exists());
    }
}
