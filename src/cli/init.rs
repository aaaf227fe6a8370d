//! Init command implementation.
//!
//! Writes a `texgen.yaml` manifest listing the directories that already hold
//! recipes, and an example recipe when there are none.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::{Result, TexError};
use crate::output::{display_path, plural, Printer};
use crate::recipe::{discover, MANIFEST_FILENAME};

/// Example recipe written into empty projects.
pub const EXAMPLE_RECIPE: &str = r##"# Each texture becomes <name>.png in the output directory.
textures:
  - name: orb
    size: 64
    shape: { kind: circle, center: [32, 32], radius: 28 }
    fill:
      type: gradient
      background: transparent
      gradient:
        colours:
          - { at: 0.0, colour: white }
          - { at: 1.0, colour: "#3366FF" }

  - name: frame
    size: 64
    shape: { kind: ring, center: [32, 32], outer-radius: 30, inner-radius: 24 }
    fill: { type: flat, inside: "#222222", outside: transparent }

  - name: checker
    size: 64
    shape: { kind: grid, chunk-length: 8 }
    fill: { type: flat, inside: "#CCCCCC", outside: "#888888" }
"##;

/// Initialize a texgen project
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing texgen.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(TexError::Build {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }
    if !args.path.exists() {
        fs::create_dir_all(&args.path).map_err(|e| TexError::Io {
            path: args.path.clone(),
            message: format!("Failed to create project directory: {}", e),
        })?;
    }

    printer.status("Scanning", &display_path(&args.path));
    let discovery = discover(&args.path)?;

    let mut source_dirs: BTreeSet<String> = BTreeSet::new();
    for file in &discovery.scan.recipes {
        if let Some(parent) = file.parent() {
            let relative = parent.strip_prefix(&discovery.root).unwrap_or(parent);
            let dir = if relative == Path::new("") {
                ".".to_string()
            } else {
                format!("{}/", relative.display())
            };
            source_dirs.insert(dir);
        }
    }

    let found = discovery.scan.total();
    if found == 0 {
        let example_dir = args.path.join("textures");
        let example_path = example_dir.join("example.texture.yaml");
        fs::create_dir_all(&example_dir).map_err(|e| TexError::Io {
            path: example_dir.clone(),
            message: format!("Failed to create directory: {}", e),
        })?;
        fs::write(&example_path, EXAMPLE_RECIPE).map_err(|e| TexError::Io {
            path: example_path.clone(),
            message: format!("Failed to write example recipe: {}", e),
        })?;
        printer.success("Created", &display_path(&example_path));
        source_dirs.insert("textures/".to_string());
    }

    fs::write(&manifest_path, manifest_yaml(&source_dirs)).map_err(|e| TexError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    if found > 0 {
        let dirs: Vec<&str> = source_dirs.iter().map(String::as_str).collect();
        printer.info("Discovered", &dirs.join(", "));
    }
    printer.success(
        "Created",
        &format!(
            "{} ({} found)",
            MANIFEST_FILENAME,
            plural(found, "recipe", "recipes")
        ),
    );

    Ok(())
}

/// Manifest text, built by hand for clean formatting.
fn manifest_yaml(source_dirs: &BTreeSet<String>) -> String {
    let mut yaml = String::new();

    if !(source_dirs.is_empty() || (source_dirs.len() == 1 && source_dirs.contains("."))) {
        yaml.push_str("sources:\n");
        for dir in source_dirs {
            yaml.push_str(&format!("  - \"{}\"\n", dir));
        }
    }
    yaml.push_str("output: dist\n");
    yaml.push_str("size: 128\n");
    yaml.push_str("scale: 1\n");
    yaml
}
