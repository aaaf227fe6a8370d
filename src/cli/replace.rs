//! Replace command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::process::{count_colour, replace_colour};
use crate::render::{read_png, write_png};
use crate::types::Colour;

/// Replace one exact colour in an image with another
#[derive(Args, Debug)]
pub struct ReplaceArgs {
    /// Image to edit
    pub input: PathBuf,

    /// Colour to replace (hex like #00FF00, or a CSS name)
    #[arg(long, default_value = "#00FF00")]
    pub from: Colour,

    /// Replacement colour
    #[arg(long, default_value = "#FF0000")]
    pub to: Colour,

    /// Output file (default: overwrite the input)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(args: ReplaceArgs, printer: &Printer) -> Result<usize> {
    let bitmap = read_png(&args.input)?;
    let matched = count_colour(&bitmap, args.from);

    let output = args.output.unwrap_or_else(|| args.input.clone());
    if matched == 0 {
        printer.warning(
            "Warning",
            &format!("{} not found in {}", args.from, display_path(&args.input)),
        );
    }

    let replaced = replace_colour(&bitmap, args.from, args.to);
    write_png(&replaced, &output, 1)?;

    printer.success(
        "Replaced",
        &format!(
            "{} {} -> {} in {}",
            plural(matched, "pixel", "pixels"),
            args.from,
            args.to,
            display_path(&output)
        ),
    );

    Ok(matched)
}
