use std::collections::HashMap;
use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::render::read_png;
use crate::types::{Bitmap, Colour};

/// List the colours used in an image
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Image to sample
    pub file: PathBuf,

    /// Maximum number of colours to output
    #[arg(long)]
    pub max: Option<usize>,

    /// Include fully transparent pixels
    #[arg(long)]
    pub all: bool,
}

/// Distinct colours with their pixel counts, most common first. Ties are
/// ordered by hex value so the listing is stable.
pub fn colour_counts(bitmap: &Bitmap, include_transparent: bool) -> Vec<(Colour, usize)> {
    let mut counts: HashMap<Colour, usize> = HashMap::new();
    for &colour in bitmap.pixels() {
        if colour.is_transparent() && !include_transparent {
            continue;
        }
        *counts.entry(colour).or_insert(0) += 1;
    }

    let mut colours: Vec<(Colour, usize)> = counts.into_iter().collect();
    colours.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.to_rgba().cmp(&b.0.to_rgba())));
    colours
}

pub fn run(args: PaletteArgs, printer: &Printer) -> Result<()> {
    let path = &args.file;
    let bitmap = read_png(path)?;

    let mut colours = colour_counts(&bitmap, args.all);
    if let Some(max) = args.max {
        colours.truncate(max);
    }

    printer.status(
        "Sampled",
        &format!(
            "{} from {}",
            plural(colours.len(), "colour", "colours"),
            display_path(path)
        ),
    );

    // Colour listing goes to stdout
    for (colour, count) in &colours {
        println!("{:<10} {}", colour.to_string(), count);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colour_counts_sorted_by_frequency() {
        let bitmap = Bitmap::from_pixels(
            3,
            2,
            vec![
                Colour::RED,
                Colour::BLUE,
                Colour::RED,
                Colour::TRANSPARENT,
                Colour::GREEN,
                Colour::RED,
            ],
        )
        .unwrap();

        let counts = colour_counts(&bitmap, false);
        assert_eq!(
            counts,
            vec![(Colour::RED, 3), (Colour::BLUE, 1), (Colour::GREEN, 1)]
        );

        let all = colour_counts(&bitmap, true);
        assert_eq!(all.len(), 4);
        assert_eq!(all[1], (Colour::TRANSPARENT, 1));
    }
}
