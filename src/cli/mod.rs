pub mod build;
pub mod completions;
pub mod init;
pub mod palette;
pub mod replace;
pub mod split;
pub mod validate;

use clap::{Parser, Subcommand};

use crate::output::{Printer, Verbosity};

/// texgen - Shape texture generator and image tile splitter
#[derive(Parser, Debug)]
#[command(name = "texgen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Only print warnings and errors
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Print a line for every item processed
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Status printer honouring `--quiet` / `--verbose`.
    pub fn printer(&self) -> Printer {
        Printer::new().with_verbosity(Verbosity::from_flags(self.quiet, self.verbose))
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render textures from recipe files
    Build(build::BuildArgs),

    /// Split an image into a grid of tiles
    Split(split::SplitArgs),

    /// Replace one exact colour in an image with another
    Replace(replace::ReplaceArgs),

    /// List the colours used in an image
    Palette(palette::PaletteArgs),

    /// Check recipe files without rendering
    Validate(validate::ValidateArgs),

    /// Initialize a texgen project (writes texgen.yaml and an example recipe)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
