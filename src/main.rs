use clap::Parser;
use miette::Result;
use texgen::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = cli.printer();

    match cli.command {
        Commands::Build(args) => texgen::cli::build::run(args, &printer)?,
        Commands::Split(args) => {
            texgen::cli::split::run(args, &printer)?;
        }
        Commands::Replace(args) => {
            texgen::cli::replace::run(args, &printer)?;
        }
        Commands::Palette(args) => texgen::cli::palette::run(args, &printer)?,
        Commands::Validate(args) => {
            texgen::cli::validate::run(args, &printer)?;
        }
        Commands::Init(args) => texgen::cli::init::run(args, &printer)?,
        Commands::Completions(args) => texgen::cli::completions::run(args)?,
    }

    Ok(())
}
