//! Split command implementation.
//!
//! Cuts an image into a grid of tiles and writes each tile as
//! `<name>-<NN>.png`, where NN is the tile's output index.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;

use crate::error::{Result, TexError};
use crate::output::{display_path, plural, Printer};
use crate::process::{split_bitmap, SplitOrder, Tile};
use crate::render::{read_png, write_png};

use super::build::ensure_dir;

/// Split an image into a grid of tiles
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Image to split
    pub input: PathBuf,

    /// Number of tile columns
    #[arg(long)]
    pub columns: u32,

    /// Number of tile rows
    #[arg(long)]
    pub rows: u32,

    /// Number tiles right to left
    #[arg(long)]
    pub reverse_x: bool,

    /// Number tiles top to bottom (default numbering starts at the bottom row)
    #[arg(long)]
    pub reverse_y: bool,

    /// Output directory (default: next to the input image)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Base name for tile files (default: input file stem)
    #[arg(long)]
    pub name: Option<String>,

    /// Also write `<name>.json` describing every tile
    #[arg(long)]
    pub json: bool,
}

/// JSON index written next to the tiles.
#[derive(Debug, Serialize)]
pub struct SplitIndex {
    pub source: String,
    pub columns: u32,
    pub rows: u32,
    #[serde(flatten)]
    pub order: SplitOrder,
    pub tiles: Vec<TileEntry>,
}

#[derive(Debug, Serialize)]
pub struct TileEntry {
    pub index: usize,
    pub file: String,
    pub column: u32,
    pub row: u32,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

pub fn run(args: SplitArgs, printer: &Printer) -> Result<Vec<PathBuf>> {
    let input = &args.input;
    let bitmap = read_png(input)?;
    let (width, height) = bitmap.size();

    let tiles = split_bitmap(&bitmap, args.columns, args.rows)?;
    printer.status(
        "Splitting",
        &format!(
            "{} ({}x{}) into {}x{} tiles",
            display_path(input),
            width,
            height,
            args.columns,
            args.rows
        ),
    );

    let name = match &args.name {
        Some(name) => name.clone(),
        None => input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("tile")
            .to_string(),
    };
    let output = match &args.output {
        Some(dir) => dir.clone(),
        None => input
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    };

    let order = SplitOrder {
        reverse_x: args.reverse_x,
        reverse_y: args.reverse_y,
    };
    let written = write_tiles(
        &tiles,
        (args.columns, args.rows),
        order,
        &output,
        &name,
        printer,
    )?;

    if args.json {
        let index_path = output.join(format!("{}.json", name));
        let index = build_index(input, &tiles, (args.columns, args.rows), order, &name);
        write_index(&index, &index_path)?;
        printer.verbose("Wrote", &display_path(&index_path));
    }

    printer.success(
        "Finished",
        &format!(
            "{} in {}",
            plural(written.len(), "tile", "tiles"),
            display_path(&output)
        ),
    );

    Ok(written)
}

/// Write each tile as `<name>-<NN>.png`. Returns paths in output-index order.
pub fn write_tiles(
    tiles: &[Tile],
    (columns, rows): (u32, u32),
    order: SplitOrder,
    dir: &Path,
    name: &str,
    printer: &Printer,
) -> Result<Vec<PathBuf>> {
    ensure_dir(dir)?;

    let mut written = vec![PathBuf::new(); tiles.len()];
    for tile in tiles {
        let index = order.output_index(tile, columns, rows);
        let path = dir.join(tile_file_name(name, index, tiles.len()));
        write_png(&tile.bitmap, &path, 1)?;
        printer.verbose(
            "Wrote",
            &format!(
                "{} (column {}, row {}, {}x{})",
                display_path(&path),
                tile.column,
                tile.row,
                tile.bitmap.width(),
                tile.bitmap.height()
            ),
        );
        written[index] = path;
    }
    Ok(written)
}

/// `<name>-<NN>.png`, zero-padded to at least two digits and wide enough
/// for the largest index.
pub fn tile_file_name(name: &str, index: usize, count: usize) -> String {
    let digits = count.saturating_sub(1).to_string().len().max(2);
    format!("{}-{:0width$}.png", name, index, width = digits)
}

fn build_index(
    input: &Path,
    tiles: &[Tile],
    (columns, rows): (u32, u32),
    order: SplitOrder,
    name: &str,
) -> SplitIndex {
    let mut entries: Vec<TileEntry> = tiles
        .iter()
        .map(|tile| {
            let index = order.output_index(tile, columns, rows);
            TileEntry {
                index,
                file: tile_file_name(name, index, tiles.len()),
                column: tile.column,
                row: tile.row,
                x: tile.x,
                y: tile.y,
                width: tile.bitmap.width(),
                height: tile.bitmap.height(),
            }
        })
        .collect();
    entries.sort_by_key(|e| e.index);

    SplitIndex {
        source: input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
        columns,
        rows,
        order,
        tiles: entries,
    }
}

fn write_index(index: &SplitIndex, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(index).map_err(|e| TexError::Build {
        message: format!("Failed to serialize tile index: {}", e),
        help: None,
    })?;
    fs::write(path, json).map_err(|e| TexError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write tile index: {}", e),
    })
}
