//! Grid-to-PPM rasterizer CLI.
//!
//! Running with no arguments reproduces the homework demonstration: a
//! 512×512 grid with the main diagonal marked, written to `output.ppm` in
//! the current directory.
//!
//! ```bash
//! # Fixed demonstration
//! cargo run --bin draw-shape
//!
//! # Custom size and destination
//! cargo run --bin draw-shape -- --size 256 --output diag.ppm
//!
//! # Checkerboard test pattern with 16-pixel squares
//! cargo run --bin draw-shape -- --pattern checkerboard --square 16
//! ```

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use raster::{pattern, Grid};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Pattern {
    /// Main diagonal line (the homework demonstration)
    Diagonal,
    /// Alternating square blocks
    Checkerboard,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Grid dimension N (image is N×N pixels)
    #[arg(short = 'n', long, default_value_t = 512)]
    size: usize,

    /// Output PPM file
    #[arg(short, long, default_value = "output.ppm")]
    output: PathBuf,

    /// Pattern to draw
    #[arg(short, long, value_enum, default_value_t = Pattern::Diagonal)]
    pattern: Pattern,

    /// Square side length for the checkerboard pattern
    #[arg(long, default_value_t = 32)]
    square: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut grid = Grid::zeros(cli.size)
        .with_context(|| format!("failed to build {0}x{0} grid", cli.size))?;

    match cli.pattern {
        Pattern::Diagonal => pattern::diagonal(&mut grid),
        Pattern::Checkerboard => pattern::checkerboard(&mut grid, cli.square),
    }
    info!("drew {:?} pattern on {}x{} grid", cli.pattern, cli.size, cli.size);

    raster::write_ppm_file(&grid, &cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    println!("Wrote image to {}", cli.output.display());
    println!("Open {} with any image viewer.", cli.output.display());
    Ok(())
}
