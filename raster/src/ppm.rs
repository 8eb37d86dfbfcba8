//! Binary PPM (P6) encoding of a [`Grid`].
//!
//! Output contract, bit for bit: an ASCII header `P6\n{w} {h}\n255\n`
//! followed by width×height RGB triplets, row-major from the top row,
//! left to right. Nonzero cells become white `(255, 255, 255)`, zero cells
//! black `(0, 0, 0)`. No padding between rows.
//!
//! Format reference: <http://netpbm.sourceforge.net/doc/ppm.html>

use crate::grid::Grid;
use log::debug;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Maximum color value declared in the header.
const MAX_COLOR: u8 = 255;

const WHITE: [u8; 3] = [255, 255, 255];
const BLACK: [u8; 3] = [0, 0, 0];

/// Errors from PPM encoding.
#[derive(Debug, Error)]
pub enum PpmError {
    /// The output file could not be created or truncated.
    #[error("failed to create {path}")]
    Create {
        /// Path that was being created.
        path: PathBuf,
        source: io::Error,
    },

    /// A write to the sink failed; the output is incomplete.
    #[error("I/O error while writing image")]
    Io(#[from] io::Error),
}

/// Exact encoded size in bytes for a size×size grid.
///
/// Header length plus 3 bytes per pixel. The header varies with the digit
/// count of `size`.
pub fn encoded_len(size: usize) -> usize {
    let header = format!("P6\n{size} {size}\n{MAX_COLOR}\n");
    header.len() + 3 * size * size
}

/// Encode `grid` as binary PPM into `sink`.
///
/// Writes the cells in row-major order, one checked row at a time; the
/// first failed write aborts with [`PpmError::Io`]. The sink is not
/// flushed (callers writing to a file should use [`write_ppm_file`]).
pub fn write_ppm<W: Write>(grid: &Grid, sink: &mut W) -> Result<(), PpmError> {
    let size = grid.size();

    write!(sink, "P6\n{size} {size}\n{MAX_COLOR}\n")?;

    let cells = grid.as_slice();
    let mut row = Vec::with_capacity(3 * size);

    for y in 0..size {
        row.clear();
        for &cell in &cells[y * size..(y + 1) * size] {
            let rgb = if cell != 0 { WHITE } else { BLACK };
            row.extend_from_slice(&rgb);
        }
        sink.write_all(&row)?;
    }

    debug!("encoded {size}x{size} grid ({} bytes)", encoded_len(size));
    Ok(())
}

/// Encode `grid` as binary PPM into the file at `path`.
///
/// Creates or truncates the file, writes through a [`BufWriter`], and
/// flushes before returning. A create failure reports the offending path;
/// a mid-write failure leaves a truncated file behind (no cleanup is
/// attempted) and is reported as [`PpmError::Io`].
pub fn write_ppm_file<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<(), PpmError> {
    let path = path.as_ref();

    let file = File::create(path).map_err(|source| PpmError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    write_ppm(grid, &mut writer)?;
    writer.flush()?;

    debug!("wrote {}", path.display());
    Ok(())
}
