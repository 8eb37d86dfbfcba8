//! Square integer grid used as the rasterization target.

use log::debug;
use ndarray::Array2;
use std::collections::TryReserveError;
use thiserror::Error;

/// Errors from grid construction.
#[derive(Debug, Error)]
pub enum GridError {
    /// A grid must have at least one cell per side.
    #[error("grid dimension must be positive")]
    ZeroSize,

    /// The cell buffer could not be allocated.
    #[error("failed to allocate {cells} grid cells")]
    Allocation {
        /// Number of cells requested (size squared).
        cells: usize,
        source: TryReserveError,
    },
}

/// Square N×N grid of integers, row-major.
///
/// Cells are either zero ("off") or a nonzero marker value ("on"). The grid
/// owns its buffer; the PPM encoder borrows it read-only. Note the ndarray
/// convention: array indices are `[y, x]` (rows first) while the accessors
/// here take `(x, y)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<i32>,
}

impl Grid {
    /// Allocate a zero-initialized size×size grid.
    ///
    /// Allocation is fallible: an unsatisfiable request (e.g. an absurdly
    /// large size) returns [`GridError::Allocation`] instead of aborting
    /// the process.
    pub fn zeros(size: usize) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::ZeroSize);
        }

        // A size whose square overflows usize cannot be allocated either;
        // funnel it through the same fallible-reserve path.
        let cells = size.checked_mul(size).unwrap_or(usize::MAX);

        let mut buffer: Vec<i32> = Vec::new();
        buffer
            .try_reserve_exact(cells)
            .map_err(|source| GridError::Allocation { cells, source })?;
        buffer.resize(cells, 0);

        debug!("allocated {size}x{size} grid ({cells} cells)");

        let cells = Array2::from_shape_vec((size, size), buffer)
            .expect("buffer length matches (size, size) shape");
        Ok(Self { cells })
    }

    /// Side length of the grid in cells.
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    /// Total number of cells (size squared).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Value of the cell at column `x`, row `y`.
    ///
    /// # Panics
    /// Panics if `x` or `y` is outside the grid.
    pub fn cell(&self, x: usize, y: usize) -> i32 {
        self.cells[[y, x]]
    }

    /// Set the cell at column `x`, row `y`.
    ///
    /// # Panics
    /// Panics if `x` or `y` is outside the grid.
    pub fn set(&mut self, x: usize, y: usize, value: i32) {
        self.cells[[y, x]] = value;
    }

    /// Flat row-major view of the cells (index = y·size + x).
    pub fn as_slice(&self) -> &[i32] {
        self.cells
            .as_slice()
            .expect("grid buffer is contiguous row-major")
    }
}
