//! Grid rasterization library for the parallel-rasterization homework.
//!
//! Provides an owned N×N integer grid ([`Grid`]), demonstration patterns
//! that mark cells on it ([`pattern`]), and a binary PPM (P6) encoder that
//! renders nonzero cells as white pixels and zero cells as black ([`ppm`]).

pub mod grid;
pub mod pattern;
pub mod ppm;

pub use grid::{Grid, GridError};
pub use ppm::{write_ppm, write_ppm_file, PpmError};
