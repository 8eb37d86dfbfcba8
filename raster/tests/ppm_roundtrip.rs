//! Round-trip tests: write a grid to disk and decode it with the image crate.

use image::Rgb;
use raster::{pattern, Grid, PpmError};

#[test]
fn full_size_diagonal_round_trips_through_decoder() {
    env_logger::init();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("output.ppm");

    let mut grid = Grid::zeros(512).unwrap();
    pattern::diagonal(&mut grid);
    raster::write_ppm_file(&grid, &path).unwrap();

    // Header "P6\n512 512\n255\n" (15 bytes) + 3 * 512^2 pixel bytes
    assert_eq!(std::fs::metadata(&path).unwrap().len(), 786_447);

    let decoded = image::open(&path).unwrap().to_rgb8();
    assert_eq!(decoded.dimensions(), (512, 512));

    let white = decoded.pixels().filter(|p| **p == Rgb([255, 255, 255])).count();
    let black = decoded.pixels().filter(|p| **p == Rgb([0, 0, 0])).count();
    assert_eq!(white, 512);
    assert_eq!(black, 261_632);

    // The white pixels sit on the main diagonal.
    for i in [0u32, 1, 255, 511] {
        assert_eq!(decoded.get_pixel(i, i), &Rgb([255, 255, 255]));
    }
}

#[test]
fn small_grid_pixels_match_cells_exactly() {
    let dir = tempfile::tempdir().unwrap();

    for n in [1usize, 2, 3, 4] {
        let path = dir.path().join(format!("grid_{n}.ppm"));

        let mut grid = Grid::zeros(n).unwrap();
        pattern::diagonal(&mut grid);
        raster::write_ppm_file(&grid, &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (n as u32, n as u32));

        for y in 0..n {
            for x in 0..n {
                let expected = if grid.cell(x, y) != 0 {
                    Rgb([255u8, 255, 255])
                } else {
                    Rgb([0u8, 0, 0])
                };
                assert_eq!(
                    decoded.get_pixel(x as u32, y as u32),
                    &expected,
                    "N={n} pixel ({x}, {y})"
                );
            }
        }
    }
}

#[test]
fn create_failure_reports_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("output.ppm");

    let grid = Grid::zeros(2).unwrap();
    let err = raster::write_ppm_file(&grid, &path).unwrap_err();

    match err {
        PpmError::Create { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected Create error, got {other:?}"),
    }
    assert!(!path.exists());
}
