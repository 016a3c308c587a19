//! Run with: `cargo test --test pixel_round_trip`

use hexgrid::{config::Error, Axial, GridConfig, HexGrid};

fn grids() -> Result<Vec<HexGrid>, Error> {
    [
        GridConfig::default(),
        GridConfig {
            pointy_tiles: true,
            ..GridConfig::default()
        },
        GridConfig {
            tile_size: 17.0,
            tile_spacing: 2.5,
            pointy_tiles: false,
        },
        GridConfig {
            tile_size: 17.0,
            tile_spacing: 2.5,
            pointy_tiles: true,
        },
    ]
    .iter()
    .map(|config| HexGrid::new(*config))
    .collect()
}

#[test]
fn test_center_recovers_cell() {
    for grid in grids().unwrap() {
        for q in -12..=12 {
            for r in -12..=12 {
                let center = grid.get_center_xy(q, r);
                let decimal = grid.pixel_to_decimal_qr(center);
                let cube = grid.round_cube(grid.axial_to_cube(decimal));
                assert_eq!(cube.x + cube.y + cube.z, 0);
                assert_eq!(
                    grid.cube_to_axial(cube),
                    Axial::new(q, r),
                    "{:?}",
                    grid.config()
                );
            }
        }
    }
}

#[test]
fn test_pixel_to_axial_matches_manual_pipeline() {
    for grid in grids().unwrap() {
        for cell in Axial::new(1, -2).hexagon(4, true) {
            let center = grid.get_center_xy(cell.q, cell.r);
            assert_eq!(grid.pixel_to_axial(center, 1.0), cell);
        }
    }
}
