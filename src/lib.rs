//! Coordinate geometry for hexagonal tile grids.
//!
//! Converts between axial, cube, and pixel coordinates, and enumerates neighbors, rings, and
//! filled hexagons of cells. See [`HexGrid`] for the pixel-space operations.

pub mod config;
pub mod geometry;

pub use config::GridConfig;
pub use geometry::{Axial, Cube, Direction, HexGrid, Pixel};
