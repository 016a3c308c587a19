//! Hexagonal geometry support.
//!
//! Uses techniques from [this reference](https://www.redblobgames.com/grids/hexagons/)

pub mod coordinate;
pub mod cube;
pub mod direction;
pub mod grid;

pub use coordinate::{hexagon_size, Axial};
pub use cube::Cube;
pub use direction::Direction;
pub use grid::HexGrid;
