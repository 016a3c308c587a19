pub mod hex;
pub mod pixel;

pub use hex::{Axial, Cube, Direction, HexGrid};
pub use pixel::Pixel;
