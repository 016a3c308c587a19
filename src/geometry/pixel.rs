use serde::{Deserialize, Serialize};

/// A position in rendering space.
///
/// Where a cell lands in pixel space depends on the tile size, spacing, and orientation of the
/// [`HexGrid`][crate::geometry::hex::HexGrid] which produced it.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Pixel {
    pub x: f64,
    pub y: f64,
}

impl Pixel {
    pub const fn new(x: f64, y: f64) -> Self {
        Pixel { x, y }
    }
}

impl From<(f64, f64)> for Pixel {
    fn from((x, y): (f64, f64)) -> Self {
        Pixel::new(x, y)
    }
}
