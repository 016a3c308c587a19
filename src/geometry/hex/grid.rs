use super::{Axial, Cube};
use crate::{
    config::{Error, GridConfig, Orientation},
    geometry::Pixel,
};
use num::Signed;

const SQRT_OF_3: f64 = 1.732_050_807_568_877_2;

/// Coordinate conversions and cell enumeration for a hex grid of fixed geometry.
///
/// The configuration is validated on construction and never changes afterwards, so a `HexGrid`
/// can be shared freely between threads.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HexGrid {
    config: GridConfig,
}

impl HexGrid {
    pub fn new(config: GridConfig) -> Result<Self, Error> {
        if let Err(err) = config.validate() {
            log::warn!("rejecting grid configuration {:?}: {}", config, err);
            return Err(err);
        }
        log::debug!(
            "hex grid: tile size {}, spacing {}, {:?}",
            config.tile_size,
            config.tile_spacing,
            config.orientation()
        );
        Ok(HexGrid { config })
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Number of steps between cells `(q1, r1)` and `(q2, r2)`.
    pub fn axial_distance(&self, q1: i32, r1: i32, q2: i32, r2: i32) -> u64 {
        Axial::new(q1, r1).distance(Axial::new(q2, r2))
    }

    pub fn axial_to_cube<T: Signed + Copy>(&self, axial: Axial<T>) -> Cube<T> {
        axial.into()
    }

    pub fn cube_to_axial<T>(&self, cube: Cube<T>) -> Axial<T> {
        cube.into()
    }

    /// Pixel-space center of the cell `(q, r)`.
    ///
    /// `y` grows opposite to `r`: callers drawing in a y-down screen space must flip it.
    pub fn get_center_xy(&self, q: i32, r: i32) -> Pixel {
        let step = self.config.step();
        let (q, r) = (q as f64, r as f64);
        match self.config.orientation() {
            Orientation::PointyTop => Pixel::new(
                step * SQRT_OF_3 * (q + r / 2.0),
                -(step * 3.0 / 2.0 * r),
            ),
            Orientation::FlatTop => Pixel::new(
                step * 3.0 / 2.0 * q,
                -step * SQRT_OF_3 * (q + r / 2.0),
            ),
        }
    }

    /// Fractional axial position of a pixel; the inverse of [`get_center_xy`][Self::get_center_xy].
    pub fn pixel_to_decimal_qr(&self, pixel: Pixel) -> Axial<f64> {
        self.pixel_to_decimal_qr_scaled(pixel, 1.0)
    }

    /// Fractional axial position of a pixel, divided by `scale`.
    ///
    /// `scale` must be non-zero.
    pub fn pixel_to_decimal_qr_scaled(&self, pixel: Pixel, scale: f64) -> Axial<f64> {
        debug_assert!(scale != 0.0, "pixel scale must be non-zero");
        let step = self.config.step();
        let Pixel { x, y } = pixel;
        let (q, r) = match self.config.orientation() {
            Orientation::PointyTop => (
                (SQRT_OF_3 / 3.0 * x + y / 3.0) / step,
                -2.0 / 3.0 * y / step,
            ),
            Orientation::FlatTop => (
                2.0 / 3.0 * x / step,
                (-2.0 / SQRT_OF_3 * y - 4.0 / 3.0 * x) / step,
            ),
        };
        Axial::new(q / scale, r / scale)
    }

    /// Snap a fractional cube coordinate onto the nearest cell.
    pub fn round_cube(&self, cube: Cube<f64>) -> Cube {
        cube.round()
    }

    /// The cell containing `pixel`, at the given `scale`.
    ///
    /// Subject to the range limits of [`Cube::round`]; see
    /// [`checked_pixel_to_axial`][Self::checked_pixel_to_axial].
    pub fn pixel_to_axial(&self, pixel: Pixel, scale: f64) -> Axial {
        let decimal = self.pixel_to_decimal_qr_scaled(pixel, scale);
        let cell = self.cube_to_axial(self.round_cube(self.axial_to_cube(decimal)));
        log::trace!("pixel {:?} -> {:?} -> {:?}", pixel, decimal, cell);
        cell
    }

    /// The cell containing `pixel`, or `None` when the pixel is non-finite or maps outside the
    /// `i32` coordinate range.
    pub fn checked_pixel_to_axial(&self, pixel: Pixel, scale: f64) -> Option<Axial> {
        let decimal = self.pixel_to_decimal_qr_scaled(pixel, scale);
        let cell = self.axial_to_cube(decimal).checked_round().map(Axial::from);
        if cell.is_none() {
            log::trace!("pixel {:?} -> {:?} has no cell", pixel, decimal);
        }
        cell
    }

    /// The six cells adjacent to `(q, r)`, in [`Direction::iter`][super::Direction::iter] order.
    pub fn neighbors(&self, q: i32, r: i32) -> Vec<Axial> {
        Axial::new(q, r).neighbors().collect()
    }

    /// All cells exactly `radius` steps from `(q, r)`. Empty when `radius <= 0`.
    pub fn ring(&self, q: i32, r: i32, radius: i32) -> Vec<Axial> {
        Axial::new(q, r).ring(radius).collect()
    }

    /// Rings `1..=radius` around `(q, r)`, preceded by `(q, r)` itself when `solid`.
    pub fn hexagon(&self, q: i32, r: i32, radius: i32, solid: bool) -> Vec<Axial> {
        Axial::new(q, r).hexagon(radius, solid).collect()
    }
}
