use super::coordinate::Axial;
use num::Signed;
use serde::{Deserialize, Serialize};

/// Cube hex coordinates.
///
/// See [reference](https://www.redblobgames.com/grids/hexagons/#coordinates-cube).
///
/// Constraint: `x + y + z == 0`. This is not enforced on construction; values produced by this
/// crate always satisfy it, up to floating-point drift for `Cube<f64>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct Cube<T = i32> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Cube<T> {
    pub const fn new(x: T, y: T, z: T) -> Self {
        Cube { x, y, z }
    }

    /// Axial form of this coordinate: `q = x`, `r = y`. `z` is dropped.
    ///
    /// This only inverts [`Axial::to_cube`] when `z == -x - y`.
    pub fn to_axial(self) -> Axial<T> {
        Axial::new(self.x, self.y)
    }
}

impl<T: Signed + Copy> Cube<T> {
    /// How far this coordinate has drifted from the `x + y + z == 0` plane.
    pub fn drift(self) -> T {
        self.x + self.y + self.z
    }

    pub fn distance(self, other: Cube<T>) -> T {
        let two = T::one() + T::one();
        ((self.x - other.x).abs() + (self.y - other.y).abs() + (self.z - other.z).abs()) / two
    }
}

impl Cube<f64> {
    /// Snap a fractional cube coordinate to the nearest cell.
    ///
    /// Each axis is rounded independently, then the axis whose rounding moved it furthest is
    /// recomputed from the other two, so the output satisfies `x + y + z == 0` exactly.
    ///
    /// Only meaningful while every rounded axis fits in `i32`: beyond that the casts saturate,
    /// and NaN axes become 0. Use [`checked_round`][Self::checked_round] for untrusted input.
    pub fn round(self) -> Cube {
        let (x, y, z) = self.round_axes();
        Cube::new(x as i32, y as i32, z as i32)
    }

    /// As [`round`][Self::round], but `None` when any axis is non-finite or the snapped cell
    /// lies outside the `i32` range.
    pub fn checked_round(self) -> Option<Cube> {
        let (x, y, z) = self.round_axes();
        let fits = |v: f64| v >= f64::from(i32::MIN) && v <= f64::from(i32::MAX);
        (fits(x) && fits(y) && fits(z)).then(|| Cube::new(x as i32, y as i32, z as i32))
    }

    fn round_axes(self) -> (f64, f64, f64) {
        let mut rx = self.x.round();
        let mut ry = self.y.round();
        let mut rz = self.z.round();

        let dx = (rx - self.x).abs();
        let dy = (ry - self.y).abs();
        let dz = (rz - self.z).abs();

        if dx > dy && dx > dz {
            rx = -ry - rz;
        } else if dy > dz {
            ry = -rx - rz;
        } else {
            rz = -rx - ry;
        }

        (rx, ry, rz)
    }
}

impl<T> From<Cube<T>> for Axial<T> {
    fn from(cube: Cube<T>) -> Self {
        cube.to_axial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_recomputes_x() {
        let rounded = Cube::new(1.5, -0.9, -0.6).round();
        assert_eq!(rounded, Cube::new(2, -1, -1));
        assert_eq!(rounded.drift(), 0);
    }

    #[test]
    fn test_round_recomputes_y_from_x_and_z() {
        // dy is the largest error here; y must be rebuilt as -x - z, not -x - x.
        let rounded = Cube::new(2.2, -1.55, -0.65).round();
        assert_eq!(rounded, Cube::new(2, -1, -1));
        assert_eq!(rounded.drift(), 0);
    }

    #[test]
    fn test_round_recomputes_z() {
        let rounded = Cube::new(0.1, 0.4, -0.5).round();
        assert_eq!(rounded, Cube::new(0, 0, 0));
        assert_eq!(rounded.drift(), 0);
    }

    #[test]
    fn test_round_exact_input_is_unchanged() {
        assert_eq!(Cube::new(3.0, -5.0, 2.0).round(), Cube::new(3, -5, 2));
    }

    #[test]
    fn test_round_always_lands_on_plane() {
        let mut x = -3.0;
        while x <= 3.0 {
            let mut y = -3.0;
            while y <= 3.0 {
                let cube = Cube::new(x, y, -x - y);
                assert_eq!(cube.round().drift(), 0, "{:?}", cube);
                y += 0.13;
            }
            x += 0.17;
        }
    }

    #[test]
    fn test_checked_round() {
        assert_eq!(
            Cube::new(1.5, -0.9, -0.6).checked_round(),
            Some(Cube::new(2, -1, -1))
        );
        assert_eq!(Cube::new(3.0e9, -1.5e9, -1.5e9).checked_round(), None);
        assert_eq!(Cube::new(f64::NAN, 0.0, 0.0).checked_round(), None);
        assert_eq!(Cube::new(f64::INFINITY, 0.0, f64::NEG_INFINITY).checked_round(), None);

        let edge = f64::from(i32::MAX);
        assert_eq!(
            Cube::new(edge, -edge, 0.0).checked_round(),
            Some(Cube::new(i32::MAX, -i32::MAX, 0))
        );
    }

    #[test]
    fn test_distance() {
        let origin = Cube::<i32>::default();
        assert_eq!(origin.distance(Cube::new(2, -1, -1)), 2);
        assert_eq!(Cube::new(1, -3, 2).distance(Cube::new(-1, 0, 1)), 3);
    }
}
