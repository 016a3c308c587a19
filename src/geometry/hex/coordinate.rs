use super::{cube::Cube, direction::Direction};
use itertools::Either;
use num::Signed;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Sub};

/// Order in which a ring walk turns, after first stepping out `East` to its starting corner.
static RING_WALK: [Direction; 6] = [
    Direction::Northwest,
    Direction::West,
    Direction::Southwest,
    Direction::Southeast,
    Direction::East,
    Direction::Northeast,
];

/// Axial hex coordinates.
///
/// See [reference](https://www.redblobgames.com/grids/hexagons/#coordinates).
///
/// `Axial<i32>` addresses a single cell. `Axial<f64>` is a position within the grid which has
/// not yet been snapped to a cell; see [`Axial::round`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default, Hash, Serialize, Deserialize,
)]
pub struct Axial<T = i32> {
    pub q: T,
    pub r: T,
}

impl<T> Axial<T> {
    pub const fn new(q: T, r: T) -> Self {
        Axial { q, r }
    }
}

impl<T: Signed + Copy> Axial<T> {
    /// Cube form of this coordinate: `x = q`, `y = r`, `z = -q - r`.
    pub fn to_cube(self) -> Cube<T> {
        Cube::new(self.q, self.r, -self.q - self.r)
    }
}

impl Axial {
    /// Number of steps between two cells.
    ///
    /// Defined for every pair of `i32` cells; the widest span, corner to opposite corner of the
    /// `i32` range, is `2^33 - 2` steps.
    pub fn distance(self, other: Axial) -> u64 {
        let dq = i64::from(self.q) - i64::from(other.q);
        let dr = i64::from(self.r) - i64::from(other.r);
        (dq.unsigned_abs() + dr.unsigned_abs() + (dq + dr).unsigned_abs()) / 2
    }

    pub fn neighbor(self, direction: Direction) -> Axial {
        self + direction
    }

    /// The six adjacent cells, in [`Direction::iter`] order.
    pub fn neighbors(self) -> impl 'static + Iterator<Item = Axial> {
        Direction::iter().map(move |direction| self + direction)
    }

    /// All cells exactly `radius` steps from this one.
    ///
    /// The walk starts `radius` steps `East`, which is not emitted, then walks `radius` steps
    /// in each of `Northwest`, `West`, `Southwest`, `Southeast`, `East`, `Northeast`,
    /// emitting every cell it lands on. The final cell emitted is the starting corner.
    ///
    /// Yields `6 * radius` cells for positive `radius`, and nothing otherwise.
    pub fn ring(self, radius: i32) -> impl 'static + Iterator<Item = Axial> {
        let steps = radius.max(0);
        let corner = self + Direction::East.scaled(steps);
        RING_WALK
            .iter()
            .flat_map(move |&direction| itertools::repeat_n(direction, steps as usize))
            .scan(corner, |cursor, direction| {
                *cursor += direction;
                Some(*cursor)
            })
    }

    /// Rings `1..=radius` around this cell, preceded by this cell itself when `solid`.
    ///
    /// A negative `radius` counts rings down from 1 to `radius`; as rings of non-positive
    /// radius are empty, only ring 1 contributes.
    pub fn hexagon(self, radius: i32, solid: bool) -> impl 'static + Iterator<Item = Axial> {
        let radii = if radius >= 0 {
            Either::Left(1..=radius)
        } else {
            Either::Right((radius..=1).rev())
        };

        solid
            .then_some(self)
            .into_iter()
            .chain(radii.flat_map(move |radius| self.ring(radius)))
    }
}

impl Axial<f64> {
    /// Snap a fractional position to the cell containing it.
    pub fn round(self) -> Axial {
        self.to_cube().round().into()
    }
}

/// Number of cells [`Axial::hexagon`] yields for a non-negative radius.
pub fn hexagon_size(radius: u32, solid: bool) -> usize {
    let radius = radius as usize;
    3 * radius * (radius + 1) + usize::from(solid)
}

impl<T: Signed + Copy> From<Axial<T>> for Cube<T> {
    fn from(axial: Axial<T>) -> Self {
        axial.to_cube()
    }
}

impl AddAssign<Direction> for Axial {
    fn add_assign(&mut self, rhs: Direction) {
        *self = *self + rhs.vector();
    }
}

impl Add<Direction> for Axial {
    type Output = Axial;

    fn add(mut self, rhs: Direction) -> Self::Output {
        self += rhs;
        self
    }
}

impl<T: Add<Output = T>> Add for Axial<T> {
    type Output = Axial<T>;

    fn add(self, rhs: Self) -> Self::Output {
        Axial::new(self.q + rhs.q, self.r + rhs.r)
    }
}

impl<T: Sub<Output = T>> Sub for Axial<T> {
    type Output = Axial<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        Axial::new(self.q - rhs.q, self.r - rhs.r)
    }
}
