use super::coordinate::Axial;

/// Direction in a hexagonal coordinate system
///
/// Each direction corresponds to one of the six axial offset vectors.
/// Textual forms (case sensitive): `e`, `ne`, `nw`, `w`, `sw`, `se`.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    parse_display::Display,
    parse_display::FromStr,
)]
pub enum Direction {
    #[display("e")]
    East,
    #[display("ne")]
    Northeast,
    #[display("nw")]
    Northwest,
    #[display("w")]
    West,
    #[display("sw")]
    Southwest,
    #[display("se")]
    Southeast,
}

impl Direction {
    /// Iterate through all `Direction`s, counterclockwise from `East`.
    ///
    /// This order is the neighbor enumeration order: direction `n` of this iterator
    /// is neighbor `n` of [`Axial::neighbors`].
    pub fn iter() -> impl Iterator<Item = Direction> {
        std::iter::successors(Some(Direction::East), |direction| {
            use Direction::*;

            match direction {
                East => Some(Northeast),
                Northeast => Some(Northwest),
                Northwest => Some(West),
                West => Some(Southwest),
                Southwest => Some(Southeast),
                Southeast => None,
            }
        })
    }

    /// Axial offset of a single step in this direction.
    pub fn vector(self) -> Axial {
        use Direction::*;

        let (q, r) = match self {
            East => (1, 0),
            Northeast => (1, -1),
            Northwest => (0, -1),
            West => (-1, 0),
            Southwest => (-1, 1),
            Southeast => (0, 1),
        };
        Axial::new(q, r)
    }

    /// Axial offset of `steps` steps in this direction.
    pub fn scaled(self, steps: i32) -> Axial {
        let unit = self.vector();
        Axial::new(unit.q * steps, unit.r * steps)
    }

    pub fn reverse(self) -> Direction {
        use Direction::*;

        match self {
            East => West,
            Northeast => Southwest,
            Northwest => Southeast,
            West => East,
            Southwest => Northeast,
            Southeast => Northwest,
        }
    }
}
