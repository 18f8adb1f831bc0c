//! Coordinates on keypads and on the city grid.

use std::fmt::{Display, Formatter};

/// Keypad coordinates are never negative.
pub type Coord = usize;

/// A cell on a keypad grid, stored as `(x, y)`; `x` is the column and `y` the row.
#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug, Default)]
pub struct Location(pub Coord, pub Coord);

impl Location {
    /// Offset by `(dx, dy)`, or [`None`] if either coordinate would go negative or overflow.
    pub fn offset_by(self, rhs: (isize, isize)) -> Option<Self> {
        Some(Self(self.0.checked_add_signed(rhs.0)?, self.1.checked_add_signed(rhs.1)?))
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

/// A point on the unbounded city grid walked by [`Walker`](crate::walk::Walker), `(x, y)` with `y` growing southward.
#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug, Default)]
pub struct Position(pub i64, pub i64);

impl Position {
    /// Offset by `(dx, dy)`; the city grid has no edges.
    pub fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0 + rhs.0 as i64, self.1 + rhs.1 as i64)
    }

    /// Taxicab distance from the origin.
    pub fn distance_from_origin(&self) -> u64 {
        self.0.unsigned_abs() + self.1.unsigned_abs()
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}
