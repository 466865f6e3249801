//! Grid coordinates and single-step movement.

use std::fmt;

use super::Direction;

/// A (row, column) position on the map.
///
/// Row 0 is the top line of the map and column 0 its leftmost character.
/// Coordinates are never negative; bounds against a particular map are
/// checked with [`TubeMap::contains`](crate::map::TubeMap::contains).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Create a coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The coordinate one step away in `direction`.
    ///
    /// Returns `None` if the step would leave the top or left edge. Steps past
    /// the bottom or right edge produce a coordinate that a map will reject.
    ///
    /// ```
    /// use tube_server::domain::{Coord, Direction};
    ///
    /// let c = Coord::new(2, 3);
    /// assert_eq!(c.step(Direction::NorthEast), Some(Coord::new(1, 4)));
    /// assert_eq!(Coord::new(0, 0).step(Direction::North), None);
    /// ```
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dr, dc) = direction.delta();
        Some(Self {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
