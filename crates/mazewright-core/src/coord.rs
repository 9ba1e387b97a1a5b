//! The [`Coord`] type and the [`Path`] alias.

use std::fmt;

/// A `(row, col)` position on a square grid.
///
/// Components are signed so that neighbour probing can step off the
/// edge of the grid; the grid rejects such coordinates on access rather
/// than the coordinate type forbidding them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Row index, counted from the top.
    pub row: i32,
    /// Column index, counted from the left.
    pub col: i32,
}

impl Coord {
    /// Construct a coordinate.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The coordinate displaced by `(dr, dc)`.
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// Manhattan (L1) distance to `other`.
    ///
    /// ```
    /// use mazewright_core::Coord;
    ///
    /// assert_eq!(Coord::new(1, 1).manhattan(Coord::new(3, 4)), 5);
    /// ```
    pub fn manhattan(self, other: Coord) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// The cell halfway between `self` and `other`.
    ///
    /// Used for the connecting wall between two lattice cells two
    /// steps apart.
    pub const fn midpoint(self, other: Coord) -> Self {
        Self {
            row: (self.row + other.row) / 2,
            col: (self.col + other.col) / 2,
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

/// An ordered route from start to end, both inclusive.
pub type Path = Vec<Coord>;

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn offset_moves_both_axes() {
        assert_eq!(Coord::new(2, 3).offset(-1, 2), Coord::new(1, 5));
    }

    #[test]
    fn midpoint_of_lattice_neighbours() {
        assert_eq!(Coord::new(1, 1).midpoint(Coord::new(1, 3)), Coord::new(1, 2));
        assert_eq!(Coord::new(5, 3).midpoint(Coord::new(3, 3)), Coord::new(4, 3));
    }

    #[test]
    fn display_is_row_then_col() {
        assert_eq!(Coord::new(4, 7).to_string(), "(4, 7)");
    }

    #[test]
    fn from_tuple() {
        let c: Coord = (3, 9).into();
        assert_eq!(c, Coord::new(3, 9));
    }

    proptest! {
        #[test]
        fn manhattan_is_symmetric(
            r1 in -100i32..100, c1 in -100i32..100,
            r2 in -100i32..100, c2 in -100i32..100,
        ) {
            let a = Coord::new(r1, c1);
            let b = Coord::new(r2, c2);
            prop_assert_eq!(a.manhattan(b), b.manhattan(a));
            prop_assert_eq!(a.manhattan(a), 0);
        }
    }
}
