//! Corner regions and random endpoint placement.

use mazewright_core::{CellKind, Coord};
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::grid::Grid;

/// One of the four grid corners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Row 0, column 0.
    TopLeft,
    /// Row 0, last column.
    TopRight,
    /// Last row, column 0.
    BottomLeft,
    /// Last row, last column.
    BottomRight,
}

impl Corner {
    /// All four corners.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// The up-to-3×3 block of cells anchored at this corner of a
    /// `size × size` grid, row-major.
    pub fn region(self, size: usize) -> Vec<Coord> {
        let last = size as i32 - 1;
        let near = (0, 2.min(last));
        let far = ((size as i32 - 3).max(0), last);
        let (rows, cols) = match self {
            Corner::TopLeft => (near, near),
            Corner::TopRight => (near, far),
            Corner::BottomLeft => (far, near),
            Corner::BottomRight => (far, far),
        };
        let mut cells = Vec::with_capacity(9);
        for row in rows.0..=rows.1 {
            for col in cols.0..=cols.1 {
                cells.push(Coord::new(row, col));
            }
        }
        cells
    }
}

impl Grid {
    /// The cells of `corner`'s 3×3 region that are off the outer border.
    pub fn corner_cells(&self, corner: Corner) -> Vec<Coord> {
        corner
            .region(self.size())
            .into_iter()
            .filter(|&c| self.is_interior(c))
            .collect()
    }

    /// Pick a start and an end near two different random corners.
    ///
    /// The start corner is uniform over all four, the end corner uniform
    /// over the remaining three. Within each corner an Empty interior
    /// cell is chosen uniformly; if the corner has none, any interior
    /// corner cell is eligible. The start cell is never eligible as the
    /// end, even where two corner regions overlap on small grids.
    ///
    /// Returns `None` only when the grid is too small to hold two
    /// distinct interior corner cells (`size < 4`).
    pub fn random_start_end<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<(Coord, Coord)> {
        let start_idx = rng.random_range(0..Corner::ALL.len());
        let start_corner = Corner::ALL[start_idx];
        let others: Vec<Corner> = Corner::ALL
            .into_iter()
            .enumerate()
            .filter(|&(i, _)| i != start_idx)
            .map(|(_, c)| c)
            .collect();
        let end_corner = *others.choose(rng)?;

        let start = *self.endpoint_candidates(start_corner, None).choose(rng)?;
        let end = *self.endpoint_candidates(end_corner, Some(start)).choose(rng)?;
        Some((start, end))
    }

    fn endpoint_candidates(&self, corner: Corner, exclude: Option<Coord>) -> Vec<Coord> {
        let interior: Vec<Coord> = self
            .corner_cells(corner)
            .into_iter()
            .filter(|&c| Some(c) != exclude)
            .collect();
        let empty: Vec<Coord> = interior
            .iter()
            .copied()
            .filter(|&c| self.is(c, CellKind::Empty))
            .collect();
        if empty.is_empty() {
            interior
        } else {
            empty
        }
    }
}
