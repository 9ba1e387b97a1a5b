//! The [`Grid`] data model and its primitive mutators.

use indexmap::IndexMap;
use mazewright_core::{CellKind, Coord, GridError};
use rand::Rng;
use smallvec::SmallVec;

/// Orthogonal offsets in neighbour order: up, down, left, right.
pub(crate) const ORTHOGONAL: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A `size × size` matrix of [`CellKind`]s plus per-cell visit counters.
///
/// Accessors are bounds-checked and silent: reading outside the grid
/// returns `None`, writing outside it is a no-op that returns `false`.
/// Neighbour probing at the edges relies on this.
///
/// `Clone` is a deep copy, visit counters included, so a clone can be
/// handed to a separate run and mutated freely.
///
/// # Examples
///
/// ```
/// use mazewright_core::{CellKind, Coord};
/// use mazewright_grid::Grid;
///
/// let mut grid = Grid::new(5).unwrap();
/// assert!(grid.set_cell(Coord::new(0, 1), CellKind::Wall));
/// assert!(!grid.set_cell(Coord::new(0, 5), CellKind::Wall));
///
/// // Corner (0, 0): its right-hand neighbour is a wall, so only "down" remains.
/// let n = grid.neighbours(Coord::new(0, 0));
/// assert_eq!(n.as_slice(), &[Coord::new(1, 0)]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<CellKind>,
    visits: IndexMap<Coord, u32>,
}

impl Grid {
    /// Largest accepted side length. Coordinates are `i32`, and the
    /// cell vector stays comfortably addressable well below this.
    pub const MAX_SIZE: usize = 4096;

    /// Create an all-Empty grid with `size × size` cells.
    ///
    /// Returns [`GridError::EmptyGrid`] for `size == 0` and
    /// [`GridError::SizeTooLarge`] above [`Grid::MAX_SIZE`].
    pub fn new(size: usize) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::EmptyGrid);
        }
        if size > Self::MAX_SIZE {
            return Err(GridError::SizeTooLarge {
                size,
                max: Self::MAX_SIZE,
            });
        }
        Ok(Self {
            size,
            cells: vec![CellKind::Empty; size * size],
            visits: IndexMap::new(),
        })
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (`size²`).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether `coord` lies inside the grid.
    pub fn contains(&self, coord: Coord) -> bool {
        self.index(coord).is_some()
    }

    /// Whether `coord` lies inside the grid and off the outer border.
    pub fn is_interior(&self, coord: Coord) -> bool {
        let last = self.size as i32 - 1;
        coord.row > 0 && coord.row < last && coord.col > 0 && coord.col < last
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        let n = self.size as i32;
        if coord.row < 0 || coord.row >= n || coord.col < 0 || coord.col >= n {
            return None;
        }
        Some(coord.row as usize * self.size + coord.col as usize)
    }

    fn coord_of(&self, index: usize) -> Coord {
        Coord::new((index / self.size) as i32, (index % self.size) as i32)
    }

    /// The cell at `coord`, or `None` outside the grid.
    pub fn cell(&self, coord: Coord) -> Option<CellKind> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Whether the cell at `coord` exists and is `kind`.
    pub fn is(&self, coord: Coord, kind: CellKind) -> bool {
        self.cell(coord) == Some(kind)
    }

    /// Overwrite the cell at `coord`. Returns `false` (and changes
    /// nothing) outside the grid.
    pub fn set_cell(&mut self, coord: Coord, kind: CellKind) -> bool {
        match self.index(coord) {
            Some(i) => {
                self.cells[i] = kind;
                true
            }
            None => false,
        }
    }

    /// The in-bounds, non-Wall orthogonal neighbours of `coord`, in
    /// the fixed order up, down, left, right.
    pub fn neighbours(&self, coord: Coord) -> SmallVec<[Coord; 4]> {
        ORTHOGONAL
            .iter()
            .map(|&(dr, dc)| coord.offset(dr, dc))
            .filter(|&n| self.cell(n).is_some_and(CellKind::is_traversable))
            .collect()
    }

    /// Every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.cells.len()).map(|i| self.coord_of(i))
    }

    /// Every `(coord, kind)` pair in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, CellKind)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &kind)| (self.coord_of(i), kind))
    }

    /// A row-by-row copy of the cell states.
    pub fn rows(&self) -> Vec<Vec<CellKind>> {
        self.cells.chunks(self.size).map(<[_]>::to_vec).collect()
    }

    /// Number of cells of the given kind.
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&k| k == kind).count()
    }

    /// Set every cell to `kind`. Visit counters are untouched.
    pub fn fill(&mut self, kind: CellKind) {
        self.cells.fill(kind);
    }

    /// Set every cell to Empty and clear the visit counters.
    pub fn reset(&mut self) {
        self.cells.fill(CellKind::Empty);
        self.visits.clear();
    }

    /// Place the Start and End markers.
    pub fn stamp_endpoints(&mut self, start: Coord, end: Coord) {
        self.set_cell(start, CellKind::Start);
        self.set_cell(end, CellKind::End);
    }

    // ── Visit counters ─────────────────────────────────────────────

    /// How many times `coord` has been visited during the current run.
    pub fn visit_count(&self, coord: Coord) -> u32 {
        self.visits.get(&coord).copied().unwrap_or(0)
    }

    /// Bump the counter for `coord`. Ignored outside the grid.
    pub fn increment_visit_count(&mut self, coord: Coord) {
        if self.contains(coord) {
            *self.visits.entry(coord).or_insert(0) += 1;
        }
    }

    /// Clear every visit counter.
    pub fn reset_visit_counts(&mut self) {
        self.visits.clear();
    }

    /// Visit counters as a dense row-major matrix.
    pub fn visit_counts(&self) -> Vec<Vec<u32>> {
        let mut counts = vec![vec![0; self.size]; self.size];
        for (coord, &count) in &self.visits {
            counts[coord.row as usize][coord.col as usize] = count;
        }
        counts
    }

    // ── Random population ──────────────────────────────────────────

    /// Turn each cell into a Wall independently with probability
    /// `density`, leaving Start and End markers alone.
    ///
    /// Cells that lose the draw keep their current state.
    pub fn generate_walls<R: Rng + ?Sized>(&mut self, density: f64, rng: &mut R) {
        for cell in &mut self.cells {
            if cell.is_endpoint() {
                continue;
            }
            if rng.random::<f64>() < density {
                *cell = CellKind::Wall;
            }
        }
    }
}
