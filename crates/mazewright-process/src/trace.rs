//! One-cell-per-step marking of a found route.

use mazewright_core::{CellKind, Path};
use mazewright_grid::Grid;

/// Walks the interior of a route, turning one cell into
/// [`CellKind::Path`] per [`advance`](PathTrace::advance).
///
/// The first and last cells are never touched, and neither is any cell
/// currently holding a Start or End marker.
#[derive(Clone, Debug)]
pub struct PathTrace {
    path: Path,
    next: usize,
}

impl PathTrace {
    /// Prepare to mark `path`.
    pub fn new(path: Path) -> Self {
        Self { path, next: 1 }
    }

    /// Mark the next eligible cell. Returns `false` once nothing is left.
    pub fn advance(&mut self, grid: &mut Grid) -> bool {
        while self.next + 1 < self.path.len() {
            let coord = self.path[self.next];
            self.next += 1;
            if grid.cell(coord).is_some_and(|k| !k.is_endpoint()) {
                grid.set_cell(coord, CellKind::Path);
                return true;
            }
        }
        false
    }

    /// The route being marked.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Give the route back.
    pub fn into_path(self) -> Path {
        self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazewright_core::Coord;

    fn route(len: i32) -> Path {
        (0..len).map(|col| Coord::new(0, col)).collect()
    }

    #[test]
    fn marks_interior_only() {
        let mut grid = Grid::new(5).unwrap();
        let mut trace = PathTrace::new(route(5));
        let mut steps = 0;
        while trace.advance(&mut grid) {
            steps += 1;
        }
        assert_eq!(steps, 3);
        assert_eq!(grid.render().lines().next(), Some(".***."));
    }

    #[test]
    fn short_routes_mark_nothing() {
        let mut grid = Grid::new(3).unwrap();
        assert!(!PathTrace::new(route(1)).advance(&mut grid));
        assert!(!PathTrace::new(route(2)).advance(&mut grid));
        assert_eq!(grid.count(CellKind::Path), 0);
    }

    #[test]
    fn endpoint_markers_are_skipped() {
        let mut grid = Grid::new(5).unwrap();
        grid.set_cell(Coord::new(0, 2), CellKind::End);
        let mut trace = PathTrace::new(route(4));
        assert!(trace.advance(&mut grid));
        assert!(!trace.advance(&mut grid));
        assert_eq!(grid.cell(Coord::new(0, 2)), Some(CellKind::End));
        assert_eq!(trace.into_path().len(), 4);
    }
}
