//! Algorithm and board-mode selectors.
//!
//! Each enum round-trips through its display name, which is the
//! identifier used at the library boundary (`"A*"`, `"prims"`,
//! `"open-grid"`, ...).

use std::fmt;
use std::str::FromStr;

use crate::error::ParseNameError;

// ── SearchAlgorithm ────────────────────────────────────────────────

/// The six stepwise search algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SearchAlgorithm {
    /// Breadth-first search.
    Bfs,
    /// Depth-first search.
    Dfs,
    /// Dijkstra's algorithm with unit edge costs.
    Dijkstra,
    /// A* with the Manhattan heuristic.
    AStar,
    /// Breadth-first flood of the whole reachable region.
    FloodFill,
    /// Iterative dead-end pruning; the solution is left in the grid.
    DeadEndFilling,
}

impl SearchAlgorithm {
    /// Every algorithm, in the order a comparison lays them out.
    pub const ALL: [SearchAlgorithm; 6] = [
        SearchAlgorithm::Bfs,
        SearchAlgorithm::Dfs,
        SearchAlgorithm::Dijkstra,
        SearchAlgorithm::AStar,
        SearchAlgorithm::FloodFill,
        SearchAlgorithm::DeadEndFilling,
    ];

    /// Boundary name of this algorithm.
    pub fn name(self) -> &'static str {
        match self {
            SearchAlgorithm::Bfs => "BFS",
            SearchAlgorithm::Dfs => "DFS",
            SearchAlgorithm::Dijkstra => "Dijkstra",
            SearchAlgorithm::AStar => "A*",
            SearchAlgorithm::FloodFill => "Flood-Fill",
            SearchAlgorithm::DeadEndFilling => "Dead-End Filling",
        }
    }

    /// `true` when the solution is marked in the grid rather than
    /// returned as a coordinate sequence.
    pub fn is_grid_encoded(self) -> bool {
        self == SearchAlgorithm::DeadEndFilling
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchAlgorithm {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| ParseNameError::new("search algorithm", s))
    }
}

// ── MazeAlgorithm ──────────────────────────────────────────────────

/// The three perfect-maze generators.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MazeAlgorithm {
    /// Depth-first carving with shuffled neighbour order.
    #[default]
    RecursiveBacktracking,
    /// Randomised Prim's: grow from a random frontier cell.
    Prims,
    /// Loop-erased random walks (uniform spanning tree).
    Wilsons,
}

impl MazeAlgorithm {
    /// Every generator, in maze-comparison order.
    pub const ALL: [MazeAlgorithm; 3] = [
        MazeAlgorithm::RecursiveBacktracking,
        MazeAlgorithm::Prims,
        MazeAlgorithm::Wilsons,
    ];

    /// Boundary name of this generator.
    pub fn name(self) -> &'static str {
        match self {
            MazeAlgorithm::RecursiveBacktracking => "recursive-backtracking",
            MazeAlgorithm::Prims => "prims",
            MazeAlgorithm::Wilsons => "wilsons",
        }
    }
}

impl fmt::Display for MazeAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MazeAlgorithm {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| ParseNameError::new("maze algorithm", s))
    }
}

// ── MazeMode ───────────────────────────────────────────────────────

/// How a fresh board is populated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MazeMode {
    /// Density-driven walls with redundant routes.
    #[default]
    MultiplePaths,
    /// A perfect maze from one of the [`MazeAlgorithm`]s.
    PerfectMaze,
    /// No walls at all.
    OpenGrid,
}

impl MazeMode {
    /// Every mode.
    pub const ALL: [MazeMode; 3] = [
        MazeMode::MultiplePaths,
        MazeMode::PerfectMaze,
        MazeMode::OpenGrid,
    ];

    /// Boundary name of this mode.
    pub fn name(self) -> &'static str {
        match self {
            MazeMode::MultiplePaths => "multiple-paths",
            MazeMode::PerfectMaze => "perfect-maze",
            MazeMode::OpenGrid => "open-grid",
        }
    }
}

impl fmt::Display for MazeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MazeMode {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| ParseNameError::new("maze mode", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_names_round_trip() {
        for algo in SearchAlgorithm::ALL {
            assert_eq!(algo.name().parse::<SearchAlgorithm>(), Ok(algo));
        }
    }

    #[test]
    fn maze_names_round_trip() {
        for algo in MazeAlgorithm::ALL {
            assert_eq!(algo.to_string().parse::<MazeAlgorithm>(), Ok(algo));
        }
        for mode in MazeMode::ALL {
            assert_eq!(mode.to_string().parse::<MazeMode>(), Ok(mode));
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "Bogo".parse::<SearchAlgorithm>().unwrap_err();
        assert_eq!(err.name, "Bogo");
        assert!(err.to_string().contains("search algorithm"));
    }

    #[test]
    fn names_are_case_sensitive() {
        assert!("bfs".parse::<SearchAlgorithm>().is_err());
        assert!("Prims".parse::<MazeAlgorithm>().is_err());
    }

    #[test]
    fn only_dead_end_filling_is_grid_encoded() {
        let encoded: Vec<_> = SearchAlgorithm::ALL
            .into_iter()
            .filter(|a| a.is_grid_encoded())
            .collect();
        assert_eq!(encoded, vec![SearchAlgorithm::DeadEndFilling]);
    }
}
