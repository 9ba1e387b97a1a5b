//! Hand-drawn grids with known answers.
//!
//! Each fixture returns the grid plus its start and end. Grids carry
//! their Start/End markers.

use mazewright_core::Coord;
use mazewright_grid::Grid;

fn parse(text: &str) -> Grid {
    match Grid::parse(text) {
        Ok(grid) => grid,
        Err(e) => panic!("fixture does not parse: {e}"),
    }
}

/// 5×5 board where (2,2), (1,3) and (3,1) block every monotone route
/// from (1,1) to (3,3). The shortest route runs along the border and
/// has 9 cells.
pub fn detour() -> (Grid, Coord, Coord) {
    let grid = parse(
        "
        .....
        .S.#.
        ..#..
        .#.E.
        .....
        ",
    );
    (grid, Coord::new(1, 1), Coord::new(3, 3))
}

/// Shortest route length (in cells) through [`detour`].
pub const DETOUR_ROUTE_LEN: usize = 9;

/// 7×7 board whose end is sealed inside a wall ring.
pub fn sealed() -> (Grid, Coord, Coord) {
    let grid = parse(
        "
        S......
        .......
        ..###..
        ..#E#..
        ..###..
        .......
        .......
        ",
    );
    (grid, Coord::new(0, 0), Coord::new(3, 3))
}

/// 7×7 maze that is one winding corridor from Start to End, 15 cells
/// between the markers.
pub fn corridor_maze() -> (Grid, Coord, Coord) {
    let grid = parse(
        "
        #######
        #S....#
        #####.#
        #.....#
        #.#####
        #....E#
        #######
        ",
    );
    (grid, Coord::new(1, 1), Coord::new(5, 5))
}

/// 7×7 perfect maze: a 7-cell solution corridor between the markers
/// plus three blind branches.
pub fn branching_maze() -> (Grid, Coord, Coord) {
    let grid = parse(
        "
        #######
        #S..#.#
        ###.#.#
        #...#.#
        #.#...#
        #.#.#E#
        #######
        ",
    );
    (grid, Coord::new(1, 1), Coord::new(5, 5))
}

/// Cells of the [`branching_maze`] solution, excluding the markers.
pub const BRANCHING_SOLUTION_LEN: usize = 7;
