//! ASCII rendering and parsing.
//!
//! One glyph per cell (see [`CellKind::glyph`]), one line per row.
//! Parsing ignores blank lines and surrounding whitespace so fixtures
//! can be written as indented raw strings.

use std::fmt;

use mazewright_core::{CellKind, Coord, GridError};

use crate::grid::Grid;

impl Grid {
    /// Render the cells as newline-separated glyph rows.
    ///
    /// ```
    /// use mazewright_core::{CellKind, Coord};
    /// use mazewright_grid::Grid;
    ///
    /// let mut grid = Grid::new(2).unwrap();
    /// grid.set_cell(Coord::new(0, 1), CellKind::Wall);
    /// assert_eq!(grid.render(), ".#\n..");
    /// ```
    pub fn render(&self) -> String {
        self.rows()
            .iter()
            .map(|row| row.iter().map(|k| k.glyph()).collect::<String>())
            .collect::<Vec<String>>()
            .join("\n")
    }

    /// Build a grid from its [`render`](Grid::render)ed form.
    ///
    /// Visit counters start at zero.
    pub fn parse(text: &str) -> Result<Grid, GridError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let mut grid = Grid::new(lines.len())?;
        let size = lines.len();
        for (row, line) in lines.iter().enumerate() {
            let width = line.chars().count();
            if width != size {
                return Err(GridError::NotSquare {
                    row,
                    expected: size,
                    found: width,
                });
            }
            for (col, glyph) in line.chars().enumerate() {
                let kind = CellKind::from_glyph(glyph)
                    .ok_or(GridError::UnknownGlyph { glyph, row, col })?;
                grid.set_cell(Coord::new(row as i32, col as i32), kind);
            }
        }
        Ok(grid)
    }

    /// First cell of the given kind in row-major order.
    pub fn find(&self, kind: CellKind) -> Option<Coord> {
        self.iter().find(|&(_, k)| k == kind).map(|(c, _)| c)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
