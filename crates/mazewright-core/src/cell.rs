//! Cell states.

use std::fmt;

/// The state of one grid cell.
///
/// Searches only ever read [`Wall`](CellKind::Wall) as blocking; every
/// other kind is traversable, including cells already marked by an
/// earlier run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Open floor.
    #[default]
    Empty,
    /// Blocks movement.
    Wall,
    /// The search origin marker.
    Start,
    /// The search target marker.
    End,
    /// Expanded by a search.
    Visited,
    /// Part of a reconstructed or surviving solution route.
    Path,
    /// Pruned by dead-end filling.
    FilledDeadEnd,
}

impl CellKind {
    /// Every kind, in declaration order.
    pub const ALL: [CellKind; 7] = [
        CellKind::Empty,
        CellKind::Wall,
        CellKind::Start,
        CellKind::End,
        CellKind::Visited,
        CellKind::Path,
        CellKind::FilledDeadEnd,
    ];

    /// `true` for every kind except [`Wall`](CellKind::Wall).
    pub fn is_traversable(self) -> bool {
        self != CellKind::Wall
    }

    /// `true` for the Start and End markers.
    pub fn is_endpoint(self) -> bool {
        matches!(self, CellKind::Start | CellKind::End)
    }

    /// Single-character rendering used by ASCII dumps and fixtures.
    pub fn glyph(self) -> char {
        match self {
            CellKind::Empty => '.',
            CellKind::Wall => '#',
            CellKind::Start => 'S',
            CellKind::End => 'E',
            CellKind::Visited => 'o',
            CellKind::Path => '*',
            CellKind::FilledDeadEnd => 'x',
        }
    }

    /// Inverse of [`glyph`](CellKind::glyph).
    pub fn from_glyph(glyph: char) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.glyph() == glyph)
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CellKind::Empty => "empty",
            CellKind::Wall => "wall",
            CellKind::Start => "start",
            CellKind::End => "end",
            CellKind::Visited => "visited",
            CellKind::Path => "path",
            CellKind::FilledDeadEnd => "filled dead end",
        };
        f.write_str(name)
    }
}
