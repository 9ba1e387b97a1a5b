//! Parent-pointer arena for partial routes.
//!
//! A frontier entry in BFS/DFS/Dijkstra/A* stands for the whole route
//! that reached it. Instead of copying that route per entry, every
//! entry holds a [`TrailId`]; the route is rebuilt by following parent
//! links only when a search succeeds.

use mazewright_core::{Coord, Path};

/// Handle to one node of a [`Trail`].
///
/// Ids are handed out in allocation order, so ordering ids orders
/// entries by when they were discovered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrailId(u32);

#[derive(Clone, Debug)]
struct TrailNode {
    coord: Coord,
    parent: Option<TrailId>,
    len: u32,
}

/// Append-only tree of route prefixes.
#[derive(Clone, Debug, Default)]
pub struct Trail {
    nodes: Vec<TrailNode>,
}

impl Trail {
    /// An empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new route at `coord`.
    pub fn root(&mut self, coord: Coord) -> TrailId {
        self.push(coord, None, 1)
    }

    /// The route `parent` extended by one cell.
    pub fn extend(&mut self, parent: TrailId, coord: Coord) -> TrailId {
        let len = self.node(parent).len + 1;
        self.push(coord, Some(parent), len)
    }

    fn push(&mut self, coord: Coord, parent: Option<TrailId>, len: u32) -> TrailId {
        let id = TrailId(self.nodes.len() as u32);
        self.nodes.push(TrailNode { coord, parent, len });
        id
    }

    fn node(&self, id: TrailId) -> &TrailNode {
        &self.nodes[id.0 as usize]
    }

    /// Last cell of the route.
    pub fn head(&self, id: TrailId) -> Coord {
        self.node(id).coord
    }

    /// Number of cells on the route, both ends included.
    pub fn route_len(&self, id: TrailId) -> usize {
        self.node(id).len as usize
    }

    /// The full route ending at `id`, root first.
    pub fn path(&self, id: TrailId) -> Path {
        let mut path = Vec::with_capacity(self.route_len(id));
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let node = self.node(current);
            path.push(node.coord);
            cursor = node.parent;
        }
        path.reverse();
        path
    }

    /// Number of nodes allocated so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether nothing has been allocated.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
