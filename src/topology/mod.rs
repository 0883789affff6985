//! Block topology of a bounded edit-distance Levenshtein automaton.
//!
//! Given a pattern and a maximum edit distance, the topology is a grid of
//! building blocks (one per `(errors, position)` cell) wired together by
//! directed edges for match, insertion, replacement and deletion runs. It says
//! nothing about how the blocks are realised; see [`crate::emit`] for that.
//!
//! # Example
//!
//! ```rust
//! use levenshtein_anml::topology::{BlockKind, Coord, Topology};
//!
//! let topology = Topology::build("abcd", 1)?;
//! assert_eq!(topology.node_at(Coord::new(0, 1)).map(|n| n.kind), Some(BlockKind::StartingMatch));
//! assert_eq!(topology.edges_from(Coord::new(0, 1)).count(), 4);
//! # Ok::<(), levenshtein_anml::topology::InvalidParameterError>(())
//! ```

pub mod builder;
pub mod classify;
pub mod edges;
mod error;
pub mod grid;

use std::fmt;

pub use builder::{BuilderError, TopologyBuilder};
pub use classify::{classify, BlockKind};
pub use edges::{edges_from, Edge, EdgeFamily, InPort, OutCapabilities, OutPort};
pub use error::{validate_parameters, InvalidParameterError};
pub use grid::{Coord, Grid, NodeId};

use tracing::debug;

/// A materialised block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize))]
pub struct Node {
    /// Dense id, `row * width + col`.
    pub id: NodeId,
    /// Grid cell.
    pub coord: Coord,
    /// Block realising the cell.
    pub kind: BlockKind,
}

/// The complete graph for one pattern and edit distance.
///
/// Nodes are materialised up front; edges are streamed on demand since their
/// number grows with `height × width × min(height, width)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topology {
    pattern: Vec<char>,
    grid: Grid,
    nodes: Vec<Node>,
}

impl Topology {
    /// Validate the parameters and build the node listing.
    ///
    /// The pattern length is counted in `char`s.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameterError`] if `edit_distance` is 0 or the
    /// pattern is not longer than `edit_distance + 1`.
    pub fn build(pattern: &str, edit_distance: usize) -> Result<Self, InvalidParameterError> {
        let pattern: Vec<char> = pattern.chars().collect();
        let grid = validate_parameters(pattern.len(), edit_distance)?;

        let nodes: Vec<Node> = grid
            .coords()
            .map(|coord| Node {
                id: grid.node_id(coord),
                coord,
                kind: classify(&grid, coord),
            })
            .collect();

        debug!(
            height = grid.height(),
            width = grid.width(),
            nodes = nodes.len(),
            "topology_built"
        );

        Ok(Topology {
            pattern,
            grid,
            nodes,
        })
    }

    /// The search pattern.
    #[inline]
    pub fn pattern(&self) -> &[char] {
        &self.pattern
    }

    /// Grid dimensions.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Every node, ordered by id.
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Node with `id`, if it exists.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        // ids start at 1; the origin slot is never filled
        let index = id.get().checked_sub(1)?;
        self.nodes.get(index)
    }

    /// Node at `coord`, if it exists.
    pub fn node_at(&self, coord: Coord) -> Option<&Node> {
        if coord.is_origin() || !self.grid.contains(coord) {
            return None;
        }
        self.node(self.grid.node_id(coord))
    }

    /// Pattern symbol consumed on entering column `coord.col`.
    ///
    /// Column 0 has consumed nothing and yields `None`.
    pub fn symbol_at(&self, coord: Coord) -> Option<char> {
        let index = coord.col.checked_sub(1)?;
        self.pattern.get(index).copied()
    }

    /// Edges leaving the node at `coord`.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is the origin or outside the grid.
    pub fn edges_from(&self, coord: Coord) -> impl Iterator<Item = Edge> {
        edges_from(self.grid, coord)
    }

    /// Every edge, grouped by source node in id order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let grid = self.grid;
        self.nodes
            .iter()
            .flat_map(move |node| edges_from(grid, node.coord))
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Nodes that report a match.
    pub fn reporting_nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter().filter(|node| node.kind.is_reporting())
    }

    /// Printable grid of block abbreviations, top row first.
    pub fn grid_view(&self) -> GridView<'_> {
        GridView { topology: self }
    }
}

/// `Display` adapter printing the block grid, top row first.
///
/// ```text
/// (1, 0) SSEB  (1, 1) SEB   (1, 2) LSMB  (1, 3) SiEB  (1, 4) SERB
/// (0, 0)       (0, 1) StMB  (0, 2) SiMB  (0, 3) RMB   (0, 4) RMB
/// ```
pub struct GridView<'a> {
    topology: &'a Topology,
}

impl fmt::Display for GridView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = self.topology.grid;
        for row in (0..grid.height()).rev() {
            for col in 0..grid.width() {
                if col > 0 {
                    f.write_str("  ")?;
                }
                let coord = Coord::new(row, col);
                let code = self
                    .topology
                    .node_at(coord)
                    .map_or("", |node| node.kind.abbreviation());
                write!(f, "{} {:<4}", coord, code)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
