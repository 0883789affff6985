//! Grid geometry of the block topology.
//!
//! The automaton is laid out as a `height × width` rectangle:
//!
//! ```text
//! row (errors)
//!   2 | CSTE  SiEB  SEB   LSMB  SiEB  SERB
//!   1 | SSEB  SEB   LSMB  SiEB  SERB  SERB
//!   0 |  --   StMB  SiMB  RMB   RMB   RMB
//!     +------------------------------------ col (pattern position)
//! ```
//!
//! (pattern length 5, edit distance 2)
//!
//! - `height = edit_distance + 1` (one row per accumulated error count)
//! - `width = pattern_len + 1` (column 0 holds zero matched symbols)
//!
//! The origin `(0, 0)` is never a node. Node ids are `row * width + col`, so
//! id `0` is never handed out.

use std::fmt;

/// A cell of the grid: `row` errors accumulated, `col` pattern symbols consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    /// Accumulated error count.
    pub row: usize,
    /// Position within the pattern.
    pub col: usize,
}

impl Coord {
    /// The degenerate "nothing matched, no errors" cell.
    pub const ORIGIN: Coord = Coord { row: 0, col: 0 };

    /// Create a coordinate.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }

    /// Whether this is the origin cell, which never materialises as a node.
    #[inline]
    pub const fn is_origin(self) -> bool {
        self.row == 0 && self.col == 0
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Dense node identifier, `row * width + col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialization", serde(transparent))]
pub struct NodeId(pub usize);

impl NodeId {
    /// The raw id value.
    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Dimensions of a validated grid.
///
/// A `Grid` is only produced by [`validate_parameters`](super::validate_parameters),
/// so `height >= 2` and `width >= edit_distance + 3` always hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    height: usize,
    width: usize,
    edit_distance: usize,
}

impl Grid {
    pub(crate) fn new(pattern_len: usize, edit_distance: usize) -> Self {
        let grid = Grid {
            height: edit_distance + 1,
            width: pattern_len + 1,
            edit_distance,
        };
        assert!(
            grid.height >= 2 && grid.width >= edit_distance + 3,
            "grid {}x{} violates the minimum size for edit distance {}",
            grid.height,
            grid.width,
            edit_distance
        );
        grid
    }

    /// Number of rows (`edit_distance + 1`).
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns (`pattern_len + 1`).
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Maximum accepted edit distance.
    #[inline]
    pub fn edit_distance(&self) -> usize {
        self.edit_distance
    }

    /// Index of the top row.
    #[inline]
    pub fn top_row(&self) -> usize {
        self.height - 1
    }

    /// Index of the right-most column.
    #[inline]
    pub fn last_col(&self) -> usize {
        self.width - 1
    }

    /// Number of materialised nodes (every cell but the origin).
    #[inline]
    pub fn node_count(&self) -> usize {
        self.height * self.width - 1
    }

    /// Whether `coord` addresses a cell of this grid.
    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.height && coord.col < self.width
    }

    /// Id of the node at `coord`.
    ///
    /// # Panics
    ///
    /// Panics if `coord` lies outside the grid. Every coordinate produced while
    /// walking the grid is in bounds, so a panic here is a defect in the caller.
    #[inline]
    pub fn node_id(&self, coord: Coord) -> NodeId {
        assert!(
            self.contains(coord),
            "coordinate {} out of bounds for {}x{} grid",
            coord,
            self.height,
            self.width
        );
        NodeId(coord.row * self.width + coord.col)
    }

    /// Coordinate of the node with `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not address a cell of this grid.
    #[inline]
    pub fn coord_of(&self, id: NodeId) -> Coord {
        assert!(
            id.0 < self.height * self.width,
            "node id {} out of bounds for {}x{} grid",
            id,
            self.height,
            self.width
        );
        Coord::new(id.0 / self.width, id.0 % self.width)
    }

    /// Every node coordinate in row-major order, skipping the origin.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let width = self.width;
        (0..self.height)
            .flat_map(move |row| (0..width).map(move |col| Coord::new(row, col)))
            .filter(|coord| !coord.is_origin())
    }
}
