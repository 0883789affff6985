//! Edge generation.
//!
//! Every node connects to its successors through five families of edges:
//!
//! | Family              | Target                     | Input port | Guard                        |
//! |---------------------|----------------------------|------------|------------------------------|
//! | insertion           | `(row + 1, col)`           | `error_in` | not the top row              |
//! | match               | `(row, col + 1)`           | `match_in` | not the last column          |
//! | replacement         | `(row + 1, col + 1)`       | `error_in` | neither top row nor last col |
//! | skip then match     | `(row + k + 1, col + k + 2)` | `match_in` | `k < D1`                   |
//! | skip then error     | `(row + k + 2, col + k + 2)` | `error_in` | `k < D2`                   |
//!
//! with `D1 = min(top - row, last - col - 1)` and
//! `D2 = min(top - row - 1, last - col - 1)`, clamped at zero.
//!
//! A skip edge collapses a run of `k + 1` deletions and the transition that
//! follows it into a single connection.

use std::fmt;

use super::grid::{Coord, Grid, NodeId};

/// Output port of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialization", serde(rename_all = "snake_case"))]
pub enum OutPort {
    /// Fires after the block consumed a matching symbol.
    MatchOut,
    /// Fires after the block consumed a symbol at the cost of an error.
    ErrorOut,
}

impl OutPort {
    /// Port name as it appears in block definitions.
    pub fn as_str(self) -> &'static str {
        match self {
            OutPort::MatchOut => "match_out",
            OutPort::ErrorOut => "error_out",
        }
    }
}

impl fmt::Display for OutPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input port of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialization", serde(rename_all = "snake_case"))]
pub enum InPort {
    /// The transition consumes the next pattern symbol exactly.
    MatchIn,
    /// The transition costs one error.
    ErrorIn,
}

impl InPort {
    /// Port name as it appears in block definitions.
    pub fn as_str(self) -> &'static str {
        match self {
            InPort::MatchIn => "match_in",
            InPort::ErrorIn => "error_in",
        }
    }
}

impl fmt::Display for InPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of output ports available at a source block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutCapabilities {
    match_out: bool,
    error_out: bool,
}

impl OutCapabilities {
    /// `{match_out}`
    pub const MATCH_ONLY: OutCapabilities = OutCapabilities {
        match_out: true,
        error_out: false,
    };

    /// `{error_out}`
    pub const ERROR_ONLY: OutCapabilities = OutCapabilities {
        match_out: false,
        error_out: true,
    };

    /// `{match_out, error_out}`
    pub const BOTH: OutCapabilities = OutCapabilities {
        match_out: true,
        error_out: true,
    };

    /// Ports of the block at `coord`.
    ///
    /// The error-0 row has no error budget to emit on, and `(1, 0)` has not
    /// matched a symbol yet.
    pub fn at(coord: Coord) -> Self {
        match (coord.row, coord.col) {
            (0, _) => Self::MATCH_ONLY,
            (1, 0) => Self::ERROR_ONLY,
            _ => Self::BOTH,
        }
    }

    /// Whether `port` is in the set.
    #[inline]
    pub fn contains(self, port: OutPort) -> bool {
        match port {
            OutPort::MatchOut => self.match_out,
            OutPort::ErrorOut => self.error_out,
        }
    }

    /// Ports in the set, `match_out` first.
    pub fn ports(self) -> impl Iterator<Item = OutPort> {
        [OutPort::MatchOut, OutPort::ErrorOut]
            .into_iter()
            .filter(move |&port| self.contains(port))
    }
}

#[cfg(feature = "serialization")]
impl serde::Serialize for OutCapabilities {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.ports())
    }
}

/// Which edit operation an edge models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize))]
#[cfg_attr(feature = "serialization", serde(tag = "kind", rename_all = "snake_case"))]
pub enum EdgeFamily {
    /// Extra symbol in the input: one error, no pattern progress.
    Insertion,
    /// Exact match of the next pattern symbol.
    Match,
    /// Substituted symbol: one error, one pattern symbol.
    Replacement,
    /// `deleted` pattern symbols skipped, then a match.
    SkipThenMatch {
        /// Number of deleted pattern symbols.
        deleted: usize,
    },
    /// `deleted` pattern symbols skipped, then a substitution.
    SkipThenError {
        /// Number of deleted pattern symbols.
        deleted: usize,
    },
}

impl EdgeFamily {
    /// Input port the transition lands on.
    pub fn in_port(self) -> InPort {
        match self {
            EdgeFamily::Match | EdgeFamily::SkipThenMatch { .. } => InPort::MatchIn,
            EdgeFamily::Insertion
            | EdgeFamily::Replacement
            | EdgeFamily::SkipThenError { .. } => InPort::ErrorIn,
        }
    }

    /// Row and column advance of an edge of this family.
    pub fn offset(self) -> (usize, usize) {
        match self {
            EdgeFamily::Insertion => (1, 0),
            EdgeFamily::Match => (0, 1),
            EdgeFamily::Replacement => (1, 1),
            EdgeFamily::SkipThenMatch { deleted } => (deleted, deleted + 1),
            EdgeFamily::SkipThenError { deleted } => (deleted + 1, deleted + 1),
        }
    }
}

/// A directed connection between two blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize))]
pub struct Edge {
    /// Source node.
    pub source: NodeId,
    /// Target node.
    pub target: NodeId,
    /// Output ports of the source, all of which drive this edge.
    pub out: OutCapabilities,
    /// Input port of the target.
    pub in_port: InPort,
    /// Edit operation modelled by the edge.
    pub family: EdgeFamily,
}

/// Number of skip-then-match edges leaving `coord`.
#[inline]
pub fn skip_then_match_count(grid: &Grid, coord: Coord) -> usize {
    let rows_left = grid.top_row() - coord.row;
    let cols_left = (grid.last_col() - coord.col).saturating_sub(1);
    rows_left.min(cols_left)
}

/// Number of skip-then-error edges leaving `coord`.
#[inline]
pub fn skip_then_error_count(grid: &Grid, coord: Coord) -> usize {
    let rows_left = (grid.top_row() - coord.row).saturating_sub(1);
    let cols_left = (grid.last_col() - coord.col).saturating_sub(1);
    rows_left.min(cols_left)
}

/// Stream the edges leaving the node at `coord`.
///
/// Families are produced in the order insertion, match, replacement, skip
/// then match, skip then error; skip edges by increasing run length.
///
/// # Panics
///
/// Panics if `coord` is the origin or lies outside `grid`.
pub fn edges_from(grid: Grid, coord: Coord) -> impl Iterator<Item = Edge> {
    assert!(!coord.is_origin(), "the origin cell has no edges");
    let source = grid.node_id(coord);
    let out = OutCapabilities::at(coord);

    let below_top = coord.row < grid.top_row();
    let before_last = coord.col < grid.last_col();

    let insertion = below_top.then_some(EdgeFamily::Insertion);
    let matched = before_last.then_some(EdgeFamily::Match);
    let replacement = (below_top && before_last).then_some(EdgeFamily::Replacement);
    let skip_match =
        (1..=skip_then_match_count(&grid, coord)).map(|deleted| EdgeFamily::SkipThenMatch { deleted });
    let skip_error =
        (1..=skip_then_error_count(&grid, coord)).map(|deleted| EdgeFamily::SkipThenError { deleted });

    insertion
        .into_iter()
        .chain(matched)
        .chain(replacement)
        .chain(skip_match)
        .chain(skip_error)
        .map(move |family| {
            let (rows, cols) = family.offset();
            let target = grid.node_id(Coord::new(coord.row + rows, coord.col + cols));
            Edge {
                source,
                target,
                out,
                in_port: family.in_port(),
                family,
            }
        })
}
