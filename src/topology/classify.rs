//! Block classification.
//!
//! Each grid cell is realised by one kind of building block. Which kind is a
//! pure function of the cell's position; the rules are evaluated in a fixed
//! order and the first one that matches wins.

use std::fmt;

use super::grid::{Coord, Grid};

/// Kind of building block realising a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub enum BlockKind {
    /// The unique entry point on the error-0 row, `(0, 1)`.
    StartingMatch,
    /// Interior node of the error-0 row.
    SimpleMatch,
    /// Error-0 node within `edit_distance` of the end of the pattern.
    ReportingMatch,
    /// The node at `(1, 0)`: one error, nothing matched yet.
    SimpleStartingError,
    /// Column-0 node above row 1. A bare element with no input stage.
    ChainedStartingError,
    /// Diagonal node where `col == row`.
    StartingError,
    /// Diagonal node where `col == row + 1`.
    LateStartMatch,
    /// Node close enough to the end of the pattern to accept with `row` errors.
    ErrorReport,
    /// Any remaining interior node.
    SimpleError,
}

impl BlockKind {
    /// Every kind, in declaration order.
    pub const ALL: [BlockKind; 9] = [
        BlockKind::StartingMatch,
        BlockKind::SimpleMatch,
        BlockKind::ReportingMatch,
        BlockKind::SimpleStartingError,
        BlockKind::ChainedStartingError,
        BlockKind::StartingError,
        BlockKind::LateStartMatch,
        BlockKind::ErrorReport,
        BlockKind::SimpleError,
    ];

    /// Short code used in listings and debug output.
    pub fn abbreviation(self) -> &'static str {
        match self {
            BlockKind::StartingMatch => "StMB",
            BlockKind::SimpleMatch => "SiMB",
            BlockKind::ReportingMatch => "RMB",
            BlockKind::SimpleStartingError => "SSEB",
            BlockKind::ChainedStartingError => "CSTE",
            BlockKind::StartingError => "SEB",
            BlockKind::LateStartMatch => "LSMB",
            BlockKind::ErrorReport => "SERB",
            BlockKind::SimpleError => "SiEB",
        }
    }

    /// Whether the block is a raw element rather than a composite with ports.
    #[inline]
    pub fn is_raw_element(self) -> bool {
        matches!(self, BlockKind::ChainedStartingError)
    }

    /// Whether the block accepts (reports a match).
    #[inline]
    pub fn is_reporting(self) -> bool {
        matches!(self, BlockKind::ReportingMatch | BlockKind::ErrorReport)
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BlockKind::StartingMatch => "starting match",
            BlockKind::SimpleMatch => "simple match",
            BlockKind::ReportingMatch => "reporting match",
            BlockKind::SimpleStartingError => "simple starting error",
            BlockKind::ChainedStartingError => "chained starting error",
            BlockKind::StartingError => "starting error",
            BlockKind::LateStartMatch => "late start match",
            BlockKind::ErrorReport => "error report",
            BlockKind::SimpleError => "simple error",
        };
        f.write_str(name)
    }
}

/// Classify the node at `coord`.
///
/// Rules are tried in order and the first match wins: the first column before
/// the diagonals, the diagonals before the reporting band.
///
/// # Panics
///
/// Panics if `coord` is the origin or lies outside `grid`.
pub fn classify(grid: &Grid, coord: Coord) -> BlockKind {
    assert!(!coord.is_origin(), "the origin cell has no block");
    assert!(
        grid.contains(coord),
        "coordinate {} out of bounds for {}x{} grid",
        coord,
        grid.height(),
        grid.width()
    );

    let Coord { row, col } = coord;
    let last_col = grid.last_col();
    let edit_distance = grid.edit_distance();

    if row == 0 {
        return if col == 1 {
            BlockKind::StartingMatch
        } else if col >= last_col - edit_distance {
            BlockKind::ReportingMatch
        } else {
            BlockKind::SimpleMatch
        };
    }

    if row == 1 && col == 0 {
        BlockKind::SimpleStartingError
    } else if col == 0 {
        BlockKind::ChainedStartingError
    } else if col == row {
        BlockKind::StartingError
    } else if col == row + 1 {
        BlockKind::LateStartMatch
    } else if col >= last_col - edit_distance + row {
        BlockKind::ErrorReport
    } else {
        BlockKind::SimpleError
    }
}
