//! # levenshtein-anml
//!
//! Block topology of bounded edit-distance Levenshtein automata, rendered as
//! ANML automata networks.
//!
//! For a search string of length `n` and a maximum edit distance `k`, the
//! automaton is a `(k + 1) × (n + 1)` grid of building blocks: rows count
//! accumulated errors, columns count consumed pattern symbols. Blocks are
//! wired by match, insertion, replacement and deletion-run transitions.
//!
//! The crate splits the work in two:
//!
//! - [`topology`]: the pure graph construction (block kinds and edges)
//! - [`emit`]: renderers turning the graph into a concrete description
//!
//! ## Example
//!
//! ```rust
//! use levenshtein_anml::prelude::*;
//!
//! let topology = Topology::build("levenshtein", 2)?;
//! assert_eq!(topology.grid().height(), 3);
//! assert_eq!(topology.grid().width(), 12);
//!
//! let anml = AnmlEmitter::new().render(
//!     &NetworkInfo::new("lev_2"),
//!     &topology,
//!     &BlockLookup::default(),
//! )?;
//! assert!(anml.contains("Starting_Match_Block.anml"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod emit;
pub mod topology;

/// Random test string generation
#[cfg(feature = "rand")]
pub mod generate;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::emit::{
        AnmlEmitter, BlockLookup, ComponentDef, EmitError, Emitter, NetworkInfo,
    };
    pub use crate::topology::{
        BlockKind, BuilderError, Coord, Edge, EdgeFamily, Grid, InPort, InvalidParameterError,
        Node, NodeId, OutCapabilities, OutPort, Topology, TopologyBuilder,
    };

    #[cfg(feature = "serialization")]
    pub use crate::emit::JsonEmitter;

    #[cfg(feature = "rand")]
    pub use crate::generate::{RandomStringGenerator, SymbolSet};
}
