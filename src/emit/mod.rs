//! Rendering a [`Topology`] into a concrete automaton description.
//!
//! The topology only knows which [`BlockKind`] sits at each cell. What a kind
//! turns into is decided by a caller-supplied [`BlockLookup`], and how the
//! result is written out by an [`Emitter`]:
//!
//! - [`AnmlEmitter`]: ANML automata network, one macro reference per block
//! - [`JsonEmitter`]: the raw graph as JSON (feature `serialization`)
//!
//! # Example
//!
//! ```rust
//! use levenshtein_anml::prelude::*;
//!
//! let topology = Topology::build("kitten", 2)?;
//! let info = NetworkInfo::new("kitten_2");
//! let lookup = BlockLookup::standard("macros");
//!
//! let mut out = Vec::new();
//! AnmlEmitter::new().emit(&info, &topology, &lookup, &mut out)?;
//! assert!(String::from_utf8(out)?.contains("automata-network"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod anml;
#[cfg(feature = "serialization")]
pub mod json;

use std::collections::BTreeMap;
use std::io;

use thiserror::Error;

use crate::topology::{BlockKind, Topology};

pub use anml::AnmlEmitter;
#[cfg(feature = "serialization")]
pub use json::JsonEmitter;

/// Identity of the emitted network.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize))]
pub struct NetworkInfo {
    /// Network name and id.
    pub name: String,
    /// Free-text description.
    pub description: Option<String>,
}

impl NetworkInfo {
    /// Network named `name`, without a description.
    pub fn new(name: impl Into<String>) -> Self {
        NetworkInfo {
            name: name.into(),
            description: None,
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// External definition realising one kind of block.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize))]
#[cfg_attr(feature = "serialization", serde(tag = "type", rename_all = "snake_case"))]
pub enum ComponentDef {
    /// A single state-transition element without ports.
    Element {
        /// Symbol set the element matches.
        symbol_set: String,
    },
    /// A sub-circuit with `match_in`/`error_in` inputs and
    /// `match_out`/`error_out` outputs.
    Macro {
        /// Location of the macro definition.
        path: String,
    },
}

impl ComponentDef {
    /// Raw element matching `symbol_set`.
    pub fn element(symbol_set: impl Into<String>) -> Self {
        ComponentDef::Element {
            symbol_set: symbol_set.into(),
        }
    }

    /// Macro defined at `path`.
    pub fn macro_at(path: impl Into<String>) -> Self {
        ComponentDef::Macro { path: path.into() }
    }
}

/// Mapping from every [`BlockKind`] to its [`ComponentDef`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize))]
#[cfg_attr(feature = "serialization", serde(transparent))]
pub struct BlockLookup {
    table: BTreeMap<BlockKind, ComponentDef>,
}

impl BlockLookup {
    /// Directory searched for macro definitions when none is given.
    pub const DEFAULT_MACRO_DIR: &'static str = "macros";

    /// The standard table: chained starting errors are raw `*` elements and
    /// every other kind is a macro file under `macro_dir`.
    pub fn standard(macro_dir: &str) -> Self {
        let dir = macro_dir.trim_end_matches('/');
        let table = BlockKind::ALL
            .into_iter()
            .map(|kind| {
                let def = match macro_file(kind) {
                    Some(file) if dir.is_empty() => ComponentDef::macro_at(file),
                    Some(file) => ComponentDef::macro_at(format!("{dir}/{file}")),
                    None => ComponentDef::element("*"),
                };
                (kind, def)
            })
            .collect();
        BlockLookup { table }
    }

    /// Replace the definition of `kind`.
    pub fn with(mut self, kind: BlockKind, def: ComponentDef) -> Self {
        self.table.insert(kind, def);
        self
    }

    /// Definition of `kind`.
    pub fn get(&self, kind: BlockKind) -> &ComponentDef {
        // the table is built from BlockKind::ALL and entries are only replaced
        &self.table[&kind]
    }

    /// Entries in `BlockKind` order.
    pub fn iter(&self) -> impl Iterator<Item = (BlockKind, &ComponentDef)> {
        self.table.iter().map(|(kind, def)| (*kind, def))
    }
}

impl Default for BlockLookup {
    fn default() -> Self {
        Self::standard(Self::DEFAULT_MACRO_DIR)
    }
}

fn macro_file(kind: BlockKind) -> Option<&'static str> {
    match kind {
        BlockKind::ChainedStartingError => None,
        BlockKind::ErrorReport => Some("Simple_Error_Report_Block.anml"),
        BlockKind::ReportingMatch => Some("Reporting_Match_Block.anml"),
        BlockKind::StartingMatch => Some("Starting_Match_Block.anml"),
        BlockKind::SimpleStartingError => Some("Simple_Starting_Error_Block.anml"),
        BlockKind::SimpleMatch => Some("Simple_Match_Block.anml"),
        BlockKind::SimpleError => Some("Simple_Error_Block.anml"),
        BlockKind::LateStartMatch => Some("Late_Start_Match_Block.anml"),
        BlockKind::StartingError => Some("Starting_Error_Block.anml"),
    }
}

/// Errors raised while rendering.
#[derive(Debug, Error)]
pub enum EmitError {
    /// The template engine failed.
    #[error("template rendering failed: {0}")]
    Template(#[from] askama::Error),

    /// JSON serialization failed.
    #[cfg(feature = "serialization")]
    #[error("json serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing the output failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    /// The output format cannot express a pattern symbol.
    #[error("symbol {symbol:?} at pattern position {position} cannot be expressed in {format}")]
    UnsupportedSymbol {
        /// The offending symbol.
        symbol: char,
        /// 1-based position in the pattern.
        position: usize,
        /// Output format name.
        format: &'static str,
    },
}

/// A renderer consuming the topology.
pub trait Emitter {
    /// Short name of the output format.
    fn format_name(&self) -> &'static str;

    /// Render `topology` into `writer`.
    ///
    /// Nothing is written unless rendering succeeds.
    fn emit<W: io::Write>(
        &self,
        info: &NetworkInfo,
        topology: &Topology,
        lookup: &BlockLookup,
        writer: W,
    ) -> Result<(), EmitError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_lookup_is_complete() {
        let lookup = BlockLookup::standard("macros");
        assert_eq!(lookup.iter().count(), BlockKind::ALL.len());
        assert_eq!(
            lookup.get(BlockKind::ChainedStartingError),
            &ComponentDef::element("*")
        );
        assert_eq!(
            lookup.get(BlockKind::StartingMatch),
            &ComponentDef::macro_at("macros/Starting_Match_Block.anml")
        );
        assert_eq!(
            lookup.get(BlockKind::ErrorReport),
            &ComponentDef::macro_at("macros/Simple_Error_Report_Block.anml")
        );
    }

    #[test]
    fn test_macro_dir_normalisation() {
        let trailing = BlockLookup::standard("blocks/");
        assert_eq!(
            trailing.get(BlockKind::SimpleError),
            &ComponentDef::macro_at("blocks/Simple_Error_Block.anml")
        );
        let bare = BlockLookup::standard("");
        assert_eq!(
            bare.get(BlockKind::SimpleError),
            &ComponentDef::macro_at("Simple_Error_Block.anml")
        );
    }

    #[test]
    fn test_override_entry() {
        let lookup = BlockLookup::default()
            .with(BlockKind::SimpleMatch, ComponentDef::macro_at("custom.anml"));
        assert_eq!(
            lookup.get(BlockKind::SimpleMatch),
            &ComponentDef::macro_at("custom.anml")
        );
        assert_eq!(
            lookup.get(BlockKind::SimpleError),
            &ComponentDef::macro_at("macros/Simple_Error_Block.anml")
        );
    }

    #[test]
    fn test_network_info() {
        let info = NetworkInfo::new("lev").with_description("demo");
        assert_eq!(info.name, "lev");
        assert_eq!(info.description.as_deref(), Some("demo"));
    }
}
