//! JSON rendering of the raw graph.

use std::io;

use serde::Serialize;
use tracing::debug;

use super::{BlockLookup, ComponentDef, EmitError, Emitter, NetworkInfo};
use crate::topology::{BlockKind, Coord, Edge, NodeId, Topology};

/// Renders a topology as a JSON document.
///
/// The document lists the network identity, the pattern, grid dimensions,
/// every node with its component, every edge and the lookup table.
#[derive(Debug, Clone, Copy)]
pub struct JsonEmitter {
    pretty: bool,
}

impl JsonEmitter {
    /// Compact output.
    pub fn new() -> Self {
        JsonEmitter { pretty: false }
    }

    /// Indented output.
    pub fn pretty() -> Self {
        JsonEmitter { pretty: true }
    }
}

impl Default for JsonEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter for JsonEmitter {
    fn format_name(&self) -> &'static str {
        "JSON"
    }

    fn emit<W: io::Write>(
        &self,
        info: &NetworkInfo,
        topology: &Topology,
        lookup: &BlockLookup,
        mut writer: W,
    ) -> Result<(), EmitError> {
        let document = GraphDocument::new(info, topology, lookup);
        let rendered = if self.pretty {
            serde_json::to_vec_pretty(&document)?
        } else {
            serde_json::to_vec(&document)?
        };
        debug!(
            nodes = document.nodes.len(),
            edges = document.edges.len(),
            bytes = rendered.len(),
            "json_rendered"
        );
        writer.write_all(&rendered)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

#[derive(Serialize)]
struct GraphDocument<'a> {
    name: &'a str,
    description: Option<&'a str>,
    pattern: String,
    edit_distance: usize,
    height: usize,
    width: usize,
    nodes: Vec<NodeEntry<'a>>,
    edges: Vec<Edge>,
    components: &'a BlockLookup,
}

#[derive(Serialize)]
struct NodeEntry<'a> {
    id: NodeId,
    #[serde(flatten)]
    coord: Coord,
    kind: BlockKind,
    component: &'a ComponentDef,
}

impl<'a> GraphDocument<'a> {
    fn new(info: &'a NetworkInfo, topology: &'a Topology, lookup: &'a BlockLookup) -> Self {
        let grid = topology.grid();
        GraphDocument {
            name: &info.name,
            description: info.description.as_deref(),
            pattern: topology.pattern().iter().collect(),
            edit_distance: grid.edit_distance(),
            height: grid.height(),
            width: grid.width(),
            nodes: topology
                .nodes()
                .iter()
                .map(|node| NodeEntry {
                    id: node.id,
                    coord: node.coord,
                    kind: node.kind,
                    component: lookup.get(node.kind),
                })
                .collect(),
            edges: topology.edges().collect(),
            components: lookup,
        }
    }
}
