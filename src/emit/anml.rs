//! ANML rendering.
//!
//! Each node becomes either a `macro-reference` (composite blocks with
//! `match_in`/`error_in`/`match_out`/`error_out` ports) or a
//! `state-transition-element` (raw elements, addressed without a port).
//! Macros on column `c >= 1` receive the pattern symbol `c - 1` through the
//! `%char` parameter.
//!
//! Connections:
//!
//! - macro source: one `activate-from-macro` per output port of the source
//! - element source: one `activate-on-match` child per edge

use std::io;

use askama::Template;
use tracing::debug;

use super::{BlockLookup, ComponentDef, EmitError, Emitter, NetworkInfo};
use crate::topology::{NodeId, Topology};

const FORMAT: &str = "ANML";

/// Renders a topology as an ANML automata network.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnmlEmitter;

impl AnmlEmitter {
    /// Create an ANML emitter.
    pub fn new() -> Self {
        AnmlEmitter
    }

    /// Render into a `String`.
    pub fn render(
        &self,
        info: &NetworkInfo,
        topology: &Topology,
        lookup: &BlockLookup,
    ) -> Result<String, EmitError> {
        let document = AnmlDocument::build(info, topology, lookup)?;
        debug!(
            macros = document.macros.len(),
            elements = document.elements.len(),
            connections = document.connections.len(),
            "anml_rendered"
        );
        Ok(document.render()?)
    }
}

impl Emitter for AnmlEmitter {
    fn format_name(&self) -> &'static str {
        FORMAT
    }

    fn emit<W: io::Write>(
        &self,
        info: &NetworkInfo,
        topology: &Topology,
        lookup: &BlockLookup,
        mut writer: W,
    ) -> Result<(), EmitError> {
        let rendered = self.render(info, topology, lookup)?;
        writer.write_all(rendered.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

#[derive(Template)]
#[template(path = "toplevel.anml", escape = "html")]
struct AnmlDocument {
    name: String,
    description: String,
    macros: Vec<MacroView>,
    elements: Vec<ElementView>,
    connections: Vec<ConnectionView>,
}

struct MacroView {
    id: String,
    path: String,
    symbol: String,
}

struct ElementView {
    id: String,
    symbol_set: String,
    activations: Vec<String>,
}

struct ConnectionView {
    source: String,
    target: String,
}

impl AnmlDocument {
    fn build(
        info: &NetworkInfo,
        topology: &Topology,
        lookup: &BlockLookup,
    ) -> Result<Self, EmitError> {
        let grid = topology.grid();
        let mut macros = Vec::new();
        let mut elements: Vec<ElementView> = Vec::new();
        // element_slot[id] is the index into `elements` for raw elements
        let mut element_slot: Vec<Option<usize>> = vec![None; grid.height() * grid.width()];

        for node in topology.nodes() {
            match lookup.get(node.kind) {
                ComponentDef::Macro { path } => {
                    let symbol = match topology.symbol_at(node.coord) {
                        Some(symbol) => symbol_class(symbol, node.coord.col)?,
                        None => String::new(),
                    };
                    macros.push(MacroView {
                        id: block_id(node.id),
                        path: xml_text(path),
                        symbol,
                    });
                }
                ComponentDef::Element { symbol_set } => {
                    element_slot[node.id.get()] = Some(elements.len());
                    elements.push(ElementView {
                        id: block_id(node.id),
                        symbol_set: xml_text(symbol_set),
                        activations: Vec::new(),
                    });
                }
            }
        }

        let mut connections = Vec::new();
        for edge in topology.edges() {
            let target = match element_slot[edge.target.get()] {
                Some(_) => block_id(edge.target),
                None => format!("{}:{}", block_id(edge.target), edge.in_port),
            };
            match element_slot[edge.source.get()] {
                Some(index) => elements[index].activations.push(target),
                None => {
                    for port in edge.out.ports() {
                        connections.push(ConnectionView {
                            source: format!("{}:{}", block_id(edge.source), port),
                            target: target.clone(),
                        });
                    }
                }
            }
        }

        Ok(AnmlDocument {
            name: xml_text(&info.name),
            description: xml_text(info.description.as_deref().unwrap_or_default()),
            macros,
            elements,
            connections,
        })
    }
}

fn block_id(id: NodeId) -> String {
    format!("b{id}")
}

/// Single-symbol class, written as a hex escape so no symbol needs quoting.
///
/// Elements match input bytes, and only ASCII symbols are one byte in UTF-8.
fn symbol_class(symbol: char, position: usize) -> Result<String, EmitError> {
    if !symbol.is_ascii() {
        return Err(EmitError::UnsupportedSymbol {
            symbol,
            position,
            format: FORMAT,
        });
    }
    Ok(format!("[\\x{:02X}]", u32::from(symbol)))
}

/// Drop characters XML 1.0 cannot carry, even as references.
///
/// Markup characters are left to the template's escaper.
fn xml_text(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control() || matches!(c, '\t' | '\n' | '\r'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::BlockKind;

    fn render(pattern: &str, distance: usize) -> String {
        let topology = Topology::build(pattern, distance).unwrap();
        AnmlEmitter::new()
            .render(&NetworkInfo::new("net"), &topology, &BlockLookup::default())
            .unwrap()
    }

    #[test]
    fn test_symbol_class() {
        assert_eq!(symbol_class('a', 1).unwrap(), "[\\x61]");
        assert_eq!(symbol_class('~', 1).unwrap(), "[\\x7E]");
        assert!(matches!(
            symbol_class('ÿ', 2),
            Err(EmitError::UnsupportedSymbol { symbol: 'ÿ', position: 2, .. })
        ));
        assert!(matches!(
            symbol_class('€', 3),
            Err(EmitError::UnsupportedSymbol { symbol: '€', position: 3, .. })
        ));
    }

    #[test]
    fn test_xml_text_drops_disallowed_controls() {
        assert_eq!(xml_text("a\u{1}b\u{1F}c"), "abc");
        assert_eq!(xml_text("a\tb\nc\r"), "a\tb\nc\r");
        assert_eq!(xml_text("a<b & \"c\""), "a<b & \"c\"");
    }

    #[test]
    fn test_non_ascii_pattern_rejected() {
        let topology = Topology::build("äbc", 1).unwrap();
        let result = AnmlEmitter::new().render(
            &NetworkInfo::new("net"),
            &topology,
            &BlockLookup::default(),
        );
        assert!(matches!(
            result,
            Err(EmitError::UnsupportedSymbol { symbol: 'ä', position: 1, .. })
        ));
    }

    #[test]
    fn test_macro_per_node_without_elements() {
        let anml = render("abcd", 1);
        assert_eq!(anml.matches("<macro-reference").count(), 9);
        assert_eq!(anml.matches("<state-transition-element").count(), 0);
        assert!(anml.contains(r#"<macro-reference id="b1" use="macros/Starting_Match_Block.anml">"#));
        assert!(anml.contains(r#"replace-with="[\x61]""#));
    }

    #[test]
    fn test_connections_fan_out_per_port() {
        let anml = render("abcd", 1);
        // (0,1) -> (1,1) insertion: row 0 only has match_out
        assert!(anml.contains(r#"<activate-from-macro source="b1:match_out" target="b6:error_in"/>"#));
        // (1,0) only has error_out
        assert!(anml.contains(r#"<activate-from-macro source="b5:error_out" target="b6:match_in"/>"#));
        assert!(!anml.contains(r#"source="b5:match_out""#));
        // (1,1) -> (1,2) match, both ports
        assert!(anml.contains(r#"<activate-from-macro source="b6:match_out" target="b7:match_in"/>"#));
        assert!(anml.contains(r#"<activate-from-macro source="b6:error_out" target="b7:match_in"/>"#));
    }

    #[test]
    fn test_chained_elements() {
        // "abcdef", distance 3: (2,0) and (3,0) are raw elements
        let anml = render("abcdef", 3);
        assert_eq!(anml.matches("<state-transition-element").count(), 2);
        assert!(anml.contains(r#"<state-transition-element id="b14" symbol-set="*">"#));
        // (1,0) -> (2,0) insertion targets the element without a port
        assert!(anml.contains(r#"<activate-from-macro source="b7:error_out" target="b14"/>"#));
        // (2,0) -> (3,0) insertion from element to element
        assert!(anml.contains(r#"<activate-on-match element="b21"/>"#));
        // (2,0) -> (2,1) match
        assert!(anml.contains(r#"<activate-on-match element="b15:match_in"/>"#));
    }

    #[test]
    fn test_header_escaping() {
        let topology = Topology::build("abcd", 1).unwrap();
        let info = NetworkInfo::new("a&b").with_description("<x> a\u{1}b");
        let anml = AnmlEmitter::new()
            .render(&info, &topology, &BlockLookup::default())
            .unwrap();
        assert!(anml.contains(r#"name="a&amp;b""#));
        assert!(anml.contains("<description>&lt;x&gt; ab</description>"));
        assert!(!anml.contains('\u{1}'));
        assert!(!anml.contains("&#x1;"));
    }

    #[test]
    fn test_path_quotes_escaped() {
        let topology = Topology::build("abcd", 1).unwrap();
        let lookup = BlockLookup::standard(r#"my "blocks""#);
        let anml = AnmlEmitter::new()
            .render(&NetworkInfo::new("net"), &topology, &lookup)
            .unwrap();
        assert!(!anml.contains(r#"use="my "blocks""#));
        let quoted = ["&#34;", "&quot;"]
            .iter()
            .any(|q| anml.contains(&format!("{q}blocks{q}/Starting_Match_Block.anml")));
        assert!(quoted);
    }

    #[test]
    fn test_unsupported_symbol() {
        let topology = Topology::build("ab€d", 1).unwrap();
        let result = AnmlEmitter::new().render(
            &NetworkInfo::new("net"),
            &topology,
            &BlockLookup::default(),
        );
        assert!(matches!(result, Err(EmitError::UnsupportedSymbol { position: 3, .. })));
    }

    #[test]
    fn test_emit_writes_nothing_on_failure() {
        let topology = Topology::build("ab€d", 1).unwrap();
        let mut out = Vec::new();
        let result = AnmlEmitter::new().emit(
            &NetworkInfo::new("net"),
            &topology,
            &BlockLookup::default(),
            &mut out,
        );
        assert!(result.is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_custom_lookup_as_element() {
        let topology = Topology::build("abcd", 1).unwrap();
        let lookup = BlockLookup::default()
            .with(BlockKind::SimpleStartingError, ComponentDef::element("[\\x00-\\xFF]"));
        let anml = AnmlEmitter::new()
            .render(&NetworkInfo::new("net"), &topology, &lookup)
            .unwrap();
        assert!(anml.contains(r#"<state-transition-element id="b5" symbol-set="[\x00-\xFF]">"#));
        assert!(anml.contains(r#"<activate-on-match element="b6:match_in"/>"#));
    }
}
