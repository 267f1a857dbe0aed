//! XML map loader.
//!
//! # Document format
//!
//! ```xml
//! <map>
//!   <nodes>
//!     <node id="1" latitude="4963" longitude="611"/>
//!     …
//!   </nodes>
//!   <arcs>
//!     <arc from="1" to="2" length="130"/>
//!     …
//!   </arcs>
//! </map>
//! ```
//!
//! `latitude` becomes the node's `x` and `longitude` its `y`; both are plain
//! integer plane coordinates.  Arc lengths must be non-negative.
//!
//! # Failure model
//!
//! The document is parsed and its structure checked (root `<map>`, both
//! sections present exactly once, every attribute an integer) **before**
//! the graph is touched, so a structural failure leaves the graph unchanged.
//! A repeated `<nodes>` or `<arcs>` section is a [`GraphError::Xml`] rather
//! than being ignored after the first.  Once
//! applied, individual arcs can still be dropped: an arc naming an id not
//! declared in `<nodes>` is skipped and reported through
//! [`GraphObserver::on_arc_skipped`]; a second arc between the same pair is
//! rejected by [`Graph::add_edge`].  Neither aborts the load.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use quick_xml::events::Event;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use map_core::{NodeId, Point};

use crate::graph::Graph;
use crate::observer::GraphObserver;
use crate::{GraphError, GraphResult};

// ── XML records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct MapDocument {
    nodes: Option<NodeSection>,
    arcs:  Option<ArcSection>,
}

#[derive(Deserialize)]
struct NodeSection {
    #[serde(rename = "node", default)]
    entries: Vec<NodeRecord>,
}

#[derive(Deserialize)]
struct NodeRecord {
    #[serde(rename = "@id")]
    id:        i32,
    #[serde(rename = "@latitude")]
    latitude:  i32,
    #[serde(rename = "@longitude")]
    longitude: i32,
}

#[derive(Deserialize)]
struct ArcSection {
    #[serde(rename = "arc", default)]
    entries: Vec<ArcRecord>,
}

#[derive(Deserialize)]
struct ArcRecord {
    #[serde(rename = "@from")]
    from:   i32,
    #[serde(rename = "@to")]
    to:     i32,
    #[serde(rename = "@length")]
    length: u32,
}

// ── LoadReport ────────────────────────────────────────────────────────────────

/// Counts describing one successful load.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// `<node>` entries read (duplicates of an existing id included).
    pub nodes:         usize,
    /// Arcs that became new edges.
    pub arcs_added:    usize,
    /// Arcs rejected because their endpoint pair was already connected.
    pub arcs_rejected: usize,
    /// Arcs dropped because an endpoint id was never declared.
    pub arcs_skipped:  usize,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a map document from a file into `graph`.
///
/// # Errors
///
/// [`GraphError::Io`] if the file cannot be read, otherwise as
/// [`load_from_str`].
pub fn load_from_path<O: GraphObserver>(graph: &mut Graph<O>, path: &Path) -> GraphResult<LoadReport> {
    match File::open(path) {
        Ok(file) => load_from_reader(graph, file),
        Err(e) => finish(graph, Err(GraphError::Io(e))),
    }
}

/// Like [`load_from_path`] but accepts any `Read` source.
pub fn load_from_reader<O: GraphObserver, R: Read>(
    graph: &mut Graph<O>,
    mut reader: R,
) -> GraphResult<LoadReport> {
    let mut text = String::new();
    match reader.read_to_string(&mut text) {
        Ok(_) => load_from_str(graph, &text),
        Err(e) => finish(graph, Err(GraphError::Io(e))),
    }
}

/// Load a map document held in memory into `graph`.
///
/// Nodes and arcs are added in document order.
///
/// # Errors
///
/// - [`GraphError::Xml`] for malformed XML or non-integer attributes,
/// - [`GraphError::UnexpectedRoot`] if the root element is not `<map>`,
/// - [`GraphError::MissingSection`] if `<nodes>` or `<arcs>` is absent.
pub fn load_from_str<O: GraphObserver>(graph: &mut Graph<O>, text: &str) -> GraphResult<LoadReport> {
    let result = parse_document(text).map(|(nodes, arcs)| apply(graph, nodes, arcs));
    finish(graph, result)
}

impl<O: GraphObserver> Graph<O> {
    /// Load the map document at `path`, reporting only success or failure.
    /// Details go to the observer.
    pub fn load_from_description(&mut self, path: impl AsRef<Path>) -> bool {
        load_from_path(self, path.as_ref()).is_ok()
    }
}

// ── Internals ─────────────────────────────────────────────────────────────────

fn finish<O: GraphObserver>(graph: &mut Graph<O>, result: GraphResult<LoadReport>) -> GraphResult<LoadReport> {
    match &result {
        Ok(report) => graph.observer.on_load_finished(report),
        Err(e) => graph.observer.on_load_failed(e),
    }
    result
}

/// Name of the first element in `text`.
fn root_name(text: &str) -> GraphResult<String> {
    let mut reader = quick_xml::Reader::from_str(text);
    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) => {
                return Ok(String::from_utf8_lossy(e.name().as_ref()).into_owned());
            }
            Event::Eof => return Err(GraphError::Xml("document has no root element".into())),
            _ => {}
        }
    }
}

fn parse_document(text: &str) -> GraphResult<(Vec<NodeRecord>, Vec<ArcRecord>)> {
    let root = root_name(text)?;
    if root != "map" {
        return Err(GraphError::UnexpectedRoot(root));
    }

    let doc: MapDocument = quick_xml::de::from_str(text)?;
    let nodes = doc.nodes.ok_or(GraphError::MissingSection("nodes"))?;
    let arcs = doc.arcs.ok_or(GraphError::MissingSection("arcs"))?;
    Ok((nodes.entries, arcs.entries))
}

fn apply<O: GraphObserver>(
    graph: &mut Graph<O>,
    nodes: Vec<NodeRecord>,
    arcs: Vec<ArcRecord>,
) -> LoadReport {
    let mut report = LoadReport { nodes: nodes.len(), ..LoadReport::default() };

    // Arcs resolve against the ids declared in this document only.
    let mut declared: FxHashMap<i32, NodeId> =
        FxHashMap::with_capacity_and_hasher(nodes.len(), Default::default());

    for n in nodes {
        let handle = graph.add_node(n.id, Point::new(n.latitude, n.longitude));
        declared.insert(n.id, handle);
    }

    for a in arcs {
        match (declared.get(&a.from), declared.get(&a.to)) {
            (Some(&from), Some(&to)) => {
                if graph.add_edge(from, to, a.length).is_some() {
                    report.arcs_added += 1;
                } else {
                    report.arcs_rejected += 1;
                }
            }
            _ => {
                graph.observer.on_arc_skipped(a.from, a.to);
                report.arcs_skipped += 1;
            }
        }
    }

    report
}
