//! Diagnostic channel for graph mutations and loading.
//!
//! A [`Graph`](crate::Graph) owns one observer and calls it whenever
//! something noteworthy happens: a node or edge is added, an insertion is
//! rejected, an arc in a map document is skipped, the layout changes.  None
//! of these calls affect graph semantics.
//!
//! All methods have default no-op implementations so implementors only need
//! to override what they care about.
//!
//! # Example: counting rejected edges
//!
//! ```rust,ignore
//! #[derive(Default)]
//! struct RejectCounter(usize);
//!
//! impl GraphObserver for RejectCounter {
//!     fn on_edge_rejected(&mut self, _from: NodeId, _to: NodeId, _why: EdgeRejection) {
//!         self.0 += 1;
//!     }
//! }
//!
//! let mut graph = Graph::with_observer(RejectCounter::default());
//! ```

use map_core::{EdgeId, NodeId, Point};

use crate::GraphError;
use crate::loader::LoadReport;

/// Why [`Graph::add_edge`](crate::Graph::add_edge) refused an edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EdgeRejection {
    /// One of the endpoint handles does not belong to the graph.
    MissingEndpoint,
    /// An edge already connects the unordered pair.
    Duplicate(EdgeId),
}

/// Callbacks invoked by [`Graph`](crate::Graph) and the loader.
pub trait GraphObserver {
    /// A new node was stored.
    fn on_node_added(&mut self, _node: NodeId, _id: i32, _pos: Point) {}

    /// `add_node` was called with an id that is already present.
    fn on_duplicate_node(&mut self, _id: i32, _existing: NodeId) {}

    /// A new edge was stored.  `from_id` / `to_id` are the caller ids of the
    /// endpoints.
    fn on_edge_added(&mut self, _edge: EdgeId, _from_id: i32, _to_id: i32, _length: u32) {}

    /// `add_edge` was a no-op.
    fn on_edge_rejected(&mut self, _from: NodeId, _to: NodeId, _reason: EdgeRejection) {}

    /// The loader dropped an arc whose endpoint ids name no declared node.
    fn on_arc_skipped(&mut self, _from_id: i32, _to_id: i32) {}

    /// `scale` repositioned every node using `factor`.
    fn on_scaled(&mut self, _factor: f64) {}

    /// `rotate_90_clockwise` turned every node about `center`.
    fn on_rotated(&mut self, _center: Point) {}

    /// A map document was fully applied.
    fn on_load_finished(&mut self, _report: &LoadReport) {}

    /// A map document was rejected.
    fn on_load_failed(&mut self, _error: &GraphError) {}
}

impl<O: GraphObserver + ?Sized> GraphObserver for &mut O {
    fn on_node_added(&mut self, node: NodeId, id: i32, pos: Point) {
        (**self).on_node_added(node, id, pos);
    }
    fn on_duplicate_node(&mut self, id: i32, existing: NodeId) {
        (**self).on_duplicate_node(id, existing);
    }
    fn on_edge_added(&mut self, edge: EdgeId, from_id: i32, to_id: i32, length: u32) {
        (**self).on_edge_added(edge, from_id, to_id, length);
    }
    fn on_edge_rejected(&mut self, from: NodeId, to: NodeId, reason: EdgeRejection) {
        (**self).on_edge_rejected(from, to, reason);
    }
    fn on_arc_skipped(&mut self, from_id: i32, to_id: i32) {
        (**self).on_arc_skipped(from_id, to_id);
    }
    fn on_scaled(&mut self, factor: f64) {
        (**self).on_scaled(factor);
    }
    fn on_rotated(&mut self, center: Point) {
        (**self).on_rotated(center);
    }
    fn on_load_finished(&mut self, report: &LoadReport) {
        (**self).on_load_finished(report);
    }
    fn on_load_failed(&mut self, error: &GraphError) {
        (**self).on_load_failed(error);
    }
}

/// A [`GraphObserver`] that does nothing.  The default for [`Graph`](crate::Graph).
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopObserver;

impl GraphObserver for NoopObserver {}

// ── DiagnosticLog ─────────────────────────────────────────────────────────────

/// One recorded diagnostic.
#[derive(Clone, Debug, PartialEq)]
pub enum Diagnostic {
    NodeAdded { node: NodeId, id: i32, pos: Point },
    DuplicateNode { id: i32, existing: NodeId },
    EdgeAdded { edge: EdgeId, from_id: i32, to_id: i32, length: u32 },
    EdgeRejected { from: NodeId, to: NodeId, reason: EdgeRejection },
    ArcSkipped { from_id: i32, to_id: i32 },
    Scaled { factor: f64 },
    Rotated { center: Point },
    LoadFinished(LoadReport),
    LoadFailed(String),
}

impl Diagnostic {
    /// `true` for the entries that describe a rejected or skipped input.
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            Diagnostic::DuplicateNode { .. }
                | Diagnostic::EdgeRejected { .. }
                | Diagnostic::ArcSkipped { .. }
                | Diagnostic::LoadFailed(_)
        )
    }
}

/// Observer that keeps every diagnostic in memory, in emission order.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticLog {
    pub events: Vec<Diagnostic>,
}

impl DiagnosticLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterator over warnings only (see [`Diagnostic::is_warning`]).
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> + '_ {
        self.events.iter().filter(|d| d.is_warning())
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl GraphObserver for DiagnosticLog {
    fn on_node_added(&mut self, node: NodeId, id: i32, pos: Point) {
        self.events.push(Diagnostic::NodeAdded { node, id, pos });
    }
    fn on_duplicate_node(&mut self, id: i32, existing: NodeId) {
        self.events.push(Diagnostic::DuplicateNode { id, existing });
    }
    fn on_edge_added(&mut self, edge: EdgeId, from_id: i32, to_id: i32, length: u32) {
        self.events.push(Diagnostic::EdgeAdded { edge, from_id, to_id, length });
    }
    fn on_edge_rejected(&mut self, from: NodeId, to: NodeId, reason: EdgeRejection) {
        self.events.push(Diagnostic::EdgeRejected { from, to, reason });
    }
    fn on_arc_skipped(&mut self, from_id: i32, to_id: i32) {
        self.events.push(Diagnostic::ArcSkipped { from_id, to_id });
    }
    fn on_scaled(&mut self, factor: f64) {
        self.events.push(Diagnostic::Scaled { factor });
    }
    fn on_rotated(&mut self, center: Point) {
        self.events.push(Diagnostic::Rotated { center });
    }
    fn on_load_finished(&mut self, report: &LoadReport) {
        self.events.push(Diagnostic::LoadFinished(*report));
    }
    fn on_load_failed(&mut self, error: &GraphError) {
        self.events.push(Diagnostic::LoadFailed(error.to_string()));
    }
}

// ── TracingObserver ───────────────────────────────────────────────────────────

/// Forwards diagnostics to `tracing`.  Per-entity events are `trace`,
/// rejections `warn`, layout and load summaries `debug` / `info`.
#[cfg(feature = "tracing")]
#[derive(Copy, Clone, Debug, Default)]
pub struct TracingObserver;

#[cfg(feature = "tracing")]
impl GraphObserver for TracingObserver {
    fn on_node_added(&mut self, node: NodeId, id: i32, pos: Point) {
        tracing::trace!(%node, id, x = pos.x, y = pos.y, "node added");
    }
    fn on_duplicate_node(&mut self, id: i32, existing: NodeId) {
        tracing::warn!(id, %existing, "node with this id already exists");
    }
    fn on_edge_added(&mut self, edge: EdgeId, from_id: i32, to_id: i32, length: u32) {
        tracing::trace!(%edge, from_id, to_id, length, "edge added");
    }
    fn on_edge_rejected(&mut self, from: NodeId, to: NodeId, reason: EdgeRejection) {
        tracing::warn!(%from, %to, ?reason, "edge rejected");
    }
    fn on_arc_skipped(&mut self, from_id: i32, to_id: i32) {
        tracing::warn!(from_id, to_id, "arc references an undeclared node, skipped");
    }
    fn on_scaled(&mut self, factor: f64) {
        tracing::debug!(factor, "graph scaled and centered");
    }
    fn on_rotated(&mut self, center: Point) {
        tracing::debug!(cx = center.x, cy = center.y, "graph rotated 90° clockwise");
    }
    fn on_load_finished(&mut self, report: &LoadReport) {
        tracing::info!(
            nodes = report.nodes,
            arcs_rejected = report.arcs_rejected,
            arcs_added = report.arcs_added,
            arcs_skipped = report.arcs_skipped,
            "map loaded"
        );
    }
    fn on_load_failed(&mut self, error: &GraphError) {
        tracing::error!(%error, "map load failed");
    }
}
