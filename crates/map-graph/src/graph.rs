//! Undirected road graph.
//!
//! # Data layout
//!
//! Nodes and edges live in two arenas (`Vec<Node>`, `Vec<Edge>`) addressed by
//! [`NodeId`] / [`EdgeId`].  Handles are assigned sequentially and never
//! reused, so a handle stays valid for the lifetime of the graph.
//!
//! The adjacency index is a `Vec` parallel to the node arena.  Entry `n`
//! lists `(neighbor, edge)` pairs in insertion order.  It is appended to on
//! every successful [`Graph::add_edge`] and never rebuilt.
//!
//! Two hash indexes back the uniqueness rules: caller id → `NodeId` for
//! [`Graph::add_node`] and unordered endpoint pair → `EdgeId` for
//! [`Graph::add_edge`].  Both use `FxHashMap`; the keys are small integers.

use rustc_hash::FxHashMap;

use map_core::{BoundingBox, EdgeId, NodeId, Point};

use crate::observer::{EdgeRejection, GraphObserver, NoopObserver};

// ── Node / Edge ───────────────────────────────────────────────────────────────

/// A graph vertex: caller-supplied id plus plane position.
///
/// Two nodes compare equal when their **positions** are equal, whatever
/// their ids.  Use [`NodeId`] handles when identity matters.
#[derive(Copy, Clone, Debug)]
pub struct Node {
    pub id:  i32,
    pub pos: Point,
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for Node {}

/// An undirected weighted connection between two nodes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    pub first:  NodeId,
    pub second: NodeId,
    pub length: u32,
}

impl Edge {
    /// The endpoint opposite `node`, or `None` if `node` is not an endpoint.
    #[inline]
    pub fn other(&self, node: NodeId) -> Option<NodeId> {
        if node == self.first {
            Some(self.second)
        } else if node == self.second {
            Some(self.first)
        } else {
            None
        }
    }

    /// `true` if the edge joins `a` and `b` in either direction.
    #[inline]
    pub fn connects(&self, a: NodeId, b: NodeId) -> bool {
        (self.first == a && self.second == b) || (self.first == b && self.second == a)
    }

    #[inline]
    pub fn is_loop(&self) -> bool {
        self.first == self.second
    }
}

/// Key of the unordered endpoint pair.
#[inline]
fn pair_key(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a <= b { (a, b) } else { (b, a) }
}

// ── Graph ─────────────────────────────────────────────────────────────────────

/// Owns every node and edge of a road map.
///
/// `O` receives diagnostics for every mutation; see [`GraphObserver`].
///
/// # Example
///
/// ```
/// use map_core::Point;
/// use map_graph::Graph;
///
/// let mut g = Graph::new();
/// let a = g.add_node(1, Point::new(0, 0));
/// let b = g.add_node(2, Point::new(3, 4));
/// g.add_edge(a, b, 5);
/// assert_eq!(g.node_count(), 2);
/// assert_eq!(g.edge_count(), 1);
/// assert_eq!(g.shortest_path(a, b).len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Graph<O: GraphObserver = NoopObserver> {
    pub(crate) nodes:     Vec<Node>,
    pub(crate) edges:     Vec<Edge>,
    pub(crate) adjacency: Vec<Vec<(NodeId, EdgeId)>>,
    by_id:                FxHashMap<i32, NodeId>,
    by_pair:              FxHashMap<(NodeId, NodeId), EdgeId>,
    pub(crate) observer:  O,
}

impl Graph<NoopObserver> {
    /// An empty graph that discards diagnostics.
    pub fn new() -> Self {
        Self::with_observer(NoopObserver)
    }
}

impl Default for Graph<NoopObserver> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: GraphObserver> Graph<O> {
    /// An empty graph reporting to `observer`.
    pub fn with_observer(observer: O) -> Self {
        Self {
            nodes:     Vec::new(),
            edges:     Vec::new(),
            adjacency: Vec::new(),
            by_id:     FxHashMap::default(),
            by_pair:   FxHashMap::default(),
            observer,
        }
    }

    // ── Observer access ───────────────────────────────────────────────────

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ── Read access ───────────────────────────────────────────────────────

    /// All nodes in insertion order.  `nodes()[n.index()]` is node `n`.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges in insertion order.  `edges()[e.index()]` is edge `e`.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Iterator over every node handle in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(|i| NodeId(i as u32))
    }

    pub fn node(&self, node: NodeId) -> Option<&Node> {
        self.nodes.get(node.index())
    }

    pub fn edge(&self, edge: EdgeId) -> Option<&Edge> {
        self.edges.get(edge.index())
    }

    /// `true` if `node` is a handle issued by this graph.
    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.nodes.len()
    }

    /// Handle of the node carrying caller id `id`.
    pub fn find_node(&self, id: i32) -> Option<NodeId> {
        self.by_id.get(&id).copied()
    }

    /// `(neighbor, edge)` pairs of `node` in edge-insertion order.  Empty for
    /// isolated or unknown nodes.
    pub fn neighbors(&self, node: NodeId) -> &[(NodeId, EdgeId)] {
        self.adjacency
            .get(node.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn degree(&self, node: NodeId) -> usize {
        self.neighbors(node).len()
    }

    /// The edge joining `a` and `b`, in either direction.
    pub fn edge_between(&self, a: NodeId, b: NodeId) -> Option<EdgeId> {
        self.by_pair.get(&pair_key(a, b)).copied()
    }

    /// Bounding box of all node positions, `None` for an empty graph.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(self.nodes.iter().map(|n| n.pos))
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Add a node with caller id `id` at `pos` and return its handle.
    ///
    /// If `id` is already present the existing handle is returned and the
    /// stored position is left untouched.
    pub fn add_node(&mut self, id: i32, pos: Point) -> NodeId {
        if let Some(&existing) = self.by_id.get(&id) {
            self.observer.on_duplicate_node(id, existing);
            return existing;
        }

        let node = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node { id, pos });
        self.adjacency.push(Vec::new());
        self.by_id.insert(id, node);
        self.observer.on_node_added(node, id, pos);
        node
    }

    /// Connect `from` and `to` with an undirected edge of `length`.
    ///
    /// Returns `None` without touching the graph when either handle is not
    /// part of this graph, or when the pair is already connected (in either
    /// direction).  The existing edge keeps its length.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, length: u32) -> Option<EdgeId> {
        if !self.contains(from) || !self.contains(to) {
            self.observer
                .on_edge_rejected(from, to, EdgeRejection::MissingEndpoint);
            return None;
        }

        let key = pair_key(from, to);
        if let Some(&existing) = self.by_pair.get(&key) {
            self.observer
                .on_edge_rejected(from, to, EdgeRejection::Duplicate(existing));
            return None;
        }

        let edge = EdgeId(self.edges.len() as u32);
        self.edges.push(Edge { first: from, second: to, length });
        self.by_pair.insert(key, edge);

        self.adjacency[from.index()].push((to, edge));
        // A loop is listed once under its single endpoint.
        if from != to {
            self.adjacency[to.index()].push((from, edge));
        }

        let (from_id, to_id) = (self.nodes[from.index()].id, self.nodes[to.index()].id);
        self.observer.on_edge_added(edge, from_id, to_id, length);
        Some(edge)
    }
}
