//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! Callers go through the [`Router`] trait so an A* or precomputed-table
//! router can replace [`DijkstraRouter`] without touching the graph.
//! [`Graph::shortest_path`] is a shortcut for the default router.
//!
//! # Cost units
//!
//! Edge lengths are `u32`; accumulated distances are `u64` so no realistic
//! path can overflow.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use map_core::{EdgeId, NodeId};

use crate::graph::Graph;
use crate::observer::GraphObserver;

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query: edges in travel order and their summed
/// length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Route {
    /// Edges to traverse in order, from source to destination.
    pub edges: Vec<EdgeId>,
    /// Sum of the edge lengths.
    pub total_length: u64,
}

impl Route {
    /// The route with no edges.  Returned for missing endpoints, unreachable
    /// targets, and `start == end`.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Nodes visited in travel order, starting at `start`.
    ///
    /// Returns an empty `Vec` for an empty route.  Edges are undirected, so
    /// the starting node has to be supplied to orient the first step.
    pub fn nodes<O: GraphObserver>(&self, graph: &Graph<O>, start: NodeId) -> Vec<NodeId> {
        if self.edges.is_empty() {
            return Vec::new();
        }
        let mut out = Vec::with_capacity(self.edges.len() + 1);
        let mut cur = start;
        out.push(cur);
        for &e in &self.edges {
            match graph.edge(e).and_then(|edge| edge.other(cur)) {
                Some(next) => {
                    out.push(next);
                    cur = next;
                }
                None => break,
            }
        }
        out
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.
pub trait Router {
    /// Compute a route from `from` to `to`.
    ///
    /// Never fails: unknown endpoints and unreachable targets both yield
    /// [`Route::empty`].
    fn route<O: GraphObserver>(&self, graph: &Graph<O>, from: NodeId, to: NodeId) -> Route;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Binary-heap Dijkstra over the undirected adjacency index.
///
/// Stops as soon as the target is popped from the heap.  O((V + E) log V).
#[derive(Copy, Clone, Debug, Default)]
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn route<O: GraphObserver>(&self, graph: &Graph<O>, from: NodeId, to: NodeId) -> Route {
        dijkstra(graph, from, to)
    }
}

impl<O: GraphObserver> Graph<O> {
    /// Edges of a shortest path from `start` to `end`, in travel order.
    ///
    /// Empty when either handle is unknown, when `end` is unreachable, or
    /// when `start == end`.
    pub fn shortest_path(&self, start: NodeId, end: NodeId) -> Vec<EdgeId> {
        DijkstraRouter.route(self, start, end).edges
    }

    /// Like [`shortest_path`](Self::shortest_path) but keeps the total length.
    pub fn shortest_route(&self, start: NodeId, end: NodeId) -> Route {
        DijkstraRouter.route(self, start, end)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

fn dijkstra<O: GraphObserver>(graph: &Graph<O>, from: NodeId, to: NodeId) -> Route {
    if !graph.contains(from) || !graph.contains(to) || from == to {
        return Route::empty();
    }

    let n = graph.node_count();
    // dist[v] = best known length to reach v.
    let mut dist = vec![u64::MAX; n];
    // prev_edge[v] = edge that reached v; EdgeId::INVALID for unreached nodes.
    let mut prev_edge = vec![EdgeId::INVALID; n];
    let mut visited = vec![false; n];

    dist[from.index()] = 0;

    // Min-heap: (distance, node).  Ties fall back to NodeId order.
    let mut heap: BinaryHeap<Reverse<(u64, NodeId)>> = BinaryHeap::new();
    heap.push(Reverse((0, from)));

    while let Some(Reverse((d, node))) = heap.pop() {
        if visited[node.index()] {
            continue;
        }
        visited[node.index()] = true;

        if node == to {
            return reconstruct(graph, &prev_edge, from, to, d);
        }

        for &(neighbor, edge) in graph.neighbors(node) {
            let length = u64::from(graph.edges[edge.index()].length);
            let candidate = d.saturating_add(length);

            if candidate < dist[neighbor.index()] {
                dist[neighbor.index()] = candidate;
                prev_edge[neighbor.index()] = edge;
                heap.push(Reverse((candidate, neighbor)));
            }
        }
    }

    Route::empty()
}

fn reconstruct<O: GraphObserver>(
    graph: &Graph<O>,
    prev_edge: &[EdgeId],
    from: NodeId,
    to: NodeId,
    total_length: u64,
) -> Route {
    let mut edges = Vec::new();
    let mut cur = to;
    while cur != from {
        let e = prev_edge[cur.index()];
        let Some(prev) = graph.edge(e).and_then(|edge| edge.other(cur)) else {
            return Route::empty();
        };
        // A simple path has fewer edges than the graph has nodes.
        if edges.len() >= graph.node_count() {
            return Route::empty();
        }
        edges.push(e);
        cur = prev;
    }
    edges.reverse();
    Route { edges, total_length }
}
