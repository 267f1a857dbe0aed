//! Nearest-node lookup for picking nodes by screen position.
//!
//! A [`NodeLocator`] is a snapshot: it indexes node positions at the time it
//! is built.  Rebuild it after `scale` / `rotate_90_clockwise`, exactly as a
//! display would redraw its cached buffer after a resize.

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use map_core::{NodeId, Point};

use crate::graph::Graph;
use crate::observer::GraphObserver;

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a node position with its handle.
///
/// Keyed on `f64` so squared distances across the full `i32` plane stay
/// representable.
#[derive(Clone)]
struct LocatorEntry {
    point: [f64; 2],
    node:  NodeId,
}

impl RTreeObject for LocatorEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for LocatorEntry {
    /// Squared Euclidean distance in plane units.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

#[inline]
fn key(p: Point) -> [f64; 2] {
    [f64::from(p.x), f64::from(p.y)]
}

// ── NodeLocator ───────────────────────────────────────────────────────────────

/// Spatial index over a graph's node positions.
pub struct NodeLocator {
    tree: RTree<LocatorEntry>,
}

impl NodeLocator {
    /// Bulk-load the current positions of every node in `graph`.
    pub fn new<O: GraphObserver>(graph: &Graph<O>) -> Self {
        let entries: Vec<LocatorEntry> = graph
            .node_ids()
            .zip(graph.nodes())
            .map(|(node, n)| LocatorEntry { point: key(n.pos), node })
            .collect();
        Self { tree: RTree::bulk_load(entries) }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// The node closest to `pos`.  `None` only when the index is empty.
    pub fn nearest(&self, pos: Point) -> Option<NodeId> {
        self.tree.nearest_neighbor(&key(pos)).map(|e| e.node)
    }

    /// The node closest to `pos`, provided it lies strictly closer than
    /// `radius`.
    pub fn nearest_within(&self, pos: Point, radius: f64) -> Option<NodeId> {
        let entry = self.tree.nearest_neighbor(&key(pos))?;
        let d2 = entry.distance_2(&key(pos));
        (d2 < radius * radius).then_some(entry.node)
    }

    /// Up to `k` nodes ordered by ascending distance from `pos`.
    pub fn k_nearest(&self, pos: Point, k: usize) -> Vec<NodeId> {
        self.tree
            .nearest_neighbor_iter(&key(pos))
            .take(k)
            .map(|e| e.node)
            .collect()
    }
}
