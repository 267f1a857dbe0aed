//! Flat row types shared by export backends.

use map_core::NodeId;
use map_graph::{Graph, GraphObserver, Route};

/// One node: arena handle, caller id, current position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeRow {
    pub node: u32,
    pub id:   i32,
    pub x:    i32,
    pub y:    i32,
}

/// One edge, endpoints given by caller id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeRow {
    pub edge:    u32,
    pub from_id: i32,
    pub to_id:   i32,
    pub length:  u32,
}

/// One step of a route, oriented in travel direction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteStepRow {
    pub step:       usize,
    pub edge:       u32,
    pub from_id:    i32,
    pub to_id:      i32,
    pub length:     u32,
    /// Length travelled up to and including this step.
    pub cumulative: u64,
}

pub fn node_rows<O: GraphObserver>(graph: &Graph<O>) -> Vec<NodeRow> {
    graph
        .node_ids()
        .zip(graph.nodes())
        .map(|(h, n)| NodeRow { node: h.0, id: n.id, x: n.pos.x, y: n.pos.y })
        .collect()
}

pub fn edge_rows<O: GraphObserver>(graph: &Graph<O>) -> Vec<EdgeRow> {
    let nodes = graph.nodes();
    graph
        .edges()
        .iter()
        .enumerate()
        .map(|(i, e)| EdgeRow {
            edge:    i as u32,
            from_id: nodes[e.first.index()].id,
            to_id:   nodes[e.second.index()].id,
            length:  e.length,
        })
        .collect()
}

/// Rows for `route` walked from `start`.  Stops early if the route does not
/// belong to `graph`.
pub fn route_rows<O: GraphObserver>(graph: &Graph<O>, start: NodeId, route: &Route) -> Vec<RouteStepRow> {
    let path = route.nodes(graph, start);
    let mut cumulative = 0u64;
    route
        .edges
        .iter()
        .zip(path.windows(2))
        .enumerate()
        .filter_map(|(step, (&e, pair))| {
            let length = graph.edge(e)?.length;
            cumulative += u64::from(length);
            Some(RouteStepRow {
                step,
                edge: e.0,
                from_id: graph.node(pair[0])?.id,
                to_id: graph.node(pair[1])?.id,
                length,
                cumulative,
            })
        })
        .collect()
}
