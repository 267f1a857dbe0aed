//! CSV export backend.
//!
//! Creates three files in the configured output directory:
//! - `nodes.csv`
//! - `edges.csv`
//! - `route.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use map_core::NodeId;
use map_graph::{Graph, GraphObserver, Route};

use crate::OutputResult;
use crate::row::{edge_rows, node_rows, route_rows};

/// Writes a graph and one route to CSV files.
pub struct CsvExporter {
    nodes:    Writer<File>,
    edges:    Writer<File>,
    route:    Writer<File>,
    finished: bool,
}

impl CsvExporter {
    /// Open (or create) the three CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut nodes = Writer::from_path(dir.join("nodes.csv"))?;
        nodes.write_record(["node", "id", "x", "y"])?;

        let mut edges = Writer::from_path(dir.join("edges.csv"))?;
        edges.write_record(["edge", "from_id", "to_id", "length"])?;

        let mut route = Writer::from_path(dir.join("route.csv"))?;
        route.write_record(["step", "edge", "from_id", "to_id", "length", "cumulative"])?;

        Ok(Self { nodes, edges, route, finished: false })
    }

    /// Write every node and edge of `graph`.
    pub fn write_graph<O: GraphObserver>(&mut self, graph: &Graph<O>) -> OutputResult<()> {
        for row in node_rows(graph) {
            self.nodes.write_record(&[
                row.node.to_string(),
                row.id.to_string(),
                row.x.to_string(),
                row.y.to_string(),
            ])?;
        }
        for row in edge_rows(graph) {
            self.edges.write_record(&[
                row.edge.to_string(),
                row.from_id.to_string(),
                row.to_id.to_string(),
                row.length.to_string(),
            ])?;
        }
        Ok(())
    }

    /// Write the steps of `route`, walked from `start`.
    pub fn write_route<O: GraphObserver>(
        &mut self,
        graph: &Graph<O>,
        start: NodeId,
        route: &Route,
    ) -> OutputResult<()> {
        for row in route_rows(graph, start, route) {
            self.route.write_record(&[
                row.step.to_string(),
                row.edge.to_string(),
                row.from_id.to_string(),
                row.to_id.to_string(),
                row.length.to_string(),
                row.cumulative.to_string(),
            ])?;
        }
        Ok(())
    }

    /// Flush all files.  Idempotent.
    pub fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.nodes.flush()?;
        self.edges.flush()?;
        self.route.flush()?;
        Ok(())
    }
}
