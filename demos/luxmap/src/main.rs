//! luxmap — headless driver for the `map-*` crates.
//!
//! Runs the same pipeline an interactive map view would: load the XML
//! document, fit it to the drawing area, rotate it into screen orientation,
//! pick two endpoints, and compute the shortest route between them.
//!
//! ```text
//! cargo run -p luxmap -- --map demos/luxmap/data/sample_map.xml --from 1 --to 7
//! RUST_LOG=map_graph=trace cargo run -p luxmap -- --map … --pick 120,80 --pick 600,400
//! ```

mod cli;

use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use map_core::{MapConfig, NodeId};
use map_graph::{Graph, GraphObserver, NodeLocator, Route, Selection, TracingObserver, load_from_path};
use map_output::CsvExporter;

use cli::Cli;

// ── Endpoint selection ────────────────────────────────────────────────────────

fn endpoints<O: GraphObserver>(
    cli: &Cli,
    graph: &Graph<O>,
    config: &MapConfig,
) -> Result<Option<(NodeId, NodeId)>> {
    if let (Some(from), Some(to)) = (cli.from, cli.to) {
        let lookup = |id: i32| {
            graph
                .find_node(id)
                .with_context(|| format!("node {id} is not in the map"))
        };
        return Ok(Some((lookup(from)?, lookup(to)?)));
    }

    if cli.pick.is_empty() {
        return Ok(None);
    }

    let locator = NodeLocator::new(graph);
    let mut selection = Selection::new();
    for &pos in &cli.pick {
        match selection.pick(&locator, pos, config.snap_radius) {
            Some(node) => tracing::debug!(%pos, %node, "picked"),
            None => tracing::warn!(%pos, radius = config.snap_radius, "no node near pick"),
        }
    }
    match selection.pair() {
        Some(pair) => Ok(Some(pair)),
        None => bail!("need two picks that land on nodes, got {}", selection.len()),
    }
}

// ── Reporting ─────────────────────────────────────────────────────────────────

fn print_text<O: GraphObserver>(graph: &Graph<O>, start: NodeId, route: &Route) {
    if route.is_empty() {
        println!("No route.");
        return;
    }
    println!("Route: {} edges, total length {}", route.len(), route.total_length);
    println!("{:<8} {:<12} {:<12}", "Step", "Node id", "Position");
    println!("{}", "-".repeat(34));
    for (step, node) in route.nodes(graph, start).into_iter().enumerate() {
        if let Some(n) = graph.node(node) {
            println!("{:<8} {:<12} {:<12}", step, n.id, n.pos.to_string());
        }
    }
}

fn print_json<O: GraphObserver>(
    graph: &Graph<O>,
    endpoints: Option<(NodeId, NodeId)>,
    route: &Route,
) -> Result<()> {
    let path: Vec<serde_json::Value> = match endpoints {
        Some((start, _)) => route
            .nodes(graph, start)
            .into_iter()
            .filter_map(|h| graph.node(h))
            .map(|n| json!({ "id": n.id, "x": n.pos.x, "y": n.pos.y }))
            .collect(),
        None => Vec::new(),
    };
    let id_of = |h: NodeId| graph.node(h).map(|n| n.id);
    let out = json!({
        "nodes": graph.node_count(),
        "edges": graph.edge_count(),
        "bounding_box": graph.bounding_box(),
        "from": endpoints.and_then(|(s, _)| id_of(s)),
        "to": endpoints.and_then(|(_, e)| id_of(e)),
        "total_length": route.total_length,
        "path": path,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("luxmap=info,map_graph=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    // 1. Load.
    let mut graph = Graph::with_observer(TracingObserver);
    let t0 = Instant::now();
    let report = load_from_path(&mut graph, &cli.map)
        .with_context(|| format!("loading {}", cli.map.display()))?;
    tracing::info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        skipped = report.arcs_skipped,
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "graph ready"
    );

    // 2. Layout.
    graph.apply_layout(&config);

    // 3. Endpoints and route.
    let ends = endpoints(&cli, &graph, &config)?;
    let route = match ends {
        Some((start, end)) => graph.shortest_route(start, end),
        None => Route::empty(),
    };

    // 4. Output.
    if cli.json {
        print_json(&graph, ends, &route)?;
    } else {
        println!("Map: {} nodes, {} edges", graph.node_count(), graph.edge_count());
        if let Some(bbox) = graph.bounding_box() {
            println!("Layout: {bbox} in {}x{} (margin {})", config.width, config.height, config.margin);
        }
        if let Some((start, _)) = ends {
            print_text(&graph, start, &route);
        }
    }

    if let Some(dir) = &cli.export {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating {}", dir.display()))?;
        let mut exporter = CsvExporter::new(dir)?;
        exporter.write_graph(&graph)?;
        if let Some((start, _)) = ends {
            exporter.write_route(&graph, start, &route)?;
        }
        exporter.finish()?;
        tracing::info!(dir = %dir.display(), "exported CSV");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use map_core::MapConfig;
    use map_graph::{Graph, LoadReport, load_from_str};

    use super::endpoints;
    use crate::cli::Cli;

    const SAMPLE: &str = include_str!("../data/sample_map.xml");

    fn laid_out(config: &MapConfig) -> Graph {
        let mut g = Graph::new();
        let report = load_from_str(&mut g, SAMPLE).unwrap();
        assert_eq!(
            report,
            LoadReport { nodes: 8, arcs_added: 9, arcs_rejected: 0, arcs_skipped: 1 }
        );
        g.apply_layout(config);
        g
    }

    fn ids(g: &Graph, nodes: &[map_core::NodeId]) -> Vec<i32> {
        nodes.iter().map(|&n| g.node(n).unwrap().id).collect()
    }

    #[test]
    fn sample_route_by_id() {
        let cli = Cli::parse_from(["luxmap", "--map", "x.xml", "--from", "1", "--to", "7"]);
        let config = cli.resolve_config().unwrap();
        let g = laid_out(&config);

        let (start, end) = endpoints(&cli, &g, &config).unwrap().unwrap();
        let route = g.shortest_route(start, end);
        assert_eq!(route.total_length, 1440 + 2800 + 1890);
        assert_eq!(ids(&g, &route.nodes(&g, start)), vec![1, 2, 6, 7]);
    }

    #[test]
    fn sample_route_by_pick() {
        let config = MapConfig::default();
        let g = laid_out(&config);
        let at = |id: i32| {
            let p = g.node(g.find_node(id).unwrap()).unwrap().pos;
            format!("{},{}", p.x + 2, p.y - 1)
        };
        let (a, b) = (at(8), at(5));
        let cli = Cli::parse_from(["luxmap", "--map", "x.xml", "--pick", &a, "--pick", &b]);

        let (start, end) = endpoints(&cli, &g, &config).unwrap().unwrap();
        assert_eq!(ids(&g, &[start, end]), vec![8, 5]);
        // 8-3-2-1-5 = 2190+1080+1440+3050 vs 8-3-2-6-5 = 2190+1080+2800+1660.
        assert_eq!(g.shortest_route(start, end).total_length, 7730);
    }

    #[test]
    fn unknown_id_is_an_error() {
        let cli = Cli::parse_from(["luxmap", "--map", "x.xml", "--from", "1", "--to", "42"]);
        let config = cli.resolve_config().unwrap();
        let g = laid_out(&config);
        assert!(endpoints(&cli, &g, &config).is_err());
    }

    #[test]
    fn missed_pick_is_an_error() {
        let config = MapConfig::default();
        let g = laid_out(&config);
        let cli = Cli::parse_from(["luxmap", "--map", "x.xml", "--pick", "-5000,-5000", "--pick", "0,0"]);
        assert!(endpoints(&cli, &g, &config).is_err());
    }

    #[test]
    fn no_endpoints_requested() {
        let cli = Cli::parse_from(["luxmap", "--map", "x.xml"]);
        let config = cli.resolve_config().unwrap();
        let g = laid_out(&config);
        assert_eq!(endpoints(&cli, &g, &config).unwrap(), None);
    }
}
