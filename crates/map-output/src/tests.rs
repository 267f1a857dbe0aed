//! Integration tests for map-output.

#[cfg(test)]
mod helpers {
    use map_core::{NodeId, Point};
    use map_graph::Graph;

    /// 1 ─5─ 2 ─3─ 3, plus 1 ─10─ 3.
    pub fn triangle() -> (Graph, [NodeId; 3]) {
        let mut g = Graph::new();
        let a = g.add_node(1, Point::new(0, 0));
        let b = g.add_node(2, Point::new(10, 0));
        let c = g.add_node(3, Point::new(10, 10));
        g.add_edge(a, b, 5);
        g.add_edge(c, b, 3);
        g.add_edge(a, c, 10);
        (g, [a, b, c])
    }
}

#[cfg(test)]
mod rows {
    use crate::row::{edge_rows, node_rows, route_rows};
    use crate::{EdgeRow, NodeRow, RouteStepRow};

    #[test]
    fn node_and_edge_rows() {
        let (g, _) = super::helpers::triangle();
        let nodes = node_rows(&g);
        assert_eq!(nodes[2], NodeRow { node: 2, id: 3, x: 10, y: 10 });
        let edges = edge_rows(&g);
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[1], EdgeRow { edge: 1, from_id: 3, to_id: 2, length: 3 });
    }

    #[test]
    fn route_rows_follow_travel_direction() {
        let (g, [a, _, c]) = super::helpers::triangle();
        let route = g.shortest_route(a, c);
        let rows = route_rows(&g, a, &route);
        assert_eq!(
            rows,
            vec![
                RouteStepRow { step: 0, edge: 0, from_id: 1, to_id: 2, length: 5, cumulative: 5 },
                // Stored as 3 → 2 but travelled 2 → 3.
                RouteStepRow { step: 1, edge: 1, from_id: 2, to_id: 3, length: 3, cumulative: 8 },
            ]
        );
    }

    #[test]
    fn empty_route_has_no_rows() {
        let (g, [a, ..]) = super::helpers::triangle();
        assert!(route_rows(&g, a, &map_graph::Route::empty()).is_empty());
    }
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::CsvExporter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn headers(path: &std::path::Path) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_created_with_headers() {
        let dir = tmp();
        let mut w = CsvExporter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(headers(&dir.path().join("nodes.csv")), ["node", "id", "x", "y"]);
        assert_eq!(headers(&dir.path().join("edges.csv")), ["edge", "from_id", "to_id", "length"]);
        assert_eq!(
            headers(&dir.path().join("route.csv")),
            ["step", "edge", "from_id", "to_id", "length", "cumulative"]
        );
    }

    #[test]
    fn graph_and_route_written() {
        let (g, [a, _, c]) = super::helpers::triangle();
        let dir = tmp();
        let mut w = CsvExporter::new(dir.path()).unwrap();
        w.write_graph(&g).unwrap();
        w.write_route(&g, a, &g.shortest_route(a, c)).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("nodes.csv")).unwrap();
        assert_eq!(rdr.records().count(), 3);

        let mut rdr = csv::Reader::from_path(dir.path().join("edges.csv")).unwrap();
        let first = rdr.records().next().unwrap().unwrap();
        assert_eq!(&first[1], "1");
        assert_eq!(&first[3], "5");

        let mut rdr = csv::Reader::from_path(dir.path().join("route.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][5], "8");
    }

    #[test]
    fn missing_directory_fails() {
        let dir = tmp();
        let result = CsvExporter::new(&dir.path().join("absent"));
        assert!(result.is_err());
    }
}
