//! End-to-end run over the four-city ring: edge-list file -> graph -> solve ->
//! queries, then an interactive session against the same file.

use std::io::{Cursor, Write};

use tempfile::NamedTempFile;
use weather_routes::{load_edge_list, solve, Condition, Shell, WeightedGraph, UNREACHABLE};

const RING: &str = "\
Guatemala Mixco 10 15 20 25
Mixco Antigua 15 20 25 30
Antigua Escuintla 20 25 30 35
Escuintla Guatemala 25 30 35 40
this line is ignored
";

fn ring_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(RING.as_bytes()).unwrap();
    file
}

fn ring_graph() -> WeightedGraph {
    let file = ring_file();
    let edge_list = load_edge_list(file.path()).unwrap();
    WeightedGraph::from_edge_list(&edge_list).unwrap()
}

#[test]
fn ring_queries() {
    let graph = ring_graph();
    assert_eq!(graph.cities(), &["Guatemala", "Mixco", "Antigua", "Escuintla"]);
    assert_eq!(graph.edge_count(), 4);

    let idx = |city: &str| graph.index_of(city).unwrap();
    let snapshot = solve(&graph, Condition::Normal);

    assert_eq!(snapshot.distance(idx("Guatemala"), idx("Antigua")), 25.0);

    let route = snapshot.route(idx("Guatemala"), idx("Escuintla")).unwrap();
    let names: Vec<&str> = route.cities.iter().map(|&i| graph.city_name(i).unwrap()).collect();
    assert_eq!(names, vec!["Guatemala", "Mixco", "Antigua", "Escuintla"]);
    assert_eq!(route.hours, 45.0);

    // Incoming eccentricities are 60, 55, 50, 45: Escuintla is the center.
    assert_eq!(snapshot.graph_center(), Some(idx("Escuintla")));
}

#[test]
fn mutation_then_resolve() {
    let mut graph = ring_graph();
    let idx = |graph: &WeightedGraph, city: &str| graph.index_of(city).unwrap();
    let stale = solve(&graph, Condition::Storm);

    graph.remove_edge("Antigua", "Escuintla").unwrap();
    assert!(!stale.is_current(&graph));

    let fresh = solve(&graph, Condition::Storm);
    let (a, e) = (idx(&graph, "Antigua"), idx(&graph, "Escuintla"));
    assert_eq!(stale.distance(a, e), 35.0);
    assert_eq!(fresh.distance(a, e), UNREACHABLE);
    assert!(fresh.reconstruct_path(a, e).is_empty());
}

#[test]
fn interactive_session() {
    let script = "1\nGuatemala\nEscuintla\n2\n4\n4\n1\nMixco\nGuatemala\n5\n";
    let mut out = Vec::new();
    {
        let mut shell = Shell::new(ring_graph(), Condition::Normal, Cursor::new(script), &mut out);
        shell.run().unwrap();
    }
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("Route: Guatemala -> Mixco -> Antigua -> Escuintla"));
    assert!(out.contains("center of the graph is: Escuintla"));
    assert!(out.contains("Weather condition changed to: storm"));
    // storm: 30 + 35 + 40
    assert!(out.contains("Total time: 105 hours"));
}
