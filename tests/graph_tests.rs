use dijkstra_paths::graph::{Graph, WeightedGraph};
use dijkstra_paths::report::GraphReport;
use dijkstra_paths::{Error, NodeId};

#[test]
fn test_get_node_is_idempotent_by_label() {
    let mut graph = Graph::new();
    let a = graph.get_node("A");
    let b = graph.get_node("B");
    let a_again = graph.get_node("A");

    assert_eq!(a, a_again);
    assert_ne!(a, b);
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.label(a), Some("A"));
    assert_eq!(graph.node("B"), Some(b));
    assert_eq!(graph.node("Z"), None);
}

#[test]
fn test_add_node_rejects_duplicate_label() {
    let mut graph = Graph::new();
    graph.add_node("JFK").unwrap();
    match graph.add_node("JFK") {
        Err(Error::DuplicateNode(label)) => assert_eq!(label, "JFK"),
        other => panic!("expected duplicate node error, got {:?}", other),
    }
    assert_eq!(graph.node_count(), 1);
}

#[test]
fn test_lookup_unknown_label_fails() {
    let graph = Graph::new();
    assert!(matches!(graph.lookup("nowhere"), Err(Error::UnknownNode(ref l)) if l == "nowhere"));
}

#[test]
fn test_add_edge_last_write_wins() {
    let mut graph = Graph::new();
    let a = graph.get_node("A");
    let b = graph.get_node("B");

    graph.add_edge(a, b, 4.0).unwrap();
    graph.add_edge(a, b, 2.5).unwrap();

    assert_eq!(graph.edge_weight(a, b), Some(2.5));
    assert_eq!(graph.edge_count(), 1);
    // Edges are directed
    assert_eq!(graph.edge_weight(b, a), None);
}

#[test]
fn test_add_edge_rejects_bad_weights() {
    let mut graph = Graph::new();
    let a = graph.get_node("A");
    let b = graph.get_node("B");

    assert!(matches!(
        graph.add_edge(a, b, -1.0),
        Err(Error::NegativeWeight { weight, .. }) if weight == -1.0
    ));
    assert!(matches!(
        graph.add_edge(a, b, f64::NAN),
        Err(Error::NonFiniteWeight { .. })
    ));
    assert!(matches!(
        graph.add_edge(a, b, f64::INFINITY),
        Err(Error::NonFiniteWeight { .. })
    ));
    assert_eq!(graph.edge_count(), 0);

    // Zero is a valid weight
    graph.add_edge(a, b, 0.0).unwrap();
    assert_eq!(graph.edge_weight(a, b), Some(0.0));
}

#[test]
fn test_add_edge_rejects_foreign_handles() {
    let mut graph = Graph::new();
    let a = graph.get_node("A");
    let stranger = NodeId::from(5);

    assert!(matches!(
        graph.add_edge(a, stranger, 1.0),
        Err(Error::InvalidNode(id)) if id == stranger
    ));
}

#[test]
fn test_neighbors_and_edges_enumerate_everything() {
    let mut graph = Graph::new();
    let a = graph.get_node("A");
    let b = graph.get_node("B");
    let c = graph.get_node("C");
    graph.add_edge(a, b, 1.0).unwrap();
    graph.add_edge(a, c, 2.0).unwrap();
    graph.add_edge(c, a, 3.0).unwrap();

    let mut from_a: Vec<_> = graph.neighbors(a).collect();
    from_a.sort_by(|x, y| x.0.cmp(&y.0));
    assert_eq!(from_a, vec![(b, 1.0), (c, 2.0)]);
    assert_eq!(graph.neighbors(b).count(), 0);

    let mut edges: Vec<_> = graph.edges().collect();
    edges.sort_by(|x, y| (x.0, x.1).cmp(&(y.0, y.1)));
    assert_eq!(edges, vec![(a, b, 1.0), (a, c, 2.0), (c, a, 3.0)]);
}

#[test]
fn test_report_lists_nodes_and_weights() {
    let mut graph = Graph::new();
    let a = graph.get_node("A");
    let b = graph.get_node("B");
    graph.get_node("lonely");
    graph.add_edge(a, b, 1.5).unwrap();

    let text = graph.report();
    assert!(text.contains("3 nodes and 1 edges"), "unexpected header: {}", text);
    assert!(text.contains("A: B(1.5)"));
    assert!(text.contains("lonely:"));

    let report = GraphReport::from_graph(&graph);
    assert_eq!(report.node_count, 3);
    assert_eq!(report.edge_count, 1);
    assert_eq!(report.nodes[0].label, "A");
    assert_eq!(report.nodes[0].edges[0].to, "B");

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["nodes"][0]["edges"][0]["weight"], 1.5);
}
