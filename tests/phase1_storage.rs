//! Phase 1 tests: nodes, edge storage and graph mutation.

use proper_graph::graph::{EdgeStore, Graph};
use proper_graph::types::{GraphConfig, GraphError, Node, NodeId};

// ==================== Helpers ====================

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Undirected fixture: `1-2`, a chain `3..8` with a `3-5` shortcut, and two
/// isolated nodes.
fn undirected_fixture() -> Graph<&'static str> {
    init_logging();
    let mut g = Graph::undirected();

    g.add_node("1");
    g.add_node("2");
    g.add_edge("1", "2").unwrap();

    for v in ["3", "4", "5", "6", "7", "8"] {
        g.add_node(v);
    }
    for (a, b) in [("3", "4"), ("4", "5"), ("3", "5"), ("5", "6"), ("6", "7"), ("7", "8")] {
        g.add_edge(a, b).unwrap();
    }

    g.add_node("999");
    g.add_node("1000");
    g
}

const DIRECTED_EDGES: [(&str, &str); 13] = [
    ("11", "22"),
    ("11", "33"),
    ("22", "33"),
    ("33", "44"),
    ("44", "55"),
    ("44", "99"),
    ("55", "66"),
    ("66", "77"),
    ("77", "88"),
    ("88", "99"),
    ("99", "11"),
    ("99", "44"),
    ("55", "777"),
];

fn directed_fixture() -> Graph<&'static str> {
    init_logging();
    let mut g = Graph::directed();
    for v in ["11", "22", "33", "44", "55", "66", "77", "88", "99", "777", "000"] {
        g.add_node(v);
    }
    for (a, b) in DIRECTED_EDGES {
        g.add_edge(a, b).unwrap();
    }
    g
}

/// Every stored edge must be mirrored in the adjacency of both endpoints.
fn assert_consistent(g: &Graph<&'static str>) {
    for edge in g.edges() {
        let out = g.outgoing_nodes(edge.from).unwrap();
        assert!(out.contains(&edge.to), "{:?} missing from outgoing", edge);
        if g.is_directed() {
            let inc = g.incoming_nodes(edge.to).unwrap();
            assert!(inc.contains(&edge.from), "{:?} missing from incoming", edge);
        } else {
            let back = g.outgoing_nodes(edge.to).unwrap();
            assert!(back.contains(&edge.from), "{:?} missing reverse entry", edge);
        }
    }
    for &v in g.nodes() {
        for n in g.outgoing_nodes(v).unwrap() {
            assert!(g.contains_edge(v, n), "adjacency {} -> {} has no edge", v, n);
        }
    }
}

// ==================== Node Tests ====================

#[test]
fn test_node_value() {
    let node = Node::new("n1");
    assert_eq!(*node.value(), "n1");
    assert!(node.outgoing().is_empty());
    assert!(node.incoming().is_empty());
}

#[test]
fn test_node_adjacent_dedups_by_identity() {
    let (a, b, c) = (NodeId::from(0), NodeId::from(1), NodeId::from(2));
    let mut node = Node::new("n2");
    node.add_outgoing(a);
    node.add_outgoing(c);
    node.add_incoming(a);
    node.add_incoming(b);
    node.add_outgoing(a);

    assert_eq!(node.outgoing(), &[a, c, a]);
    assert_eq!(node.incoming(), &[a, b]);
    assert_eq!(node.adjacent(), vec![a, c, b]);
    assert_eq!(node.degree(), 5);
}

// ==================== Node Registry Tests ====================

#[test]
fn test_contains_existing_nodes() {
    let g = undirected_fixture();
    for v in ["1", "2", "3", "4", "5", "6", "7", "8", "999", "1000"] {
        assert!(g.contains(v), "{} should exist", v);
    }
    assert_eq!(g.node_count(), 10);
}

#[test]
fn test_contains_missing_nodes() {
    let g = undirected_fixture();
    for v in ["0", "33", "50", ""] {
        assert!(!g.contains(v), "{} should not exist", v);
    }
}

#[test]
fn test_readd_node_is_noop() {
    let mut g = undirected_fixture();
    assert!(!g.add_node("1"));
    assert_eq!(g.node_count(), 10);
    assert!(g.contains_edge("1", "2"));
    assert_eq!(g.outgoing_nodes("1").unwrap(), vec!["2"]);
}

#[test]
fn test_nodes_in_insertion_order() {
    let g = undirected_fixture();
    let values: Vec<_> = g.nodes().copied().collect();
    assert_eq!(
        values,
        vec!["1", "2", "3", "4", "5", "6", "7", "8", "999", "1000"]
    );
}

#[test]
fn test_adjacent_counts() {
    let g = undirected_fixture();
    let expected = [("1", 1), ("2", 1), ("999", 0), ("4", 2), ("5", 3), ("8", 1)];
    for (v, count) in expected {
        assert_eq!(g.adjacent_nodes(v).unwrap().len(), count, "node {}", v);
        assert_eq!(g.node(v).unwrap().adjacent().len(), count, "node {}", v);
    }
}

#[test]
fn test_removed_slot_is_reused_with_new_generation() {
    init_logging();
    let mut g: Graph<&str> = Graph::directed();
    g.add_node("a");
    g.add_node("b");
    g.add_edge("a", "b").unwrap();
    let old = g.id_of("a").unwrap();

    assert!(g.remove_node("a"));
    g.add_node("c");
    let new = g.id_of("c").unwrap();

    assert_eq!(new.index(), old.index());
    assert_ne!(new, old);
    assert_eq!(g.value_of(old), None);
    assert_eq!(g.value_of(new), Some(&"c"));
    assert!(!g.contains_edge("c", "b"));
    assert!(g.incoming_nodes("b").unwrap().is_empty());
    assert_eq!(g.nodes().copied().collect::<Vec<_>>(), vec!["c", "b"]);
}

#[test]
fn test_arena_bounded_by_live_nodes() {
    init_logging();
    let mut g: Graph<u32> = Graph::undirected();
    g.add_node(0u32);
    for i in 1..1_000u32 {
        g.add_node(i);
        g.add_edge(&0u32, &i).unwrap();
        assert!(g.remove_node(&i));
    }
    g.add_node(5_000u32);
    assert!(g.id_of(&5_000u32).unwrap().index() < 2);
    assert_eq!(g.node_count(), 2);
    assert_eq!(g.edge_count(), 0);
    assert!(g.outgoing_nodes(&0u32).unwrap().is_empty());
}

// ==================== Undirected Edge Tests ====================

#[test]
fn test_undirected_contains_edge() {
    let g = undirected_fixture();
    let existing = [("1", "2"), ("3", "4"), ("3", "5"), ("4", "5"), ("6", "7"), ("7", "8")];
    for (a, b) in existing {
        assert!(g.contains_edge(a, b), "{}-{}", a, b);
        assert!(g.contains_edge(b, a), "{}-{} reversed", a, b);
    }
}

#[test]
fn test_undirected_missing_edges() {
    let g = undirected_fixture();
    let missing = [("1", "3"), ("3", "6"), ("5", "8"), ("5", "999"), ("1000", "999")];
    for (a, b) in missing {
        assert!(!g.contains_edge(a, b), "{}-{}", a, b);
        assert!(!g.contains_edge(b, a), "{}-{} reversed", a, b);
    }
    assert!(!g.contains_edge("1", "nope"));
}

#[test]
fn test_undirected_adjacency_is_symmetric() {
    let g = undirected_fixture();
    assert_eq!(g.outgoing_nodes("5").unwrap(), vec!["4", "3", "6"]);
    assert!(g.incoming_nodes("5").unwrap().is_empty());
    assert_consistent(&g);
}

#[test]
fn test_undirected_remove_edge_either_orientation() {
    let mut g = undirected_fixture();
    assert!(g.remove_edge("4", "3").unwrap());
    assert!(!g.contains_edge("3", "4"));
    assert!(!g.contains_edge("4", "3"));
    assert!(!g.outgoing_nodes("3").unwrap().contains(&"4"));
    assert!(!g.outgoing_nodes("4").unwrap().contains(&"3"));
    assert!(!g.remove_edge("3", "4").unwrap());
    assert_consistent(&g);
}

#[test]
fn test_undirected_remove_node_cascades() {
    let mut g = undirected_fixture();
    assert!(g.remove_node("5"));
    assert!(!g.contains("5"));
    for n in ["3", "4", "6"] {
        assert!(!g.contains_edge(n, "5"));
        assert!(!g.contains_edge("5", n));
        assert!(!g.adjacent_nodes(n).unwrap().contains(&"5"));
    }
    assert!(g.contains_edge("3", "4"));
    assert_eq!(g.edge_count(), 4);
    assert_consistent(&g);
}

#[test]
fn test_undirected_self_loop_listed_once() {
    init_logging();
    let mut g: Graph<&str> = Graph::undirected();
    g.add_node("a");
    g.add_edge("a", "a").unwrap();
    assert_eq!(g.outgoing_nodes("a").unwrap(), vec!["a"]);
    assert!(g.contains_edge("a", "a"));
    assert!(g.remove_node("a"));
    assert_eq!(g.edge_count(), 0);
}

// ==================== Directed Edge Tests ====================

#[test]
fn test_directed_contains_edge() {
    let g = directed_fixture();
    for (a, b) in DIRECTED_EDGES {
        assert!(g.contains_edge(a, b), "{} -> {}", a, b);
    }
    for (a, b) in [("11", "44"), ("77", "99"), ("99", "33")] {
        assert!(!g.contains_edge(a, b), "{} -> {}", a, b);
    }
}

#[test]
fn test_directed_reverse_edges_absent() {
    let g = directed_fixture();
    let reversed = [("11", "99"), ("99", "88"), ("44", "33"), ("77", "66"), ("33", "11")];
    for (a, b) in reversed {
        assert!(!g.contains_edge(a, b), "{} -> {}", a, b);
    }
}

#[test]
fn test_directed_outgoing_nodes() {
    let g = directed_fixture();
    assert!(g.outgoing_nodes("000").unwrap().is_empty());
    assert!(g.outgoing_nodes("777").unwrap().is_empty());

    let expected = [
        ("22", vec!["33"]),
        ("11", vec!["22", "33"]),
        ("99", vec!["11", "44"]),
        ("44", vec!["55", "99"]),
    ];
    for (v, nodes) in expected {
        assert_eq!(g.outgoing_nodes(v).unwrap(), nodes, "outgoing of {}", v);
    }
}

#[test]
fn test_directed_incoming_nodes() {
    let g = directed_fixture();
    assert!(g.incoming_nodes("000").unwrap().is_empty());

    let expected = [
        ("11", vec!["99"]),
        ("33", vec!["11", "22"]),
        ("99", vec!["44", "88"]),
        ("777", vec!["55"]),
        ("22", vec!["11"]),
        ("44", vec!["33", "99"]),
    ];
    for (v, nodes) in expected {
        assert_eq!(g.incoming_nodes(v).unwrap(), nodes, "incoming of {}", v);
    }
    assert_consistent(&g);
}

#[test]
fn test_directed_remove_edge_keeps_reverse() {
    let mut g = directed_fixture();
    assert!(!g.remove_edge("22", "11").unwrap());
    assert!(g.contains_edge("11", "22"));

    assert!(!g.remove_edge("777", "55").unwrap());
    assert!(g.contains_edge("55", "777"));

    assert!(g.remove_edge("99", "44").unwrap());
    assert!(g.contains_edge("44", "99"));
    assert!(!g.contains_edge("99", "44"));
    assert_eq!(g.incoming_nodes("44").unwrap(), vec!["33"]);
    assert_consistent(&g);
}

#[test]
fn test_directed_remove_edge_idempotent() {
    let mut g = directed_fixture();
    for (a, b) in [("11", "22"), ("88", "99"), ("11", "33")] {
        assert!(g.remove_edge(a, b).unwrap());
        assert!(!g.contains_edge(a, b));
        assert!(!g.remove_edge(a, b).unwrap());
    }
    assert_eq!(g.edge_count(), DIRECTED_EDGES.len() - 3);
}

#[test]
fn test_directed_remove_node_cascades_both_directions() {
    let mut g = directed_fixture();

    assert!(g.remove_node("11"));
    assert!(!g.contains_edge("11", "22"));
    assert!(!g.contains_edge("99", "11"));
    assert_eq!(g.outgoing_nodes("99").unwrap(), vec!["44"]);

    assert!(g.remove_node("99"));
    assert!(!g.contains_edge("88", "99"));
    assert!(!g.contains_edge("44", "99"));
    assert!(!g.contains_edge("99", "44"));
    assert_eq!(g.incoming_nodes("44").unwrap(), vec!["33"]);
    assert_eq!(g.outgoing_nodes("44").unwrap(), vec!["55"]);

    assert!(!g.remove_node("99"));
    assert_consistent(&g);
}

// ==================== Parallel Edges ====================

#[test]
fn test_parallel_edges_kept_and_removed_together() {
    init_logging();
    let mut g: Graph<&str> = Graph::directed();
    g.add_node("a");
    g.add_node("b");
    g.add_edge("a", "b").unwrap();
    g.add_edge("a", "b").unwrap();

    assert_eq!(g.edge_count(), 2);
    assert_eq!(g.outgoing_nodes("a").unwrap(), vec!["b", "b"]);
    assert_eq!(g.incoming_nodes("b").unwrap(), vec!["a", "a"]);
    assert_eq!(g.adjacent_nodes("a").unwrap(), vec!["b"]);

    assert!(g.remove_edge("a", "b").unwrap());
    assert_eq!(g.edge_count(), 0);
    assert!(g.outgoing_nodes("a").unwrap().is_empty());
    assert!(g.incoming_nodes("b").unwrap().is_empty());
}

// ==================== Errors ====================

#[test]
fn test_unknown_nodes_not_found() {
    let mut g = directed_fixture();
    assert!(matches!(g.add_edge("11", "nope"), Err(GraphError::NodeNotFound(_))));
    assert!(matches!(g.add_edge("nope", "11"), Err(GraphError::NodeNotFound(_))));
    assert!(matches!(g.remove_edge("nope", "11"), Err(GraphError::NodeNotFound(_))));
    assert!(matches!(g.incoming_nodes("nope"), Err(GraphError::NodeNotFound(_))));
    assert!(matches!(g.outgoing_nodes("nope"), Err(GraphError::NodeNotFound(_))));
    assert!(matches!(g.adjacent_nodes("nope"), Err(GraphError::NodeNotFound(_))));
    assert!(!g.remove_node("nope"));
    assert_eq!(g.edge_count(), DIRECTED_EDGES.len());
}

#[test]
fn test_not_found_message_names_value() {
    let g = directed_fixture();
    let err = g.outgoing_nodes("nope").unwrap_err();
    assert_eq!(err.to_string(), "Node \"nope\" not found");
}

#[test]
fn test_weighted_rejects_nan_and_missing() {
    init_logging();
    let mut g: Graph<&str> = Graph::new(GraphConfig::directed().weighted());
    g.add_node("11");
    g.add_node("000");

    let err = g.add_weighted_edge("11", "000", f64::NAN).unwrap_err();
    assert!(err.is_weight_error());
    assert!(matches!(g.add_edge("11", "000"), Err(GraphError::MissingWeight)));
    assert_eq!(g.edge_count(), 0);
    assert!(g.outgoing_nodes("11").unwrap().is_empty());
}

#[test]
fn test_weighted_accepts_numbers_and_infinities() {
    init_logging();
    let mut g: Graph<&str> = Graph::new(GraphConfig::directed().weighted());
    g.add_node("11");
    g.add_node("000");

    for w in [0.0, 5.0, 0.5, -1.0, f64::INFINITY, f64::NEG_INFINITY] {
        g.add_weighted_edge("11", "000", w).unwrap();
    }
    assert_eq!(g.edge_count(), 6);
    let weights: Vec<_> = g.edges().into_iter().map(|e| e.weight).collect();
    assert_eq!(weights[4], Some(f64::INFINITY));
    assert_eq!(weights[5], Some(f64::NEG_INFINITY));
}

#[test]
fn test_unweighted_ignores_weight() {
    let mut g = undirected_fixture();
    g.add_weighted_edge("999", "1000", f64::NAN).unwrap();
    assert!(g.contains_edge("1000", "999"));
    assert!(g.edges().iter().all(|e| e.weight.is_none()));
}

// ==================== EdgeStore ====================

#[test]
fn test_edge_store_all_visits_each_record_once() {
    let mut store = EdgeStore::new(false);
    let (a, b, c) = (NodeId::from(0), NodeId::from(1), NodeId::from(2));
    store.add(a, b, Some(1.0));
    store.add(b, c, Some(2.0));
    store.add(b, a, Some(3.0));

    assert_eq!(store.all().count(), 3);
    assert!(store.contains(a, b));
    assert!(store.contains(c, b));
    assert_eq!(store.weights(a, b), vec![Some(1.0), Some(3.0)]);
}
