use super::*;
use crate::graph::test_support::{build, edge_names, node};

fn names(arena: &Arena, nodes: &[NodeId]) -> Vec<String> {
    nodes
        .iter()
        .map(|n| arena.node_name(*n).to_string())
        .collect()
}

/// A -> B directly, and A -> C -> B as a parallel route, then B -> D.
fn diamond(arena: &mut Arena) -> HyperGraph {
    build(
        arena,
        &[
            ("e1", 0.0, &["A"], &["B"]),
            ("e2", 0.0, &["A"], &["C"]),
            ("e3", 0.0, &["C"], &["B"]),
            ("e4", 0.0, &["B"], &["D"]),
        ],
    )
}

#[test]
fn test_reachable_marks_on_pop() {
    let mut arena = Arena::new();
    let graph = diamond(&mut arena);
    let view = GraphView::new(&arena, &graph);

    // C is pushed last so it is popped first; B is pushed twice
    let order = reachable(&view, node(&graph, "A"));
    assert_eq!(names(&arena, &order), vec!["A", "C", "B", "D"]);
}

#[test]
fn test_discover_marks_on_push() {
    let mut arena = Arena::new();
    let graph = diamond(&mut arena);
    let view = GraphView::new(&arena, &graph);

    let discovery = discover(&view, node(&graph, "A"));
    assert_eq!(names(&arena, &discovery.visited), vec!["B", "C", "D"]);

    // B keeps its first discovery through e1 even though C -> B is
    // expanded before B itself
    let b = discovery.predecessors["B"];
    assert_eq!(arena.edge(b.edge).name(), "e1");
    assert_eq!(arena.node_name(b.predecessor), "A");
    assert!(!discovery.contains("A"));
}

#[test]
fn test_get_path_prefers_first_discovery() {
    let mut arena = Arena::new();
    let graph = diamond(&mut arena);
    let a = node(&graph, "A");
    let d = node(&graph, "D");

    let path = get_path(&mut arena, &graph, a, d);
    assert_eq!(edge_names(&arena, &path), vec!["e1", "e4"]);
    assert_eq!(names(&arena, path.nodes()), vec!["A", "B", "D"]);
}

#[test]
fn test_get_path_uses_graph_edge_order() {
    let mut arena = Arena::new();
    // Edge list order differs from walk order
    let graph = build(
        &mut arena,
        &[
            ("late", 0.0, &["M"], &["Z"]),
            ("early", 0.0, &["A"], &["M"]),
        ],
    );
    let path = get_path(&mut arena, &graph, node(&graph, "A"), node(&graph, "Z"));
    assert_eq!(edge_names(&arena, &path), vec!["late", "early"]);
    assert_eq!(names(&arena, path.nodes()), vec!["M", "Z", "A"]);
}

#[test]
fn test_path_exists_and_unreachable_target() {
    let mut arena = Arena::new();
    let graph = build(
        &mut arena,
        &[
            ("e1", 0.0, &["A"], &["B"]),
            ("e2", 0.0, &["C"], &["D"]),
        ],
    );
    let view = GraphView::new(&arena, &graph);
    assert!(path_exists(&view, node(&graph, "A"), node(&graph, "B")));
    assert!(!path_exists(&view, node(&graph, "A"), node(&graph, "D")));
    // Edges are directed
    assert!(!path_exists(&view, node(&graph, "B"), node(&graph, "A")));

    let a = node(&graph, "A");
    let d = node(&graph, "D");
    assert!(get_path(&mut arena, &graph, a, d).is_empty());
}

#[test]
fn test_path_exists_to_self() {
    let mut arena = Arena::new();
    let graph = build(&mut arena, &[("e1", 0.0, &["A"], &["B"])]);
    let view = GraphView::new(&arena, &graph);
    let b = node(&graph, "B");
    assert!(path_exists(&view, b, b));
}

#[test]
fn test_get_path_same_node_is_empty_even_with_cycle() {
    let mut arena = Arena::new();
    let graph = build(
        &mut arena,
        &[
            ("out", 0.0, &["S"], &["X"]),
            ("back", 0.0, &["X"], &["S"]),
        ],
    );
    let s = node(&graph, "S");
    {
        let view = GraphView::new(&arena, &graph);
        let discovery = discover(&view, s);
        assert!(discovery.contains("S"));
    }
    assert!(get_path(&mut arena, &graph, s, s).is_empty());
}

#[test]
fn test_multi_target_edge_reaches_every_product() {
    let mut arena = Arena::new();
    let graph = build(
        &mut arena,
        &[
            ("split", 0.0, &["glucose"], &["pyruvate", "atp"]),
            ("use", 0.0, &["atp"], &["adp"]),
        ],
    );
    let glucose = node(&graph, "glucose");
    let adp = node(&graph, "adp");
    let path = get_path(&mut arena, &graph, glucose, adp);
    assert_eq!(edge_names(&arena, &path), vec!["split", "use"]);
}

#[test]
fn test_empty_endpoint_edge_is_inert() {
    let mut arena = Arena::new();
    let graph = build(
        &mut arena,
        &[
            ("void", 0.0, &[], &[]),
            ("e1", 0.0, &["A"], &["B"]),
        ],
    );
    let view = GraphView::new(&arena, &graph);
    let order = reachable(&view, node(&graph, "A"));
    assert_eq!(names(&arena, &order), vec!["A", "B"]);
}
