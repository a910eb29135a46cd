use dijkstra_sssp::graph::generators::{generate_grid, reference_topology, vertex_name};
use dijkstra_sssp::graph::Graph;
use dijkstra_sssp::{Edge, ShortestPathGraph, Vertex};

fn v(name: &str) -> Vertex {
    Vertex::new(name)
}

fn names(path: &[Vertex]) -> Vec<&str> {
    path.iter().map(Vertex::name).collect()
}

// Checks that a path starts at the source, ends at the target, only uses
// existing edges and adds up to the reported distance
fn assert_valid_path(graph: &ShortestPathGraph, target: &Vertex) {
    let path = graph.path_to(target).expect("reachable vertex should have a path");
    assert_eq!(path.first(), Some(graph.source()), "Path should start at source");
    assert_eq!(path.last(), Some(target), "Path should end at target");

    for pair in path.windows(2) {
        assert!(
            graph.adjacency().has_edge(pair[0].name(), pair[1].name()),
            "Path should only use existing edges"
        );
    }

    let weight = graph.adjacency().path_weight(&path).unwrap();
    let distance = graph.shortest_distance(target).unwrap();
    assert!((weight - distance).abs() < 1e-9, "Path weight should equal distance");
}

#[test]
fn test_reference_topology_distances() {
    let graph = ShortestPathGraph::new(v("A"), reference_topology()).unwrap();

    assert_eq!(graph.shortest_distance(&v("A")), Some(0.0));
    assert_eq!(graph.shortest_distance(&v("B")), Some(1.0));
    assert_eq!(graph.shortest_distance(&v("C")), Some(2.0));
    assert_eq!(graph.shortest_distance(&v("D")), Some(7.0));
    assert_eq!(graph.shortest_distance(&v("E")), Some(10.0));
}

#[test]
fn test_reference_topology_paths() {
    let graph = ShortestPathGraph::new(v("A"), reference_topology()).unwrap();

    assert_eq!(names(&graph.path_to(&v("A")).unwrap()), vec!["A"]);
    assert_eq!(names(&graph.path_to(&v("C")).unwrap()), vec!["A", "B", "C"]);
    assert_eq!(names(&graph.path_to(&v("D")).unwrap()), vec!["A", "B", "C", "D"]);
    assert_eq!(names(&graph.path_to(&v("E")).unwrap()), vec!["A", "E"]);

    for vertex in ["B", "C", "D", "E"] {
        assert_valid_path(&graph, &v(vertex));
    }
}

#[test]
fn test_unknown_vertex_is_not_found() {
    let graph = ShortestPathGraph::new(v("A"), reference_topology()).unwrap();

    assert_eq!(graph.shortest_distance(&v("Z")), None);
    assert_eq!(graph.path_to(&v("Z")), None);
    assert!(!graph.is_reachable(&v("Z")));
}

#[test]
fn test_unreachable_vertex_has_infinite_distance() {
    // Source in the middle: A only reaches it, it reaches C
    let edges = vec![
        Edge::new("A", "B", 2.0),
        Edge::new("B", "C", 1.0),
        Edge::new("D", "A", 1.0),
    ];
    let graph = ShortestPathGraph::new(v("B"), edges).unwrap();

    assert_eq!(graph.shortest_distance(&v("C")), Some(1.0));
    for unreachable in ["A", "D"] {
        assert_eq!(graph.shortest_distance(&v(unreachable)), Some(f64::INFINITY));
        assert_eq!(graph.path_to(&v(unreachable)), None);
    }

    let reachable: Vec<&str> = graph.reachable().map(Vertex::name).collect();
    assert_eq!(reachable, vec!["B", "C"]);
}

#[test]
fn test_source_only_as_edge_target() {
    let edges = vec![Edge::new("A", "B", 3.0)];
    let graph = ShortestPathGraph::new(v("B"), edges).unwrap();

    assert_eq!(graph.shortest_distance(&v("B")), Some(0.0));
    assert_eq!(names(&graph.path_to(&v("B")).unwrap()), vec!["B"]);
    assert_eq!(graph.shortest_distance(&v("A")), Some(f64::INFINITY));
}

#[test]
fn test_parallel_edges_use_lighter_edge() {
    let edges = vec![Edge::new("A", "B", 5.0), Edge::new("A", "B", 2.0)];
    let graph = ShortestPathGraph::new(v("A"), edges).unwrap();

    assert_eq!(graph.shortest_distance(&v("B")), Some(2.0));
    let path = graph.path_to(&v("B")).unwrap();
    assert_eq!(names(&path), vec!["A", "B"]);
    assert_eq!(graph.adjacency().path_weight(&path), Some(2.0));
    assert_eq!(graph.outgoing(&v("A")).len(), 2);
}

#[test]
fn test_self_loops_and_cycles_are_harmless() {
    let edges = vec![
        Edge::new("A", "A", 0.0),
        Edge::new("A", "B", 1.0),
        Edge::new("B", "B", 3.0),
        Edge::new("B", "A", 0.0),
        Edge::new("B", "C", 1.0),
        Edge::new("C", "A", 1.0),
    ];
    let graph = ShortestPathGraph::new(v("A"), edges).unwrap();

    assert_eq!(graph.shortest_distance(&v("A")), Some(0.0));
    assert_eq!(graph.shortest_distance(&v("B")), Some(1.0));
    assert_eq!(graph.shortest_distance(&v("C")), Some(2.0));
    assert_eq!(names(&graph.path_to(&v("C")).unwrap()), vec!["A", "B", "C"]);
}

#[test]
fn test_equal_length_paths_keep_first_relaxation() {
    // A->B->D and A->C->D both weigh 2; B is settled first so it keeps D
    let edges = vec![
        Edge::new("A", "B", 1.0),
        Edge::new("A", "C", 1.0),
        Edge::new("B", "D", 1.0),
        Edge::new("C", "D", 1.0),
    ];
    let graph = ShortestPathGraph::new(v("A"), edges).unwrap();

    assert_eq!(graph.shortest_distance(&v("D")), Some(2.0));
    assert_eq!(names(&graph.path_to(&v("D")).unwrap()), vec!["A", "B", "D"]);
}

#[test]
fn test_zero_and_infinite_weights() {
    let edges = vec![
        Edge::new("A", "B", 0.0),
        Edge::new("B", "C", f64::INFINITY),
    ];
    let graph = ShortestPathGraph::new(v("A"), edges).unwrap();

    assert_eq!(graph.shortest_distance(&v("B")), Some(0.0));
    assert_eq!(graph.shortest_distance(&v("C")), Some(f64::INFINITY));
    assert_eq!(graph.path_to(&v("C")), None);
}

#[test]
fn test_overflowing_path_weight_reads_as_unreachable() {
    let edges = vec![Edge::new("A", "B", f64::MAX), Edge::new("B", "C", f64::MAX)];
    let graph = ShortestPathGraph::new(v("A"), edges).unwrap();

    assert_eq!(graph.shortest_distance(&v("B")), Some(f64::MAX));
    assert_eq!(graph.shortest_distance(&v("C")), Some(f64::INFINITY));
    assert_eq!(graph.path_to(&v("C")), None);
}

#[test]
fn test_queries_are_idempotent() {
    let graph = ShortestPathGraph::new(v("A"), reference_topology()).unwrap();

    for vertex in ["A", "B", "C", "D", "E", "Z"] {
        let first = (graph.shortest_distance(&v(vertex)), graph.path_to(&v(vertex)));
        let second = (graph.shortest_distance(&v(vertex)), graph.path_to(&v(vertex)));
        assert_eq!(first, second);
    }
}

#[test]
fn test_path_finding_grid() {
    let (width, height) = (10, 10);
    let graph = ShortestPathGraph::new(Vertex::new(vertex_name(0)), generate_grid(width, height)).unwrap();

    assert_eq!(graph.vertex_count(), width * height);
    for (vertex, distance) in graph.distances() {
        let idx: usize = vertex.name()[1..].parse().unwrap();
        let manhattan = (idx % width + idx / width) as f64;
        assert_eq!(distance, manhattan, "Grid distance to {} should be Manhattan", vertex);
    }

    let corner = Vertex::new(vertex_name(width * height - 1));
    assert_valid_path(&graph, &corner);
    assert_eq!(graph.path_to(&corner).unwrap().len(), width + height - 1);
}

#[test]
fn test_generic_weight_type() {
    let edges = vec![Edge::new("A", "B", 1.5f32), Edge::new("B", "C", 0.25f32)];
    let graph = ShortestPathGraph::new(v("A"), edges).unwrap();

    assert_eq!(graph.shortest_distance(&v("C")), Some(1.75f32));
}

#[test]
fn test_graph_is_shareable_across_threads() {
    let graph = std::sync::Arc::new(ShortestPathGraph::new(v("A"), reference_topology()).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let graph = graph.clone();
            std::thread::spawn(move || graph.shortest_distance(&Vertex::new("D")))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Some(7.0));
    }
}
