use crate::graph::Edge;
use rand::prelude::*;

/// Name of the `i`-th generated vertex
pub fn vertex_name(i: usize) -> String {
    format!("v{}", i)
}

/// The five-vertex sample network: A->B(1), A->C(3), A->E(10), B->C(1), C->D(5), D->E(4)
pub fn reference_topology() -> Vec<Edge<f64>> {
    vec![
        Edge::new("A", "B", 1.0),
        Edge::new("A", "C", 3.0),
        Edge::new("A", "E", 10.0),
        Edge::new("B", "C", 1.0),
        Edge::new("C", "D", 5.0),
        Edge::new("D", "E", 4.0),
    ]
}

/// Generates a random directed graph over vertices `v0..v{n-1}` with about
/// `edge_factor * n` edges. Self-loops and parallel edges may occur.
pub fn generate_random<R: Rng>(
    n: usize,
    edge_factor: f64,
    max_weight: f64,
    rng: &mut R,
) -> Vec<Edge<f64>> {
    assert!(n > 0, "n must be positive");
    assert!(max_weight > 0.0, "max_weight must be positive");

    let num_edges = ((edge_factor * n as f64) as usize).max(1);
    let mut edges = Vec::with_capacity(num_edges);

    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        let weight = rng.gen_range(0.0..max_weight);
        edges.push(Edge::new(vertex_name(u), vertex_name(v), weight));
    }

    edges
}

/// Generates a `width * height` grid with unit-weight edges in both directions
/// between horizontal and vertical neighbours. Vertex `y * width + x` is `v{y * width + x}`.
pub fn generate_grid(width: usize, height: usize) -> Vec<Edge<f64>> {
    let mut edges = Vec::new();
    let index = |x: usize, y: usize| y * width + x;

    for y in 0..height {
        for x in 0..width {
            let current = vertex_name(index(x, y));
            if x + 1 < width {
                let right = vertex_name(index(x + 1, y));
                edges.push(Edge::new(current.clone(), right.clone(), 1.0));
                edges.push(Edge::new(right, current.clone(), 1.0));
            }
            if y + 1 < height {
                let down = vertex_name(index(x, y + 1));
                edges.push(Edge::new(current.clone(), down.clone(), 1.0));
                edges.push(Edge::new(down, current, 1.0));
            }
        }
    }

    edges
}
