use dijkstra_sssp::graph::generators::reference_topology;
use dijkstra_sssp::io::load_edges;
use dijkstra_sssp::{ShortestPathGraph, Vertex};
use std::env;
use std::path::PathBuf;

/// Command line configuration for the driver
#[derive(Debug, Clone)]
struct DriverConfig {
    /// Edge list to load; the built-in sample network when absent
    edge_file: Option<PathBuf>,
    /// Source vertex name
    source: String,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            edge_file: None,
            source: "A".to_string(),
        }
    }
}

impl DriverConfig {
    /// Usage: `sssp [EDGE_FILE] [SOURCE]`
    fn from_args(mut args: impl Iterator<Item = String>) -> Self {
        let mut config = Self::default();
        if let Some(path) = args.next() {
            config.edge_file = Some(PathBuf::from(path));
        }
        if let Some(source) = args.next() {
            config.source = source;
        }
        config
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let config = DriverConfig::from_args(env::args().skip(1));

    let edges = match &config.edge_file {
        Some(path) => load_edges(path)?,
        None => reference_topology(),
    };
    let source = Vertex::new(config.source);
    let graph = ShortestPathGraph::new(source, edges)?;

    println!(
        "Shortest paths from {} ({} vertices, {} edges)",
        graph.source(),
        graph.vertex_count(),
        graph.edge_count()
    );

    let mut vertices: Vec<&Vertex> = graph.vertices().collect();
    vertices.sort();

    for vertex in vertices {
        match graph.path_to(vertex) {
            Some(path) => {
                let route: Vec<&str> = path.iter().map(Vertex::name).collect();
                let distance = graph.shortest_distance(vertex).unwrap_or(f64::INFINITY);
                println!("  {}: distance = {}, path = {}", vertex, distance, route.join(" -> "));
            }
            None => println!("  {}: unreachable", vertex),
        }
    }

    Ok(())
}
