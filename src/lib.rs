//! Dijkstra SSSP - single-source shortest paths over named vertices
//!
//! A [`ShortestPathGraph`] is built once from a fixed source vertex and a list of
//! weighted directed edges. Construction validates the input and runs Dijkstra's
//! algorithm eagerly; afterwards the graph only answers lookups.
//!
//! ```
//! use dijkstra_sssp::{Edge, ShortestPathGraph, Vertex};
//!
//! let edges = vec![
//!     Edge::new("A", "B", 1.0),
//!     Edge::new("B", "C", 1.0),
//!     Edge::new("A", "C", 3.0),
//! ];
//! let graph = ShortestPathGraph::new(Vertex::new("A"), edges).unwrap();
//!
//! assert_eq!(graph.shortest_distance(&Vertex::new("C")), Some(2.0));
//! assert_eq!(
//!     graph.path_to(&Vertex::new("C")).unwrap(),
//!     vec![Vertex::new("A"), Vertex::new("B"), Vertex::new("C")]
//! );
//! ```

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod io;

pub use algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPathResult};
/// Re-export main types for convenient use
pub use graph::{Edge, ShortestPathGraph, Vertex};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Graph has no edges")]
    EmptyGraph,

    #[error("Source vertex {0} is not an endpoint of any edge")]
    DisconnectedSource(String),

    #[error("Negative edge weight {weight} on edge {from} -> {to}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: f64,
    },

    #[error("Edge weight on {from} -> {to} is not a number")]
    InvalidWeight { from: String, to: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON edge list: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid edge list at line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
