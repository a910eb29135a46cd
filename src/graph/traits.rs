use num_traits::Float;
use std::fmt::Debug;

use crate::graph::Vertex;

/// Trait representing a read-only weighted directed graph over named vertices
pub trait Graph<W>: Debug
where
    W: Float + Debug,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph, parallel edges included
    fn edge_count(&self) -> usize;

    /// Returns an iterator over every vertex in the graph
    fn vertices(&self) -> Box<dyn Iterator<Item = &Vertex> + '_>;

    /// Returns an iterator over the outgoing edges from a vertex as `(target, weight)`
    fn outgoing_edges(&self, vertex: &str) -> Box<dyn Iterator<Item = (&Vertex, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: &str) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: &str, to: &str) -> bool;

    /// Gets the lightest weight among the edges `from -> to`, if any exist
    fn get_edge_weight(&self, from: &str, to: &str) -> Option<W>;
}
