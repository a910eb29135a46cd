use log::debug;
use num_traits::Float;
use std::fmt::Debug;

use crate::algorithm::{Dijkstra, ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{AdjacencyIndex, Edge, Graph, Vertex};
use crate::{Error, Result};

/// Shortest paths from a fixed source, computed once at construction.
///
/// The graph cannot be changed after [`ShortestPathGraph::new`] returns; every
/// query is a lookup into the precomputed distances and predecessors.
#[derive(Debug, Clone)]
pub struct ShortestPathGraph<W = f64>
where
    W: Float + Debug,
{
    adjacency: AdjacencyIndex<W>,
    result: ShortestPathResult<W>,
}

impl<W> ShortestPathGraph<W>
where
    W: Float + Debug,
{
    /// Validates `edges` and runs Dijkstra's algorithm from `source`.
    ///
    /// # Errors
    ///
    /// * [`Error::EmptyGraph`] if `edges` is empty
    /// * [`Error::InvalidWeight`] / [`Error::NegativeWeight`] for the first edge
    ///   whose weight is NaN or below zero
    /// * [`Error::DisconnectedSource`] if `source` is not an endpoint of any edge
    pub fn new(source: Vertex, edges: impl IntoIterator<Item = Edge<W>>) -> Result<Self> {
        let edges: Vec<Edge<W>> = edges.into_iter().collect();
        if edges.is_empty() {
            return Err(Error::EmptyGraph);
        }
        for edge in &edges {
            edge.validate()?;
        }

        let adjacency = AdjacencyIndex::from_edges(edges);
        if !adjacency.has_vertex(source.name()) {
            return Err(Error::DisconnectedSource(source.name().to_string()));
        }

        let result = Dijkstra::new().compute_shortest_paths(&adjacency, &source)?;
        debug!(
            "Built shortest path graph from {} ({} vertices, {} edges)",
            source,
            adjacency.vertex_count(),
            adjacency.edge_count()
        );

        Ok(ShortestPathGraph { adjacency, result })
    }

    /// The fixed source vertex
    pub fn source(&self) -> &Vertex {
        &self.result.source
    }

    /// Shortest distance from the source to `vertex`.
    ///
    /// Returns `None` if `vertex` never appeared in an edge, and `W::infinity()`
    /// if it is part of the graph but unreachable. A path whose summed weight
    /// overflows `W` is indistinguishable from no path and also reports infinity.
    pub fn shortest_distance(&self, vertex: &Vertex) -> Option<W> {
        self.result.distance(vertex.name())
    }

    /// The vertices of a shortest path from the source to `vertex`, source first.
    ///
    /// Returns `None` if `vertex` is unreachable or unknown.
    pub fn path_to(&self, vertex: &Vertex) -> Option<Vec<Vertex>> {
        self.result.path_to(vertex.name())
    }

    /// Returns true if `vertex` has a finite distance from the source
    pub fn is_reachable(&self, vertex: &Vertex) -> bool {
        self.shortest_distance(vertex)
            .map_or(false, |distance| distance.is_finite())
    }

    /// Every vertex mentioned by an edge, in order of first appearance
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.adjacency.vertices()
    }

    /// Vertices reachable from the source, in order of first appearance
    pub fn reachable(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.vertices().filter(move |vertex| self.is_reachable(vertex))
    }

    /// `(vertex, distance)` for every vertex, in order of first appearance
    pub fn distances(&self) -> impl Iterator<Item = (&Vertex, W)> + '_ {
        self.vertices().map(move |vertex| {
            let distance = self.result.distance(vertex.name()).unwrap_or_else(W::infinity);
            (vertex, distance)
        })
    }

    /// Outgoing edges of `vertex` in input order
    pub fn outgoing(&self, vertex: &Vertex) -> &[Edge<W>] {
        self.adjacency.outgoing(vertex.name())
    }

    /// Number of vertices mentioned by any edge
    pub fn vertex_count(&self) -> usize {
        self.adjacency.vertex_count()
    }

    /// Number of edges, parallel edges included
    pub fn edge_count(&self) -> usize {
        self.adjacency.edge_count()
    }

    /// The adjacency index the distances were computed on
    pub fn adjacency(&self) -> &AdjacencyIndex<W> {
        &self.adjacency
    }
}
