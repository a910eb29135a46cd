use num_traits::Float;
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;

use crate::graph::traits::Graph;
use crate::graph::{Edge, Vertex};

/// Outgoing edges grouped by their `from` vertex.
///
/// Built once from an edge list; edges keep their input order inside each group.
#[derive(Debug, Clone)]
pub struct AdjacencyIndex<W = f64>
where
    W: Float + Debug,
{
    /// Every vertex mentioned by an edge, in order of first appearance
    vertices: Vec<Vertex>,

    /// Membership lookup for `vertices`
    known: HashSet<Vertex>,

    /// Outgoing edges for each vertex: name -> [edge]
    outgoing: HashMap<Vertex, Vec<Edge<W>>>,

    edge_count: usize,
}

impl<W> AdjacencyIndex<W>
where
    W: Float + Debug,
{
    /// Groups `edges` by source vertex and registers every endpoint
    pub fn from_edges(edges: impl IntoIterator<Item = Edge<W>>) -> Self {
        let mut index = AdjacencyIndex {
            vertices: Vec::new(),
            known: HashSet::new(),
            outgoing: HashMap::new(),
            edge_count: 0,
        };

        for edge in edges {
            index.register(edge.from());
            index.register(edge.to());
            index
                .outgoing
                .entry(edge.from().clone())
                .or_default()
                .push(edge);
            index.edge_count += 1;
        }

        index
    }

    fn register(&mut self, vertex: &Vertex) {
        if self.known.insert(vertex.clone()) {
            self.vertices.push(vertex.clone());
        }
    }

    /// Outgoing edges of `vertex` in input order; empty for sinks and unknown names
    pub fn outgoing(&self, vertex: &str) -> &[Edge<W>] {
        self.outgoing.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Sums the lightest edge between each consecutive pair of `path`.
    ///
    /// Returns `None` if some pair is not joined by an edge.
    pub fn path_weight(&self, path: &[Vertex]) -> Option<W> {
        path.windows(2).try_fold(W::zero(), |total, pair| {
            self.get_edge_weight(pair[0].name(), pair[1].name())
                .map(|weight| total + weight)
        })
    }
}

impl<W> Graph<W> for AdjacencyIndex<W>
where
    W: Float + Debug,
{
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &Vertex> + '_> {
        Box::new(self.vertices.iter())
    }

    fn outgoing_edges(&self, vertex: &str) -> Box<dyn Iterator<Item = (&Vertex, W)> + '_> {
        Box::new(
            self.outgoing(vertex)
                .iter()
                .map(|edge| (edge.to(), edge.weight())),
        )
    }

    fn has_vertex(&self, vertex: &str) -> bool {
        self.known.contains(vertex)
    }

    fn has_edge(&self, from: &str, to: &str) -> bool {
        self.outgoing(from).iter().any(|edge| edge.to().name() == to)
    }

    fn get_edge_weight(&self, from: &str, to: &str) -> Option<W> {
        self.outgoing(from)
            .iter()
            .filter(|edge| edge.to().name() == to)
            .map(|edge| edge.weight())
            .fold(None, |lightest, weight| match lightest {
                Some(current) if current <= weight => Some(current),
                _ => Some(weight),
            })
    }
}
