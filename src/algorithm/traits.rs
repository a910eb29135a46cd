use log::warn;
use num_traits::Float;
use std::collections::HashMap;
use std::fmt::Debug;

use crate::graph::{Graph, Vertex};
use crate::Result;

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W>
where
    W: Float + Debug,
{
    /// Distances from source to each vertex; `W::infinity()` when unreachable
    pub distances: HashMap<Vertex, W>,

    /// Predecessor of each reached non-source vertex in the shortest path tree
    pub predecessors: HashMap<Vertex, Vertex>,

    /// Source vertex
    pub source: Vertex,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Debug,
{
    /// Distance to `target`, or `None` if the vertex was never part of the graph
    pub fn distance(&self, target: &str) -> Option<W> {
        self.distances.get(target).copied()
    }

    /// Walks the predecessor chain back from `target` and returns the path source-first.
    ///
    /// Returns `None` for unreachable or unknown vertices.
    pub fn path_to(&self, target: &str) -> Option<Vec<Vertex>> {
        if target == self.source.name() {
            return Some(vec![self.source.clone()]);
        }

        let mut current = self.predecessors.get_key_value(target)?.0;
        let mut path = vec![current.clone()];

        while current != &self.source {
            current = match self.predecessors.get(current) {
                Some(pred) => pred,
                None => {
                    warn!("Predecessor chain for {} stops at {} before the source", target, current);
                    return None;
                }
            };
            path.push(current.clone());

            // A chain longer than the tree means the predecessor links are corrupt
            if path.len() > self.predecessors.len() + 1 {
                warn!("Predecessor chain for {} does not reach the source", target);
                return None;
            }
        }

        path.reverse();
        Some(path)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Debug,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: &Vertex) -> Result<ShortestPathResult<W>>;
}
