use log::{debug, trace};
use num_traits::Float;
use ordered_float::OrderedFloat;
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::BinaryHeapWrapper;
use crate::graph::{Graph, Vertex};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm with lazy deletion.
///
/// An improved distance pushes a new queue entry instead of updating the old one.
/// Entries popped for an already settled vertex are skipped. A predecessor is only
/// replaced on a strict improvement, so among equal-length paths the first one
/// relaxed wins.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Debug,
    G: Graph<W>,
{
    fn compute_shortest_paths(&self, graph: &G, source: &Vertex) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source.name()) {
            return Err(Error::DisconnectedSource(source.name().to_string()));
        }

        let mut distances: HashMap<Vertex, W> = graph
            .vertices()
            .map(|vertex| (vertex.clone(), W::infinity()))
            .collect();
        let mut predecessors: HashMap<Vertex, Vertex> = HashMap::new();
        let mut visited: HashSet<&str> = HashSet::with_capacity(graph.vertex_count());

        distances.insert(source.clone(), W::zero());

        let mut queue = BinaryHeapWrapper::new();
        queue.push(source, OrderedFloat(W::zero()));

        while let Some((u, OrderedFloat(dist_u))) = queue.pop() {
            // Stale entry left behind by a later improvement
            if !visited.insert(u.name()) {
                continue;
            }
            trace!("Settled {} at distance {:?}", u, dist_u);

            for (v, weight) in graph.outgoing_edges(u.name()) {
                if visited.contains(v.name()) {
                    continue;
                }

                let new_dist = dist_u + weight;
                let current = distances.get(v.name()).copied().unwrap_or_else(W::infinity);

                if new_dist < current {
                    distances.insert(v.clone(), new_dist);
                    predecessors.insert(v.clone(), u.clone());
                    queue.push(v, OrderedFloat(new_dist));
                }
            }
        }

        debug!(
            "Dijkstra from {} settled {} of {} vertices",
            source,
            visited.len(),
            graph.vertex_count()
        );

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source: source.clone(),
        })
    }
}
