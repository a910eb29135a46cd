pub mod traits;
pub mod dijkstra;

pub use dijkstra::Dijkstra;
pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
