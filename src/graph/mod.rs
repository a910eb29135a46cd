pub mod adjacency;
pub mod edge;
pub mod generators;
pub mod shortest_path;
pub mod traits;
pub mod vertex;

pub use adjacency::AdjacencyIndex;
pub use edge::Edge;
pub use shortest_path::ShortestPathGraph;
pub use traits::Graph;
pub use vertex::Vertex;
