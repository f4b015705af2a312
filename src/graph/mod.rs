//! Bipartite graph data model: partitioned vertex ids and adjacency storage.

pub mod bipartite;
pub mod partition;

pub use bipartite::{BipartiteGraph, Edge};
pub use partition::{LeftId, PartitionSpec, PartitionedId, RightId};
