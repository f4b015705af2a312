//! Exact baseline over the full edge list.

use crate::graph::bipartite::{BipartiteGraph, Edge};
use crate::graph::partition::PartitionSpec;
use crate::matching::hopcroft_karp::{Matching, maximum_matching};

/// Builds one graph from the complete edge list and matches it exactly.
///
/// This is the reference the sketch pipeline is compared against; the two
/// share nothing beyond the edge slice and the partition split.
pub fn exact_matching(edges: &[Edge], spec: &PartitionSpec) -> Matching {
    let graph = BipartiteGraph::from_edges(
        spec.left_count(),
        spec.right_count(),
        edges.iter().copied(),
    );
    maximum_matching(&graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::partition::{LeftId, RightId};

    #[test]
    fn baseline_matches_complete_graph() {
        let spec = PartitionSpec::halved(4).unwrap();
        let edges: Vec<Edge> = (0..2)
            .flat_map(|u| (0..2).map(move |v| (LeftId::new(u), RightId::new(v))))
            .collect();
        assert_eq!(exact_matching(&edges, &spec).size(), 2);
    }
}
