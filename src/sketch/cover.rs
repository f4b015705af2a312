//! Greedy partial vertex cover over the accumulated sample, used to prune
//! the edge pool between sampling rounds.

use crate::graph::bipartite::Edge;
use crate::graph::partition::PartitionedId;
use hashbrown::{HashMap, HashSet};
use itertools::Itertools;
use std::collections::BTreeSet;

/// Undirected adjacency observed across all completed sampling rounds.
///
/// Grows monotonically; an edge `(u, v)` inserts each endpoint into the
/// other's neighbor set. `BTreeSet` values and sorted key scans keep the
/// reducer deterministic for a fixed sampling seed.
pub type SampleAdjacency = HashMap<PartitionedId, BTreeSet<PartitionedId>>;

/// Records a sampled edge in both directions of the adjacency.
pub fn observe(sample: &mut SampleAdjacency, (u, v): Edge) {
    let u = PartitionedId::Left(u);
    let v = PartitionedId::Right(v);
    sample.entry(u).or_default().insert(v);
    sample.entry(v).or_default().insert(u);
}

/// Prunes `pool` to the edges incident to a greedily built partial cover of
/// `sample`.
///
/// Scanning vertices in sorted order: a vertex outside the cover with a
/// neighbor outside the cover puts both endpoints into the cover and keeps
/// the first pool edge realizing that adjacency. Everything else is dropped,
/// preserving the survivors' relative order. An adjacency whose edge already
/// left the pool in an earlier round extends the cover but keeps nothing.
///
/// The result is never larger than the input, and the survivors are pairwise
/// vertex-disjoint, which is what drives the sampling loop to exhaustion.
pub fn prune_pool(sample: &SampleAdjacency, pool: &mut Vec<Edge>) {
    let mut in_cover: HashSet<PartitionedId> = HashSet::new();
    let mut keep: HashSet<usize> = HashSet::new();
    for u in sample.keys().copied().sorted() {
        if in_cover.contains(&u) {
            continue;
        }
        for &v in &sample[&u] {
            if in_cover.contains(&v) {
                continue;
            }
            in_cover.insert(u);
            in_cover.insert(v);
            if let Some(pos) = locate(pool, u, v) {
                keep.insert(pos);
            }
            break;
        }
    }
    let mut pos = 0;
    pool.retain(|_| {
        let kept = keep.contains(&pos);
        pos += 1;
        kept
    });
}

/// First pool position holding the edge between `u` and `v`, whichever side
/// the scan reached it from.
fn locate(pool: &[Edge], u: PartitionedId, v: PartitionedId) -> Option<usize> {
    let (l, r) = match (u, v) {
        (PartitionedId::Left(l), PartitionedId::Right(r)) => (l, r),
        (PartitionedId::Right(r), PartitionedId::Left(l)) => (l, r),
        // Sampled adjacencies always cross the partition.
        _ => return None,
    };
    pool.iter().position(|&(a, b)| a == l && b == r)
}
