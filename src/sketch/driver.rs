//! The sampling/reduction driver.
//!
//! Each round draws a fixed quota of edges from the shrinking pool, folds
//! them into the accumulated sample adjacency and the approximate matching
//! graph, then prunes the pool to the edges a greedy partial cover of the
//! sample touches. The loop ends when a draw comes back short of quota, and
//! the matching engine runs once over everything accumulated so far.

use crate::graph::bipartite::{BipartiteGraph, Edge};
use crate::graph::partition::PartitionSpec;
use crate::matching::hopcroft_karp::{Matching, maximum_matching};
use crate::sketch::cover::{SampleAdjacency, observe, prune_pool};
use crate::sketch::error::SketchError;
use crate::sketch::sample::reservoir_sample;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

/// Fallback bound on sampling rounds; the pool drains in a handful of rounds
/// whenever the quota exceeds the largest matching the pool can hold.
pub const DEFAULT_MAX_ROUNDS: usize = 64;

/// Configuration for one sketch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SketchConfig {
    /// Edges drawn per sampling round.
    pub quota: usize,
    /// Seed for the run-scoped sampling generator.
    pub rng_seed: u64,
    /// Bound on sampling rounds; exceeding it is reported as
    /// [`SketchError::RoundLimit`] instead of looping on a pool the cover
    /// can no longer shrink.
    pub max_rounds: usize,
}

impl SketchConfig {
    /// A config drawing `quota` edges per round.
    pub fn new(quota: usize, rng_seed: u64) -> Self {
        Self {
            quota,
            rng_seed,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }

    /// A config with the quota scaled off the vertex count, `total * alpha`.
    pub fn scaled(total_vertices: usize, alpha: f64, rng_seed: u64) -> Self {
        Self::new((total_vertices as f64 * alpha) as usize, rng_seed)
    }
}

/// What a sketch run produced.
#[derive(Debug, Clone)]
pub struct SketchOutcome {
    /// Maximum matching of the accumulated sample graph.
    pub matching: Matching,
    /// Distinct vertices touched by accumulated samples.
    pub sampled_vertices: usize,
    /// Completed full-quota rounds.
    pub rounds: usize,
}

/// Runs the sample/accumulate/reduce loop over `edges` and matches the
/// accumulated sample graph.
///
/// The final, short draw is discarded: every round that contributes to the
/// result is a full-quota uniform draw, so the accumulated sample stays
/// homogeneous. The generator is seeded once from `cfg.rng_seed`, making the
/// whole run reproducible.
pub fn sketch_matching(
    edges: &[Edge],
    spec: &PartitionSpec,
    cfg: &SketchConfig,
) -> Result<SketchOutcome, SketchError> {
    if cfg.quota == 0 {
        return Err(SketchError::ZeroQuota);
    }
    let mut rng = SmallRng::seed_from_u64(cfg.rng_seed);
    let mut pool: Vec<Edge> = edges.to_vec();
    let mut sample = SampleAdjacency::default();
    let mut graph = BipartiteGraph::new(spec.left_count(), spec.right_count());

    let mut rounds = 0;
    let mut exhausted = false;
    while rounds < cfg.max_rounds {
        let drawn = reservoir_sample(&pool, cfg.quota, &mut rng);
        if drawn.len() < cfg.quota {
            // Pool exhausted; drop the partial draw so only full-quota
            // rounds contribute.
            exhausted = true;
            break;
        }
        for &(u, v) in &drawn {
            observe(&mut sample, (u, v));
            graph.add_edge(u, v);
        }
        prune_pool(&sample, &mut pool);
        rounds += 1;
        log::debug!(
            "sketch round {rounds}: drew {} edges, pool down to {}",
            drawn.len(),
            pool.len()
        );
    }
    if !exhausted {
        return Err(SketchError::RoundLimit {
            limit: cfg.max_rounds,
        });
    }

    Ok(SketchOutcome {
        matching: maximum_matching(&graph),
        sampled_vertices: sample.len(),
        rounds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::partition::{LeftId, RightId};

    fn edge(u: usize, v: usize) -> Edge {
        (LeftId::new(u), RightId::new(v))
    }

    fn k22() -> Vec<Edge> {
        vec![edge(0, 0), edge(0, 1), edge(1, 0), edge(1, 1)]
    }

    #[test]
    fn zero_quota_is_rejected() {
        let spec = PartitionSpec::halved(4).unwrap();
        let err = sketch_matching(&k22(), &spec, &SketchConfig::new(0, 1)).unwrap_err();
        assert_eq!(err, SketchError::ZeroQuota);
    }

    #[test]
    fn quota_above_pool_finishes_without_rounds() {
        // Three edges, quota five: the very first draw is short, so the run
        // ends with nothing accumulated.
        let spec = PartitionSpec::halved(4).unwrap();
        let edges = vec![edge(0, 0), edge(0, 1), edge(1, 1)];
        let outcome = sketch_matching(&edges, &spec, &SketchConfig::new(5, 1)).unwrap();
        assert_eq!(outcome.rounds, 0);
        assert_eq!(outcome.sampled_vertices, 0);
        assert_eq!(outcome.matching.size(), 0);
    }

    #[test]
    fn quota_equal_to_pool_accumulates_everything() {
        // Round one draws all four edges; the cover prunes the pool to a
        // matching smaller than the quota, so round two's draw is short.
        let spec = PartitionSpec::halved(4).unwrap();
        let outcome = sketch_matching(&k22(), &spec, &SketchConfig::new(4, 1)).unwrap();
        assert_eq!(outcome.rounds, 1);
        assert_eq!(outcome.sampled_vertices, 4);
        assert_eq!(outcome.matching.size(), 2);
        assert!(outcome.matching.is_consistent());
    }

    #[test]
    fn fixed_seed_reproduces_the_run() {
        // Quota above min(m, n): the pruned pool is a matching, so it can
        // never satisfy the next draw and the run always terminates.
        let spec = PartitionSpec::halved(8).unwrap();
        let edges: Vec<Edge> = (0..4)
            .flat_map(|u| (0..4).map(move |v| edge(u, v)))
            .collect();
        let cfg = SketchConfig::new(5, 99);
        let a = sketch_matching(&edges, &spec, &cfg).unwrap();
        let b = sketch_matching(&edges, &spec, &cfg).unwrap();
        assert_eq!(a.rounds, b.rounds);
        assert_eq!(a.sampled_vertices, b.sampled_vertices);
        assert_eq!(a.matching.size(), b.matching.size());
    }

    #[test]
    fn round_limit_surfaces_instead_of_spinning() {
        // Two vertex-disjoint edges are their own cover, so a quota of two
        // redraws the same pool forever; the bound turns that into an error.
        let spec = PartitionSpec::halved(4).unwrap();
        let edges = vec![edge(0, 0), edge(1, 1)];
        let mut cfg = SketchConfig::new(2, 5);
        cfg.max_rounds = 8;
        let err = sketch_matching(&edges, &spec, &cfg).unwrap_err();
        assert_eq!(err, SketchError::RoundLimit { limit: 8 });
    }
}
