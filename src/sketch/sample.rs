//! Reservoir sampling over the edge pool.

use crate::graph::bipartite::Edge;
use rand::Rng;

/// Draws up to `quota` edges uniformly without replacement from `pool` in a
/// single pass.
///
/// The first `quota` edges seed the reservoir; each later edge at 0-based
/// position `i` replaces a uniformly chosen slot with probability
/// `quota / (i + 1)`. A pool smaller than `quota` yields every pool edge, so
/// a short result is the caller's pool-exhaustion signal, not an error.
///
/// The generator is created once per run and threaded through successive
/// calls, which keeps rounds independent.
pub fn reservoir_sample<R: Rng + ?Sized>(pool: &[Edge], quota: usize, rng: &mut R) -> Vec<Edge> {
    let mut reservoir: Vec<Edge> = pool.iter().take(quota).copied().collect();
    if reservoir.len() < quota {
        return reservoir;
    }
    for (i, &edge) in pool.iter().enumerate().skip(quota) {
        let slot = rng.gen_range(0..=i);
        if slot < quota {
            reservoir[slot] = edge;
        }
    }
    reservoir
}
