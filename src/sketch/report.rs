//! Side-by-side evaluation of the sketch pipeline against the exact
//! baseline.
//!
//! Intended for benchmarking, debugging, and CI validation of the sampling
//! heuristic; the textual rendering is illustrative, not a wire format.

use crate::graph::bipartite::Edge;
use crate::graph::partition::PartitionSpec;
use crate::matching::baseline::exact_matching;
use crate::sketch::driver::{SketchConfig, sketch_matching};
use crate::sketch::error::SketchError;
use serde::Serialize;
use std::fmt;
use std::time::{Duration, Instant};

/// Metrics from one comparison run.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    /// Size of the global vertex id space.
    pub vertices: usize,
    /// Number of input edges.
    pub edges: usize,
    /// Completed full-quota sampling rounds.
    pub rounds: usize,
    /// Distinct vertices touched by the accumulated sample.
    pub sampled_vertices: usize,
    /// Matching size over the sampled graph.
    pub approx_size: usize,
    /// Matching size over the full graph.
    pub exact_size: usize,
    /// Wall time of the whole sketch pipeline.
    pub approx_elapsed: Duration,
    /// Wall time of the exact baseline.
    pub exact_elapsed: Duration,
}

/// Runs the sketch pipeline and the exact baseline on the same input,
/// timing each phase.
pub fn compare(
    edges: &[Edge],
    spec: &PartitionSpec,
    cfg: &SketchConfig,
) -> Result<ComparisonReport, SketchError> {
    let start = Instant::now();
    let outcome = sketch_matching(edges, spec, cfg)?;
    let approx_elapsed = start.elapsed();

    let start = Instant::now();
    let exact = exact_matching(edges, spec);
    let exact_elapsed = start.elapsed();

    let report = ComparisonReport {
        vertices: spec.total(),
        edges: edges.len(),
        rounds: outcome.rounds,
        sampled_vertices: outcome.sampled_vertices,
        approx_size: outcome.matching.size(),
        exact_size: exact.size(),
        approx_elapsed,
        exact_elapsed,
    };
    log::info!(
        "matched {}/{} (sketch/exact) over {} edges in {:.3}s + {:.3}s",
        report.approx_size,
        report.exact_size,
        report.edges,
        report.approx_elapsed.as_secs_f64(),
        report.exact_elapsed.as_secs_f64(),
    );
    Ok(report)
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "The graph has {} vertices and {} edges.",
            self.vertices, self.edges
        )?;
        writeln!(f, "Size of the sample: {}", self.sampled_vertices)?;
        writeln!(
            f,
            "Approximate solution: {} ({} rounds, {:.3}s)",
            self.approx_size,
            self.rounds,
            self.approx_elapsed.as_secs_f64()
        )?;
        write!(
            f,
            "Hopcroft-Karp result: {} ({:.3}s)",
            self.exact_size,
            self.exact_elapsed.as_secs_f64()
        )
    }
}
