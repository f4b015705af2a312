//! # bimatch
//!
//! bimatch computes maximum matchings in bipartite graphs two ways: exactly,
//! with Hopcroft-Karp, and approximately, by repeatedly reservoir-sampling a
//! shrinking edge pool and matching the accumulated sample. The crate exists
//! to compare the two empirically on large graphs; [`sketch::compare`] runs
//! both on the same input and reports sizes and per-phase wall time.
//!
//! ## Features
//! - Strong-typed partitioned vertex ids ([`graph::LeftId`],
//!   [`graph::RightId`]) with a single validated global-to-local split
//! - Hopcroft-Karp with BFS layering and iterative blocking-flow augmentation
//! - Reservoir sampling and greedy partial-cover pool reduction for the
//!   sketch pipeline
//! - Edge-list file I/O with dense remapping and bipartite doubling
//!
//! ## Determinism
//!
//! All randomized decisions use a `SmallRng` seeded from configuration
//! ([`sketch::SketchConfig::rng_seed`]), seeded once per run, so runs are
//! reproducible. Unit tests fix seeds explicitly to ensure deterministic
//! behavior.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bimatch::prelude::*;
//!
//! let raw = read_edge_list(std::fs::File::open("graph.txt")?)?;
//! let (dense, n) = densify(&raw);
//! let doubled = bipartite_double(&dense, n);
//! let spec = PartitionSpec::halved(2 * n)?;
//! let edges = spec.split_edges(&doubled)?;
//! let report = compare(&edges, &spec, &SketchConfig::scaled(2 * n, 1.5, 42))?;
//! println!("{report}");
//! ```

pub mod graph;
pub mod io;
pub mod match_error;
pub mod matching;
pub mod sketch;

pub use match_error::MatchError;

/// A convenient prelude to import the most-used types and entry points:
pub mod prelude {
    pub use crate::graph::bipartite::{BipartiteGraph, Edge};
    pub use crate::graph::partition::{LeftId, PartitionSpec, PartitionedId, RightId};
    pub use crate::io::edge_list::{bipartite_double, densify, read_edge_list, write_edge_list};
    pub use crate::match_error::MatchError;
    pub use crate::matching::{Matching, exact_matching, maximum_matching};
    pub use crate::sketch::{
        ComparisonReport, SketchConfig, SketchError, SketchOutcome, compare, sketch_matching,
    };
}
