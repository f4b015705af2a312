//! Exact maximum-matching engine and the full-edge-list baseline.

pub mod baseline;
pub mod hopcroft_karp;

pub use baseline::exact_matching;
pub use hopcroft_karp::{Matching, maximum_matching};
