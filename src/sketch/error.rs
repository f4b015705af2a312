//! Sketch pipeline errors.

use thiserror::Error;

/// Errors from the sampling/reduction driver.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SketchError {
    /// A zero quota would meet itself on every draw and never drain the pool.
    #[error("sampling quota must be positive")]
    ZeroQuota,
    /// The round loop hit its configured bound before the pool drained.
    #[error("sampling did not exhaust the pool within {limit} rounds")]
    RoundLimit {
        /// The configured bound that was hit.
        limit: usize,
    },
}
