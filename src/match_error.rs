//! MatchError: unified error type for bimatch public APIs
//!
//! This error type covers the validated boundaries of the crate: the
//! global-to-local vertex partition split and edge-list file I/O. The matching
//! engine itself raises no errors; it is a pure computation over
//! caller-validated input.

use thiserror::Error;

/// Unified error type for bimatch boundary operations.
#[derive(Debug, Error)]
pub enum MatchError {
    /// A global vertex id fell outside the partitioned id space.
    #[error("vertex id {id} out of range for a partition of {total} vertices")]
    VertexOutOfRange {
        /// The offending global id.
        id: usize,
        /// Total size of the global id space.
        total: usize,
    },
    /// An edge endpoint expected in the left partition resolved to the right.
    #[error("edge endpoint {0} is not in the left partition")]
    ExpectedLeftVertex(usize),
    /// An edge endpoint expected in the right partition resolved to the left.
    #[error("edge endpoint {0} is not in the right partition")]
    ExpectedRightVertex(usize),
    /// An odd global id space cannot be halved into equal partitions.
    #[error("vertex count {0} cannot be split into two equal partitions")]
    UnevenSplit(usize),
    /// A malformed line in an edge-list file.
    #[error("malformed edge list at line {line}: {reason}")]
    EdgeListParse {
        /// 1-based line number of the offending line.
        line: usize,
        /// What went wrong on that line.
        reason: String,
    },
    /// An underlying I/O failure while reading or writing an edge list.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
