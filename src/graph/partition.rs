//! Partitioned vertex identifiers: strong, zero-cost handles for the two
//! sides of a bipartite graph.
//!
//! A bipartite instance lives in a dense global id space `[0, total)` that is
//! split at a fixed offset into a left partition `[0, m)` and a right
//! partition `[m, m+n)`. Everything downstream of the split works with
//! local indices wrapped in [`LeftId`] / [`RightId`], so the offset
//! subtraction happens in exactly one validated place: [`PartitionSpec`].
//!
//! This module provides:
//! - Transparent [`LeftId`] and [`RightId`] newtypes for zero-cost local
//!   indices with side information in the type.
//! - [`PartitionedId`], the tagged union of the two, for contexts that must
//!   key vertices of either side (the accumulated sample adjacency).
//! - [`PartitionSpec`], the validated global-to-local translation.

use crate::match_error::MatchError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Local index of a vertex in the left partition.
///
/// # Memory layout
/// `repr(transparent)`: same ABI and alignment as `usize`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(transparent)]
pub struct LeftId(usize);

/// Local index of a vertex in the right partition.
///
/// # Memory layout
/// `repr(transparent)`: same ABI and alignment as `usize`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(transparent)]
pub struct RightId(usize);

impl LeftId {
    /// Wraps a left-local index.
    #[inline]
    pub const fn new(index: usize) -> Self {
        LeftId(index)
    }

    /// Returns the local index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl RightId {
    /// Wraps a right-local index.
    #[inline]
    pub const fn new(index: usize) -> Self {
        RightId(index)
    }

    /// Returns the local index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for LeftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LeftId").field(&self.0).finish()
    }
}

impl fmt::Display for LeftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for RightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RightId").field(&self.0).finish()
    }
}

impl fmt::Display for RightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A vertex of either side, with its side carried in the tag.
///
/// Ordering is derived: all left vertices sort before all right vertices,
/// each side ordered by local index. Scans over mixed-side key sets rely on
/// this for deterministic iteration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PartitionedId {
    /// A vertex in the left partition.
    Left(LeftId),
    /// A vertex in the right partition.
    Right(RightId),
}

/// The fixed split of a dense global id space into left and right partitions.
///
/// The offset equals the left partition size: globals `[0, m)` are left,
/// `[m, m+n)` are right. All offset arithmetic in the crate goes through
/// [`PartitionSpec::split`] and [`PartitionSpec::global_of`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionSpec {
    left_count: usize,
    right_count: usize,
}

impl PartitionSpec {
    /// A split with `left_count` left vertices and `right_count` right ones.
    #[inline]
    pub const fn new(left_count: usize, right_count: usize) -> Self {
        Self {
            left_count,
            right_count,
        }
    }

    /// Splits an even global id space in half, as produced by bipartite
    /// doubling (see [`crate::io::edge_list::bipartite_double`]).
    pub fn halved(total: usize) -> Result<Self, MatchError> {
        if total % 2 != 0 {
            return Err(MatchError::UnevenSplit(total));
        }
        Ok(Self::new(total / 2, total / 2))
    }

    /// Number of vertices in the left partition.
    #[inline]
    pub const fn left_count(&self) -> usize {
        self.left_count
    }

    /// Number of vertices in the right partition.
    #[inline]
    pub const fn right_count(&self) -> usize {
        self.right_count
    }

    /// Size of the global id space.
    #[inline]
    pub const fn total(&self) -> usize {
        self.left_count + self.right_count
    }

    /// The global id at which the right partition starts.
    #[inline]
    pub const fn offset(&self) -> usize {
        self.left_count
    }

    /// Resolves a global id to its side and local index.
    pub fn split(&self, global: usize) -> Result<PartitionedId, MatchError> {
        if global < self.left_count {
            Ok(PartitionedId::Left(LeftId::new(global)))
        } else if global < self.total() {
            Ok(PartitionedId::Right(RightId::new(global - self.left_count)))
        } else {
            Err(MatchError::VertexOutOfRange {
                id: global,
                total: self.total(),
            })
        }
    }

    /// Resolves a global `(u, v)` pair to a typed left-to-right edge.
    ///
    /// `u` must resolve to the left partition and `v` to the right.
    pub fn split_edge(&self, u: usize, v: usize) -> Result<(LeftId, RightId), MatchError> {
        match (self.split(u)?, self.split(v)?) {
            (PartitionedId::Left(l), PartitionedId::Right(r)) => Ok((l, r)),
            (PartitionedId::Right(_), _) => Err(MatchError::ExpectedLeftVertex(u)),
            (_, PartitionedId::Left(_)) => Err(MatchError::ExpectedRightVertex(v)),
        }
    }

    /// Resolves a whole global edge list; fails on the first invalid pair.
    pub fn split_edges(&self, pairs: &[(usize, usize)]) -> Result<Vec<(LeftId, RightId)>, MatchError> {
        pairs.iter().map(|&(u, v)| self.split_edge(u, v)).collect()
    }

    /// Maps a partitioned id back to its global id.
    #[inline]
    pub fn global_of(&self, id: PartitionedId) -> usize {
        match id {
            PartitionedId::Left(u) => u.index(),
            PartitionedId::Right(v) => self.left_count + v.index(),
        }
    }
}



#[cfg(test)]
mod serde_tests {
    use super::*;

    #[test]
    fn id_json_roundtrip() {
        let v = RightId::new(123);
        let s = serde_json::to_string(&v).unwrap();
        let v2: RightId = serde_json::from_str(&s).unwrap();
        assert_eq!(v2, v);
    }

    #[test]
    fn spec_json_roundtrip() {
        let spec = PartitionSpec::new(10, 12);
        let s = serde_json::to_string(&spec).unwrap();
        let spec2: PartitionSpec = serde_json::from_str(&s).unwrap();
        assert_eq!(spec2, spec);
    }
}
