//! Edges of a periodic net and the per-node neighbor slots that reference them.
//!
//! An [`Edge`] is an unordered node pair plus the boundary-crossing vector
//! seen when walking `node1 → node2`. Edges live in a dense arena inside
//! [`PeriodicGraph`](crate::topology::periodic_graph::PeriodicGraph) and are
//! addressed by [`EdgeId`], assigned in creation order.

use crate::topology::crossing::CrossingVector;
use std::fmt;

/// Dense, stable index of an edge in creation order.
///
/// `EdgeId(k)` is the k-th successfully added edge, so it can index any
/// per-edge bookkeeping array directly.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
#[serde(transparent)]
pub struct EdgeId(usize);

impl EdgeId {
    #[inline]
    pub const fn new(raw: usize) -> Self {
        EdgeId(raw)
    }

    /// Position in the edge arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EdgeId").field(&self.0).finish()
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Classification by boundary-crossing vector.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum EdgeKind {
    /// `B = 0`: the edge stays inside the box.
    Internal,
    /// `B != 0`: the edge wraps at least one periodic boundary.
    Crossing,
}

/// One stored edge.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Edge {
    pub node1: usize,
    pub node2: usize,
    /// Crossing vector for the direction `node1 → node2`.
    pub crossing: CrossingVector,
}

impl Edge {
    #[inline]
    pub fn new(node1: usize, node2: usize, crossing: CrossingVector) -> Self {
        Edge {
            node1,
            node2,
            crossing,
        }
    }

    #[inline]
    pub fn kind(&self) -> EdgeKind {
        if self.crossing.is_zero() {
            EdgeKind::Internal
        } else {
            EdgeKind::Crossing
        }
    }

    #[inline]
    pub fn is_self_loop(&self) -> bool {
        self.node1 == self.node2
    }

    /// Returns the `(node1, node2)` endpoints, dropping the crossing vector.
    #[inline]
    pub fn endpoints(&self) -> (usize, usize) {
        (self.node1, self.node2)
    }
}

/// An occupied adjacency slot: the edge as seen from the owning node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NeighborSlot {
    /// Node at the far end of the edge.
    pub neighbor: usize,
    pub edge: EdgeId,
    /// Crossing vector walking from the owning node to `neighbor`.
    pub crossing: CrossingVector,
}
