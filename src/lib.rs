#![cfg_attr(docsrs, feature(doc_cfg))]
//! # periodic-net
//!
//! periodic-net determines whether a graph embedded in a periodic box (a
//! d-dimensional torus) percolates: whether it contains cycles that return to
//! their starting node with a nonzero net number of boundary crossings. It is
//! the topology engine for analysing simulated molecular networks (polymer
//! gels and similar) under periodic boundary conditions.
//!
//! ## Features
//! - [`PeriodicGraph`](topology::PeriodicGraph): nodes, an edge arena, and
//!   per-node neighbor slots carrying integer boundary-crossing vectors
//! - Cluster decomposition and network reduction that collapse internally
//!   connected mass into super-nodes
//! - [`LoopFinder`](algs::LoopFinder): iterative DFS collecting the net
//!   crossing of every cycle of the reduced network
//! - Exact integer Hermite normal form reducing raw loops to an independent
//!   basis whose rank is the number of percolation directions
//! - Plain-text bond-list reader/writer
//!
//! ## Usage
//!
//! ```rust
//! use periodic_net::prelude::*;
//!
//! let mut net = PeriodicGraph::new(4, 6).unwrap();
//! net.add_edge(0, 1, [0, 0, 0]);
//! net.add_edge(1, 2, [0, 0, 0]);
//! net.add_edge(2, 3, [0, 0, 0]);
//! net.add_edge(3, 0, [1, 0, 0]);
//!
//! let basis = LoopFinder::new(&net).get_independent_loops().unwrap();
//! assert_eq!(basis.rank, 1);
//! assert_eq!(basis.loops[0], CrossingVector::from([1, 0, 0]));
//! ```
//!
//! ## Determinism
//!
//! Decomposition labels, the reduced network, raw loop order and the
//! returned basis depend only on the order in which edges were added.
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`] facade; install any logger to see
//! rejected edges (`warn`), reduction and search statistics (`debug`) and
//! individual loops (`trace`).

pub mod algs;
pub mod io;
pub mod net_error;
pub mod topology;

pub use topology::validation::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::decompose::DecomposeMode;
    pub use crate::algs::hermite::{HermiteForm, hermite_normal_form};
    pub use crate::algs::loop_finder::{LoopBasis, LoopFinder};
    pub use crate::algs::percolation::{PercolationReport, analyze};
    pub use crate::net_error::PeriodicNetError;
    pub use crate::topology::crossing::CrossingVector;
    pub use crate::topology::edge::{Edge, EdgeId, EdgeKind};
    pub use crate::topology::periodic_graph::{Padding, PeriodicGraph};
    pub use crate::topology::validation::DebugInvariants;
}
