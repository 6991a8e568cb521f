//! Top-level module for periodic net topology.
//!
//! This module provides the data model analysed by the algorithms in
//! [`crate::algs`]:
//! - [`CrossingVector`]: integer boundary-crossing displacement
//! - [`Edge`], [`EdgeId`] and [`NeighborSlot`]: the edge arena and per-node slots
//! - [`PeriodicGraph`]: the network itself
//! - [`validation`]: invariant checks

pub mod crossing;
pub mod edge;
pub mod periodic_graph;
pub mod validation;

pub use crossing::CrossingVector;
pub use edge::{Edge, EdgeId, EdgeKind, NeighborSlot};
pub use periodic_graph::{DEFAULT_DIMENSION, DEFAULT_MAX_DEGREE, Padding, PeriodicGraph};
