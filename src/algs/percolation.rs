//! One-call percolation analysis of a network.
//!
//! [`analyze`] runs reduction and loop finding and collects the numbers a
//! driver usually reports: network size before and after reduction, how
//! many raw loops the search produced, and the independent loop basis.

use serde::{Deserialize, Serialize};

use crate::algs::loop_finder::{LoopBasis, basis_of_loops, loops_of_reduced};
use crate::net_error::PeriodicNetError;
use crate::topology::periodic_graph::PeriodicGraph;

/// Summary of a percolation analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PercolationReport {
    pub nodes: usize,
    pub edges: usize,
    pub reduced_nodes: usize,
    pub reduced_edges: usize,
    /// Raw loops found by the search, zero and dependent ones included.
    pub raw_loops: usize,
    pub basis: LoopBasis,
}

impl PercolationReport {
    #[inline]
    pub fn percolates(&self) -> bool {
        self.basis.percolates()
    }

    /// Number of independent percolation directions.
    #[inline]
    pub fn dimensionality(&self) -> usize {
        self.basis.rank
    }
}

/// Analyse `network` for boundary-crossing loops.
///
/// The network is reduced and searched once; the report's counts and basis
/// all come from that single pass.
pub fn analyze(network: &PeriodicGraph) -> Result<PercolationReport, PeriodicNetError> {
    let reduced = network.get_reduced_network()?;
    let raw = loops_of_reduced(&reduced)?;
    let basis = basis_of_loops(&raw, network.dimension())?;
    let report = PercolationReport {
        nodes: network.get_number_of_nodes(),
        edges: network.get_number_of_edges(),
        reduced_nodes: reduced.get_number_of_nodes(),
        reduced_edges: reduced.get_number_of_edges(),
        raw_loops: raw.len(),
        basis,
    };
    log::info!(
        "percolation: {} independent directions ({} raw loops, {} -> {} nodes)",
        report.dimensionality(),
        report.raw_loops,
        report.nodes,
        report.reduced_nodes
    );
    Ok(report)
}
