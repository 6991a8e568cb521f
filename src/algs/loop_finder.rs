//! Depth-first search for boundary-crossing loops.
//!
//! [`LoopFinder`] reduces the network (see
//! [`get_reduced_network`](PeriodicGraph::get_reduced_network)), then walks
//! every connected component of the reduced network from its lowest-numbered
//! node. Each node records the cumulative crossing vector along the DFS tree
//! path from the root; every non-tree edge closes a cycle whose net crossing
//! is the difference of the two path sums plus the edge itself. The raw loop
//! set is redundant; [`LoopFinder::get_independent_loops`] condenses it to an
//! integer basis with [`hermite_normal_form`].
//!
//! The traversal is iterative, so recursion depth is never an issue, and all
//! visitation state is local to one call: a `LoopFinder` can be queried any
//! number of times and the network is only ever read.

use serde::{Deserialize, Serialize};

use crate::algs::hermite::hermite_normal_form;
use crate::net_error::PeriodicNetError;
use crate::topology::crossing::CrossingVector;
use crate::topology::periodic_graph::PeriodicGraph;

/// Linearly independent, topologically nontrivial loops of a network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoopBasis {
    /// Basis vectors in Hermite normal form (positive leading entries).
    pub loops: Vec<CrossingVector>,
    /// Number of independent percolation directions, `0..=dimension`.
    pub rank: usize,
    /// Dimension of the periodic box.
    pub dimension: usize,
}

impl LoopBasis {
    /// No nontrivial loops.
    pub fn empty(dimension: usize) -> Self {
        LoopBasis {
            loops: Vec::new(),
            rank: 0,
            dimension,
        }
    }

    /// At least one loop with nonzero net crossing exists.
    #[inline]
    pub fn percolates(&self) -> bool {
        self.rank > 0
    }

    /// The loops span every periodic direction.
    #[inline]
    pub fn spans_all_directions(&self) -> bool {
        self.rank == self.dimension
    }
}

/// Loop search over a borrowed network.
#[derive(Debug, Clone, Copy)]
pub struct LoopFinder<'a> {
    network: &'a PeriodicGraph,
}

/// DFS frame: node, its discovery order, next slot to inspect.
type Frame = (usize, usize, usize);

/// Visitation state of one search.
struct Search<'g> {
    graph: &'g PeriodicGraph,
    /// Discovery order of each node within its component.
    visited_nodes: Vec<Option<usize>>,
    /// Discovery order of each edge within its component.
    visited_edges: Vec<Option<usize>>,
}

impl<'g> Search<'g> {
    fn new(graph: &'g PeriodicGraph) -> Self {
        Search {
            graph,
            visited_nodes: vec![None; graph.get_number_of_nodes()],
            visited_edges: vec![None; graph.get_number_of_edges()],
        }
    }

    fn run(mut self) -> Result<Vec<CrossingVector>, PeriodicNetError> {
        let mut loops = Vec::new();
        for root in 0..self.graph.get_number_of_nodes() {
            if self.visited_nodes[root].is_none() {
                let before = loops.len();
                self.component(root, &mut loops)?;
                log::debug!("component rooted at {root}: {} loops", loops.len() - before);
            }
        }
        Ok(loops)
    }

    /// Walk the component of `root`, appending every cycle's net crossing.
    fn component(
        &mut self,
        root: usize,
        loops: &mut Vec<CrossingVector>,
    ) -> Result<(), PeriodicNetError> {
        // crossing_sum[t] = cumulative crossing from root to the t-th discovered node
        let graph = self.graph;
        let mut crossing_sum = vec![CrossingVector::zeros(graph.dimension())];
        let mut edge_time = 0usize;
        self.visited_nodes[root] = Some(0);
        let mut stack: Vec<Frame> = vec![(root, 0, 0)];

        while let Some(frame) = stack.last_mut() {
            let (node, order, k) = *frame;
            let Some(slot) = graph.slots(node).get(k) else {
                stack.pop();
                continue;
            };
            frame.2 += 1;

            let edge = slot.edge.index();
            if self.visited_edges[edge].is_some() {
                continue;
            }
            self.visited_edges[edge] = Some(edge_time);
            edge_time += 1;

            let base = &crossing_sum[order];
            let current = base
                .checked_add(&slot.crossing)
                .ok_or_else(|| overflow(edge, base, &slot.crossing, i64::checked_add))?;
            match self.visited_nodes[slot.neighbor] {
                None => {
                    let t = crossing_sum.len();
                    self.visited_nodes[slot.neighbor] = Some(t);
                    crossing_sum.push(current);
                    stack.push((slot.neighbor, t, 0));
                }
                Some(t) => {
                    let closing = &crossing_sum[t];
                    let cycle = current
                        .checked_sub(closing)
                        .ok_or_else(|| overflow(edge, &current, closing, i64::checked_sub))?;
                    log::trace!(
                        "loop {cycle} closing at node {} via edge {}",
                        slot.neighbor,
                        slot.edge
                    );
                    loops.push(cycle);
                }
            }
        }
        Ok(())
    }
}

/// Overflow accumulating crossings along `edge`, reported at the first
/// component where `op` fails.
fn overflow(
    edge: usize,
    a: &CrossingVector,
    b: &CrossingVector,
    op: fn(i64, i64) -> Option<i64>,
) -> PeriodicNetError {
    let col = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .position(|(&x, &y)| op(x, y).is_none())
        .unwrap_or(0);
    PeriodicNetError::ArithmeticOverflow { row: edge, col }
}

/// Independent loops of a raw loop list.
pub(crate) fn basis_of_loops(
    raw: &[CrossingVector],
    dimension: usize,
) -> Result<LoopBasis, PeriodicNetError> {
    if raw.iter().all(CrossingVector::is_zero) {
        return Ok(LoopBasis::empty(dimension));
    }

    let matrix: Vec<Vec<i64>> = raw.iter().map(|l| l.as_slice().to_vec()).collect();
    let hnf = hermite_normal_form(&matrix)?;
    let loops: Vec<CrossingVector> = hnf
        .independent_rows()
        .iter()
        .map(|r| CrossingVector::from(r.as_slice()))
        .collect();
    log::debug!("found {} independent loops: {loops:?}", hnf.rank);
    Ok(LoopBasis {
        loops,
        rank: hnf.rank,
        dimension,
    })
}

/// Raw loops of a network that is already reduced.
pub(crate) fn loops_of_reduced(
    reduced: &PeriodicGraph,
) -> Result<Vec<CrossingVector>, PeriodicNetError> {
    if !reduced.crosses_boundaries() {
        return Ok(Vec::new());
    }
    Search::new(reduced).run()
}

impl<'a> LoopFinder<'a> {
    pub fn new(network: &'a PeriodicGraph) -> Self {
        LoopFinder { network }
    }

    /// The network being analysed.
    pub fn network(&self) -> &'a PeriodicGraph {
        self.network
    }

    /// Raw loop vectors in discovery order.
    ///
    /// The list may contain zero vectors and linearly dependent entries;
    /// most callers want [`get_independent_loops`](Self::get_independent_loops).
    /// A network without crossing edges cannot percolate and yields an
    /// empty list without being searched.
    pub fn get_loops(&self) -> Result<Vec<CrossingVector>, PeriodicNetError> {
        if !self.network.crosses_boundaries() {
            return Ok(Vec::new());
        }
        let reduced = self.network.get_reduced_network()?;
        loops_of_reduced(&reduced)
    }

    /// Linearly independent, topologically nontrivial loops.
    ///
    /// Zero loops only (or none at all) give an empty basis of rank 0.
    /// Otherwise the raw loops are reduced to Hermite normal form and its
    /// nonzero rows are returned. When the raw loops are dependent, any
    /// basis of the same lattice is a correct answer; this one is canonical.
    pub fn get_independent_loops(&self) -> Result<LoopBasis, PeriodicNetError> {
        basis_of_loops(&self.get_loops()?, self.network.dimension())
    }
}
