//! Network reduction: collapse internally connected clusters into super-nodes.
//!
//! Every cluster of the internal-only decomposition becomes one node of the
//! reduced network. Boundary-crossing edges are replayed between cluster
//! labels with unchanged crossing vectors; internal edges disappear. The
//! reduced network has the same boundary-crossing topology with far fewer
//! nodes, which is what the loop search runs on.

use std::borrow::Cow;

use itertools::Itertools;

use crate::algs::decompose::DecomposeMode;
use crate::net_error::PeriodicNetError;
use crate::topology::crossing::CrossingVector;
use crate::topology::edge::EdgeKind;
use crate::topology::periodic_graph::PeriodicGraph;
use crate::topology::validation::DebugInvariants;

impl PeriodicGraph {
    /// Crossing edges rewritten onto cluster labels, sorted and deduplicated.
    fn cluster_edge_rows(&self, labels: &[usize]) -> Vec<(usize, usize, CrossingVector)> {
        self.edges()
            .filter(|(_, e)| e.kind() == EdgeKind::Crossing)
            .map(|(_, e)| (labels[e.node1], labels[e.node2], e.crossing.clone()))
            .sorted()
            .dedup()
            .collect()
    }

    /// Produce the reduced network.
    ///
    /// Without internal edges nothing would change and `self` is returned
    /// borrowed. Otherwise a new network is built with one node per
    /// internal cluster and a degree capacity equal to the largest degree
    /// that occurs in it. `self` is never modified.
    pub fn get_reduced_network(&self) -> Result<Cow<'_, PeriodicGraph>, PeriodicNetError> {
        if !self.needs_reducing() {
            return Ok(Cow::Borrowed(self));
        }

        let (labels, n_labels) = self.decompose(DecomposeMode::InternalOnly);
        let rows = self.cluster_edge_rows(&labels);

        let mut degree = vec![0usize; n_labels];
        for (a, b, _) in &rows {
            degree[*a] += 1;
            if a != b {
                degree[*b] += 1;
            }
        }
        let max_degree = degree.iter().copied().max().unwrap_or(0);

        let mut reduced = PeriodicGraph::with_dimension(n_labels, max_degree, self.dimension())?;
        for (a, b, crossing) in rows {
            reduced.try_add_edge(a, b, crossing)?;
        }
        reduced.debug_assert_invariants();

        log::debug!(
            "reduced network: {} nodes / {} edges -> {} nodes / {} edges",
            self.get_number_of_nodes(),
            self.get_number_of_edges(),
            reduced.get_number_of_nodes(),
            reduced.get_number_of_edges()
        );
        Ok(Cow::Owned(reduced))
    }
}
