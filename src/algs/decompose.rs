//! Connected-component labeling of a periodic network.
//!
//! Roots are taken in node-index order; each root that is still unlabeled
//! opens a new label, so labels are `0..n_labels` and the component holding
//! node 0 is always label 0. Traversal uses an explicit stack.

use crate::topology::edge::EdgeKind;
use crate::topology::periodic_graph::PeriodicGraph;

/// Which edges connect nodes during decomposition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DecomposeMode {
    /// Follow internal (`B = 0`) edges only; the mode used for reduction.
    #[default]
    InternalOnly,
    /// Follow every edge.
    AllEdges,
}

impl PeriodicGraph {
    /// Label connected components. Returns `(labels, n_labels)` with
    /// `labels[node] < n_labels` for every node.
    pub fn decompose(&self, mode: DecomposeMode) -> (Vec<usize>, usize) {
        let n = self.get_number_of_nodes();
        let mut labels: Vec<Option<usize>> = vec![None; n];
        let mut n_labels = 0usize;
        let mut stack: Vec<usize> = Vec::new();

        for root in 0..n {
            if labels[root].is_some() {
                continue;
            }
            labels[root] = Some(n_labels);
            stack.push(root);
            while let Some(p) = stack.pop() {
                for slot in self.slots(p) {
                    let follow = match mode {
                        DecomposeMode::AllEdges => true,
                        DecomposeMode::InternalOnly => {
                            self.edge(slot.edge).kind() == EdgeKind::Internal
                        }
                    };
                    if follow && labels[slot.neighbor].is_none() {
                        labels[slot.neighbor] = Some(n_labels);
                        stack.push(slot.neighbor);
                    }
                }
            }
            n_labels += 1;
        }

        // every node was either a root or reached from one
        let labels = labels.into_iter().flatten().collect();
        (labels, n_labels)
    }
}
