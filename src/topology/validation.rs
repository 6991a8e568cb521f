//! Structural invariant checks for periodic networks.
//!
//! Checks are cheap enough to run after every reduction in debug builds;
//! release builds opt in with the `strict-invariants` or `check-invariants`
//! features.

use crate::net_error::PeriodicNetError;
use crate::topology::edge::EdgeKind;
use crate::topology::periodic_graph::PeriodicGraph;

/// Trait for validating data structure invariants.
pub trait DebugInvariants {
    /// Assert invariants in debug builds or when invariant checking is enabled.
    fn debug_assert_invariants(&self);
    /// Validate invariants and return the first violation found.
    fn validate_invariants(&self) -> Result<(), PeriodicNetError>;
}

/// Run a fallible check and panic on error when invariant checking is enabled.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}

impl DebugInvariants for PeriodicGraph {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "PeriodicGraph");
    }

    fn validate_invariants(&self) -> Result<(), PeriodicNetError> {
        let violation = |msg: String| Err(PeriodicNetError::InvariantViolation(msg));
        let n = self.get_number_of_nodes();

        let mut slot_total = 0usize;
        for node in 0..n {
            let slots = self.slots(node);
            if slots.len() > self.max_degree() {
                return violation(format!(
                    "node {node} uses {} slots, capacity {}",
                    slots.len(),
                    self.max_degree()
                ));
            }
            slot_total += slots.len();
            for slot in slots {
                if slot.edge.index() >= self.get_number_of_edges() {
                    return violation(format!("node {node} references unknown edge {}", slot.edge));
                }
                let edge = self.edge(slot.edge);
                let expected = if edge.node1 == node && edge.node2 == slot.neighbor {
                    edge.crossing.clone()
                } else if edge.node2 == node && edge.node1 == slot.neighbor {
                    -&edge.crossing
                } else {
                    return violation(format!(
                        "slot of node {node} disagrees with endpoints of edge {}",
                        slot.edge
                    ));
                };
                if slot.crossing != expected {
                    return violation(format!(
                        "node {node}: crossing {} for edge {} should be {}",
                        slot.crossing, slot.edge, expected
                    ));
                }
            }
        }

        let mut internal = 0usize;
        let mut expected_slots = 0usize;
        for (id, edge) in self.edges() {
            if edge.crossing.dim() != self.dimension() {
                return violation(format!(
                    "edge {id} has dimension {}, network has {}",
                    edge.crossing.dim(),
                    self.dimension()
                ));
            }
            if edge.kind() == EdgeKind::Internal {
                internal += 1;
            }
            expected_slots += if edge.is_self_loop() { 1 } else { 2 };
        }
        if slot_total != expected_slots {
            return violation(format!(
                "{slot_total} occupied slots, {expected_slots} expected from edge list"
            ));
        }
        if internal != self.number_of_internal_edges()
            || self.get_number_of_edges() - internal != self.number_of_crossing_edges()
        {
            return violation("internal/crossing edge counters out of sync".into());
        }
        Ok(())
    }
}
