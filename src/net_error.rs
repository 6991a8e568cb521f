//! PeriodicNetError: Unified error type for periodic-net public APIs
//!
//! Construction failures, rejected edges, reducer overflow and bond-list
//! parse failures all funnel through this type so callers can propagate them
//! with `?`.

use thiserror::Error;

/// Unified error type for periodic-net operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PeriodicNetError {
    /// A network must contain at least one node.
    #[error("Number of nodes must be a positive integer")]
    EmptyNetwork,
    /// Boundary-crossing vectors must have at least one component.
    #[error("Network dimension must be at least 1")]
    ZeroDimension,
    /// An edge endpoint does not exist.
    #[error("Node {node} does not exist (N = {nodes})")]
    NodeOutOfRange { node: usize, nodes: usize },
    /// The endpoint already uses all of its neighbor slots.
    #[error("Node {node} already has {max_degree} edges")]
    DegreeExhausted { node: usize, max_degree: usize },
    /// A boundary-crossing vector has the wrong number of components.
    #[error("Boundary-crossing vector has {found} components, expected {expected}")]
    DimensionMismatch { expected: usize, found: usize },
    /// Exact integer arithmetic left the range of the element type.
    ///
    /// From the lattice reducer `row` is a matrix row; from the loop search
    /// it is the edge whose crossing overflowed. `col` is the component.
    #[error("Integer overflow at row {row}, column {col}")]
    ArithmeticOverflow { row: usize, col: usize },
    /// A node id cannot be turned into a node count.
    #[error("Node id {node} is too large to size a network")]
    TooManyNodes { node: usize },
    /// Matrix rows of unequal length were passed to the lattice reducer.
    #[error("Row {row} has {found} entries, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A bond-list line could not be parsed.
    #[error("Bond list parse error at line {line}: {msg}")]
    BondListParse { line: usize, msg: String },
    /// Underlying reader/writer failure.
    #[error("I/O error: {0}")]
    Io(String),
    /// A structural invariant of the network does not hold.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

impl From<std::io::Error> for PeriodicNetError {
    fn from(err: std::io::Error) -> Self {
        PeriodicNetError::Io(err.to_string())
    }
}
