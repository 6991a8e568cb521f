//! Re-export public algorithms.

pub mod decompose;
pub mod hermite;
pub mod loop_finder;
pub mod percolation;
pub mod reduction;

pub use decompose::DecomposeMode;
pub use hermite::{HermiteForm, hermite_normal_form, lattice_rank};
pub use loop_finder::{LoopBasis, LoopFinder};
pub use percolation::{PercolationReport, analyze};
