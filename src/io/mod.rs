//! Text I/O for periodic networks.
//!
//! The core only needs `(node1, node2, crossing)` triples; [`bond_list`]
//! reads and writes them in the whitespace-separated format used by the
//! network importers.

pub mod bond_list;

pub use bond_list::{BondList, BondRow, read_bond_list, read_network, write_network};
