//! Plain-text bond lists.
//!
//! # Format
//! One edge per line, whitespace separated:
//!
//! ```text
//! # node1 node2 bx by bz
//! 1 2  1 1 0
//! 2 3 -1 0 0
//! ```
//!
//! - Node ids are non-negative integers; the crossing vector follows.
//! - Blank lines and lines starting with `#` are skipped.
//! - Every row must have the same width. When no dimension is given, the
//!   first data row fixes it.
//! - With an explicit node count every id must lie below it. Without one
//!   the count is inferred from the largest id, which must stay below
//!   [`MAX_INFERRED_NODES`].
//!
//! This is the hand-off format between trajectory importers and the
//! topology core: a node count, `(node1, node2, crossing)` triples, and the
//! dimension.

use std::io::{BufRead, BufReader, Read, Write};

use crate::net_error::PeriodicNetError;
use crate::topology::crossing::CrossingVector;
use crate::topology::periodic_graph::PeriodicGraph;

/// Largest node count a bond list may imply without an explicit one.
pub const MAX_INFERRED_NODES: usize = 1 << 22;

/// One parsed bond.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BondRow {
    pub node1: usize,
    pub node2: usize,
    pub crossing: CrossingVector,
}

/// Parsed bond list with its dimension and, if known, its node count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BondList {
    pub dimension: usize,
    /// `None` sizes the network to the largest node id.
    pub nodes: Option<usize>,
    pub bonds: Vec<BondRow>,
}

impl BondList {
    /// Build a [`PeriodicGraph`] holding these bonds.
    ///
    /// With a node count, isolated nodes are kept and an empty list is a
    /// valid network without edges. Without one, the network is sized to
    /// fit exactly these bonds and an empty list is
    /// [`PeriodicNetError::EmptyNetwork`].
    pub fn to_graph(&self) -> Result<PeriodicGraph, PeriodicNetError> {
        let triples = self
            .bonds
            .iter()
            .map(|b| (b.node1, b.node2, b.crossing.clone()));
        match self.nodes {
            Some(n) => PeriodicGraph::from_edges_with_nodes(n, self.dimension, triples),
            None => PeriodicGraph::from_edges(self.dimension, triples),
        }
    }
}

fn parse_error(line: usize, msg: impl Into<String>) -> PeriodicNetError {
    PeriodicNetError::BondListParse {
        line,
        msg: msg.into(),
    }
}

fn parse_row(text: &str, line: usize) -> Result<(usize, usize, Vec<i64>), PeriodicNetError> {
    let mut fields = text.split_whitespace();
    let mut node = |what: &str| -> Result<usize, PeriodicNetError> {
        let raw = fields
            .next()
            .ok_or_else(|| parse_error(line, format!("missing {what}")))?;
        raw.parse::<usize>()
            .map_err(|_| parse_error(line, format!("invalid {what}: {raw}")))
    };
    let node1 = node("node1")?;
    let node2 = node("node2")?;
    let crossing = fields
        .map(|raw| {
            raw.parse::<i64>()
                .map_err(|_| parse_error(line, format!("invalid crossing component: {raw}")))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok((node1, node2, crossing))
}

/// Read a bond list. With `dimension = None` the first row decides it;
/// with `nodes = None` the largest id does.
pub fn read_bond_list<R: Read>(
    reader: R,
    dimension: Option<usize>,
    nodes: Option<usize>,
) -> Result<BondList, PeriodicNetError> {
    let limit = nodes.unwrap_or(MAX_INFERRED_NODES);
    let mut dimension = dimension;
    let mut bonds = Vec::new();
    for (i, text) in BufReader::new(reader).lines().enumerate() {
        let text = text?;
        let line = i + 1;
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let (node1, node2, crossing) = parse_row(trimmed, line)?;
        if let Some(id) = [node1, node2].into_iter().find(|&id| id >= limit) {
            let msg = match nodes {
                Some(n) => format!("node id {id} out of range (N = {n})"),
                None => format!("node id {id} exceeds {MAX_INFERRED_NODES}; give a node count"),
            };
            return Err(parse_error(line, msg));
        }
        if crossing.is_empty() {
            return Err(parse_error(line, "missing crossing vector"));
        }
        let d = *dimension.get_or_insert(crossing.len());
        if crossing.len() != d {
            return Err(parse_error(
                line,
                format!("expected {d} crossing components, found {}", crossing.len()),
            ));
        }
        bonds.push(BondRow {
            node1,
            node2,
            crossing: crossing.into(),
        });
    }
    Ok(BondList {
        dimension: dimension.unwrap_or(crate::topology::DEFAULT_DIMENSION),
        nodes,
        bonds,
    })
}

/// Read a bond list straight into a network.
pub fn read_network<R: Read>(
    reader: R,
    dimension: Option<usize>,
    nodes: Option<usize>,
) -> Result<PeriodicGraph, PeriodicNetError> {
    read_bond_list(reader, dimension, nodes)?.to_graph()
}

/// Write every edge of `network` as one bond-list row, in edge-id order.
pub fn write_network<W: Write>(
    network: &PeriodicGraph,
    mut writer: W,
) -> Result<(), PeriodicNetError> {
    for (_, edge) in network.edges() {
        write!(writer, "{} {}", edge.node1, edge.node2)?;
        for c in edge.crossing.as_slice() {
            write!(writer, " {c}")?;
        }
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}
