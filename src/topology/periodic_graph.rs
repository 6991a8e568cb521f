//! `PeriodicGraph`: topology of a net embedded in a d-dimensional torus.
//!
//! Nodes are dense indices `0..n`. Every edge is stored once in an arena
//! keyed by [`EdgeId`]; each node additionally owns a list of
//! [`NeighborSlot`]s, one per incident edge, holding the crossing vector as
//! seen from that node. An edge between distinct nodes therefore appears in
//! two slot lists with mutually negated vectors, while a self-loop appears
//! once.
//!
//! Degree capacity (`max_degree`) and dimension are fixed at construction.
//! Edges are only ever added; analysis (decomposition, reduction, loop
//! finding) reads the graph and writes into freshly allocated structures.

use crate::net_error::PeriodicNetError;
use crate::topology::crossing::CrossingVector;
use crate::topology::edge::{Edge, EdgeId, EdgeKind, NeighborSlot};
use hashbrown::HashMap;

/// Dimension of the periodic box unless stated otherwise.
pub const DEFAULT_DIMENSION: usize = 3;
/// Neighbor capacity used by [`PeriodicGraph::with_nodes`].
pub const DEFAULT_MAX_DEGREE: usize = 6;

/// Shape of per-node slot queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Padding {
    /// One entry per slot of capacity, `None` for unused slots.
    Padded,
    /// Occupied slots only.
    Unpadded,
}

/// Periodic net with fixed node count, degree capacity and dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodicGraph {
    dimension: usize,
    max_degree: usize,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<NeighborSlot>>,
    n_internal: usize,
    n_crossing: usize,
}

impl PeriodicGraph {
    /// Create a 3-dimensional network with `n` nodes and `max_degree` slots per node.
    pub fn new(n: usize, max_degree: usize) -> Result<Self, PeriodicNetError> {
        Self::with_dimension(n, max_degree, DEFAULT_DIMENSION)
    }

    /// Create a 3-dimensional network with the default degree capacity.
    pub fn with_nodes(n: usize) -> Result<Self, PeriodicNetError> {
        Self::with_dimension(n, DEFAULT_MAX_DEGREE, DEFAULT_DIMENSION)
    }

    /// Create a network in a `dimension`-torus.
    ///
    /// Fails with [`PeriodicNetError::EmptyNetwork`] when `n == 0` and
    /// [`PeriodicNetError::ZeroDimension`] when `dimension == 0`.
    pub fn with_dimension(
        n: usize,
        max_degree: usize,
        dimension: usize,
    ) -> Result<Self, PeriodicNetError> {
        if n == 0 {
            return Err(PeriodicNetError::EmptyNetwork);
        }
        if dimension == 0 {
            return Err(PeriodicNetError::ZeroDimension);
        }
        Ok(Self {
            dimension,
            max_degree,
            edges: Vec::new(),
            adjacency: (0..n).map(|_| Vec::with_capacity(max_degree)).collect(),
            n_internal: 0,
            n_crossing: 0,
        })
    }

    /// Build a network from `(node1, node2, crossing)` triples.
    ///
    /// The node count is the largest endpoint plus one and the degree
    /// capacity is the largest number of slots any node ends up using, so
    /// every triple is guaranteed to fit. An empty edge list is rejected
    /// because no node count can be inferred from it.
    pub fn from_edges<I, V>(dimension: usize, edges: I) -> Result<Self, PeriodicNetError>
    where
        I: IntoIterator<Item = (usize, usize, V)>,
        V: Into<CrossingVector>,
    {
        let edges = collect_triples(edges);
        let top = edges
            .iter()
            .map(|(a, b, _)| *a.max(b))
            .max()
            .ok_or(PeriodicNetError::EmptyNetwork)?;
        let n = top
            .checked_add(1)
            .ok_or(PeriodicNetError::TooManyNodes { node: top })?;
        Self::replay(n, dimension, edges)
    }

    /// Build a network of exactly `nodes` nodes from `(node1, node2, crossing)`
    /// triples, sizing the degree capacity to fit.
    ///
    /// Endpoints outside `0..nodes` fail with
    /// [`PeriodicNetError::NodeOutOfRange`]; an empty edge list gives a
    /// network without edges.
    pub fn from_edges_with_nodes<I, V>(
        nodes: usize,
        dimension: usize,
        edges: I,
    ) -> Result<Self, PeriodicNetError>
    where
        I: IntoIterator<Item = (usize, usize, V)>,
        V: Into<CrossingVector>,
    {
        Self::replay(nodes, dimension, collect_triples(edges))
    }

    fn replay(
        n: usize,
        dimension: usize,
        edges: Vec<(usize, usize, CrossingVector)>,
    ) -> Result<Self, PeriodicNetError> {
        let mut degree: HashMap<usize, usize> = HashMap::new();
        for (a, b, _) in &edges {
            if let Some(node) = [*a, *b].into_iter().find(|&node| node >= n) {
                return Err(PeriodicNetError::NodeOutOfRange { node, nodes: n });
            }
            *degree.entry(*a).or_insert(0) += 1;
            if a != b {
                *degree.entry(*b).or_insert(0) += 1;
            }
        }
        let max_degree = degree.values().copied().max().unwrap_or(0);

        let mut graph = Self::with_dimension(n, max_degree, dimension)?;
        for (a, b, v) in edges {
            graph.try_add_edge(a, b, v)?;
        }
        Ok(graph)
    }

    // -------------------------------------------------------------------------
    // Construction
    // -------------------------------------------------------------------------

    /// Add an edge and report why it was rejected.
    ///
    /// Checks run before any mutation: endpoints in range, a free slot on
    /// each endpoint, and a crossing vector of the network's dimension. On
    /// success the edge receives the next [`EdgeId`].
    pub fn try_add_edge(
        &mut self,
        node1: usize,
        node2: usize,
        boundary_vector: impl Into<CrossingVector>,
    ) -> Result<EdgeId, PeriodicNetError> {
        let crossing = boundary_vector.into();
        let nodes = self.adjacency.len();
        for node in [node1, node2] {
            if node >= nodes {
                return Err(PeriodicNetError::NodeOutOfRange { node, nodes });
            }
        }
        for node in [node1, node2] {
            if self.adjacency[node].len() >= self.max_degree {
                return Err(PeriodicNetError::DegreeExhausted {
                    node,
                    max_degree: self.max_degree,
                });
            }
        }
        if crossing.dim() != self.dimension {
            return Err(PeriodicNetError::DimensionMismatch {
                expected: self.dimension,
                found: crossing.dim(),
            });
        }

        let id = EdgeId::new(self.edges.len());
        let edge = Edge::new(node1, node2, crossing);
        match edge.kind() {
            EdgeKind::Internal => self.n_internal += 1,
            EdgeKind::Crossing => self.n_crossing += 1,
        }
        if node1 != node2 {
            self.adjacency[node2].push(NeighborSlot {
                neighbor: node1,
                edge: id,
                crossing: -&edge.crossing,
            });
        }
        self.adjacency[node1].push(NeighborSlot {
            neighbor: node2,
            edge: id,
            crossing: edge.crossing.clone(),
        });
        self.edges.push(edge);
        Ok(id)
    }

    /// Add an edge; returns `false` (leaving the network untouched) if it
    /// was rejected. The reason is logged at `warn` level; use
    /// [`try_add_edge`](Self::try_add_edge) to inspect it.
    pub fn add_edge(
        &mut self,
        node1: usize,
        node2: usize,
        boundary_vector: impl Into<CrossingVector>,
    ) -> bool {
        match self.try_add_edge(node1, node2, boundary_vector) {
            Ok(_) => true,
            Err(e) => {
                log::warn!("Cannot add edge {node1}-{node2}: {e}");
                false
            }
        }
    }

    // -------------------------------------------------------------------------
    // Global queries
    // -------------------------------------------------------------------------

    #[inline]
    pub fn get_number_of_nodes(&self) -> usize {
        self.adjacency.len()
    }

    #[inline]
    pub fn get_number_of_edges(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    #[inline]
    pub fn max_degree(&self) -> usize {
        self.max_degree
    }

    #[inline]
    pub fn number_of_internal_edges(&self) -> usize {
        self.n_internal
    }

    #[inline]
    pub fn number_of_crossing_edges(&self) -> usize {
        self.n_crossing
    }

    /// True iff at least one edge wraps a periodic boundary.
    #[inline]
    pub fn crosses_boundaries(&self) -> bool {
        self.n_crossing > 0
    }

    /// True iff reduction would merge nodes, i.e. some edge is internal.
    #[inline]
    pub fn needs_reducing(&self) -> bool {
        self.n_internal > 0
    }

    /// Edge by id. Panics if `id` was not issued by this network.
    #[inline]
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.index()]
    }

    /// All edges in creation order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .map(|(i, e)| (EdgeId::new(i), e))
    }

    // -------------------------------------------------------------------------
    // Per-node slot queries
    // -------------------------------------------------------------------------

    /// Number of occupied slots of `node`.
    #[inline]
    pub fn get_number_of_neighbors(&self, node: usize) -> usize {
        self.adjacency[node].len()
    }

    /// Occupied slots of `node`, in insertion order.
    #[inline]
    pub fn slots(&self, node: usize) -> &[NeighborSlot] {
        &self.adjacency[node]
    }

    /// Slot `k` of `node`, `None` if that slot is still free.
    ///
    /// # Panics
    /// If `node` does not exist or `k >= max_degree`.
    fn slot(&self, node: usize, k: usize) -> Option<&NeighborSlot> {
        assert!(
            k < self.max_degree,
            "slot {k} out of range for node {node} (max_degree = {})",
            self.max_degree
        );
        self.adjacency[node].get(k)
    }

    /// Neighbor reached through slot `k` of `node`.
    ///
    /// # Panics
    /// If `node` does not exist or `k >= max_degree`.
    pub fn get_neighbor(&self, node: usize, k: usize) -> Option<usize> {
        self.slot(node, k).map(|s| s.neighbor)
    }

    /// Edge stored in slot `k` of `node`.
    ///
    /// # Panics
    /// If `node` does not exist or `k >= max_degree`.
    pub fn get_edge(&self, node: usize, k: usize) -> Option<EdgeId> {
        self.slot(node, k).map(|s| s.edge)
    }

    /// Crossing vector walking from `node` through slot `k`.
    ///
    /// # Panics
    /// If `node` does not exist or `k >= max_degree`.
    pub fn get_boundary_crossing(&self, node: usize, k: usize) -> Option<&CrossingVector> {
        self.slot(node, k).map(|s| &s.crossing)
    }

    /// Neighbor ids of `node`.
    pub fn get_neighbors(&self, node: usize, padding: Padding) -> Vec<Option<usize>> {
        self.padded(node, padding, |s| s.neighbor)
    }

    /// Edge ids of `node`.
    pub fn get_edges(&self, node: usize, padding: Padding) -> Vec<Option<EdgeId>> {
        self.padded(node, padding, |s| s.edge)
    }

    fn padded<T>(
        &self,
        node: usize,
        padding: Padding,
        f: impl Fn(&NeighborSlot) -> T,
    ) -> Vec<Option<T>> {
        let slots = &self.adjacency[node];
        let mut out: Vec<Option<T>> = slots.iter().map(|s| Some(f(s))).collect();
        if padding == Padding::Padded {
            out.resize_with(self.max_degree.max(slots.len()), || None);
        }
        out
    }
}

fn collect_triples<I, V>(edges: I) -> Vec<(usize, usize, CrossingVector)>
where
    I: IntoIterator<Item = (usize, usize, V)>,
    V: Into<CrossingVector>,
{
    edges
        .into_iter()
        .map(|(a, b, v)| (a, b, v.into()))
        .collect()
}
