use super::GraphInfo;
use crate::{
    dimacs::{self, error::Result},
    types::{NodeId, Weight},
};
use std::{ops::Range, ops::RangeInclusive, path::Path};

/// A directed graph in compressed sparse row form.
///
/// ```text
/// row_offsets:    | 0 | 1 | 2 | 2 |        node_count + 1 entries
///                   |   |   |
/// column_indices: | 2 | 3 |                one entry per arc
/// edge_weights:   | 5 | 7 |
/// ```
///
/// Node ids are the 1-based DIMACS ids: the arcs of node `v` live in
/// `column_indices[row_offsets[v - 1]..row_offsets[v]]`, in file order.
#[derive(Debug, Clone)]
pub struct Graph {
    problem: String,
    node_count: usize,
    edge_count: usize,
    row_offsets: Vec<usize>,
    column_indices: Vec<NodeId>,
    edge_weights: Vec<Weight>,
    weights: Vec<Weight>,
}

impl Graph {
    /// Reads a graph with the default options, see [`dimacs::read_from_file`].
    pub fn read_from_file<P: AsRef<Path>>(path: P, format: &str) -> Result<Self> {
        dimacs::read_from_file(path, format)
    }

    pub(crate) fn new(
        problem: String,
        edge_count: usize,
        row_offsets: Vec<usize>,
        column_indices: Vec<NodeId>,
        edge_weights: Vec<Weight>,
        weights: Vec<Weight>,
    ) -> Self {
        debug_assert_eq!(row_offsets.last(), Some(&column_indices.len()));
        debug_assert_eq!(column_indices.len(), edge_weights.len());
        debug_assert_eq!(row_offsets.len(), weights.len() + 1);
        Self {
            problem,
            node_count: weights.len(),
            edge_count,
            row_offsets,
            column_indices,
            edge_weights,
            weights,
        }
    }

    /// The format name given on the problem line.
    pub fn problem(&self) -> &str {
        &self.problem
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// The edge count declared by the problem line.
    ///
    /// It may differ from [`Graph::num_arcs`] unless the graph was read with
    /// a strict edge count policy.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// The number of arcs actually read.
    pub fn num_arcs(&self) -> usize {
        self.column_indices.len()
    }

    pub fn row_offsets(&self) -> &[usize] {
        &self.row_offsets
    }

    pub fn column_indices(&self) -> &[NodeId] {
        &self.column_indices
    }

    /// Arc weights, parallel to [`Graph::column_indices`].
    pub fn edge_weights(&self) -> &[Weight] {
        &self.edge_weights
    }

    /// Node weights, all zero after reading.
    pub fn weights(&self) -> &[Weight] {
        &self.weights
    }

    pub fn nodes(&self) -> RangeInclusive<NodeId> {
        1..=self.node_count
    }

    pub fn out_degree(&self, v: NodeId) -> usize {
        self.arc_range(v).len()
    }

    pub fn neighbors(&self, v: NodeId) -> &[NodeId] {
        &self.column_indices[self.arc_range(v)]
    }

    /// The `(target, weight)` pairs of the arcs leaving `v`.
    pub fn arcs(&self, v: NodeId) -> impl Iterator<Item = (NodeId, Weight)> + '_ {
        let range = self.arc_range(v);
        self.column_indices[range.clone()]
            .iter()
            .copied()
            .zip(self.edge_weights[range].iter().copied())
    }

    pub fn info(&self) -> GraphInfo {
        GraphInfo::new(self)
    }

    fn arc_range(&self, v: NodeId) -> Range<usize> {
        assert!(
            (1..=self.node_count).contains(&v),
            "node id {} is out of range [1, {}]",
            v,
            self.node_count
        );
        self.row_offsets[v - 1]..self.row_offsets[v]
    }
}
