use super::Graph;
use derive_more::Display;
use rayon::prelude::*;

/// Summary of a graph, as printed by `dimacs-csr info`.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
#[display(
    fmt = "problem: {}\nnodes: {}\ndeclared edges: {}\narcs: {}\nmax out-degree: {}\nsinks: {}",
    problem,
    num_nodes,
    num_declared_edges,
    num_arcs,
    max_out_degree,
    num_sinks
)]
pub struct GraphInfo {
    problem: String,
    num_nodes: usize,
    num_declared_edges: usize,
    num_arcs: usize,
    max_out_degree: usize,
    num_sinks: usize,
}

impl GraphInfo {
    pub fn new(graph: &Graph) -> Self {
        let degrees = || {
            graph
                .row_offsets()
                .par_windows(2)
                .map(|offsets| offsets[1] - offsets[0])
        };
        Self {
            problem: String::from(graph.problem()),
            num_nodes: graph.node_count(),
            num_declared_edges: graph.edge_count(),
            num_arcs: graph.num_arcs(),
            max_out_degree: degrees().max().unwrap_or(0),
            num_sinks: degrees().filter(|&degree| degree == 0).count(),
        }
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    pub fn num_arcs(&self) -> usize {
        self.num_arcs
    }

    pub fn max_out_degree(&self) -> usize {
        self.max_out_degree
    }

    /// Nodes without outgoing arcs.
    pub fn num_sinks(&self) -> usize {
        self.num_sinks
    }
}
