//! Scalar types shared by the reader and the graph.

/// The node id type. DIMACS ids are 1-based.
pub type NodeId = usize;

/// The weight type of nodes and arcs.
pub type Weight = f64;
