//! Loading DIMACS graph files into compressed sparse row graphs.

pub mod dimacs;
pub mod graph;
pub mod types;
