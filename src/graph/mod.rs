//! The CSR graph produced by the reader.

pub use csr::Graph;
pub use info::GraphInfo;

mod csr;
mod display;
mod info;
