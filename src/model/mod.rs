//! Flow graph model: node/edge types and the petgraph topology index.

pub mod graph;
pub mod types;

pub use graph::FlowIndex;
pub use types::*;
