//! In-memory graph operations: the container, its builder and BFS.

pub mod builder;
pub mod keyed_graph;
pub mod traversal;

pub use builder::GraphBuilder;
pub use keyed_graph::Graph;
