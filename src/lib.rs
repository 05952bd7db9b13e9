//! keyed-graph: a generic in-memory directed graph.
//!
//! Nodes are values stored under caller-chosen keys, edges are directed
//! `(source, target)` pairs with optional typed metadata, and shortest paths
//! are found with breadth-first search.
//!
//! The graph does no internal locking. Wrap it in a mutex to share it between threads.

pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{Graph, GraphBuilder};
pub use types::{EdgeRef, GraphError, GraphResult};
