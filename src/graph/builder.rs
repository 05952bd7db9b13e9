//! Fluent API for building Graph instances.

use std::fmt::Debug;
use std::hash::Hash;

use crate::types::GraphResult;

use super::Graph;

/// A directed edge queued by the builder, applied once every node is in place.
struct PendingEdge<K, M> {
    source: K,
    target: K,
    metadata: Option<M>,
}

/// Fluent builder for constructing a [`Graph`].
///
/// Nodes and edges can be declared in any order: `build` inserts all nodes
/// first, then applies edges in the order they were declared. An undirected
/// edge `a <-> b` is queued as `a -> b` followed by `b -> a`.
///
/// Only [`GraphBuilder::undirected_edge_with`] needs `M: Clone`.
pub struct GraphBuilder<K, T, M = ()> {
    nodes: Vec<(K, T)>,
    edges: Vec<PendingEdge<K, M>>,
}

impl<K, T, M> GraphBuilder<K, T, M>
where
    K: Eq + Hash + Clone + Debug,
{
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Add a node. A later node with the same key overwrites the earlier one.
    pub fn node(&mut self, key: K, value: T) -> &mut Self {
        self.nodes.push((key, value));
        self
    }

    /// Add a directed edge without metadata.
    pub fn edge(&mut self, source: K, target: K) -> &mut Self {
        self.push_edge(source, target, None)
    }

    /// Add a directed edge carrying `metadata`.
    pub fn edge_with(&mut self, source: K, target: K, metadata: M) -> &mut Self {
        self.push_edge(source, target, Some(metadata))
    }

    /// Add an undirected edge without metadata.
    pub fn undirected_edge(&mut self, a: K, b: K) -> &mut Self {
        self.push_edge(a.clone(), b.clone(), None);
        self.push_edge(b, a, None)
    }

    fn push_edge(&mut self, source: K, target: K, metadata: Option<M>) -> &mut Self {
        self.edges.push(PendingEdge {
            source,
            target,
            metadata,
        });
        self
    }

    /// Build the final Graph. Fails on the first edge that names a missing node.
    pub fn build(self) -> GraphResult<Graph<K, T, M>, K> {
        let mut graph = Graph::with_capacity(self.nodes.len());
        for (key, value) in self.nodes {
            graph.set_node(key, value);
        }

        for edge in self.edges {
            graph.add_edge(edge.source, edge.target, edge.metadata)?;
        }

        Ok(graph)
    }
}

impl<K, T, M> GraphBuilder<K, T, M>
where
    K: Eq + Hash + Clone + Debug,
    M: Clone,
{
    /// Add an undirected edge with `metadata` on both directions.
    pub fn undirected_edge_with(&mut self, a: K, b: K, metadata: M) -> &mut Self {
        self.push_edge(a.clone(), b.clone(), Some(metadata.clone()));
        self.push_edge(b, a, Some(metadata))
    }
}

impl<K, T, M> Default for GraphBuilder<K, T, M>
where
    K: Eq + Hash + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
