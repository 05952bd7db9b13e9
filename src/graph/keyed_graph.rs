//! Core graph structure: keyed nodes, adjacency lists and per-edge metadata.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::types::{EdgeRef, GraphError, GraphResult};

/// A generic in-memory directed graph.
///
/// Nodes are values of type `T` stored under unique keys of type `K`. Edges are
/// directed `(source, target)` pairs kept as per-source adjacency lists in
/// insertion order; a given pair exists at most once. Each direction may carry
/// one metadata payload of type `M`.
///
/// Undirected edges are two directed edges in opposite directions.
///
/// Every edge endpoint refers to an existing node. Nodes cannot be removed, so
/// that invariant only has to be checked when an edge is created.
#[derive(Debug, Clone)]
pub struct Graph<K, T, M = ()> {
    /// Node values, indexed by key.
    nodes: HashMap<K, T>,
    /// Adjacency lists: source -> targets, in the order the edges were added.
    edges: HashMap<K, Vec<K>>,
    /// Edge metadata: source -> target -> payload.
    metadata: HashMap<K, HashMap<K, M>>,
}

impl<K, T, M> Graph<K, T, M>
where
    K: Eq + Hash + Clone + Debug,
{
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            edges: HashMap::new(),
            metadata: HashMap::new(),
        }
    }

    /// Create an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: HashMap::with_capacity(capacity),
            edges: HashMap::with_capacity(capacity),
            metadata: HashMap::new(),
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed edges. An undirected edge counts twice.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    /// Whether the graph holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether a node is stored under `key`.
    pub fn contains_node(&self, key: &K) -> bool {
        self.nodes.contains_key(key)
    }

    /// Insert or overwrite the node at `key`, returning the previous value.
    ///
    /// Existing edges that reference `key` are left untouched.
    pub fn set_node(&mut self, key: K, value: T) -> Option<T> {
        self.nodes.insert(key, value)
    }

    /// Get a node by key (immutable).
    pub fn get_node(&self, key: &K) -> GraphResult<&T, K> {
        self.nodes
            .get(key)
            .ok_or_else(|| GraphError::NodeNotFound(key.clone()))
    }

    /// Get a node by key (mutable).
    pub fn get_node_mut(&mut self, key: &K) -> GraphResult<&mut T, K> {
        self.nodes
            .get_mut(key)
            .ok_or_else(|| GraphError::NodeNotFound(key.clone()))
    }

    /// Iterate over all nodes. Order is unspecified.
    pub fn nodes(&self) -> impl Iterator<Item = (&K, &T)> {
        self.nodes.iter()
    }

    /// Outgoing edges of `key`, as target keys in insertion order.
    ///
    /// A node without outgoing edges yields an empty slice.
    pub fn get_edges(&self, key: &K) -> GraphResult<&[K], K> {
        self.ensure_node(key)?;
        Ok(self.edges.get(key).map(Vec::as_slice).unwrap_or(&[]))
    }

    /// Whether the directed edge `source -> target` exists.
    pub fn has_edge(&self, source: &K, target: &K) -> bool {
        self.edges
            .get(source)
            .is_some_and(|targets| targets.contains(target))
    }

    /// Iterate over every directed edge with its metadata.
    ///
    /// Sources come in unspecified order; targets of one source come in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeRef<'_, K, M>> {
        self.edges.iter().flat_map(move |(source, targets)| {
            targets.iter().map(move |target| {
                EdgeRef::new(source, target, self.get_metadata(source, target))
            })
        })
    }

    /// Add the directed edge `source -> target`.
    ///
    /// Both endpoints must exist. Adding an edge that is already present is a
    /// no-op and leaves its metadata alone; use [`Graph::set_metadata`] to
    /// overwrite it.
    pub fn add_edge(&mut self, source: K, target: K, metadata: Option<M>) -> GraphResult<(), K> {
        self.ensure_node(&source)?;
        self.ensure_node(&target)?;

        let targets = self.edges.entry(source.clone()).or_default();
        if targets.contains(&target) {
            if metadata.is_some() {
                log::debug!(
                    "Edge {:?} -> {:?} already exists, ignoring new metadata",
                    source,
                    target
                );
            }
            return Ok(());
        }

        targets.push(target.clone());
        if let Some(metadata) = metadata {
            self.metadata
                .entry(source)
                .or_default()
                .insert(target, metadata);
        }

        Ok(())
    }

    /// Attach `metadata` to the directed edge `source -> target`, replacing any previous payload.
    ///
    /// Both endpoint nodes must exist; the edge itself does not have to.
    pub fn set_metadata(&mut self, source: K, target: K, metadata: M) -> GraphResult<(), K> {
        self.ensure_node(&source)?;
        self.ensure_node(&target)?;

        if !self.has_edge(&source, &target) {
            log::debug!(
                "Setting metadata on {:?} -> {:?} before the edge exists",
                source,
                target
            );
        }
        self.metadata
            .entry(source)
            .or_default()
            .insert(target, metadata);

        Ok(())
    }

    /// Metadata attached to the directed edge `source -> target`, if any.
    pub fn get_metadata(&self, source: &K, target: &K) -> Option<&M> {
        self.metadata.get(source)?.get(target)
    }

    /// Remove the directed edge `source -> target` along with its metadata.
    ///
    /// The order of the remaining edges is preserved.
    pub fn remove_edge(&mut self, source: &K, target: &K) -> GraphResult<(), K> {
        self.ensure_node(source)?;

        let position = self
            .edges
            .get(source)
            .and_then(|targets| targets.iter().position(|t| t == target))
            .ok_or_else(|| GraphError::EdgeNotFound(source.clone(), target.clone()))?;

        if let Some(targets) = self.edges.get_mut(source) {
            targets.remove(position);
        }

        if let Some(payloads) = self.metadata.get_mut(source) {
            payloads.remove(target);
            if payloads.is_empty() {
                self.metadata.remove(source);
            }
        }

        Ok(())
    }

    /// Remove both directions of the undirected edge `a <-> b`.
    ///
    /// Both removals are attempted even if the first one fails; the first
    /// failure, if any, is returned.
    pub fn remove_undirected_edge(&mut self, a: &K, b: &K) -> GraphResult<(), K> {
        let forward = self.remove_edge(a, b);
        let backward = self.remove_edge(b, a);
        forward.and(backward)
    }

    /// Key of the first node whose value satisfies `predicate`.
    ///
    /// Nodes are scanned in unspecified order, so when several match, which
    /// one is returned is not defined.
    pub fn get_node_key<F>(&self, mut predicate: F) -> Option<&K>
    where
        F: FnMut(&T) -> bool,
    {
        self.nodes
            .iter()
            .find(|(_, value)| predicate(*value))
            .map(|(key, _)| key)
    }

    /// Keys of all nodes whose value satisfies `predicate`, in unspecified order.
    pub fn get_node_keys<F>(&self, mut predicate: F) -> Vec<&K>
    where
        F: FnMut(&T) -> bool,
    {
        self.nodes
            .iter()
            .filter(|(_, value)| predicate(*value))
            .map(|(key, _)| key)
            .collect()
    }

    pub(crate) fn ensure_node(&self, key: &K) -> GraphResult<(), K> {
        if self.nodes.contains_key(key) {
            Ok(())
        } else {
            Err(GraphError::NodeNotFound(key.clone()))
        }
    }
}

impl<K, T, M> Graph<K, T, M>
where
    K: Eq + Hash + Clone + Debug,
    M: Clone,
{
    /// Add the undirected edge `a <-> b`, i.e. `a -> b` and `b -> a`.
    ///
    /// Each direction is idempotent on its own: if one already exists only the
    /// missing one is added. Both nodes are checked before either direction is
    /// written.
    pub fn add_undirected_edge(&mut self, a: K, b: K, metadata: Option<M>) -> GraphResult<(), K> {
        self.ensure_node(&a)?;
        self.ensure_node(&b)?;

        self.add_edge(a.clone(), b.clone(), metadata.clone())?;
        self.add_edge(b, a, metadata)
    }

    /// Attach the same metadata to both directions `a -> b` and `b -> a`.
    pub fn set_undirected_metadata(&mut self, a: K, b: K, metadata: M) -> GraphResult<(), K> {
        self.ensure_node(&a)?;
        self.ensure_node(&b)?;

        self.set_metadata(a.clone(), b.clone(), metadata.clone())?;
        self.set_metadata(b, a, metadata)
    }
}

impl<K, T, M> Default for Graph<K, T, M>
where
    K: Eq + Hash + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
