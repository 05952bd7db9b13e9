//! Borrowed view of a single directed edge.

/// A directed edge as seen from outside the graph.
///
/// Edges have no identity beyond their `(source, target)` pair; the view
/// borrows both keys and the edge's metadata, if any was attached.
#[derive(Debug, PartialEq, Eq)]
pub struct EdgeRef<'a, K, M> {
    /// Key of the node the edge leaves.
    pub source: &'a K,
    /// Key of the node the edge points to.
    pub target: &'a K,
    /// Metadata attached to this exact direction.
    pub metadata: Option<&'a M>,
}

impl<'a, K, M> EdgeRef<'a, K, M> {
    pub(crate) fn new(source: &'a K, target: &'a K, metadata: Option<&'a M>) -> Self {
        Self {
            source,
            target,
            metadata,
        }
    }

    /// Whether any metadata is attached to this direction.
    pub fn has_metadata(&self) -> bool {
        self.metadata.is_some()
    }
}

impl<K, M> Clone for EdgeRef<'_, K, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, M> Copy for EdgeRef<'_, K, M> {}
