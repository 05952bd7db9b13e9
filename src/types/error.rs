//! Error types for the keyed graph.

use thiserror::Error;

/// All errors that can occur when querying or mutating a [`Graph`](crate::Graph).
///
/// Generic over the key type so the failing key is handed back to the caller as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError<K> {
    /// No node is stored under this key.
    #[error("Node with key {0:?} not found")]
    NodeNotFound(K),

    /// The directed edge (source, target) does not exist.
    #[error("Node with key {0:?} has no edge to {1:?}")]
    EdgeNotFound(K, K),
}

impl<K> GraphError<K> {
    /// The key the error is about (the source key for a missing edge).
    pub fn key(&self) -> &K {
        match self {
            Self::NodeNotFound(key) => key,
            Self::EdgeNotFound(source, _) => source,
        }
    }
}

/// Convenience result type for graph operations.
pub type GraphResult<T, K> = Result<T, GraphError<K>>;
