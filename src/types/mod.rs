//! Shared types for the keyed graph: errors and edge views.

pub mod edge;
pub mod error;

pub use edge::EdgeRef;
pub use error::{GraphError, GraphResult};
