//! Error types for Trellis Core

use crate::node::NodeId;
use thiserror::Error;

/// Result type alias using Trellis's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Trellis error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Edge not found: {from} -> {to}")]
    EdgeNotFound { from: String, to: String },

    #[error("Graph is empty")]
    EmptyGraph,

    #[error("Node handle {0} is out of range for this graph")]
    InvalidNode(NodeId),
}

impl Error {
    pub(crate) fn edge_not_found(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::EdgeNotFound {
            from: from.into(),
            to: to.into(),
        }
    }
}
