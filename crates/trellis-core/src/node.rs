//! Node (vertex) types and operations

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Edge weight. Unsigned, so negative weights cannot be expressed.
pub type Weight = u64;

/// Handle to a node in a graph's arena
///
/// Handles are plain indices into the arena and stay valid for the lifetime
/// of the graph since nodes are never removed. A handle carries no graph
/// identity: fallible methods reject indices past the end of the arena with
/// `InvalidNode`, and any in-range index names whichever node sits there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of this node in its graph's arena
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<&Node> for NodeId {
    fn from(node: &Node) -> Self {
        node.id
    }
}

/// A graph vertex with a unique name and its outgoing weighted edges
///
/// Nodes are created and owned by a [`Graph`](crate::Graph). Edges refer to
/// neighbors by [`NodeId`], so cycles never involve ownership. Mutating edges
/// goes through the graph, which can borrow both endpoints at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    name: String,
    edges: HashMap<NodeId, Weight>,
}

impl Node {
    pub(crate) fn new(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            edges: HashMap::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Nodes reachable over one outgoing edge. No ordering guarantee.
    pub fn neighbors(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.edges.keys().copied()
    }

    /// Outgoing edges as `(neighbor, weight)` pairs
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, Weight)> + '_ {
        self.edges.iter().map(|(&to, &weight)| (to, weight))
    }

    /// Number of outgoing edges
    pub fn degree(&self) -> usize {
        self.edges.len()
    }

    /// True iff a directed edge from this node to `other` exists
    pub fn has_edge(&self, other: impl Into<NodeId>) -> bool {
        self.edges.contains_key(&other.into())
    }

    /// Weight of the edge from this node to `to`
    pub fn weight(&self, to: impl Into<NodeId>) -> Result<Weight> {
        let to = to.into();
        self.edges
            .get(&to)
            .copied()
            .ok_or_else(|| Error::edge_not_found(self.name.as_str(), to.to_string()))
    }

    /// Insert or overwrite an outgoing edge, returning the previous weight
    pub(crate) fn insert_edge(&mut self, to: NodeId, weight: Weight) -> Option<Weight> {
        self.edges.insert(to, weight)
    }

    pub(crate) fn remove_edge(&mut self, to: NodeId) -> Option<Weight> {
        self.edges.remove(&to)
    }
}
