//! CLI command implementations

pub mod completions;
pub mod config;
pub mod mst;
pub mod path;
pub mod traverse;

use trellis_core::{Graph, NodeId};

/// Resolve a node name given on the command line
///
/// Unlike the name-based graph entry points this never creates nodes, so a
/// typo is reported instead of silently producing an empty result.
pub fn resolve(graph: &Graph, name: &str) -> anyhow::Result<NodeId> {
    graph
        .lookup(name)
        .ok_or_else(|| anyhow::anyhow!("Unknown node '{}'", name))
}
