//! Minimum spanning tree construction (Prim-Jarnik)

use crate::error::Result;
use crate::graph::Graph;
use crate::node::{NodeId, Weight};
use rand::Rng;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

/// Frontier entry: cheapest known edge from the tree into `node`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate {
    weight: Weight,
    node: NodeId,
    parent: Option<NodeId>,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.node.cmp(&self.node))
            .then_with(|| other.parent.cmp(&self.parent))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Graph {
    /// Minimum spanning tree grown from a randomly chosen node
    ///
    /// Fails with `EmptyGraph` if there is no node to start from.
    pub fn prim_jarnik(&self) -> Result<Graph> {
        let start = self.random_node()?;
        self.prim_jarnik_from(start)
    }

    /// Minimum spanning tree grown from a node chosen with `rng`
    pub fn prim_jarnik_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Graph> {
        let start = self.random_node_with(rng)?;
        self.prim_jarnik_from(start)
    }

    /// Minimum spanning tree grown from `start`
    ///
    /// Returns a new graph holding every node name of this graph, inserted in
    /// the same order so handles carry over unchanged. Only the component
    /// reachable from `start` is spanned: its tree edges are added as
    /// undirected edges with their original weights, and nodes outside it
    /// stay isolated.
    pub fn prim_jarnik_from(&self, start: NodeId) -> Result<Graph> {
        self.check(start)?;

        let mut tree = Graph::new();
        for node in self.nodes() {
            tree.insert_node(node.name());
        }

        let mut in_tree: HashSet<NodeId> = HashSet::new();
        let mut frontier = BinaryHeap::new();
        frontier.push(Candidate {
            weight: 0,
            node: start,
            parent: None,
        });

        while let Some(Candidate {
            weight,
            node,
            parent,
        }) = frontier.pop()
        {
            if !in_tree.insert(node) {
                continue;
            }

            // The parent is the in-tree neighbor whose edge justified this pop
            if let Some(parent) = parent {
                tracing::trace!("Tree edge {} - {} ({})", parent, node, weight);
                tree.add_undirected_edge(parent, node, weight)?;
            }

            for (next, weight) in self[node].edges() {
                if !in_tree.contains(&next) {
                    frontier.push(Candidate {
                        weight,
                        node: next,
                        parent: Some(node),
                    });
                }
            }
        }

        if in_tree.len() < self.len() {
            tracing::debug!(
                "Spanning tree from {} covers {} of {} nodes; the rest are unreachable",
                self[start].name(),
                in_tree.len(),
                self.len()
            );
        } else {
            tracing::debug!(
                "Spanning tree from {} covers all {} nodes, total weight {}",
                self[start].name(),
                self.len(),
                tree.total_weight()
            );
        }

        Ok(tree)
    }
}
