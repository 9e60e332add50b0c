//! Graph traversal: breadth-first and depth-first search

use crate::error::Result;
use crate::graph::Graph;
use crate::node::{Node, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};

/// Callback invoked once per node, the first time a traversal visits it
///
/// Any `FnMut(&Node)` closure is a visitor. The graph is borrowed for the
/// whole traversal, so visitors cannot mutate it.
pub trait NodeVisitor {
    fn visit(&mut self, node: &Node);
}

impl<F> NodeVisitor for F
where
    F: FnMut(&Node),
{
    fn visit(&mut self, node: &Node) {
        self(node)
    }
}

/// Traversal statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalStats {
    pub nodes_visited: usize,
    pub edges_traversed: usize,
    pub max_depth_reached: u32,
}

impl Graph {
    /// Breadth-first search from `start`
    ///
    /// The start node is visited first, then each level of the frontier in
    /// turn. Every node reachable from `start` is visited exactly once, in
    /// non-decreasing edge distance. Ties follow neighbor iteration order.
    pub fn bfs<V>(&self, start: NodeId, visitor: &mut V) -> Result<TraversalStats>
    where
        V: NodeVisitor + ?Sized,
    {
        let start = self.try_node(start)?;
        let mut visited: HashSet<NodeId> = HashSet::new();
        let mut queue: VecDeque<NodeId> = VecDeque::new();
        let mut stats = TraversalStats::default();

        visitor.visit(start);
        stats.nodes_visited += 1;
        visited.insert(start.id());
        queue.push_back(start.id());

        let mut depth = 0;
        while !queue.is_empty() {
            depth += 1;
            for _ in 0..queue.len() {
                let Some(current) = queue.pop_front() else {
                    break;
                };
                for next in self[current].neighbors() {
                    stats.edges_traversed += 1;
                    if visited.insert(next) {
                        visitor.visit(&self[next]);
                        stats.nodes_visited += 1;
                        stats.max_depth_reached = depth;
                        queue.push_back(next);
                    }
                }
            }
        }

        tracing::debug!(
            "BFS from {} visited {} nodes, traversed {} edges",
            start.name(),
            stats.nodes_visited,
            stats.edges_traversed
        );

        Ok(stats)
    }

    /// Breadth-first search from the node named `start_name`
    ///
    /// An unknown name is created as a new, edgeless node, so the traversal
    /// then visits only that node.
    pub fn breadth_first_search<V>(&mut self, start_name: &str, visitor: &mut V) -> TraversalStats
    where
        V: NodeVisitor + ?Sized,
    {
        let start = self.get_or_create_node(start_name);
        self.bfs(start, visitor).unwrap_or_default()
    }

    /// Depth-first search from `start` using an explicit stack
    ///
    /// Nodes are marked seen when pushed and visited when popped, so each
    /// reachable node is visited exactly once. The order depends on neighbor
    /// iteration order and is not canonical.
    pub fn dfs<V>(&self, start: NodeId, visitor: &mut V) -> Result<TraversalStats>
    where
        V: NodeVisitor + ?Sized,
    {
        self.check(start)?;
        let mut seen: HashSet<NodeId> = HashSet::new();
        let mut stack: Vec<(NodeId, u32)> = vec![(start, 0)];
        let mut stats = TraversalStats::default();
        seen.insert(start);

        while let Some((current, depth)) = stack.pop() {
            let node = &self[current];
            visitor.visit(node);
            stats.nodes_visited += 1;
            stats.max_depth_reached = stats.max_depth_reached.max(depth);

            for next in node.neighbors() {
                stats.edges_traversed += 1;
                if seen.insert(next) {
                    stack.push((next, depth + 1));
                }
            }
        }

        tracing::debug!(
            "DFS from {} visited {} nodes, traversed {} edges",
            self[start].name(),
            stats.nodes_visited,
            stats.edges_traversed
        );

        Ok(stats)
    }

    /// Depth-first search from the node named `start_name`, creating it if absent
    pub fn depth_first_search<V>(&mut self, start_name: &str, visitor: &mut V) -> TraversalStats
    where
        V: NodeVisitor + ?Sized,
    {
        let start = self.get_or_create_node(start_name);
        self.dfs(start, visitor).unwrap_or_default()
    }
}
