//! Graph container: node arena, name index and edge mutation

use crate::error::{Error, Result};
use crate::node::{Node, NodeId, Weight};
use rand::Rng;
use std::collections::HashMap;
use std::ops::Index;

/// Directed, weighted graph whose nodes are addressed by name or handle
///
/// All nodes live in one arena owned by the graph. Names map to handles
/// through an index, and edges are stored per node as handle -> weight.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    index: HashMap<String, NodeId>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Node Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Return the node with the given name, creating it first if needed
    ///
    /// Repeated calls with the same name return the same handle.
    pub fn get_or_create_node(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(id, name));
        self.index.insert(name.to_string(), id);
        tracing::trace!("Created node {} ({})", name, id);
        id
    }

    /// Insert a node by name. Returns the existing handle if the name is taken.
    pub fn insert_node(&mut self, name: &str) -> NodeId {
        self.get_or_create_node(name)
    }

    /// Find a node by name without creating it
    pub fn lookup(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// All nodes, in creation order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Pick a node uniformly at random using the thread-local generator
    pub fn random_node(&self) -> Result<NodeId> {
        self.random_node_with(&mut rand::rng())
    }

    /// Pick a node uniformly at random using the supplied generator
    pub fn random_node_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<NodeId> {
        if self.nodes.is_empty() {
            return Err(Error::EmptyGraph);
        }
        Ok(NodeId(rng.random_range(0..self.nodes.len())))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Edge Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Add or overwrite the directed edge `from -> to`
    pub fn add_directed_edge(&mut self, from: NodeId, to: NodeId, weight: Weight) -> Result<()> {
        self.check(to)?;
        self.node_mut(from)?.insert_edge(to, weight);
        Ok(())
    }

    /// Add or overwrite the edges `a -> b` and `b -> a` with the same weight
    pub fn add_undirected_edge(&mut self, a: NodeId, b: NodeId, weight: Weight) -> Result<()> {
        self.check(a)?;
        self.check(b)?;
        self.nodes[a.0].insert_edge(b, weight);
        self.nodes[b.0].insert_edge(a, weight);
        Ok(())
    }

    /// Remove the directed edge `from -> to`, returning its weight
    pub fn remove_directed_edge(&mut self, from: NodeId, to: NodeId) -> Result<Weight> {
        self.check(to)?;
        let removed = self.node_mut(from)?.remove_edge(to);
        removed.ok_or_else(|| self.missing_edge(from, to))
    }

    /// Remove both directions of an undirected edge
    ///
    /// Either both `a -> b` and `b -> a` are removed, or neither is: if one
    /// direction is missing this fails with `EdgeNotFound` and the graph is
    /// left untouched. Returns the weight of `a -> b`.
    pub fn remove_undirected_edge(&mut self, a: NodeId, b: NodeId) -> Result<Weight> {
        self.check(a)?;
        self.check(b)?;
        if !self.nodes[a.0].has_edge(b) {
            return Err(self.missing_edge(a, b));
        }
        if !self.nodes[b.0].has_edge(a) {
            return Err(self.missing_edge(b, a));
        }

        let weight = self.nodes[a.0].remove_edge(b).unwrap_or_default();
        self.nodes[b.0].remove_edge(a);
        Ok(weight)
    }

    /// Weight of the edge `from -> to`, reported with node names on failure
    pub fn weight(&self, from: NodeId, to: NodeId) -> Result<Weight> {
        self.check(to)?;
        self.try_node(from)?
            .weight(to)
            .map_err(|_| self.missing_edge(from, to))
    }

    /// Every directed edge as `(from, to, weight)`
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, Weight)> + '_ {
        self.nodes
            .iter()
            .flat_map(|node| node.edges().map(move |(to, weight)| (node.id(), to, weight)))
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(Node::degree).sum()
    }

    /// Sum of edge weights, counting a symmetric pair `a <-> b` only once
    ///
    /// Saturates at `Weight::MAX` like path costs do.
    pub fn total_weight(&self) -> Weight {
        self.edges()
            .filter(|&(from, to, weight)| {
                let symmetric = from != to && self.nodes[to.0].weight(from).ok() == Some(weight);
                !symmetric || from < to
            })
            .fold(0, |total: Weight, (_, _, weight)| total.saturating_add(weight))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────────────────────

    /// Reject handles past the end of the arena
    pub(crate) fn check(&self, id: NodeId) -> Result<()> {
        if id.0 < self.nodes.len() {
            Ok(())
        } else {
            Err(Error::InvalidNode(id))
        }
    }

    pub(crate) fn try_node(&self, id: NodeId) -> Result<&Node> {
        self.nodes.get(id.0).ok_or(Error::InvalidNode(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.nodes.get_mut(id.0).ok_or(Error::InvalidNode(id))
    }

    fn missing_edge(&self, from: NodeId, to: NodeId) -> Error {
        Error::edge_not_found(self.nodes[from.0].name(), self.nodes[to.0].name())
    }
}

impl Index<NodeId> for Graph {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_get_or_create_is_idempotent() {
        let mut graph = Graph::new();
        let a = graph.get_or_create_node("A");
        let again = graph.get_or_create_node("A");
        let b = graph.insert_node("B");

        assert_eq!(a, again);
        assert_ne!(a, b);
        assert_eq!(graph.len(), 2);
        assert_eq!(graph[a].name(), "A");
    }

    #[test]
    fn test_lookup_does_not_create() {
        let mut graph = Graph::new();
        let a = graph.get_or_create_node("A");

        assert_eq!(graph.lookup("A"), Some(a));
        assert_eq!(graph.lookup("typo"), None);
        assert!(!graph.contains_node("typo"));
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_undirected_edge_both_directions() {
        let mut graph = Graph::new();
        let a = graph.get_or_create_node("A");
        let b = graph.get_or_create_node("B");
        graph.add_undirected_edge(a, b, 5).unwrap();

        assert!(graph[a].has_edge(b));
        assert!(graph[b].has_edge(a));
        assert_eq!(graph[a].weight(b), Ok(5));
        assert_eq!(graph[b].weight(&graph[a]), Ok(5));
    }

    #[test]
    fn test_directed_edge_is_one_way() {
        let mut graph = Graph::new();
        let a = graph.get_or_create_node("A");
        let b = graph.get_or_create_node("B");
        graph.add_directed_edge(a, b, 3).unwrap();

        assert!(graph[a].has_edge(b));
        assert!(!graph[b].has_edge(a));

        // Re-adding overwrites rather than duplicating
        graph.add_directed_edge(a, b, 8).unwrap();
        assert_eq!(graph[a].degree(), 1);
        assert_eq!(graph.weight(a, b), Ok(8));
    }

    #[test]
    fn test_remove_missing_edge() {
        let mut graph = Graph::new();
        let a = graph.get_or_create_node("A");
        let b = graph.get_or_create_node("B");

        assert_eq!(
            graph.remove_directed_edge(a, b),
            Err(Error::edge_not_found("A", "B"))
        );
        assert_eq!(
            graph.remove_undirected_edge(a, b),
            Err(Error::edge_not_found("A", "B"))
        );
        assert_eq!(graph.weight(b, a), Err(Error::edge_not_found("B", "A")));
    }

    #[test]
    fn test_undirected_round_trip() {
        let mut graph = Graph::new();
        let a = graph.get_or_create_node("A");
        let b = graph.get_or_create_node("B");
        graph.add_undirected_edge(a, b, 2).unwrap();

        assert_eq!(graph.remove_undirected_edge(b, a), Ok(2));
        assert!(!graph[a].has_edge(b));
        assert!(!graph[b].has_edge(a));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_undirected_removal_is_atomic() {
        let mut graph = Graph::new();
        let a = graph.get_or_create_node("A");
        let b = graph.get_or_create_node("B");
        graph.add_directed_edge(a, b, 1).unwrap();

        assert_eq!(
            graph.remove_undirected_edge(a, b),
            Err(Error::edge_not_found("B", "A"))
        );
        // The one-way edge survives the failed removal
        assert!(graph[a].has_edge(b));
        assert_eq!(graph.remove_directed_edge(a, b), Ok(1));
    }

    #[test]
    fn test_undirected_self_loop() {
        let mut graph = Graph::new();
        let a = graph.get_or_create_node("A");
        graph.add_undirected_edge(a, a, 4).unwrap();

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.total_weight(), 4);
        assert_eq!(graph.remove_undirected_edge(a, a), Ok(4));
        assert!(!graph[a].has_edge(a));
    }

    #[test]
    fn test_out_of_range_handle_rejected() {
        let mut small = Graph::new();
        let a = small.get_or_create_node("A");

        let mut big = Graph::new();
        big.get_or_create_node("X");
        let far = big.get_or_create_node("Y");

        assert_eq!(
            small.add_directed_edge(a, far, 1),
            Err(Error::InvalidNode(far))
        );
        assert!(small.node(far).is_none());
        assert_eq!(small.weight(far, a), Err(Error::InvalidNode(far)));
        assert_eq!(
            small.remove_undirected_edge(a, far),
            Err(Error::InvalidNode(far))
        );
    }

    #[test]
    fn test_edges_and_total_weight() {
        let mut graph = Graph::new();
        let a = graph.get_or_create_node("A");
        let b = graph.get_or_create_node("B");
        let c = graph.get_or_create_node("C");
        graph.add_undirected_edge(a, b, 2).unwrap();
        graph.add_directed_edge(b, c, 5).unwrap();
        graph.add_directed_edge(c, b, 7).unwrap();

        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.edges().count(), 4);
        // A-B counted once, B->C and C->B differ so both count
        assert_eq!(graph.total_weight(), 2 + 5 + 7);
    }

    #[test]
    fn test_random_node() {
        let graph = Graph::new();
        assert_eq!(graph.random_node(), Err(Error::EmptyGraph));

        let mut graph = Graph::new();
        for name in ["A", "B", "C"] {
            graph.get_or_create_node(name);
        }
        let picked = graph.random_node().unwrap();
        assert!(graph.node(picked).is_some());

        let first = graph.random_node_with(&mut StdRng::seed_from_u64(42)).unwrap();
        let second = graph.random_node_with(&mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(first, second);
    }
}
