//! Single-source shortest paths (Dijkstra)

use crate::error::Result;
use crate::graph::Graph;
use crate::node::NodeId;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Total weight of a path
pub type Cost = u64;

/// State for Dijkstra priority queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DijkstraState {
    cost: Cost,
    node: NodeId,
}

impl Ord for DijkstraState {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap; node breaks ties so pops are deterministic
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for DijkstraState {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Cheapest known cost, and the predecessor on that path, for every node
/// reachable from a start node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    start: NodeId,
    costs: HashMap<NodeId, Cost>,
    parents: HashMap<NodeId, NodeId>,
}

impl ShortestPaths {
    pub fn start(&self) -> NodeId {
        self.start
    }

    /// Cost of the cheapest path to `node`, or `None` if it is unreachable
    pub fn cost(&self, node: NodeId) -> Option<Cost> {
        self.costs.get(&node).copied()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.costs.contains_key(&node)
    }

    pub fn costs(&self) -> &HashMap<NodeId, Cost> {
        &self.costs
    }

    pub fn into_costs(self) -> HashMap<NodeId, Cost> {
        self.costs
    }

    /// Number of reachable nodes, the start included
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Nodes on the cheapest path from the start to `target`, both ends included
    pub fn path_to(&self, target: NodeId) -> Option<Vec<NodeId>> {
        if !self.costs.contains_key(&target) {
            return None;
        }

        let mut nodes = vec![target];
        let mut current = target;
        while current != self.start {
            current = *self.parents.get(&current)?;
            nodes.push(current);
        }
        nodes.reverse();
        Some(nodes)
    }
}

impl Graph {
    /// Cost of the cheapest path from `start` to every reachable node
    ///
    /// Edge weights are unsigned, so the usual non-negativity requirement
    /// holds by construction. Unreachable nodes are absent from the map.
    pub fn dijkstra(&self, start: NodeId) -> Result<HashMap<NodeId, Cost>> {
        Ok(self.shortest_paths(start)?.into_costs())
    }

    /// Dijkstra from the node named `start_name`, creating it if absent
    pub fn dijkstra_by_name(&mut self, start_name: &str) -> HashMap<NodeId, Cost> {
        let start = self.get_or_create_node(start_name);
        self.dijkstra(start).unwrap_or_default()
    }

    /// Dijkstra's algorithm, keeping predecessors for path reconstruction
    pub fn shortest_paths(&self, start: NodeId) -> Result<ShortestPaths> {
        self.check(start)?;
        let mut costs: HashMap<NodeId, Cost> = HashMap::new();
        let mut parents: HashMap<NodeId, NodeId> = HashMap::new();
        let mut finalized: HashSet<NodeId> = HashSet::new();
        let mut heap = BinaryHeap::new();

        costs.insert(start, 0);
        heap.push(DijkstraState {
            cost: 0,
            node: start,
        });

        while let Some(DijkstraState { cost, node }) = heap.pop() {
            // Stale entry for a node that was already settled more cheaply
            if !finalized.insert(node) {
                continue;
            }

            for (next, weight) in self[node].edges() {
                if finalized.contains(&next) {
                    continue;
                }

                let new_cost = cost.saturating_add(weight);
                if costs.get(&next).map_or(true, |&known| new_cost < known) {
                    tracing::trace!("Relaxed {} via {} to cost {}", next, node, new_cost);
                    costs.insert(next, new_cost);
                    parents.insert(next, node);
                    heap.push(DijkstraState {
                        cost: new_cost,
                        node: next,
                    });
                }
            }
        }

        tracing::debug!(
            "Dijkstra from {} settled {} of {} nodes",
            self[start].name(),
            finalized.len(),
            self.len()
        );

        Ok(ShortestPaths {
            start,
            costs,
            parents,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn directed(graph: &mut Graph, edges: &[(&str, &str, u64)]) {
        for &(from, to, weight) in edges {
            let from = graph.get_or_create_node(from);
            let to = graph.get_or_create_node(to);
            graph.add_directed_edge(from, to, weight).unwrap();
        }
    }

    fn costs_by_name(graph: &Graph, costs: &HashMap<NodeId, Cost>) -> HashMap<String, Cost> {
        costs
            .iter()
            .map(|(&id, &cost)| (graph[id].name().to_string(), cost))
            .collect()
    }

    #[test]
    fn test_relaxation_beats_direct_edge() {
        let mut graph = Graph::new();
        directed(&mut graph, &[("A", "B", 4), ("A", "C", 1), ("C", "B", 1)]);

        let costs = graph.dijkstra_by_name("A");
        let expected: HashMap<String, Cost> =
            [("A".to_string(), 0), ("C".to_string(), 1), ("B".to_string(), 2)]
                .into_iter()
                .collect();
        assert_eq!(costs_by_name(&graph, &costs), expected);
    }

    #[test]
    fn test_unreachable_nodes_absent() {
        let mut graph = Graph::new();
        directed(&mut graph, &[("A", "B", 3), ("C", "A", 1)]);
        let a = graph.lookup("A").unwrap();
        let c = graph.lookup("C").unwrap();

        let costs = graph.dijkstra(a).unwrap();
        assert_eq!(costs.len(), 2);
        assert!(!costs.contains_key(&c));
    }

    #[test]
    fn test_unknown_start_name() {
        let mut graph = Graph::new();
        directed(&mut graph, &[("A", "B", 3)]);

        let costs = graph.dijkstra_by_name("Z");
        let z = graph.lookup("Z").unwrap();
        assert_eq!(costs, HashMap::from([(z, 0)]));
    }

    #[test]
    fn test_path_reconstruction() {
        // A --1--> B --2--> C --1--> D
        //          |                 ^
        //          +-------5---------+
        let mut graph = Graph::new();
        directed(
            &mut graph,
            &[("A", "B", 1), ("B", "C", 2), ("C", "D", 1), ("B", "D", 5)],
        );
        let id = |name: &str| graph.lookup(name).unwrap();

        let paths = graph.shortest_paths(id("A")).unwrap();
        assert_eq!(paths.start(), id("A"));
        assert_eq!(paths.cost(id("D")), Some(4));
        assert_eq!(
            paths.path_to(id("D")),
            Some(vec![id("A"), id("B"), id("C"), id("D")])
        );
        assert_eq!(paths.path_to(id("A")), Some(vec![id("A")]));
        assert_eq!(paths.len(), 4);
    }

    #[test]
    fn test_no_path_found() {
        let mut graph = Graph::new();
        let a = graph.get_or_create_node("A");
        let b = graph.get_or_create_node("B");

        let paths = graph.shortest_paths(a).unwrap();
        assert!(paths.contains(a));
        assert_eq!(paths.cost(b), None);
        assert_eq!(paths.path_to(b), None);
    }

    #[test]
    fn test_undirected_cycle() {
        let mut graph = Graph::new();
        for (from, to, weight) in [("A", "B", 7), ("B", "C", 1), ("C", "D", 1), ("D", "A", 2)] {
            let from = graph.get_or_create_node(from);
            let to = graph.get_or_create_node(to);
            graph.add_undirected_edge(from, to, weight).unwrap();
        }
        let a = graph.lookup("A").unwrap();

        let costs = costs_by_name(&graph, &graph.dijkstra(a).unwrap());
        assert_eq!(costs["B"], 4);
        assert_eq!(costs["C"], 3);
        assert_eq!(costs["D"], 2);
    }

    #[test]
    fn test_zero_weight_edges() {
        let mut graph = Graph::new();
        directed(&mut graph, &[("A", "B", 0), ("B", "C", 0), ("A", "C", 1)]);
        let a = graph.lookup("A").unwrap();
        let c = graph.lookup("C").unwrap();

        assert_eq!(graph.dijkstra(a).unwrap()[&c], 0);
    }

    #[test]
    fn test_saturated_cost_still_reached() {
        let mut graph = Graph::new();
        directed(&mut graph, &[("A", "B", u64::MAX), ("B", "C", 5)]);
        let id = |name: &str| graph.lookup(name).unwrap();

        let paths = graph.shortest_paths(id("A")).unwrap();
        assert_eq!(paths.cost(id("B")), Some(Cost::MAX));
        assert_eq!(paths.cost(id("C")), Some(Cost::MAX));
        assert_eq!(
            paths.path_to(id("C")),
            Some(vec![id("A"), id("B"), id("C")])
        );
    }

    #[test]
    fn test_out_of_range_start() {
        let graph = Graph::new();
        assert_eq!(
            graph.dijkstra(NodeId(0)),
            Err(Error::InvalidNode(NodeId(0)))
        );
    }
}
