//! Trellis Core - In-memory graph engine
//!
//! Nodes are created by name and wired together with weighted directed or
//! undirected edges. The [`Graph`] then answers reachability and cost
//! questions: breadth-first and depth-first traversal, single-source
//! shortest paths (Dijkstra) and minimum spanning trees (Prim-Jarnik).
//!
//! ```
//! use trellis_core::Graph;
//!
//! let mut graph = Graph::new();
//! let a = graph.get_or_create_node("A");
//! let b = graph.get_or_create_node("B");
//! let c = graph.get_or_create_node("C");
//! graph.add_directed_edge(a, b, 4).unwrap();
//! graph.add_directed_edge(a, c, 1).unwrap();
//! graph.add_directed_edge(c, b, 1).unwrap();
//!
//! let costs = graph.dijkstra(a).unwrap();
//! assert_eq!(costs[&b], 2);
//! ```

pub mod error;
pub mod graph;
mod mst;
pub mod node;
pub mod shortest_path;
pub mod traversal;

pub use error::{Error, Result};
pub use graph::Graph;
pub use node::{Node, NodeId, Weight};
pub use shortest_path::{Cost, ShortestPaths};
pub use traversal::{NodeVisitor, TraversalStats};
