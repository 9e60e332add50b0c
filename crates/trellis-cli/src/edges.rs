//! Edge arguments and graph construction

use std::str::FromStr;

use trellis_core::{Graph, Weight};

/// One `--edge FROM:TO[:WEIGHT]` argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub weight: Option<Weight>,
}

impl FromStr for EdgeSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        let (from, to, weight) = match parts.as_slice() {
            [from, to] => (*from, *to, None),
            [from, to, weight] => {
                let weight = weight
                    .trim()
                    .parse::<Weight>()
                    .map_err(|_| format!("invalid weight '{}' in edge '{}'", weight, s))?;
                (*from, *to, Some(weight))
            }
            _ => return Err(format!("expected FROM:TO[:WEIGHT], got '{}'", s)),
        };

        let (from, to) = (from.trim(), to.trim());
        if from.is_empty() || to.is_empty() {
            return Err(format!("empty node name in edge '{}'", s));
        }

        Ok(Self {
            from: from.to_string(),
            to: to.to_string(),
            weight,
        })
    }
}

/// Build a graph from edge arguments
///
/// Edges without an explicit weight get `default_weight`. Later edges between
/// the same pair overwrite earlier ones.
pub fn build_graph(edges: &[EdgeSpec], directed: bool, default_weight: Weight) -> Graph {
    let mut graph = Graph::new();
    for edge in edges {
        let from = graph.get_or_create_node(&edge.from);
        let to = graph.get_or_create_node(&edge.to);
        let weight = edge.weight.unwrap_or(default_weight);
        let added = if directed {
            graph.add_directed_edge(from, to, weight)
        } else {
            graph.add_undirected_edge(from, to, weight)
        };
        if let Err(e) = added {
            tracing::warn!("Skipping edge {}:{}: {}", edge.from, edge.to, e);
        }
    }

    tracing::debug!(
        "Built graph with {} nodes and {} directed edges",
        graph.len(),
        graph.edge_count()
    );
    graph
}
