//! Minimum spanning tree command

use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use super::resolve;
use crate::output::{format_output, render_rows, Tabular};
use crate::AppContext;
use std::collections::HashSet;
use trellis_core::{Graph, Node, NodeId, Weight};

#[derive(Args)]
pub struct MstArgs {
    /// Node to grow the tree from (random if omitted)
    #[arg(long)]
    pub start: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TreeEdge {
    pub from: String,
    pub to: String,
    pub weight: Weight,
}

#[derive(Debug, Serialize)]
pub struct TreeReport {
    pub start: String,
    pub edges: Vec<TreeEdge>,
    pub total_weight: Weight,
    /// Nodes outside the start node's component
    pub unreached: Vec<String>,
}

impl Tabular for TreeReport {
    fn to_table(&self) -> String {
        let rows: Vec<Vec<String>> = self
            .edges
            .iter()
            .map(|edge| vec![edge.from.clone(), edge.to.clone(), edge.weight.to_string()])
            .collect();
        let mut out = format!(
            "{}\n\nTree from {}: {} edges, total weight {}",
            render_rows(&["from", "to", "weight"], &rows),
            self.start,
            self.edges.len(),
            self.total_weight
        );
        if !self.unreached.is_empty() {
            out.push_str(&format!("\nNot reachable: {}", self.unreached.join(", ")));
        }
        out
    }
}

pub fn run(args: &MstArgs, ctx: &AppContext) -> anyhow::Result<String> {
    let graph = &ctx.graph;
    let start = match (&args.start, ctx.seed) {
        (Some(name), _) => resolve(graph, name)?,
        (None, Some(seed)) => graph.random_node_with(&mut StdRng::seed_from_u64(seed))?,
        (None, None) => graph.random_node()?,
    };
    let tree = graph.prim_jarnik_from(start)?;

    let report = TreeReport {
        start: graph[start].name().to_string(),
        edges: tree_edges(&tree),
        total_weight: tree.total_weight(),
        unreached: unreached(&tree, start)?,
    };
    Ok(format_output(&report, ctx.format))
}

/// Each undirected tree edge once, with endpoints in name order
fn tree_edges(tree: &Graph) -> Vec<TreeEdge> {
    let mut edges: Vec<TreeEdge> = tree
        .edges()
        .filter(|(from, to, _)| from < to)
        .map(|(from, to, weight)| {
            let (a, b) = (tree[from].name(), tree[to].name());
            let (from, to) = if a <= b { (a, b) } else { (b, a) };
            TreeEdge {
                from: from.to_string(),
                to: to.to_string(),
                weight,
            }
        })
        .collect();
    edges.sort_by(|x, y| {
        x.weight
            .cmp(&y.weight)
            .then_with(|| x.from.cmp(&y.from))
            .then_with(|| x.to.cmp(&y.to))
    });
    edges
}

fn unreached(tree: &Graph, start: NodeId) -> trellis_core::Result<Vec<String>> {
    let mut reached = HashSet::new();
    tree.bfs(start, &mut |node: &Node| {
        reached.insert(node.id());
    })?;
    Ok(tree
        .nodes()
        .filter(|node| !reached.contains(&node.id()))
        .map(|node| node.name().to_string())
        .collect())
}
