//! Traversal commands (bfs, dfs)

use clap::Args;
use serde::Serialize;

use super::resolve;
use crate::output::{format_output, render_rows, Tabular};
use crate::AppContext;
use trellis_core::{Node, TraversalStats};

#[derive(Args)]
pub struct TraverseArgs {
    /// Node to start from
    pub start: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    Breadth,
    Depth,
}

#[derive(Debug, Serialize)]
pub struct TraversalReport {
    pub order: Order,
    pub start: String,
    pub visited: Vec<String>,
    pub stats: TraversalStats,
}

impl Tabular for TraversalReport {
    fn to_table(&self) -> String {
        let rows: Vec<Vec<String>> = self
            .visited
            .iter()
            .enumerate()
            .map(|(i, name)| vec![(i + 1).to_string(), name.clone()])
            .collect();
        format!(
            "{}\n\n{} nodes visited, {} edges traversed, max depth {}",
            render_rows(&["#", "node"], &rows),
            self.stats.nodes_visited,
            self.stats.edges_traversed,
            self.stats.max_depth_reached
        )
    }
}

pub fn run(args: &TraverseArgs, order: Order, ctx: &AppContext) -> anyhow::Result<String> {
    let start = resolve(&ctx.graph, &args.start)?;
    let mut visited = Vec::new();
    let mut record = |node: &Node| visited.push(node.name().to_string());

    let stats = match order {
        Order::Breadth => ctx.graph.bfs(start, &mut record)?,
        Order::Depth => ctx.graph.dfs(start, &mut record)?,
    };

    let report = TraversalReport {
        order,
        start: args.start.clone(),
        visited,
        stats,
    };
    Ok(format_output(&report, ctx.format))
}
