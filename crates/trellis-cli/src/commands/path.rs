//! Shortest path command

use clap::Args;
use serde::Serialize;

use super::resolve;
use crate::output::{format_output, render_rows, Tabular};
use crate::AppContext;
use trellis_core::Cost;

#[derive(Args)]
pub struct DijkstraArgs {
    /// Node to start from
    pub start: String,

    /// Also print the cheapest route to this node
    #[arg(long)]
    pub to: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CostEntry {
    pub node: String,
    pub cost: Cost,
}

#[derive(Debug, Serialize)]
pub struct Route {
    pub target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<Cost>,
    pub nodes: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct PathReport {
    pub start: String,
    pub costs: Vec<CostEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<Route>,
}

impl Tabular for PathReport {
    fn to_table(&self) -> String {
        let rows: Vec<Vec<String>> = self
            .costs
            .iter()
            .map(|entry| vec![entry.node.clone(), entry.cost.to_string()])
            .collect();
        let mut out = render_rows(&["node", "cost"], &rows);

        if let Some(route) = &self.route {
            out.push_str("\n\n");
            match route.cost {
                Some(cost) => out.push_str(&format!(
                    "Path to {} (cost {}): {}",
                    route.target,
                    cost,
                    route.nodes.join(" -> ")
                )),
                None => out.push_str(&format!(
                    "No path from {} to {}",
                    self.start, route.target
                )),
            }
        }
        out
    }
}

pub fn run(args: &DijkstraArgs, ctx: &AppContext) -> anyhow::Result<String> {
    let graph = &ctx.graph;
    let start = resolve(graph, &args.start)?;
    let paths = graph.shortest_paths(start)?;

    let mut costs: Vec<CostEntry> = paths
        .costs()
        .iter()
        .map(|(&id, &cost)| CostEntry {
            node: graph[id].name().to_string(),
            cost,
        })
        .collect();
    costs.sort_by(|a, b| a.cost.cmp(&b.cost).then_with(|| a.node.cmp(&b.node)));

    let route = match &args.to {
        Some(target_name) => {
            let target = resolve(graph, target_name)?;
            let nodes = paths
                .path_to(target)
                .unwrap_or_default()
                .into_iter()
                .map(|id| graph[id].name().to_string())
                .collect();
            Some(Route {
                target: target_name.clone(),
                cost: paths.cost(target),
                nodes,
            })
        }
        None => None,
    };

    let report = PathReport {
        start: args.start.clone(),
        costs,
        route,
    };
    Ok(format_output(&report, ctx.format))
}
