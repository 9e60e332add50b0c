//! Trellis CLI - Build a weighted graph from edge arguments and query it

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod edges;
mod output;

use commands::{completions, mst, path, traverse};
use config::Config;
use edges::{build_graph, EdgeSpec};
use output::OutputFormat;
use trellis_core::Graph;

#[derive(Parser)]
#[command(name = "trellis")]
#[command(author, version, about = "Traversal, shortest-path and spanning-tree queries over a weighted graph")]
pub struct Cli {
    /// Edge as FROM:TO[:WEIGHT] (repeatable)
    #[arg(short, long = "edge", value_name = "FROM:TO[:WEIGHT]", global = true)]
    pub edges: Vec<EdgeSpec>,

    /// Treat edges as one-way instead of undirected
    #[arg(long, global = true)]
    pub directed: bool,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Seed for random start selection
    #[arg(long, env = "TRELLIS_SEED", global = true)]
    pub seed: Option<u64>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Breadth-first traversal from a node
    Bfs(traverse::TraverseArgs),
    /// Depth-first traversal from a node
    Dfs(traverse::TraverseArgs),
    /// Cheapest path costs from a node (Dijkstra)
    Dijkstra(path::DijkstraArgs),
    /// Minimum spanning tree (Prim-Jarnik)
    Mst(mst::MstArgs),
    /// Manage configuration
    Config(commands::config::ConfigArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Application context: the graph built from the arguments plus effective settings
pub struct AppContext {
    pub graph: Graph,
    pub format: OutputFormat,
    pub seed: Option<u64>,
}

impl AppContext {
    pub fn new(cli: &Cli) -> anyhow::Result<Self> {
        let config = Config::load().context("Failed to load config")?;
        let directed = cli.directed || config.directed;

        Ok(Self {
            graph: build_graph(&cli.edges, directed, config.default_weight),
            format: cli.format.unwrap_or(config.format),
            seed: cli.seed.or(config.seed),
        })
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Starting trellis CLI");

    // These don't need a graph
    match &cli.command {
        Commands::Config(args) => return commands::config::run(args),
        Commands::Completions(args) => return completions::run(args),
        _ => {}
    }

    let ctx = AppContext::new(&cli)?;

    let rendered = match &cli.command {
        Commands::Bfs(args) => traverse::run(args, traverse::Order::Breadth, &ctx)?,
        Commands::Dfs(args) => traverse::run(args, traverse::Order::Depth, &ctx)?,
        Commands::Dijkstra(args) => path::run(args, &ctx)?,
        Commands::Mst(args) => mst::run(args, &ctx)?,
        Commands::Config(_) | Commands::Completions(_) => return Ok(()),
    };

    if !cli.quiet {
        println!("{}", rendered);
    }

    Ok(())
}
