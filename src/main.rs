use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tree_graph_basics::{AdjList, AdjMatrix, BinaryTree, Graph, Order};

/// Walks binary trees and builds small graphs.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Number of random tree nodes and graph vertices.
    #[arg(long, default_value_t = 8)]
    nodes: usize,

    /// Target sum for the path queries.
    #[arg(long, default_value_t = 8, allow_negative_numbers = true)]
    target: i32,

    /// Seed for the random generator. Omitted means a fresh seed per run.
    #[arg(long)]
    seed: Option<u64>,

    /// Build a directed graph instead of an undirected one.
    #[arg(long)]
    directed: bool,

    /// Write the random graph to this path as a Graphviz DOT file.
    #[arg(long)]
    dot: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let example = BinaryTree::from_level_order([Some(1), Some(2), Some(3), Some(4), Some(5)]);
    println!("Example tree: {example}");
    for order in [Order::Pre, Order::In, Order::Post] {
        println!("  {order}: {:?}", example.traverse(order));
    }

    let tree = BinaryTree::random(cli.nodes, -5..10, &mut rng);
    println!("Random tree: {tree}");
    println!(
        "  max depth: {} (recursive: {})",
        tree.max_depth(),
        tree.max_depth_recursive()
    );
    println!("  good nodes: {}", tree.count_good_nodes());
    println!(
        "  paths summing to {}: exists={} count={}",
        cli.target,
        tree.has_path_sum(cli.target),
        tree.count_path_sum(cli.target)
    );
    match tree.find_path_with_sum(cli.target) {
        Some(path) => println!("  first path: {path:?}"),
        None => println!("  first path: none"),
    }
    println!("  all paths: {:?}", tree.find_paths_with_sum(cli.target));

    // Endpoints are drawn one past the last vertex so some edges get rejected.
    let mut list = AdjList::new(cli.nodes, !cli.directed);
    let mut rejected = 0;
    for _ in 0..cli.nodes * 2 {
        let u = rng.gen_range(0..=cli.nodes);
        let v = rng.gen_range(0..=cli.nodes);
        let weight = rng.gen_range(1..10);
        if list.add_weighted_edge(u, v, weight).is_err() {
            rejected += 1;
        }
    }
    println!("Random graph: {} edges, {} rejected", list.edge_count(), rejected);
    println!("{list}");

    let matrix = AdjMatrix::from(&list);
    println!("{matrix}");
    matrix.display();

    if let Some(path) = &cli.dot {
        fs::write(path, list.to_dot())
            .with_context(|| format!("failed to write DOT file {}", path.display()))?;
        info!(path = %path.display(), "DOT file saved");
    }

    Ok(())
}

/// Initialize tracing subscriber with environment filter.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
