//! Command dispatch logic for waygraph

use std::time::Instant;

use tracing::debug;
use waygraph_core::dataset;
use waygraph_core::error::Result;
use waygraph_core::{GraphConfig, WeightedGraph};

use crate::cli::{Cli, Commands};
use crate::commands::query;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let graph = load_graph(cli)?;

    debug!(
        elapsed = ?start.elapsed(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "load_graph"
    );

    let result = match &cli.command {
        None => {
            print_banner();
            Ok(())
        }
        Some(Commands::Vertices) => query::vertices(cli, &graph),
        Some(Commands::Neighbors { vertex }) => query::neighbors(cli, &graph, vertex),
        Some(Commands::Weight { from, to }) => query::weight(cli, &graph, from, to),
        Some(Commands::FewestEdges { source }) => query::fewest_edges(cli, &graph, source),
        Some(Commands::LowestCost { source }) => query::lowest_cost(cli, &graph, source),
        Some(Commands::LowestTotal { source }) => query::lowest_total(cli, &graph, source),
    };

    debug!(elapsed = ?start.elapsed(), "run_command");
    result
}

/// Build the city graph and apply the removals requested on the command line
fn load_graph(cli: &Cli) -> Result<WeightedGraph<String>> {
    let config = match &cli.config {
        Some(path) => GraphConfig::load(path)?,
        None => GraphConfig::default(),
    };

    let mut graph = dataset::city_graph_with(config)?;

    for edge in &cli.without_edges {
        let weight = graph.weight(&edge.from, &edge.to)?;
        graph.remove_edge(&edge.from, &edge.to, weight)?;
    }

    for vertex in &cli.without_vertices {
        graph.remove_vertex(vertex)?;
    }

    Ok(graph)
}

fn print_banner() {
    println!("waygraph {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Route queries over a weighted road graph.");
    println!();
    println!("Run `waygraph --help` for usage information.");
}
