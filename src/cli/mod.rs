//! CLI argument parsing for waygraph
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --config, --without-edge

pub mod output;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use output::OutputFormat;
use parse::{parse_edge_spec, EdgeSpec};

/// Waygraph - route queries over the sample city road graph
#[derive(Parser, Debug)]
#[command(name = "waygraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter, either a level (info) or directives (waygraph_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Graph configuration file (TOML)
    #[arg(long, global = true, env = "WAYGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Remove the directed edge FROM:TO before running the query
    #[arg(
        long = "without-edge",
        global = true,
        value_name = "FROM:TO",
        value_parser = parse_edge_spec,
        action = clap::ArgAction::Append
    )]
    pub without_edges: Vec<EdgeSpec>,

    /// Remove a vertex before running the query
    #[arg(
        long = "without-vertex",
        global = true,
        value_name = "VERTEX",
        action = clap::ArgAction::Append
    )]
    pub without_vertices: Vec<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all vertices
    Vertices,

    /// List the outgoing edges of a vertex
    Neighbors {
        /// Vertex whose edges are listed
        vertex: String,
    },

    /// Show the weight of an edge
    Weight {
        /// Source vertex
        from: String,
        /// Target vertex
        to: String,
    },

    /// Tree of paths with the fewest edges from a source
    #[command(visible_alias = "bfs")]
    FewestEdges {
        /// Vertex the search starts from
        source: String,
    },

    /// Lowest-cost path to every vertex from a source
    #[command(visible_alias = "dijkstra")]
    LowestCost {
        /// Vertex the search starts from
        source: String,
    },

    /// Minimum spanning tree grown from a source
    #[command(visible_alias = "prim")]
    LowestTotal {
        /// Vertex the tree is rooted at
        source: String,
    },
}
