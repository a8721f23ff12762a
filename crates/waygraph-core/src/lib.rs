//! Waygraph Core Library
//!
//! Weighted directed graph with fewest-edges (BFS), lowest-cost (Dijkstra)
//! and lowest-total (Prim) queries.

pub mod config;
pub mod dataset;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;

pub use config::{GraphConfig, RemovalPolicy};
pub use error::{GraphError, Result};
pub use graph::{CostEntry, CostTable, Edge, ParentTree, SpanningTree, Vertex, WeightedGraph};
