//! Weighted directed graph and its traversal queries
//!
//! Provides graph algorithms over a [`WeightedGraph`]:
//! - BFS for fewest-edge trees
//! - Dijkstra for lowest-cost paths from a single source
//! - Prim for minimum spanning trees
//! - Graph provider trait the algorithms read adjacency through

pub mod algos;
pub mod traversal;
pub mod types;
pub mod weighted;

pub use algos::{bfs_traverse, dijkstra_traverse, prim_spanning_tree};
pub use traversal::GraphProvider;
pub use types::{path_to, CostEntry, CostTable, Edge, ParentTree, SpanningTree, Vertex};
pub use weighted::WeightedGraph;
