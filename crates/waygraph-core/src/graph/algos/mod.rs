//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `bfs`: Breadth-first search for fewest-edge trees
//! - `dijkstra`: Weighted shortest paths from a single source
//! - `prim`: Minimum spanning tree grown from a root
//! - `shared`: Common utilities used by multiple algorithms

pub mod bfs;
pub mod dijkstra;
pub mod prim;
pub mod shared;

pub use bfs::bfs_traverse;
pub use dijkstra::dijkstra_traverse;
pub use prim::prim_spanning_tree;
pub use shared::{HeapEntry, HeapSequence};
