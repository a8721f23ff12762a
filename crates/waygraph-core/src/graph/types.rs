use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use serde::Serialize;

/// Requirements for a vertex identifier
pub trait Vertex: Eq + Hash + Clone + Debug {}
impl<T> Vertex for T where T: Eq + Hash + Clone + Debug {}

/// A directed, weighted edge
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge<V> {
    pub source: V,
    pub target: V,
    pub weight: f64,
}

impl<V> Edge<V> {
    pub fn new(source: V, target: V, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }
}

/// Child to parent links of a traversal tree; the root maps to `None`
pub type ParentTree<V> = HashMap<V, Option<V>>;

/// Distance and predecessor of one vertex in a lowest-cost table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostEntry<V> {
    /// Total weight of the cheapest known path; `f64::INFINITY` when unreachable
    pub distance: f64,
    /// Previous vertex on that path; `None` for the source and unreachable vertices
    pub predecessor: Option<V>,
}

impl<V> CostEntry<V> {
    pub fn root() -> Self {
        Self {
            distance: 0.0,
            predecessor: None,
        }
    }

    pub fn unreached() -> Self {
        Self {
            distance: f64::INFINITY,
            predecessor: None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }
}

/// Lowest-cost table: every vertex of the graph with its distance from the source
pub type CostTable<V> = HashMap<V, CostEntry<V>>;

/// Minimum spanning tree grown from a root vertex
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanningTree<V: Eq + Hash> {
    pub parents: ParentTree<V>,
    pub total_weight: f64,
}

impl<V: Vertex> SpanningTree<V> {
    /// Number of (parent, child) edges in the tree
    pub fn edge_count(&self) -> usize {
        self.parents.values().filter(|p| p.is_some()).count()
    }
}

/// Follow parent links from `vertex` back to the root.
///
/// Returns the path root-first, or `None` if `vertex` is not in the tree.
pub fn path_to<V: Vertex>(tree: &ParentTree<V>, vertex: &V) -> Option<Vec<V>> {
    let mut path = vec![vertex.clone()];
    let mut current = tree.get(vertex)?;

    while let Some(parent) = current {
        // A cycle here means the table was not produced by a traversal
        if path.len() > tree.len() {
            return None;
        }
        path.push(parent.clone());
        current = tree.get(parent)?;
    }

    path.reverse();
    Some(path)
}
