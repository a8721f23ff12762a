use std::collections::HashMap;

use tracing::trace;

use crate::config::{GraphConfig, RemovalPolicy};
use crate::error::{GraphError, Result};
use crate::graph::algos::{bfs_traverse, dijkstra_traverse, prim_spanning_tree};
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{CostTable, Edge, ParentTree, SpanningTree, Vertex};

#[derive(Debug, Clone)]
struct Neighbor<V> {
    vertex: V,
    weight: f64,
}

/// Directed graph with `f64` edge weights.
///
/// Each vertex keeps its outgoing edges in insertion order, which is the
/// order every traversal explores them in. At most one edge exists per
/// ordered (source, target) pair. Weights are expected to be non-negative;
/// this is not checked.
#[derive(Debug, Clone)]
pub struct WeightedGraph<V: Vertex> {
    order: Vec<V>,
    adjacency: HashMap<V, Vec<Neighbor<V>>>,
    config: GraphConfig,
}

impl<V: Vertex> Default for WeightedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> WeightedGraph<V> {
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            order: Vec::new(),
            adjacency: HashMap::new(),
            config,
        }
    }

    /// Build a graph from a vertex list and (source, target, weight) triples
    pub fn from_edges(
        vertices: impl IntoIterator<Item = V>,
        edges: impl IntoIterator<Item = (V, V, f64)>,
    ) -> Result<Self> {
        let mut graph = Self::new();
        for vertex in vertices {
            graph.add_vertex(vertex);
        }
        for (source, target, weight) in edges {
            graph.add_edge(source, target, weight)?;
        }
        Ok(graph)
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Insert a vertex with no outgoing edges.
    ///
    /// Adding a vertex that already exists clears its outgoing edges.
    pub fn add_vertex(&mut self, vertex: V) {
        trace!(vertex = ?vertex, "add_vertex");
        if !self.adjacency.contains_key(&vertex) {
            self.order.push(vertex.clone());
        }
        self.adjacency.insert(vertex, Vec::new());
    }

    /// Remove a vertex and its outgoing edges.
    ///
    /// With [`RemovalPolicy::Cascade`] edges pointing at the vertex are
    /// removed as well. With [`RemovalPolicy::Detach`] they are kept; the
    /// queries skip them, but [`neighbors`](Self::neighbors) still reports
    /// them.
    pub fn remove_vertex(&mut self, vertex: &V) -> Result<()> {
        crate::ensure_vertex!(self, vertex);
        trace!(vertex = ?vertex, policy = ?self.config.removal, "remove_vertex");

        self.adjacency.remove(vertex);
        self.order.retain(|v| v != vertex);

        if self.config.removal == RemovalPolicy::Cascade {
            for neighbors in self.adjacency.values_mut() {
                neighbors.retain(|n| &n.vertex != vertex);
            }
        }
        Ok(())
    }

    /// Set the weight of the edge `source -> target`, replacing any previous weight
    pub fn add_edge(&mut self, source: V, target: V, weight: f64) -> Result<()> {
        crate::ensure_vertex!(self, &target);
        let neighbors = self
            .adjacency
            .get_mut(&source)
            .ok_or_else(|| GraphError::vertex_not_found(&source))?;

        trace!(source = ?source, target = ?target, weight, "add_edge");
        match neighbors.iter_mut().find(|n| n.vertex == target) {
            Some(existing) => existing.weight = weight,
            None => neighbors.push(Neighbor {
                vertex: target,
                weight,
            }),
        }
        Ok(())
    }

    /// Remove the edge `source -> target`.
    ///
    /// The weight is not compared against the stored one.
    pub fn remove_edge(&mut self, source: &V, target: &V, _weight: f64) -> Result<()> {
        let neighbors = self
            .adjacency
            .get_mut(source)
            .ok_or_else(|| GraphError::edge_not_found(source, target))?;
        let position = neighbors
            .iter()
            .position(|n| &n.vertex == target)
            .ok_or_else(|| GraphError::edge_not_found(source, target))?;

        trace!(source = ?source, target = ?target, "remove_edge");
        neighbors.remove(position);
        Ok(())
    }

    /// Weight of the edge `source -> target`
    pub fn weight(&self, source: &V, target: &V) -> Result<f64> {
        self.adjacency
            .get(source)
            .and_then(|neighbors| neighbors.iter().find(|n| &n.vertex == target))
            .map(|n| n.weight)
            .ok_or_else(|| GraphError::edge_not_found(source, target))
    }

    /// Targets of the outgoing edges of `vertex`, in insertion order.
    ///
    /// An unknown vertex has no neighbors.
    pub fn neighbors<'a>(&'a self, vertex: &V) -> impl Iterator<Item = &'a V> + 'a {
        self.adjacency
            .get(vertex)
            .into_iter()
            .flatten()
            .map(|n| &n.vertex)
    }

    /// All vertices, in insertion order
    pub fn vertices(&self) -> std::slice::Iter<'_, V> {
        self.order.iter()
    }

    /// All edges, grouped by source in vertex insertion order
    pub fn edges(&self) -> impl Iterator<Item = Edge<V>> + '_ {
        self.order.iter().flat_map(move |source| {
            self.adjacency
                .get(source)
                .into_iter()
                .flatten()
                .map(move |n| Edge::new(source.clone(), n.vertex.clone(), n.weight))
        })
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    pub fn contains_edge(&self, source: &V, target: &V) -> bool {
        self.weight(source, target).is_ok()
    }

    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Parent tree with the fewest edges from `source` to every reachable vertex
    pub fn bfs(&self, source: &V) -> Result<ParentTree<V>> {
        bfs_traverse(self, source)
    }

    /// Alias for [`bfs`](Self::bfs)
    pub fn fewest_edges(&self, source: &V) -> Result<ParentTree<V>> {
        self.bfs(source)
    }

    /// Lowest total weight from `source` to every vertex (Dijkstra)
    pub fn lowest_cost(&self, source: &V) -> Result<CostTable<V>> {
        dijkstra_traverse(self, source)
    }

    /// Minimum spanning tree grown from `source` (Prim)
    pub fn lowest_total(&self, source: &V) -> Result<SpanningTree<V>> {
        prim_spanning_tree(self, source)
    }
}

impl<'a, V: Vertex> IntoIterator for &'a WeightedGraph<V> {
    type Item = &'a V;
    type IntoIter = std::slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices()
    }
}

impl<V: Vertex> GraphProvider for WeightedGraph<V> {
    type Vertex = V;

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    fn vertex_list(&self) -> Vec<&V> {
        self.order.iter().collect()
    }

    fn outbound_edges(&self, vertex: &V) -> Vec<(&V, f64)> {
        self.adjacency
            .get(vertex)
            .into_iter()
            .flatten()
            .filter(|n| self.adjacency.contains_key(&n.vertex))
            .map(|n| (&n.vertex, n.weight))
            .collect()
    }
}
