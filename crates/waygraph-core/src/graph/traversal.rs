use crate::graph::types::Vertex;

/// Trait for providing graph adjacency to the traversal algorithms
pub trait GraphProvider {
    type Vertex: Vertex;

    fn contains_vertex(&self, vertex: &Self::Vertex) -> bool;

    /// Every vertex, in a stable order
    fn vertex_list(&self) -> Vec<&Self::Vertex>;

    /// Outgoing (target, weight) pairs of `vertex`, limited to targets that
    /// are still vertices of the graph
    fn outbound_edges(&self, vertex: &Self::Vertex) -> Vec<(&Self::Vertex, f64)>;
}
