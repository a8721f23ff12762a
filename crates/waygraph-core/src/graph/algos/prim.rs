use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::time::Instant;

use crate::error::{GraphError, Result};
use crate::graph::algos::shared::{HeapEntry, HeapSequence};
use crate::graph::types::{ParentTree, SpanningTree, Vertex};
use crate::graph::GraphProvider;
use crate::logging::TraversalMetrics;

/// Candidate tree edge waiting in the frontier heap
type FrontierEdge<V> = HeapEntry<(V, V)>;

/// Push every edge from `vertex` to a vertex outside the tree
fn extend_frontier<G: GraphProvider>(
    provider: &G,
    vertex: &G::Vertex,
    tree: &ParentTree<G::Vertex>,
    frontier: &mut BinaryHeap<Reverse<FrontierEdge<G::Vertex>>>,
    sequence: &mut HeapSequence,
    metrics: &mut TraversalMetrics,
) {
    for (neighbor, weight) in provider.outbound_edges(vertex) {
        metrics.record_scanned();
        if !tree.contains_key(neighbor) {
            frontier.push(Reverse(HeapEntry::new(
                weight,
                sequence.stamp(),
                (vertex.clone(), neighbor.clone()),
            )));
        }
    }
}

fn unreached_count<V: Vertex>(vertices: &[&V], tree: &ParentTree<V>) -> usize {
    vertices.iter().filter(|v| !tree.contains_key(**v)).count()
}

/// Grow a minimum spanning tree from `source` (Prim's algorithm).
///
/// Each step takes the lightest edge leading from the tree to a vertex
/// outside it; among equal weights the edge discovered first wins. Only
/// outgoing edges are followed, so for an undirected graph both directions
/// must be present.
///
/// Fails with [`GraphError::GraphNotConnected`] if some vertex cannot be
/// reached from `source`.
#[tracing::instrument(skip_all, fields(source = ?source))]
pub fn prim_spanning_tree<G: GraphProvider>(
    provider: &G,
    source: &G::Vertex,
) -> Result<SpanningTree<G::Vertex>> {
    crate::ensure_vertex!(provider, source);

    let start = Instant::now();
    let vertices = provider.vertex_list();
    let mut metrics = TraversalMetrics::new();
    let mut tree: ParentTree<G::Vertex> = HashMap::new();
    let mut frontier = BinaryHeap::new();
    let mut sequence = HeapSequence::default();
    let mut total_weight = 0.0;

    tree.insert(source.clone(), None);
    metrics.record_settled();
    extend_frontier(
        provider,
        source,
        &tree,
        &mut frontier,
        &mut sequence,
        &mut metrics,
    );

    while tree.len() < vertices.len() {
        let Some(Reverse(edge)) = frontier.pop() else {
            let unreached = unreached_count(&vertices, &tree);
            tracing::debug!(unreached, "spanning tree stalled");
            return Err(GraphError::not_connected(source, unreached));
        };

        let (parent, child) = edge.item;
        if tree.contains_key(&child) {
            continue;
        }

        total_weight += edge.cost;
        tree.insert(child.clone(), Some(parent));
        metrics.record_settled();
        metrics.record_improvement();
        extend_frontier(
            provider,
            &child,
            &tree,
            &mut frontier,
            &mut sequence,
            &mut metrics,
        );
    }

    crate::log_traversal_metrics!(&metrics, "lowest_total");
    crate::trace_time!(start, "lowest_total", total_weight = total_weight);
    Ok(SpanningTree {
        parents: tree,
        total_weight,
    })
}
