use std::collections::{HashMap, VecDeque};
use std::time::Instant;

use crate::error::Result;
use crate::graph::types::ParentTree;
use crate::graph::GraphProvider;
use crate::logging::TraversalMetrics;

/// Perform BFS from `source`, returning child to parent links.
///
/// The first time a vertex is dequeued fixes its parent, so following the
/// parents back to `source` gives a path with the fewest edges. Among equally
/// short paths the one through earlier-inserted edges wins. Vertices not
/// reachable from `source` are absent from the result.
#[tracing::instrument(skip_all, fields(source = ?source))]
pub fn bfs_traverse<G: GraphProvider>(
    provider: &G,
    source: &G::Vertex,
) -> Result<ParentTree<G::Vertex>> {
    crate::ensure_vertex!(provider, source);

    let start = Instant::now();
    let mut metrics = TraversalMetrics::new();
    let mut tree: ParentTree<G::Vertex> = HashMap::new();
    let mut queue: VecDeque<(Option<G::Vertex>, G::Vertex)> = VecDeque::new();
    queue.push_back((None, source.clone()));

    while let Some((parent, current)) = queue.pop_front() {
        if tree.contains_key(&current) {
            continue;
        }
        metrics.record_settled();

        for (neighbor, _) in provider.outbound_edges(&current) {
            metrics.record_scanned();
            if !tree.contains_key(neighbor) {
                queue.push_back((Some(current.clone()), neighbor.clone()));
            }
        }

        tree.insert(current, parent);
    }

    crate::log_traversal_metrics!(&metrics, "bfs");
    crate::trace_time!(start, "bfs", reached = tree.len());
    Ok(tree)
}
