use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};
use std::time::Instant;

use crate::error::Result;
use crate::graph::algos::shared::{HeapEntry, HeapSequence};
use crate::graph::types::{CostEntry, CostTable, Vertex};
use crate::graph::GraphProvider;
use crate::logging::TraversalMetrics;

/// State tracked during Dijkstra traversal
struct DijkstraState<V: Vertex> {
    table: CostTable<V>,
    settled: HashSet<V>,
    heap: BinaryHeap<Reverse<HeapEntry<V>>>,
    sequence: HeapSequence,
    metrics: TraversalMetrics,
}

impl<V: Vertex> DijkstraState<V> {
    fn new<'a>(vertices: impl IntoIterator<Item = &'a V>, source: &V) -> Self
    where
        V: 'a,
    {
        let mut table: CostTable<V> = vertices
            .into_iter()
            .map(|v| (v.clone(), CostEntry::unreached()))
            .collect();
        table.insert(source.clone(), CostEntry::root());

        let mut state = Self {
            table,
            settled: HashSet::new(),
            heap: BinaryHeap::new(),
            sequence: HeapSequence::default(),
            metrics: TraversalMetrics::new(),
        };
        state.push(0.0, source.clone());
        state
    }

    fn push(&mut self, cost: f64, vertex: V) {
        let sequence = self.sequence.stamp();
        self.heap.push(Reverse(HeapEntry::new(cost, sequence, vertex)));
    }

    /// Relax the edge `current -> neighbor`
    fn relax(&mut self, current: &V, distance: f64, neighbor: &V, weight: f64) {
        if self.settled.contains(neighbor) {
            return;
        }
        let Some(entry) = self.table.get_mut(neighbor) else {
            return;
        };

        let candidate = distance + weight;
        if candidate < entry.distance {
            entry.distance = candidate;
            entry.predecessor = Some(current.clone());
            self.push(candidate, neighbor.clone());
            self.metrics.record_improvement();
        }
    }
}

/// Compute the lowest total weight from `source` to every vertex.
///
/// Weights must be non-negative. Each vertex of the graph is in the returned
/// table; vertices `source` cannot reach keep `f64::INFINITY` and no
/// predecessor. Relaxation is strict, so when two paths cost the same the
/// one found first keeps its predecessor.
#[tracing::instrument(skip_all, fields(source = ?source))]
pub fn dijkstra_traverse<G: GraphProvider>(
    provider: &G,
    source: &G::Vertex,
) -> Result<CostTable<G::Vertex>> {
    crate::ensure_vertex!(provider, source);

    let start = Instant::now();
    let mut state = DijkstraState::new(provider.vertex_list(), source);

    while let Some(Reverse(HeapEntry {
        cost: distance,
        item: current,
        ..
    })) = state.heap.pop()
    {
        // Stale entry for an already settled vertex
        if !state.settled.insert(current.clone()) {
            continue;
        }
        state.metrics.record_settled();

        for (neighbor, weight) in provider.outbound_edges(&current) {
            state.metrics.record_scanned();
            state.relax(&current, distance, neighbor, weight);
        }
    }

    crate::log_traversal_metrics!(&state.metrics, "lowest_cost");
    crate::trace_time!(start, "lowest_cost", settled = state.settled.len());
    Ok(state.table)
}

#[cfg(test)]
mod tests;
