use std::cmp::Ordering;

/// Entry for a `BinaryHeap<Reverse<_>>` min-heap, ordered by cost.
///
/// Equal costs fall back to the push sequence, so the entry pushed first
/// pops first and results do not depend on heap internals.
#[derive(Debug, Clone)]
pub struct HeapEntry<T> {
    pub cost: f64,
    pub sequence: u64,
    pub item: T,
}

impl<T> HeapEntry<T> {
    pub fn new(cost: f64, sequence: u64, item: T) -> Self {
        Self {
            cost,
            sequence,
            item,
        }
    }
}

impl<T> PartialEq for HeapEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for HeapEntry<T> {}

impl<T> PartialOrd for HeapEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for HeapEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

/// Monotonic counter stamping heap pushes
#[derive(Debug, Default)]
pub struct HeapSequence(u64);

impl HeapSequence {
    pub fn stamp(&mut self) -> u64 {
        let current = self.0;
        self.0 += 1;
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Reverse;
    use std::collections::BinaryHeap;

    #[test]
    fn test_heap_entry_ordering() {
        let cheap = HeapEntry::new(1.0, 0, "a");
        let dear = HeapEntry::new(2.0, 1, "b");
        let cheap_later = HeapEntry::new(1.0, 2, "c");

        assert_eq!(cheap.cmp(&dear), Ordering::Less);
        assert_eq!(dear.cmp(&cheap), Ordering::Greater);
        assert_eq!(cheap.cmp(&cheap_later), Ordering::Less);
        assert_eq!(cheap, cheap.clone());
        assert_ne!(cheap, dear);
    }

    #[test]
    fn test_min_heap_pops_in_cost_then_push_order() {
        let mut sequence = HeapSequence::default();
        let mut heap = BinaryHeap::new();
        for (cost, item) in [(3.0, "x"), (1.0, "y"), (f64::INFINITY, "z"), (1.0, "w")] {
            heap.push(Reverse(HeapEntry::new(cost, sequence.stamp(), item)));
        }

        let order: Vec<_> = std::iter::from_fn(|| heap.pop().map(|Reverse(e)| e.item)).collect();
        assert_eq!(order, vec!["y", "w", "x", "z"]);
    }
}
