use std::cmp::Ordering;

use crate::graphs::{Distance, Vertex};

pub mod heap_queue;
pub mod radix_queue;

/// One queued `(vertex, distance at insertion time)` pair.
///
/// Several entries for the same vertex may coexist; only the one matching the
/// vertex's current best distance is meaningful, the rest are discarded at
/// pop time by the traversal.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct QueueElement {
    pub distance: Distance,
    pub vertex: Vertex,
}

impl QueueElement {
    pub fn new(distance: Distance, vertex: Vertex) -> QueueElement {
        QueueElement { distance, vertex }
    }
}

// The priority queue depends on `Ord`.
// Explicitly implement the trait so the queue becomes a min-heap
// instead of a max-heap.
impl Ord for QueueElement {
    fn cmp(&self, other: &Self) -> Ordering {
        // Notice that we flip the ordering on distances.
        // In case of a tie we compare vertices - this step is necessary
        // to make implementations of `PartialEq` and `Ord` consistent.
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

impl PartialOrd for QueueElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub trait DijkstraQueue {
    fn push(&mut self, element: QueueElement);
    fn pop(&mut self) -> Option<QueueElement>;
    fn is_empty(&self) -> bool;
    fn clear(&mut self);
}
