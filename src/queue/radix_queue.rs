use radix_heap::RadixHeapMap;

use super::{DijkstraQueue, QueueElement};
use crate::graphs::{Distance, Vertex};

/// Monotone queue over a radix heap. Usable for Dijkstra because a
/// relaxation never pushes a distance below the last popped one.
#[derive(Clone)]
pub struct RadixQueue {
    heap: RadixHeapMap<i64, Vertex>,
}

impl Default for RadixQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl RadixQueue {
    pub fn new() -> RadixQueue {
        RadixQueue {
            heap: RadixHeapMap::new(),
        }
    }
}

impl DijkstraQueue for RadixQueue {
    fn push(&mut self, element: QueueElement) {
        self.heap.push(-(element.distance as i64), element.vertex);
    }

    fn pop(&mut self) -> Option<QueueElement> {
        let (negative_distance, vertex) = self.heap.pop()?;
        Some(QueueElement::new(-negative_distance as Distance, vertex))
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn clear(&mut self) {
        self.heap.clear()
    }
}
