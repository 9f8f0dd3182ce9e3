use std::collections::BinaryHeap;

use super::{DijkstraQueue, QueueElement};

#[derive(Clone)]
pub struct HeapQueue {
    queue: BinaryHeap<QueueElement>,
}

impl Default for HeapQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl HeapQueue {
    pub fn new() -> HeapQueue {
        HeapQueue {
            queue: BinaryHeap::new(),
        }
    }
}

impl DijkstraQueue for HeapQueue {
    fn push(&mut self, element: QueueElement) {
        self.queue.push(element)
    }

    fn pop(&mut self) -> Option<QueueElement> {
        self.queue.pop()
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn clear(&mut self) {
        self.queue.clear()
    }
}
