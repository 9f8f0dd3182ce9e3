use serde::{Deserialize, Serialize};
use tracing::debug;

use super::dijkstra;
use crate::{
    graphs::{Distance, Graph, Vertex},
    queue::heap_queue::HeapQueue,
};

/// Endpoints and length of a maximal shortest path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diameter {
    pub start: Vertex,
    pub end: Vertex,
    pub distance: Distance,
}

/// Runs one traversal per vertex and keeps the largest eccentricity together
/// with the pair of vertices realizing it.
///
/// `None` only for the order-0 graph. Ties resolve to the lowest root, so
/// the result is deterministic. Eccentricities only cover vertices reachable
/// from their root; on a disconnected graph the result is the largest
/// distance realized within a single component.
pub fn diameter(graph: &Graph) -> Option<Diameter> {
    let mut best: Option<Diameter> = None;

    for root in 0..graph.order() {
        let mut queue = HeapQueue::new();
        let table = dijkstra::traverse(graph, &mut queue, root);

        if best.map_or(true, |best| table.max_distance() > best.distance) {
            best = Some(Diameter {
                start: table.root(),
                end: table.furthest_vertex(),
                distance: table.max_distance(),
            });
        }
    }

    if let Some(diameter) = best {
        debug!(
            start = diameter.start,
            end = diameter.end,
            distance = diameter.distance,
            "diameter computed"
        );
    }
    best
}
