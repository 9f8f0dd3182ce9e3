use tracing::trace;

use super::shortest_path_table::ShortestPathTable;
use crate::{
    graphs::{Graph, GraphError, Vertex},
    queue::{heap_queue::HeapQueue, DijkstraQueue, QueueElement},
};

/// Computes the shortest-path tree rooted at `root`.
///
/// Dijkstra relaxation without decrease-key: whenever a shorter distance to a
/// vertex is found, a fresh entry is pushed, and entries that resurface for
/// an already finalized vertex are skipped at pop time. The extra entries are
/// bounded by the number of relaxations.
pub fn shortest_path_tree(graph: &Graph, root: Vertex) -> Result<ShortestPathTable, GraphError> {
    let mut queue = HeapQueue::new();
    shortest_path_tree_with_queue(graph, &mut queue, root)
}

/// Same as [`shortest_path_tree`], driving a caller-supplied queue.
pub fn shortest_path_tree_with_queue(
    graph: &Graph,
    queue: &mut dyn DijkstraQueue,
    root: Vertex,
) -> Result<ShortestPathTable, GraphError> {
    if root >= graph.order() {
        return Err(GraphError::VertexOutOfRange {
            vertex: root,
            order: graph.order(),
        });
    }

    queue.clear();
    Ok(traverse(graph, queue, root))
}

/// The traversal itself. `root` must be in range.
pub(crate) fn traverse(
    graph: &Graph,
    queue: &mut dyn DijkstraQueue,
    root: Vertex,
) -> ShortestPathTable {
    let mut table = ShortestPathTable::new(graph.order(), root);
    queue.push(QueueElement::new(0, root));

    while let Some(QueueElement {
        distance,
        vertex: current,
    }) = queue.pop()
    {
        if table.entry(current).visited {
            // stale duplicate left behind by an earlier relaxation
            continue;
        }

        for edge in graph.adjacent(current) {
            let other = edge.opposite(current);
            if table.entry(other).visited {
                continue;
            }

            let candidate = distance + edge.weight();
            if table
                .entry(other)
                .distance
                .map_or(true, |best| candidate < best)
            {
                table.update(other, candidate, current);
                queue.push(QueueElement::new(candidate, other));
            }
        }

        table.finalize(current);
    }

    trace!(
        root,
        max_distance = table.max_distance(),
        furthest_vertex = table.furthest_vertex(),
        "traversal finished"
    );
    table
}
