use crate::graphs::{Distance, GraphError, Vertex};

/// Traversal state for a single vertex.
#[derive(Clone, Debug)]
pub(crate) struct TableEntry {
    pub(crate) distance: Option<Distance>,
    pub(crate) parent: Option<Vertex>,
    pub(crate) visited: bool,
}

impl TableEntry {
    fn new() -> TableEntry {
        TableEntry {
            distance: None,
            parent: None,
            visited: false,
        }
    }
}

/// State of one shortest-path-tree traversal: per-vertex best distance,
/// parent pointer and finalization flag, plus the largest finalized distance
/// seen so far and the vertex realizing it.
///
/// A table belongs to exactly one traversal. The algorithm constructs a fresh
/// instance per call; `max_distance` and `furthest_vertex` are only
/// meaningful once that traversal has terminated.
pub struct ShortestPathTable {
    root: Vertex,
    entries: Vec<TableEntry>,
    max_distance: Distance,
    furthest_vertex: Vertex,
}

impl ShortestPathTable {
    pub(crate) fn new(order: u32, root: Vertex) -> ShortestPathTable {
        let mut entries = vec![TableEntry::new(); order as usize];
        entries[root as usize].distance = Some(0);

        ShortestPathTable {
            root,
            entries,
            max_distance: 0,
            furthest_vertex: root,
        }
    }

    fn check_vertex(&self, vertex: Vertex) -> Result<(), GraphError> {
        if vertex as usize >= self.entries.len() {
            return Err(GraphError::VertexOutOfRange {
                vertex,
                order: self.entries.len() as u32,
            });
        }
        Ok(())
    }

    /// Best known distance from the root, `None` while `vertex` is
    /// unreached.
    pub fn distance(&self, vertex: Vertex) -> Result<Option<Distance>, GraphError> {
        self.check_vertex(vertex)?;
        Ok(self.entries[vertex as usize].distance)
    }

    /// Predecessor on the shortest path from the root, `None` for the root
    /// itself and for unreached vertices.
    pub fn parent(&self, vertex: Vertex) -> Result<Option<Vertex>, GraphError> {
        self.check_vertex(vertex)?;
        Ok(self.entries[vertex as usize].parent)
    }

    /// Whether the shortest distance to `vertex` has been finalized.
    pub fn visited(&self, vertex: Vertex) -> Result<bool, GraphError> {
        self.check_vertex(vertex)?;
        Ok(self.entries[vertex as usize].visited)
    }

    pub fn root(&self) -> Vertex {
        self.root
    }

    /// Largest finalized distance, the eccentricity of the root once the
    /// traversal has terminated. Unreachable vertices never contribute.
    pub fn max_distance(&self) -> Distance {
        self.max_distance
    }

    /// Vertex realizing `max_distance`; the root while nothing further has
    /// been finalized.
    pub fn furthest_vertex(&self) -> Vertex {
        self.furthest_vertex
    }

    /// Walks parent pointers from `target` back to the root. `None` if
    /// `target` was never reached.
    pub fn path_to(&self, target: Vertex) -> Result<Option<Vec<Vertex>>, GraphError> {
        self.check_vertex(target)?;
        if self.entries[target as usize].distance.is_none() {
            return Ok(None);
        }

        let mut vertices = vec![target];
        let mut current = target;
        while let Some(parent) = self.entries[current as usize].parent {
            current = parent;
            vertices.push(current);
        }
        vertices.reverse();

        Ok(Some(vertices))
    }

    pub(crate) fn entry(&self, vertex: Vertex) -> &TableEntry {
        &self.entries[vertex as usize]
    }

    /// Records an improved distance and the parent it was relaxed through.
    pub(crate) fn update(&mut self, vertex: Vertex, distance: Distance, parent: Vertex) {
        let entry = &mut self.entries[vertex as usize];
        entry.distance = Some(distance);
        entry.parent = Some(parent);
    }

    /// Marks `vertex` finalized and folds its distance into the running
    /// eccentricity.
    pub(crate) fn finalize(&mut self, vertex: Vertex) {
        let entry = &mut self.entries[vertex as usize];
        entry.visited = true;

        if let Some(distance) = entry.distance {
            if distance > self.max_distance {
                self.max_distance = distance;
                self.furthest_vertex = vertex;
            }
        }
    }
}
