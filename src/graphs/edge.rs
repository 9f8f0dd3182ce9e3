use serde::{Deserialize, Serialize};

use super::{Distance, Vertex};

/// An undirected weighted connection between two vertices.
///
/// The same edge value is stored in the adjacency sequences of both
/// endpoints, so a consumer must not assume which endpoint it reached the
/// edge from.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct UndirectedEdge {
    u: Vertex,
    v: Vertex,
    weight: Distance,
}

impl UndirectedEdge {
    pub fn new(u: Vertex, v: Vertex, weight: Distance) -> UndirectedEdge {
        UndirectedEdge { u, v, weight }
    }

    pub fn u(&self) -> Vertex {
        self.u
    }

    pub fn v(&self) -> Vertex {
        self.v
    }

    pub fn weight(&self) -> Distance {
        self.weight
    }

    /// The endpoint that is not `vertex`. For a self-loop both endpoints
    /// coincide, so the result is `vertex` itself.
    pub fn opposite(&self, vertex: Vertex) -> Vertex {
        if self.u == vertex {
            self.v
        } else {
            self.u
        }
    }

    /// Whether this edge connects `u` and `v`, in either orientation.
    pub fn connects(&self, u: Vertex, v: Vertex) -> bool {
        (self.u == u && self.v == v) || (self.u == v && self.v == u)
    }
}
