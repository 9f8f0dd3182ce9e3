use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use anyhow::Context;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use self::edge::UndirectedEdge;
use crate::search::{
    diameter::{self, Diameter},
    dijkstra,
    shortest_path_table::ShortestPathTable,
};

pub mod edge;
pub mod graph_functions;

pub type Vertex = u32;
pub type Distance = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("vertex {vertex} is out of range for a graph of order {order}")]
    VertexOutOfRange { vertex: Vertex, order: u32 },
}

/// Adjacency-list graph over vertices `0..order`.
///
/// Built once by edge insertion and read only afterwards; traversals borrow
/// it immutably, so running several against the same graph is safe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    order: u32,
    adjacency: Vec<Vec<UndirectedEdge>>,
}

impl Graph {
    pub fn new(order: u32) -> Graph {
        Graph {
            order,
            adjacency: vec![Vec::new(); order as usize],
        }
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    /// Number of inserted edges. Every edge occupies two adjacency slots
    /// (twice in the same sequence for a self-loop), hence the halving.
    pub fn number_of_edges(&self) -> u32 {
        let endpoint_slots: usize = self.adjacency.iter().map(Vec::len).sum();
        (endpoint_slots / 2) as u32
    }

    fn check_vertex(&self, vertex: Vertex) -> Result<(), GraphError> {
        if vertex >= self.order {
            return Err(GraphError::VertexOutOfRange {
                vertex,
                order: self.order,
            });
        }
        Ok(())
    }

    /// Appends the edge to the adjacency sequences of both endpoints.
    /// Duplicate edges and self-loops are stored as-is, not deduplicated.
    pub fn insert_edge(&mut self, u: Vertex, v: Vertex, weight: Distance) -> Result<(), GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;

        let edge = UndirectedEdge::new(u, v, weight);
        self.adjacency[u as usize].push(edge);
        self.adjacency[v as usize].push(edge);

        Ok(())
    }

    /// Whether some inserted edge connects `u` and `v`, in either
    /// orientation. O(degree(u)) scan.
    pub fn has_edge(&self, u: Vertex, v: Vertex) -> Result<bool, GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;

        Ok(self.adjacency[u as usize]
            .iter()
            .any(|edge| edge.connects(u, v)))
    }

    /// Edges incident to `vertex` in insertion order. The slice can be
    /// iterated any number of times; a vertex the graph does not contain has
    /// no edges.
    pub fn adjacent(&self, vertex: Vertex) -> &[UndirectedEdge] {
        self.adjacency
            .get(vertex as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn shortest_path_tree(&self, root: Vertex) -> Result<ShortestPathTable, GraphError> {
        dijkstra::shortest_path_tree(self, root)
    }

    pub fn diameter(&self) -> Option<Diameter> {
        diameter::diameter(self)
    }
}

/// Reads a graph from a text file.
///
/// The first non-comment line is the vertex count, every following non-empty
/// line is a `u v weight` triple. Lines starting with '#' are skipped.
pub fn read_graph_from_file(file: &Path) -> anyhow::Result<Graph> {
    let reader = BufReader::new(
        File::open(file).with_context(|| format!("unable to open {}", file.display()))?,
    );

    let mut graph: Option<Graph> = None;
    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("unable to read line {}", index + 1))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match graph {
            None => {
                let order = line.parse().with_context(|| {
                    format!("unable to parse vertex count in line {}: {:?}", index + 1, line)
                })?;
                graph = Some(Graph::new(order));
            }
            Some(ref mut graph) => {
                let (u, v, weight) = line.split_whitespace().collect_tuple().with_context(|| {
                    format!("expected 'u v weight' in line {}: {:?}", index + 1, line)
                })?;
                let u = u
                    .parse()
                    .with_context(|| format!("unable to parse u in line {}", index + 1))?;
                let v = v
                    .parse()
                    .with_context(|| format!("unable to parse v in line {}", index + 1))?;
                let weight = weight
                    .parse()
                    .with_context(|| format!("unable to parse weight in line {}", index + 1))?;
                graph
                    .insert_edge(u, v, weight)
                    .with_context(|| format!("invalid edge in line {}", index + 1))?;
            }
        }
    }

    let graph = graph.context("file contains no vertex count")?;
    debug!(
        order = graph.order(),
        edges = graph.number_of_edges(),
        "graph read"
    );
    Ok(graph)
}
