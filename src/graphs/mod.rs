use std::{fmt::Debug, path::Path};

use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

pub mod graph_functions;
pub mod readers;

pub type Vertex = u32;

/// Scalar edge weight.
///
/// Anything that can be added, compared and has a zero qualifies, so signed
/// integers and floats work as well as the unsigned types. Unreachable pairs
/// are tracked separately, so no value of `W` is reserved.
pub trait Weight: Copy + PartialOrd + Zero + Debug + Send + Sync {}

impl<W> Weight for W where W: Copy + PartialOrd + Zero + Debug + Send + Sync {}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub tail: Vertex,
    pub head: Vertex,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeightedEdge<W> {
    pub tail: Vertex,
    pub head: Vertex,
    pub weight: W,
}

impl<W: Weight> WeightedEdge<W> {
    pub fn new(tail: Vertex, head: Vertex, weight: W) -> WeightedEdge<W> {
        WeightedEdge { tail, head, weight }
    }

    pub fn remove_weight(&self) -> Edge {
        Edge {
            tail: self.tail,
            head: self.head,
        }
    }

    pub fn reversed(&self) -> WeightedEdge<W> {
        WeightedEdge {
            tail: self.head,
            head: self.tail,
            weight: self.weight,
        }
    }
}

/// Checks that `number_of_vertices` leaves room for the "no intermediate"
/// marker and that every edge endpoint lies inside the graph.
pub fn validate_edges<W: Weight>(
    number_of_vertices: u32,
    edges: &[WeightedEdge<W>],
) -> GraphResult<()> {
    if number_of_vertices == Vertex::MAX {
        return Err(GraphError::TooManyVertices(number_of_vertices));
    }

    for edge in edges {
        for vertex in [edge.tail, edge.head] {
            if vertex >= number_of_vertices {
                return Err(GraphError::VertexOutOfBounds {
                    vertex,
                    number_of_vertices,
                });
            }
        }
    }

    Ok(())
}

/// Vertex count and edge list of a graph file, dispatched on its extension.
pub fn read_edges_from_file(path: &Path) -> GraphResult<(u32, Vec<WeightedEdge<u32>>)> {
    let extension = path
        .extension()
        .and_then(|extension| extension.to_str())
        .unwrap_or_default();

    match extension {
        "gr" => readers::read_edges_from_gr_file(path),
        "fmi" => readers::read_edges_from_fmi_file(path),
        _ => Err(GraphError::UnsupportedFile(path.display().to_string())),
    }
}
