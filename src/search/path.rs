use serde::{Deserialize, Serialize};

use crate::graphs::Vertex;

/// A shortest path: its vertices from source to target (both included) and
/// its total weight.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Path<W> {
    pub vertices: Vec<Vertex>,
    pub weight: W,
}

/// Represents a request for finding a shortest path in a graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathRequest {
    pub source: Vertex,
    pub target: Vertex,
}

/// A shortest path request together with the weight of a shortest path, if
/// there exists one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShortestPathTestCase<W> {
    pub request: ShortestPathRequest,
    pub weight: Option<W>,
}
