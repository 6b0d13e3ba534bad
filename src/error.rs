use thiserror::Error;

use crate::graphs::Vertex;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("vertex {vertex} is out of bounds for a graph with {number_of_vertices} vertices")]
    VertexOutOfBounds {
        vertex: Vertex,
        number_of_vertices: u32,
    },
    #[error("{0} vertices exceed the maximum supported vertex count")]
    TooManyVertices(u32),
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
    #[error("missing header: {0}")]
    MissingHeader(&'static str),
    #[error("unsupported file extension: {0}")]
    UnsupportedFile(String),
    #[error("bincode: {0}")]
    Bincode(#[from] bincode::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;
