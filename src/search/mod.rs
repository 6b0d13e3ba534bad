use path::Path;

use crate::graphs::{Vertex, Weight};

pub mod collections;
pub mod floyd_warshall;
pub mod path;
pub mod witnesses;

pub trait PathFinding<W: Weight>: Send + Sync {
    fn shortest_path(&self, source: Vertex, target: Vertex) -> Option<Path<W>>;

    fn shortest_path_distance(&self, source: Vertex, target: Vertex) -> Option<W>;

    fn number_of_vertices(&self) -> u32;
}
