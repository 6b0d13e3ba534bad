use indicatif::{ProgressBar, ProgressIterator};
use serde::{Deserialize, Serialize};

use super::{
    collections::matrix_data::{DistanceMatrix, PredecessorMatrix},
    path::Path,
    witnesses::unpack_witnesses,
    PathFinding,
};
use crate::{
    error::GraphResult,
    graphs::{validate_edges, Vertex, Weight, WeightedEdge},
};

/// All pairs shortest paths of a graph with a fixed number of vertices.
///
/// Both matrices are computed once in the constructor and never change
/// afterwards, so a `FloydWarshall` can be shared freely between readers.
///
/// Self loops are discarded: the distance of every vertex to itself is zero,
/// whatever self loop edges were given. Graphs with negative cycles are not
/// supported, their distances and paths are unspecified.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FloydWarshall<W> {
    distances: DistanceMatrix<W>,
    predecessors: PredecessorMatrix,
}

impl<W: Weight> FloydWarshall<W> {
    /// Computes all pairs shortest paths. Undirected graphs use every edge in
    /// both directions. If several edges share the same tail and head, the
    /// last one wins.
    ///
    /// # Panics
    ///
    /// Panics if an edge endpoint is not below `number_of_vertices`. Use
    /// [`FloydWarshall::try_new`] for untrusted input.
    pub fn new<I>(number_of_vertices: u32, edges: I, directed: bool) -> Self
    where
        I: IntoIterator<Item = WeightedEdge<W>>,
    {
        Self::new_with_progress_bar(number_of_vertices, edges, directed, ProgressBar::hidden())
    }

    /// Like [`FloydWarshall::new`], but ticks `progress_bar` once per
    /// intermediate vertex.
    pub fn new_with_progress_bar<I>(
        number_of_vertices: u32,
        edges: I,
        directed: bool,
        progress_bar: ProgressBar,
    ) -> Self
    where
        I: IntoIterator<Item = WeightedEdge<W>>,
    {
        let mut distances = DistanceMatrix::new(number_of_vertices);
        let mut predecessors = PredecessorMatrix::new(number_of_vertices);

        for edge in edges {
            distances.set_distance(edge.tail, edge.head, edge.weight);
            if !directed {
                distances.set_distance(edge.head, edge.tail, edge.weight);
            }
        }

        for vertex in 0..number_of_vertices {
            distances.set_distance(vertex, vertex, W::zero());
        }

        progress_bar.set_length(number_of_vertices as u64);
        // k has to be the outermost loop.
        for k in (0..number_of_vertices).progress_with(progress_bar) {
            for tail in 0..number_of_vertices {
                let Some(tail_to_k) = distances.get_distance(tail, k) else {
                    continue;
                };

                for head in 0..number_of_vertices {
                    let Some(k_to_head) = distances.get_distance(k, head) else {
                        continue;
                    };

                    let alternative_distance = tail_to_k + k_to_head;
                    let is_shorter = distances
                        .get_distance(tail, head)
                        .map_or(true, |current_distance| alternative_distance < current_distance);
                    if is_shorter {
                        distances.set_distance(tail, head, alternative_distance);
                        predecessors.set_predecessor(tail, head, k);
                    }
                }
            }
        }

        FloydWarshall {
            distances,
            predecessors,
        }
    }

    /// Checked variant of [`FloydWarshall::new`].
    pub fn try_new(
        number_of_vertices: u32,
        edges: &[WeightedEdge<W>],
        directed: bool,
    ) -> GraphResult<Self> {
        validate_edges(number_of_vertices, edges)?;

        Ok(Self::new(number_of_vertices, edges.iter().copied(), directed))
    }

    pub fn number_of_vertices(&self) -> u32 {
        self.distances.number_of_vertices()
    }

    /// Weight of a shortest path from `source` to `target`, `None` if there is
    /// no path.
    ///
    /// # Panics
    ///
    /// Panics if `source` or `target` is out of bounds.
    pub fn shortest_path_distance(&self, source: Vertex, target: Vertex) -> Option<W> {
        self.distances.get_distance(source, target)
    }

    /// Vertex that the last improving relaxation routed `source` to `target`
    /// through, `None` for direct edges and unreachable pairs.
    pub fn predecessor(&self, source: Vertex, target: Vertex) -> Option<Vertex> {
        self.predecessors.get_predecessor(source, target)
    }

    /// One shortest path from `source` to `target`, `None` if there is no path.
    ///
    /// # Panics
    ///
    /// Panics if `source` or `target` is out of bounds.
    pub fn shortest_path(&self, source: Vertex, target: Vertex) -> Option<Path<W>> {
        let weight = self.distances.get_distance(source, target)?;

        if source == target {
            return Some(Path {
                vertices: vec![source],
                weight,
            });
        }

        // Only reachable with negative cycles, where witnesses may loop.
        let max_splits = (self.number_of_vertices() as usize).pow(2);
        let vertices = unpack_witnesses(source, target, max_splits, |tail, head| {
            self.predecessors.get_predecessor(tail, head)
        })?;

        Some(Path { vertices, weight })
    }
}

impl<W: Weight> PathFinding<W> for FloydWarshall<W> {
    fn shortest_path(&self, source: Vertex, target: Vertex) -> Option<Path<W>> {
        FloydWarshall::shortest_path(self, source, target)
    }

    fn shortest_path_distance(&self, source: Vertex, target: Vertex) -> Option<W> {
        FloydWarshall::shortest_path_distance(self, source, target)
    }

    fn number_of_vertices(&self) -> u32 {
        FloydWarshall::number_of_vertices(self)
    }
}
