use serde::{Deserialize, Serialize};

use crate::graphs::{Vertex, Weight};

/// Square matrix of shortest path distances. `None` marks unreachable pairs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DistanceMatrix<W> {
    distances: Vec<Vec<Option<W>>>, // [tail][head]
}

impl<W: Weight> DistanceMatrix<W> {
    pub fn new(number_of_vertices: u32) -> Self {
        DistanceMatrix {
            distances: vec![vec![None; number_of_vertices as usize]; number_of_vertices as usize],
        }
    }

    pub fn number_of_vertices(&self) -> u32 {
        self.distances.len() as u32
    }

    pub fn get_distance(&self, tail: Vertex, head: Vertex) -> Option<W> {
        self.distances[tail as usize][head as usize]
    }

    pub fn set_distance(&mut self, tail: Vertex, head: Vertex, distance: W) {
        self.distances[tail as usize][head as usize] = Some(distance);
    }
}

/// Square matrix of relaxation witnesses.
///
/// Stored with `Vertex::MAX` as "no intermediate vertex" to keep the matrix
/// at one `Vertex` per entry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PredecessorMatrix {
    predecessors: Vec<Vec<Vertex>>, // [tail][head]
}

impl PredecessorMatrix {
    pub fn new(number_of_vertices: u32) -> Self {
        PredecessorMatrix {
            predecessors: vec![
                vec![Vertex::MAX; number_of_vertices as usize];
                number_of_vertices as usize
            ],
        }
    }

    pub fn get_predecessor(&self, tail: Vertex, head: Vertex) -> Option<Vertex> {
        let predecessor = self.predecessors[tail as usize][head as usize];

        if predecessor == Vertex::MAX {
            return None;
        }

        Some(predecessor)
    }

    pub fn set_predecessor(&mut self, tail: Vertex, head: Vertex, predecessor: Vertex) {
        self.predecessors[tail as usize][head as usize] = predecessor;
    }
}
