use ahash::{HashMap, HashMapExt};
use num_traits::Zero;

use super::{Edge, Weight, WeightedEdge};
use crate::search::path::{Path, ShortestPathTestCase};

/// Edge weights keyed by tail and head. Later edges overwrite earlier ones and
/// undirected edges are inserted in both directions.
pub fn edge_weights<W: Weight>(edges: &[WeightedEdge<W>], directed: bool) -> HashMap<Edge, W> {
    let mut weights = HashMap::with_capacity(edges.len());

    for edge in edges {
        weights.insert(edge.remove_weight(), edge.weight);
        if !directed {
            weights.insert(edge.reversed().remove_weight(), edge.weight);
        }
    }

    weights
}

/// Check if a path is correct for a given test case.
pub fn validate_path<W: Weight>(
    edge_weights: &HashMap<Edge, W>,
    validation: &ShortestPathTestCase<W>,
    path: &Option<Path<W>>,
) -> Result<(), String> {
    let Some(path) = path else {
        if validation.weight.is_some() {
            return Err("no path is found but there should be one".to_string());
        }
        return Ok(());
    };

    let Some(weight) = validation.weight else {
        return Err("a path was found where there should be none".to_string());
    };

    if path.weight != weight {
        return Err(format!(
            "wrong path weight {:?}, expected {:?}",
            path.weight, weight
        ));
    }

    // Ensure first and last vertex of path are source and target of request.
    if path.vertices.first() != Some(&validation.request.source) {
        return Err("first vertex of path is not source of request".to_string());
    }
    if path.vertices.last() != Some(&validation.request.target) {
        return Err("last vertex of path is not target of request".to_string());
    }

    // check if there is an edge between consecutive path vertices.
    let mut true_weight = W::zero();
    for pair in path.vertices.windows(2) {
        let (tail, head) = (pair[0], pair[1]);
        if tail == head {
            return Err(format!("vertex {} is repeated", tail));
        }
        match edge_weights.get(&Edge { tail, head }) {
            Some(&edge_weight) => true_weight = true_weight + edge_weight,
            None => return Err(format!("no edge between {} and {} found", tail, head)),
        }
    }

    // a single vertex path has no edges
    if path.vertices.len() > 1 && true_weight != path.weight {
        return Err(format!(
            "path weight {:?} does not match its edges {:?}",
            path.weight, true_weight
        ));
    }
    if path.vertices.len() == 1 && !path.weight.is_zero() {
        return Err("path with a single vertex has a weight".to_string());
    }

    Ok(())
}
