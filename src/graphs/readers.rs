use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::{FromStr, SplitWhitespace},
};

use indicatif::ProgressIterator;

use super::{Vertex, WeightedEdge};
use crate::error::{GraphError, GraphResult};

fn parse_next<T: FromStr>(
    values: &mut SplitWhitespace,
    line_number: usize,
    name: &str,
) -> GraphResult<T> {
    let value = values.next().ok_or_else(|| GraphError::Parse {
        line: line_number,
        reason: format!("no {} found", name),
    })?;

    value.parse().map_err(|_| GraphError::Parse {
        line: line_number,
        reason: format!("unable to parse {} '{}'", name, value),
    })
}

pub fn read_edges_from_gr_file(path: &Path) -> GraphResult<(u32, Vec<WeightedEdge<u32>>)> {
    read_edges_from_gr(BufReader::new(File::open(path)?))
}

/// Reads a DIMACS shortest path graph.
///
/// Only the `p sp <vertices> <arcs>` problem line and `a <tail> <head> <weight>`
/// arc lines carry information, everything else is skipped. DIMACS vertices
/// start at 1 and are shifted to start at 0.
pub fn read_edges_from_gr<R: BufRead>(reader: R) -> GraphResult<(u32, Vec<WeightedEdge<u32>>)> {
    let mut number_of_vertices = None;
    let mut edges = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;
        let mut values = line.split_whitespace();

        match values.next() {
            Some("p") => {
                let _problem: String = parse_next(&mut values, line_number, "problem type")?;
                number_of_vertices =
                    Some(parse_next::<u32>(&mut values, line_number, "number of vertices")?);
                let number_of_arcs: usize =
                    parse_next(&mut values, line_number, "number of arcs")?;
                edges.reserve(number_of_arcs);
            }
            Some("a") => {
                let tail: Vertex = parse_next(&mut values, line_number, "tail")?;
                let head: Vertex = parse_next(&mut values, line_number, "head")?;
                let weight: u32 = parse_next(&mut values, line_number, "weight")?;
                if tail == 0 || head == 0 {
                    return Err(GraphError::Parse {
                        line: line_number,
                        reason: "vertices are numbered from 1".to_string(),
                    });
                }
                edges.push(WeightedEdge::new(tail - 1, head - 1, weight));
            }
            _ => {}
        }
    }

    let number_of_vertices = number_of_vertices.ok_or(GraphError::MissingHeader("p sp"))?;

    Ok((number_of_vertices, edges))
}

pub fn read_edges_from_fmi_file(path: &Path) -> GraphResult<(u32, Vec<WeightedEdge<u32>>)> {
    read_edges_from_fmi(BufReader::new(File::open(path)?))
}

/// Reads a graph in the `.fmi` format: comment lines starting with `#`, the
/// number of vertices, the number of edges, one line per vertex and one line
/// per edge (`<tail> <head> <weight> ...`).
pub fn read_edges_from_fmi<R: BufRead>(reader: R) -> GraphResult<(u32, Vec<WeightedEdge<u32>>)> {
    let mut lines = reader
        .lines()
        .enumerate()
        .map(|(index, line)| line.map(|line| (index + 1, line)))
        .filter(|line| match line {
            Ok((_, line)) => !line.starts_with('#') && !line.trim().is_empty(),
            Err(_) => true,
        });

    let (line_number, line) = lines
        .next()
        .ok_or(GraphError::MissingHeader("number of vertices"))??;
    let number_of_vertices: u32 =
        parse_next(&mut line.split_whitespace(), line_number, "number of vertices")?;

    let (line_number, line) = lines
        .next()
        .ok_or(GraphError::MissingHeader("number of edges"))??;
    let number_of_edges: usize =
        parse_next(&mut line.split_whitespace(), line_number, "number of edges")?;

    for _ in 0..number_of_vertices {
        lines
            .next()
            .ok_or(GraphError::MissingHeader("vertex line"))??;
    }

    lines
        .take(number_of_edges)
        .progress_count(number_of_edges as u64)
        .map(|line| -> GraphResult<WeightedEdge<u32>> {
            // srcIDX trgIDX cost type maxspeed
            let (line_number, line) = line?;
            let mut values = line.split_whitespace();
            let tail: Vertex = parse_next(&mut values, line_number, "tail")?;
            let head: Vertex = parse_next(&mut values, line_number, "head")?;
            let weight: u32 = parse_next(&mut values, line_number, "weight")?;
            Ok(WeightedEdge::new(tail, head, weight))
        })
        .collect::<GraphResult<Vec<_>>>()
        .map(|edges| (number_of_vertices, edges))
}
