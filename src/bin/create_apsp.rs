use std::path::PathBuf;

use all_pairs_paths::{
    error::GraphResult,
    graphs::{read_edges_from_file, validate_edges},
    search::floyd_warshall::FloydWarshall,
    utility::get_progressbar_long_jobs,
    write_floyd_warshall,
};
use clap::Parser;

/// Computes all pairs shortest paths of `graph` and saves them at `apsp`. Takes
/// cubic time in the number of vertices.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph in `.fmi` or `.gr` format
    #[arg(short, long)]
    graph: PathBuf,
    /// Use every edge in both directions
    #[arg(short, long)]
    undirected: bool,
    /// Path where the all pairs shortest paths shall be saved
    #[arg(short, long)]
    apsp: PathBuf,
}

fn main() -> GraphResult<()> {
    let args = Args::parse();

    println!("Reading graph");
    let (number_of_vertices, edges) = read_edges_from_file(&args.graph)?;
    println!(
        "Graph has {} vertices and {} edges",
        number_of_vertices,
        edges.len()
    );

    validate_edges(number_of_vertices, &edges)?;

    let progress_bar =
        get_progressbar_long_jobs("Relaxing intermediate vertices", number_of_vertices as u64);
    let floyd_warshall = FloydWarshall::new_with_progress_bar(
        number_of_vertices,
        edges,
        !args.undirected,
        progress_bar,
    );

    println!("Writing all pairs shortest paths");
    write_floyd_warshall(&args.apsp, &floyd_warshall)?;

    Ok(())
}
