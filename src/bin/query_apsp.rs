use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::PathBuf,
    time::Instant,
};

use all_pairs_paths::{
    error::GraphResult,
    read_floyd_warshall,
    search::{
        path::{Path, ShortestPathRequest, ShortestPathTestCase},
        PathFinding,
    },
    utility::random_requests,
};
use clap::Parser;
use indicatif::ParallelProgressIterator;
use itertools::Itertools;
use rayon::prelude::*;

/// Answers shortest path requests with precomputed all pairs shortest paths.
/// Requests are read from `requests` or drawn at random.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// All pairs shortest paths created by `create_apsp`
    #[arg(short, long)]
    apsp: PathBuf,
    /// Requests as json list of `{"source": .., "target": ..}`
    #[arg(short, long)]
    requests: Option<PathBuf>,
    /// Number of random requests, used if no requests are given
    #[arg(short, long, default_value_t = 1_000)]
    number_of_requests: u32,
    /// Path where the answers shall be saved
    #[arg(long)]
    results: PathBuf,
    /// Path where the vertices of every found path shall be saved
    #[arg(short, long)]
    paths: Option<PathBuf>,
}

fn main() -> GraphResult<()> {
    let args = Args::parse();

    let floyd_warshall = read_floyd_warshall::<u32>(&args.apsp)?;

    let requests: Vec<ShortestPathRequest> = match &args.requests {
        Some(requests) => {
            println!("Reading requests");
            serde_json::from_reader(BufReader::new(File::open(requests)?))?
        }
        None => {
            println!("Generating {} random requests", args.number_of_requests);
            random_requests(
                &mut rand::thread_rng(),
                args.number_of_requests,
                floyd_warshall.number_of_vertices(),
            )
        }
    };

    println!("Answering requests");
    let start = Instant::now();
    let paths: Vec<Option<Path<u32>>> = requests
        .par_iter()
        .progress_count(requests.len() as u64)
        .map(|request| PathFinding::shortest_path(&floyd_warshall, request.source, request.target))
        .collect();
    println!(
        "Took {:?} per request averaged over {} requests",
        start.elapsed() / std::cmp::max(requests.len() as u32, 1),
        requests.len()
    );

    println!("Writing results");
    let results: Vec<_> = requests
        .iter()
        .zip(paths.iter())
        .map(|(request, path)| ShortestPathTestCase {
            request: *request,
            weight: path.as_ref().map(|path| path.weight),
        })
        .collect();
    let writer = BufWriter::new(File::create(&args.results)?);
    serde_json::to_writer(writer, &results)?;

    if let Some(paths_file) = &args.paths {
        println!("Writing paths");
        let mut writer = BufWriter::new(File::create(paths_file)?);
        for path in paths.iter().flatten() {
            writeln!(writer, "{}", path.vertices.iter().join(" "))?;
        }
        writer.flush()?;
    }

    Ok(())
}
