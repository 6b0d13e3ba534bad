use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use error::GraphResult;
use search::floyd_warshall::FloydWarshall;
use serde::{de::DeserializeOwned, Serialize};
use utility::get_progressspinner;

pub mod error;
pub mod graphs;
pub mod search;
pub mod utility;

/// Reads all pairs shortest paths previously written by [`write_floyd_warshall`].
pub fn read_floyd_warshall<W: DeserializeOwned>(path: &Path) -> GraphResult<FloydWarshall<W>> {
    let spinner = get_progressspinner("Reading all pairs shortest paths");
    let reader = BufReader::new(File::open(path)?);
    let floyd_warshall = bincode::deserialize_from(reader)?;
    spinner.finish_and_clear();
    Ok(floyd_warshall)
}

pub fn write_floyd_warshall<W: Serialize>(
    path: &Path,
    floyd_warshall: &FloydWarshall<W>,
) -> GraphResult<()> {
    let spinner = get_progressspinner("Writing all pairs shortest paths");
    let mut writer = BufWriter::new(File::create(path)?);
    bincode::serialize_into(&mut writer, floyd_warshall)?;
    writer.flush()?;
    spinner.finish_and_clear();
    Ok(())
}
