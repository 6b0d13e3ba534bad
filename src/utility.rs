use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;

use crate::search::path::ShortestPathRequest;

pub fn get_progressbar_long_jobs(job_name: &str, len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_message(job_name.to_string());
    bar.set_style(
        ProgressStyle::with_template(" {msg} {wide_bar} estimated remaining: {eta_precise}")
            .expect("static progress bar template is valid"),
    );
    bar
}

pub fn get_progressspinner(job_name: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(job_name.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// `number_of_requests` uniformly drawn source target pairs.
pub fn random_requests<R: Rng>(
    rng: &mut R,
    number_of_requests: u32,
    number_of_vertices: u32,
) -> Vec<ShortestPathRequest> {
    if number_of_vertices == 0 {
        return Vec::new();
    }

    (0..number_of_requests)
        .map(|_| ShortestPathRequest {
            source: rng.gen_range(0..number_of_vertices),
            target: rng.gen_range(0..number_of_vertices),
        })
        .collect()
}
