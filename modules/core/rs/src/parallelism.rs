use std::cmp::Ordering;
use std::thread::available_parallelism;

use eyre::{Result, WrapErr};
use rayon::{ThreadPool, ThreadPoolBuilder};

fn _normalize(requested: isize, max: isize) -> usize {
    match requested.cmp(&0) {
        Ordering::Less => (max + requested + 1).max(1) as usize,
        Ordering::Equal => 1,
        Ordering::Greater => requested.min(max) as usize,
    }
}

/// Number of worker threads for the requested value: positive values are capped by the number of
/// cores, zero means a single thread, negative values count back from all available cores
/// (-1 = all cores, -2 = all but one, ...).
pub fn available(requested: isize) -> Result<usize> {
    let max = available_parallelism()?.get() as isize;
    Ok(_normalize(requested, max))
}

/// Builds a rayon thread pool sized with [available].
pub fn pool(requested: isize) -> Result<ThreadPool> {
    let threads = available(requested)?;
    log::debug!("Building a thread pool with {threads} worker(s) (requested: {requested})");
    ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .wrap_err("Failed to build the thread pool")
}
