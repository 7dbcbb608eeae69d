//! Range scan drivers.
//!
//! Partition `[1, limit)` into work items, score each value, and fold every
//! result into a single winner. Aggregation is a reduction tree owned by the
//! worker pool: no shared mutable high score, no unsynchronized writes.

use crate::core::score::Scored;
use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::debug;

/// Scan `[1, limit)` in parallel on the global worker pool.
///
/// The pool owns the partitioning; because [`Scored::better`] is associative
/// and commutative, every split of the range yields the same winner. A
/// `limit` of 2 or less reports the trivial [`Scored::IDENTITY`].
pub fn search(limit: u64) -> Scored {
    (1..limit)
        .into_par_iter()
        .map(Scored::compute)
        .reduce(|| Scored::IDENTITY, Scored::better)
}

/// Single sequential pass over `[1, limit)`.
///
/// Reference implementation for the parallel scan; also the cheapest path
/// for tiny limits.
pub fn search_serial(limit: u64) -> Scored {
    (1..limit)
        .map(Scored::compute)
        .fold(Scored::IDENTITY, Scored::better)
}

/// Scan `[1, limit)` on a dedicated pool of exactly `threads` workers.
pub fn search_with_threads(limit: u64, threads: usize) -> Result<Scored> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("collatz-worker-{i}"))
        .build()
        .context("build worker pool")?;
    let winner = pool.install(|| search(limit));
    debug!(
        limit,
        threads,
        value = winner.value,
        steps = winner.steps,
        "scan complete"
    );
    Ok(winner)
}
