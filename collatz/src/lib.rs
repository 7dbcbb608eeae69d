//! Parallel Collatz argmax search.
//!
//! Finds the value in `[1, N)` with the longest Collatz (3n+1) sequence.
//! The architecture keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (step counting, the max
//!   reduction). No I/O, fully testable in isolation.
//! - **[`search`]**: Orchestration — partitions the range across workers
//!   and folds every result into one winner.

pub mod core;
pub mod logging;
pub mod search;
