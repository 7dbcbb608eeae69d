//! Pure, deterministic search logic. No I/O.

pub mod score;
pub mod steps;
