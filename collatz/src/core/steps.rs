//! Collatz step counting.

/// Number of Collatz steps to reach 1 from `n`.
///
/// Repeatedly applies `n/2` (even) or `3n+1` (odd) until `n == 1`, counting
/// iterations; `steps(1)` is 0. Arithmetic wraps at 64 bits — wraparound on
/// overflow is part of the defined semantics, not an error.
///
/// Termination for every input is the Collatz conjecture: it holds for all
/// inputs anyone has checked, but it is an accepted assumption, not an
/// enforced invariant.
///
/// Pure and free of shared state, so it is safe to call from any number of
/// workers concurrently.
pub fn steps(mut n: u64) -> u32 {
    debug_assert!(n >= 1);
    let mut count = 0;
    while n > 1 {
        n = if n % 2 == 0 {
            n / 2
        } else {
            n.wrapping_mul(3).wrapping_add(1)
        };
        count += 1;
    }
    count
}
