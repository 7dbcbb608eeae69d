//! Scored values and the maximum reduction.
//!
//! [`Scored::better`] breaks ties by the smaller input value rather than by
//! arrival order. That makes the reduction associative and commutative, so
//! partial winners from any partitioning of the range fold to the same final
//! pair regardless of worker count or schedule.

use crate::core::steps::steps;

/// One scored input: a value from the scanned range and its Collatz step
/// count. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scored {
    pub value: u64,
    pub steps: u32,
}

impl Scored {
    /// The trivial result: value 1 scores zero steps.
    ///
    /// Neutral element of [`Scored::better`], and the correct report for a
    /// scan whose range holds nothing beyond 1.
    pub const IDENTITY: Scored = Scored { value: 1, steps: 0 };

    /// Score `n` by running the step counter on it.
    pub fn compute(n: u64) -> Self {
        Scored {
            value: n,
            steps: steps(n),
        }
    }

    /// Reduction operator: more steps wins; equal steps go to the smaller
    /// value.
    #[must_use]
    pub fn better(self, other: Scored) -> Scored {
        if other.steps > self.steps || (other.steps == self.steps && other.value < self.value) {
            other
        } else {
            self
        }
    }
}
