//! The three counting loops
//!
//! Each loop owns its counter and counts from 1 up to an inclusive bound.
//! Counters are `u32` while bounds are `u16`, so stepping past the bound
//! cannot overflow.

use crate::classify::{classify, Verdict};
use crate::debug_println;
use nonempty::NonEmpty;

/// Text emitted once per iteration of the fixed-count loop
pub const MARKER: &str = "test";

/// Pre-test loop: the condition is checked before every iteration, so a
/// bound of 0 yields nothing.
pub fn ascending(bound: u16) -> Vec<u32> {
    let bound = u32::from(bound);
    let mut values = Vec::with_capacity(bound as usize);

    let mut counter: u32 = 1;
    while counter <= bound {
        values.push(counter);
        counter += 1;
    }

    debug_println!("[loops] ascending exited with counter = {}", counter);
    values
}

/// Fixed-count loop driven by the induction variable `i`.
pub fn fixed_count(bound: u16) -> Vec<&'static str> {
    let mut markers = Vec::with_capacity(usize::from(bound));

    for i in 1..=bound {
        debug_println!("[loops] fixed_count i = {}", i);
        markers.push(MARKER);
    }

    markers
}

/// Post-test loop: the body runs once before the condition is first
/// checked, so even a bound of 0 classifies the value 1.
pub fn classification(bound: u16) -> NonEmpty<Verdict> {
    let bound = u32::from(bound);

    let mut counter: u32 = 1;
    let mut verdicts = NonEmpty::new(classify(counter));
    counter += 1;

    while counter <= bound {
        verdicts.push(classify(counter));
        counter += 1;
    }

    debug_println!("[loops] classification exited with counter = {}", counter);
    verdicts
}
