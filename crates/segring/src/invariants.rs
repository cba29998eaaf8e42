//! Debug assertion macros for queue cursor invariants.
//!
//! These macros provide runtime checks for the cursor and ring invariants
//! documented on `Queue`. They are only active in debug builds
//! (`debug_assert!`), so there is zero overhead in release builds.

/// Assert that the read cursor has not run past the head segment's bound.
///
/// **Invariant**: `head_pos ≤ head_bound` whenever the queue is non-empty.
macro_rules! debug_assert_read_in_bounds {
    ($head_pos:expr, $head_bound:expr) => {
        debug_assert!(
            $head_pos <= $head_bound,
            "read cursor {} past head bound {}",
            $head_pos,
            $head_bound
        )
    };
}

/// Assert that the write cursor stays within the tail segment.
///
/// **Invariant**: `tail_pos ≤ tail.capacity()` (equal means the segment is
/// full and the next push must grow, rotate, or splice).
macro_rules! debug_assert_write_in_bounds {
    ($tail_pos:expr, $capacity:expr) => {
        debug_assert!(
            $tail_pos <= $capacity,
            "write cursor {} past tail capacity {}",
            $tail_pos,
            $capacity
        )
    };
}

/// Assert that a popped slot actually held a value.
///
/// **Invariant**: `buffer slot at head_pos is occupied whenever len > 0`.
/// A `None` here means the cursors and the count disagree.
macro_rules! debug_assert_popped_occupied {
    ($value:expr, $head_pos:expr) => {
        debug_assert!(
            $value.is_some(),
            "popped an empty slot at head position {} with non-zero length",
            $head_pos
        )
    };
}

pub(crate) use debug_assert_popped_occupied;
pub(crate) use debug_assert_read_in_bounds;
pub(crate) use debug_assert_write_in_bounds;
