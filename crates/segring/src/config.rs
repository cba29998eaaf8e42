//! Sizing constants for segment allocation and growth.
//!
//! These are tuning parameters, not correctness requirements: any values
//! that pass the compile-time checks below preserve behavior, only the
//! amortized allocation cost changes.

/// Capacity of the very first segment allocated by a queue.
///
/// Kept small so that short-lived queues holding a handful of elements
/// never pay for a full-size segment.
pub(crate) const FIRST_SEGMENT_CAPACITY: usize = 4;

/// Multiplier applied each time the first segment grows in place.
///
/// With a factor of 4 the first segment grows 4 → 16 → 64 and then stops;
/// all further capacity comes from new `SEGMENT_CAPACITY` segments. Only
/// the first segment ever grows.
pub(crate) const SEGMENT_GROWTH_FACTOR: usize = 4;

/// Capacity ceiling for in-place growth of the first segment.
pub(crate) const MAX_FIRST_SEGMENT_CAPACITY: usize = 64;

/// Capacity of every segment allocated after the first one.
pub(crate) const SEGMENT_CAPACITY: usize = 256;

/// True if repeated multiplication by `SEGMENT_GROWTH_FACTOR` lands the
/// first segment exactly on the growth ceiling.
const fn ceiling_reachable() -> bool {
    let mut cap = FIRST_SEGMENT_CAPACITY;
    while cap < MAX_FIRST_SEGMENT_CAPACITY {
        cap *= SEGMENT_GROWTH_FACTOR;
    }
    cap == MAX_FIRST_SEGMENT_CAPACITY
}

const _: () = {
    assert!(FIRST_SEGMENT_CAPACITY > 0);
    assert!(SEGMENT_GROWTH_FACTOR > 1);
    assert!(
        ceiling_reachable(),
        "growth ceiling must be reachable from the first capacity by repeated growth"
    );
    assert!(
        SEGMENT_CAPACITY >= MAX_FIRST_SEGMENT_CAPACITY,
        "standard segments must be at least as large as the growth ceiling"
    );
};
