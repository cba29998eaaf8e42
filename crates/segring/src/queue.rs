use crate::config::{
    FIRST_SEGMENT_CAPACITY, MAX_FIRST_SEGMENT_CAPACITY, SEGMENT_CAPACITY, SEGMENT_GROWTH_FACTOR,
};
use crate::invariants::{
    debug_assert_popped_occupied, debug_assert_read_in_bounds, debug_assert_write_in_bounds,
};
use crate::segment::Segment;

// =============================================================================
// STORAGE STRATEGY
// =============================================================================
//
// The queue stores its elements in a ring of segments. Each segment is a
// fixed-capacity slot array plus a link to the next segment; the links form
// a cycle. All segments live in a single arena (`Vec<Segment<T>>`) owned by
// the queue, and the links are arena indices rather than pointers, so the
// ring needs no unsafe code and no reference counting.
//
// ## Cursor protocol
//
// - `tail`/`tail_pos`: pushes write into the tail segment at `tail_pos`.
//   When the tail segment fills up, the push either grows it in place
//   (first segment only), advances into an already-drained segment sitting
//   between tail and head, or splices a freshly allocated segment into the
//   ring right after the tail.
// - `head`/`head_pos`/`head_bound`: pops read from the head segment at
//   `head_pos`. When the head segment drains, the pop rotates the head to
//   the next segment in the ring. The drained segment is NOT freed; it
//   stays linked so a later push can reuse it.
//
// ## Why a ring
//
// Under steady churn the head keeps draining segments while the tail keeps
// filling them. Because drained segments remain linked between the tail and
// the head, the tail finds recycled capacity waiting for it and the queue
// stops allocating entirely once the ring is large enough for the workload's
// high-water mark. Capacity is only returned to the allocator by `clear` or
// by dropping the queue.
//
// ## First-segment growth
//
// The very first segment starts tiny and grows in place (4 → 16 → 64) while
// it is still the only segment. Every segment allocated after that is a
// fixed 256-slot block, so no other segment ever needs to grow: a segment
// can only be full below the growth ceiling if it is the first one.
//
// =============================================================================

/// An unbounded FIFO queue backed by a ring of reusable segments.
///
/// `Queue::new()` and `Queue::default()` are equivalent: both produce an
/// empty queue that has allocated nothing yet. The first segment is created
/// lazily by the first push.
///
/// All operations take `&mut self` (or `&self` for read-only accessors), so
/// exclusive access is enforced by the borrow checker. For cross-thread use,
/// wrap the queue behind external synchronization.
///
/// # Example
///
/// ```
/// use segring::Queue;
///
/// let mut queue = Queue::new();
/// queue.push(1);
/// queue.push(2);
/// queue.push(3);
///
/// assert_eq!(queue.len(), 3);
/// assert_eq!(queue.pop(), Some(1));
/// assert_eq!(queue.pop(), Some(2));
/// assert_eq!(queue.pop(), Some(3));
/// assert_eq!(queue.pop(), None);
/// ```
#[derive(Debug)]
pub struct Queue<T> {
    /// Arena owning every segment in the ring. Empty until the first push.
    segments: Vec<Segment<T>>,
    /// Arena index of the segment currently being read from.
    head: usize,
    /// Arena index of the segment currently being written to.
    tail: usize,
    /// Index of the next slot to read within the head segment.
    head_pos: usize,
    /// Index of the last valid slot within the head segment (capacity - 1).
    head_bound: usize,
    /// Index of the next free slot within the tail segment.
    tail_pos: usize,
    /// Number of elements currently queued.
    len: usize,
}

impl<T> Queue<T> {
    /// Creates an empty queue. Does not allocate.
    pub const fn new() -> Self {
        Self {
            segments: Vec::new(),
            head: 0,
            tail: 0,
            head_pos: 0,
            head_bound: 0,
            tail_pos: 0,
            len: 0,
        }
    }

    /// Returns the number of queued elements. O(1).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the queue holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the element at the front of the queue, or
    /// `None` if the queue is empty. Does not mutate the queue. O(1).
    pub fn front(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        self.segments[self.head].peek(self.head_pos)
    }

    /// Appends `value` to the back of the queue. Amortized O(1).
    ///
    /// Never fails: the queue grows as needed, preferring to recycle a
    /// drained segment already in the ring over allocating a new one.
    pub fn push(&mut self, value: T) {
        if self.segments.is_empty() {
            // First push ever: seed the ring with one small segment linked
            // to itself.
            let mut first = Segment::new(FIRST_SEGMENT_CAPACITY, 0);
            first.write(0, value);
            self.segments.push(first);
            self.head = 0;
            self.tail = 0;
            self.head_pos = 0;
            self.head_bound = FIRST_SEGMENT_CAPACITY - 1;
            self.tail_pos = 1;
        } else if self.tail_pos < self.segments[self.tail].capacity() {
            // Room left in the tail segment.
            let pos = self.tail_pos;
            self.segments[self.tail].write(pos, value);
            self.tail_pos += 1;
        } else if self.tail_pos < MAX_FIRST_SEGMENT_CAPACITY {
            // A segment can only be full below the growth ceiling if it is
            // the first segment, still the only one ever allocated. Grow it
            // in place. head == tail here, so the head bound moves too.
            let segment = &mut self.segments[self.tail];
            let new_capacity = segment.capacity() * SEGMENT_GROWTH_FACTOR;
            segment.grow(new_capacity);
            segment.write(self.tail_pos, value);
            self.tail_pos += 1;
            self.head_bound = new_capacity - 1;
        } else if self.segments[self.tail].next() != self.head {
            // At least one drained segment sits between tail and head in
            // the ring; advance into it instead of allocating.
            self.tail = self.segments[self.tail].next();
            self.segments[self.tail].write(0, value);
            self.tail_pos = 1;
        } else {
            // Ring is saturated: splice a fresh standard-size segment in
            // after the current tail and before the head.
            let idx = self.segments.len();
            self.segments.push(Segment::new(SEGMENT_CAPACITY, self.head));
            self.segments[self.tail].set_next(idx);
            self.tail = idx;
            self.segments[self.tail].write(0, value);
            self.tail_pos = 1;
        }
        self.len += 1;

        debug_assert_write_in_bounds!(self.tail_pos, self.segments[self.tail].capacity());
    }

    /// Removes and returns the element at the front of the queue, or `None`
    /// if the queue is empty. O(1).
    ///
    /// The drained slot is reset to empty so the queue does not keep the
    /// popped payload alive.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        // take() reads the value out and clears the slot in one step.
        let value = self.segments[self.head].take(self.head_pos);
        debug_assert_popped_occupied!(value, self.head_pos);
        self.len -= 1;

        if self.head_pos < self.head_bound {
            // Room remains in the head segment.
            self.head_pos += 1;
        } else if self.head == self.tail {
            // The only segment in use is now fully drained. There is no
            // next segment to rotate to; rewind the write cursor onto the
            // read position so the segment is reused where it stands.
            self.tail_pos = self.head_pos;
        } else {
            // Head segment drained: rotate to the next segment in the ring.
            // The drained segment stays linked for a later push to reuse.
            self.head = self.segments[self.head].next();
            self.head_pos = 0;
            self.head_bound = self.segments[self.head].capacity() - 1;
        }

        if self.len > 0 {
            debug_assert_read_in_bounds!(self.head_pos, self.head_bound);
        }
        value
    }

    /// Resets the queue to the empty state, dropping every segment in the
    /// ring. Idempotent: clearing an already-empty queue is a no-op, and a
    /// cleared queue is indistinguishable from a freshly created one.
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}
