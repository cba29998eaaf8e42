//! Segment - one link in the queue's storage ring.

/// A fixed-capacity block of value slots plus the arena index of the next
/// segment in the ring.
///
/// Occupied slots hold `Some`; slots that were drained by `pop` are reset
/// to `None` so the queue never keeps a removed payload alive. A segment's
/// capacity never shrinks, and only the queue's first segment ever grows.
#[derive(Debug)]
pub(crate) struct Segment<T> {
    /// Value slots, sized to the segment's capacity.
    slots: Vec<Option<T>>,
    /// Arena index of the next segment in the ring.
    next: usize,
}

impl<T> Segment<T> {
    /// Creates a segment with `capacity` empty slots linking to `next`.
    pub(crate) fn new(capacity: usize, next: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self { slots, next }
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub(crate) fn next(&self) -> usize {
        self.next
    }

    #[inline]
    pub(crate) fn set_next(&mut self, next: usize) {
        self.next = next;
    }

    /// Writes `value` into the slot at `idx`, overwriting whatever was there.
    #[inline]
    pub(crate) fn write(&mut self, idx: usize, value: T) {
        self.slots[idx] = Some(value);
    }

    /// Takes the value out of the slot at `idx`, leaving the slot empty.
    #[inline]
    pub(crate) fn take(&mut self, idx: usize) -> Option<T> {
        self.slots[idx].take()
    }

    /// Borrows the value in the slot at `idx` without clearing it.
    #[inline]
    pub(crate) fn peek(&self, idx: usize) -> Option<&T> {
        self.slots[idx].as_ref()
    }

    /// Grows the slot array in place, keeping existing contents and filling
    /// the new tail slots with `None`. Only the queue's first segment is
    /// ever grown.
    pub(crate) fn grow(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity > self.slots.len());
        self.slots.resize_with(new_capacity, || None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_take_clears_slot() {
        let mut segment = Segment::new(4, 0);
        segment.write(2, 7u32);

        assert_eq!(segment.peek(2), Some(&7));
        assert_eq!(segment.take(2), Some(7));
        assert_eq!(segment.peek(2), None);
        assert_eq!(segment.take(2), None);
    }

    #[test]
    fn test_grow_keeps_contents() {
        let mut segment = Segment::new(4, 0);
        for i in 0..4 {
            segment.write(i, i);
        }

        segment.grow(16);

        assert_eq!(segment.capacity(), 16);
        for i in 0..4 {
            assert_eq!(segment.peek(i), Some(&i));
        }
        assert_eq!(segment.peek(4), None);
        assert_eq!(segment.peek(15), None);
    }
}
