//! A fixed-capacity ring buffer that keeps the most recent elements.

/// Holds at most `capacity` elements; pushing into a full buffer overwrites
/// the oldest one.
///
/// After `K` pushes the buffer holds the last `min(K, capacity)` elements in
/// their original relative order.
#[derive(Debug, Clone)]
pub(crate) struct RingBuffer<T> {
    slots: Vec<T>,
    capacity: usize,
    oldest: usize,
}

impl<T> RingBuffer<T> {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
            oldest: 0,
        }
    }

    pub(crate) fn push(&mut self, item: T) {
        if self.capacity == 0 {
            return;
        }
        if self.slots.len() < self.capacity {
            self.slots.push(item);
        } else {
            self.slots[self.oldest] = item;
            self.oldest = (self.oldest + 1) % self.capacity;
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    /// Consumes the buffer, yielding the retained elements oldest first.
    pub(crate) fn into_ordered(mut self) -> std::vec::IntoIter<T> {
        self.slots.rotate_left(self.oldest);
        self.slots.into_iter()
    }
}
