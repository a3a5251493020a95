use crate::error::QueueError;
use crate::logging::{qtrace, qwarn};
use core::iter::FusedIterator;

/// Bounded FIFO of `N` integers.
///
/// `front` is the slot of the oldest element and `rear` the slot the next element will be written
/// to. Both wrap modulo `N`. When they are equal the queue is either empty or full, and only
/// `count` says which.
#[derive(Clone, Debug)]
pub struct RingQueue<const N: usize> {
    buffer: [i32; N],
    front: usize,
    rear: usize,
    count: usize,
}

impl<const N: usize> Default for RingQueue<N> {
    fn default() -> Self {
        RingQueue::new()
    }
}

impl<const N: usize> RingQueue<N> {
    const NON_EMPTY: () = assert!(N > 0, "a ring queue needs at least one slot");

    /// Creates an empty queue. Every slot starts out holding `0`.
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_EMPTY;

        Self {
            buffer: [0; N],
            front: 0,
            rear: 0,
            count: 0,
        }
    }

    /// Puts the cursors and count back to their initial state. Old values stay in the buffer
    /// but are no longer part of the queue.
    pub fn reset(&mut self) {
        qtrace!("reset with {} element(s) queued", self.count);
        self.front = 0;
        self.rear = 0;
        self.count = 0;
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of queued elements.
    pub const fn len(&self) -> usize {
        self.count
    }

    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub const fn is_full(&self) -> bool {
        self.count == N
    }

    /// Slot of the oldest element. Only meaningful while the queue is not empty.
    pub const fn front_index(&self) -> usize {
        self.front
    }

    /// Slot the next enqueued element will be written to.
    pub const fn rear_index(&self) -> usize {
        self.rear
    }

    /// Slot of the most recently enqueued element, i.e. `rear - 1` wrapped.
    pub const fn last_index(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some((self.rear + N - 1) % N)
        }
    }

    /// Raw content of a buffer slot, whether or not it is part of the queue.
    pub fn raw(&self, index: usize) -> Option<i32> {
        self.buffer.get(index).copied()
    }

    /// Appends `value` at the rear. Fails with [`QueueError::Overflow`] when full, in which case
    /// nothing is written.
    pub fn enqueue(&mut self, value: i32) -> Result<(), QueueError> {
        if self.is_full() {
            qwarn!("enqueue of {} rejected, all {} slots in use", value, N);
            return Err(QueueError::Overflow);
        }
        self.buffer[self.rear] = value;
        self.rear = (self.rear + 1) % N;
        self.count += 1;
        Ok(())
    }

    /// Removes and returns the oldest element. Fails with [`QueueError::Underflow`] when empty.
    pub fn dequeue(&mut self) -> Result<i32, QueueError> {
        if self.is_empty() {
            qwarn!("dequeue rejected, queue is empty");
            return Err(QueueError::Underflow);
        }
        let value = self.buffer[self.front];
        self.front = (self.front + 1) % N;
        self.count -= 1;
        Ok(value)
    }

    /// Returns the oldest element without removing it.
    pub fn peek(&self) -> Result<i32, QueueError> {
        if self.is_empty() {
            return Err(QueueError::Underflow);
        }
        Ok(self.buffer[self.front])
    }

    /// Queued elements from front to rear.
    pub fn iter(&self) -> Iter<'_, N> {
        Iter {
            queue: self,
            offset: 0,
        }
    }

    /// Owned copy of the queued elements, front first.
    pub fn contents(&self) -> heapless::Vec<i32, N> {
        self.iter().collect()
    }
}

impl<'a, const N: usize> IntoIterator for &'a RingQueue<N> {
    type Item = i32;
    type IntoIter = Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the elements of a [`RingQueue`], oldest first.
pub struct Iter<'a, const N: usize> {
    queue: &'a RingQueue<N>,
    offset: usize,
}

impl<const N: usize> Iterator for Iter<'_, N> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        if self.offset >= self.queue.count {
            return None;
        }
        let value = self.queue.buffer[(self.queue.front + self.offset) % N];
        self.offset += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.queue.count - self.offset;
        (remaining, Some(remaining))
    }
}

impl<const N: usize> ExactSizeIterator for Iter<'_, N> {}

impl<const N: usize> FusedIterator for Iter<'_, N> {}
