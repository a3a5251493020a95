//! Index by index view of a [`RingQueue`], used to show how the cursors move around the buffer.

use crate::queue::RingQueue;
use core::fmt;
use core::iter::FusedIterator;

/// Annotation for a buffer slot holding a queued element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SlotMarker {
    None,
    /// The oldest element, next to be dequeued.
    Front,
    /// The most recently enqueued element, at `rear - 1`.
    Last,
    /// Front and last at once: the queue holds a single element.
    Only,
}

/// One slot of the buffer. `value` is `Some` only when the slot is part of the queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Slot {
    pub index: usize,
    pub value: Option<i32>,
    pub marker: SlotMarker,
}

impl<const N: usize> RingQueue<N> {
    /// Whether `index` currently holds a queued element. Decided from the cursors alone, with the
    /// count only used to tell the empty and full cases apart when `front == rear`.
    pub fn is_occupied(&self, index: usize) -> bool {
        if self.is_empty() || index >= N {
            return false;
        }
        let (front, rear) = (self.front_index(), self.rear_index());
        if front < rear {
            (front..rear).contains(&index)
        } else if front > rear {
            index >= front || index < rear
        } else {
            // front == rear with elements queued only happens when full
            self.is_full()
        }
    }

    /// Describes a single slot, `None` when `index` is out of range.
    pub fn slot(&self, index: usize) -> Option<Slot> {
        let raw = self.raw(index)?;
        if !self.is_occupied(index) {
            return Some(Slot {
                index,
                value: None,
                marker: SlotMarker::None,
            });
        }

        let is_front = index == self.front_index();
        let is_last = Some(index) == self.last_index();
        let marker = match (is_front, is_last) {
            (true, true) => SlotMarker::Only,
            (true, false) => SlotMarker::Front,
            (false, true) => SlotMarker::Last,
            (false, false) => SlotMarker::None,
        };
        Some(Slot {
            index,
            value: Some(raw),
            marker,
        })
    }

    /// Read only view of the queue state that formats as the diagnostic report.
    pub fn render(&self) -> StateView<'_, N> {
        StateView { queue: self }
    }

    /// The [`render`](Self::render) report collected into a `String`.
    #[cfg(any(feature = "std", test))]
    pub fn render_state(&self) -> String {
        self.render().to_string()
    }
}

/// Diagnostic report of a queue: capacity, count, both cursors and every buffer slot.
#[derive(Clone, Copy)]
pub struct StateView<'a, const N: usize> {
    queue: &'a RingQueue<N>,
}

impl<'a, const N: usize> StateView<'a, N> {
    /// All `N` slots in index order.
    pub fn slots(&self) -> Slots<'a, N> {
        Slots {
            queue: self.queue,
            index: 0,
        }
    }
}

impl<const N: usize> fmt::Display for StateView<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let q = self.queue;
        writeln!(f)?;
        writeln!(f, "--- Circular Queue Internal State ---")?;
        writeln!(f, "capacity = {}, count = {}", q.capacity(), q.len())?;
        writeln!(f, "front index = {}, rear index = {}", q.front_index(), q.rear_index())?;
        writeln!(f, "buffer (index:value):")?;
        for slot in self.slots() {
            write!(f, "{}", slot)?;
        }
        writeln!(f, "-------------------------------------")
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(value) = self.value else {
            return writeln!(f, " [{:2}] : --", self.index);
        };
        write!(f, " [{:2}] : {}", self.index, value)?;
        match self.marker {
            SlotMarker::Only => write!(f, "  <-- only element (front==rearprev)")?,
            SlotMarker::Front => write!(f, "  <-- front")?,
            SlotMarker::Last => write!(f, "  <-- last in queue (rear-1)")?,
            SlotMarker::None => {}
        }
        writeln!(f)
    }
}

/// Iterator over every slot of a queue's buffer.
pub struct Slots<'a, const N: usize> {
    queue: &'a RingQueue<N>,
    index: usize,
}

impl<const N: usize> Iterator for Slots<'_, N> {
    type Item = Slot;

    fn next(&mut self) -> Option<Slot> {
        let slot = self.queue.slot(self.index)?;
        self.index += 1;
        Some(slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = N.saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<const N: usize> ExactSizeIterator for Slots<'_, N> {}

impl<const N: usize> FusedIterator for Slots<'_, N> {}
