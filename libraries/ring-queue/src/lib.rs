#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

//! # Ring Queue
//!
//! A fixed capacity FIFO of `i32` values backed by a plain array. Insertion and removal move the
//! `front` and `rear` cursors modulo the capacity instead of shifting elements, and a separate
//! element count tells a full queue apart from an empty one when both cursors meet.
//!
//! ```
//! use ring_queue::{QueueError, RingQueue};
//!
//! let mut q: RingQueue<3> = RingQueue::new();
//! q.enqueue(1)?;
//! q.enqueue(2)?;
//! assert_eq!(q.dequeue(), Ok(1));
//! assert_eq!(q.peek(), Ok(2));
//! assert_eq!(q.dequeue(), Ok(2));
//! assert_eq!(q.dequeue(), Err(QueueError::Underflow));
//! # Ok::<(), QueueError>(())
//! ```
//!
//! The [`render`](RingQueue::render) view prints every slot of the buffer along with which ones
//! currently hold a queued value. With the `std` feature, [`render_state`](RingQueue::render_state)
//! collects it into a `String`.
//!
//! Rejected operations and resets are logged through defmt only when the `defmt` feature is on.
//! Without it the crate logs nothing, and callers report failures from the returned
//! [`QueueError`].

mod error;
mod logging;
mod queue;
mod render;

pub use crate::error::QueueError;
pub use crate::queue::{Iter, RingQueue};
pub use crate::render::{Slot, SlotMarker, Slots, StateView};
