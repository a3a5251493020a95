use derive_more::Display;

/// Failure of a queue operation. Neither variant is fatal: the queue is left exactly as it was
/// before the call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum QueueError {
    /// An enqueue was attempted while every slot was in use.
    #[display(fmt = "queue overflow")]
    Overflow,
    /// A dequeue or peek was attempted on an empty queue.
    #[display(fmt = "queue underflow (empty)")]
    Underflow,
}

#[cfg(feature = "std")]
impl std::error::Error for QueueError {}
