//! Logging for the queue. Messages go through defmt when the `defmt` feature is enabled, and
//! expand to nothing otherwise so hosts without a defmt global logger can still link the crate.
//! Host programs that leave `defmt` off get no output from here and log failed operations on
//! their side, from the returned [`QueueError`](crate::QueueError).

/// Log a trace message about queue bookkeeping.
macro_rules! qtrace {
    ($($arg:tt)*) => {
        #[cfg(feature = "defmt")]
        defmt::trace!($($arg)*);
    };
}

/// Log a warning about a rejected operation.
macro_rules! qwarn {
    ($($arg:tt)*) => {
        #[cfg(feature = "defmt")]
        defmt::warn!($($arg)*);
    };
}

pub(crate) use qtrace;
pub(crate) use qwarn;
