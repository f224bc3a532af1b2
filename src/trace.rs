//! Internal instrumentation hooks.
//!
//! With the `tracing` feature enabled these forward to the `tracing` crate;
//! without it they expand to nothing, so instrumented code carries no cost.

/// Emits a `TRACE`-level event when the `tracing` feature is enabled.
macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!($($arg)*);
        }
    };
}

/// Emits a `DEBUG`-level event when the `tracing` feature is enabled.
macro_rules! debug_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::debug!($($arg)*);
        }
    };
}
