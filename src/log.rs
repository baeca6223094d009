//! Trace events for boundary conditions, compiled out without the `tracing` feature.

#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($($arg:tt)+) => {
        tracing::trace!(target: "index_buffer", $($arg)+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($($arg:tt)+) => {};
}

pub(crate) use trace_event;
