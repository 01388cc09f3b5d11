//! Optional `tracing` instrumentation.
//!
//! With the `tracing` feature enabled the macros below forward to
//! [`tracing::trace!`] and [`tracing::debug!`]. Without it they only borrow
//! their arguments, so call sites compile identically in both builds.

#[cfg(feature = "tracing")]
macro_rules! trace_mutation {
    ($operation:expr, $index:expr, $length:expr) => {
        ::tracing::trace!(
            operation = $operation,
            index = $index,
            length = $length,
            "chain mutated"
        )
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_mutation {
    ($operation:expr, $index:expr, $length:expr) => {{
        let _ = (&$operation, &$index, &$length);
    }};
}

#[cfg(feature = "tracing")]
macro_rules! debug_rejection {
    ($error:expr) => {
        ::tracing::debug!(error = %$error, "call rejected")
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug_rejection {
    ($error:expr) => {{
        let _ = &$error;
    }};
}
