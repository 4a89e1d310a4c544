//! Zero-cost tracing hooks.
//!
//! With the `tracing` feature enabled, `trace_op!` forwards to
//! `tracing::trace!`; without it (the default) the macro compiles to
//! nothing, so structural mutations carry no logging overhead.

#[cfg(feature = "tracing")]
macro_rules! trace_op {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_op {
    ($($arg:tt)*) => {};
}

pub(crate) use trace_op;
