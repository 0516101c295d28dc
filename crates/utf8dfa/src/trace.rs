//! Internal logging macros.
//!
//! With the `tracing` feature these forward to the `tracing` crate. Without it
//! they expand to an empty block and their arguments are never evaluated.

macro_rules! debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)*);
    }};
}

macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
    }};
}
