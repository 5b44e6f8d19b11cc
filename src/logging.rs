//! Log macros that forward to the `log` facade when the `logging` feature is
//! enabled and compile away otherwise.
//!
//! Arguments are still type-checked without the feature, so a log line cannot
//! silently rot.

#[cfg(feature = "logging")]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        ::log::debug!($($arg)*)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if false {
            let _ = format!($($arg)*);
        }
    };
}

#[cfg(feature = "logging")]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        ::log::trace!($($arg)*)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        if false {
            let _ = format!($($arg)*);
        }
    };
}
