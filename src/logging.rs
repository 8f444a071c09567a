//! Logging macros forwarding to `log` when the "log" feature is enabled.
//! Without the feature they compile to nothing, but still type-check their arguments.

macro_rules! debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "log")]
        log::debug!($($arg)*);
        #[cfg(not(feature = "log"))]
        {
            if false {
                let _ = format!($($arg)*);
            }
        }
    }};
}

macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "log")]
        log::trace!($($arg)*);
        #[cfg(not(feature = "log"))]
        {
            if false {
                let _ = format!($($arg)*);
            }
        }
    }};
}

macro_rules! warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "log")]
        log::warn!($($arg)*);
        #[cfg(not(feature = "log"))]
        {
            if false {
                let _ = format!($($arg)*);
            }
        }
    }};
}
