// Logging shims: forward to `log` with `verbose-logging`, compile to nothing otherwise.

#[cfg(feature = "verbose-logging")]
macro_rules! debug {
    ($($arg:tt)+) => { log::debug!(target: "fastconv", $($arg)+) };
}

#[cfg(not(feature = "verbose-logging"))]
macro_rules! debug {
    ($($arg:tt)+) => {{
        if false {
            let _ = format_args!($($arg)+);
        }
    }};
}

#[cfg(feature = "verbose-logging")]
macro_rules! trace {
    ($($arg:tt)+) => { log::trace!(target: "fastconv", $($arg)+) };
}

#[cfg(not(feature = "verbose-logging"))]
macro_rules! trace {
    ($($arg:tt)+) => {{
        if false {
            let _ = format_args!($($arg)+);
        }
    }};
}
