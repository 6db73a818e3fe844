// Logging shims: forward to `log` with `verbose-logging`, vanish otherwise.

#[cfg(feature = "verbose-logging")]
macro_rules! fft_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "verbose-logging"))]
macro_rules! fft_debug {
    ($($arg:tt)*) => {{
        if false {
            let _ = format_args!($($arg)*);
        }
    }};
}
