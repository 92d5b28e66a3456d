/// A macro to unwrap an option to its `Some` value, and panic if `None`. This
/// is the same as [Option::unwrap], except that it accepts a format string
/// and format arguments, allowing for more flexibility in error messages.
#[macro_export]
macro_rules! unwrap {
    ($opt:expr, $fmt:expr, $($arg:tt)*) => {
        match $opt {
            Some(v) => v,
            None => panic!($fmt, $($arg)*),
        }
    };
}

/// A macro to measure the evaluation time of an expression. Wraps an
/// expression, evaluates to its value, and logs the elapsed time at the given
/// level.
#[macro_export]
macro_rules! timed {
    ($label:expr, $ex:expr) => {
        timed!($label, log::Level::Debug, $ex)
    };
    ($label:expr, $log_level:expr, $ex:expr) => {{
        let now = std::time::Instant::now();
        let value = $ex;
        let elapsed = now.elapsed();
        log::log!($log_level, "{} took {} ms", $label, elapsed.as_millis());
        value
    }};
}

/// Number of cells in a hexagon-of-hexagons with the given radius:
/// `3r² + 3r + 1`.
pub fn map_len(radius: u16) -> usize {
    let r = radius as usize;
    3 * r * r + 3 * r + 1
}
