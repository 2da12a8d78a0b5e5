use std::time::{Duration, Instant};

/// Run `f` once and return its value together with the wall-clock time it took.
pub fn measure<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}
