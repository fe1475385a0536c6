use log::debug;
use std::time::Instant;

/// Logs the wall-clock span of a scope at debug level when dropped.
pub struct ScopedTimer {
    label: &'static str,
    started: Instant,
}

impl ScopedTimer {
    pub fn new(label: &'static str) -> Self {
        Self { label, started: Instant::now() }
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.started.elapsed().as_secs_f64() * 1000.0;
        debug!("{}: {:.3} ms", self.label, elapsed_ms);
    }
}
