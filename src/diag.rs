/// Step timing on stderr, compiled in with the `trace` feature.
///
/// Nothing here reads arguments or the environment; the switch is purely
/// build-time so a default build's output is byte-exact.
use std::time::Instant;

/// Whether diagnostics were compiled in.
pub const ENABLED: bool = cfg!(feature = "trace");

/// A RAII timer that prints elapsed milliseconds to stderr on drop.
///
/// Does nothing unless built with `--features trace`.
pub struct Step {
    label: &'static str,
    start: Instant,
}

impl Step {
    #[must_use]
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
        }
    }
}

impl Drop for Step {
    fn drop(&mut self) {
        if ENABLED {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            eprintln!("[debug] {}: {ms:.2}ms", self.label);
        }
    }
}

/// Print one `[debug]` line.
pub fn note(label: &str, detail: &dyn std::fmt::Display) {
    if ENABLED {
        eprintln!("[debug] {label}: {detail}");
    }
}
