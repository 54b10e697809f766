// src/progress.rs
/// Lightweight progress reporting for the two collection phases.
/// The CLI implements this to print status lines; library code never prints.
pub trait Progress {
    /// Called at the start of a phase with the number of items (if known).
    fn begin(&mut self, _phase: &str, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One matchup or card finished.
    fn item_done(&mut self, _label: &str) {}

    /// One matchup or card was skipped.
    fn item_failed(&mut self, _label: &str, _reason: &str) {}

    /// Called at the end of a phase, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
