// src/progress.rs
/// Lightweight progress reporting used by long-running operations (scrape/analyze).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of steps (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one step completes (fetch, extract, save).
    fn step_done(&mut self, _step: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Forwards everything to the `log` facade; used by the CLI.
pub struct LogProgress {
    done: usize,
    total: usize,
}

impl LogProgress {
    pub fn new() -> Self { Self { done: 0, total: 0 } }
}

impl Default for LogProgress {
    fn default() -> Self { Self::new() }
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        log::info!("{msg}");
    }
    fn step_done(&mut self, step: &str) {
        self.done += 1;
        log::info!("{step} ({}/{})", self.done, self.total);
    }
    fn finish(&mut self) {
        log::debug!("Finished {}/{} step(s)", self.done, self.total);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_steps(p: Option<&mut dyn Progress>) {
        if let Some(p) = p {
            p.begin(2);
            p.step_done("one");
            p.step_done("two");
            p.finish();
        }
    }

    #[test]
    fn log_progress_counts_steps() {
        let mut p = LogProgress::new();
        run_steps(Some(&mut p));
        assert_eq!((p.done, p.total), (2, 2));
    }

    #[test]
    fn null_progress_accepts_everything() {
        run_steps(Some(&mut NullProgress));
        run_steps(None);
    }
}
