use std::sync::{Arc, Mutex};

use crate::modules::client::application::ports::ProgressObserver;

/// Whole percentage of `done` out of `total`, capped at 100.
pub fn percent_of(done: u64, total: u64) -> u8 {
    if total == 0 {
        return 100;
    }
    (done.min(total) * 100 / total) as u8
}

/// Forwards progress to an observer, dropping values that would move it
/// backwards or repeat the last one.
pub struct MonotonicProgress {
    inner: Arc<dyn ProgressObserver>,
    last: Mutex<Option<u8>>,
}

impl MonotonicProgress {
    pub fn new(inner: Arc<dyn ProgressObserver>) -> Self {
        Self {
            inner,
            last: Mutex::new(None),
        }
    }
}

impl ProgressObserver for MonotonicProgress {
    fn on_progress(&self, percent: u8) {
        let percent = percent.min(100);
        {
            let mut last = self.last.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            if last.is_some_and(|prev| percent <= prev) {
                return;
            }
            *last = Some(percent);
        }
        // Unlocked: the observer may report again from inside its callback.
        self.inner.on_progress(percent);
    }
}
