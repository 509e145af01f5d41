/// Receives upload progress as a whole percentage, 0 to 100.
///
/// Completion and failure are not reported here; they arrive through the
/// upload's `Result`.
pub trait ProgressObserver: Send + Sync {
    fn on_progress(&self, percent: u8);
}

impl<F> ProgressObserver for F
where
    F: Fn(u8) + Send + Sync,
{
    fn on_progress(&self, percent: u8) {
        self(percent)
    }
}
