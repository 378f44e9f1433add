use std::{future::Future, time::Duration};

use tokio::task::JoinHandle;

/// Runs only the most recently scheduled job, once the quiet period passes
/// without another one arriving.
///
/// Scheduling aborts whatever is pending, including a job that already
/// started and is suspended mid-request. Dropping the debouncer aborts too.
/// Must be used from within a tokio runtime.
#[derive(Debug)]
pub struct Debouncer {
    quiet: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    pub fn schedule<F>(&mut self, job: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let quiet = self.quiet;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet).await;
            job.await;
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Wait for the pending job, if any, to run to completion.
    pub async fn settle(&mut self) {
        if let Some(handle) = self.pending.take() {
            // A cancelled job has nothing to report.
            let _ = handle.await;
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
