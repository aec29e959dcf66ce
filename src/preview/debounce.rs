//! Trailing-edge debouncing of update requests.
//!
//! Update requests arriving within the quiet interval coalesce into one
//! execution: each new request aborts the pending timer task and starts a
//! fresh one, so only the trailing request runs once the interval elapses
//! undisturbed.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::trace;

/// Coalesces rapid-fire update requests into a single trailing execution.
#[derive(Debug, Clone)]
pub struct Debouncer {
    wait: Duration,
    pending: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl Debouncer {
    /// Create a debouncer with the given quiet interval.
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: Arc::new(Mutex::new(None)),
        }
    }

    /// Schedule `task` to run after the quiet interval. A pending task that
    /// has not fired yet is cancelled and replaced.
    pub async fn schedule<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut pending = self.pending.lock().await;
        if let Some(handle) = pending.take() {
            trace!("resetting debounce timer");
            handle.abort();
        }

        let wait = self.wait;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(wait).await;
            task.await;
        }));
    }

    /// Cancel any pending task without running it.
    pub async fn cancel(&self) {
        if let Some(handle) = self.pending.lock().await.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test(start_paused = true)]
    async fn test_rapid_requests_coalesce_to_one() {
        let debouncer = Debouncer::new(Duration::from_millis(300));
        let fired = Arc::new(AtomicUsize::new(0));

        for _ in 0..5 {
            let fired = fired.clone();
            debouncer
                .schedule(async move {
                    fired.fetch_add(1, Ordering::SeqCst);
                })
                .await;
        }

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_separated_requests_each_fire() {
        let debouncer = Debouncer::new(Duration::from_millis(300));
        let fired = Arc::new(AtomicUsize::new(0));

        for _ in 0..2 {
            let counter = fired.clone();
            debouncer
                .schedule(async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                })
                .await;
            tokio::time::sleep(Duration::from_millis(400)).await;
        }

        assert_eq!(fired.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending_task() {
        let debouncer = Debouncer::new(Duration::from_millis(300));
        let fired = Arc::new(AtomicUsize::new(0));

        let counter = fired.clone();
        debouncer
            .schedule(async move {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .await;
        debouncer.cancel().await;

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }
}
