//! Keystroke coalescing for free-text search.
//!
//! The board re-filters on every search input change; the debouncer sits
//! between the input field and the filter call, delivering only the latest
//! query once the input has been quiet for the configured delay
//! (trailing-edge). Dropping the debouncer flushes any pending query.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::sleep;
use tracing::debug;

/// Trailing-edge debouncer for search queries.
///
/// Must be created inside a tokio runtime; the worker task lives until the
/// debouncer (and with it the channel sender) is dropped.
pub struct SearchDebouncer {
    tx: mpsc::UnboundedSender<String>,
}

impl SearchDebouncer {
    /// Spawn the coalescing worker. `sink` receives the latest query after
    /// each quiet period of `delay`.
    pub fn spawn<F>(delay: Duration, sink: F) -> Self
    where
        F: Fn(String) + Send + 'static,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<String>();
        drop(tokio::spawn(async move {
            while let Some(mut latest) = rx.recv().await {
                loop {
                    tokio::select! {
                        () = sleep(delay) => {
                            debug!(query = %latest, "debounce window elapsed");
                            sink(latest);
                            break;
                        }
                        next = rx.recv() => match next {
                            Some(query) => latest = query,
                            None => {
                                // Sender dropped mid-window: flush and stop.
                                sink(latest);
                                return;
                            }
                        }
                    }
                }
            }
        }));
        Self { tx }
    }

    /// Submit a query; restarts the quiet-period timer.
    pub fn submit(&self, query: impl Into<String>) {
        let _ = self.tx.send(query.into());
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn sink() -> (Arc<Mutex<Vec<String>>>, impl Fn(String) + Send + 'static) {
        let delivered = Arc::new(Mutex::new(Vec::new()));
        let handle = Arc::clone(&delivered);
        (delivered, move |q| handle.lock().unwrap().push(q))
    }

    #[tokio::test(start_paused = true)]
    async fn burst_delivers_only_latest() {
        let (delivered, sink) = sink();
        let debouncer = SearchDebouncer::spawn(Duration::from_millis(300), sink);
        debouncer.submit("m");
        debouncer.submit("mi");
        debouncer.submit("milk");
        sleep(Duration::from_millis(400)).await;
        assert_eq!(*delivered.lock().unwrap(), ["milk"]);
    }

    #[tokio::test(start_paused = true)]
    async fn separate_bursts_deliver_separately() {
        let (delivered, sink) = sink();
        let debouncer = SearchDebouncer::spawn(Duration::from_millis(300), sink);
        debouncer.submit("milk");
        sleep(Duration::from_millis(400)).await;
        debouncer.submit("bread");
        sleep(Duration::from_millis(400)).await;
        assert_eq!(*delivered.lock().unwrap(), ["milk", "bread"]);
    }

    #[tokio::test(start_paused = true)]
    async fn drop_flushes_pending_query() {
        let (delivered, sink) = sink();
        let debouncer = SearchDebouncer::spawn(Duration::from_millis(300), sink);
        debouncer.submit("pending");
        drop(debouncer);
        // Give the worker a turn to observe the closed channel.
        sleep(Duration::from_millis(1)).await;
        assert_eq!(*delivered.lock().unwrap(), ["pending"]);
    }

    #[tokio::test(start_paused = true)]
    async fn nothing_delivered_before_quiet_period() {
        let (delivered, sink) = sink();
        let debouncer = SearchDebouncer::spawn(Duration::from_millis(300), sink);
        debouncer.submit("milk");
        sleep(Duration::from_millis(100)).await;
        assert!(delivered.lock().unwrap().is_empty());
        sleep(Duration::from_millis(300)).await;
        assert_eq!(*delivered.lock().unwrap(), ["milk"]);
        drop(debouncer);
    }
}
