//! Event multiplexer and attachment token
//!
//! `Listener` binds callbacks to event sources. Every attachment gets a
//! delivery task that waits on the source and invokes the callback with the
//! observed value, so firing an event never runs the callback on the firing
//! thread. Fires that arrive while a callback is still executing collapse
//! into one further invocation.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Multiplexes fired events onto callback invocations
///
/// Owns nothing but the attachment count; the delivery tasks themselves are
/// owned by the [`Attachment`] tokens handed back from
/// [`attach_event`](Listener::attach_event).
pub struct Listener {
    active: Arc<AtomicUsize>,
}

impl Listener {
    /// Create a new listener
    pub fn new() -> Self {
        Self {
            active: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get the number of currently attached callbacks
    pub fn attachment_count(&self) -> usize {
        self.active.load(Ordering::Relaxed)
    }

    /// Attach a callback to an event source
    ///
    /// Spawns a delivery task that invokes `callback` with the latest fired
    /// value after every observed change. The callback runs on the delivery
    /// task, never on the firing thread, and must not block indefinitely.
    /// The task exits on its own when the source is dropped.
    pub fn attach_event<F>(
        &self,
        mut events: watch::Receiver<u64>,
        tag: &'static str,
        callback: F,
    ) -> Attachment
    where
        F: Fn(u64) + Send + 'static,
    {
        self.active.fetch_add(1, Ordering::Relaxed);

        let handle = tokio::spawn(async move {
            // changed() resolves once per unseen version; fires that land
            // while the callback runs coalesce into the next iteration
            while events.changed().await.is_ok() {
                let observed = *events.borrow_and_update();
                callback(observed);
            }

            tracing::debug!(tag = tag, "Event source closed, delivery task exiting");
        });

        tracing::debug!(tag = tag, "Callback attached");

        Attachment {
            handle: Some(handle),
            active: Arc::clone(&self.active),
            tag,
        }
    }
}

impl Default for Listener {
    fn default() -> Self {
        Self::new()
    }
}

/// Owned token for one attached callback
///
/// Holding the token keeps delivery alive. [`detach`](Attachment::detach)
/// stops delivery and waits until the delivery task has terminated; dropping
/// the token stops delivery without waiting. Either way the callback is
/// released exactly once.
pub struct Attachment {
    handle: Option<JoinHandle<()>>,
    active: Arc<AtomicUsize>,
    tag: &'static str,
}

impl Attachment {
    /// Detach the callback
    ///
    /// Returns after the delivery task has stopped: no new invocation starts
    /// afterwards, though an invocation already executing when `detach` is
    /// called runs to completion first (abort lands at await points only).
    pub async fn detach(mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            let _ = handle.await;
            self.active.fetch_sub(1, Ordering::Relaxed);

            tracing::debug!(tag = self.tag, "Callback detached");
        }
    }
}

impl Drop for Attachment {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            self.active.fetch_sub(1, Ordering::Relaxed);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::sync::mpsc;
    use tokio::time::timeout;

    use super::*;

    #[tokio::test]
    async fn test_fire_invokes_callback() {
        let listener = Listener::new();
        let (events_tx, events_rx) = watch::channel(0u64);
        let (seen_tx, mut seen_rx) = mpsc::unbounded_channel();

        let attachment = listener.attach_event(events_rx, "test", move |value| {
            let _ = seen_tx.send(value);
        });

        events_tx.send_replace(1);

        let observed = timeout(Duration::from_secs(1), seen_rx.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(observed, 1);

        attachment.detach().await;
    }

    #[tokio::test]
    async fn test_burst_coalesces_to_latest() {
        let listener = Listener::new();
        let (events_tx, events_rx) = watch::channel(0u64);
        let (seen_tx, mut seen_rx) = mpsc::unbounded_channel();

        let attachment = listener.attach_event(events_rx, "test", move |value| {
            let _ = seen_tx.send(value);
        });

        for value in 1..=5 {
            events_tx.send_replace(value);
        }

        // At least one invocation observes the final state; intermediate
        // values may be skipped entirely
        let last = timeout(Duration::from_secs(1), async {
            loop {
                let value = seen_rx.recv().await.unwrap();
                if value == 5 {
                    break value;
                }
            }
        })
        .await
        .unwrap();
        assert_eq!(last, 5);

        attachment.detach().await;
    }

    #[tokio::test]
    async fn test_detach_stops_delivery() {
        let listener = Listener::new();
        let (events_tx, events_rx) = watch::channel(0u64);
        let (seen_tx, mut seen_rx) = mpsc::unbounded_channel();

        let attachment = listener.attach_event(events_rx, "test", move |value| {
            let _ = seen_tx.send(value);
        });

        events_tx.send_replace(1);
        timeout(Duration::from_secs(1), seen_rx.recv())
            .await
            .unwrap()
            .unwrap();

        attachment.detach().await;

        // The delivery task is gone; a further fire reaches nobody
        events_tx.send_replace(2);
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(seen_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_drop_detaches() {
        let listener = Listener::new();
        let (_events_tx, events_rx) = watch::channel(0u64);

        let attachment = listener.attach_event(events_rx, "test", |_| {});
        assert_eq!(listener.attachment_count(), 1);

        drop(attachment);
        assert_eq!(listener.attachment_count(), 0);
    }

    #[tokio::test]
    async fn test_attachment_count() {
        let listener = Listener::new();
        let (_events_tx, events_rx) = watch::channel(0u64);

        let a = listener.attach_event(events_rx.clone(), "a", |_| {});
        let b = listener.attach_event(events_rx, "b", |_| {});
        assert_eq!(listener.attachment_count(), 2);

        a.detach().await;
        assert_eq!(listener.attachment_count(), 1);

        b.detach().await;
        assert_eq!(listener.attachment_count(), 0);
    }
}
