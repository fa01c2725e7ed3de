//! Discovery client implementation

use std::sync::Arc;

use crate::event::{Attachment, Listener};
use crate::ident::ServiceQuery;
use crate::registry::{RegistryEntry, ServiceRegistry};

use super::error::DiscoveryError;
use super::DiscoveryEvent;

/// Owner-held handle for discovery queries and change subscription
///
/// Holds a shared reference to the registry and at most one callback bound
/// to one listener attachment. `subscribe`/`unsubscribe` take `&mut self`,
/// so a single owner drives the subscription state; the registry itself may
/// be mutated concurrently by anyone.
///
/// Dropping the client releases an outstanding subscription, so owners that
/// forget to [`unsubscribe`](DiscoveryClient::unsubscribe) still detach;
/// explicit `unsubscribe` additionally waits until delivery has stopped.
pub struct DiscoveryClient {
    registry: Arc<ServiceRegistry>,
    listener: Arc<Listener>,
    attachment: Option<Attachment>,
}

impl DiscoveryClient {
    /// Create a new client over a shared registry and listener
    pub fn new(registry: Arc<ServiceRegistry>, listener: Arc<Listener>) -> Self {
        Self {
            registry,
            listener,
            attachment: None,
        }
    }

    /// Get the registry this client discovers from
    pub fn registry(&self) -> &Arc<ServiceRegistry> {
        &self.registry
    }

    /// Find all live endpoints matching a query
    ///
    /// Delegates to [`ServiceRegistry::query`]: no caching, the result is
    /// current at call time.
    pub async fn find(&self, query: &ServiceQuery) -> Vec<RegistryEntry> {
        self.registry.query(query).await
    }

    /// Subscribe a callback to registry changes
    ///
    /// Fails with `AlreadySubscribed` if a callback is attached; the
    /// existing subscription stays live. On success every subsequent
    /// successful mutation triggers at least one `callback(&registry)` on
    /// the listener's delivery task; bursts of mutations may collapse into
    /// a single invocation. The callback must not block indefinitely.
    pub fn subscribe<F>(&mut self, callback: F) -> Result<(), DiscoveryError>
    where
        F: Fn(&Arc<ServiceRegistry>) + Send + 'static,
    {
        if self.attachment.is_some() {
            return Err(DiscoveryError::AlreadySubscribed);
        }

        let registry = Arc::clone(&self.registry);
        let attachment = self.listener.attach_event(
            self.registry.watch_changes(),
            DiscoveryEvent::RegistryChanged.tag(),
            move |_| callback(&registry),
        );
        self.attachment = Some(attachment);

        tracing::debug!("Discovery callback subscribed");
        Ok(())
    }

    /// Unsubscribe the callback
    ///
    /// Idempotent: detaches and clears the callback if one is attached,
    /// no-op otherwise. Acts as a barrier: after it returns no new delivery
    /// for this client starts, though an invocation already running on the
    /// delivery task completes.
    pub async fn unsubscribe(&mut self) {
        if let Some(attachment) = self.attachment.take() {
            attachment.detach().await;
            tracing::debug!("Discovery callback unsubscribed");
        }
    }

    /// Check whether a callback is currently subscribed
    pub fn is_subscribed(&self) -> bool {
        self.attachment.is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::sync::mpsc;
    use tokio::time::timeout;

    use crate::ident::ServiceTriple;
    use crate::registry::EndpointKind;

    use super::*;

    fn client() -> DiscoveryClient {
        DiscoveryClient::new(
            Arc::new(ServiceRegistry::new()),
            Arc::new(Listener::new()),
        )
    }

    fn triple(service: &str, instance: &str, event: &str) -> ServiceTriple {
        ServiceTriple::new(service, instance, event).unwrap()
    }

    #[tokio::test]
    async fn test_find_is_current() {
        let client = client();
        let pose = triple("nav", "front", "pose");

        assert!(client.find(&ServiceQuery::any()).await.is_empty());

        client
            .registry()
            .insert(pose.clone(), EndpointKind::Publisher)
            .await
            .unwrap();

        let found = client.find(&ServiceQuery::any()).await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].triple(), &pose);
    }

    #[tokio::test]
    async fn test_subscribe_delivers_change() {
        let mut client = client();
        let (seen_tx, mut seen_rx) = mpsc::unbounded_channel();

        client
            .subscribe(move |_registry| {
                let _ = seen_tx.send(());
            })
            .unwrap();

        client
            .registry()
            .insert(triple("nav", "front", "pose"), EndpointKind::Publisher)
            .await
            .unwrap();

        timeout(Duration::from_secs(1), seen_rx.recv())
            .await
            .unwrap()
            .unwrap();

        client.unsubscribe().await;
    }

    #[tokio::test]
    async fn test_callback_observes_applied_state() {
        let mut client = client();
        let (seen_tx, mut seen_rx) = mpsc::unbounded_channel();

        client
            .subscribe(move |registry| {
                let registry = Arc::clone(registry);
                let seen_tx = seen_tx.clone();
                tokio::spawn(async move {
                    let _ = seen_tx.send(registry.query(&ServiceQuery::any()).await);
                });
            })
            .unwrap();

        let entry = client
            .registry()
            .insert(triple("nav", "front", "pose"), EndpointKind::Publisher)
            .await
            .unwrap();

        let snapshot = timeout(Duration::from_secs(1), seen_rx.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(snapshot, vec![entry]);

        client.unsubscribe().await;
    }

    #[tokio::test]
    async fn test_second_subscribe_rejected() {
        let mut client = client();
        let (seen_tx, mut seen_rx) = mpsc::unbounded_channel();

        client
            .subscribe(move |_registry| {
                let _ = seen_tx.send(());
            })
            .unwrap();

        let result = client.subscribe(|_registry| {});
        assert_eq!(result, Err(DiscoveryError::AlreadySubscribed));

        // The first subscription stays live
        assert!(client.is_subscribed());
        client
            .registry()
            .insert(triple("nav", "front", "pose"), EndpointKind::Publisher)
            .await
            .unwrap();
        timeout(Duration::from_secs(1), seen_rx.recv())
            .await
            .unwrap()
            .unwrap();

        client.unsubscribe().await;
    }

    #[tokio::test]
    async fn test_unsubscribe_idempotent() {
        let mut client = client();

        client.subscribe(|_registry| {}).unwrap();
        assert!(client.is_subscribed());

        client.unsubscribe().await;
        assert!(!client.is_subscribed());

        // No-op when already Idle
        client.unsubscribe().await;
        assert!(!client.is_subscribed());

        // Subscribing again after unsubscribe works
        client.subscribe(|_registry| {}).unwrap();
        assert!(client.is_subscribed());
        client.unsubscribe().await;
    }

    #[tokio::test]
    async fn test_no_delivery_after_unsubscribe() {
        let mut client = client();
        let (seen_tx, mut seen_rx) = mpsc::unbounded_channel();

        client
            .subscribe(move |_registry| {
                let _ = seen_tx.send(());
            })
            .unwrap();

        let pose = triple("nav", "front", "pose");
        client
            .registry()
            .insert(pose.clone(), EndpointKind::Publisher)
            .await
            .unwrap();
        timeout(Duration::from_secs(1), seen_rx.recv())
            .await
            .unwrap()
            .unwrap();

        client.unsubscribe().await;

        // Delivery has stopped; this change reaches nobody
        client
            .registry()
            .remove(&pose, EndpointKind::Publisher)
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(seen_rx.try_recv().is_err());
    }
}
