//! Live endpoint monitor
//!
//! Run with: cargo run --example monitor
//!
//! Subscribes a callback to registry changes and prints the live endpoint
//! set every time it changes, while a background task simulates endpoints
//! joining and leaving. Press Ctrl+C to stop.
//!
//! Rapid changes may be coalesced: the callback always observes the latest
//! state, not necessarily every intermediate one.

use std::sync::Arc;
use std::time::Duration;

use shm_discovery::{
    DiscoveryClient, EndpointKind, Listener, ServiceQuery, ServiceRegistry, ServiceTriple,
};

/// Simulate endpoint owners joining and leaving.
///
/// Every endpoint owner registers on construction and deregisters on
/// destruction; here one task plays all of them in a loop.
async fn churn(registry: Arc<ServiceRegistry>) {
    let endpoints = [
        ("nav", "front", "pose", EndpointKind::Publisher),
        ("nav", "rear", "twist", EndpointKind::Publisher),
        ("lidar", "top", "scan", EndpointKind::Publisher),
        ("camera", "left", "frame", EndpointKind::Subscriber),
    ];

    loop {
        for (service, instance, event, kind) in endpoints {
            let triple = match ServiceTriple::new(service, instance, event) {
                Ok(triple) => triple,
                Err(e) => {
                    eprintln!("Bad endpoint name: {}", e);
                    return;
                }
            };

            // Duplicate joins and missing leaves are expected under racing
            // lifecycles; the registry reports them and moves on
            if let Err(e) = registry.insert(triple.clone(), kind).await {
                tracing::debug!(error = %e, "Join skipped");
            }
            tokio::time::sleep(Duration::from_millis(700)).await;

            if let Err(e) = registry.remove(&triple, kind).await {
                tracing::debug!(error = %e, "Leave skipped");
            }
            tokio::time::sleep(Duration::from_millis(300)).await;
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("shm_discovery=info".parse()?),
        )
        .init();

    let registry = Arc::new(ServiceRegistry::new());
    let listener = Arc::new(Listener::new());
    let mut client = DiscoveryClient::new(Arc::clone(&registry), listener);

    client.subscribe(|registry| {
        let registry = Arc::clone(registry);
        tokio::spawn(async move {
            let entries = registry.query(&ServiceQuery::any()).await;
            let counter = registry.change_counter().await;

            println!("--- change #{}: {} live endpoint(s)", counter, entries.len());
            for entry in &entries {
                println!("    {}", entry);
            }
        });
    })?;

    println!("Monitoring endpoint changes, press Ctrl+C to stop");

    let churn_handle = tokio::spawn(churn(Arc::clone(&registry)));

    tokio::signal::ctrl_c().await?;
    println!("\nShutting down...");

    churn_handle.abort();
    client.unsubscribe().await;

    Ok(())
}
