//! One-shot endpoint lookup
//!
//! Run with: cargo run --example lookup -- [FLAGS]
//!
//! Seeds a registry with sample endpoints, evaluates one query against it
//! and prints the matches. Each omitted flag is a wildcard.
//!
//! Examples:
//!   cargo run --example lookup                          # match everything
//!   cargo run --example lookup -- --service nav         # all nav endpoints
//!   cargo run --example lookup -- --service nav --event pose

use std::sync::Arc;

use shm_discovery::{EndpointKind, ServiceQuery, ServiceRegistry, ServiceTriple};

/// Parse `--service/--instance/--event` flags into query fields.
fn parse_flags(args: &[String]) -> Result<(Option<String>, Option<String>, Option<String>), String> {
    let mut service = None;
    let mut instance = None;
    let mut event = None;

    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        let target = match flag.as_str() {
            "--service" => &mut service,
            "--instance" => &mut instance,
            "--event" => &mut event,
            other => return Err(format!("Unknown flag: '{}'", other)),
        };

        match iter.next() {
            Some(value) => *target = Some(value.clone()),
            None => return Err(format!("Flag '{}' is missing its value", flag)),
        }
    }

    Ok((service, instance, event))
}

fn print_usage() {
    eprintln!("Usage: lookup [--service NAME] [--instance NAME] [--event NAME]");
    eprintln!();
    eprintln!("Flags:");
    eprintln!("  --service NAME     Match only this service (default: any)");
    eprintln!("  --instance NAME    Match only this instance (default: any)");
    eprintln!("  --event NAME       Match only this event (default: any)");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  lookup                                # match everything");
    eprintln!("  lookup --service nav                  # all nav endpoints");
    eprintln!("  lookup --service nav --event pose");
}

/// Populate the registry the way running endpoint owners would.
async fn seed(registry: &ServiceRegistry) -> shm_discovery::Result<()> {
    let endpoints = [
        ("nav", "front", "pose", EndpointKind::Publisher),
        ("nav", "front", "pose", EndpointKind::Subscriber),
        ("nav", "rear", "twist", EndpointKind::Publisher),
        ("lidar", "top", "scan", EndpointKind::Publisher),
        ("camera", "left", "frame", EndpointKind::Publisher),
        ("camera", "right", "frame", EndpointKind::Publisher),
        ("diagnostics", "main", "status", EndpointKind::Server),
        ("diagnostics", "main", "status", EndpointKind::Client),
    ];

    for (service, instance, event, kind) in endpoints {
        let triple = ServiceTriple::new(service, instance, event)?;
        registry.insert(triple, kind).await?;
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return Ok(());
    }

    let (service, instance, event) = match parse_flags(&args) {
        Ok(fields) => fields,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let registry = Arc::new(ServiceRegistry::new());
    seed(&registry).await?;

    let query = ServiceQuery::new(service, instance, event)?;
    let matches = registry.query(&query).await;

    println!("Query {} -> {} match(es)", query, matches.len());
    for entry in &matches {
        println!("  {}", entry);
    }

    Ok(())
}
