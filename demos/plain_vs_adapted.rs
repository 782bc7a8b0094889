//! Plain vs Adapted Connectors
//!
//! This example runs the same client code against both connector variants.
//!
//! Key concepts:
//! - The target interface only knows the handshake
//! - The adapter reuses that handshake and adds legacy readings
//! - The variant is chosen explicitly, not through inheritance
//! - Instant pacing keeps the run short
//!
//! Run with: cargo run --example plain_vs_adapted

use neural_adapter::config::PacingConfig;
use neural_adapter::connection::{Adapter, Connector, TargetInterface, ThreadPacer};
use neural_adapter::core::ComponentKind;
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let pacing = PacingConfig::instant();
    let connectors = [
        Connector::Plain(TargetInterface::new(pacing)),
        Connector::Adapted(Adapter::with_pacing(ComponentKind::Temporal, pacing)),
    ];

    let mut out = io::stdout();
    for connector in &connectors {
        let title = match connector {
            Connector::Plain(_) => "Plain target".to_string(),
            Connector::Adapted(adapter) => format!("Adapter for {}", adapter.kind()),
        };
        println!("=== {} ===\n", title);
        match connector.connect(&mut out, &mut ThreadPacer)? {
            Some(record) => {
                println!("\n  Record {}:", record.id);
                println!("  Header: {}", record.message_header);
                println!("  Phases: {}", record.phases.transitions().len());
            }
            None => println!("\n  Plain target produced no record"),
        }
        println!();
    }

    println!("Key Takeaways:");
    println!("- Clients call connect() the same way on both variants");
    println!("- Only the adapter knows about the legacy lookup tables");
    println!("- Pacing is injected, so nothing here has to sleep");

    println!("\n=== Example Complete ===");
    Ok(())
}
