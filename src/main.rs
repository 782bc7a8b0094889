//! Runs an adapted connection for every component kind, then waits for Enter.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use neural_adapter::config::PacingConfig;
use neural_adapter::connection::{connect_all, render_report, ThreadPacer};
use neural_adapter::core::ComponentKind;

/// Adapter pattern walkthrough over a simulated neural interface
#[derive(Parser, Debug)]
#[command(name = "neural-adapter")]
#[command(about = "Connect to each simulated neural component through an adapter")]
struct Args {
    /// Multiplier applied to every pause (1.0 = real time, 0 = no pauses)
    #[arg(long, env = "NEURAL_ADAPTER_PACE", default_value = "1.0")]
    pace: String,

    /// Exit without waiting for Enter
    #[arg(long)]
    no_wait: bool,

    /// Print the connection records as JSON after the run
    #[arg(long)]
    report: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let pacing = PacingConfig::from_pace(&args.pace).unwrap_or_else(|err| {
        warn!(%err, "falling back to real-time pacing");
        PacingConfig::default()
    });
    info!(pace = %args.pace, total_ms = pacing.total().as_millis() as u64, "pacing configured");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let records = connect_all(ComponentKind::ALL, pacing, &mut out, &mut ThreadPacer)?;

    if args.report {
        writeln!(out, "{}", render_report(&records)?)?;
    }

    if !args.no_wait {
        write!(out, "Press Enter to exit...")?;
        out.flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
    }

    Ok(())
}
