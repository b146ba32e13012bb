//! Race every resolved address for a host and report the winner.
//!
//! Usage: cargo run --example race -- <host> <port>

use netrace::race::{ConnectRacer, RaceConfig};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "netrace=info".into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let (host, port) = match (args.next(), args.next().map(|p| p.parse::<u16>())) {
        (Some(host), Some(Ok(port))) => (host, port),
        _ => {
            eprintln!("Usage: race <host> <port>");
            return ExitCode::FAILURE;
        }
    };

    let racer = ConnectRacer::new(RaceConfig::default());
    let mut result = match racer.race(&host, port).await {
        Ok(result) => result,
        Err(e) => {
            eprintln!("race failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("\nSummary of all attempts:");
    for outcome in &result.outcomes {
        println!("  {}", outcome);
    }

    if result.outcomes.is_empty() {
        eprintln!("DNS resolution failed for {}", host);
        return ExitCode::FAILURE;
    }

    match result.winner.as_ref() {
        Some(winner) => {
            println!(
                "\nSelected: {} in {:.2} ms",
                winner.candidate,
                winner.duration_ms()
            );
            // The winning socket is ours now; a real caller would speak its
            // protocol over it.
            drop(result.take_stream());
            ExitCode::SUCCESS
        }
        None => {
            println!("\nNo connection succeeded within the timeout.");
            ExitCode::SUCCESS
        }
    }
}
