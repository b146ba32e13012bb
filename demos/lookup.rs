//! Show the candidates a race would start from, without connecting.
//!
//! Usage: cargo run --example lookup -- <host> <port>

use netrace::dns::{AliasTable, GaiResolver};
use netrace::race::{AddressFamily, CandidateResolver, DEFAULT_DNS_TIMEOUT};
use std::process::ExitCode;
use std::sync::Arc;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "netrace=debug".into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let (host, port) = match (args.next(), args.next().map(|p| p.parse::<u16>())) {
        (Some(host), Some(Ok(port))) => (host, port),
        _ => {
            eprintln!("Usage: lookup <host> <port>");
            return ExitCode::FAILURE;
        }
    };

    let resolver =
        CandidateResolver::new(Arc::new(GaiResolver::new()), AliasTable::default());
    let candidates = resolver
        .resolve(&host, port, AddressFamily::Unspec, DEFAULT_DNS_TIMEOUT)
        .await;

    if candidates.is_empty() {
        eprintln!("No addresses resolved for {}", host);
        return ExitCode::FAILURE;
    }

    println!("{} candidate(s):", candidates.len());
    for candidate in &candidates {
        println!("  [{}] {}", candidate.family(), candidate);
    }
    ExitCode::SUCCESS
}
