//! Connection racing.
//!
//! The three moving parts, leaves first:
//!
//! - [`CandidateResolver`] fans one hostname (plus its IPv6 alias, when one
//!   is configured) out into concrete [`Candidate`] endpoints, each DNS
//!   lookup under its own budget.
//! - [`TcpProber`] attempts a single TCP connect against one candidate with
//!   a deadline and a cancellation token, producing an [`AttemptOutcome`].
//! - [`ConnectRacer`] launches every probe concurrently, picks the first
//!   success that lands within the budget, cancels the rest and hands the
//!   winning socket to the caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use netrace::race::{ConnectRacer, RaceConfig};
//!
//! let racer = ConnectRacer::new(RaceConfig::default());
//! let mut result = racer.race("news.eweka.nl", 563).await?;
//! if let Some(winner) = &result.winner {
//!     println!("connected: {}", winner);
//!     let stream = result.take_stream().unwrap();
//!     // speak your protocol over `stream`
//! }
//! ```

mod candidate;
mod coordinator;
mod outcome;
mod probe;
mod resolver;

pub use candidate::{AddressFamily, Candidate};
pub use coordinator::{
    ConnectRacer, RaceConfig, DEFAULT_CONNECT_TIMEOUT, DEFAULT_DNS_TIMEOUT,
};
pub use outcome::{AttemptOutcome, RaceResult};
pub use probe::{CancelToken, Probe, ProbeReport, Probing, TcpProber};
pub use resolver::CandidateResolver;
