//! # netrace
//!
//! A happy-eyeballs style TCP connection racer.
//!
//! Given a hostname and port, `netrace` resolves every candidate address —
//! across address families, and across alternate hostnames for providers
//! that publish their IPv6 service under a separate name — attempts TCP
//! connections to all of them in parallel, and returns the first attempt
//! that completes within a bounded time budget, cancelling the rest. When a
//! destination is reachable over several paths and some of them are slow,
//! blackholed or broken, the caller only ever pays for the fastest one.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use netrace::race::{ConnectRacer, RaceConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let racer = ConnectRacer::new(RaceConfig::default());
//!     let mut result = racer.race("news.newshosting.com", 563).await.unwrap();
//!     match result.take_stream() {
//!         Some(stream) => println!("connected to {}", stream.peer_addr().unwrap()),
//!         None => println!("no connection succeeded within the timeout"),
//!     }
//! }
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Core types and error definitions
//! - [`dns`] - Pluggable DNS resolution and the IPv6 alias table
//! - [`race`] - Candidates, probes and the race coordinator
//!
//! ## Semantics
//!
//! - All resolved addresses are raced immediately and in parallel; there is
//!   no RFC 8305 staggered launch and no address sorting by preference.
//! - The winner is the first success by completion order within the budget;
//!   a later success never displaces it, even with a smaller duration.
//! - Expected network conditions (DNS failure, refused, unreachable,
//!   deadline exhaustion) are data in the result, never hard errors.
//! - Only the winning socket outlives a race; every other socket is closed
//!   by the time the result is returned, or shortly after cancellation.

pub mod base;
pub mod dns;
pub mod race;
