//! DNS Resolution Module
//!
//! Provides pluggable DNS resolution with support for:
//! - System resolver (getaddrinfo via thread pool)
//! - Async hickory-dns resolver
//! - Hostname-to-IP override mechanism
//! - IPv6 alternate-hostname aliases
//!
//! # Architecture
//!
//! The [`Resolve`] trait is the core abstraction that allows different
//! resolver implementations to be used interchangeably; the connection
//! racer only ever talks to the trait. [`AliasTable`] is static
//! configuration: hostnames whose IPv6 service is published under a
//! separate name, raced alongside the primary.

mod aliases;
mod gai;
mod hickory;
mod resolve;

pub use aliases::AliasTable;
pub use gai::{GaiResolver, SocketAddrs};
pub use hickory::HickoryResolver;
pub use resolve::{Addrs, DnsResolverWithOverrides, Name, Resolve, Resolving};
