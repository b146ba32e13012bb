//! System DNS resolver using getaddrinfo.
//!
//! Resolution goes through the operating system's `getaddrinfo`, executed in
//! a blocking thread pool so the async runtime never stalls on it. This is
//! the default backend: it respects /etc/resolv.conf, /etc/hosts and
//! whatever else the system resolver is configured with.

use super::{Addrs, Name, Resolve, Resolving};
use crate::base::context::IoResultExt;
use crate::base::neterror::NetError;
use std::{
    io,
    net::{Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6, ToSocketAddrs},
};

/// System DNS resolver using `getaddrinfo` in a thread pool.
///
/// Wraps the standard library's `ToSocketAddrs` and runs it under
/// `tokio::task::spawn_blocking`. Each resolution spawns a blocking task;
/// for a connection racer that resolves at most a couple of hostnames per
/// race this is entirely adequate. `HickoryResolver` is the fully async
/// alternative.
#[derive(Clone, Debug, Default)]
pub struct GaiResolver;

impl GaiResolver {
    /// Creates a new `GaiResolver`.
    pub fn new() -> Self {
        Self
    }
}

impl Resolve for GaiResolver {
    fn resolve(&self, name: Name) -> Resolving {
        Box::pin(async move {
            let host = name.as_str().to_string();
            let domain = host.clone();

            let result = tokio::task::spawn_blocking(move || {
                tracing::debug!(host = %host, "resolving via getaddrinfo");
                (host.as_str(), 0u16)
                    .to_socket_addrs()
                    .map(|iter| iter.collect::<Vec<_>>())
            })
            .await;

            // Handle task join error (cancellation, panic)
            let addrs = result
                .map_err(|e| {
                    tracing::error!(error = %e, "DNS resolution task failed");
                    NetError::NameNotResolved
                })?
                .map_err(|e| {
                    tracing::debug!(domain = %domain, error = %e, "DNS resolution failed");
                    e
                })
                .dns_context(&domain)?;

            if addrs.is_empty() {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    "No addresses returned by getaddrinfo",
                ))
                .dns_context(&domain);
            }

            tracing::debug!(domain = %domain, count = addrs.len(), "DNS resolution complete");
            Ok(Box::new(addrs.into_iter()) as Addrs)
        })
    }
}

/// Utility for parsing IP address strings directly.
///
/// Bypasses DNS resolution if the host is already an IP literal.
pub struct SocketAddrs {
    addrs: Vec<SocketAddr>,
}

impl SocketAddrs {
    /// Creates a new `SocketAddrs` from a vector.
    pub fn new(addrs: Vec<SocketAddr>) -> Self {
        Self { addrs }
    }

    /// Attempts to parse a host string as an IP address.
    ///
    /// Returns `Some` if the host is a valid IPv4 or IPv6 address,
    /// `None` if it's a hostname that requires DNS resolution.
    pub fn try_parse(host: &str, port: u16) -> Option<Self> {
        // Try IPv4
        if let Ok(addr) = host.parse::<Ipv4Addr>() {
            return Some(Self {
                addrs: vec![SocketAddr::V4(SocketAddrV4::new(addr, port))],
            });
        }

        // Try IPv6
        if let Ok(addr) = host.parse::<Ipv6Addr>() {
            return Some(Self {
                addrs: vec![SocketAddr::V6(SocketAddrV6::new(addr, port, 0, 0))],
            });
        }

        None
    }

    /// Returns true if no addresses are available.
    pub fn is_empty(&self) -> bool {
        self.addrs.is_empty()
    }

    /// Returns the number of addresses.
    pub fn len(&self) -> usize {
        self.addrs.len()
    }
}

impl Iterator for SocketAddrs {
    type Item = SocketAddr;

    fn next(&mut self) -> Option<Self::Item> {
        if self.addrs.is_empty() {
            None
        } else {
            Some(self.addrs.remove(0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};

    #[test]
    fn test_socket_addrs_try_parse_ipv4() {
        let result = SocketAddrs::try_parse("127.0.0.1", 8080);
        assert!(result.is_some());

        let addrs = result.unwrap();
        assert_eq!(addrs.len(), 1);
        assert_eq!(
            addrs.addrs[0],
            SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 8080)
        );
    }

    #[test]
    fn test_socket_addrs_try_parse_ipv6() {
        let result = SocketAddrs::try_parse("::1", 443);
        assert!(result.is_some());

        let addrs = result.unwrap();
        assert_eq!(addrs.len(), 1);
        assert!(addrs.addrs[0].is_ipv6());
    }

    #[test]
    fn test_socket_addrs_try_parse_hostname() {
        let result = SocketAddrs::try_parse("example.com", 80);
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_gai_resolver_localhost() {
        let resolver = GaiResolver::new();
        let result = resolver.resolve(Name::new("localhost")).await;

        // localhost should always resolve
        assert!(result.is_ok());
        let addrs: Vec<_> = result.unwrap().collect();
        assert!(!addrs.is_empty());
    }
}
