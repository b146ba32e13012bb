//! Async DNS resolver using hickory-dns.
//!
//! Fully async alternative to [`GaiResolver`]: no blocking threads, and the
//! lookup strategy is forced to dual-stack so a race always sees both the A
//! and AAAA records a host advertises.
//!
//! [`GaiResolver`]: super::GaiResolver

use super::{Addrs, Name, Resolve, Resolving};
use crate::base::neterror::NetError;
use hickory_resolver::{
    config::{LookupIpStrategy, ResolverConfig},
    name_server::TokioConnectionProvider,
    TokioResolver,
};
use std::{net::SocketAddr, sync::LazyLock};

/// Async DNS resolver backed by hickory-dns.
///
/// The underlying resolver is lazily initialized on first query and shared
/// across all instances via a static `LazyLock`. It reads the system DNS
/// configuration where possible and falls back to defaults otherwise.
#[derive(Debug, Clone)]
pub struct HickoryResolver {
    resolver: &'static LazyLock<TokioResolver>,
}

impl HickoryResolver {
    /// Creates a new `HickoryResolver`.
    pub fn new() -> Self {
        static RESOLVER: LazyLock<TokioResolver> = LazyLock::new(|| {
            let mut builder = match TokioResolver::builder_tokio() {
                Ok(builder) => {
                    tracing::debug!("Using system DNS configuration");
                    builder
                }
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        "Failed to read system DNS config, using defaults"
                    );
                    TokioResolver::builder_with_config(
                        ResolverConfig::default(),
                        TokioConnectionProvider::default(),
                    )
                }
            };

            // Both families, so the race has something to race
            builder.options_mut().ip_strategy = LookupIpStrategy::Ipv4AndIpv6;

            builder.build()
        });

        Self {
            resolver: &RESOLVER,
        }
    }
}

impl Default for HickoryResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolve for HickoryResolver {
    fn resolve(&self, name: Name) -> Resolving {
        let resolver = self.clone();
        Box::pin(async move {
            let domain = name.as_str();
            tracing::debug!(domain = %domain, "resolving via hickory-dns");

            let lookup = resolver.resolver.lookup_ip(domain).await.map_err(|e| {
                tracing::debug!(domain = %domain, error = %e, "hickory-dns lookup failed");
                NetError::dns_failed(
                    domain,
                    std::io::Error::new(std::io::ErrorKind::NotFound, e.to_string()),
                )
            })?;

            let addrs: Vec<SocketAddr> = lookup.iter().map(|ip| SocketAddr::new(ip, 0)).collect();

            if addrs.is_empty() {
                return Err(NetError::dns_failed(
                    domain,
                    std::io::Error::new(std::io::ErrorKind::NotFound, "No addresses returned"),
                ));
            }

            tracing::debug!(domain = %domain, count = addrs.len(), "hickory-dns resolution complete");
            Ok(Box::new(addrs.into_iter()) as Addrs)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hickory_resolver_invalid_domain() {
        let resolver = HickoryResolver::new();
        let result = resolver
            .resolve(Name::new("this-domain-definitely-does-not-exist.invalid"))
            .await;

        assert!(result.is_err());
        let err = result.err().expect("Should have error");
        match err {
            NetError::NameNotResolvedFor { domain, .. } => {
                assert_eq!(domain, "this-domain-definitely-does-not-exist.invalid");
            }
            _ => panic!("Unexpected error type"),
        }
    }

    #[test]
    fn test_hickory_resolver_is_clone() {
        let r1 = HickoryResolver::new();
        let r2 = r1.clone();
        // Both should point to the same static resolver
        assert!(std::ptr::eq(r1.resolver, r2.resolver));
    }
}
