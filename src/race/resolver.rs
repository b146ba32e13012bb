//! Fan-out resolution of hostnames into race candidates.

use crate::base::neterror::NetError;
use crate::dns::{AliasTable, Name, Resolve, SocketAddrs};
use crate::race::candidate::{AddressFamily, Candidate};
use std::sync::Arc;
use std::time::Duration;

/// Turns a hostname (plus its IPv6 alias, when one is configured) into a
/// flat list of [`Candidate`]s.
///
/// Each hostname's resolution is independently bounded by the DNS timeout;
/// a hostname that fails or times out contributes zero candidates and never
/// aborts the others. Duplicate IPs across hostnames are kept — each races
/// independently, tagged with the hostname that produced it.
pub struct CandidateResolver {
    inner: Arc<dyn Resolve>,
    aliases: AliasTable,
}

impl CandidateResolver {
    /// Creates a resolver over the given DNS backend and alias table.
    pub fn new(inner: Arc<dyn Resolve>, aliases: AliasTable) -> Self {
        Self { inner, aliases }
    }

    /// Resolves `host` (and its alias, if any) into candidates for `port`,
    /// filtered by `family`.
    ///
    /// Total resolution failure is not an error: the returned list is simply
    /// empty, and the coordinator turns that into an immediate no-winner
    /// result.
    pub async fn resolve(
        &self,
        host: &str,
        port: u16,
        family: AddressFamily,
        dns_timeout: Duration,
    ) -> Vec<Candidate> {
        // IP literals skip DNS entirely.
        if let Some(addrs) = SocketAddrs::try_parse(host, port) {
            return addrs
                .filter(|a| family.matches(a.ip()))
                .map(|a| Candidate::new(a.ip(), port, host))
                .collect();
        }

        let mut hostnames = vec![host.to_string()];
        if let Some(alias) = self.aliases.lookup(host) {
            tracing::debug!(host = %host, alias = %alias, "racing IPv6 alias alongside primary");
            hostnames.push(alias.to_string());
        }

        let lookups = hostnames
            .iter()
            .map(|h| self.resolve_one(h, port, family, dns_timeout));
        let resolved = futures::future::join_all(lookups).await;

        let candidates: Vec<Candidate> = resolved.into_iter().flatten().collect();
        if candidates.is_empty() {
            tracing::error!(hosts = ?hostnames, "no addresses resolved");
        }
        candidates
    }

    async fn resolve_one(
        &self,
        hostname: &str,
        port: u16,
        family: AddressFamily,
        dns_timeout: Duration,
    ) -> Vec<Candidate> {
        let lookup = self.inner.resolve(Name::new(hostname));
        match tokio::time::timeout(dns_timeout, lookup).await {
            Err(_) => {
                let e = NetError::NameResolutionTimedOut {
                    domain: hostname.to_string(),
                };
                tracing::error!(host = %hostname, timeout = ?dns_timeout, error = %e, "DNS resolution timed out");
                Vec::new()
            }
            Ok(Err(e)) => {
                tracing::error!(host = %hostname, error = %e, "DNS resolution failed");
                Vec::new()
            }
            Ok(Ok(addrs)) => addrs
                .filter(|a| family.matches(a.ip()))
                .map(|a| Candidate::new(a.ip(), port, hostname))
                .collect(),
        }
    }
}
