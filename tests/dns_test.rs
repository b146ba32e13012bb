//! DNS Module Tests
//!
//! Covers:
//! - `Name` struct
//! - `DnsResolverWithOverrides` using a MockResolver
//! - `GaiResolver` (Basic System Resolver)
//! - `AliasTable` wiring into candidate resolution

use netrace::dns::{
    Addrs, AliasTable, DnsResolverWithOverrides, GaiResolver, Name, Resolve, Resolving,
};
use netrace::race::{AddressFamily, CandidateResolver};

use std::borrow::Cow;
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

struct MockResolver {
    response: Vec<SocketAddr>,
}

impl Resolve for MockResolver {
    fn resolve(&self, _name: Name) -> Resolving {
        let addrs = self.response.clone();
        Box::pin(async move { Ok(Box::new(addrs.into_iter()) as Addrs) })
    }
}

#[test]
fn test_name_api() {
    let name = Name::new("example.com");
    assert_eq!(name.as_str(), "example.com");
    assert_eq!(name.to_string(), "example.com");
}

#[tokio::test]
async fn test_dns_overrides() {
    let mock = Arc::new(MockResolver {
        response: vec![SocketAddr::new(IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8)), 0)],
    });

    let mut overrides = HashMap::new();
    overrides.insert(
        Cow::Borrowed("local.override"),
        vec![SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 0)],
    );

    let resolver = DnsResolverWithOverrides::new(mock, overrides);
    assert_eq!(resolver.override_count(), 1);

    // Override hit
    let addrs: Vec<_> = resolver
        .resolve(Name::new("local.override"))
        .await
        .unwrap()
        .collect();

    assert_eq!(addrs.len(), 1);
    assert_eq!(addrs[0].ip(), IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)));

    // Passthrough (miss)
    let addrs: Vec<_> = resolver
        .resolve(Name::new("other.com"))
        .await
        .unwrap()
        .collect();

    assert_eq!(addrs.len(), 1);
    assert_eq!(addrs[0].ip(), IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8)));
}

#[tokio::test]
async fn test_gai_resolver_localhost() {
    let resolver = GaiResolver::new();
    // localhost should always resolve, usually to 127.0.0.1 or ::1
    let result = resolver.resolve(Name::new("localhost")).await;

    // Depending on system config, this might fail in some CI envs,
    // but usually localhost is standard.
    if let Ok(addrs) = result {
        let list: Vec<_> = addrs.collect();
        assert!(!list.is_empty());
    } else {
        eprintln!("warning: localhost did not resolve in this environment");
    }
}

#[test]
fn test_builtin_alias_table() {
    let table = AliasTable::default();
    assert!(!table.is_empty());
    assert_eq!(table.lookup("news.eweka.nl"), Some("news6.eweka.nl"));
    assert_eq!(table.lookup("no-alias.example"), None);
}

#[tokio::test]
async fn test_candidate_resolution_through_overrides() {
    // Overrides double as a hermetic DNS backend for candidate resolution.
    let mock = Arc::new(MockResolver { response: vec![] });

    let mut overrides = HashMap::new();
    overrides.insert(
        Cow::Borrowed("news.example"),
        vec![SocketAddr::new(IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1)), 0)],
    );
    overrides.insert(
        Cow::Borrowed("news6.example"),
        vec![SocketAddr::new("2001:db8::7".parse().unwrap(), 0)],
    );

    let dns = Arc::new(DnsResolverWithOverrides::new(mock, overrides));
    let mut aliases = AliasTable::empty();
    aliases.insert("news.example", "news6.example");

    let resolver = CandidateResolver::new(dns, aliases);
    let candidates = resolver
        .resolve(
            "news.example",
            563,
            AddressFamily::Unspec,
            Duration::from_secs(4),
        )
        .await;

    assert_eq!(candidates.len(), 2);
    assert!(candidates.iter().all(|c| c.port == 563));
    assert!(candidates
        .iter()
        .any(|c| c.source_hostname == "news6.example" && c.ip.is_ipv6()));
}
