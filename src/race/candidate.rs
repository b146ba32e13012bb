//! Candidate endpoints for a connection race.

use std::fmt;
use std::net::{IpAddr, SocketAddr};

/// Address family selector.
///
/// `Unspec` races whatever the resolver returns, both v4 and v6. The
/// restricted variants drop candidates of the other family before the race
/// starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddressFamily {
    /// Both IPv4 and IPv6 (AF_UNSPEC).
    #[default]
    Unspec,
    /// IPv4 only.
    V4,
    /// IPv6 only.
    V6,
}

impl AddressFamily {
    /// Tests whether an address passes this family filter.
    pub fn matches(&self, ip: IpAddr) -> bool {
        match self {
            AddressFamily::Unspec => true,
            AddressFamily::V4 => ip.is_ipv4(),
            AddressFamily::V6 => ip.is_ipv6(),
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressFamily::Unspec => f.write_str("unspec"),
            AddressFamily::V4 => f.write_str("ipv4"),
            AddressFamily::V6 => f.write_str("ipv6"),
        }
    }
}

/// One fully resolved endpoint eligible for a connection attempt.
///
/// Everything a probe needs is concrete: no DNS lookup happens downstream
/// of a `Candidate`. The source hostname records which name produced this
/// address, which matters when a primary hostname and its IPv6 alias race
/// each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Resolved IP address.
    pub ip: IpAddr,
    /// Target port (1-65535).
    pub port: u16,
    /// The hostname whose resolution produced this candidate.
    pub source_hostname: String,
}

impl Candidate {
    /// Creates a candidate from a resolved address.
    pub fn new(ip: IpAddr, port: u16, source_hostname: impl Into<String>) -> Self {
        Self {
            ip,
            port,
            source_hostname: source_hostname.into(),
        }
    }

    /// The concrete address family of this candidate.
    pub fn family(&self) -> AddressFamily {
        if self.ip.is_ipv6() {
            AddressFamily::V6
        } else {
            AddressFamily::V4
        }
    }

    /// The socket address to connect to.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.ip, self.port)
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source_hostname, self.addr())
    }
}
