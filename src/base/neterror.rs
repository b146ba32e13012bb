use std::io;
use std::sync::Arc;
use thiserror::Error;

/// Network error codes for connection racing.
///
/// The numeric codes follow Chromium's `net_error_list.h` so that log output
/// lines up with what browser tooling reports for the same failure. Only the
/// connection and resolution subset this crate can actually produce is kept.
#[derive(Debug, Error, Clone)]
pub enum NetError {
    // Connection Errors
    #[error("Connection closed (TCP FIN)")]
    ConnectionClosed,
    #[error("Connection reset (TCP RST)")]
    ConnectionReset,
    #[error("Connection refused")]
    ConnectionRefused,
    #[error("Connection aborted")]
    ConnectionAborted,
    #[error("Connection failed")]
    ConnectionFailed,
    #[error("Connection to {host}:{port} failed: {source}")]
    ConnectionFailedTo {
        host: String,
        port: u16,
        source: Arc<io::Error>,
    },
    #[error("Connection timed out")]
    ConnectionTimedOut,
    #[error("Internet disconnected")]
    InternetDisconnected,
    #[error("Address invalid")]
    AddressInvalid,
    #[error("Address unreachable")]
    AddressUnreachable,

    // Resolution Errors
    #[error("Name not resolved")]
    NameNotResolved,
    #[error("DNS resolution of {domain} failed: {source}")]
    NameNotResolvedFor {
        domain: String,
        source: Arc<io::Error>,
    },
    #[error("DNS resolution of {domain} timed out")]
    NameResolutionTimedOut { domain: String },

    // Racing Errors
    #[error("Attempt cancelled: another candidate won the race")]
    RaceCancelled,

    #[error("Unknown error: {0}")]
    Unknown(i32),
}

impl NetError {
    pub fn as_i32(&self) -> i32 {
        match self {
            NetError::ConnectionClosed => -100,
            NetError::ConnectionReset => -101,
            NetError::ConnectionRefused => -102,
            NetError::ConnectionAborted => -103,
            NetError::ConnectionFailed => -104,
            NetError::ConnectionFailedTo { .. } => -104,
            NetError::NameNotResolved => -105,
            NetError::NameNotResolvedFor { .. } => -105,
            NetError::InternetDisconnected => -106,
            NetError::AddressInvalid => -108,
            NetError::AddressUnreachable => -109,
            NetError::ConnectionTimedOut => -118,
            // Custom codes outside Chromium's allocated ranges
            NetError::NameResolutionTimedOut { .. } => -911,
            NetError::RaceCancelled => -910,
            NetError::Unknown(code) => *code,
        }
    }

    /// Wraps an IO error from a connect attempt with the target endpoint.
    pub fn connection_failed_to(host: &str, port: u16, source: io::Error) -> Self {
        NetError::ConnectionFailedTo {
            host: host.to_string(),
            port,
            source: Arc::new(source),
        }
    }

    /// Wraps an IO error from DNS resolution with the domain being resolved.
    pub fn dns_failed(domain: &str, source: io::Error) -> Self {
        NetError::NameNotResolvedFor {
            domain: domain.to_string(),
            source: Arc::new(source),
        }
    }

    /// Maps an OS-level connect error onto the matching net error code.
    ///
    /// Anything without a dedicated code collapses into `ConnectionFailed`.
    pub fn from_connect_error(e: &io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::ConnectionRefused => NetError::ConnectionRefused,
            io::ErrorKind::ConnectionReset => NetError::ConnectionReset,
            io::ErrorKind::ConnectionAborted => NetError::ConnectionAborted,
            io::ErrorKind::TimedOut => NetError::ConnectionTimedOut,
            io::ErrorKind::AddrNotAvailable => NetError::AddressInvalid,
            _ => NetError::ConnectionFailed,
        }
    }

    /// True for errors representing an expected network condition rather
    /// than a caller bug. Expected conditions are recorded as attempt data,
    /// never propagated as a hard failure of the race.
    pub fn is_expected(&self) -> bool {
        !matches!(self, NetError::AddressInvalid | NetError::Unknown(_))
    }
}

impl From<i32> for NetError {
    fn from(code: i32) -> Self {
        match code {
            -100 => NetError::ConnectionClosed,
            -101 => NetError::ConnectionReset,
            -102 => NetError::ConnectionRefused,
            -103 => NetError::ConnectionAborted,
            -104 => NetError::ConnectionFailed,
            -105 => NetError::NameNotResolved,
            -106 => NetError::InternetDisconnected,
            -108 => NetError::AddressInvalid,
            -109 => NetError::AddressUnreachable,
            -118 => NetError::ConnectionTimedOut,
            -910 => NetError::RaceCancelled,
            _ => NetError::Unknown(code),
        }
    }
}
