//! The race coordinator.
//!
//! Launches one probe per candidate, consumes outcomes strictly in
//! completion order, locks the first qualifying success as the winner and
//! cancels the rest.

use crate::base::neterror::NetError;
use crate::dns::{AliasTable, GaiResolver, Resolve};
use crate::race::candidate::AddressFamily;
use crate::race::outcome::{AttemptOutcome, RaceResult};
use crate::race::probe::{CancelSource, Probe, TcpProber};
use crate::race::resolver::CandidateResolver;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Default connect deadline shared by every probe in a race.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_millis(888);

/// Default per-hostname DNS resolution budget.
pub const DEFAULT_DNS_TIMEOUT: Duration = Duration::from_secs(4);

/// Tunables for one race invocation.
#[derive(Debug, Clone, Copy)]
pub struct RaceConfig {
    /// Connect deadline applied to every probe.
    pub connect_timeout: Duration,
    /// Per-hostname DNS resolution budget, independent of the connect
    /// deadline.
    pub dns_timeout: Duration,
    /// Address family filter for candidates.
    pub family: AddressFamily,
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            dns_timeout: DEFAULT_DNS_TIMEOUT,
            family: AddressFamily::Unspec,
        }
    }
}

/// Phases of one race invocation. This roughly matches net/base/load_states.h
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RaceState {
    Resolving,
    Racing,
    Collecting,
    Cancelling,
    Done,
}

impl fmt::Display for RaceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RaceState::Resolving => "resolving",
            RaceState::Racing => "racing",
            RaceState::Collecting => "collecting",
            RaceState::Cancelling => "cancelling",
            RaceState::Done => "done",
        };
        f.write_str(s)
    }
}

/// Happy-eyeballs style connection racer.
///
/// Each [`race`] call is independent: resolve every candidate address for a
/// host, attempt them all concurrently under one deadline, return the first
/// that connects. There is no cross-invocation state and no connection
/// reuse.
///
/// [`race`]: ConnectRacer::race
pub struct ConnectRacer {
    resolver: CandidateResolver,
    prober: Arc<dyn Probe>,
    config: RaceConfig,
}

impl ConnectRacer {
    /// Creates a racer over the system resolver, the built-in alias table
    /// and real TCP probes.
    pub fn new(config: RaceConfig) -> Self {
        Self::with_parts(
            Arc::new(GaiResolver::new()),
            AliasTable::default(),
            Arc::new(TcpProber::new()),
            config,
        )
    }

    /// Creates a racer from explicit parts. The seam for tests and for
    /// embedders with their own DNS or probing.
    pub fn with_parts(
        dns: Arc<dyn Resolve>,
        aliases: AliasTable,
        prober: Arc<dyn Probe>,
        config: RaceConfig,
    ) -> Self {
        Self {
            resolver: CandidateResolver::new(dns, aliases),
            prober,
            config,
        }
    }

    /// Races every resolved address for `host` and returns the first
    /// connection established within the budget.
    ///
    /// Expected network conditions (DNS failure, refused, unreachable,
    /// deadline exhaustion) are never errors here: they surface as a
    /// [`RaceResult`] without a winner. The only hard failures are caller
    /// bugs, rejected before any concurrent work starts.
    pub async fn race(&self, host: &str, port: u16) -> Result<RaceResult, NetError> {
        if host.is_empty() || port == 0 {
            tracing::error!(host = %host, port = port, "invalid race target");
            return Err(NetError::AddressInvalid);
        }

        let mut state = RaceState::Resolving;
        tracing::debug!(host = %host, port = port, state = %state, "race started");

        let candidates = self
            .resolver
            .resolve(host, port, self.config.family, self.config.dns_timeout)
            .await;

        if candidates.is_empty() {
            state = RaceState::Done;
            tracing::debug!(host = %host, state = %state, "no candidates, race over");
            return Ok(RaceResult::no_candidates());
        }

        state = RaceState::Racing;
        tracing::debug!(
            host = %host,
            candidates = candidates.len(),
            timeout = ?self.config.connect_timeout,
            state = %state,
            "launching probes"
        );

        let total = candidates.len();
        let (report_tx, mut report_rx) = mpsc::channel(total);
        let (cancel, token) = CancelSource::new();

        for candidate in candidates {
            let prober = Arc::clone(&self.prober);
            let tx = report_tx.clone();
            let token = token.clone();
            let connect_timeout = self.config.connect_timeout;
            tokio::spawn(async move {
                let report = prober.probe(candidate, connect_timeout, token).await;
                // Receiver gone means the race already returned; the report
                // (and any socket in it) is dropped here.
                let _ = tx.send(report).await;
            });
        }
        drop(report_tx);

        state = RaceState::Collecting;
        tracing::debug!(host = %host, state = %state, "waiting for outcomes");
        let mut winner: Option<AttemptOutcome> = None;
        let mut stream = None;
        let mut outcomes = Vec::with_capacity(total);

        // Reports arrive strictly in completion order; handling is
        // serialized even though the probes run in parallel.
        while let Some(report) = report_rx.recv().await {
            let outcome = report.outcome;
            self.log_outcome(&outcome);

            let qualifies = winner.is_none()
                && outcome.is_success()
                && outcome.duration <= self.config.connect_timeout;

            if qualifies {
                // First qualifying success by completion order wins; later
                // successes never displace it.
                winner = Some(outcome.clone());
                stream = report.stream;
                state = RaceState::Cancelling;
                tracing::debug!(winner = %outcome.candidate, state = %state, "winner locked, cancelling the rest");
                cancel.cancel();
            } else if report.stream.is_some() {
                // A losing success: close its socket promptly.
                drop(report.stream);
            }

            outcomes.push(outcome);
        }

        state = RaceState::Done;
        match &winner {
            Some(w) => tracing::info!(
                host = %w.candidate.source_hostname,
                addr = %w.candidate.addr(),
                family = %w.candidate.family(),
                duration_ms = format!("{:.2}", w.duration_ms()),
                state = %state,
                "winner selected"
            ),
            None => tracing::warn!(
                host = %host,
                attempts = outcomes.len(),
                timeout = ?self.config.connect_timeout,
                state = %state,
                "no connection succeeded within the timeout"
            ),
        }

        Ok(RaceResult {
            winner,
            stream,
            outcomes,
        })
    }

    fn log_outcome(&self, outcome: &AttemptOutcome) {
        let candidate = &outcome.candidate;
        match &outcome.error {
            None => tracing::info!(
                host = %candidate.source_hostname,
                addr = %candidate.addr(),
                family = %candidate.family(),
                duration_ms = format!("{:.2}", outcome.duration_ms()),
                "connection attempt succeeded"
            ),
            Some(e) => tracing::warn!(
                host = %candidate.source_hostname,
                addr = %candidate.addr(),
                family = %candidate.family(),
                duration_ms = format!("{:.2}", outcome.duration_ms()),
                error = %e,
                "connection attempt failed"
            ),
        }
    }
}

impl Default for ConnectRacer {
    fn default() -> Self {
        Self::new(RaceConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RaceConfig::default();
        assert_eq!(config.connect_timeout, Duration::from_millis(888));
        assert_eq!(config.dns_timeout, Duration::from_secs(4));
        assert_eq!(config.family, AddressFamily::Unspec);
    }

    #[tokio::test]
    async fn test_rejects_empty_host() {
        let racer = ConnectRacer::default();
        let err = racer.race("", 119).await.unwrap_err();
        assert!(matches!(err, NetError::AddressInvalid));
    }

    #[tokio::test]
    async fn test_rejects_port_zero() {
        let racer = ConnectRacer::default();
        let err = racer.race("news.example", 0).await.unwrap_err();
        assert!(matches!(err, NetError::AddressInvalid));
    }
}
