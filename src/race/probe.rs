//! Single connection attempts.
//!
//! A probe performs exactly one TCP connect against one candidate, under a
//! deadline and a cancellation token, and reports a structured outcome. The
//! [`Probe`] trait is the seam that lets tests race deterministic mock
//! probes through the real coordinator.

use crate::base::neterror::NetError;
use crate::race::candidate::Candidate;
use crate::race::outcome::AttemptOutcome;
use std::{future::Future, pin::Pin, time::Duration};
use tokio::net::TcpStream;
use tokio::sync::watch;
use tokio::time::Instant;

/// Cooperative cancellation signal handed to every probe at launch.
///
/// Probes honor the token at their blocking point (the connect call) rather
/// than being forcefully interrupted. Dropping the in-flight connect future
/// closes its socket.
#[derive(Clone, Debug)]
pub struct CancelToken {
    rx: watch::Receiver<bool>,
}

impl CancelToken {
    /// A token that never fires. For probing outside a race.
    pub fn never() -> Self {
        let (_tx, rx) = watch::channel(false);
        Self { rx }
    }

    /// Resolves once cancellation has been requested.
    pub async fn cancelled(mut self) {
        loop {
            if *self.rx.borrow_and_update() {
                return;
            }
            if self.rx.changed().await.is_err() {
                // Coordinator gone without cancelling; in-flight attempts
                // run to their own deadline.
                std::future::pending::<()>().await;
            }
        }
    }

    /// True if cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }
}

/// Sender half of the cancellation signal, held by the coordinator.
pub(crate) struct CancelSource {
    tx: watch::Sender<bool>,
}

impl CancelSource {
    pub(crate) fn new() -> (Self, CancelToken) {
        let (tx, rx) = watch::channel(false);
        (Self { tx }, CancelToken { rx })
    }

    /// Requests every outstanding probe to stop. Non-blocking.
    pub(crate) fn cancel(&self) {
        let _ = self.tx.send(true);
    }
}

/// A probe's report: the outcome, plus the connected socket on success.
///
/// Only the eventual winner's stream survives the race; the coordinator
/// drops every other one promptly.
#[derive(Debug)]
pub struct ProbeReport {
    pub outcome: AttemptOutcome,
    pub stream: Option<TcpStream>,
}

impl ProbeReport {
    fn bare(outcome: AttemptOutcome) -> Self {
        Self {
            outcome,
            stream: None,
        }
    }
}

/// Alias for the `Future` type returned by a probe.
pub type Probing = Pin<Box<dyn Future<Output = ProbeReport> + Send>>;

/// Trait for connection probing.
///
/// Implementations must be thread-safe; the coordinator launches one probe
/// per candidate from concurrent tasks with shared `&self` access. A probe
/// reports exactly once, whatever happens: success, failure, deadline, or
/// cancellation.
pub trait Probe: Send + Sync {
    /// Attempts one connection to `candidate` within `connect_timeout`.
    fn probe(&self, candidate: Candidate, connect_timeout: Duration, cancel: CancelToken)
        -> Probing;
}

/// Real TCP prober.
///
/// Opens a fresh socket of the candidate's family, applies the connect
/// deadline, and measures wall-clock time from this attempt's own start.
/// Sockets never leak: the failure, timeout and cancellation paths all drop
/// the connect future, which closes the descriptor.
#[derive(Clone, Debug, Default)]
pub struct TcpProber;

impl TcpProber {
    /// Creates a new `TcpProber`.
    pub fn new() -> Self {
        Self
    }
}

impl Probe for TcpProber {
    fn probe(
        &self,
        candidate: Candidate,
        connect_timeout: Duration,
        cancel: CancelToken,
    ) -> Probing {
        Box::pin(async move {
            let start = Instant::now();
            tracing::debug!(candidate = %candidate, timeout = ?connect_timeout, "starting connect attempt");

            let attempt = tokio::time::timeout(connect_timeout, TcpStream::connect(candidate.addr()));

            tokio::select! {
                // Checked first so an already-cancelled race never reports
                // a connect result.
                biased;
                _ = cancel.cancelled() => ProbeReport::bare(AttemptOutcome::failure(
                    candidate.clone(),
                    start.elapsed(),
                    NetError::RaceCancelled,
                )),
                res = attempt => match res {
                    Ok(Ok(stream)) => ProbeReport {
                        outcome: AttemptOutcome::success(candidate, start.elapsed()),
                        stream: Some(stream),
                    },
                    Ok(Err(e)) => ProbeReport::bare(AttemptOutcome::failure(
                        candidate,
                        start.elapsed(),
                        NetError::from_connect_error(&e),
                    )),
                    Err(_) => ProbeReport::bare(AttemptOutcome::failure(
                        candidate,
                        start.elapsed(),
                        NetError::ConnectionTimedOut,
                    )),
                },
            }
        })
    }
}
