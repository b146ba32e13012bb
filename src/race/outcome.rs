//! Attempt outcomes and the final race result.

use crate::base::neterror::NetError;
use crate::race::candidate::Candidate;
use std::fmt;
use std::time::Duration;
use tokio::net::TcpStream;

/// The result of one connection attempt against one candidate.
///
/// Created exactly once per candidate when its probe finishes (success,
/// failure, timeout or cancellation) and never mutated afterwards. The
/// duration is measured from that probe's own start instant, not from the
/// start of the race.
#[derive(Debug, Clone)]
pub struct AttemptOutcome {
    /// The candidate that was attempted.
    pub candidate: Candidate,
    /// Wall-clock time the attempt took, success or failure.
    pub duration: Duration,
    /// Why the attempt failed; `None` means the connection was established.
    pub error: Option<NetError>,
}

impl AttemptOutcome {
    /// Builds a successful outcome.
    pub fn success(candidate: Candidate, duration: Duration) -> Self {
        Self {
            candidate,
            duration,
            error: None,
        }
    }

    /// Builds a failed outcome.
    pub fn failure(candidate: Candidate, duration: Duration, error: NetError) -> Self {
        Self {
            candidate,
            duration,
            error: Some(error),
        }
    }

    /// True if the connection was established.
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Elapsed time in floating-point milliseconds.
    pub fn duration_ms(&self) -> f64 {
        self.duration.as_nanos() as f64 / 1e6
    }
}

impl fmt::Display for AttemptOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            None => write!(f, "[SUCCESS] {} - {:.2} ms", self.candidate, self.duration_ms()),
            Some(e) => write!(
                f,
                "[FAILURE] {} - {:.2} ms ({})",
                self.candidate,
                self.duration_ms(),
                e
            ),
        }
    }
}

/// The coordinator's final answer for one race invocation.
///
/// `winner` is the first outcome, by completion order, that connected
/// within the budget. `stream` is the winning connected socket when the
/// winner came from a real TCP probe; ownership transfers to the caller and
/// no other socket outlives the race. `outcomes` holds every attempt's
/// outcome in completion order, for diagnostics.
#[derive(Debug)]
pub struct RaceResult {
    /// The winning outcome, absent when nothing qualified.
    pub winner: Option<AttemptOutcome>,
    /// The winner's connected socket, if any.
    pub stream: Option<TcpStream>,
    /// Every outcome received before the race concluded, completion order.
    pub outcomes: Vec<AttemptOutcome>,
}

impl RaceResult {
    /// A result with no winner and no outcomes (nothing resolved).
    pub fn no_candidates() -> Self {
        Self {
            winner: None,
            stream: None,
            outcomes: Vec::new(),
        }
    }

    /// True if some candidate connected within the budget.
    pub fn has_winner(&self) -> bool {
        self.winner.is_some()
    }

    /// Takes ownership of the winning socket, leaving `None` behind.
    pub fn take_stream(&mut self) -> Option<TcpStream> {
        self.stream.take()
    }
}
