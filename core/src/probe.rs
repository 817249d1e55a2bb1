//! The central **abstraction** for a single reachability check.
//!
//! A [`Prober`] answers one question: did `address` reply within the allotted
//! time, and how fast? Failures are returned as a typed [`ProbeError`] and are
//! never raised past the runner; the runner turns every reply into a
//! [`ProbeOutcome`].
//!
//! **Architectural Note:**
//! The [`Runner`](crate::runner::Runner) depends on this trait only. The
//! production implementation is [`ping::SystemPing`]; tests substitute
//! scripted probers.

use async_trait::async_trait;
use chrono::{DateTime, Local};
use pingr_common::config::ProbeSettings;
use pingr_common::network::target::Target;
use pingr_common::outcome::{ProbeOutcome, UNREACHABLE};

pub mod ping;

/// Latency in milliseconds, or the reason the host is considered down.
pub type ProbeReply = Result<f64, ProbeError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProbeError {
    /// The probing mechanism outlived its budget and was stopped.
    #[error("Timeout")]
    Timeout,
    /// The mechanism ran to completion and reported failure.
    #[error("{}", .0.as_deref().unwrap_or(UNREACHABLE))]
    Unreachable(Option<String>),
    /// The mechanism could not be started or awaited.
    #[error("{0}")]
    Invocation(String),
}

/// Performs one reachability check against a single address.
#[async_trait]
pub trait Prober: Send + Sync {
    async fn probe(&self, address: &str, settings: &ProbeSettings) -> ProbeReply;
}

/// Attaches the target's label to a reply.
pub fn into_outcome(target: &Target, reply: ProbeReply, timestamp: DateTime<Local>) -> ProbeOutcome {
    match reply {
        Ok(response_time_ms) => ProbeOutcome::up(target, response_time_ms, timestamp),
        Err(err) => ProbeOutcome::down(target, Some(err.to_string()), timestamp),
    }
}

/// Probes `target` and returns its outcome stamped with `timestamp`. Never fails.
pub async fn probe_target(
    prober: &dyn Prober,
    target: &Target,
    settings: &ProbeSettings,
    timestamp: DateTime<Local>,
) -> ProbeOutcome {
    let reply = prober.probe(&target.address, settings).await;
    into_outcome(target, reply, timestamp)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
