//! # Probe Runner
//!
//! Fans a list of targets out to a [`Prober`] with a bounded number of probes
//! in flight, and hands back one [`RoundResult`] per pass.
//!
//! * [`Runner::run_round`] probes every target exactly once. Outcomes are
//!   returned in target order no matter which probe finishes first.
//! * [`Runner::run_continuous`] repeats rounds on a fixed interval until the
//!   cancellation token fires. The token is watched both while a round is in
//!   flight and while waiting for the next one.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local};
use pingr_common::config::ProbeSettings;
use pingr_common::network::target::Target;
use pingr_common::outcome::{ProbeOutcome, RoundResult};
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{Instrument, Span, debug, warn};

use crate::probe::{self, Prober};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunnerSettings {
    /// Maximum number of probes running at the same time.
    pub concurrency: usize,
    pub probe: ProbeSettings,
}

impl Default for RunnerSettings {
    fn default() -> Self {
        Self {
            concurrency: 10,
            probe: ProbeSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RunnerError {
    #[error("concurrency must be at least 1 (got {0})")]
    InvalidConcurrency(usize),
    #[error("concurrency cannot exceed {max} (got {0})", max = Semaphore::MAX_PERMITS)]
    ConcurrencyTooLarge(usize),
    #[error("packet count must be at least 1 (got {0})")]
    InvalidCount(u32),
    #[error("probe timeout must be greater than zero")]
    InvalidTimeout,
}

/// Builds the span a round runs inside, given the number of targets.
type RoundSpan = Box<dyn Fn(usize) -> Span + Send + Sync>;

pub struct Runner {
    prober: Arc<dyn Prober>,
    settings: RunnerSettings,
    round_span: Option<RoundSpan>,
}

impl Runner {
    /// Validates `settings` before any probe is sent.
    pub fn new(prober: Arc<dyn Prober>, settings: RunnerSettings) -> Result<Self, RunnerError> {
        if settings.concurrency < 1 {
            return Err(RunnerError::InvalidConcurrency(settings.concurrency));
        }
        if settings.concurrency > Semaphore::MAX_PERMITS {
            return Err(RunnerError::ConcurrencyTooLarge(settings.concurrency));
        }
        if settings.probe.count < 1 {
            return Err(RunnerError::InvalidCount(settings.probe.count));
        }
        if settings.probe.timeout.is_zero() {
            return Err(RunnerError::InvalidTimeout);
        }

        Ok(Self {
            prober,
            settings,
            round_span: None,
        })
    }

    /// Runs every round, one-shot or continuous, inside the span built by `make_span`.
    pub fn with_round_span<F>(mut self, make_span: F) -> Self
    where
        F: Fn(usize) -> Span + Send + Sync + 'static,
    {
        self.round_span = Some(Box::new(make_span));
        self
    }

    pub fn settings(&self) -> &RunnerSettings {
        &self.settings
    }

    /// Probes every target once and returns the outcomes in target order.
    ///
    /// Individual failures, including a prober that panics, become down
    /// outcomes and never affect the other targets.
    pub async fn run_round(&self, targets: &[Target]) -> RoundResult {
        let span: Span = match &self.round_span {
            Some(make_span) => make_span(targets.len()),
            None => Span::none(),
        };
        self.collect_round(targets).instrument(span).await
    }

    async fn collect_round(&self, targets: &[Target]) -> RoundResult {
        let started_at: DateTime<Local> = Local::now();
        let semaphore: Arc<Semaphore> = Arc::new(Semaphore::new(self.settings.concurrency));

        debug!(
            targets = targets.len(),
            concurrency = self.settings.concurrency,
            "starting round"
        );

        let handles: Vec<JoinHandle<ProbeOutcome>> = targets
            .iter()
            .cloned()
            .map(|target| self.spawn_probe(target, Arc::clone(&semaphore), started_at))
            .collect();

        let mut outcomes: Vec<ProbeOutcome> = Vec::with_capacity(handles.len());
        for (target, handle) in targets.iter().zip(handles) {
            let outcome: ProbeOutcome = match handle.await {
                Ok(outcome) => outcome,
                Err(err) => {
                    warn!(host = %target, "probe task failed: {err}");
                    ProbeOutcome::down(target, Some(err.to_string()), started_at)
                }
            };
            debug!(label = %outcome.label, status = %outcome.status(), "probe finished");
            outcomes.push(outcome);
        }

        RoundResult::new(started_at, outcomes)
    }

    fn spawn_probe(
        &self,
        target: Target,
        semaphore: Arc<Semaphore>,
        started_at: DateTime<Local>,
    ) -> JoinHandle<ProbeOutcome> {
        let prober: Arc<dyn Prober> = Arc::clone(&self.prober);
        let settings: ProbeSettings = self.settings.probe;

        tokio::spawn(async move {
            let Ok(_permit) = semaphore.acquire_owned().await else {
                return ProbeOutcome::down(&target, Some("probe pool closed".into()), started_at);
            };
            probe::probe_target(prober.as_ref(), &target, &settings, started_at).await
        })
    }

    /// Runs rounds back to back, `interval` apart, until `cancel` fires.
    ///
    /// Each completed round is passed to `on_round`. A round still in flight
    /// when `cancel` fires is dropped without being reported. Returns the
    /// number of rounds delivered.
    pub async fn run_continuous<F>(
        &self,
        targets: &[Target],
        interval: Duration,
        mut on_round: F,
        cancel: CancellationToken,
    ) -> usize
    where
        F: FnMut(RoundResult),
    {
        let mut rounds: usize = 0;

        while !cancel.is_cancelled() {
            let round: RoundResult = tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                round = self.run_round(targets) => round,
            };

            on_round(round);
            rounds += 1;

            tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                _ = tokio::time::sleep(interval) => {}
            }
        }

        debug!(rounds, "continuous run stopped");
        rounds
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
