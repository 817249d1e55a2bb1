//! # Probe Outcomes
//!
//! Results produced by one probe and by one full round of probes.
//!
//! A [`ProbeOutcome`] stores its latency and its error inside a single
//! [`Reachability`] value, so an outcome that is up always carries a latency
//! and an outcome that is down never does.

use std::fmt;

use chrono::{DateTime, Local};

use crate::network::target::Target;

/// Message used when a host failed without any diagnostic.
pub const UNREACHABLE: &str = "Host unreachable";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeStatus {
    Up,
    Down,
}

impl ProbeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProbeStatus::Up => "up",
            ProbeStatus::Down => "down",
        }
    }
}

impl fmt::Display for ProbeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Reachability {
    Up { response_time_ms: f64 },
    Down { error: Option<String> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProbeOutcome {
    pub label: String,
    pub address: String,
    pub reachability: Reachability,
    pub timestamp: DateTime<Local>,
}

impl ProbeOutcome {
    /// Negative or non-finite latencies are recorded as `0.0`.
    pub fn up(target: &Target, response_time_ms: f64, timestamp: DateTime<Local>) -> Self {
        let response_time_ms = if response_time_ms.is_finite() {
            response_time_ms.max(0.0)
        } else {
            0.0
        };
        Self::with(target, Reachability::Up { response_time_ms }, timestamp)
    }

    pub fn down(target: &Target, error: Option<String>, timestamp: DateTime<Local>) -> Self {
        Self::with(target, Reachability::Down { error }, timestamp)
    }

    fn with(target: &Target, reachability: Reachability, timestamp: DateTime<Local>) -> Self {
        Self {
            label: target.label.clone(),
            address: target.address.clone(),
            reachability,
            timestamp,
        }
    }

    pub fn status(&self) -> ProbeStatus {
        match self.reachability {
            Reachability::Up { .. } => ProbeStatus::Up,
            Reachability::Down { .. } => ProbeStatus::Down,
        }
    }

    pub fn is_up(&self) -> bool {
        self.status() == ProbeStatus::Up
    }

    pub fn response_time_ms(&self) -> Option<f64> {
        match self.reachability {
            Reachability::Up { response_time_ms } => Some(response_time_ms),
            Reachability::Down { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.reachability {
            Reachability::Down { error } => error.as_deref(),
            Reachability::Up { .. } => None,
        }
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reachability {
            Reachability::Up { response_time_ms } => write!(
                f,
                "{} ({}): UP ({:.1}ms)",
                self.label, self.address, response_time_ms
            ),
            Reachability::Down { .. } => write!(f, "{} ({}): DOWN", self.label, self.address),
        }
    }
}

/// Outcomes of one round, positionally matching the probed targets.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundResult {
    started_at: DateTime<Local>,
    outcomes: Vec<ProbeOutcome>,
}

impl RoundResult {
    pub fn new(started_at: DateTime<Local>, outcomes: Vec<ProbeOutcome>) -> Self {
        Self {
            started_at,
            outcomes,
        }
    }

    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    pub fn outcomes(&self) -> &[ProbeOutcome] {
        &self.outcomes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProbeOutcome> {
        self.outcomes.iter()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Outcomes that are down, in round order.
    pub fn failed(&self) -> Vec<&ProbeOutcome> {
        self.outcomes.iter().filter(|o| !o.is_up()).collect()
    }

    pub fn summary(&self) -> RoundSummary {
        RoundSummary::from_outcomes(&self.outcomes)
    }
}

impl<'a> IntoIterator for &'a RoundResult {
    type Item = &'a ProbeOutcome;
    type IntoIter = std::slice::Iter<'a, ProbeOutcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundSummary {
    pub total: usize,
    pub up: usize,
    pub down: usize,
    /// Mean latency of the hosts that answered.
    pub average_response_ms: Option<f64>,
}

impl RoundSummary {
    pub fn from_outcomes(outcomes: &[ProbeOutcome]) -> Self {
        let latencies: Vec<f64> = outcomes
            .iter()
            .filter_map(ProbeOutcome::response_time_ms)
            .collect();
        let up: usize = latencies.len();
        let average_response_ms = match up {
            0 => None,
            n => Some(latencies.iter().sum::<f64>() / n as f64),
        };

        Self {
            total: outcomes.len(),
            up,
            down: outcomes.len() - up,
            average_response_ms,
        }
    }

    pub fn up_percent(&self) -> f64 {
        percent(self.up, self.total)
    }

    pub fn down_percent(&self) -> f64 {
        percent(self.down, self.total)
    }
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 / total as f64 * 100.0
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
