//! # Result Files
//!
//! Writes the latest round to disk, replacing whatever the file held before.
//! A `.json` path gets a machine-readable document, any other path a plain
//! text report.

use std::fs;
use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Local};
use pingr_common::outcome::RoundResult;
use serde::Serialize;
use tracing::debug;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Serialize)]
struct SavedRound<'a> {
    timestamp: String,
    results: Vec<SavedOutcome<'a>>,
}

#[derive(Serialize)]
struct SavedOutcome<'a> {
    label: &'a str,
    ip: &'a str,
    status: &'static str,
    response_time: Option<f64>,
    error: Option<&'a str>,
}

pub fn save_round(round: &RoundResult, path: &Path, saved_at: DateTime<Local>) -> anyhow::Result<()> {
    let content: String = if crate::is_json(path) {
        to_json(round, saved_at)?
    } else {
        to_text(round, saved_at)
    };

    fs::write(path, content)
        .with_context(|| format!("failed to write results to '{}'", path.display()))?;

    debug!(file = %path.display(), outcomes = round.len(), "round saved");
    Ok(())
}

pub fn to_json(round: &RoundResult, saved_at: DateTime<Local>) -> anyhow::Result<String> {
    let saved = SavedRound {
        timestamp: saved_at.format(TIMESTAMP_FORMAT).to_string(),
        results: round
            .iter()
            .map(|outcome| SavedOutcome {
                label: &outcome.label,
                ip: &outcome.address,
                status: outcome.status().as_str(),
                response_time: outcome.response_time_ms(),
                error: outcome.error(),
            })
            .collect(),
    };

    serde_json::to_string_pretty(&saved).context("failed to serialize results")
}

pub fn to_text(round: &RoundResult, saved_at: DateTime<Local>) -> String {
    let mut report = format!(
        "Ping Results - {}\n{}\n\n",
        saved_at.format(TIMESTAMP_FORMAT),
        "=".repeat(50)
    );
    for outcome in round {
        report.push_str(&outcome.to_string());
        report.push('\n');
    }
    report
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
