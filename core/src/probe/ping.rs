//! An ICMP echo prober backed by the platform `ping` executable.
//!
//! Raw ICMP sockets need elevated privileges on most systems, while the
//! system `ping` binary is installed setuid or with the right capabilities.
//! The child process is supervised with a wall-clock budget slightly larger
//! than the requested timeout and is killed once that budget is spent.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use pingr_common::config::ProbeSettings;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::trace;

use super::{ProbeError, ProbeReply, Prober};

/// Extra time the `ping` process gets to exit on its own before it is killed.
pub const PROCESS_GRACE: Duration = Duration::from_secs(2);

/// Pause `ping` leaves between consecutive echo requests.
const ECHO_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub struct SystemPing {
    program: String,
}

impl Default for SystemPing {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemPing {
    pub fn new() -> Self {
        Self {
            program: String::from("ping"),
        }
    }

    /// Uses another executable with `ping`-compatible arguments.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    fn command(&self, address: &str, settings: &ProbeSettings) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(ping_args(address, settings))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        cmd
    }
}

#[async_trait]
impl Prober for SystemPing {
    async fn probe(&self, address: &str, settings: &ProbeSettings) -> ProbeReply {
        let budget: Duration = process_budget(settings);

        match timeout(budget, self.command(address, settings).output()).await {
            Err(_elapsed) => Err(ProbeError::Timeout),
            Ok(Err(err)) => Err(ProbeError::Invocation(err.to_string())),
            Ok(Ok(output)) if output.status.success() => {
                let stdout = String::from_utf8_lossy(&output.stdout);
                let latency = parse_latency(&stdout).unwrap_or(0.0);
                trace!(address, latency, "echo reply received");
                Ok(latency)
            }
            Ok(Ok(output)) => {
                let stderr: String = String::from_utf8_lossy(&output.stderr).trim().to_string();
                trace!(address, code = ?output.status.code(), "no echo reply");
                Err(ProbeError::Unreachable(
                    (!stderr.is_empty()).then_some(stderr),
                ))
            }
        }
    }
}

/// Wall-clock time a probe may take, greater than the timeout unless it saturates.
pub fn process_budget(settings: &ProbeSettings) -> Duration {
    let extra_echoes: u32 = settings.count.saturating_sub(1);
    settings
        .timeout
        .saturating_add(ECHO_INTERVAL.saturating_mul(extra_echoes))
        .saturating_add(PROCESS_GRACE)
}

/// Arguments for the host's `ping` flavour.
pub fn ping_args(address: &str, settings: &ProbeSettings) -> Vec<String> {
    let count: String = settings.count.max(1).to_string();
    let millis: String = settings.timeout.as_millis().to_string();

    if cfg!(target_os = "windows") {
        vec!["-n".into(), count, "-w".into(), millis, address.into()]
    } else if cfg!(target_os = "linux") {
        // iputils expects whole seconds
        let secs: u64 = (settings.timeout.as_secs_f64().ceil() as u64).max(1);
        vec!["-c".into(), count, "-W".into(), secs.to_string(), address.into()]
    } else {
        vec!["-c".into(), count, "-W".into(), millis, address.into()]
    }
}

/// Extracts the round-trip time in milliseconds from `ping` output.
///
/// Prefers an explicit `time=12.3 ms` (or `time<1ms`) field and otherwise
/// falls back to the first `<number> ms` found anywhere in the text.
pub fn parse_latency(output: &str) -> Option<f64> {
    let lower: String = output.to_ascii_lowercase();
    explicit_time(&lower).or_else(|| first_ms_value(&lower))
}

fn explicit_time(text: &str) -> Option<f64> {
    text.match_indices("time").find_map(|(idx, key)| {
        let rest: &str = &text[idx + key.len()..];
        let rest: &str = rest.strip_prefix('=').or_else(|| rest.strip_prefix('<'))?;
        millis_at(rest)
    })
}

fn first_ms_value(text: &str) -> Option<f64> {
    text.char_indices()
        .filter(|(_, c)| c.is_ascii_digit())
        .find_map(|(idx, _)| millis_at(&text[idx..]))
}

/// Matches `\d+(\.\d+)?\s*ms` at the start of `text`.
fn millis_at(text: &str) -> Option<f64> {
    let (value, rest) = leading_number(text)?;
    rest.trim_start().starts_with("ms").then_some(value)
}

fn leading_number(text: &str) -> Option<(f64, &str)> {
    let int_len: usize = digit_run(text);
    if int_len == 0 {
        return None;
    }

    let mut end: usize = int_len;
    if let Some(fraction) = text[int_len..].strip_prefix('.') {
        let frac_len: usize = digit_run(fraction);
        if frac_len > 0 {
            end = int_len + 1 + frac_len;
        }
    }

    let value: f64 = text[..end].parse().ok()?;
    Some((value, &text[end..]))
}

fn digit_run(text: &str) -> usize {
    text.find(|c: char| !c.is_ascii_digit()).unwrap_or(text.len())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
