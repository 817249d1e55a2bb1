use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, bail};
use chrono::{DateTime, Local};
use pingr_common::config::Config;
use pingr_common::network::interface::NetworkAdapter;
use pingr_common::network::target::{self, Target};
use pingr_common::outcome::{ProbeOutcome, RoundResult};
use pingr_core::hosts;
use pingr_core::probe::ping::SystemPing;
use pingr_core::runner::Runner;
use pingr_core::store::{self, TIMESTAMP_FORMAT};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::commands::CommandLine;
use crate::terminal::{format, print, spinner};

/// Probed when neither `--file` nor `--hosts` is given.
pub const DEFAULT_HOSTS: &[(&str, &str)] = &[
    ("Google DNS", "8.8.8.8"),
    ("Cloudflare DNS", "1.1.1.1"),
    ("OpenDNS", "208.67.222.222"),
    ("Local Router", "192.168.1.1"),
    ("Adobe DNS", "208.67.220.220"),
];

pub fn default_targets() -> Vec<Target> {
    DEFAULT_HOSTS
        .iter()
        .map(|(label, address)| Target::new(*label, *address))
        .collect()
}

/// Picks the target list: the hosts file, then `--hosts`, then the defaults.
pub fn resolve_targets(commands: &CommandLine) -> anyhow::Result<Vec<Target>> {
    if let Some(path) = &commands.file {
        let targets: Vec<Target> = hosts::load_hosts(path)?;
        if targets.is_empty() {
            bail!("no hosts found in {}", path.display());
        }
        if !commands.hosts.is_empty() {
            warn!("--file given, ignoring --hosts");
        }
        return Ok(targets);
    }

    if !commands.hosts.is_empty() {
        return Ok(commands.hosts.clone());
    }

    Ok(default_targets())
}

pub async fn monitor(commands: &CommandLine, adapters: &[NetworkAdapter]) -> anyhow::Result<()> {
    let cfg: Config = commands.config();
    let mut targets: Vec<Target> = resolve_targets(commands)?;

    if commands.include_gateways {
        let added: Vec<Target> = target::append_gateways(&mut targets, adapters);
        if added.is_empty() {
            warn!("No gateways found to add");
        }
        for gateway in &added {
            info!("Added gateway {gateway}");
        }
    }

    let runner = Runner::new(Arc::new(SystemPing::new()), commands.runner_settings())
        .context("invalid probe settings")?
        .with_round_span(spinner::round_span);

    print::header("monitor settings");
    print::aligned_line("Hosts", targets.len().to_string(), 11);
    print::aligned_line("Threads", runner.settings().concurrency.to_string(), 11);
    print::aligned_line("Timeout", format!("{}s", commands.timeout), 11);
    print::aligned_line("Count", commands.count.to_string(), 11);
    if commands.continuous {
        print::aligned_line("Interval", format!("{}s", commands.interval), 11);
    }

    if !commands.continuous {
        let round: RoundResult = runner.run_round(&targets).await;
        report_round(&round, &cfg, commands.save.as_deref());
        return Ok(());
    }

    let cancel = CancellationToken::new();
    let ctrl_c = tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        }
    });

    let rounds: usize = runner
        .run_continuous(
            &targets,
            commands.interval(),
            |round| report_round(&round, &cfg, commands.save.as_deref()),
            cancel,
        )
        .await;
    ctrl_c.abort();

    print::fat_separator();
    print::centerln("Stopped by user.");
    info!("Completed {rounds} rounds");
    Ok(())
}

pub fn report_round(round: &RoundResult, cfg: &Config, save: Option<&Path>) {
    let started_at: DateTime<Local> = round.started_at();
    print::header(&format!("ping test at {}", started_at.format(TIMESTAMP_FORMAT)));

    if cfg.quiet {
        let failed: Vec<&ProbeOutcome> = round.failed();
        if failed.is_empty() {
            print::print_status("All hosts are UP");
        }
        for outcome in failed {
            print::print(&format::failure_line(outcome));
        }
    } else {
        print::print(&format::table_header());
        for outcome in round {
            print::print(&format::table_row(outcome));
        }
    }

    if cfg.summary {
        print::header("summary");
        print::as_tree_one_level(format::summary_lines(&round.summary()));
    }

    if let Some(path) = save {
        match store::save_round(round, path, Local::now()) {
            Ok(()) => info!("Results saved to {}", path.display()),
            Err(err) => error!("Failed to save results: {err:#}"),
        }
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
