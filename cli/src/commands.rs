pub mod adapters;
pub mod monitor;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use pingr_common::config::{Config, ProbeSettings};
use pingr_common::network::target::Target;
use pingr_core::runner::RunnerSettings;

#[derive(Parser, Debug)]
#[command(name = "pingr")]
#[command(version, about = "A concurrent host reachability monitor.")]
pub struct CommandLine {
    /// Hosts to probe, as `label:address` or a bare address
    #[arg(long, num_args = 1.., value_name = "HOST")]
    pub hosts: Vec<Target>,

    /// Read hosts from a text or JSON file (takes precedence over --hosts)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Seconds to wait for each echo reply
    #[arg(short, long, default_value_t = 3)]
    pub timeout: u64,

    /// Echo requests sent per host
    #[arg(short, long, default_value_t = 1)]
    pub count: u32,

    /// Maximum number of hosts probed at the same time
    #[arg(long, default_value_t = 10)]
    pub threads: usize,

    /// Keep probing until interrupted with Ctrl+C
    #[arg(long)]
    pub continuous: bool,

    /// Seconds between rounds in continuous mode
    #[arg(short, long, default_value_t = 30)]
    pub interval: u64,

    /// Save every round to this file (.json for JSON, anything else for text)
    #[arg(short, long, value_name = "PATH")]
    pub save: Option<PathBuf>,

    /// Only report hosts that are down
    #[arg(short, long)]
    pub quiet: bool,

    /// Print totals and the average latency after every round
    #[arg(long)]
    pub summary: bool,

    /// Also probe the default gateway of every local adapter
    #[arg(long)]
    pub include_gateways: bool,

    /// Do not print the startup banner
    #[arg(long)]
    pub no_banner: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            quiet: self.quiet,
            summary: self.summary,
            no_banner: self.no_banner,
        }
    }

    pub fn runner_settings(&self) -> RunnerSettings {
        RunnerSettings {
            concurrency: self.threads,
            probe: ProbeSettings {
                timeout: Duration::from_secs(self.timeout),
                count: self.count,
            },
        }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval)
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
