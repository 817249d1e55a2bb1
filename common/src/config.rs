use std::time::Duration;

/// Display switches shared by every renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// Only report hosts that are down.
    pub quiet: bool,
    /// Print up/down totals and the average latency after every round.
    pub summary: bool,
    /// Skips the startup banner.
    pub no_banner: bool,
}

/// How a single host is probed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeSettings {
    /// How long to wait for each echo reply.
    pub timeout: Duration,
    /// Echo requests sent per probe.
    pub count: u32,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(3),
            count: 1,
        }
    }
}
