use pingr_common::network::interface::NetworkAdapter;
use pingr_common::system::SystemRepository;
use tracing::warn;

use crate::terminal::{network_fmt, print};

/// Reads the local adapters. Failures are reported and yield an empty list.
pub fn discover(repo: &dyn SystemRepository) -> Vec<NetworkAdapter> {
    repo.get_network_adapters().unwrap_or_else(|e| {
        warn!("Could not read network adapters: {e:#}");
        Vec::new()
    })
}

pub fn show(adapters: &[NetworkAdapter]) {
    print::header("network adapters");

    if adapters.is_empty() {
        print::print_status("No usable network adapters found");
        return;
    }

    for (idx, adapter) in adapters.iter().enumerate() {
        network_fmt::print_adapter(adapter, idx);
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
