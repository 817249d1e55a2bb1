use std::collections::HashMap;
use std::net::Ipv4Addr;

use anyhow::Context;
use tracing::{debug, warn};

use pingr_common::network::interface::{self, NetworkAdapter};
use pingr_common::system::SystemRepository;

pub struct SystemRepo;

impl SystemRepository for SystemRepo {
    fn get_network_adapters(&self) -> anyhow::Result<Vec<NetworkAdapter>> {
        let interfaces = pnet::datalink::interfaces();

        let gateways: HashMap<String, Ipv4Addr> = default_gateways().unwrap_or_else(|e| {
            warn!("Could not read the routing table: {e:#}");
            HashMap::new()
        });

        let adapters: Vec<NetworkAdapter> = interface::to_adapters(&interfaces, &gateways);
        debug!(
            interfaces = interfaces.len(),
            adapters = adapters.len(),
            gateways = gateways.len(),
            "adapter discovery finished"
        );
        Ok(adapters)
    }
}

#[cfg(target_os = "linux")]
fn default_gateways() -> anyhow::Result<HashMap<String, Ipv4Addr>> {
    const PROC_NET_ROUTE: &str = "/proc/net/route";

    let table: String = std::fs::read_to_string(PROC_NET_ROUTE)
        .with_context(|| format!("failed to read {PROC_NET_ROUTE}"))?;
    Ok(interface::parse_proc_net_route(&table))
}

#[cfg(all(unix, not(target_os = "linux")))]
fn default_gateways() -> anyhow::Result<HashMap<String, Ipv4Addr>> {
    use std::process::Command;

    let output = Command::new("netstat")
        .args(["-rn", "-f", "inet"])
        .output()
        .context("failed to run netstat")?;
    anyhow::ensure!(output.status.success(), "netstat exited with {}", output.status);

    Ok(interface::parse_netstat_routes(&String::from_utf8_lossy(
        &output.stdout,
    )))
}

#[cfg(not(unix))]
fn default_gateways() -> anyhow::Result<HashMap<String, Ipv4Addr>> {
    anyhow::bail!("default gateway lookup is not supported on this platform")
}
