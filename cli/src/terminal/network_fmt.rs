use crate::terminal::{colors, print};
use colored::*;
use pingr_common::network::interface::NetworkAdapter;
use std::net::Ipv4Addr;

pub fn ipv4_with_prefix(ip: Ipv4Addr, netmask: Option<Ipv4Addr>) -> ColoredString {
    let address: ColoredString = ip.to_string().color(colors::IPV4_ADDR);
    match netmask {
        Some(mask) => {
            let prefix: u32 = u32::from(mask).count_ones();
            let prefix: ColoredString = prefix.to_string().color(colors::IPV4_PREFIX);
            format!("{address}/{prefix}").color(colors::SEPARATOR)
        }
        None => address,
    }
}

pub fn to_key_value_pair(adapter: &NetworkAdapter) -> Vec<(String, ColoredString)> {
    let mut key_value_pair: Vec<(String, ColoredString)> = vec![(
        "IPv4".to_string(),
        ipv4_with_prefix(adapter.ip, adapter.netmask),
    )];

    if let Some(mask) = adapter.netmask {
        key_value_pair.push(("Mask".to_string(), mask.to_string().color(colors::IPV4_PREFIX)));
    }

    let gateway: ColoredString = match adapter.gateway {
        Some(gateway) => gateway.to_string().color(colors::GATEWAY),
        None => "No Gateway".color(colors::SEPARATOR),
    };
    key_value_pair.push(("Gateway".to_string(), gateway));

    key_value_pair
}

pub fn print_adapter(adapter: &NetworkAdapter, idx: usize) {
    print::tree_head(idx, &adapter.name);
    print::as_tree_one_level(to_key_value_pair(adapter));
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
