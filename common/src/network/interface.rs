use std::collections::HashMap;
use std::fmt;
use std::net::Ipv4Addr;

use pnet::datalink::NetworkInterface;
use pnet::ipnetwork::Ipv4Network;

use crate::utils::interface::NetworkInterfaceExtension;

/// A local adapter that is able to reach beyond this host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkAdapter {
    pub name: String,
    pub ip: Ipv4Addr,
    pub netmask: Option<Ipv4Addr>,
    pub gateway: Option<Ipv4Addr>,
}

impl fmt::Display for NetworkAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.gateway {
            Some(gateway) => write!(f, "{}: {} -> {}", self.name, self.ip, gateway),
            None => write!(f, "{}: {} -> No Gateway", self.name, self.ip),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ViabilityError {
    /// The interface is operationally down.
    IsDown,
    /// The interface is the loopback device.
    IsLoopback,
    /// The interface has no routable IPv4 address (loopback and link-local are ignored).
    NoUsableIpv4,
}

/// Checks whether `interface` is worth reporting and returns its usable IPv4 network.
pub fn is_viable_adapter(interface: &NetworkInterface) -> Result<Ipv4Network, ViabilityError> {
    if !interface.is_up() {
        return Err(ViabilityError::IsDown);
    }
    if interface.is_loopback() {
        return Err(ViabilityError::IsLoopback);
    }
    interface
        .get_usable_ipv4_net()
        .ok_or(ViabilityError::NoUsableIpv4)
}

/// Builds adapters out of raw interfaces, attaching gateways by interface name.
pub fn to_adapters(
    interfaces: &[NetworkInterface],
    gateways: &HashMap<String, Ipv4Addr>,
) -> Vec<NetworkAdapter> {
    interfaces
        .iter()
        .filter_map(|interface| {
            let net: Ipv4Network = is_viable_adapter(interface).ok()?;
            Some(NetworkAdapter {
                name: interface.name.clone(),
                ip: net.ip(),
                netmask: Some(net.mask()),
                gateway: gateways.get(&interface.name).copied(),
            })
        })
        .collect()
}

/// Parses the Linux `/proc/net/route` table into default gateways per interface.
///
/// Addresses in that table are little-endian hex; only default routes
/// (destination `00000000`) with a non-zero gateway are kept.
pub fn parse_proc_net_route(table: &str) -> HashMap<String, Ipv4Addr> {
    let mut gateways: HashMap<String, Ipv4Addr> = HashMap::new();

    for line in table.lines().skip(1) {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 3 || fields[1] != "00000000" {
            continue;
        }
        let Ok(raw) = u32::from_str_radix(fields[2], 16) else {
            continue;
        };
        if raw == 0 {
            continue;
        }
        gateways
            .entry(fields[0].to_string())
            .or_insert_with(|| Ipv4Addr::from(raw.to_le_bytes()));
    }

    gateways
}

/// Parses `netstat -rn -f inet` output into default gateways per interface.
///
/// The interface column is located through the `Netif` header since BSD and
/// macOS releases disagree on the columns in between.
pub fn parse_netstat_routes(output: &str) -> HashMap<String, Ipv4Addr> {
    const FALLBACK_NETIF_COLUMN: usize = 5;

    let mut gateways: HashMap<String, Ipv4Addr> = HashMap::new();
    let mut netif_column: usize = FALLBACK_NETIF_COLUMN;

    for line in output.lines() {
        let parts: Vec<&str> = line.split_whitespace().collect();

        if parts.first() == Some(&"Destination") {
            if let Some(idx) = parts.iter().position(|col| *col == "Netif") {
                netif_column = idx;
            }
            continue;
        }

        if parts.len() <= netif_column || !matches!(parts[0], "default" | "0.0.0.0") {
            continue;
        }
        let Ok(gateway) = parts[1].parse::<Ipv4Addr>() else {
            continue;
        };
        gateways
            .entry(parts[netif_column].to_string())
            .or_insert(gateway);
    }

    gateways
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use pnet::datalink::MacAddr;
    use pnet::ipnetwork::IpNetwork;

    const IFF_UP: u32 = 1;
    const IFF_LOOPBACK: u32 = 8;

    fn ni(name: &str, ips: &[IpNetwork], flags: u32) -> NetworkInterface {
        NetworkInterface {
            name: name.into(),
            description: "".into(),
            index: 1,
            mac: Some(MacAddr::new(0x00, 0x1A, 0x2B, 0x3C, 0x4D, 0x5E)),
            ips: ips.to_vec(),
            flags,
        }
    }

    fn v4(a: u8, b: u8, c: u8, d: u8, p: u8) -> IpNetwork {
        IpNetwork::V4(Ipv4Network::new(Ipv4Addr::new(a, b, c, d), p).unwrap())
    }

    #[test]
    fn proc_net_route_yields_default_gateways() {
        let table = "\
Iface\tDestination\tGateway \tFlags\tRefCnt\tUse\tMetric\tMask\t\tMTU\tWindow\tIRTT
eth0\t00000000\t0101A8C0\t0003\t0\t0\t100\t00000000\t0\t0\t0
eth0\t0001A8C0\t00000000\t0001\t0\t0\t100\t00FFFFFF\t0\t0\t0
wlan0\t00000000\t0100000A\t0003\t0\t0\t600\t00000000\t0\t0\t0
wlan0\t00000000\t0200000A\t0003\t0\t0\t700\t00000000\t0\t0\t0
docker0\t000011AC\t00000000\t0001\t0\t0\t0\t0000FFFF\t0\t0\t0
";
        let gateways = parse_proc_net_route(table);

        assert_eq!(gateways.len(), 2);
        assert_eq!(gateways["eth0"], Ipv4Addr::new(192, 168, 1, 1));
        assert_eq!(gateways["wlan0"], Ipv4Addr::new(10, 0, 0, 1));
    }

    #[test]
    fn netstat_routes_follow_netif_header() {
        let modern = "\
Routing tables

Internet:
Destination        Gateway            Flags               Netif Expire
default            192.168.87.1       UGScg                 en0
default            link#17            UCSIg               bridge0
127                127.0.0.1          UCS                   lo0
";
        let gateways = parse_netstat_routes(modern);
        assert_eq!(gateways.len(), 1);
        assert_eq!(gateways["en0"], Ipv4Addr::new(192, 168, 87, 1));

        let legacy = "\
Destination        Gateway            Flags        Refs      Use   Netif Expire
default            10.1.1.254         UGSc           12        0     en1
";
        let gateways = parse_netstat_routes(legacy);
        assert_eq!(gateways["en1"], Ipv4Addr::new(10, 1, 1, 254));
    }

    #[test]
    fn viability_rejects_down_loopback_and_link_local() {
        let down = ni("eth9", &[v4(192, 168, 1, 5, 24)], 0);
        assert_eq!(is_viable_adapter(&down), Err(ViabilityError::IsDown));

        let lo = ni("lo", &[v4(127, 0, 0, 1, 8)], IFF_UP | IFF_LOOPBACK);
        assert_eq!(is_viable_adapter(&lo), Err(ViabilityError::IsLoopback));

        let apipa = ni("en5", &[v4(169, 254, 3, 4, 16)], IFF_UP);
        assert_eq!(is_viable_adapter(&apipa), Err(ViabilityError::NoUsableIpv4));
    }

    #[test]
    fn to_adapters_attaches_gateway_and_mask() {
        let interfaces = vec![
            ni("lo", &[v4(127, 0, 0, 1, 8)], IFF_UP | IFF_LOOPBACK),
            ni("eth0", &[v4(192, 168, 1, 20, 24)], IFF_UP),
            ni("tun0", &[v4(10, 8, 0, 2, 32)], IFF_UP),
        ];
        let gateways = HashMap::from([("eth0".to_string(), Ipv4Addr::new(192, 168, 1, 1))]);

        let adapters = to_adapters(&interfaces, &gateways);

        assert_eq!(adapters.len(), 2);
        assert_eq!(adapters[0].name, "eth0");
        assert_eq!(adapters[0].netmask, Some(Ipv4Addr::new(255, 255, 255, 0)));
        assert_eq!(adapters[0].gateway, Some(Ipv4Addr::new(192, 168, 1, 1)));
        assert_eq!(adapters[1].name, "tun0");
        assert_eq!(adapters[1].gateway, None);
    }
}
