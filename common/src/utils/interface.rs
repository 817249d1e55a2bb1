use pnet::datalink::NetworkInterface;

use pnet::ipnetwork::{IpNetwork, Ipv4Network};

pub trait NetworkInterfaceExtension {
    fn get_ipv4_nets(&self) -> Vec<Ipv4Network>;
    fn get_usable_ipv4_net(&self) -> Option<Ipv4Network>;
}

impl NetworkInterfaceExtension for NetworkInterface {
    fn get_ipv4_nets(&self) -> Vec<Ipv4Network> {
        self.ips
            .iter()
            .filter_map(|ip| {
                if let IpNetwork::V4(ipv4) = ip {
                    Some(*ipv4)
                } else {
                    None
                }
            })
            .collect()
    }

    fn get_usable_ipv4_net(&self) -> Option<Ipv4Network> {
        // First address that is neither loopback nor self-assigned (169.254/16)
        self.get_ipv4_nets()
            .into_iter()
            .find(|net| !net.ip().is_loopback() && !net.ip().is_link_local())
    }
}
