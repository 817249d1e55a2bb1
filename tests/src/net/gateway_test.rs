use pingr_common::network::interface::{self, NetworkAdapter};
use pingr_common::network::target::{self, Target};
use pnet::datalink::{MacAddr, NetworkInterface};
use std::net::Ipv4Addr;

use super::util::{ni, v4, v6, IFF_LOOPBACK, IFF_UP};

const ROUTE_TABLE: &str = "\
Iface\tDestination\tGateway \tFlags\tRefCnt\tUse\tMetric\tMask\t\tMTU\tWindow\tIRTT
enp9s0\t00000000\t0100A8C0\t0003\t0\t0\t100\t00000000\t0\t0\t0
enp9s0\t0000A8C0\t00000000\t0001\t0\t0\t100\t00FFFFFF\t0\t0\t0
wlan0\t00000000\t0101A8C0\t0003\t0\t0\t600\t00000000\t0\t0\t0
tun0\t0000600A\t00000000\t0001\t0\t0\t0\t0000FFFF\t0\t0\t0
";

/*************************************************************
                Adapters from raw interfaces
**************************************************************/

#[test]
fn only_viable_interfaces_become_adapters() {
    let adapters: Vec<NetworkAdapter> = adapters();
    let names: Vec<&str> = adapters.iter().map(|a| a.name.as_str()).collect();

    assert_eq!(names, ["enp9s0", "wlan0", "tun0"]);
}

#[test]
fn adapters_carry_gateway_from_route_table() {
    let adapters: Vec<NetworkAdapter> = adapters();

    assert_eq!(adapters[0].ip, Ipv4Addr::new(192, 168, 0, 32));
    assert_eq!(adapters[0].gateway, Some(Ipv4Addr::new(192, 168, 0, 1)));
    assert_eq!(adapters[1].gateway, Some(Ipv4Addr::new(192, 168, 1, 1)));
    assert_eq!(adapters[2].gateway, None);
    assert_eq!(adapters[2].netmask, Some(Ipv4Addr::new(255, 255, 0, 0)));
}

/*************************************************************
                Gateways appended to targets
**************************************************************/

#[test]
fn gateways_are_appended_after_user_targets() {
    let mut targets: Vec<Target> = vec![Target::new("Google DNS", "8.8.8.8")];
    let added: Vec<Target> = target::append_gateways(&mut targets, &adapters());

    assert_eq!(
        added,
        vec![
            Target::new("enp9s0-Gateway", "192.168.0.1"),
            Target::new("wlan0-Gateway", "192.168.1.1"),
        ]
    );
    assert_eq!(targets.len(), 3);
    assert_eq!(targets[0].label, "Google DNS");
}

#[test]
fn gateway_already_probed_is_not_duplicated() {
    let mut targets: Vec<Target> = vec![Target::new("Local Router", "192.168.1.1")];
    let added: Vec<Target> = target::append_gateways(&mut targets, &adapters());

    assert_eq!(added, vec![Target::new("enp9s0-Gateway", "192.168.0.1")]);
    assert_eq!(targets[0].label, "Local Router");
    assert_eq!(targets.len(), 2);
}

#[test]
fn no_adapters_adds_nothing() {
    let mut targets: Vec<Target> = vec![Target::unlabeled("1.1.1.1")];
    let added: Vec<Target> = target::append_gateways(&mut targets, &[]);

    assert!(added.is_empty());
    assert_eq!(targets, vec![Target::unlabeled("1.1.1.1")]);
}

/*************************************************************
                  Mock interfaces for testing
**************************************************************/

fn adapters() -> Vec<NetworkAdapter> {
    let gateways = interface::parse_proc_net_route(ROUTE_TABLE);
    interface::to_adapters(&iface_all(), &gateways)
}

fn iface_all() -> Vec<NetworkInterface> {
    vec![lo(), enp9s0(), ipv6leakintrf0(), wlan0(), docker0(), tun0()]
}

fn lo() -> NetworkInterface {
    ni(
        "lo",
        1,
        Some(MacAddr::new(0, 0, 0, 0, 0, 0)),
        &[v4(127, 0, 0, 1, 8), v6("::1", 128)],
        IFF_UP | IFF_LOOPBACK,
    )
}

fn enp9s0() -> NetworkInterface {
    ni(
        "enp9s0",
        2,
        Some(MacAddr::new(0xa8, 0xa1, 0x59, 0x13, 0x41, 0x46)),
        &[
            v6("fe80::b3dd:5c39:7c29:48b6", 64),
            v4(192, 168, 0, 32, 24),
        ],
        IFF_UP,
    )
}

fn ipv6leakintrf0() -> NetworkInterface {
    ni(
        "ipv6leakintrf0",
        6,
        Some(MacAddr::new(0xd2, 0x25, 0xd4, 0x9f, 0x18, 0xfd)),
        &[v6("fdeb:446c:912d:8da::", 64), v6("fe80::7f87:ff4a:9ad8:d2f0", 64)],
        IFF_UP,
    )
}

fn wlan0() -> NetworkInterface {
    ni(
        "wlan0",
        3,
        Some(MacAddr::new(0x34, 0xcf, 0xf6, 0x9a, 0x11, 0x22)),
        &[v4(169, 254, 10, 2, 16), v4(192, 168, 1, 42, 24)],
        IFF_UP,
    )
}

fn docker0() -> NetworkInterface {
    ni(
        "docker0",
        7,
        Some(MacAddr::new(0x02, 0x42, 0xac, 0x11, 0x00, 0x01)),
        &[v4(172, 17, 0, 1, 16)],
        0,
    )
}

fn tun0() -> NetworkInterface {
    ni("tun0", 5, None, &[v4(10, 96, 0, 57, 16)], IFF_UP)
}
