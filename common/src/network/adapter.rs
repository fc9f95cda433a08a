//! # Adapter Model
//!
//! The read-only description of a local network adapter a sweep starts from.
//!
//! Values are built from `pnet` interfaces by [`AdapterInfo::from_interface`].
//! The `address_value` stored on an adapter is already the first host to
//! probe, so a sweep over `address_value .. address_value + host_count` stays
//! inside the adapter's network:
//!
//! * up to `/24` it is [`codec::encode`] of the network address (`x.y.z.1`),
//! * `/25` to `/31` it is the network address plus one,
//! * `/32` it is the address itself (nothing is probed anyway).

use std::fmt;
use std::net::Ipv4Addr;

use pnet::datalink::NetworkInterface;
use pnet::ipnetwork::{IpNetwork, Ipv4Network};

use crate::network::codec;

const ENCODABLE_PREFIX: u8 = 24;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AdapterInfo {
    pub name: String,
    /// Adapter address in CIDR form, e.g. `192.168.0.32/24`.
    pub display_address: String,
    pub prefix_length: u8,
    pub address_value: u32,
}

impl AdapterInfo {
    pub fn new(name: impl Into<String>, network: Ipv4Network) -> Self {
        Self {
            name: name.into(),
            display_address: format!("{}/{}", network.ip(), network.prefix()),
            prefix_length: network.prefix(),
            address_value: host_base(network),
        }
    }

    /// First IPv4 network of an interface that is up, not loopback.
    pub fn from_interface(intf: &NetworkInterface) -> Option<Self> {
        if !intf.is_up() || intf.is_loopback() {
            return None;
        }
        intf.get_ipv4_range().map(|net| Self::new(intf.name.clone(), net))
    }

    pub fn base_addr(&self) -> Ipv4Addr {
        codec::to_addr(self.address_value)
    }
}

impl fmt::Display for AdapterInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.display_address)
    }
}

/// First address to probe for `network`.
pub fn host_base(network: Ipv4Network) -> u32 {
    let prefix: u8 = network.prefix();
    let network_addr: Ipv4Addr = network.network();
    match prefix {
        0..=ENCODABLE_PREFIX => codec::encode(network_addr.octets()),
        32 => u32::from(network.ip()),
        _ => u32::from(network_addr) + 1,
    }
}

pub trait NetworkInterfaceExtension {
    fn get_ipv4_nets(&self) -> Vec<Ipv4Network>;
    fn get_ipv4_range(&self) -> Option<Ipv4Network>;
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

    fn get_ipv4_range(&self) -> Option<Ipv4Network> {
        self.get_ipv4_nets()
            .into_iter()
            .find(|net| !net.ip().is_loopback() && !net.ip().is_unspecified())
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
