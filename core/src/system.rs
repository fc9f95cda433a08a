use pnet::datalink::{self, NetworkInterface};

use sweepr_common::network::adapter::AdapterInfo;
use sweepr_common::system::AdapterDirectory;

/// Adapter directory backed by the operating system's interface list.
pub struct SystemRepo;

impl AdapterDirectory for SystemRepo {
    fn adapters(&self) -> anyhow::Result<Vec<AdapterInfo>> {
        Ok(prioritized_adapters(datalink::interfaces()))
    }
}

/// Usable adapters, wired-looking interfaces (`e*`) first.
pub fn prioritized_adapters(interfaces: Vec<NetworkInterface>) -> Vec<AdapterInfo> {
    let mut interfaces: Vec<NetworkInterface> = interfaces
        .into_iter()
        .filter(|i| i.is_up() && !i.is_loopback() && !i.ips.is_empty())
        .collect();

    interfaces.sort_by_key(|i| if i.name.starts_with('e') { 0 } else { 1 });

    interfaces
        .iter()
        .filter_map(AdapterInfo::from_interface)
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
