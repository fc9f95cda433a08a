use colored::*;
use sweepr_common::network::adapter::AdapterInfo;
use sweepr_common::network::codec;
use sweepr_common::network::range::HostRange;

use crate::terminal::colors;

type Detail = (String, ColoredString);

pub fn adapter_to_details(adapter: &AdapterInfo) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![address_detail(adapter)];

    match HostRange::new(adapter.address_value, adapter.prefix_length) {
        Ok(range) => {
            details.push(("Hosts".to_string(), range.host_count.to_string().normal()));
            if let Some(range_detail) = range_detail(&range) {
                details.push(range_detail);
            }
        }
        Err(e) => details.push(("Hosts".to_string(), e.to_string().red())),
    }

    details
}

fn address_detail(adapter: &AdapterInfo) -> Detail {
    let (address, prefix) = adapter
        .display_address
        .split_once('/')
        .unwrap_or((adapter.display_address.as_str(), ""));

    let address: ColoredString = address.color(colors::IPV4_ADDR);
    let prefix: ColoredString = prefix.color(colors::IPV4_PREFIX);
    let result: ColoredString = format!("{address}/{prefix}").color(colors::SEPARATOR);
    ("IPv4".to_string(), result)
}

fn range_detail(range: &HostRange) -> Option<Detail> {
    let first = codec::to_addr(range.iter().next()?);
    let last = codec::to_addr(range.last()?);
    let value: ColoredString = format!(
        "{} - {}",
        first.to_string().color(colors::IPV4_ADDR),
        last.to_string().color(colors::IPV4_ADDR)
    )
    .normal();
    Some(("Range".to_string(), value))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
