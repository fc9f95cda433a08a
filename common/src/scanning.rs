//! # Scanning Ports
//!
//! The seam between the sweep logic and whatever actually puts packets on the
//! wire. A [`ReachabilityProbe`] answers one question for one address, the
//! scanner in `sweepr-core` fans it out over a whole [`HostRange`].
//!
//! [`HostRange`]: crate::network::range::HostRange

use std::net::Ipv4Addr;
use std::time::Duration;

use async_trait::async_trait;

use crate::network::codec;

/// A single bounded-time reachability check.
#[async_trait]
pub trait ReachabilityProbe: Send + Sync {
    /// Sends one probe to `target` and waits at most `timeout` for an answer.
    ///
    /// `Ok(false)` and `Err(_)` both mean "not reachable". The error only
    /// carries the reason for diagnostics.
    async fn probe(&self, target: Ipv4Addr, timeout: Duration) -> anyhow::Result<bool>;

    /// Short label used in logs, e.g. `icmp` or `tcp/443`.
    fn name(&self) -> String;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub address: u32,
    pub reachable: bool,
}

impl ProbeOutcome {
    pub fn up(address: u32) -> Self {
        Self {
            address,
            reachable: true,
        }
    }

    pub fn down(address: u32) -> Self {
        Self {
            address,
            reachable: false,
        }
    }
}

/// Reachable hosts of one sweep, in ascending address order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanResult {
    pub adapter: String,
    pub reachable: Vec<u32>,
    /// Number of probes that were dispatched.
    pub probed: u32,
    pub elapsed: Duration,
}

impl ScanResult {
    pub fn addresses(&self) -> Vec<String> {
        self.reachable.iter().copied().map(codec::to_text).collect()
    }

    pub fn to_addrs(&self) -> Vec<Ipv4Addr> {
        self.reachable.iter().copied().map(codec::to_addr).collect()
    }

    pub fn len(&self) -> usize {
        self.reachable.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reachable.is_empty()
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
