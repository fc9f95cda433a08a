//! # Network Discovery Service
//!
//! Implements the "sweep an adapter's subnet" use case.
//!
//! The service turns an [`AdapterInfo`] into a host range, hands the range to
//! the [`Prober`] and wraps the answer into a [`ScanResult`]. It performs no
//! I/O of its own: the adapter comes in from the caller and the result goes
//! back out to it.

use std::time::Instant;

use sweepr_common::config::Config;
use sweepr_common::error::ScanError;
use sweepr_common::network::adapter::AdapterInfo;
use sweepr_common::network::range::HostRange;
use sweepr_common::scanning::ScanResult;
use tracing::info;

use crate::network;
use crate::scanner::Prober;

pub struct DiscoveryService {
    prober: Prober,
    max_hosts: u32,
}

impl DiscoveryService {
    pub fn new(prober: Prober, max_hosts: u32) -> Self {
        Self { prober, max_hosts }
    }

    /// Service with the probe primitive selected by `cfg`.
    pub fn from_config(cfg: &Config) -> anyhow::Result<Self> {
        let probe = network::build_probe(cfg)?;
        Ok(Self::new(Prober::new(probe, cfg.timeout), cfg.max_hosts))
    }

    pub fn with_progress(mut self, on_host_found: Box<dyn Fn(usize) + Send + Sync>) -> Self {
        self.prober = self.prober.with_progress(on_host_found);
        self
    }

    /// Sweeps the subnet of `adapter` and returns the hosts that answered.
    ///
    /// Fails before any probe is sent when the adapter's prefix is not a valid
    /// IPv4 prefix or when the range exceeds the configured host limit.
    pub async fn run_scan(&self, adapter: &AdapterInfo) -> Result<ScanResult, ScanError> {
        let range = HostRange::new(adapter.address_value, adapter.prefix_length).map_err(|_| {
            ScanError::InvalidAdapter {
                name: adapter.name.clone(),
                prefix: adapter.prefix_length,
            }
        })?;

        if range.host_count > self.max_hosts {
            return Err(ScanError::RangeTooLarge {
                hosts: range.host_count,
                limit: self.max_hosts,
            });
        }

        info!(
            "Probing {} hosts on {} via {}",
            range.host_count,
            adapter,
            self.prober.probe_name()
        );

        let start_time = Instant::now();
        let reachable: Vec<u32> = self.prober.scan(range).await;

        Ok(ScanResult {
            adapter: adapter.name.clone(),
            reachable,
            probed: range.host_count,
            elapsed: start_time.elapsed(),
        })
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
