use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use pnet::ipnetwork::Ipv4Network;
use sweepr_common::config::{Config, ProbeMethod};
use sweepr_common::error::ScanError;
use sweepr_common::network::adapter::AdapterInfo;
use sweepr_common::scanning::{ReachabilityProbe, ScanResult};
use sweepr_core::discovery::DiscoveryService;
use sweepr_core::network::tcp::HandshakeProbe;
use sweepr_core::scanner::Prober;

const TIMEOUT: Duration = Duration::from_millis(300);

/// Answers for a fixed set of hosts after a random delay.
struct KnownHosts {
    live: Vec<Ipv4Addr>,
}

#[async_trait]
impl ReachabilityProbe for KnownHosts {
    async fn probe(&self, target: Ipv4Addr, _timeout: Duration) -> anyhow::Result<bool> {
        let delay: u64 = rand::random_range(0..30);
        tokio::time::sleep(Duration::from_millis(delay)).await;
        Ok(self.live.contains(&target))
    }

    fn name(&self) -> String {
        "known-hosts".into()
    }
}

fn lan_adapter() -> AdapterInfo {
    let network = Ipv4Network::new(Ipv4Addr::new(192, 168, 0, 32), 24).unwrap();
    AdapterInfo::new("enp9s0", network)
}

/// Sweeps a simulated /24 and expects exactly the live hosts back, sorted.
#[tokio::test]
async fn discovery_simulated_lan() {
    let live = vec![
        Ipv4Addr::new(192, 168, 0, 254),
        Ipv4Addr::new(192, 168, 0, 1),
        Ipv4Addr::new(192, 168, 0, 32),
        Ipv4Addr::new(10, 0, 0, 1),
    ];
    let probe = Arc::new(KnownHosts { live });
    let service = DiscoveryService::new(Prober::new(probe, TIMEOUT), 4_096);

    let result: ScanResult = service.run_scan(&lan_adapter()).await.unwrap();

    assert_eq!(result.adapter, "enp9s0");
    assert_eq!(result.probed, 255);
    assert_eq!(
        result.addresses(),
        vec!["192.168.0.1", "192.168.0.32", "192.168.0.254"]
    );
}

#[tokio::test]
async fn discovery_refuses_oversized_subnet() {
    let network = Ipv4Network::new(Ipv4Addr::new(10, 1, 2, 3), 8).unwrap();
    let adapter = AdapterInfo::new("eth0", network);
    let service = DiscoveryService::new(
        Prober::new(Arc::new(KnownHosts { live: vec![] }), TIMEOUT),
        4_096,
    );

    let err = service.run_scan(&adapter).await.unwrap_err();
    assert!(matches!(err, ScanError::RangeTooLarge { hosts: 16_777_215, limit: 4_096 }));
}

/// Every 127.0.0.0/8 address is local on Linux, so a TCP handshake against a
/// closed port is refused (and therefore reachable) for all three hosts.
#[tokio::test]
#[cfg(target_os = "linux")]
async fn discovery_range_loopback() {
    let port: u16 = {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap().port()
    };

    let network = Ipv4Network::new(Ipv4Addr::new(127, 0, 0, 1), 30).unwrap();
    let adapter = AdapterInfo::new("lo", network);
    let service = DiscoveryService::new(
        Prober::new(Arc::new(HandshakeProbe::new(port)), Duration::from_millis(500)),
        4_096,
    );

    let result = service.run_scan(&adapter).await.unwrap();

    assert_eq!(
        result.to_addrs(),
        vec![
            Ipv4Addr::new(127, 0, 0, 1),
            Ipv4Addr::new(127, 0, 0, 2),
            Ipv4Addr::new(127, 0, 0, 3),
        ]
    );
}

#[tokio::test]
async fn discovery_from_config_tcp() {
    let cfg = Config {
        method: ProbeMethod::Tcp,
        timeout: Duration::from_millis(200),
        ..Config::default()
    };
    let service = DiscoveryService::from_config(&cfg).unwrap();

    let network = Ipv4Network::new(Ipv4Addr::new(127, 0, 0, 1), 32).unwrap();
    let result = service.run_scan(&AdapterInfo::new("lo", network)).await.unwrap();
    assert!(result.is_empty());
    assert_eq!(result.probed, 0);
}
