pub mod icmp;
pub mod tcp;

use std::sync::Arc;

use is_root::is_root;
use sweepr_common::config::{Config, ProbeMethod};
use sweepr_common::scanning::ReachabilityProbe;
use tracing::{debug, warn};

use icmp::IcmpProbe;
use tcp::HandshakeProbe;

/// Builds the probe primitive selected by `cfg.method`.
///
/// `Auto` prefers ICMP when running as root and falls back to the TCP
/// handshake when the ICMP socket cannot be opened.
pub fn build_probe(cfg: &Config) -> anyhow::Result<Arc<dyn ReachabilityProbe>> {
    let probe: Arc<dyn ReachabilityProbe> = match cfg.method {
        ProbeMethod::Icmp => Arc::new(IcmpProbe::new()?),
        ProbeMethod::Tcp => Arc::new(HandshakeProbe::new(cfg.port)),
        ProbeMethod::Auto if !is_root() => {
            debug!("Not running as root, using TCP handshake probe");
            Arc::new(HandshakeProbe::new(cfg.port))
        }
        ProbeMethod::Auto => match IcmpProbe::new() {
            Ok(probe) => Arc::new(probe),
            Err(e) => {
                warn!("ICMP unavailable ({e:#}), falling back to TCP handshake");
                Arc::new(HandshakeProbe::new(cfg.port))
            }
        },
    };
    Ok(probe)
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

    #[tokio::test]
    async fn build_probe_tcp_uses_configured_port() {
        let cfg = Config {
            method: ProbeMethod::Tcp,
            port: 8080,
            ..Config::default()
        };
        let probe = build_probe(&cfg).unwrap();
        assert_eq!(probe.name(), "tcp/8080");
    }

    #[tokio::test]
    async fn build_probe_auto_always_yields_a_probe() {
        let probe = build_probe(&Config::default()).unwrap();
        assert!(["icmp", "tcp/443"].contains(&probe.name().as_str()));
    }
}
