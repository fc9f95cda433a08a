//! ICMP echo probe.
//!
//! One socket is opened per sweep and shared by every probe; replies are
//! matched to their pinger by identifier, which is why each probe draws a
//! random one.

use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use surge_ping::{Client, Config, PingIdentifier, PingSequence};
use sweepr_common::scanning::ReachabilityProbe;

const PAYLOAD: [u8; 56] = [0; 56];

pub struct IcmpProbe {
    client: Client,
}

impl IcmpProbe {
    /// Opens the ICMP socket. Fails without the needed privileges.
    pub fn new() -> anyhow::Result<Self> {
        let client = Client::new(&Config::default()).context("failed to open ICMP socket")?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ReachabilityProbe for IcmpProbe {
    async fn probe(&self, target: Ipv4Addr, timeout: Duration) -> anyhow::Result<bool> {
        let mut pinger = self
            .client
            .pinger(IpAddr::V4(target), PingIdentifier(rand::random()))
            .await;
        pinger.timeout(timeout);
        pinger.ping(PingSequence(0), &PAYLOAD).await?;
        Ok(true)
    }

    fn name(&self) -> String {
        "icmp".into()
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
