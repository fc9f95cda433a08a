//! The concurrent **fan-out/fan-in** sweep over a host range.
//!
//! Every candidate address gets its own tokio task, all of them are spawned
//! before the first one is awaited, and the sweep only returns once each task
//! has resolved. A host that does not answer, answers with an error, runs into
//! the timeout or even panics its task simply does not show up in the result.
//!
//! Tasks never touch shared state except the found-counter used for progress
//! reporting. Outcomes are merged into an ordered set after the barrier.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use sweepr_common::network::codec;
use sweepr_common::network::range::HostRange;
use sweepr_common::scanning::{ProbeOutcome, ReachabilityProbe};
use tokio::task::JoinHandle;
use tracing::{debug, error, trace};

pub type ProgressCallback = Arc<dyn Fn(usize) + Send + Sync>;

pub struct Prober {
    probe: Arc<dyn ReachabilityProbe>,
    timeout: Duration,
    on_host_found: Option<ProgressCallback>,
}

impl Prober {
    pub fn new(probe: Arc<dyn ReachabilityProbe>, timeout: Duration) -> Self {
        Self {
            probe,
            timeout,
            on_host_found: None,
        }
    }

    /// Called with the running number of reachable hosts whenever one answers.
    pub fn with_progress(mut self, on_host_found: Box<dyn Fn(usize) + Send + Sync>) -> Self {
        self.on_host_found = Some(Arc::from(on_host_found));
        self
    }

    pub fn probe_name(&self) -> String {
        self.probe.name()
    }

    /// Probes every address of `range` at once and returns the ones that
    /// answered, ascending and without duplicates.
    pub async fn scan(&self, range: HostRange) -> Vec<u32> {
        let found_count = Arc::new(AtomicUsize::new(0));
        let mut handles: Vec<JoinHandle<ProbeOutcome>> =
            Vec::with_capacity(range.host_count as usize);

        for address in range.iter() {
            let probe = Arc::clone(&self.probe);
            let count_ref = Arc::clone(&found_count);
            let cb_ref = self.on_host_found.clone();
            let timeout = self.timeout;

            let handle = tokio::spawn(async move {
                let outcome = probe_once(probe.as_ref(), address, timeout).await;
                if outcome.reachable {
                    let found = count_ref.fetch_add(1, Ordering::Relaxed) + 1;
                    if let Some(cb) = cb_ref {
                        cb(found);
                    }
                }
                outcome
            });
            handles.push(handle);
        }

        trace!("dispatched {} probes via {}", handles.len(), self.probe.name());

        let mut reachable: BTreeSet<u32> = BTreeSet::new();
        for handle in handles {
            match handle.await {
                Ok(outcome) if outcome.reachable => {
                    reachable.insert(outcome.address);
                }
                Ok(_) => {}
                Err(e) => error!("Probe task failed: {e}"),
            }
        }

        reachable.into_iter().collect()
    }
}

async fn probe_once(probe: &dyn ReachabilityProbe, address: u32, timeout: Duration) -> ProbeOutcome {
    let target = codec::to_addr(address);

    match tokio::time::timeout(timeout, probe.probe(target, timeout)).await {
        Ok(Ok(true)) => {
            debug!("{target} is reachable");
            ProbeOutcome::up(address)
        }
        Ok(Ok(false)) => ProbeOutcome::down(address),
        Ok(Err(e)) => {
            trace!("{target} did not answer: {e:#}");
            ProbeOutcome::down(address)
        }
        Err(_elapsed) => {
            trace!("{target} timed out after {timeout:?}");
            ProbeOutcome::down(address)
        }
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
