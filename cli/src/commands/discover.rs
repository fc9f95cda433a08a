use std::time::Duration;

use anyhow::anyhow;
use colored::*;
use tracing::info;

use sweepr_common::config::Config;
use sweepr_common::network::adapter::AdapterInfo;
use sweepr_common::network::range;
use sweepr_common::scanning::ScanResult;
use sweepr_common::system::AdapterDirectory;
use sweepr_core::discovery::DiscoveryService;
use sweepr_core::system::SystemRepo;

use crate::commands::adapters::print_adapters;
use crate::sprint;
use crate::terminal::{colors, input, print, spinner};

pub async fn discover(name: Option<String>, cfg: &Config) -> anyhow::Result<()> {
    let adapters: Vec<AdapterInfo> = SystemRepo.adapters()?;
    let adapter: AdapterInfo = choose_adapter(&adapters, name.as_deref(), cfg)?;

    if cfg.quiet < 2 {
        print::print_status(format!("Sweeping {adapter}"));
    }

    let service = DiscoveryService::from_config(cfg)?
        .with_progress(Box::new(spinner::report_discovery_progress));

    let host_count: u32 = range::host_count(adapter.prefix_length).unwrap_or(0);
    spinner::start_discovery_spinner(host_count, cfg.quiet);
    let result = service.run_scan(&adapter).await;
    spinner::finish();

    discovery_ends(&result?, cfg);
    Ok(())
}

/// Picks the adapter to sweep: by name, the only one, the first one when
/// input is disabled, or whatever the user selects.
fn choose_adapter(
    adapters: &[AdapterInfo],
    name: Option<&str>,
    cfg: &Config,
) -> anyhow::Result<AdapterInfo> {
    if let Some(name) = name {
        return find_adapter(adapters, name);
    }

    match adapters {
        [] => anyhow::bail!("no operational IPv4 adapters found"),
        [only] => Ok(only.clone()),
        [first, ..] if cfg.disable_input => {
            info!("Input disabled, using first adapter {first}");
            Ok(first.clone())
        }
        _ => {
            print::header("available adapters", cfg.quiet);
            print_adapters(adapters, cfg);
            let idx: usize = input::prompt_index(adapters.len())?;
            Ok(adapters[idx].clone())
        }
    }
}

fn find_adapter(adapters: &[AdapterInfo], name: &str) -> anyhow::Result<AdapterInfo> {
    adapters
        .iter()
        .find(|adapter| adapter.name == name)
        .cloned()
        .ok_or_else(|| {
            let available: Vec<&str> = adapters.iter().map(|a| a.name.as_str()).collect();
            anyhow!("unknown adapter '{name}' (available: {})", available.join(", "))
        })
}

fn discovery_ends(result: &ScanResult, cfg: &Config) {
    if result.is_empty() {
        no_hosts_found(cfg);
        return;
    }

    if cfg.quiet > 1 {
        for addr in result.addresses() {
            print::print(&addr);
        }
        return;
    }

    if cfg.quiet > 0 {
        sprint!();
    }

    print::header("Network Discovery", cfg.quiet);
    for (idx, addr) in result.addresses().iter().enumerate() {
        print::tree_head(idx, addr);
    }
    print_summary(result.len(), result.probed, result.elapsed, cfg);
}

fn no_hosts_found(cfg: &Config) {
    if cfg.quiet > 1 {
        return;
    }
    print::header("ZERO HOSTS DETECTED", cfg.quiet);
    print::no_results();
}

fn print_summary(hosts_len: usize, probed: u32, total_time: Duration, cfg: &Config) {
    let active_hosts: ColoredString = format!("{hosts_len}/{probed} hosts").bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: ColoredString = format!("Discovery Complete: {active_hosts} reachable in {total_time}")
        .color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output.to_string());
        }
        _ => {
            sprint!();
            info!("{}", output)
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
