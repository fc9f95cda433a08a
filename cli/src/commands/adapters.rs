use sweepr_common::config::Config;
use sweepr_common::network::adapter::AdapterInfo;
use sweepr_common::system::AdapterDirectory;
use sweepr_core::system::SystemRepo;

use crate::sprint;
use crate::terminal::{format, print};

pub fn adapters(cfg: &Config) -> anyhow::Result<()> {
    let adapters: Vec<AdapterInfo> = SystemRepo.adapters()?;

    if adapters.is_empty() {
        print::no_results();
        anyhow::bail!("no operational IPv4 adapters found");
    }

    print_adapters(&adapters, cfg);
    Ok(())
}

pub fn print_adapters(adapters: &[AdapterInfo], cfg: &Config) {
    for (idx, adapter) in adapters.iter().enumerate() {
        if cfg.quiet > 1 {
            print::print(&adapter.name);
            continue;
        }

        print::tree_head(idx, &adapter.name);
        print::as_tree_one_level(format::adapter_to_details(adapter));
        if idx + 1 != adapters.len() {
            sprint!();
        }
    }
}
