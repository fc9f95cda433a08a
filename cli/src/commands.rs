pub mod adapters;
pub mod discover;

use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand};
use sweepr_common::config::{Config, DEFAULT_MAX_HOSTS, DEFAULT_TCP_PORT, ProbeMethod};

#[derive(Parser)]
#[command(name = "sweepr")]
#[command(about = "Find the live hosts on your local subnet.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Less output, repeat to print addresses only
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// More log output, repeat for trace
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Never prompt, use the first adapter when none is given
    #[arg(long, global = true)]
    pub disable_input: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the adapters that can be swept
    #[command(alias = "a")]
    Adapters,
    /// Discover the reachable hosts on an adapter's subnet
    #[command(alias = "d")]
    Discover(DiscoverArgs),
}

#[derive(Args)]
pub struct DiscoverArgs {
    /// Adapter to sweep, asked for when omitted
    pub adapter: Option<String>,

    /// Per-host timeout in milliseconds
    #[arg(short, long, default_value_t = 1_000)]
    pub timeout: u64,

    /// Refuse subnets with more hosts than this
    #[arg(long, default_value_t = DEFAULT_MAX_HOSTS)]
    pub max_hosts: u32,

    /// Probe method: auto, icmp or tcp
    #[arg(short, long, default_value_t = ProbeMethod::Auto)]
    pub method: ProbeMethod,

    /// Port used by the tcp probe
    #[arg(short, long, default_value_t = DEFAULT_TCP_PORT)]
    pub port: u16,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        let mut cfg = Config {
            no_banner: self.no_banner,
            quiet: self.quiet,
            disable_input: self.disable_input,
            ..Config::default()
        };

        if let Commands::Discover(args) = &self.command {
            cfg.timeout = Duration::from_millis(args.timeout);
            cfg.max_hosts = args.max_hosts;
            cfg.method = args.method;
            cfg.port = args.port;
        }

        cfg
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
