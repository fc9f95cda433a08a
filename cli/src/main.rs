mod commands;
mod terminal;

use commands::{CommandLine, Commands, adapters, discover};
use sweepr_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init(commands.verbose, commands.quiet)?;

    let cfg: Config = commands.to_config();
    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Commands::Adapters => {
            print::header("local adapters", cfg.quiet);
            adapters::adapters(&cfg)
        }
        Commands::Discover(args) => {
            print::header("getting ready for discovery", cfg.quiet);
            discover::discover(args.adapter, &cfg).await
        }
    }
}
