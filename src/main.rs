use clap::Parser;
use monkey::cli::{self, Cli};
use monkey::logger;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);
    cli::run(cli)
}
