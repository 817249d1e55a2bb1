mod commands;
mod terminal;

use commands::{CommandLine, adapters, monitor};
use pingr_common::config::Config;
use pingr_common::network::interface::NetworkAdapter;
use pingr_core::system::SystemRepo;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg: Config = commands.config();

    logging::init_logging()?;
    print::banner(cfg.no_banner);

    let adapters: Vec<NetworkAdapter> = adapters::discover(&SystemRepo);
    adapters::show(&adapters);

    monitor::monitor(&commands, &adapters).await?;

    print::end_of_program();
    Ok(())
}
