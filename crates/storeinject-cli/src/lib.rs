pub mod commands;
pub mod handlers;

use clap::Parser;

use commands::Cli;
use handlers::InjectHandler;

pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    storeinject_logger::init_logger(cli.quiet);

    InjectHandler::handle_inject(cli.source_dir, cli.debug)
}
