use clap::Parser;
use std::path::PathBuf;

use storeinject_constants::{BIN_NAME, DESCRIPTION, VERSION};

#[derive(Parser, Debug)]
#[command(name = BIN_NAME)]
#[command(version = VERSION)]
#[command(about = DESCRIPTION, long_about = None)]
#[command(
    after_help = "Runs as a postinstall step: finds the nearest node_modules, installs the store files into @adiwajshing/baileys/lib/Store and re-exports makeInMemoryStore from the package entry."
)]
pub struct Cli {
    /// Only print errors
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
    /// Enable debug mode for verbose output
    #[arg(long)]
    pub debug: bool,
    /// Directory holding the bundled store files (defaults to the executable's directory)
    #[arg(long = "source-dir", value_name = "DIR")]
    pub source_dir: Option<PathBuf>,
}
