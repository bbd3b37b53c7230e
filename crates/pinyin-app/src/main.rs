use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod check;
mod convert;
mod merge;
mod settings;


#[derive(Parser, Debug)]
#[clap(name = "pinyin", version, about = "Chinese to pinyin conversion")]
struct Cli {
    /// Config file (JSON). Replaces environment settings when given.
    #[clap(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// Converts text given as arguments or read from stdin
    Convert(convert::Args),

    /// Validates a dictionary file and prints its size
    Check(check::Args),

    /// Adds entries from one dictionary source to another
    Merge(merge::Args),
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = settings::load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Convert(args) => convert::run(args, &config),
        Command::Check(args) => check::run(args),
        Command::Merge(args) => merge::run(args),
    }
}
