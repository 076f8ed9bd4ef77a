mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{export, legend, render, series, share};
use tracing_subscriber::EnvFilter;

/// Log level from the `-v` count, unless `RUST_LOG` is set.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match &cli.command {
        Commands::Render(args) => render::run(&cli, args),
        Commands::Series(args) => series::run(&cli, args),
        Commands::Share(args) => share::run(&cli, args),
        Commands::Legend(args) => legend::run(&cli, args),
        Commands::Export(args) => export::run(&cli, args),
        #[cfg(feature = "download")]
        Commands::Fetch(args) => commands::fetch::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
