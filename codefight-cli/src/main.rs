use anyhow::Result;
use clap::Parser;
use codefight_cli::{run, Cli, Shell};
use std::io;
use tracing::info;

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let mut shell = Shell::new(cli.arena_config()?, cli.display_config()?);
    info!(size = cli.size, "Starting Codefight shell");

    let stdin = io::stdin();
    run(&mut shell, stdin.lock(), &mut io::stdout(), &mut io::stderr())?;
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}
