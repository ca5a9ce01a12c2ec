use std::io::{self, BufWriter};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rent_cover::cli::{run, Args};

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log))
        .with_writer(io::stderr)
        .init();

    let input = args.read_input()?;
    let stdout = io::stdout();
    run(&args.search_config(), &input, BufWriter::new(stdout.lock()))?;
    Ok(())
}
