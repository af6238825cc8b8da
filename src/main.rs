//! Fixed-depth alpha-beta chess bot speaking UCI on stdin/stdout.

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use minimax_bot::{SearchConfig, UCI};

#[derive(Parser, Debug)]
#[command(version, about = "Fixed-depth alpha-beta chess bot (UCI)")]
struct Args {
    /// TOML file with search settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Search depth in plies, overrides the config file
    #[arg(short, long)]
    depth: Option<u8>,
}

fn main() -> anyhow::Result<()> {
    // stdout carries the protocol, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => SearchConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => SearchConfig::default(),
    };
    if let Some(depth) = args.depth {
        config.depth = depth;
    }
    config.validate()?;
    tracing::info!(?config, "starting");

    let mut uci = UCI::new(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    uci.run(stdin.lock(), &mut stdout)?;
    Ok(())
}
