//! climrr: resolve climate projection questions from the command line.
//!
//! Prints one JSON document per invocation on stdout; logs go to stderr.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use climrr_cli::{CliConfig, Command, run};

#[derive(Debug, Parser)]
#[command(name = "climrr", version, about)]
struct Cli {
    /// TOML config file. Environment variables override it.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // ── Load config ─────────────────────────────────────────────
    let config = match &cli.config {
        Some(path) => CliConfig::from_file(path)?.apply_env()?,
        None => CliConfig::from_env()?,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr);
    if config.json_logs {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        max_turns = config.max_turns,
        "climrr starting"
    );

    let output = run(cli.command, &config)?;
    let rendered = if config.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{rendered}");

    Ok(())
}
