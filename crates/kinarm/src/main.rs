use anyhow::Result;
use clap::{Parser, Subcommand};
use kinarm::config::Config;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match &cli.log {
        Some(directives) => EnvFilter::try_new(directives)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Command::Forward(args) => args.run(&config),
        Command::Inverse(args) => args.run(&config),
        Command::Trace(args) => args.run(&config),
        Command::Range(args) => args.run(&config),
    }
}

#[derive(Parser)]
#[command(name = "kinarm", about = "Two-link planar arm kinematics")]
struct Cli {
    /// Path to the configuration file (TOML or JSON).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter directives, e.g. `debug` or `kinarm=trace`.
    ///
    /// Defaults to `RUST_LOG`, then `warn`.
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print joint positions for the configured angles.
    Forward(cli::forward::ForwardArgs),
    /// Solve joint angles for a target point and print the resulting pose.
    Inverse(cli::inverse::InverseArgs),
    /// Replay recorded pointer events, printing one JSON line per event.
    Trace(cli::trace::TraceArgs),
    /// Print the reachable range indicators.
    Range(cli::range::RangeArgs),
}
