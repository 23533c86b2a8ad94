use anyhow::{Context, Result};
use clap::Args;
use kinarm::{
    config::Config,
    host::{Simulation, UnreachablePolicy},
    report::TraceRecord,
    trace::read_events,
};
use std::{
    fs::File,
    io::{self, BufReader, Write},
    path::PathBuf,
};

#[derive(Args)]
pub struct TraceArgs {
    /// File of pointer events in screen pixels; `-` or omitted reads stdin.
    pub input: Option<PathBuf>,

    /// Override the configured unreachable-target policy.
    #[arg(long, value_enum)]
    pub policy: Option<UnreachablePolicy>,
}

impl TraceArgs {
    pub fn run(&self, config: &Config) -> Result<()> {
        let events = match &self.input {
            Some(path) if path.as_os_str() != "-" => {
                let file = File::open(path)
                    .with_context(|| format!("failed to open {}", path.display()))?;
                read_events(BufReader::new(file))
                    .with_context(|| format!("failed to parse {}", path.display()))?
            }
            _ => read_events(io::stdin().lock())?,
        };

        tracing::info!("Replaying {} pointer events", events.len());

        let policy = self.policy.unwrap_or(config.solver.unreachable);
        let mut simulation = Simulation::new(config.rig(), policy);
        let mut stdout = io::stdout().lock();

        for screen in events {
            let target = config.viewport.to_model(screen);
            let record = match simulation.set_target(target) {
                Ok(outcome) => TraceRecord::new(screen, target, &outcome, simulation.rig()),
                Err(error) => {
                    TraceRecord::rejected(screen, target, error.to_string(), simulation.rig())
                }
            };
            serde_json::to_writer(&mut stdout, &record)?;
            writeln!(stdout)?;
        }

        Ok(())
    }
}
