use anyhow::{Context, Result};
use clap::Args;
use kinarm::{
    config::Config,
    host::{Simulation, UnreachablePolicy},
    report::Report,
};
use kinarm_core::{Point, Rig};

#[derive(Args)]
pub struct InverseArgs {
    /// Target x, in model coordinates. Defaults to the configured target.
    #[arg(allow_hyphen_values = true, requires = "y")]
    pub x: Option<f64>,

    /// Target y, in model coordinates (y up).
    #[arg(allow_hyphen_values = true)]
    pub y: Option<f64>,

    /// Resize the first arm before solving.
    #[arg(long)]
    pub arm1_length: Option<f64>,

    /// Resize the second arm before solving.
    #[arg(long)]
    pub arm2_length: Option<f64>,

    /// Override the configured unreachable-target policy.
    #[arg(long, value_enum)]
    pub policy: Option<UnreachablePolicy>,
}

impl InverseArgs {
    pub fn run(&self, config: &Config) -> Result<()> {
        let policy = self.policy.unwrap_or(config.solver.unreachable);
        let rig = config.rig();
        let target = match (self.x, self.y) {
            (Some(x), Some(y)) => Point::new(x, y),
            _ => rig.target,
        };
        let mut simulation = Simulation::new(Rig { target, ..rig }, policy);

        let outcome = if self.arm1_length.is_some() || self.arm2_length.is_some() {
            let arm1_length = self.arm1_length.unwrap_or(rig.arm1.length);
            let arm2_length = self.arm2_length.unwrap_or(rig.arm2.length);
            if arm1_length < 0.0 || arm2_length < 0.0 {
                anyhow::bail!("arm lengths must not be negative");
            }
            simulation.set_lengths(arm1_length, arm2_length)
        } else {
            simulation.set_target(target)
        }
        .with_context(|| format!("cannot reach ({}, {})", target.x, target.y))?;

        tracing::info!(
            "Target ({}, {}): {}",
            target.x,
            target.y,
            outcome.status.name()
        );

        println!("{}", Report::new(simulation.rig()).to_json()?);

        Ok(())
    }
}
