use anyhow::Result;
use clap::Args;
use kinarm::{config::Config, report::Report};

#[derive(Args)]
pub struct ForwardArgs {
    /// Override the first arm's angle, in radians.
    #[arg(long, allow_hyphen_values = true)]
    pub arm1_angle: Option<f64>,

    /// Override the second arm's angle (relative to the first), in radians.
    #[arg(long, allow_hyphen_values = true)]
    pub arm2_angle: Option<f64>,
}

impl ForwardArgs {
    pub fn run(&self, config: &Config) -> Result<()> {
        let rig = config.rig();
        let rig = rig.with_angles(
            self.arm1_angle.unwrap_or(rig.arm1.angle),
            self.arm2_angle.unwrap_or(rig.arm2.angle),
        );

        println!("{}", Report::new(&rig).to_json()?);

        Ok(())
    }
}
