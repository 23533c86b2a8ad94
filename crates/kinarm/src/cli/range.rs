use anyhow::Result;
use clap::Args;
use kinarm::{config::Config, report::RangeReport};

#[derive(Args)]
pub struct RangeArgs {}

impl RangeArgs {
    pub fn run(&self, config: &Config) -> Result<()> {
        let range = RangeReport::new(&config.rig(), &config.viewport);
        println!("{}", serde_json::to_string_pretty(&range)?);
        Ok(())
    }
}
