use anyhow::Result;
use clap::Args;
use xshell::{Shell, cmd};

use super::common;

#[derive(Args)]
pub struct Precommit {
    /// Skip the kinematics unit tests
    #[arg(long)]
    no_test: bool,
}

impl Precommit {
    pub fn run(&self, sh: &Shell) -> Result<()> {
        common::run_fmt_check(sh)?;
        common::run_clippy(sh)?;

        if !self.no_test {
            eprintln!("Running kinarm-core tests...");
            cmd!(sh, "cargo test --package kinarm-core").run()?;
        }

        eprintln!("Precommit checks passed!");
        Ok(())
    }
}
