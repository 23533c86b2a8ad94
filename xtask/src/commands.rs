use anyhow::Result;
use clap::Subcommand;
use xshell::Shell;

pub mod ci;
pub mod common;
pub mod fuzz;
pub mod precommit;

#[derive(Subcommand)]
pub enum Command {
    /// Run CI checks (fmt, clippy, test). Runs all if no subcommand specified.
    Ci(ci::Ci),
    /// Apply rustfmt to all files
    Fmt,
    /// Run the kinematics property tests under a fuzzing engine
    Fuzz(fuzz::Fuzz),
    /// Run precommit checks (rustfmt check, clippy, core tests)
    Precommit(precommit::Precommit),
}

impl Command {
    pub fn run(self, sh: &Shell) -> Result<()> {
        match self {
            Command::Ci(cmd) => cmd.run(sh),
            Command::Fmt => common::run_fmt(sh),
            Command::Fuzz(cmd) => cmd.run(sh),
            Command::Precommit(cmd) => cmd.run(sh),
        }
    }
}
