use anyhow::Result;
use clap::Args;
use xshell::{Shell, cmd};

const TARGETS: &[&str] = &[
    "kinematics::inverse::tests::round_trip_property",
    "kinematics::inverse::tests::never_returns_nan",
];

#[derive(Args)]
pub struct Fuzz {
    /// Property test to fuzz; all of them when omitted
    target: Option<String>,

    /// How long to fuzz each target, e.g. `30s` or `5m`
    #[arg(long, default_value = "60s")]
    time: String,
}

impl Fuzz {
    pub fn run(&self, sh: &Shell) -> Result<()> {
        if cmd!(sh, "cargo bolero --version").quiet().run().is_err() {
            eprintln!("Installing cargo-bolero...");
            cmd!(sh, "cargo install cargo-bolero --locked").run()?;
        }

        let targets = match &self.target {
            Some(target) => vec![target.as_str()],
            None => TARGETS.to_vec(),
        };

        let time = &self.time;
        for target in targets {
            eprintln!("Fuzzing {target} for {time}...");
            cmd!(
                sh,
                "cargo bolero test --package kinarm-core --time {time} {target}"
            )
            .run()?;
        }

        Ok(())
    }
}
