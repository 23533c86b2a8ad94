use crate::{host::UnreachablePolicy, viewport::Viewport};
use anyhow::{Context, Result};
use kinarm_core::{Arm, Point, Rig};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Initial state of the simulated arm and its display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Canvas size and screen placement
    #[serde(default)]
    pub viewport: Viewport,

    /// Base of the first arm, in model coordinates
    #[serde(default = "default_origin")]
    pub origin: Point,

    /// First arm; its angle is absolute
    #[serde(default = "default_arm1")]
    pub arm1: Arm,

    /// Second arm; its angle is relative to the first arm
    #[serde(default = "default_arm2")]
    pub arm2: Arm,

    /// Initial end effector target, in model coordinates
    #[serde(default = "default_target")]
    pub target: Point,

    /// Inverse kinematics behavior
    #[serde(default)]
    pub solver: SolverConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Policy for targets that cannot be solved
    #[serde(default)]
    pub unreachable: UnreachablePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            origin: default_origin(),
            arm1: default_arm1(),
            arm2: default_arm2(),
            target: default_target(),
            solver: SolverConfig::default(),
        }
    }
}

// 10% across and 35% up the default 600x300 canvas
fn default_origin() -> Point {
    Point::new(60.0, 105.0)
}

fn default_arm1() -> Arm {
    Arm::new(225.0, 0.5)
}

fn default_arm2() -> Arm {
    Arm::new(200.0, 5.0)
}

fn default_target() -> Point {
    Point::new(450.0, 50.0)
}

impl Config {
    /// Load configuration from a file, auto-detecting TOML or JSON format
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;

        let extension = path.extension().and_then(|s| s.to_str());

        match extension {
            Some("toml") => Self::from_toml(&content),
            Some("json") => Self::from_json(&content),
            _ => Self::from_toml(&content).or_else(|_| Self::from_json(&content)),
        }
    }

    /// Load the file at `path` if given, otherwise use the defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("failed to parse config as TOML")
    }

    /// Parse configuration from JSON string
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("failed to parse config as JSON")
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let viewport = &self.viewport;
        for (name, value) in [
            ("viewport.width", viewport.width),
            ("viewport.height", viewport.height),
            ("viewport.scale", viewport.scale),
        ] {
            if !(value.is_finite() && value > 0.0) {
                anyhow::bail!("{name} must be a positive number, got {value}");
            }
        }

        for (name, value) in [
            ("viewport.left", viewport.left),
            ("viewport.top", viewport.top),
            ("origin.x", self.origin.x),
            ("origin.y", self.origin.y),
            ("arm1.angle", self.arm1.angle),
            ("arm2.angle", self.arm2.angle),
            ("target.x", self.target.x),
            ("target.y", self.target.y),
        ] {
            if !value.is_finite() {
                anyhow::bail!("{name} must be a finite number, got {value}");
            }
        }

        for (name, value) in [
            ("arm1.length", self.arm1.length),
            ("arm2.length", self.arm2.length),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                anyhow::bail!("{name} must be a non-negative number, got {value}");
            }
        }

        Ok(())
    }

    /// The rig described by this configuration, angles as configured
    pub fn rig(&self) -> Rig {
        Rig::new(self.origin, self.arm1, self.arm2, self.target)
    }
}
