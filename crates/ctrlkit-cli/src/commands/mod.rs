//! Command implementations for loopctl

pub mod filter;
pub mod simulate;
pub mod validate;

use std::path::PathBuf;

use clap::{Args, ValueEnum};

/// Which controller form to build from a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
    /// Absolute (positional) PID
    #[default]
    Positional,
    /// Velocity-form (incremental) PID
    Incremental,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Positional => "positional",
            Mode::Incremental => "incremental",
        }
    }
}

#[derive(Debug, Args)]
pub struct SimulateArgs {
    /// Controller profile (.json, .yaml or .yml)
    #[arg(short, long)]
    pub profile: PathBuf,

    /// Target value for the plant output
    #[arg(short, long, allow_negative_numbers = true)]
    pub setpoint: f32,

    /// Number of control ticks to run
    #[arg(short, long, default_value_t = 100)]
    pub ticks: u32,

    /// Controller form
    #[arg(short, long, value_enum, default_value_t = Mode::Positional)]
    pub mode: Mode,

    /// Steady-state gain of the simulated plant
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub plant_gain: f32,

    /// Time constant of the simulated plant in seconds
    #[arg(long, default_value_t = 1.0)]
    pub plant_tau: f32,
}

#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Filter spec as JSON, e.g. '{"kind": "low_pass", "alpha": 0.5}'
    #[arg(long)]
    pub spec: String,

    /// Samples to run through the filter, in order
    #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
    pub samples: Vec<f32>,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Controller profile (.json, .yaml or .yml)
    #[arg(short, long)]
    pub profile: PathBuf,

    /// Also check that the profile builds an incremental controller
    #[arg(long)]
    pub incremental: bool,
}
