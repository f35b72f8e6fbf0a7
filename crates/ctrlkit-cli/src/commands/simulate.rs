//! Closed-loop simulation against a first-order plant

use anyhow::Result;
use ctrlkit_pid::{Controller, ControllerProfile};
use serde::Serialize;
use tracing::{debug, info};

use crate::commands::{Mode, SimulateArgs};
use crate::error::CliError;
use crate::output;

/// First-order lag: `y += dt·(gain·u − y)/tau`.
#[derive(Debug, Clone, Copy)]
pub struct FirstOrderPlant {
    gain: f32,
    tau: f32,
    output: f32,
}

impl FirstOrderPlant {
    pub fn new(gain: f32, tau: f32) -> Self {
        Self {
            gain,
            tau,
            output: 0.0,
        }
    }

    pub fn output(&self) -> f32 {
        self.output
    }

    /// Advance one tick with actuation `u` and return the new output.
    pub fn step(&mut self, u: f32, dt: f32) -> f32 {
        self.output += dt * (self.gain * u - self.output) / self.tau;
        self.output
    }
}

/// One simulated tick.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SimulationRow {
    pub tick: u32,
    pub time: f32,
    pub setpoint: f32,
    pub feedback: f32,
    pub output: f32,
    pub error: f32,
}

/// Drive `controller` against `plant` for `ticks` ticks.
///
/// Each row records the measurement the controller saw and the actuation it
/// produced in response.
pub fn run(
    controller: &mut dyn Controller,
    plant: &mut FirstOrderPlant,
    setpoint: f32,
    ticks: u32,
) -> Vec<SimulationRow> {
    let dt = controller.dt();
    controller.set_setpoint(setpoint);

    (0..ticks)
        .map(|tick| {
            let feedback = plant.output();
            let output = controller.update(feedback);
            plant.step(output, dt);
            SimulationRow {
                tick,
                time: tick as f32 * dt,
                setpoint: controller.setpoint(),
                feedback,
                output,
                error: controller.error(),
            }
        })
        .collect()
}

fn check_plant(args: &SimulateArgs) -> Result<(), CliError> {
    if !args.plant_gain.is_finite() {
        return Err(CliError::InvalidArgument(format!(
            "plant gain must be finite, got {}",
            args.plant_gain
        )));
    }
    if !(args.plant_tau.is_finite() && args.plant_tau > 0.0) {
        return Err(CliError::InvalidArgument(format!(
            "plant time constant must be positive, got {}",
            args.plant_tau
        )));
    }
    if !args.setpoint.is_finite() {
        return Err(CliError::InvalidArgument(format!(
            "setpoint must be finite, got {}",
            args.setpoint
        )));
    }
    Ok(())
}

pub fn execute(args: &SimulateArgs, json: bool) -> Result<()> {
    check_plant(args)?;

    let path = args.profile.display().to_string();
    let profile = ControllerProfile::load(&args.profile)
        .map_err(|e| CliError::from_profile_load(&path, e))?;

    let built = match args.mode {
        Mode::Positional => profile
            .build_positional()
            .map(|pid| Box::new(pid) as Box<dyn Controller>),
        Mode::Incremental => profile
            .build_incremental()
            .map(|pid| Box::new(pid) as Box<dyn Controller>),
    };
    let mut controller = built.map_err(|source| CliError::InvalidProfile {
        path: path.clone(),
        source,
    })?;
    debug!(profile = %path, mode = args.mode.as_str(), "controller built");

    let mut plant = FirstOrderPlant::new(args.plant_gain, args.plant_tau);
    let rows = run(controller.as_mut(), &mut plant, args.setpoint, args.ticks);
    info!(
        ticks = args.ticks,
        final_output = plant.output(),
        "simulation complete"
    );

    output::print_simulation(&rows, args.mode, plant.output(), json)
}
