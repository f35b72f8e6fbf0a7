//! Controller tuning parameters.

use ctrlkit_errors::{ValidationError, ValidationResult, validate_finite, validate_ordered};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Gains, limits and behavior flags shared by both controller forms.
///
/// The incremental controller reads only the gains, `dt` and the output
/// limits; the remaining fields apply to [`PositionalPid`](crate::PositionalPid).
///
/// Missing fields deserialize to their defaults, so a profile only needs to
/// name what it changes:
///
/// ```
/// use ctrlkit_pid::PidConfig;
///
/// let cfg: PidConfig = serde_json::from_str(r#"{"kp": 2.5, "ki": 0.4}"#)?;
/// assert_eq!(cfg.kd, 0.0);
/// assert!(cfg.anti_windup);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PidConfig {
    /// Proportional gain
    pub kp: f32,
    /// Integral gain
    pub ki: f32,
    /// Derivative gain
    pub kd: f32,
    /// Sample period in seconds
    pub dt: f32,
    /// Lower output limit
    pub output_min: f32,
    /// Upper output limit
    pub output_max: f32,
    /// Lower bound of the integral accumulator (before `ki` scaling)
    pub integral_min: f32,
    /// Upper bound of the integral accumulator (before `ki` scaling)
    pub integral_max: f32,
    /// Errors with magnitude below this are treated as zero
    pub deadband: f32,
    /// Back-calculate the integral when the output saturates
    pub anti_windup: bool,
    /// Differentiate the feedback instead of the error
    pub derivative_on_measurement: bool,
}

impl Default for PidConfig {
    fn default() -> Self {
        Self {
            kp: 1.0,
            ki: 0.0,
            kd: 0.0,
            dt: 0.01,
            output_min: -1000.0,
            output_max: 1000.0,
            integral_min: -500.0,
            integral_max: 500.0,
            deadband: 0.0,
            anti_windup: true,
            derivative_on_measurement: false,
        }
    }
}

impl PidConfig {
    /// Replace the three gains.
    pub fn with_gains(mut self, kp: f32, ki: f32, kd: f32) -> Self {
        self.kp = kp;
        self.ki = ki;
        self.kd = kd;
        self
    }

    /// Replace the sample period.
    pub fn with_dt(mut self, dt: f32) -> Self {
        self.dt = dt;
        self
    }

    /// Replace the output limits.
    pub fn with_output_limits(mut self, min: f32, max: f32) -> Self {
        self.output_min = min;
        self.output_max = max;
        self
    }

    /// Replace the integral accumulator limits.
    pub fn with_integral_limits(mut self, min: f32, max: f32) -> Self {
        self.integral_min = min;
        self.integral_max = max;
        self
    }

    /// Replace the error deadband.
    pub fn with_deadband(mut self, deadband: f32) -> Self {
        self.deadband = deadband;
        self
    }

    /// Toggle back-calculation anti-windup.
    pub fn with_anti_windup(mut self, enabled: bool) -> Self {
        self.anti_windup = enabled;
        self
    }

    /// Toggle derivative-on-measurement.
    pub fn with_derivative_on_measurement(mut self, enabled: bool) -> Self {
        self.derivative_on_measurement = enabled;
        self
    }

    /// Default per-tick increment limit for the incremental form: 10 % of
    /// the output span.
    pub fn default_delta_limit(&self) -> f32 {
        (self.output_max - self.output_min) * 0.1
    }

    /// Check that a controller built from this configuration can run.
    ///
    /// Controllers accept any configuration; this is the gate the profile
    /// loader and the CLI apply before building one. `ki == 0` with
    /// anti-windup enabled is legal (anti-windup is simply inert) and only
    /// logged.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for non-finite values, a non-positive
    /// `dt`, inverted limits or a negative deadband.
    pub fn validate(&self) -> ValidationResult {
        validate_finite!("kp", self.kp);
        validate_finite!("ki", self.ki);
        validate_finite!("kd", self.kd);
        validate_finite!("dt", self.dt);
        validate_finite!("output_min", self.output_min);
        validate_finite!("output_max", self.output_max);
        validate_finite!("integral_min", self.integral_min);
        validate_finite!("integral_max", self.integral_max);
        validate_finite!("deadband", self.deadband);

        if self.dt <= 0.0 {
            return Err(ValidationError::out_of_range(
                "dt",
                self.dt,
                f32::MIN_POSITIVE,
                f32::MAX,
            ));
        }
        validate_ordered!("output", self.output_min, self.output_max);
        validate_ordered!("integral", self.integral_min, self.integral_max);
        if self.deadband < 0.0 {
            return Err(ValidationError::out_of_range(
                "deadband",
                self.deadband,
                0.0,
                f32::MAX,
            ));
        }

        if self.anti_windup && self.ki == 0.0 {
            warn!(
                kp = self.kp,
                kd = self.kd,
                "anti-windup enabled with ki = 0; back-calculation will never run"
            );
        }
        Ok(())
    }
}
