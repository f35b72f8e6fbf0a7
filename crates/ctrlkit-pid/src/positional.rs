//! Positional (absolute) PID controller.

use ctrlkit_filters::{Filter, saturate};
use tracing::{debug, trace, warn};

use crate::{Controller, FilterTap, PidConfig, TapPoint};

/// Positional PID: every tick computes the absolute output
/// `P + I + D`, clamped to the output limits.
///
/// Features:
/// - error deadband
/// - integral clamping and back-calculation anti-windup
/// - derivative on error or on measurement
/// - four filter taps (setpoint, feedback, derivative, output)
///
/// A controller obtained from [`Default`] is uninitialized: `update` and the
/// diagnostics return `0.0` and the tuning setters are ignored until
/// [`init`](PositionalPid::init) is called.
///
/// # RT Safety
///
/// `update`, the setters and `reset` never allocate. Binding a filter boxes
/// it once.
///
/// # Example
///
/// ```
/// use ctrlkit_pid::{PidConfig, PositionalPid};
///
/// let mut pid = PositionalPid::new(PidConfig::default().with_gains(2.0, 0.0, 0.0));
/// pid.set_setpoint(10.0);
/// assert_eq!(pid.update(4.0), 12.0);
/// ```
#[derive(Debug)]
pub struct PositionalPid {
    config: PidConfig,
    setpoint: f32,
    feedback: f32,
    error: f32,
    last_error: f32,
    prev_error: f32,
    integral: f32,
    derivative: f32,
    output: f32,
    last_feedback: f32,
    setpoint_filter: FilterTap,
    feedback_filter: FilterTap,
    derivative_filter: FilterTap,
    output_filter: FilterTap,
    initialized: bool,
}

impl Default for PositionalPid {
    fn default() -> Self {
        Self {
            config: PidConfig::default(),
            setpoint: 0.0,
            feedback: 0.0,
            error: 0.0,
            last_error: 0.0,
            prev_error: 0.0,
            integral: 0.0,
            derivative: 0.0,
            output: 0.0,
            last_feedback: 0.0,
            setpoint_filter: FilterTap::new("setpoint"),
            feedback_filter: FilterTap::new("feedback"),
            derivative_filter: FilterTap::new("derivative"),
            output_filter: FilterTap::new("output"),
            initialized: false,
        }
    }
}

impl PositionalPid {
    /// Create an initialized controller.
    pub fn new(config: PidConfig) -> Self {
        debug!(
            kp = config.kp,
            ki = config.ki,
            kd = config.kd,
            dt = config.dt,
            "positional PID initialized"
        );
        Self {
            config,
            initialized: true,
            ..Self::default()
        }
    }

    /// Create an initialized controller with [`PidConfig::default`].
    pub fn with_defaults() -> Self {
        Self::new(PidConfig::default())
    }

    /// (Re)initialize in place with `config`, or the defaults when `None`.
    ///
    /// All state is cleared and attached filters are dropped.
    pub fn init(&mut self, config: Option<&PidConfig>) {
        *self = Self::new(config.copied().unwrap_or_default());
    }

    /// Whether the controller has been initialized.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Active configuration.
    pub fn config(&self) -> &PidConfig {
        &self.config
    }

    /// Replace the three gains.
    pub fn set_gains(&mut self, kp: f32, ki: f32, kd: f32) {
        if !self.initialized {
            return;
        }
        self.config.kp = kp;
        self.config.ki = ki;
        self.config.kd = kd;
    }

    /// Replace the output limits.
    pub fn set_output_limits(&mut self, min: f32, max: f32) {
        if !self.initialized {
            return;
        }
        if min > max {
            warn!(min, max, "inverted output limits; output clamps to one bound");
        }
        self.config.output_min = min;
        self.config.output_max = max;
    }

    /// Replace the integral accumulator limits.
    pub fn set_integral_limits(&mut self, min: f32, max: f32) {
        if !self.initialized {
            return;
        }
        if min > max {
            warn!(min, max, "inverted integral limits; integral clamps to one bound");
        }
        self.config.integral_min = min;
        self.config.integral_max = max;
    }

    /// Set the target, passing it through the setpoint filter if active.
    pub fn set_setpoint(&mut self, setpoint: f32) {
        if !self.initialized {
            return;
        }
        self.setpoint = self.setpoint_filter.apply(setpoint);
    }

    /// Run one control tick.
    pub fn update(&mut self, feedback: f32) -> f32 {
        if !self.initialized {
            return 0.0;
        }
        let cfg = self.config;

        self.feedback = self.feedback_filter.apply(feedback);

        let mut error = self.setpoint - self.feedback;
        if error.abs() < cfg.deadband {
            error = 0.0;
        }
        self.error = error;

        let p_term = cfg.kp * error;

        let i_term = if cfg.ki != 0.0 {
            self.integral = saturate(
                self.integral + error * cfg.dt,
                cfg.integral_min,
                cfg.integral_max,
            );
            cfg.ki * self.integral
        } else {
            0.0
        };

        // With kd = 0 the derivative filter is not fed, so its history is
        // untouched until the gain is raised.
        let d_term = if cfg.kd != 0.0 {
            let raw = if cfg.derivative_on_measurement {
                -(self.feedback - self.last_feedback) / cfg.dt
            } else {
                (error - self.last_error) / cfg.dt
            };
            self.derivative = self.derivative_filter.apply(raw);
            cfg.kd * self.derivative
        } else {
            0.0
        };

        let mut output = p_term + i_term + d_term;

        if cfg.anti_windup && cfg.ki != 0.0 && (output < cfg.output_min || output > cfg.output_max)
        {
            let saturated = saturate(output, cfg.output_min, cfg.output_max);
            self.integral -= (output - saturated) / cfg.ki;
            self.integral = saturate(self.integral, cfg.integral_min, cfg.integral_max);
            trace!(
                unsaturated = output,
                saturated,
                integral = self.integral,
                "output saturated, integral back-calculated"
            );
            output = saturated;
        }

        output = saturate(output, cfg.output_min, cfg.output_max);
        self.output = self.output_filter.apply(output);

        self.prev_error = self.last_error;
        self.last_error = error;
        self.last_feedback = self.feedback;

        self.output
    }

    /// Clear setpoint, history, integral and output.
    ///
    /// Gains, limits and filter bindings are kept; bound filters are reset
    /// so the next tick behaves like the first tick after construction.
    pub fn reset(&mut self) {
        self.setpoint = 0.0;
        self.feedback = 0.0;
        self.error = 0.0;
        self.last_error = 0.0;
        self.prev_error = 0.0;
        self.integral = 0.0;
        self.derivative = 0.0;
        self.output = 0.0;
        self.last_feedback = 0.0;
        for point in TapPoint::ALL {
            self.tap_mut(point).reset();
        }
        debug!("positional PID reset");
    }

    fn tap_mut(&mut self, point: TapPoint) -> &mut FilterTap {
        match point {
            TapPoint::Setpoint => &mut self.setpoint_filter,
            TapPoint::Feedback => &mut self.feedback_filter,
            TapPoint::Derivative => &mut self.derivative_filter,
            TapPoint::Output => &mut self.output_filter,
        }
    }

    /// The filter tap at `point`.
    pub fn tap(&self, point: TapPoint) -> &FilterTap {
        match point {
            TapPoint::Setpoint => &self.setpoint_filter,
            TapPoint::Feedback => &self.feedback_filter,
            TapPoint::Derivative => &self.derivative_filter,
            TapPoint::Output => &self.output_filter,
        }
    }

    /// Bind a boxed filter at `point` and enable it.
    pub fn bind_filter(&mut self, point: TapPoint, filter: Box<dyn Filter>) {
        self.tap_mut(point).bind_boxed(filter);
    }

    /// Enable or disable the filter at `point` without unbinding it.
    pub fn enable_filter(&mut self, point: TapPoint, enabled: bool) {
        self.tap_mut(point).set_enabled(enabled);
    }

    /// Unbind and return the filter at `point`.
    pub fn clear_filter(&mut self, point: TapPoint) -> Option<Box<dyn Filter>> {
        self.tap_mut(point).clear()
    }

    /// Bind a setpoint filter and enable it.
    pub fn set_setpoint_filter<F: Filter + 'static>(&mut self, filter: F) {
        self.setpoint_filter.bind(filter);
    }

    /// Bind a feedback filter and enable it.
    pub fn set_feedback_filter<F: Filter + 'static>(&mut self, filter: F) {
        self.feedback_filter.bind(filter);
    }

    /// Bind a derivative filter and enable it.
    pub fn set_derivative_filter<F: Filter + 'static>(&mut self, filter: F) {
        self.derivative_filter.bind(filter);
    }

    /// Bind an output filter and enable it.
    pub fn set_output_filter<F: Filter + 'static>(&mut self, filter: F) {
        self.output_filter.bind(filter);
    }

    /// Toggle the setpoint filter.
    pub fn enable_setpoint_filter(&mut self, enabled: bool) {
        self.setpoint_filter.set_enabled(enabled);
    }

    /// Toggle the feedback filter.
    pub fn enable_feedback_filter(&mut self, enabled: bool) {
        self.feedback_filter.set_enabled(enabled);
    }

    /// Toggle the derivative filter.
    pub fn enable_derivative_filter(&mut self, enabled: bool) {
        self.derivative_filter.set_enabled(enabled);
    }

    /// Toggle the output filter.
    pub fn enable_output_filter(&mut self, enabled: bool) {
        self.output_filter.set_enabled(enabled);
    }

    /// Unbind the setpoint filter.
    pub fn clear_setpoint_filter(&mut self) -> Option<Box<dyn Filter>> {
        self.setpoint_filter.clear()
    }

    /// Unbind the feedback filter.
    pub fn clear_feedback_filter(&mut self) -> Option<Box<dyn Filter>> {
        self.feedback_filter.clear()
    }

    /// Unbind the derivative filter.
    pub fn clear_derivative_filter(&mut self) -> Option<Box<dyn Filter>> {
        self.derivative_filter.clear()
    }

    /// Unbind the output filter.
    pub fn clear_output_filter(&mut self) -> Option<Box<dyn Filter>> {
        self.output_filter.clear()
    }

    /// Proportional contribution of the last tick, `kp · error`.
    pub fn proportional(&self) -> f32 {
        if !self.initialized {
            return 0.0;
        }
        self.config.kp * self.error
    }

    /// Integral contribution, `ki · integral`.
    pub fn integral(&self) -> f32 {
        if !self.initialized {
            return 0.0;
        }
        self.config.ki * self.integral
    }

    /// Derivative contribution of the last tick, `kd · derivative`.
    pub fn derivative(&self) -> f32 {
        if !self.initialized {
            return 0.0;
        }
        self.config.kd * self.derivative
    }

    /// Raw integral accumulator (before `ki` scaling).
    pub fn integral_state(&self) -> f32 {
        self.integral
    }

    /// Error from the last tick.
    pub fn error(&self) -> f32 {
        self.error
    }

    /// Current target value.
    pub fn setpoint(&self) -> f32 {
        self.setpoint
    }

    /// Filtered feedback from the last tick.
    pub fn feedback(&self) -> f32 {
        self.feedback
    }

    /// Output from the last tick.
    pub fn output(&self) -> f32 {
        self.output
    }
}

impl Controller for PositionalPid {
    fn update(&mut self, feedback: f32) -> f32 {
        PositionalPid::update(self, feedback)
    }

    fn set_setpoint(&mut self, setpoint: f32) {
        PositionalPid::set_setpoint(self, setpoint);
    }

    fn setpoint(&self) -> f32 {
        self.setpoint
    }

    fn output(&self) -> f32 {
        self.output
    }

    fn error(&self) -> f32 {
        self.error
    }

    fn dt(&self) -> f32 {
        self.config.dt
    }

    fn reset(&mut self) {
        PositionalPid::reset(self);
    }
}
