//! Incremental (velocity-form) PID controller.

use ctrlkit_filters::{Filter, saturate};
use tracing::{debug, trace, warn};

use crate::{Controller, FilterTap, PidConfig, TapPoint};

/// Default per-tick increment limit when no configuration is supplied.
pub const DEFAULT_DELTA_LIMIT: f32 = 100.0;

/// Incremental PID: every tick computes an output *change*
///
/// `Δ = kp·(e − e₁) + ki·e·dt + kd·(e − 2e₁ + e₂)/dt`
///
/// clamps it to `±delta_limit`, and accumulates it into the output. Because
/// the integral lives in the output itself, clamping the output is all the
/// anti-windup this form needs. There is no deadband and no derivative tap.
///
/// A controller obtained from [`Default`] is uninitialized and inert until
/// [`init`](IncrementalPid::init) is called.
///
/// # Example
///
/// ```
/// use ctrlkit_pid::{IncrementalPid, PidConfig};
///
/// let cfg = PidConfig::default().with_output_limits(-10.0, 10.0);
/// let mut pid = IncrementalPid::new(cfg);
/// assert_eq!(pid.delta_limit(), 2.0);
///
/// pid.set_setpoint(100.0);
/// assert_eq!(pid.update(0.0), 2.0);
/// assert_eq!(pid.update(0.0), 2.0);
/// ```
#[derive(Debug)]
pub struct IncrementalPid {
    kp: f32,
    ki: f32,
    kd: f32,
    dt: f32,
    output_min: f32,
    output_max: f32,
    delta_limit: f32,
    setpoint: f32,
    feedback: f32,
    error: f32,
    last_error: f32,
    prev_error: f32,
    delta: f32,
    output: f32,
    setpoint_filter: FilterTap,
    feedback_filter: FilterTap,
    output_filter: FilterTap,
    initialized: bool,
}

impl Default for IncrementalPid {
    fn default() -> Self {
        let cfg = PidConfig::default();
        Self {
            kp: cfg.kp,
            ki: cfg.ki,
            kd: cfg.kd,
            dt: cfg.dt,
            output_min: cfg.output_min,
            output_max: cfg.output_max,
            delta_limit: DEFAULT_DELTA_LIMIT,
            setpoint: 0.0,
            feedback: 0.0,
            error: 0.0,
            last_error: 0.0,
            prev_error: 0.0,
            delta: 0.0,
            output: 0.0,
            setpoint_filter: FilterTap::new("setpoint"),
            feedback_filter: FilterTap::new("feedback"),
            output_filter: FilterTap::new("output"),
            initialized: false,
        }
    }
}

impl IncrementalPid {
    /// Create an initialized controller; the increment limit is 10 % of the
    /// output span.
    pub fn new(config: PidConfig) -> Self {
        Self::with_delta_limit(config, config.default_delta_limit())
    }

    /// Create an initialized controller with an explicit increment limit.
    pub fn with_delta_limit(config: PidConfig, delta_limit: f32) -> Self {
        if delta_limit < 0.0 {
            warn!(delta_limit, "negative increment limit; every increment will pin to it");
        }
        debug!(
            kp = config.kp,
            ki = config.ki,
            kd = config.kd,
            dt = config.dt,
            delta_limit,
            "incremental PID initialized"
        );
        Self {
            kp: config.kp,
            ki: config.ki,
            kd: config.kd,
            dt: config.dt,
            output_min: config.output_min,
            output_max: config.output_max,
            delta_limit,
            initialized: true,
            ..Self::default()
        }
    }

    /// Create an initialized controller with default gains and limits and an
    /// increment limit of [`DEFAULT_DELTA_LIMIT`].
    pub fn with_defaults() -> Self {
        Self::with_delta_limit(PidConfig::default(), DEFAULT_DELTA_LIMIT)
    }

    /// (Re)initialize in place. All state is cleared and filters dropped.
    pub fn init(&mut self, config: Option<&PidConfig>) {
        *self = match config {
            Some(cfg) => Self::new(*cfg),
            None => Self::with_defaults(),
        };
    }

    /// Whether the controller has been initialized.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Replace the three gains.
    pub fn set_gains(&mut self, kp: f32, ki: f32, kd: f32) {
        if !self.initialized {
            return;
        }
        self.kp = kp;
        self.ki = ki;
        self.kd = kd;
    }

    /// Replace the output limits. The increment limit is left unchanged.
    pub fn set_output_limits(&mut self, min: f32, max: f32) {
        if !self.initialized {
            return;
        }
        if min > max {
            warn!(min, max, "inverted output limits; output clamps to one bound");
        }
        self.output_min = min;
        self.output_max = max;
    }

    /// Replace the per-tick increment limit.
    pub fn set_delta_limit(&mut self, delta_limit: f32) {
        if !self.initialized {
            return;
        }
        if delta_limit < 0.0 {
            warn!(delta_limit, "negative increment limit; every increment will pin to it");
        }
        self.delta_limit = delta_limit;
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

        self.feedback = self.feedback_filter.apply(feedback);
        let error = self.setpoint - self.feedback;
        self.error = error;

        let delta_p = self.kp * (error - self.last_error);
        let delta_i = self.ki * error * self.dt;
        let delta_d = self.kd * (error - 2.0 * self.last_error + self.prev_error) / self.dt;
        let raw = delta_p + delta_i + delta_d;

        self.delta = saturate(raw, -self.delta_limit, self.delta_limit);
        if raw.abs() > self.delta_limit {
            trace!(raw, limited = self.delta, "increment limited");
        }

        let output = saturate(
            self.output + self.delta,
            self.output_min,
            self.output_max,
        );
        self.output = self.output_filter.apply(output);

        self.prev_error = self.last_error;
        self.last_error = error;

        self.output
    }

    /// Clear setpoint, error history, increment and output.
    ///
    /// Gains, limits and filter bindings are kept; bound filters are reset.
    pub fn reset(&mut self) {
        self.setpoint = 0.0;
        self.feedback = 0.0;
        self.error = 0.0;
        self.last_error = 0.0;
        self.prev_error = 0.0;
        self.delta = 0.0;
        self.output = 0.0;
        self.setpoint_filter.reset();
        self.feedback_filter.reset();
        self.output_filter.reset();
        debug!("incremental PID reset");
    }

    fn tap_mut(&mut self, point: TapPoint) -> Option<&mut FilterTap> {
        match point {
            TapPoint::Setpoint => Some(&mut self.setpoint_filter),
            TapPoint::Feedback => Some(&mut self.feedback_filter),
            TapPoint::Output => Some(&mut self.output_filter),
            TapPoint::Derivative => None,
        }
    }

    /// The filter tap at `point`; `None` for [`TapPoint::Derivative`].
    pub fn tap(&self, point: TapPoint) -> Option<&FilterTap> {
        match point {
            TapPoint::Setpoint => Some(&self.setpoint_filter),
            TapPoint::Feedback => Some(&self.feedback_filter),
            TapPoint::Output => Some(&self.output_filter),
            TapPoint::Derivative => None,
        }
    }

    /// Bind a boxed filter at `point` and enable it.
    ///
    /// The incremental form has no derivative path; a derivative filter is
    /// dropped with a warning.
    pub fn bind_filter(&mut self, point: TapPoint, filter: Box<dyn Filter>) {
        match self.tap_mut(point) {
            Some(tap) => tap.bind_boxed(filter),
            None => warn!(tap = %point, "incremental PID has no such filter tap; filter dropped"),
        }
    }

    /// Enable or disable the filter at `point` without unbinding it.
    pub fn enable_filter(&mut self, point: TapPoint, enabled: bool) {
        if let Some(tap) = self.tap_mut(point) {
            tap.set_enabled(enabled);
        }
    }

    /// Unbind and return the filter at `point`.
    pub fn clear_filter(&mut self, point: TapPoint) -> Option<Box<dyn Filter>> {
        self.tap_mut(point).and_then(FilterTap::clear)
    }

    /// Bind a setpoint filter and enable it.
    pub fn set_setpoint_filter<F: Filter + 'static>(&mut self, filter: F) {
        self.setpoint_filter.bind(filter);
    }

    /// Bind a feedback filter and enable it.
    pub fn set_feedback_filter<F: Filter + 'static>(&mut self, filter: F) {
        self.feedback_filter.bind(filter);
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

    /// Unbind the output filter.
    pub fn clear_output_filter(&mut self) -> Option<Box<dyn Filter>> {
        self.output_filter.clear()
    }

    /// Increment applied on the last tick (after limiting).
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Output from the last tick.
    pub fn output(&self) -> f32 {
        self.output
    }

    /// Error from the last tick.
    pub fn error(&self) -> f32 {
        self.error
    }

    /// Current target value.
    pub fn setpoint(&self) -> f32 {
        self.setpoint
    }

    /// Per-tick increment limit.
    pub fn delta_limit(&self) -> f32 {
        self.delta_limit
    }

    /// Gains as `(kp, ki, kd)`.
    pub fn gains(&self) -> (f32, f32, f32) {
        (self.kp, self.ki, self.kd)
    }

    /// Output limits as `(min, max)`.
    pub fn output_limits(&self) -> (f32, f32) {
        (self.output_min, self.output_max)
    }
}

impl Controller for IncrementalPid {
    fn update(&mut self, feedback: f32) -> f32 {
        IncrementalPid::update(self, feedback)
    }

    fn set_setpoint(&mut self, setpoint: f32) {
        IncrementalPid::set_setpoint(self, setpoint);
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
        self.dt
    }

    fn reset(&mut self) {
        IncrementalPid::reset(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ctrlkit_filters::{FnFilter, LowPass};
    use ctrlkit_test_helpers::logging::capture_logs;

    #[test]
    fn test_delta_limit_defaults() {
        assert_relative_eq!(IncrementalPid::with_defaults().delta_limit(), 100.0);
        let pid = IncrementalPid::new(PidConfig::default());
        assert_relative_eq!(pid.delta_limit(), 200.0);
        let mut pid = IncrementalPid::default();
        pid.init(None);
        assert_relative_eq!(pid.delta_limit(), 100.0);
    }

    #[test]
    fn test_init_log_reports_effective_delta_limit() {
        let (pid, logs) = capture_logs(IncrementalPid::with_defaults);
        assert_relative_eq!(pid.delta_limit(), DEFAULT_DELTA_LIMIT);
        assert!(logs.contains("delta_limit=100.0"), "{logs}");
        assert!(!logs.contains("delta_limit=200.0"), "{logs}");

        let (pid, logs) =
            capture_logs(|| IncrementalPid::with_delta_limit(PidConfig::default(), 3.5));
        assert_relative_eq!(pid.delta_limit(), 3.5);
        assert!(logs.contains("delta_limit=3.5"), "{logs}");
    }

    #[test]
    fn test_proportional_increment() {
        let mut pid = IncrementalPid::with_defaults();
        pid.set_setpoint(5.0);
        // Δ = kp·(5 − 0)
        assert_relative_eq!(pid.update(0.0), 5.0);
        assert_relative_eq!(pid.delta(), 5.0);
        // error unchanged, no further increment
        assert_relative_eq!(pid.update(0.0), 5.0);
        assert_relative_eq!(pid.delta(), 0.0);
    }

    #[test]
    fn test_integral_increment() {
        let cfg = PidConfig::default().with_gains(0.0, 2.0, 0.0).with_dt(0.5);
        let mut pid = IncrementalPid::new(cfg);
        pid.set_setpoint(1.0);
        assert_relative_eq!(pid.update(0.0), 1.0);
        assert_relative_eq!(pid.update(0.0), 2.0);
    }

    #[test]
    fn test_derivative_increment() {
        let cfg = PidConfig::default().with_gains(0.0, 0.0, 1.0).with_dt(1.0);
        let mut pid = IncrementalPid::new(cfg);
        pid.set_setpoint(1.0);
        // e = 1, e1 = 0, e2 = 0 -> Δ = 1
        assert_relative_eq!(pid.update(0.0), 1.0);
        // e = 1, e1 = 1, e2 = 0 -> Δ = -1
        assert_relative_eq!(pid.update(0.0), 0.0);
        // e = 1, e1 = 1, e2 = 1 -> Δ = 0
        assert_relative_eq!(pid.update(0.0), 0.0);
    }

    #[test]
    fn test_increment_limited() {
        let mut pid = IncrementalPid::with_defaults();
        pid.set_delta_limit(0.5);
        pid.set_setpoint(10.0);
        assert_relative_eq!(pid.update(0.0), 0.5);
        assert_relative_eq!(pid.delta(), 0.5);
        pid.set_setpoint(-10.0);
        assert_relative_eq!(pid.update(0.0), 0.0);
        assert_relative_eq!(pid.delta(), -0.5);
    }

    #[test]
    fn test_output_clamped() {
        let cfg = PidConfig::default()
            .with_gains(0.0, 100.0, 0.0)
            .with_dt(1.0)
            .with_output_limits(-3.0, 3.0);
        let mut pid = IncrementalPid::new(cfg);
        pid.set_setpoint(1.0);
        for _ in 0..10 {
            pid.update(0.0);
        }
        assert_relative_eq!(pid.output(), 3.0);
        pid.set_output_limits(-1.0, 1.0);
        assert_relative_eq!(pid.update(0.0), 1.0);
        assert_eq!(pid.output_limits(), (-1.0, 1.0));
    }

    #[test]
    fn test_uninitialized_is_inert() {
        let mut pid = IncrementalPid::default();
        pid.set_setpoint(1.0);
        pid.set_delta_limit(1.0);
        assert_relative_eq!(pid.update(0.0), 0.0);
        assert_relative_eq!(pid.delta_limit(), 100.0);
        assert!(!pid.is_initialized());
    }

    #[test]
    fn test_filters() {
        let mut pid = IncrementalPid::with_defaults();
        pid.set_setpoint_filter(FnFilter::new(|x: f32| x * 2.0));
        pid.set_feedback_filter(FnFilter::new(|x: f32| x - 1.0));
        pid.set_output_filter(LowPass::new(1.0));
        pid.set_setpoint(2.0);
        assert_relative_eq!(pid.setpoint(), 4.0);
        // feedback 1 -> 0, error 4
        assert_relative_eq!(pid.update(1.0), 4.0);

        pid.enable_feedback_filter(false);
        pid.enable_setpoint_filter(false);
        assert!(pid.clear_output_filter().is_some());
        assert!(pid.clear_setpoint_filter().is_some());
        assert!(pid.clear_feedback_filter().is_some());
        pid.enable_output_filter(true);
        // error 4 -> 3, output 4 - 1
        assert_relative_eq!(pid.update(1.0), 3.0);
    }

    #[test]
    fn test_derivative_tap_does_not_exist() {
        let mut pid = IncrementalPid::with_defaults();
        pid.bind_filter(TapPoint::Derivative, Box::new(LowPass::default()));
        assert!(pid.tap(TapPoint::Derivative).is_none());
        assert!(pid.clear_filter(TapPoint::Derivative).is_none());
        pid.bind_filter(TapPoint::Feedback, Box::new(LowPass::default()));
        assert!(pid.tap(TapPoint::Feedback).is_some_and(FilterTap::is_active));
    }

    #[test]
    fn test_reset_keeps_tuning() {
        let mut pid = IncrementalPid::with_defaults();
        pid.set_gains(2.0, 0.1, 0.0);
        pid.set_setpoint(3.0);
        pid.update(1.0);
        pid.reset();
        assert_relative_eq!(pid.output(), 0.0);
        assert_relative_eq!(pid.setpoint(), 0.0);
        assert_relative_eq!(pid.delta(), 0.0);
        assert_eq!(pid.gains(), (2.0, 0.1, 0.0));
    }
}
