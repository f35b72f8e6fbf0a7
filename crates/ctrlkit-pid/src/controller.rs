//! The interface both controller forms share.

use core::fmt;

/// Signal path positions where a filter can be attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TapPoint {
    /// Applied once per `set_setpoint` call
    Setpoint,
    /// Applied to every feedback sample
    Feedback,
    /// Applied to the raw derivative (positional form only)
    Derivative,
    /// Applied to the clamped output
    Output,
}

impl TapPoint {
    /// All tap points, in signal-flow order.
    pub const ALL: [TapPoint; 4] = [
        TapPoint::Setpoint,
        TapPoint::Feedback,
        TapPoint::Derivative,
        TapPoint::Output,
    ];

    /// Lower-case label used in logs and profile keys.
    pub fn as_str(self) -> &'static str {
        match self {
            TapPoint::Setpoint => "setpoint",
            TapPoint::Feedback => "feedback",
            TapPoint::Derivative => "derivative",
            TapPoint::Output => "output",
        }
    }
}

impl fmt::Display for TapPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A feedback controller driven once per control tick.
///
/// Implemented by [`PositionalPid`](crate::PositionalPid) and
/// [`IncrementalPid`](crate::IncrementalPid) so loops and simulations can be
/// written against either form.
pub trait Controller: fmt::Debug + Send {
    /// Run one tick with the latest measurement and return the new output.
    fn update(&mut self, feedback: f32) -> f32;

    /// Change the target value.
    fn set_setpoint(&mut self, setpoint: f32);

    /// Current (filtered) target value.
    fn setpoint(&self) -> f32;

    /// Output produced by the last tick.
    fn output(&self) -> f32;

    /// Error from the last tick.
    fn error(&self) -> f32;

    /// Sample period in seconds.
    fn dt(&self) -> f32;

    /// Clear dynamic state, keeping configuration and filters.
    fn reset(&mut self);
}
