//! Slew Rate Limiter
//!
//! This module provides a slew rate limiter that restricts how far the output
//! may move between two consecutive samples, turning steps into ramps.

use crate::Filter;

/// Slew rate limiter.
///
/// Each update moves the output toward the input by at most `max_delta`. The
/// first sample after construction or reset is accepted as-is and becomes the
/// starting point.
///
/// # RT Safety
///
/// - No heap allocations
/// - O(1) time complexity
/// - Bounded execution time
///
/// # Example
///
/// ```
/// use ctrlkit_filters::SlewRateLimiter;
///
/// let mut limiter = SlewRateLimiter::per_tick(1.0);
/// assert_eq!(limiter.update(0.0), 0.0);
/// assert_eq!(limiter.update(10.0), 1.0);
/// assert_eq!(limiter.update(10.0), 2.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SlewRateLimiter {
    /// Maximum change per sample tick
    pub max_delta: f32,
    last_value: f32,
    initialized: bool,
}

impl SlewRateLimiter {
    /// Default per-tick limit.
    pub const DEFAULT_MAX_DELTA: f32 = 1.0;

    /// Create a limiter with a per-tick limit directly.
    ///
    /// # Arguments
    ///
    /// * `max_delta` - Maximum change per sample tick
    pub const fn per_tick(max_delta: f32) -> Self {
        Self {
            max_delta,
            last_value: 0.0,
            initialized: false,
        }
    }

    /// Create a limiter from a rate in units per second.
    ///
    /// # Arguments
    ///
    /// * `rate` - Maximum rate of change per second
    /// * `sample_hz` - Loop frequency the limiter is updated at
    pub fn per_second(rate: f32, sample_hz: f32) -> Self {
        Self::per_tick(rate / sample_hz)
    }

    /// Create an unlimited slew rate (bypass).
    pub const fn unlimited() -> Self {
        Self::per_tick(f32::MAX)
    }

    /// Feed one sample.
    #[inline]
    pub fn update(&mut self, input: f32) -> f32 {
        if !self.initialized {
            self.last_value = input;
            self.initialized = true;
            return input;
        }

        let delta = input - self.last_value;
        if delta > self.max_delta {
            self.last_value += self.max_delta;
        } else if delta < -self.max_delta {
            self.last_value -= self.max_delta;
        } else {
            self.last_value = input;
        }
        self.last_value
    }

    /// Most recent accepted output.
    pub fn last_value(&self) -> f32 {
        self.last_value
    }

    /// Forget the last output; the next sample passes through.
    pub fn reset(&mut self) {
        self.last_value = 0.0;
        self.initialized = false;
    }
}

impl Default for SlewRateLimiter {
    fn default() -> Self {
        Self::per_tick(Self::DEFAULT_MAX_DELTA)
    }
}

impl Filter for SlewRateLimiter {
    #[inline]
    fn update(&mut self, input: f32) -> f32 {
        SlewRateLimiter::update(self, input)
    }

    fn reset(&mut self) {
        SlewRateLimiter::reset(self);
    }
}
