//! Slew limiter followed by a moving average.

use crate::{Filter, MovingAverage, SlewRateLimiter};

/// Limits the slew of the input, then averages the limited signal over `N`
/// samples.
///
/// Rejects spikes first and smooths the resulting ramps second. Both stages
/// are owned inline.
///
/// # Example
///
/// ```
/// use ctrlkit_filters::LimitAverage;
///
/// let mut f = LimitAverage::<2>::new(1.0);
/// assert_eq!(f.update(0.0), 0.0);
/// // limiter yields 1.0, average of [0, 1]
/// assert_eq!(f.update(10.0), 0.5);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LimitAverage<const N: usize = 10> {
    limiter: SlewRateLimiter,
    average: MovingAverage<N>,
}

impl<const N: usize> LimitAverage<N> {
    /// Create the composite with a per-tick slew limit.
    pub const fn new(max_delta: f32) -> Self {
        Self {
            limiter: SlewRateLimiter::per_tick(max_delta),
            average: MovingAverage::new(),
        }
    }

    /// Feed one sample through both stages.
    #[inline]
    pub fn update(&mut self, input: f32) -> f32 {
        let limited = self.limiter.update(input);
        self.average.update(limited)
    }

    /// The limiting stage.
    pub fn limiter(&self) -> &SlewRateLimiter {
        &self.limiter
    }

    /// The averaging stage.
    pub fn average(&self) -> &MovingAverage<N> {
        &self.average
    }

    /// Reset both stages.
    pub fn reset(&mut self) {
        self.limiter.reset();
        self.average.reset();
    }
}

impl<const N: usize> Default for LimitAverage<N> {
    fn default() -> Self {
        Self::new(SlewRateLimiter::DEFAULT_MAX_DELTA)
    }
}

impl<const N: usize> Filter for LimitAverage<N> {
    #[inline]
    fn update(&mut self, input: f32) -> f32 {
        LimitAverage::update(self, input)
    }

    fn reset(&mut self) {
        LimitAverage::reset(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_stages_compose() {
        let mut composite = LimitAverage::<3>::new(0.5);
        let mut limiter = SlewRateLimiter::per_tick(0.5);
        let mut average = MovingAverage::<3>::new();

        for x in [0.0, 4.0, 4.0, -2.0, 1.0, 1.0, 1.0] {
            let expected = average.update(limiter.update(x));
            assert_relative_eq!(composite.update(x), expected);
        }
    }

    #[test]
    fn test_spike_is_bounded() {
        let mut f = LimitAverage::<4>::new(0.1);
        for _ in 0..8 {
            f.update(1.0);
        }
        let out = f.update(1000.0);
        assert!(out <= 1.1);
    }

    #[test]
    fn test_reset_clears_both_stages() {
        let mut f = LimitAverage::<4>::default();
        f.update(3.0);
        f.update(5.0);
        f.reset();
        assert!(f.average().is_empty());
        assert_relative_eq!(f.update(-8.0), -8.0);
        assert_relative_eq!(f.limiter().last_value(), -8.0);
    }
}
