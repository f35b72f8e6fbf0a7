//! First-order exponential low-pass filter.

use crate::Filter;

/// Exponential smoothing: `y = α·x + (1 − α)·y_prev`.
///
/// The first sample after construction or [`reset`](LowPass::reset) seeds the
/// state and is returned unchanged, so the output never ramps up from zero.
///
/// # RT Safety
///
/// - No heap allocations
/// - O(1) time complexity
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LowPass {
    /// Smoothing factor in `(0, 1]`; 1 disables smoothing.
    pub alpha: f32,
    last_output: f32,
    initialized: bool,
}

impl LowPass {
    /// Default smoothing factor.
    pub const DEFAULT_ALPHA: f32 = 0.2;

    /// Create an unseeded low-pass filter.
    ///
    /// # Example
    ///
    /// ```
    /// use ctrlkit_filters::LowPass;
    ///
    /// let mut lp = LowPass::new(0.5);
    /// assert_eq!(lp.update(10.0), 10.0);
    /// assert_eq!(lp.update(20.0), 15.0);
    /// ```
    pub const fn new(alpha: f32) -> Self {
        Self {
            alpha,
            last_output: 0.0,
            initialized: false,
        }
    }

    /// Feed one sample.
    #[inline]
    pub fn update(&mut self, input: f32) -> f32 {
        if !self.initialized {
            self.last_output = input;
            self.initialized = true;
            return input;
        }
        self.last_output = self.alpha * input + (1.0 - self.alpha) * self.last_output;
        self.last_output
    }

    /// Most recent output.
    pub fn last_output(&self) -> f32 {
        self.last_output
    }

    /// Whether the first sample has been seen.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Clear the state; the next sample reseeds.
    pub fn reset(&mut self) {
        self.last_output = 0.0;
        self.initialized = false;
    }
}

impl Default for LowPass {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ALPHA)
    }
}

impl Filter for LowPass {
    #[inline]
    fn update(&mut self, input: f32) -> f32 {
        LowPass::update(self, input)
    }

    fn reset(&mut self) {
        LowPass::reset(self);
    }
}
