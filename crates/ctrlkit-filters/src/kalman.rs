//! Scalar Kalman filter for a constant-value process.

use crate::Filter;

/// One-dimensional Kalman filter with a static process model.
///
/// Predict: `P += Q`. Correct: `K = P / (P + R)`, `x += K·(z − x)`,
/// `P = (1 − K)·P`.
///
/// `Q` is the process noise (how quickly the true value may drift) and `R`
/// the measurement noise. `P + R` must stay positive; [`FilterSpec`] rejects
/// `R <= 0` for that reason.
///
/// [`FilterSpec`]: crate::FilterSpec
///
/// # RT Safety
///
/// - No heap allocations
/// - O(1) time complexity
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Kalman {
    q: f32,
    r: f32,
    p: f32,
    k: f32,
    x: f32,
    initialized: bool,
}

impl Kalman {
    /// Default process noise.
    pub const DEFAULT_Q: f32 = 0.01;
    /// Default measurement noise.
    pub const DEFAULT_R: f32 = 0.1;

    /// Create a filter that seeds its estimate from the first measurement.
    pub const fn new(q: f32, r: f32) -> Self {
        Self {
            q,
            r,
            p: 1.0,
            k: 0.0,
            x: 0.0,
            initialized: false,
        }
    }

    /// Create a filter already seeded with `initial` as its estimate.
    ///
    /// # Example
    ///
    /// ```
    /// use ctrlkit_filters::Kalman;
    ///
    /// let mut kf = Kalman::with_initial(0.01, 0.1, 0.0);
    /// let x = kf.update(1.0);
    /// assert!(x > 0.0 && x < 1.0);
    /// ```
    pub const fn with_initial(q: f32, r: f32, initial: f32) -> Self {
        Self {
            q,
            r,
            p: 1.0,
            k: 0.0,
            x: initial,
            initialized: true,
        }
    }

    /// Fold one measurement into the estimate.
    #[inline]
    pub fn update(&mut self, measurement: f32) -> f32 {
        if !self.initialized {
            self.x = measurement;
            self.initialized = true;
            return measurement;
        }
        self.p += self.q;
        self.k = self.p / (self.p + self.r);
        self.x += self.k * (measurement - self.x);
        self.p *= 1.0 - self.k;
        self.x
    }

    /// Change the noise parameters without disturbing the estimate.
    pub fn set_params(&mut self, q: f32, r: f32) {
        self.q = q;
        self.r = r;
    }

    /// Process noise `Q`.
    pub fn process_noise(&self) -> f32 {
        self.q
    }

    /// Measurement noise `R`.
    pub fn measurement_noise(&self) -> f32 {
        self.r
    }

    /// Current estimate.
    pub fn estimate(&self) -> f32 {
        self.x
    }

    /// Kalman gain from the last correction.
    pub fn gain(&self) -> f32 {
        self.k
    }

    /// Current error covariance.
    pub fn covariance(&self) -> f32 {
        self.p
    }

    /// Restore `P = 1`, `K = 0`, `x = 0`; the next measurement reseeds.
    pub fn reset(&mut self) {
        self.p = 1.0;
        self.k = 0.0;
        self.x = 0.0;
        self.initialized = false;
    }
}

impl Default for Kalman {
    fn default() -> Self {
        Self::new(Self::DEFAULT_Q, Self::DEFAULT_R)
    }
}

impl Filter for Kalman {
    #[inline]
    fn update(&mut self, input: f32) -> f32 {
        Kalman::update(self, input)
    }

    fn reset(&mut self) {
        Kalman::reset(self);
    }
}
