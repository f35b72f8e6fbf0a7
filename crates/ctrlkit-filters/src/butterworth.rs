//! Second-order Butterworth low-pass (biquad implementation).
//!
//! Coefficients come from the bilinear transform with frequency pre-warping,
//! so the -3 dB point lands exactly on the requested cutoff.

use core::f32::consts::{PI, SQRT_2};

use crate::Filter;

/// Second-order Butterworth low-pass filter.
///
/// Direct Form I with three-sample input and output histories. The first
/// sample after construction or reset fills both histories so the filter
/// starts in steady state at that value instead of ringing up from zero.
///
/// Coefficients are computed once in [`new`](Butterworth::new); build a new
/// filter to change the cutoff.
///
/// # RT Safety
///
/// - No heap allocations
/// - O(1) time complexity
/// - Bounded execution time
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Butterworth {
    /// Numerator `[b0, b1, b2]`
    b: [f32; 3],
    /// Denominator `[1, a1, a2]`
    a: [f32; 3],
    /// Inputs `x[n], x[n-1], x[n-2]`
    x: [f32; 3],
    /// Outputs `y[n], y[n-1], y[n-2]`
    y: [f32; 3],
    initialized: bool,
}

impl Butterworth {
    /// Default cutoff frequency (Hz).
    pub const DEFAULT_CUTOFF_HZ: f32 = 10.0;
    /// Default sample rate (Hz).
    pub const DEFAULT_SAMPLE_HZ: f32 = 100.0;

    /// Design a low-pass with cutoff `cutoff_hz` for a loop running at
    /// `sample_hz`.
    ///
    /// The cutoff must lie in `(0, sample_hz / 2)`; outside that band the
    /// coefficients are meaningless. [`FilterSpec`](crate::FilterSpec)
    /// checks this before construction.
    ///
    /// # Example
    ///
    /// ```
    /// use ctrlkit_filters::Butterworth;
    ///
    /// let bw = Butterworth::new(10.0, 100.0);
    /// assert!(bw.is_stable());
    /// assert!((bw.dc_gain() - 1.0).abs() < 1e-5);
    /// ```
    pub fn new(cutoff_hz: f32, sample_hz: f32) -> Self {
        let omega = (PI * cutoff_hz / sample_hz).tan();
        let omega2 = omega * omega;
        let d = 1.0 + SQRT_2 * omega + omega2;

        Self {
            b: [omega2 / d, 2.0 * omega2 / d, omega2 / d],
            a: [
                1.0,
                2.0 * (omega2 - 1.0) / d,
                (1.0 - SQRT_2 * omega + omega2) / d,
            ],
            x: [0.0; 3],
            y: [0.0; 3],
            initialized: false,
        }
    }

    /// Feed one sample.
    #[inline]
    pub fn update(&mut self, input: f32) -> f32 {
        if !self.initialized {
            self.x = [input; 3];
            self.y = [input; 3];
            self.initialized = true;
            return input;
        }

        let [x0, x1, _] = self.x;
        self.x = [input, x0, x1];
        let [y0, y1, _] = self.y;

        let [b0, b1, b2] = self.b;
        let [_, a1, a2] = self.a;
        let [xn, xn1, xn2] = self.x;
        let output = b0 * xn + b1 * xn1 + b2 * xn2 - a1 * y0 - a2 * y1;

        self.y = [output, y0, y1];
        output
    }

    /// Numerator and denominator coefficients `(b, a)`, with `a[0] = 1`.
    pub fn coefficients(&self) -> ([f32; 3], [f32; 3]) {
        (self.b, self.a)
    }

    /// Gain at 0 Hz implied by the coefficients; unity for a valid design.
    pub fn dc_gain(&self) -> f32 {
        let [b0, b1, b2] = self.b;
        let [a0, a1, a2] = self.a;
        (b0 + b1 + b2) / (a0 + a1 + a2)
    }

    /// Whether both poles lie strictly inside the unit circle.
    pub fn is_stable(&self) -> bool {
        let [_, a1, a2] = self.a;
        a2.abs() < 1.0 && a1.abs() < 1.0 + a2
    }

    /// Clear both histories; the next sample reseeds.
    pub fn reset(&mut self) {
        self.x = [0.0; 3];
        self.y = [0.0; 3];
        self.initialized = false;
    }
}

impl Default for Butterworth {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CUTOFF_HZ, Self::DEFAULT_SAMPLE_HZ)
    }
}

impl Filter for Butterworth {
    #[inline]
    fn update(&mut self, input: f32) -> f32 {
        Butterworth::update(self, input)
    }

    fn reset(&mut self) {
        Butterworth::reset(self);
    }
}
