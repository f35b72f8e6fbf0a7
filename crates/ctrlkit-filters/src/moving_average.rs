//! Fixed-window moving average.

use crate::Filter;

/// Arithmetic mean of the last `N` samples.
///
/// Backed by an inline ring buffer and a running sum, so each update is O(1)
/// regardless of the window length. Until `N` samples have been seen the mean
/// covers only the samples received so far.
///
/// # RT Safety
///
/// - No heap allocations (`[f32; N]` lives inline)
/// - O(1) time complexity
///
/// # Example
///
/// ```
/// use ctrlkit_filters::MovingAverage;
///
/// let mut avg = MovingAverage::<4>::new();
/// assert_eq!(avg.update(4.0), 4.0);
/// assert_eq!(avg.update(8.0), 6.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MovingAverage<const N: usize = 10> {
    buffer: [f32; N],
    index: usize,
    count: usize,
    sum: f32,
}

impl<const N: usize> MovingAverage<N> {
    const NON_EMPTY: () = assert!(N > 0, "moving average window must hold at least one sample");

    /// Create an empty window.
    pub const fn new() -> Self {
        let () = Self::NON_EMPTY;
        Self {
            buffer: [0.0; N],
            index: 0,
            count: 0,
            sum: 0.0,
        }
    }

    /// Window length.
    pub const fn window(&self) -> usize {
        N
    }

    /// Number of valid samples, saturating at `N`.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether no samples have been seen since construction or reset.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Push a sample, evicting the oldest once the window is full.
    #[inline]
    pub fn update(&mut self, input: f32) -> f32 {
        if let Some(slot) = self.buffer.get_mut(self.index) {
            self.sum -= *slot;
            *slot = input;
            self.sum += input;
        }
        self.index = (self.index + 1) % N;
        if self.count < N {
            self.count += 1;
        }
        self.sum / self.count as f32
    }

    /// Clear the window.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl<const N: usize> Default for MovingAverage<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Filter for MovingAverage<N> {
    #[inline]
    fn update(&mut self, input: f32) -> f32 {
        MovingAverage::update(self, input)
    }

    fn reset(&mut self) {
        MovingAverage::reset(self);
    }
}
