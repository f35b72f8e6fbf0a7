//! Fixed-window median filter.

use crate::Filter;

/// Running median of the last `M` samples.
///
/// Each update copies the valid part of the ring buffer into a stack scratch
/// array and sorts it, so the cost is O(M log M) with no allocation. For an
/// even number of valid samples the upper median is returned. NaN samples
/// sort after every number (IEEE total order) rather than poisoning the
/// comparison.
///
/// # Example
///
/// ```
/// use ctrlkit_filters::Median;
///
/// let mut med = Median::<3>::new();
/// med.update(1.0);
/// med.update(100.0);
/// assert_eq!(med.update(2.0), 2.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Median<const M: usize = 5> {
    buffer: [f32; M],
    index: usize,
    count: usize,
}

impl<const M: usize> Median<M> {
    const NON_EMPTY: () = assert!(M > 0, "median window must hold at least one sample");

    /// Create an empty window.
    pub const fn new() -> Self {
        let () = Self::NON_EMPTY;
        Self {
            buffer: [0.0; M],
            index: 0,
            count: 0,
        }
    }

    /// Window length.
    pub const fn window(&self) -> usize {
        M
    }

    /// Number of valid samples, saturating at `M`.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether no samples have been seen since construction or reset.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Push a sample and return the median of the valid window.
    #[inline]
    pub fn update(&mut self, input: f32) -> f32 {
        if let Some(slot) = self.buffer.get_mut(self.index) {
            *slot = input;
        }
        self.index = (self.index + 1) % M;
        if self.count < M {
            self.count += 1;
        }

        // Until the window fills, the valid samples are the prefix [0, count).
        let mut scratch = [0.0_f32; M];
        let (Some(sorted), Some(valid)) = (
            scratch.get_mut(..self.count),
            self.buffer.get(..self.count),
        ) else {
            return input;
        };
        sorted.copy_from_slice(valid);
        sorted.sort_unstable_by(f32::total_cmp);
        sorted.get(self.count / 2).copied().unwrap_or(input)
    }

    /// Clear the window.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl<const M: usize> Default for Median<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const M: usize> Filter for Median<M> {
    #[inline]
    fn update(&mut self, input: f32) -> f32 {
        Median::update(self, input)
    }

    fn reset(&mut self) {
        Median::reset(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ramp_through_default_window() {
        let mut med = Median::<5>::new();
        let outputs: Vec<f32> = [1.0, 2.0, 3.0, 4.0, 5.0]
            .into_iter()
            .map(|x| med.update(x))
            .collect();
        assert_eq!(outputs, vec![1.0, 2.0, 2.0, 3.0, 3.0]);
    }

    #[test]
    fn test_rejects_single_spike() {
        let mut med = Median::<5>::default();
        for _ in 0..5 {
            med.update(1.0);
        }
        assert_relative_eq!(med.update(1000.0), 1.0);
        assert_relative_eq!(med.update(1.0), 1.0);
    }

    #[test]
    fn test_wraps_after_window_fills() {
        let mut med = Median::<3>::new();
        med.update(9.0);
        med.update(8.0);
        med.update(7.0);
        // 9 is evicted, window is [1, 8, 7]
        assert_relative_eq!(med.update(1.0), 7.0);
        assert_eq!(med.len(), 3);
    }

    #[test]
    fn test_nan_does_not_panic() {
        let mut med = Median::<3>::new();
        med.update(1.0);
        med.update(f32::NAN);
        let out = med.update(2.0);
        assert_relative_eq!(out, 2.0);
    }

    #[test]
    fn test_reset_empties_window() {
        let mut med = Median::<3>::new();
        med.update(5.0);
        med.reset();
        assert!(med.is_empty());
        assert_relative_eq!(med.update(-2.0), -2.0);
    }
}
