//! The `Filter` trait and the slot type controllers use to hold one.
//!
//! Controllers expose injection points (setpoint, feedback, derivative,
//! output) that may or may not carry a filter. A [`FilterSlot`] is that
//! injection point: it owns an optional boxed filter and forwards samples to
//! it, or returns them untouched when nothing is bound.

use core::fmt;

/// Common interface for every single-input single-output filter.
///
/// # RT Safety
///
/// Implementations must not allocate, block or perform I/O in `update` or
/// `reset`. Both are called from the control tick.
pub trait Filter: fmt::Debug + Send {
    /// Feed one sample and return the filtered value.
    fn update(&mut self, input: f32) -> f32;

    /// Return the filter to its freshly constructed (unseeded) state.
    ///
    /// Parameters such as coefficients and limits are preserved.
    fn reset(&mut self);
}

impl<F: Filter + ?Sized> Filter for Box<F> {
    #[inline]
    fn update(&mut self, input: f32) -> f32 {
        (**self).update(input)
    }

    #[inline]
    fn reset(&mut self) {
        (**self).reset();
    }
}

/// Adapter turning a closure into a [`Filter`].
///
/// Useful for binding ad-hoc transfer functions (scaling, offsets, a filter
/// from another crate) without writing a dedicated type. `reset` is a no-op
/// because the closure's captured state is opaque.
///
/// # Example
///
/// ```
/// use ctrlkit_filters::prelude::*;
///
/// let mut half = FnFilter::new(|x: f32| x * 0.5);
/// assert_eq!(half.update(4.0), 2.0);
/// ```
pub struct FnFilter<F> {
    func: F,
}

impl<F> FnFilter<F>
where
    F: FnMut(f32) -> f32 + Send,
{
    /// Wrap `func` as a filter.
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> fmt::Debug for FnFilter<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnFilter").finish_non_exhaustive()
    }
}

impl<F> Filter for FnFilter<F>
where
    F: FnMut(f32) -> f32 + Send,
{
    #[inline]
    fn update(&mut self, input: f32) -> f32 {
        (self.func)(input)
    }

    fn reset(&mut self) {}
}

/// An optional, owned filter.
///
/// Binding a filter boxes it once; every later `apply` is a virtual call with
/// no allocation. An empty slot is a pass-through.
///
/// # Example
///
/// ```
/// use ctrlkit_filters::prelude::*;
///
/// let mut slot = FilterSlot::empty();
/// assert_eq!(slot.apply(3.0), 3.0);
///
/// slot.set(LowPass::new(0.5));
/// assert_eq!(slot.apply(10.0), 10.0);
/// assert_eq!(slot.apply(20.0), 15.0);
/// ```
#[derive(Debug, Default)]
pub struct FilterSlot {
    filter: Option<Box<dyn Filter>>,
}

impl FilterSlot {
    /// A slot with nothing bound.
    pub const fn empty() -> Self {
        Self { filter: None }
    }

    /// A slot holding `filter`.
    pub fn new<F: Filter + 'static>(filter: F) -> Self {
        Self {
            filter: Some(Box::new(filter)),
        }
    }

    /// Bind `filter`, replacing (and dropping) any previous one.
    pub fn set<F: Filter + 'static>(&mut self, filter: F) {
        self.filter = Some(Box::new(filter));
    }

    /// Bind an already boxed filter.
    pub fn set_boxed(&mut self, filter: Box<dyn Filter>) {
        self.filter = Some(filter);
    }

    /// Unbind the current filter and hand it back.
    pub fn clear(&mut self) -> Option<Box<dyn Filter>> {
        self.filter.take()
    }

    /// Whether a filter is bound.
    pub fn is_bound(&self) -> bool {
        self.filter.is_some()
    }

    /// Borrow the bound filter.
    pub fn get(&self) -> Option<&dyn Filter> {
        self.filter.as_deref()
    }

    /// Run `input` through the bound filter, or return it unchanged.
    #[inline]
    pub fn apply(&mut self, input: f32) -> f32 {
        match self.filter.as_mut() {
            Some(filter) => filter.update(input),
            None => input,
        }
    }

    /// Reset the bound filter, if any.
    pub fn reset(&mut self) {
        if let Some(filter) = self.filter.as_mut() {
            filter.reset();
        }
    }
}

impl Filter for FilterSlot {
    #[inline]
    fn update(&mut self, input: f32) -> f32 {
        self.apply(input)
    }

    fn reset(&mut self) {
        FilterSlot::reset(self);
    }
}

impl From<Box<dyn Filter>> for FilterSlot {
    fn from(filter: Box<dyn Filter>) -> Self {
        Self {
            filter: Some(filter),
        }
    }
}
