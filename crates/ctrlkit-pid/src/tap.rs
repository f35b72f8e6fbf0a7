//! Filter injection points on a controller signal path.

use ctrlkit_filters::{Filter, FilterSlot};
use tracing::debug;

/// A [`FilterSlot`] plus an enable flag.
///
/// A tap only filters when a filter is bound *and* the tap is enabled, so a
/// filter can be switched out of the path without losing its binding.
#[derive(Debug, Default)]
pub struct FilterTap {
    name: &'static str,
    slot: FilterSlot,
    enabled: bool,
}

impl FilterTap {
    /// An empty, disabled tap labelled `name` in logs.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            slot: FilterSlot::empty(),
            enabled: false,
        }
    }

    /// Bind `filter` and enable the tap.
    pub fn bind<F: Filter + 'static>(&mut self, filter: F) {
        debug!(tap = self.name, filter = ?filter, "binding filter");
        self.slot.set(filter);
        self.enabled = true;
    }

    /// Bind an already boxed filter and enable the tap.
    pub fn bind_boxed(&mut self, filter: Box<dyn Filter>) {
        debug!(tap = self.name, filter = ?filter, "binding filter");
        self.slot.set_boxed(filter);
        self.enabled = true;
    }

    /// Unbind the filter and disable the tap.
    pub fn clear(&mut self) -> Option<Box<dyn Filter>> {
        self.enabled = false;
        let previous = self.slot.clear();
        if previous.is_some() {
            debug!(tap = self.name, "filter cleared");
        }
        previous
    }

    /// Enable or disable filtering without touching the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether the enable flag is set.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether a filter is bound.
    pub fn is_bound(&self) -> bool {
        self.slot.is_bound()
    }

    /// Whether samples are actually being filtered.
    pub fn is_active(&self) -> bool {
        self.enabled && self.slot.is_bound()
    }

    /// Label used in log events.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Filter `input` if the tap is active, otherwise return it unchanged.
    #[inline]
    pub fn apply(&mut self, input: f32) -> f32 {
        if self.enabled {
            self.slot.apply(input)
        } else {
            input
        }
    }

    /// Reset the bound filter's state.
    pub fn reset(&mut self) {
        self.slot.reset();
    }
}
