//! Prelude for the filters crate.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! # Example
//!
//! ```
//! use ctrlkit_filters::prelude::*;
//!
//! let mut slot = FilterSlot::new(Butterworth::new(10.0, 100.0));
//! let y = slot.apply(1.0);
//! assert!(y.is_finite());
//! ```

pub use crate::butterworth::Butterworth;
pub use crate::config::FilterSpec;
pub use crate::filter::{Filter, FilterSlot, FnFilter};
pub use crate::kalman::Kalman;
pub use crate::limit_average::LimitAverage;
pub use crate::low_pass::LowPass;
pub use crate::median::Median;
pub use crate::moving_average::MovingAverage;
pub use crate::saturate;
pub use crate::slew_rate::SlewRateLimiter;
