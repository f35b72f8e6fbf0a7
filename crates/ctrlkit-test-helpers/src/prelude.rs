//! Convenience re-exports for common test utilities.
//!
//! ```rust,ignore
//! use ctrlkit_test_helpers::prelude::*;
//! ```

pub use crate::must::{must, must_err, must_parse, must_some, must_with};
pub use crate::{assert_all_finite, assert_approx_eq, assert_non_decreasing, assert_within};

#[cfg(feature = "tracking")]
pub use crate::assert_rt_safe;
#[cfg(feature = "tracking")]
pub use crate::tracking::{AllocationGuard, AllocationReport, measure, track};

#[cfg(feature = "signals")]
pub use crate::signals;

#[cfg(feature = "logging")]
pub use crate::logging::{capture_logs, init_test_tracing};

/// Result type for tests that use `?`.
pub type TestResult = Result<(), Box<dyn std::error::Error>>;
