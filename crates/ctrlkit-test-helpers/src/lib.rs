//! Shared test utilities for ctrlkit.
//!
//! # Modules
//!
//! - [`mod@must`] - Unwrap helpers with good error messages and `#[track_caller]`
//! - [`assertions`] - Float and bounds assertion macros
//! - [`tracking`] - Allocation tracking for control-tick RT safety tests
//! - [`signals`] - Deterministic excitation signals (steps, ramps, noise)
//! - [`logging`] - `tracing` output routed through the test harness
//! - [`prelude`] - Convenience re-exports
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! ctrlkit-test-helpers = { workspace = true }
//! ```
//!
//! ```rust,ignore
//! use ctrlkit_test_helpers::prelude::*;
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod assertions;
pub mod must;
pub mod prelude;

#[cfg(feature = "tracking")]
#[cfg_attr(docsrs, doc(cfg(feature = "tracking")))]
pub mod tracking;

#[cfg(all(test, feature = "tracking"))]
#[global_allocator]
static GLOBAL_TEST: tracking::TrackingAllocator = tracking::TrackingAllocator;

#[cfg(feature = "signals")]
#[cfg_attr(docsrs, doc(cfg(feature = "signals")))]
pub mod signals;

#[cfg(feature = "logging")]
#[cfg_attr(docsrs, doc(cfg(feature = "logging")))]
pub mod logging;

pub use must::*;

#[cfg(feature = "tracking")]
pub use tracking::track;
