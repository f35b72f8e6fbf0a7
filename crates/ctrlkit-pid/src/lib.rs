//! PID controllers for ctrlkit control loops
//!
//! Two controller forms share one tuning record ([`PidConfig`]) and one
//! driving interface ([`Controller`]):
//!
//! - [`PositionalPid`]: absolute form with deadband, integral clamping,
//!   back-calculation anti-windup, derivative-on-measurement and filter taps
//!   on the setpoint, feedback, derivative and output paths
//! - [`IncrementalPid`]: velocity form that accumulates bounded output
//!   increments; filter taps on setpoint, feedback and output
//!
//! Filters come from [`ctrlkit_filters`] and are bound at [`TapPoint`]s.
//! [`ControllerProfile`] loads a complete setup from JSON or YAML.
//!
//! # RT Safety
//!
//! `update`, `set_setpoint` and `reset` never allocate, block or panic and
//! never return errors. Construction, filter binding and profile loading
//! belong to the configuration path and may allocate.
//!
//! # Example
//!
//! ```
//! use ctrlkit_filters::LowPass;
//! use ctrlkit_pid::prelude::*;
//!
//! let cfg = PidConfig::default()
//!     .with_gains(1.2, 0.5, 0.01)
//!     .with_output_limits(-100.0, 100.0);
//! let mut pid = PositionalPid::new(cfg);
//! pid.set_derivative_filter(LowPass::new(0.3));
//!
//! pid.set_setpoint(50.0);
//! let mut plant = 0.0;
//! for _ in 0..100 {
//!     let u = pid.update(plant);
//!     plant += 0.01 * u;
//! }
//! assert!(plant > 0.0);
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod controller;
pub mod incremental;
pub mod positional;
pub mod prelude;
pub mod profile;
pub mod tap;

pub use config::PidConfig;
pub use controller::{Controller, TapPoint};
pub use incremental::IncrementalPid;
pub use positional::PositionalPid;
pub use profile::ControllerProfile;
pub use tap::FilterTap;
