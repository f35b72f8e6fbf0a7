//! Prelude for the PID crate.
//!
//! ```
//! use ctrlkit_pid::prelude::*;
//!
//! fn drive(controller: &mut dyn Controller, feedback: f32) -> f32 {
//!     controller.update(feedback)
//! }
//!
//! let mut pid = IncrementalPid::with_defaults();
//! pid.set_setpoint(1.0);
//! assert_eq!(drive(&mut pid, 0.0), 1.0);
//! ```

pub use crate::config::PidConfig;
pub use crate::controller::{Controller, TapPoint};
pub use crate::incremental::IncrementalPid;
pub use crate::positional::PositionalPid;
pub use crate::profile::ControllerProfile;
pub use crate::tap::FilterTap;
