//! Shared error types for ctrlkit
//!
//! The control hot path (filter and controller `update` calls) never returns
//! errors: invalid handles are recovered locally with a neutral value. This
//! crate covers the configuration path instead, where filter specifications,
//! PID configurations and controller profiles are checked before they reach
//! a control loop.
//!
//! # Modules
//!
//! - [`common`]: Top-level [`ControlError`], categories, severities and context
//! - [`validation`]: Parameter validation errors
//!
//! # Example
//!
//! ```
//! use ctrlkit_errors::prelude::*;
//!
//! fn check_alpha(alpha: f32) -> Result<f32> {
//!     if !(alpha > 0.0 && alpha <= 1.0) {
//!         return Err(ValidationError::out_of_range("alpha", alpha, 0.0, 1.0).into());
//!     }
//!     Ok(alpha)
//! }
//!
//! assert!(check_alpha(0.2).is_ok());
//! assert!(check_alpha(1.5).is_err());
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod prelude;
pub mod validation;

pub use common::{ControlError, ErrorCategory, ErrorContext, ErrorSeverity, ResultExt};
pub use validation::ValidationError;

/// A specialized `Result` type for ctrlkit configuration operations.
pub type Result<T> = std::result::Result<T, ControlError>;

/// A specialized `Result` type for parameter validation.
pub type ValidationResult<T = ()> = std::result::Result<T, ValidationError>;
