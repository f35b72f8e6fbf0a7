//! Declarative filter configuration.
//!
//! A [`FilterSpec`] is the serializable description of a filter, used by
//! controller profiles and the command line to attach filters without
//! writing code:
//!
//! ```
//! use ctrlkit_filters::FilterSpec;
//!
//! let spec: FilterSpec = serde_json::from_str(r#"{"kind": "low_pass", "alpha": 0.5}"#)?;
//! let mut filter = spec.build()?;
//! assert_eq!(filter.update(10.0), 10.0);
//! assert_eq!(filter.update(20.0), 15.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use ctrlkit_errors::{ValidationError, ValidationResult, validate_finite, validate_range};
use serde::{Deserialize, Serialize};

use crate::{
    Butterworth, Filter, Kalman, LimitAverage, LowPass, Median, MovingAverage, SlewRateLimiter,
};

/// Serializable description of one filter primitive.
///
/// Parameters left out of a document fall back to the primitive's defaults;
/// unrecognized keys are rejected. Window-based filters always use their
/// default window length, so they take no parameters at all.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum FilterSpec {
    /// [`LowPass`]
    LowPass {
        /// Smoothing factor in `(0, 1]`
        #[serde(default = "default_alpha")]
        alpha: f32,
    },
    /// [`MovingAverage`] over 10 samples
    MovingAverage {},
    /// [`Median`] over 5 samples
    Median {},
    /// [`Kalman`]
    Kalman {
        /// Process noise, `>= 0`
        #[serde(default = "default_q")]
        q: f32,
        /// Measurement noise, `> 0`
        #[serde(default = "default_r")]
        r: f32,
        /// Initial estimate; seeds from the first measurement when absent
        #[serde(default, skip_serializing_if = "Option::is_none")]
        initial: Option<f32>,
    },
    /// [`Butterworth`]
    Butterworth {
        /// Cutoff in Hz, below Nyquist
        #[serde(default = "default_cutoff_hz")]
        cutoff_hz: f32,
        /// Loop frequency in Hz
        #[serde(default = "default_sample_hz")]
        sample_hz: f32,
    },
    /// [`SlewRateLimiter`]
    SlewRate {
        /// Maximum change per tick, `>= 0`
        #[serde(default = "default_max_delta")]
        max_delta: f32,
    },
    /// [`LimitAverage`] over 10 samples
    LimitAverage {
        /// Maximum change per tick, `>= 0`
        #[serde(default = "default_max_delta")]
        max_delta: f32,
    },
}

fn default_alpha() -> f32 {
    LowPass::DEFAULT_ALPHA
}

fn default_q() -> f32 {
    Kalman::DEFAULT_Q
}

fn default_r() -> f32 {
    Kalman::DEFAULT_R
}

fn default_cutoff_hz() -> f32 {
    Butterworth::DEFAULT_CUTOFF_HZ
}

fn default_sample_hz() -> f32 {
    Butterworth::DEFAULT_SAMPLE_HZ
}

fn default_max_delta() -> f32 {
    SlewRateLimiter::DEFAULT_MAX_DELTA
}

impl FilterSpec {
    /// Short name matching the serialized `kind` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            FilterSpec::LowPass { .. } => "low_pass",
            FilterSpec::MovingAverage {} => "moving_average",
            FilterSpec::Median {} => "median",
            FilterSpec::Kalman { .. } => "kalman",
            FilterSpec::Butterworth { .. } => "butterworth",
            FilterSpec::SlewRate { .. } => "slew_rate",
            FilterSpec::LimitAverage { .. } => "limit_average",
        }
    }

    /// Check the parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first offending parameter.
    pub fn validate(&self) -> ValidationResult {
        match *self {
            FilterSpec::LowPass { alpha } => {
                validate_finite!("alpha", alpha);
                if alpha <= 0.0 || alpha > 1.0 {
                    return Err(ValidationError::out_of_range("alpha", alpha, 0.0, 1.0));
                }
            }
            FilterSpec::MovingAverage {} | FilterSpec::Median {} => {}
            FilterSpec::Kalman { q, r, initial } => {
                validate_finite!("q", q);
                validate_finite!("r", r);
                validate_range!("q", q, 0.0, f32::MAX);
                if r <= 0.0 {
                    return Err(ValidationError::out_of_range("r", r, f32::MIN_POSITIVE, f32::MAX));
                }
                if let Some(initial) = initial {
                    validate_finite!("initial", initial);
                }
            }
            FilterSpec::Butterworth {
                cutoff_hz,
                sample_hz,
            } => {
                validate_finite!("cutoff_hz", cutoff_hz);
                validate_finite!("sample_hz", sample_hz);
                if sample_hz <= 0.0 {
                    return Err(ValidationError::out_of_range(
                        "sample_hz",
                        sample_hz,
                        f32::MIN_POSITIVE,
                        f32::MAX,
                    ));
                }
                let nyquist = sample_hz / 2.0;
                if cutoff_hz <= 0.0 || cutoff_hz >= nyquist {
                    return Err(ValidationError::constraint(format!(
                        "cutoff_hz {cutoff_hz} must lie strictly between 0 and Nyquist ({nyquist} Hz)"
                    )));
                }
            }
            FilterSpec::SlewRate { max_delta } | FilterSpec::LimitAverage { max_delta } => {
                validate_finite!("max_delta", max_delta);
                validate_range!("max_delta", max_delta, 0.0, f32::MAX);
            }
        }
        Ok(())
    }

    /// Validate and construct the described filter.
    ///
    /// This is the only place the configuration path allocates a filter.
    ///
    /// # Errors
    ///
    /// Returns the [`validate`](FilterSpec::validate) error, if any.
    pub fn build(&self) -> ValidationResult<Box<dyn Filter>> {
        self.validate()?;
        let filter: Box<dyn Filter> = match *self {
            FilterSpec::LowPass { alpha } => Box::new(LowPass::new(alpha)),
            FilterSpec::MovingAverage {} => Box::new(MovingAverage::<10>::new()),
            FilterSpec::Median {} => Box::new(Median::<5>::new()),
            FilterSpec::Kalman {
                q,
                r,
                initial: Some(initial),
            } => Box::new(Kalman::with_initial(q, r, initial)),
            FilterSpec::Kalman {
                q,
                r,
                initial: None,
            } => Box::new(Kalman::new(q, r)),
            FilterSpec::Butterworth {
                cutoff_hz,
                sample_hz,
            } => Box::new(Butterworth::new(cutoff_hz, sample_hz)),
            FilterSpec::SlewRate { max_delta } => Box::new(SlewRateLimiter::per_tick(max_delta)),
            FilterSpec::LimitAverage { max_delta } => {
                Box::new(LimitAverage::<10>::new(max_delta))
            }
        };
        Ok(filter)
    }
}
