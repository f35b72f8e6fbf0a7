//! Controller profiles: a [`PidConfig`] plus the filters to attach, loaded
//! from JSON or YAML.
//!
//! ```
//! use ctrlkit_pid::ControllerProfile;
//!
//! let profile = ControllerProfile::from_yaml_str(
//!     "pid:\n  kp: 2.0\n  ki: 0.5\nfeedback_filter:\n  kind: median\n",
//! )?;
//! let mut pid = profile.build_positional()?;
//! pid.set_setpoint(1.0);
//! assert!(pid.update(0.0) > 0.0);
//! # Ok::<(), ctrlkit_errors::ControlError>(())
//! ```

use std::path::Path;

use ctrlkit_errors::{ControlError, ErrorContext, Result, ResultExt, ValidationError};
use ctrlkit_filters::FilterSpec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{IncrementalPid, PidConfig, PositionalPid, TapPoint};

/// Everything needed to build a ready-to-run controller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ControllerProfile {
    /// Gains, limits and flags
    pub pid: PidConfig,
    /// Per-tick increment limit for the incremental form; 10 % of the
    /// output span when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta_limit: Option<f32>,
    /// Filter on the setpoint path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setpoint_filter: Option<FilterSpec>,
    /// Filter on the feedback path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback_filter: Option<FilterSpec>,
    /// Filter on the raw derivative (positional form only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub derivative_filter: Option<FilterSpec>,
    /// Filter on the clamped output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_filter: Option<FilterSpec>,
}

impl ControllerProfile {
    /// Profile with the given tuning and no filters.
    pub fn new(pid: PidConfig) -> Self {
        Self {
            pid,
            ..Self::default()
        }
    }

    /// Attach a filter spec at `point`, replacing any previous one.
    pub fn with_filter(mut self, point: TapPoint, spec: FilterSpec) -> Self {
        *self.slot_mut(point) = Some(spec);
        self
    }

    /// Replace the incremental increment limit.
    pub fn with_delta_limit(mut self, delta_limit: f32) -> Self {
        self.delta_limit = Some(delta_limit);
        self
    }

    /// The filter spec configured at `point`.
    pub fn filter(&self, point: TapPoint) -> Option<&FilterSpec> {
        match point {
            TapPoint::Setpoint => self.setpoint_filter.as_ref(),
            TapPoint::Feedback => self.feedback_filter.as_ref(),
            TapPoint::Derivative => self.derivative_filter.as_ref(),
            TapPoint::Output => self.output_filter.as_ref(),
        }
    }

    fn slot_mut(&mut self, point: TapPoint) -> &mut Option<FilterSpec> {
        match point {
            TapPoint::Setpoint => &mut self.setpoint_filter,
            TapPoint::Feedback => &mut self.feedback_filter,
            TapPoint::Derivative => &mut self.derivative_filter,
            TapPoint::Output => &mut self.output_filter,
        }
    }

    /// Parse a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::Parse`] when the document is malformed or
    /// names an unknown field or filter kind.
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| ControlError::parse("json", e))
    }

    /// Parse a YAML document.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::Parse`] when the document is malformed or
    /// names an unknown field or filter kind.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).map_err(|e| ControlError::parse("yaml", e))
    }

    /// Read a profile from disk. The format follows the file extension:
    /// `.json`, `.yaml` or `.yml`.
    ///
    /// The profile is parsed but not validated; the `build_*` methods do that.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::Io`] if the file cannot be read,
    /// [`ControlError::Config`] for an unrecognised extension and
    /// [`ControlError::Parse`] for a malformed document.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self> = match extension.as_deref() {
            Some("json") => Self::from_json_str,
            Some("yaml" | "yml") => Self::from_yaml_str,
            _ => {
                return Err(ControlError::config(format!(
                    "unsupported profile format: {} (expected .json, .yaml or .yml)",
                    path.display()
                )));
            }
        };

        let text = std::fs::read_to_string(path)?;
        let profile = parse(&text)?;
        debug!(path = %path.display(), "controller profile loaded");
        Ok(profile)
    }

    /// Serialize as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::Parse`] if serialization fails.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| ControlError::parse("json", e))
    }

    /// Serialize as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::Parse`] if serialization fails.
    pub fn to_yaml_string(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| ControlError::parse("yaml", e))
    }

    /// Check the tuning, the increment limit and every filter spec.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::Validation`] for invalid tuning. An invalid
    /// filter spec comes back as [`ControlError::Context`] naming the slot;
    /// its category is still [`ErrorCategory::Validation`](ctrlkit_errors::ErrorCategory).
    pub fn validate(&self) -> Result<()> {
        self.pid.validate()?;

        if let Some(delta_limit) = self.delta_limit {
            if !delta_limit.is_finite() {
                return Err(ValidationError::non_finite("delta_limit", delta_limit).into());
            }
            if delta_limit < 0.0 {
                return Err(
                    ValidationError::out_of_range("delta_limit", delta_limit, 0.0, f32::MAX).into(),
                );
            }
        }

        for point in TapPoint::ALL {
            if let Some(spec) = self.filter(point) {
                spec.validate().context(
                    ErrorContext::new("validate_profile")
                        .with("slot", point.as_str())
                        .with("kind", spec.kind()),
                )?;
            }
        }
        Ok(())
    }

    /// Validate and build a positional controller with all filters bound.
    ///
    /// # Errors
    ///
    /// Same as [`ControllerProfile::validate`].
    pub fn build_positional(&self) -> Result<PositionalPid> {
        self.validate()?;
        let mut pid = PositionalPid::new(self.pid);
        for point in TapPoint::ALL {
            if let Some(spec) = self.filter(point) {
                let filter = spec
                    .build()
                    .context(ErrorContext::new("build_positional").with("slot", point.as_str()))?;
                pid.bind_filter(point, filter);
            }
        }
        Ok(pid)
    }

    /// Validate and build an incremental controller with all filters bound.
    ///
    /// A derivative filter has no place in the incremental form and is
    /// rejected.
    ///
    /// # Errors
    ///
    /// Same as [`ControllerProfile::validate`], plus [`ControlError::Config`]
    /// when a derivative filter is configured.
    pub fn build_incremental(&self) -> Result<IncrementalPid> {
        self.validate()?;
        if self.derivative_filter.is_some() {
            return Err(ControlError::config(
                "derivative_filter is not supported by the incremental controller",
            ));
        }

        let mut pid = match self.delta_limit {
            Some(delta_limit) => IncrementalPid::with_delta_limit(self.pid, delta_limit),
            None => IncrementalPid::new(self.pid),
        };
        for point in [TapPoint::Setpoint, TapPoint::Feedback, TapPoint::Output] {
            if let Some(spec) = self.filter(point) {
                let filter = spec
                    .build()
                    .context(ErrorContext::new("build_incremental").with("slot", point.as_str()))?;
                pid.bind_filter(point, filter);
            }
        }
        Ok(pid)
    }
}
