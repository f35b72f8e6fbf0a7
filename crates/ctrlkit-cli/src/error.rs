//! Error types for loopctl

use ctrlkit_errors::ControlError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    #[error("Invalid profile: {path}")]
    InvalidProfile {
        path: String,
        #[source]
        source: ControlError,
    },

    #[error("Invalid filter spec: {0}")]
    InvalidFilterSpec(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::ProfileNotFound(_) => 2,
            CliError::InvalidProfile { .. }
            | CliError::InvalidFilterSpec(_)
            | CliError::InvalidArgument(_)
            | CliError::JsonError(_) => 4,
            CliError::IoError(_) => 1,
        }
    }

    /// Variant name reported in JSON error output.
    pub fn kind(&self) -> &'static str {
        match self {
            CliError::ProfileNotFound(_) => "ProfileNotFound",
            CliError::InvalidProfile { .. } => "InvalidProfile",
            CliError::InvalidFilterSpec(_) => "InvalidFilterSpec",
            CliError::InvalidArgument(_) => "InvalidArgument",
            CliError::IoError(_) => "IoError",
            CliError::JsonError(_) => "JsonError",
        }
    }

    /// Map a profile loading failure, separating a missing file from a bad one.
    pub fn from_profile_load(path: &str, err: ControlError) -> Self {
        match err {
            ControlError::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
                CliError::ProfileNotFound(path.to_string())
            }
            source => CliError::InvalidProfile {
                path: path.to_string(),
                source,
            },
        }
    }
}
