//! Common error types and utilities used across all ctrlkit crates.
//!
//! This module provides the top-level error enum that wraps the sub-errors,
//! along with error classification, severity levels, and a context helper.

use core::fmt;

use crate::ValidationError;

/// Top-level error type for the configuration path.
#[derive(Debug, thiserror::Error)]
pub enum ControlError {
    /// Parameter validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Profile or configuration document could not be decoded
    #[error("Parse error ({format}): {message}")]
    Parse {
        /// Document format (`json`, `yaml`, ...)
        format: &'static str,
        /// Decoder message
        message: String,
    },

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[source] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Another error annotated with the operation that produced it
    #[error("{context}: {source}")]
    Context {
        /// Where the error was raised
        context: ErrorContext,
        /// The annotated error
        #[source]
        source: Box<ControlError>,
    },

    /// Generic error with a message
    #[error("{0}")]
    Other(String),
}

impl ControlError {
    /// Get the error category for classification.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ControlError::Validation(_) => ErrorCategory::Validation,
            ControlError::Parse { .. } => ErrorCategory::Parse,
            ControlError::Io(_) => ErrorCategory::IO,
            ControlError::Config(_) => ErrorCategory::Config,
            ControlError::Context { source, .. } => source.category(),
            ControlError::Other(_) => ErrorCategory::Other,
        }
    }

    /// Get the error severity level.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ControlError::Validation(e) => e.severity(),
            ControlError::Parse { .. } => ErrorSeverity::Error,
            ControlError::Io(_) => ErrorSeverity::Error,
            ControlError::Config(_) => ErrorSeverity::Error,
            ControlError::Context { source, .. } => source.severity(),
            ControlError::Other(_) => ErrorSeverity::Error,
        }
    }

    /// Check if this error is recoverable.
    pub fn is_recoverable(&self) -> bool {
        self.severity() < ErrorSeverity::Critical
    }

    /// Create a configuration error with a message.
    pub fn config(msg: impl Into<String>) -> Self {
        ControlError::Config(msg.into())
    }

    /// Create a parse error for the given document format.
    pub fn parse(format: &'static str, msg: impl fmt::Display) -> Self {
        ControlError::Parse {
            format,
            message: msg.to_string(),
        }
    }

    /// The innermost error, with all context layers stripped.
    pub fn root(&self) -> &ControlError {
        match self {
            ControlError::Context { source, .. } => source.root(),
            other => other,
        }
    }

    /// Create a generic error with a message.
    pub fn other(msg: impl Into<String>) -> Self {
        ControlError::Other(msg.into())
    }
}

impl From<std::io::Error> for ControlError {
    fn from(e: std::io::Error) -> Self {
        ControlError::Io(e)
    }
}

/// Error category for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCategory {
    /// Validation errors
    Validation = 0,
    /// Document decoding errors
    Parse = 1,
    /// Configuration errors
    Config = 2,
    /// I/O errors
    IO = 3,
    /// Other errors
    Other = 255,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Validation => write!(f, "Validation"),
            ErrorCategory::Parse => write!(f, "Parse"),
            ErrorCategory::Config => write!(f, "Config"),
            ErrorCategory::IO => write!(f, "IO"),
            ErrorCategory::Other => write!(f, "Other"),
        }
    }
}

/// Error severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ErrorSeverity {
    /// Informational, no action required
    Info = 0,
    /// Warning, may require attention
    Warning = 1,
    /// Error, operation failed
    Error = 2,
    /// Critical, system may be in unstable state
    Critical = 3,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Context information for errors.
///
/// Names the operation that failed plus optional key/value pairs, e.g. the
/// profile path or the filter slot being configured.
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// The operation that was being performed
    pub operation: String,
    /// Additional context key-value pairs
    pub context: Vec<(String, String)>,
}

impl ErrorContext {
    /// Create a new error context for an operation.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            context: Vec::new(),
        }
    }

    /// Add a context key-value pair.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.push((key.into(), value.into()));
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "operation: {}", self.operation)?;
        for (key, value) in &self.context {
            write!(f, ", {key}: {value}")?;
        }
        Ok(())
    }
}

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    ///
    /// # Errors
    ///
    /// Returns the error converted to [`ControlError`] and wrapped in
    /// [`ControlError::Context`]. Category and severity are those of the
    /// wrapped error.
    fn context(self, ctx: ErrorContext) -> Result<T, ControlError>;

    /// Add context with an operation name.
    ///
    /// # Errors
    ///
    /// Same as [`ResultExt::context`].
    fn with_context(self, operation: impl Into<String>) -> Result<T, ControlError>;
}

impl<T, E: Into<ControlError>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, ctx: ErrorContext) -> Result<T, ControlError> {
        self.map_err(|e| {
            ControlError::Context {
                context: ctx,
                source: Box::new(e.into()),
            }
        })
    }

    fn with_context(self, operation: impl Into<String>) -> Result<T, ControlError> {
        self.context(ErrorContext::new(operation))
    }
}
