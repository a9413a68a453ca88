//! Client configuration errors.

/// Ways loading or applying the client configuration can fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfigErrorKind {
    /// A configuration file could not be read
    #[display("Failed to read configuration from {}: {}", path, reason)]
    Read {
        /// Path of the file
        path: String,
        /// Underlying failure
        reason: String,
    },
    /// Configuration sources could not be merged
    #[display("Failed to build configuration: {}", _0)]
    Build(String),
    /// Merged configuration did not match the expected shape
    #[display("Failed to parse configuration: {}", _0)]
    Parse(String),
    /// The logging subscriber could not be installed
    #[display("Failed to install tracing subscriber: {}", _0)]
    Tracing(String),
}

/// Configuration error with location tracking.
///
/// # Examples
///
/// ```
/// use ampl_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::Parse("invalid type: string".to_string()));
/// assert!(format!("{}", err).starts_with("Configuration Error: Failed to parse"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    kind: ConfigErrorKind,
    line: u32,
    file: &'static str,
}

impl ConfigError {
    /// Create a new configuration error with caller location tracking.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ConfigErrorKind {
        &self.kind
    }

    /// Line of the Rust source that raised the error.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Rust source file that raised the error.
    pub fn file(&self) -> &'static str {
        self.file
    }
}
