//! Top-level error wrapper types.

use crate::{ConfigError, EngineError};

/// Everything that can go wrong in the client.
///
/// # Examples
///
/// ```
/// use ampl_error::{AmplError, EngineError};
///
/// let err: AmplError = EngineError::new("connection refused").into();
/// assert_eq!(err.to_string(), "AMPL Error: connection refused");
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum AmplErrorKind {
    /// Failure reported by the engine
    #[from(EngineError)]
    Engine(EngineError),
    /// Client configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// AMPL client error with kind discrimination.
///
/// # Examples
///
/// ```
/// use ampl_error::{AmplResult, ConfigError, ConfigErrorKind};
///
/// fn might_fail() -> AmplResult<()> {
///     Err(ConfigError::new(ConfigErrorKind::Parse("missing field".to_string())))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(err.engine().is_none());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("AMPL Error: {}", _0)]
pub struct AmplError(Box<AmplErrorKind>);

impl AmplError {
    /// Create a new error from a kind.
    pub fn new(kind: AmplErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &AmplErrorKind {
        &self.0
    }

    /// The engine failure, if this error came from the engine.
    pub fn engine(&self) -> Option<&EngineError> {
        match self.kind() {
            AmplErrorKind::Engine(err) => Some(err),
            _ => None,
        }
    }
}

impl<T> From<T> for AmplError
where
    T: Into<AmplErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for AMPL client operations.
pub type AmplResult<T> = std::result::Result<T, AmplError>;
