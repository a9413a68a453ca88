//! Errors raised by the AMPL engine.

use crate::Location;

/// Failure reported by the engine, optionally tied to a source location.
///
/// The diagnostic text is rendered once at construction and never changes.
/// A located error renders as
///
/// ```text
/// Filename: <source> Row: <line> Offset: <offset>
/// <message>
/// ```
///
/// (the `Filename:` part is omitted for an empty source name), each line
/// terminated by `\n`. An unlocated error renders as its bare message.
///
/// # Examples
///
/// ```
/// use ampl_error::EngineError;
///
/// let err = EngineError::located("model.mod", 12, 5, "syntax error near token");
/// assert_eq!(
///     err.diagnostic_text(),
///     "Filename: model.mod Row: 12 Offset: 5\nsyntax error near token\n"
/// );
///
/// let err = EngineError::new("license expired");
/// assert_eq!(err.message(), "license expired");
/// assert_eq!(err.line_number(), -1);
/// assert_eq!(err.to_string(), "license expired");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display, derive_more::Error)]
#[display("{}", rendered)]
pub struct EngineError {
    location: Option<Location>,
    message: String,
    rendered: String,
}

impl EngineError {
    /// Create an error with no source location.
    ///
    /// The diagnostic text is the message itself, with no row or offset header.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            location: None,
            rendered: message.clone(),
            message,
        }
    }

    /// Create an error the engine detected at `line` and `offset` of `source_name`.
    ///
    /// All values are stored verbatim; an empty `source_name` drops the
    /// `Filename:` part of the diagnostic header.
    pub fn located(
        source_name: impl Into<String>,
        line: i32,
        offset: i32,
        message: impl Into<String>,
    ) -> Self {
        Self::at(Location::new(source_name, line, offset), message)
    }

    /// Create an error at an existing location.
    pub fn at(location: Location, message: impl Into<String>) -> Self {
        let message = message.into();
        let rendered = format!("{}\n{}\n", location, message);
        Self {
            location: Some(location),
            message,
            rendered,
        }
    }

    /// Name of the source the error was detected in, empty if not applicable.
    pub fn source_name(&self) -> &str {
        self.location
            .as_ref()
            .map_or("", |location| location.source_name().as_str())
    }

    /// Row where the error was detected, or `-1` when unknown.
    pub fn line_number(&self) -> i32 {
        self.location
            .as_ref()
            .map_or(Location::UNKNOWN_LINE, |location| *location.line())
    }

    /// Offset where the error was detected, or `-1` when unknown.
    pub fn offset(&self) -> i32 {
        self.location
            .as_ref()
            .map_or(Location::UNKNOWN_OFFSET, |location| *location.offset())
    }

    /// The raw message, without any location header.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The location, if the engine reported one.
    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    /// Whether the error was built with a location.
    pub fn is_located(&self) -> bool {
        self.location.is_some()
    }

    /// The full diagnostic text, as shown to users.
    pub fn diagnostic_text(&self) -> &str {
        &self.rendered
    }
}

/// Convert a raw `(source_name, line, offset, message)` report from the engine.
impl<S, M> From<(S, i32, i32, M)> for EngineError
where
    S: Into<String>,
    M: Into<String>,
{
    fn from((source_name, line, offset, message): (S, i32, i32, M)) -> Self {
        Self::located(source_name, line, offset, message)
    }
}
