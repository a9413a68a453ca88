//! Handlers for errors and warnings reported by the engine.

use ampl_error::{AmplResult, EngineError};
use std::sync::{Mutex, MutexGuard};
use tracing::{error, warn};

/// Receives the errors and warnings the engine reports while processing
/// models, data and commands.
///
/// Returning `Err` propagates the failure to the operation that triggered it.
/// Returning `Ok` lets the operation continue.
pub trait ErrorHandler: Send + Sync {
    /// Called for each error reported by the engine.
    fn error(&self, err: EngineError) -> AmplResult<()>;

    /// Called for each warning reported by the engine.
    fn warning(&self, err: EngineError) -> AmplResult<()>;
}

/// Logs every report; errors propagate, warnings only when configured to.
///
/// # Examples
///
/// ```
/// use ampl_error::EngineError;
/// use ampl_report::{DefaultErrorHandler, ErrorHandler};
///
/// let handler = DefaultErrorHandler::default();
/// assert!(handler.warning(EngineError::located("m.mod", 3, 1, "unused set")).is_ok());
///
/// let err = handler
///     .error(EngineError::located("m.mod", 4, 2, "syntax error"))
///     .unwrap_err();
/// assert_eq!(err.engine().unwrap().line_number(), 4);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultErrorHandler {
    warnings_as_errors: bool,
}

impl DefaultErrorHandler {
    /// Create a handler.
    pub fn new(warnings_as_errors: bool) -> Self {
        Self { warnings_as_errors }
    }

    /// Whether warnings propagate like errors.
    pub fn warnings_as_errors(&self) -> bool {
        self.warnings_as_errors
    }
}

impl ErrorHandler for DefaultErrorHandler {
    fn error(&self, err: EngineError) -> AmplResult<()> {
        error!(
            source_name = err.source_name(),
            line = err.line_number(),
            offset = err.offset(),
            "Engine error: {}",
            err.message()
        );
        Err(err.into())
    }

    fn warning(&self, err: EngineError) -> AmplResult<()> {
        warn!(
            source_name = err.source_name(),
            line = err.line_number(),
            offset = err.offset(),
            "Engine warning: {}",
            err.message()
        );
        if self.warnings_as_errors {
            Err(err.into())
        } else {
            Ok(())
        }
    }
}

/// Keeps every report for later inspection and never propagates.
///
/// # Examples
///
/// ```
/// use ampl_error::EngineError;
/// use ampl_report::{ErrorHandler, RecordingErrorHandler};
///
/// let handler = RecordingErrorHandler::default();
/// handler.error(EngineError::new("license expired")).unwrap();
/// assert_eq!(handler.errors()[0].message(), "license expired");
/// ```
#[derive(Debug, Default)]
pub struct RecordingErrorHandler {
    errors: Mutex<Vec<EngineError>>,
    warnings: Mutex<Vec<EngineError>>,
}

impl RecordingErrorHandler {
    /// Errors reported so far, oldest first.
    pub fn errors(&self) -> Vec<EngineError> {
        lock(&self.errors).clone()
    }

    /// Warnings reported so far, oldest first.
    pub fn warnings(&self) -> Vec<EngineError> {
        lock(&self.warnings).clone()
    }

    /// Forget everything recorded.
    pub fn clear(&self) {
        lock(&self.errors).clear();
        lock(&self.warnings).clear();
    }
}

impl ErrorHandler for RecordingErrorHandler {
    fn error(&self, err: EngineError) -> AmplResult<()> {
        lock(&self.errors).push(err);
        Ok(())
    }

    fn warning(&self, err: EngineError) -> AmplResult<()> {
        lock(&self.warnings).push(err);
        Ok(())
    }
}

// A panic while holding the lock cannot leave a Vec half-pushed.
fn lock(reports: &Mutex<Vec<EngineError>>) -> MutexGuard<'_, Vec<EngineError>> {
    reports.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
