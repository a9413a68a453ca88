//! Source positions reported by the engine.

use std::fmt;

/// Position in a model, data or script source where the engine detected a problem.
///
/// The `Display` implementation renders the header line of a located diagnostic,
/// without a trailing newline.
///
/// # Examples
///
/// ```
/// use ampl_error::Location;
///
/// let loc = Location::new("model.mod", 12, 5);
/// assert_eq!(loc.to_string(), "Filename: model.mod Row: 12 Offset: 5");
///
/// let anonymous = Location::new("", 3, 1);
/// assert_eq!(anonymous.to_string(), "Row: 3 Offset: 1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_getters::Getters)]
pub struct Location {
    /// Name of the source, empty when not applicable
    source_name: String,
    /// 1-based row
    line: i32,
    /// Column or byte offset within the row
    offset: i32,
}

impl Location {
    /// Line number reported when no location is known.
    pub const UNKNOWN_LINE: i32 = -1;

    /// Offset reported when no location is known.
    pub const UNKNOWN_OFFSET: i32 = -1;

    /// Create a location. Values are stored verbatim.
    pub fn new(source_name: impl Into<String>, line: i32, offset: i32) -> Self {
        Self {
            source_name: source_name.into(),
            line,
            offset,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.source_name.is_empty() {
            write!(f, "Filename: {} ", self.source_name)?;
        }
        write!(f, "Row: {} Offset: {}", self.line, self.offset)
    }
}
