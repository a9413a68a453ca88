//! Error types for the AMPL API client.
//!
//! Failures reported by the AMPL engine are carried by [`EngineError`], which
//! optionally records where in the model or data source the engine detected
//! the problem. Client-side failures (configuration and the like) have their
//! own types, and everything converts into the top-level [`AmplError`].
//!
//! # Error Hierarchy
//!
//! - [`EngineError`] is a failure raised by the engine, located or unlocated
//! - [`ConfigError`] is a client configuration failure with Rust source tracking
//! - [`AmplErrorKind`] enumerates both, [`AmplError`] boxes the kind
//!
//! # Examples
//!
//! ```
//! use ampl_error::{AmplResult, EngineError};
//!
//! fn solve() -> AmplResult<()> {
//!     Err(EngineError::located("model.mod", 12, 5, "syntax error near token"))?
//! }
//!
//! if let Err(e) = solve() {
//!     let engine = e.engine().unwrap();
//!     assert_eq!(engine.line_number(), 12);
//!     eprint!("{}", engine.diagnostic_text());
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod engine;
mod error;
mod location;

pub use config::{ConfigError, ConfigErrorKind};
pub use engine::EngineError;
pub use error::{AmplError, AmplErrorKind, AmplResult};
pub use location::Location;
