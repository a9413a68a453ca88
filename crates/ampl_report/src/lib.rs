//! Reporting of AMPL engine diagnostics.
//!
//! The engine reports errors and warnings as [`EngineError`](ampl_error::EngineError)
//! values. This crate routes them through an [`ErrorHandler`], logs them with
//! `tracing`, and loads the reporting configuration from TOML.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod handler;
mod telemetry;

pub use config::ReportConfig;
pub use handler::{DefaultErrorHandler, ErrorHandler, RecordingErrorHandler};
pub use telemetry::init_tracing;
