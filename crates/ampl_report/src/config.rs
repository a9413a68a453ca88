//! Reporting configuration.
//!
//! Configuration is layered from TOML sources:
//! - Bundled defaults (include_str! from ampl.toml)
//! - User overrides (~/.config/ampl/ampl.toml, then ./ampl.toml)

use crate::DefaultErrorHandler;
use ampl_error::{AmplResult, ConfigError, ConfigErrorKind};
use config::{Config, File, FileFormat};
use serde::Deserialize;
use tracing::{debug, instrument};

/// How engine diagnostics are logged and handled.
///
/// # Example
///
/// ```toml
/// log_filter = "warn,ampl_report=debug"
/// json_logs = true
/// warnings_as_errors = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReportConfig {
    /// `EnvFilter` directives used when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Emit JSON log records instead of human-readable lines
    #[serde(default)]
    pub json_logs: bool,

    /// Propagate engine warnings as failures
    #[serde(default)]
    pub warnings_as_errors: bool,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            json_logs: false,
            warnings_as_errors: false,
        }
    }
}

impl ReportConfig {
    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> AmplResult<Self> {
        debug!("Loading reporting configuration from file");

        let config = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                ConfigError::new(ConfigErrorKind::Read {
                    path: path.as_ref().display().to_string(),
                    reason: e.to_string(),
                })
            })?;

        config
            .try_deserialize()
            .map_err(|e| ConfigError::new(ConfigErrorKind::Parse(e.to_string())).into())
    }

    /// Load configuration with precedence: current dir > config dir > bundled defaults.
    ///
    /// User config files are optional and skipped if not found.
    ///
    /// ```no_run
    /// use ampl_report::ReportConfig;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = ReportConfig::load()?;
    /// println!("Logging with {}", config.log_filter);
    /// # Ok(())
    /// # }
    /// ```
    #[instrument]
    pub fn load() -> AmplResult<Self> {
        debug!("Loading configuration with precedence: current dir > config dir > bundled defaults");

        const DEFAULT_CONFIG: &str = include_str!("../ampl.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("ampl").join("ampl.toml");
            builder = builder.add_source(File::from(user_config).required(false));
        }

        builder = builder.add_source(File::with_name("ampl").required(false));

        let config = builder
            .build()
            .map_err(|e| ConfigError::new(ConfigErrorKind::Build(e.to_string())))?;

        config
            .try_deserialize()
            .map_err(|e| ConfigError::new(ConfigErrorKind::Parse(e.to_string())).into())
    }

    /// The handler matching this configuration.
    pub fn error_handler(&self) -> DefaultErrorHandler {
        DefaultErrorHandler::new(self.warnings_as_errors)
    }
}
