use crate::ReportConfig;
use ampl_error::{AmplResult, ConfigError, ConfigErrorKind};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global `tracing` subscriber described by `config`.
///
/// `RUST_LOG` takes precedence over [`ReportConfig::log_filter`].
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(config: &ReportConfig) -> AmplResult<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if config.json_logs {
        registry.with(tracing_subscriber::fmt::layer().json()).try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    };

    installed.map_err(|e| ConfigError::new(ConfigErrorKind::Tracing(e.to_string())))?;

    info!(json = config.json_logs, "Tracing initialized");
    Ok(())
}
