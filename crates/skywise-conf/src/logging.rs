//! `tracing` subscriber setup

use crate::settings::{LoggingSettings, SettingsError, SettingsResult};
use tracing_subscriber::EnvFilter;

/// Builds the filter for `settings`, letting `RUST_LOG` take precedence.
pub fn env_filter(settings: &LoggingSettings) -> SettingsResult<EnvFilter> {
	EnvFilter::try_from_default_env()
		.or_else(|_| EnvFilter::try_new(&settings.level))
		.map_err(|err| SettingsError::Logging(err.to_string()))
}

/// Installs the global fmt subscriber.
///
/// Fails if a global subscriber is already set.
pub fn init_logging(settings: &LoggingSettings) -> SettingsResult<()> {
	let filter = env_filter(settings)?;
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_target(true)
		.try_init()
		.map_err(|err| SettingsError::Logging(err.to_string()))?;

	tracing::debug!(level = %settings.level, "logging initialised");
	Ok(())
}
