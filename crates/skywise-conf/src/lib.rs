//! # SkyWise Configuration
//!
//! Layered settings for the SkyWise client.
//!
//! Settings are assembled from [`ConfigSource`]s merged in priority order:
//!
//! 1. [`DefaultSource`] (priority 0)
//! 2. [`TomlFileSource`] (priority 50)
//! 3. [`EnvSource`] (priority 100, `SKYWISE_` prefix, `__` between levels)
//!
//! ## Module Organization
//!
//! - [`settings`]: Settings types, [`SettingsBuilder`] and errors
//! - [`sources`]: Configuration sources
//! - [`logging`]: `tracing-subscriber` initialisation

pub mod logging;
pub mod settings;
pub mod sources;

pub use logging::{env_filter, init_logging};
pub use settings::{
	ApiSettings, FormSettings, LoggingSettings, Settings, SettingsBuilder, SettingsError,
	SettingsResult,
};
pub use sources::{ConfigSource, DefaultSource, EnvSource, SourceError, TomlFileSource};
