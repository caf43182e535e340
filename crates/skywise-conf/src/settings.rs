//! Client settings and the builder that layers them
//!
//! ```
//! use skywise_conf::{DefaultSource, EnvSource, SettingsBuilder};
//! use serde_json::json;
//!
//! let settings = SettingsBuilder::new()
//!     .add_source(DefaultSource::new().with_value("forms", json!({"mobile_breakpoint": 640})))
//!     .add_source(EnvSource::from_vars([("SKYWISE_LOGGING__LEVEL", "debug")]))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(settings.forms.mobile_breakpoint, 640);
//! assert_eq!(settings.logging.level, "debug");
//! assert_eq!(settings.api.base_url, "http://localhost:5003");
//! ```

use crate::sources::{ConfigSource, EnvSource, SourceError, TomlFileSource, merge_into};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// Errors raised while assembling settings or installing logging.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("Failed to load {description}: {source}")]
	Source {
		description: String,
		#[source]
		source: SourceError,
	},

	#[error("Invalid settings structure: {0}")]
	Deserialize(#[from] serde_json::Error),

	#[error("Invalid value for '{key}': {message}")]
	Invalid { key: String, message: String },

	#[error("Logging initialisation failed: {0}")]
	Logging(String),
}

pub type SettingsResult<T> = Result<T, SettingsError>;

/// Backend API location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
	pub base_url: String,
}

impl Default for ApiSettings {
	fn default() -> Self {
		Self {
			base_url: "http://localhost:5003".to_string(),
		}
	}
}

/// Form presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
	/// Viewports narrower than this many logical pixels are treated as mobile.
	pub mobile_breakpoint: u32,
	/// Substring of the `aria-label` that marks a tooltip trigger button.
	pub tooltip_trigger_keyword: String,
}

impl Default for FormSettings {
	fn default() -> Self {
		Self {
			mobile_breakpoint: 768,
			tooltip_trigger_keyword: "requirements".to_string(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
	/// `tracing` filter directive, e.g. `info` or `skywise_forms=debug`.
	pub level: String,
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
		}
	}
}

/// All client settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
	pub api: ApiSettings,
	pub forms: FormSettings,
	pub logging: LoggingSettings,
}

impl Settings {
	/// Loads settings from `config_path` (if it exists) and `SKYWISE_*`
	/// environment variables on top of the defaults.
	pub fn load(config_path: impl AsRef<Path>) -> SettingsResult<Self> {
		SettingsBuilder::new()
			.add_source(TomlFileSource::new(config_path.as_ref()))
			.add_source(EnvSource::new())
			.build()
	}

	/// Checks values that deserialize fine but cannot be used.
	pub fn validate(&self) -> SettingsResult<()> {
		if self.api.base_url.trim().is_empty() {
			return Err(invalid("api.base_url", "must not be empty"));
		}
		if self.forms.mobile_breakpoint == 0 {
			return Err(invalid("forms.mobile_breakpoint", "must be greater than zero"));
		}
		if self.forms.tooltip_trigger_keyword.trim().is_empty() {
			return Err(invalid("forms.tooltip_trigger_keyword", "must not be empty"));
		}
		Ok(())
	}
}

fn invalid(key: &str, message: &str) -> SettingsError {
	SettingsError::Invalid {
		key: key.to_string(),
		message: message.to_string(),
	}
}

/// Merges configuration sources into [`Settings`].
///
/// Sources are applied in ascending priority; nested tables are merged key
/// by key, so a higher source only overrides the keys it sets. Sources with
/// equal priority apply in the order they were added.
#[derive(Default)]
pub struct SettingsBuilder {
	sources: Vec<Box<dyn ConfigSource>>,
}

impl SettingsBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn add_source(mut self, source: impl ConfigSource + 'static) -> Self {
		self.sources.push(Box::new(source));
		self
	}

	/// Number of registered sources.
	pub fn source_count(&self) -> usize {
		self.sources.len()
	}

	/// Loads every source, merges them and validates the result.
	pub fn build(&self) -> SettingsResult<Settings> {
		let mut ordered: Vec<&dyn ConfigSource> =
			self.sources.iter().map(|source| &**source).collect();
		ordered.sort_by_key(|source| source.priority());

		let mut merged = IndexMap::new();
		for source in ordered {
			let values = source.load().map_err(|source_error| SettingsError::Source {
				description: source.description(),
				source: source_error,
			})?;
			tracing::debug!(
				source = %source.description(),
				keys = values.len(),
				"loaded settings source"
			);
			merge_into(&mut merged, values);
		}

		let settings: Settings = serde_json::from_value(Value::Object(merged.into_iter().collect()))?;
		settings.validate()?;
		Ok(settings)
	}
}
