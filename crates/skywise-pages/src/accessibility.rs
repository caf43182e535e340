//! Accessibility preferences
//!
//! Font scaling chosen by the user, persisted in local storage under
//! [`ACCESSIBILITY_STORAGE_KEY`] and optionally replaced by preferences
//! fetched from the backend once the user is signed in.

use crate::storage::{Storage, StorageResult};
use serde::{Deserialize, Serialize};

pub const ACCESSIBILITY_STORAGE_KEY: &str = "accessibility-settings";

/// Root font size, in pixels, at 100% scaling.
pub const BASE_FONT_SIZE_PX: f64 = 16.0;

/// Persisted accessibility settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilitySettings {
	/// Font scale as a percentage of the default size.
	pub font_size: u32,
}

impl Default for AccessibilitySettings {
	fn default() -> Self {
		Self { font_size: 100 }
	}
}

impl AccessibilitySettings {
	/// Root element font size in pixels for these settings.
	///
	/// # Examples
	///
	/// ```
	/// use skywise_pages::accessibility::AccessibilitySettings;
	///
	/// assert_eq!(AccessibilitySettings::default().root_font_size_px(), 16.0);
	/// assert_eq!(AccessibilitySettings { font_size: 125 }.root_font_size_px(), 20.0);
	/// ```
	pub fn root_font_size_px(&self) -> f64 {
		f64::from(self.font_size) / 100.0 * BASE_FONT_SIZE_PX
	}
}

/// Accessibility settings bound to a storage backend.
#[derive(Debug)]
pub struct AccessibilityStore<S: Storage> {
	storage: S,
	settings: AccessibilitySettings,
}

impl<S: Storage> AccessibilityStore<S> {
	/// Loads saved settings, falling back to the defaults.
	///
	/// A saved value that cannot be parsed is ignored.
	pub fn load(storage: S) -> StorageResult<Self> {
		let settings = match storage.get_item(ACCESSIBILITY_STORAGE_KEY)? {
			Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
				tracing::warn!(%err, "ignoring unreadable accessibility settings");
				AccessibilitySettings::default()
			}),
			None => AccessibilitySettings::default(),
		};
		Ok(Self { storage, settings })
	}

	pub fn settings(&self) -> AccessibilitySettings {
		self.settings
	}

	pub fn root_font_size_px(&self) -> f64 {
		self.settings.root_font_size_px()
	}

	/// Replaces the settings and persists them.
	pub fn update(&mut self, settings: AccessibilitySettings) -> StorageResult<()> {
		self.settings = settings;
		self.persist()
	}

	/// Restores and persists the default settings.
	pub fn reset(&mut self) -> StorageResult<()> {
		self.update(AccessibilitySettings::default())
	}

	/// Adopts preferences returned by the backend.
	///
	/// Only a non-empty JSON object is applied; anything else leaves the
	/// current settings in place. Returns true if the preferences were applied.
	pub fn apply_remote(&mut self, preferences: &serde_json::Value) -> StorageResult<bool> {
		let is_non_empty_object = preferences
			.as_object()
			.is_some_and(|object| !object.is_empty());
		if !is_non_empty_object {
			return Ok(false);
		}

		let settings: AccessibilitySettings = serde_json::from_value(preferences.clone())?;
		self.update(settings)?;
		Ok(true)
	}

	pub fn storage(&self) -> &S {
		&self.storage
	}

	fn persist(&self) -> StorageResult<()> {
		let raw = serde_json::to_string(&self.settings)?;
		self.storage.set_item(ACCESSIBILITY_STORAGE_KEY, &raw)
	}
}
