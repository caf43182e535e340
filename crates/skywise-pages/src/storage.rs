//! Key-value browser storage
//!
//! [`Storage`] mirrors the Web Storage API. [`MemoryStorage`] backs native
//! targets and tests; [`LocalStorage`] wraps `window.localStorage` on wasm32.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Errors from storage backends and persisted payloads.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
	#[error("Storage is not available")]
	Unavailable,
	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
	#[error("Storage backend error: {0}")]
	Backend(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// String key-value storage.
pub trait Storage {
	fn get_item(&self, key: &str) -> StorageResult<Option<String>>;
	fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;
	fn remove_item(&self, key: &str) -> StorageResult<()>;
}

impl<S: Storage + ?Sized> Storage for Rc<S> {
	fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
		(**self).get_item(key)
	}

	fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
		(**self).set_item(key, value)
	}

	fn remove_item(&self, key: &str) -> StorageResult<()> {
		(**self).remove_item(key)
	}
}

/// In-memory storage.
///
/// # Examples
///
/// ```
/// use skywise_pages::storage::{MemoryStorage, Storage};
///
/// let storage = MemoryStorage::new();
/// storage.set_item("theme", "dark").unwrap();
/// assert_eq!(storage.get_item("theme").unwrap().as_deref(), Some("dark"));
///
/// storage.remove_item("theme").unwrap();
/// assert_eq!(storage.get_item("theme").unwrap(), None);
/// ```
#[derive(Debug, Default)]
pub struct MemoryStorage {
	items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.items.borrow().len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.borrow().is_empty()
	}
}

impl Storage for MemoryStorage {
	fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
		Ok(self.items.borrow().get(key).cloned())
	}

	fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
		self.items
			.borrow_mut()
			.insert(key.to_string(), value.to_string());
		Ok(())
	}

	fn remove_item(&self, key: &str) -> StorageResult<()> {
		self.items.borrow_mut().remove(key);
		Ok(())
	}
}

/// `window.localStorage`.
#[cfg(target_arch = "wasm32")]
pub struct LocalStorage {
	inner: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
	/// Opens local storage for the current window.
	pub fn open() -> StorageResult<Self> {
		let window = web_sys::window().ok_or(StorageError::Unavailable)?;
		let inner = window
			.local_storage()
			.map_err(|err| StorageError::Backend(format!("{err:?}")))?
			.ok_or(StorageError::Unavailable)?;
		Ok(Self { inner })
	}
}

#[cfg(target_arch = "wasm32")]
impl Storage for LocalStorage {
	fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
		self.inner
			.get_item(key)
			.map_err(|err| StorageError::Backend(format!("{err:?}")))
	}

	fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
		self.inner
			.set_item(key, value)
			.map_err(|err| StorageError::Backend(format!("{err:?}")))
	}

	fn remove_item(&self, key: &str) -> StorageResult<()> {
		self.inner
			.remove_item(key)
			.map_err(|err| StorageError::Backend(format!("{err:?}")))
	}
}
