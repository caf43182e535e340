//! Field identifiers and fixed-key field maps
//!
//! The registration form has exactly three fields. [`FieldMap`] stores one
//! value per field as named members, so a map can never gain or lose a key.

use crate::registration::FormError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// One of the three registration form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
	Email,
	Username,
	Password,
}

impl FieldName {
	/// All fields, in display order.
	pub const ALL: [FieldName; 3] = [FieldName::Email, FieldName::Username, FieldName::Password];

	/// The `name` attribute of the field's input element.
	pub fn as_str(self) -> &'static str {
		match self {
			FieldName::Email => "email",
			FieldName::Username => "username",
			FieldName::Password => "password",
		}
	}

	/// Human-readable label, used as the prefix of the required message.
	pub fn label(self) -> &'static str {
		match self {
			FieldName::Email => "Email",
			FieldName::Username => "Username",
			FieldName::Password => "Password",
		}
	}

	/// The `type` attribute of the field's input element.
	pub fn input_type(self) -> &'static str {
		match self {
			FieldName::Email => "email",
			FieldName::Username => "text",
			FieldName::Password => "password",
		}
	}

	/// Accessible label of the button that toggles this field's tooltip.
	///
	/// Every label contains the word "requirements", which is how outside
	/// clicks are told apart from tooltip toggles.
	pub fn tooltip_aria_label(self) -> &'static str {
		match self {
			FieldName::Email => "Show email requirements",
			FieldName::Username => "Show username requirements",
			FieldName::Password => "Show password requirements",
		}
	}

	/// Rule summary rendered inside the field's tooltip.
	pub fn requirements(self) -> &'static str {
		match self {
			FieldName::Email => "A valid email address of at most 320 characters",
			FieldName::Username => "5-20 characters, starting with a letter",
			FieldName::Password => {
				"8-128 characters with no spaces, including an uppercase letter, \
				 a lowercase letter, a number and a special character"
			}
		}
	}

	/// Message stored when the field is empty or whitespace-only.
	pub fn required_message(self) -> String {
		format!("{} is required", self.label())
	}
}

impl fmt::Display for FieldName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for FieldName {
	type Err = FormError;

	/// Parses an input element's `name` attribute.
	///
	/// # Examples
	///
	/// ```
	/// use skywise_forms::FieldName;
	///
	/// assert_eq!("email".parse::<FieldName>().unwrap(), FieldName::Email);
	/// assert!("phone".parse::<FieldName>().is_err());
	/// ```
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"email" => Ok(FieldName::Email),
			"username" => Ok(FieldName::Username),
			"password" => Ok(FieldName::Password),
			other => Err(FormError::UnknownField(other.to_string())),
		}
	}
}

/// Touch state of a single field.
///
/// The only transition is `Untouched -> Touched`, triggered by a blur or by
/// whole-form validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldState {
	Untouched,
	Touched,
}

/// A value for each of the three registration fields.
///
/// # Examples
///
/// ```
/// use skywise_forms::{FieldMap, FieldName};
///
/// let mut touched = FieldMap::splat(false);
/// touched[FieldName::Email] = true;
///
/// assert!(touched[FieldName::Email]);
/// assert!(!touched[FieldName::Password]);
/// assert_eq!(touched.iter().filter(|(_, t)| **t).count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMap<T> {
	pub email: T,
	pub username: T,
	pub password: T,
}

impl<T> FieldMap<T> {
	/// Builds a map by calling `f` once per field.
	pub fn from_fn(mut f: impl FnMut(FieldName) -> T) -> Self {
		Self {
			email: f(FieldName::Email),
			username: f(FieldName::Username),
			password: f(FieldName::Password),
		}
	}

	/// Builds a map holding a clone of `value` for every field.
	pub fn splat(value: T) -> Self
	where
		T: Clone,
	{
		Self::from_fn(|_| value.clone())
	}

	/// Iterates over `(field, value)` pairs in display order.
	pub fn iter(&self) -> impl Iterator<Item = (FieldName, &T)> {
		FieldName::ALL.into_iter().map(move |name| (name, &self[name]))
	}

	/// Applies `f` to every value, keeping the keys.
	pub fn map<U>(&self, mut f: impl FnMut(FieldName, &T) -> U) -> FieldMap<U> {
		FieldMap::from_fn(|name| f(name, &self[name]))
	}

	/// Returns true if `pred` holds for every value.
	pub fn all(&self, mut pred: impl FnMut(&T) -> bool) -> bool {
		self.iter().all(|(_, value)| pred(value))
	}
}

impl<T> Index<FieldName> for FieldMap<T> {
	type Output = T;

	fn index(&self, name: FieldName) -> &T {
		match name {
			FieldName::Email => &self.email,
			FieldName::Username => &self.username,
			FieldName::Password => &self.password,
		}
	}
}

impl<T> IndexMut<FieldName> for FieldMap<T> {
	fn index_mut(&mut self, name: FieldName) -> &mut T {
		match name {
			FieldName::Email => &mut self.email,
			FieldName::Username => &mut self.username,
			FieldName::Password => &mut self.password,
		}
	}
}
