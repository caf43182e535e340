//! Registration form validation state
//!
//! [`RegistrationForm`] tracks value, error, touched and tooltip state for the
//! email, username and password fields, and decides when each field is
//! validated:
//!
//! - on blur, a field becomes touched and is validated in full, including the
//!   required check;
//! - on change, a touched field is revalidated immediately, but an empty value
//!   clears the error instead of reporting it as missing;
//! - [`RegistrationForm::validate_form`] touches every field and validates all
//!   of them in full. It is the gate for submission.
//!
//! All transitions are synchronous and infallible. Errors are stored as
//! strings (empty means valid) and are only meant to be shown once the field
//! is touched, see [`RegistrationForm::visible_error`].

use crate::field::{FieldMap, FieldName, FieldState};
use crate::validators::{
	EMAIL_MAX_LENGTH, is_form_whitespace, validate_email, validate_password, validate_username,
};
use serde::Serialize;

pub const EMAIL_TOO_LONG_MESSAGE: &str = "Email must be 320 characters or less";
pub const EMAIL_INVALID_MESSAGE: &str = "Please enter a valid email address (e.g., test@test.com)";

/// Errors raised at the form boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
	#[error("Unknown field: {0}")]
	UnknownField(String),
	#[error("Validation failed for {} field(s)", invalid_count(.0))]
	Invalid(FieldMap<String>),
}

pub type FormResult<T> = Result<T, FormError>;

fn invalid_count(errors: &FieldMap<String>) -> usize {
	errors.iter().filter(|(_, error)| !error.is_empty()).count()
}

/// When a field is validated, which decides whether emptiness is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
	/// Validation while typing into a touched field. Empty values pass.
	Live,
	/// Validation on blur and on whole-form validation. Empty values fail.
	Full,
}

/// Computes the error message for `value` in field `name`.
///
/// Returns an empty string when the value passes.
///
/// # Examples
///
/// ```
/// use skywise_forms::{FieldName, ValidationMode, field_error};
///
/// assert_eq!(field_error(FieldName::Username, "", ValidationMode::Full), "Username is required");
/// assert_eq!(field_error(FieldName::Username, "", ValidationMode::Live), "");
/// assert_eq!(
///     field_error(FieldName::Username, "1user", ValidationMode::Live),
///     "Username must start with a letter"
/// );
/// ```
pub fn field_error(name: FieldName, value: &str, mode: ValidationMode) -> String {
	match mode {
		ValidationMode::Full if value.chars().all(is_form_whitespace) => {
			return name.required_message();
		}
		ValidationMode::Live if value.is_empty() => return String::new(),
		_ => {}
	}

	match name {
		FieldName::Email => {
			if value.chars().count() > EMAIL_MAX_LENGTH {
				EMAIL_TOO_LONG_MESSAGE.to_string()
			} else if !validate_email(value) {
				EMAIL_INVALID_MESSAGE.to_string()
			} else {
				String::new()
			}
		}
		FieldName::Username => validate_username(value).message,
		FieldName::Password => validate_password(value).message,
	}
}

/// Body of the backend registration request, built from a valid form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationRequest {
	pub username: String,
	pub email: String,
	pub password: String,
}

/// Validation state of the registration form.
///
/// # Examples
///
/// ```
/// use skywise_forms::{FieldName, RegistrationForm};
///
/// let mut form = RegistrationForm::new();
///
/// // Untouched fields collect values without reporting errors.
/// form.on_field_change(FieldName::Email, "invalid");
/// assert_eq!(form.error(FieldName::Email), "");
///
/// // Blurring touches the field and validates it.
/// form.on_field_blur(FieldName::Email, "invalid");
/// assert!(form.is_touched(FieldName::Email));
/// assert!(!form.error(FieldName::Email).is_empty());
///
/// // From now on, every change is revalidated.
/// form.on_field_change(FieldName::Email, "good@example.com");
/// assert_eq!(form.error(FieldName::Email), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
	form_data: FieldMap<String>,
	validation_errors: FieldMap<String>,
	field_touched: FieldMap<bool>,
	tooltip_visible: FieldMap<bool>,
	show_password: bool,
}

impl RegistrationForm {
	/// Creates an empty form with every field untouched and every tooltip hidden.
	pub fn new() -> Self {
		Self::default()
	}

	pub fn values(&self) -> &FieldMap<String> {
		&self.form_data
	}

	pub fn errors(&self) -> &FieldMap<String> {
		&self.validation_errors
	}

	pub fn touched(&self) -> &FieldMap<bool> {
		&self.field_touched
	}

	pub fn tooltips(&self) -> &FieldMap<bool> {
		&self.tooltip_visible
	}

	pub fn value(&self, name: FieldName) -> &str {
		&self.form_data[name]
	}

	/// The stored error for `name`, which may exist before the field is touched.
	pub fn error(&self, name: FieldName) -> &str {
		&self.validation_errors[name]
	}

	pub fn is_touched(&self, name: FieldName) -> bool {
		self.field_touched[name]
	}

	pub fn field_state(&self, name: FieldName) -> FieldState {
		if self.field_touched[name] {
			FieldState::Touched
		} else {
			FieldState::Untouched
		}
	}

	pub fn is_tooltip_visible(&self, name: FieldName) -> bool {
		self.tooltip_visible[name]
	}

	/// The error to render for `name`.
	///
	/// `None` while the field is untouched or has no error.
	pub fn visible_error(&self, name: FieldName) -> Option<&str> {
		let error = self.error(name);
		(self.is_touched(name) && !error.is_empty()).then_some(error)
	}

	/// Records a new value. A touched field is revalidated in live mode.
	pub fn on_field_change(&mut self, name: FieldName, value: impl Into<String>) {
		let value = value.into();
		if self.field_touched[name] {
			self.validation_errors[name] = field_error(name, &value, ValidationMode::Live);
		}
		self.form_data[name] = value;
	}

	/// Marks the field touched and validates `value` in full.
	///
	/// The stored value is left as is; the blurred input already reported its
	/// value through [`on_field_change`](Self::on_field_change).
	pub fn on_field_blur(&mut self, name: FieldName, value: &str) {
		self.touch(name);
		self.validation_errors[name] = field_error(name, value, ValidationMode::Full);
	}

	/// Flips the tooltip of `name` without affecting the other fields.
	pub fn toggle_tooltip(&mut self, name: FieldName) {
		self.tooltip_visible[name] = !self.tooltip_visible[name];
	}

	/// Hides every tooltip.
	pub fn close_all_tooltips(&mut self) {
		self.tooltip_visible = FieldMap::splat(false);
	}

	/// Touches every field and validates all stored values in full.
	///
	/// Returns true only if every field passes.
	pub fn validate_form(&mut self) -> bool {
		for name in FieldName::ALL {
			self.touch(name);
		}

		self.validation_errors = self
			.form_data
			.map(|name, value| field_error(name, value, ValidationMode::Full));

		let is_valid = self.validation_errors.all(String::is_empty);
		tracing::debug!(
			is_valid,
			invalid_fields = invalid_count(&self.validation_errors),
			"registration form validated"
		);
		is_valid
	}

	/// Validates the form and builds the registration request body.
	pub fn submission(&mut self) -> FormResult<RegistrationRequest> {
		if !self.validate_form() {
			return Err(FormError::Invalid(self.validation_errors.clone()));
		}

		Ok(RegistrationRequest {
			username: self.form_data.username.clone(),
			email: self.form_data.email.clone(),
			password: self.form_data.password.clone(),
		})
	}

	pub fn toggle_password_visibility(&mut self) {
		self.show_password = !self.show_password;
	}

	pub fn is_password_visible(&self) -> bool {
		self.show_password
	}

	/// Input type of the password field, which reveals the value when toggled.
	pub fn password_input_type(&self) -> &'static str {
		if self.show_password {
			"text"
		} else {
			FieldName::Password.input_type()
		}
	}

	fn touch(&mut self, name: FieldName) {
		if !self.field_touched[name] {
			self.field_touched[name] = true;
			tracing::debug!(field = %name, "field touched");
		}
	}
}
