//! Field validators for the registration form
//!
//! Three total, side-effect free validators for the email, username and
//! password inputs. They never fail: an invalid value is reported through the
//! return value, never through an error.
//!
//! Lengths are counted in characters, not bytes. Whitespace follows the
//! browser's definition, see [`is_form_whitespace`].

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Maximum accepted email length, in characters.
pub const EMAIL_MAX_LENGTH: usize = 320;

/// Accepted username length range, in characters.
pub const USERNAME_LENGTH: std::ops::RangeInclusive<usize> = 5..=20;

/// Accepted password length range, in characters.
pub const PASSWORD_LENGTH: std::ops::RangeInclusive<usize> = 8..=128;

/// Characters that satisfy the password special-character rule.
pub const PASSWORD_SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

pub const USERNAME_LENGTH_MESSAGE: &str = "Username must be between 5-20 characters";
pub const USERNAME_START_MESSAGE: &str = "Username must start with a letter";

pub const PASSWORD_LENGTH_MESSAGE: &str = "Password must be between 8-128 characters long";
pub const PASSWORD_SPACES_MESSAGE: &str = "Password cannot contain spaces";
pub const PASSWORD_UPPERCASE_MESSAGE: &str = "Password must contain at least 1 uppercase letter";
pub const PASSWORD_LOWERCASE_MESSAGE: &str = "Password must contain at least 1 lowercase letter";
pub const PASSWORD_NUMBER_MESSAGE: &str = "Password must contain at least 1 number";
pub const PASSWORD_SPECIAL_MESSAGE: &str = "Password must contain at least 1 special character";

// Local part, `@`, domain labels, then a final dot and an alphabetic TLD of
// two or more letters.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
		.expect("EMAIL_REGEX: invalid regex pattern")
});

/// Returns true for characters the browser treats as whitespace in form input.
///
/// This is Unicode `White_Space` without U+0085 (next line), plus U+FEFF
/// (zero width no-break space).
///
/// # Examples
///
/// ```
/// use skywise_forms::validators::is_form_whitespace;
///
/// assert!(is_form_whitespace(' '));
/// assert!(is_form_whitespace('\u{FEFF}'));
/// assert!(!is_form_whitespace('\u{0085}'));
/// assert!(!is_form_whitespace('a'));
/// ```
pub fn is_form_whitespace(c: char) -> bool {
	c == '\u{FEFF}' || (c != '\u{0085}' && c.is_whitespace())
}

/// Result of a validator that reports a reason on failure.
///
/// `message` is empty exactly when `is_valid` is true.
///
/// # Examples
///
/// ```
/// use skywise_forms::validators::ValidationOutcome;
///
/// let ok = ValidationOutcome::valid();
/// assert!(ok.is_valid);
/// assert!(ok.message.is_empty());
///
/// let bad = ValidationOutcome::invalid("Too short");
/// assert!(!bad.is_valid);
/// assert_eq!(bad.message, "Too short");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutcome {
	pub is_valid: bool,
	pub message: String,
}

impl ValidationOutcome {
	/// A passing outcome with an empty message.
	pub fn valid() -> Self {
		Self {
			is_valid: true,
			message: String::new(),
		}
	}

	/// A failing outcome carrying the given message.
	pub fn invalid(message: impl Into<String>) -> Self {
		Self {
			is_valid: false,
			message: message.into(),
		}
	}

	/// Converts the outcome into `Ok(())` or `Err(message)`.
	pub fn into_result(self) -> Result<(), String> {
		if self.is_valid {
			Ok(())
		} else {
			Err(self.message)
		}
	}
}

/// Validates an email address.
///
/// Values longer than [`EMAIL_MAX_LENGTH`] characters are rejected before the
/// pattern is consulted.
///
/// # Examples
///
/// ```
/// use skywise_forms::validators::validate_email;
///
/// assert!(validate_email("user@example.com"));
/// assert!(!validate_email("user@example"));
/// assert!(!validate_email("user@@example.com"));
/// assert!(!validate_email(""));
/// ```
pub fn validate_email(value: &str) -> bool {
	if value.chars().count() > EMAIL_MAX_LENGTH {
		return false;
	}
	EMAIL_REGEX.is_match(value)
}

/// Validates a username.
///
/// The length rule is checked before the starts-with-a-letter rule, so a
/// short username that also starts with a digit reports the length message.
///
/// # Examples
///
/// ```
/// use skywise_forms::validators::validate_username;
///
/// assert!(validate_username("validuser").is_valid);
/// assert_eq!(
///     validate_username("usr").message,
///     "Username must be between 5-20 characters"
/// );
/// assert_eq!(
///     validate_username("1user").message,
///     "Username must start with a letter"
/// );
/// ```
pub fn validate_username(value: &str) -> ValidationOutcome {
	if !USERNAME_LENGTH.contains(&value.chars().count()) {
		return ValidationOutcome::invalid(USERNAME_LENGTH_MESSAGE);
	}

	if !value.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) {
		return ValidationOutcome::invalid(USERNAME_START_MESSAGE);
	}

	ValidationOutcome::valid()
}

/// Validates a password.
///
/// Rules run in a fixed order and stop at the first failure:
/// length, whitespace, uppercase, lowercase, digit, special character.
///
/// # Examples
///
/// ```
/// use skywise_forms::validators::validate_password;
///
/// assert!(validate_password("Password123!").is_valid);
/// assert_eq!(
///     validate_password("weak").message,
///     "Password must be between 8-128 characters long"
/// );
/// assert_eq!(
///     validate_password("password123!").message,
///     "Password must contain at least 1 uppercase letter"
/// );
/// ```
pub fn validate_password(value: &str) -> ValidationOutcome {
	if !PASSWORD_LENGTH.contains(&value.chars().count()) {
		return ValidationOutcome::invalid(PASSWORD_LENGTH_MESSAGE);
	}

	if value.chars().any(is_form_whitespace) {
		return ValidationOutcome::invalid(PASSWORD_SPACES_MESSAGE);
	}

	if !value.chars().any(|c| c.is_ascii_uppercase()) {
		return ValidationOutcome::invalid(PASSWORD_UPPERCASE_MESSAGE);
	}

	if !value.chars().any(|c| c.is_ascii_lowercase()) {
		return ValidationOutcome::invalid(PASSWORD_LOWERCASE_MESSAGE);
	}

	if !value.chars().any(|c| c.is_ascii_digit()) {
		return ValidationOutcome::invalid(PASSWORD_NUMBER_MESSAGE);
	}

	if !value.chars().any(|c| PASSWORD_SPECIAL_CHARACTERS.contains(c)) {
		return ValidationOutcome::invalid(PASSWORD_SPECIAL_MESSAGE);
	}

	ValidationOutcome::valid()
}
