//! Registration form state machine tests
//!
//! Covers the touched/untouched transitions, live versus blur validation,
//! whole-form validation and tooltip toggling.

use rstest::{fixture, rstest};
use skywise_forms::registration::{EMAIL_INVALID_MESSAGE, EMAIL_TOO_LONG_MESSAGE};
use skywise_forms::validators::{
	PASSWORD_LENGTH_MESSAGE, PASSWORD_UPPERCASE_MESSAGE, USERNAME_LENGTH_MESSAGE,
	USERNAME_START_MESSAGE,
};
use skywise_forms::{FieldMap, FieldName, FieldState, FormError, RegistrationForm};

#[fixture]
fn form() -> RegistrationForm {
	RegistrationForm::new()
}

#[fixture]
fn filled_form() -> RegistrationForm {
	let mut form = RegistrationForm::new();
	form.on_field_change(FieldName::Email, "test@example.com");
	form.on_field_change(FieldName::Username, "testuser");
	form.on_field_change(FieldName::Password, "Password123!");
	form
}

// ============================================================================
// Initial state
// ============================================================================

#[rstest]
fn test_initial_state(form: RegistrationForm) {
	assert_eq!(form.values(), &FieldMap::splat(String::new()));
	assert_eq!(form.errors(), &FieldMap::splat(String::new()));
	assert_eq!(form.touched(), &FieldMap::splat(false));
	assert_eq!(form.tooltips(), &FieldMap::splat(false));
	for name in FieldName::ALL {
		assert_eq!(form.field_state(name), FieldState::Untouched);
		assert_eq!(form.visible_error(name), None);
	}
}

// ============================================================================
// on_field_change
// ============================================================================

#[rstest]
#[case(FieldName::Email, "test@example.com")]
#[case(FieldName::Username, "testuser")]
#[case(FieldName::Password, "Password123!")]
fn test_change_updates_value(mut form: RegistrationForm, #[case] name: FieldName, #[case] value: &str) {
	form.on_field_change(name, value);
	assert_eq!(form.value(name), value);
}

#[rstest]
fn test_untouched_change_does_not_validate(mut form: RegistrationForm) {
	form.on_field_change(FieldName::Email, "invalid");
	form.on_field_change(FieldName::Username, "1");
	form.on_field_change(FieldName::Password, "weak");

	assert_eq!(form.errors(), &FieldMap::splat(String::new()));
	assert_eq!(form.touched(), &FieldMap::splat(false));
}

#[rstest]
fn test_touched_email_validates_live(mut form: RegistrationForm) {
	form.on_field_blur(FieldName::Email, "test@example.com");
	assert_eq!(form.error(FieldName::Email), "");

	form.on_field_change(FieldName::Email, "invalid");
	assert_eq!(form.error(FieldName::Email), EMAIL_INVALID_MESSAGE);

	form.on_field_change(FieldName::Email, "a".repeat(321));
	assert_eq!(form.error(FieldName::Email), EMAIL_TOO_LONG_MESSAGE);
}

#[rstest]
fn test_touched_username_validates_live(mut form: RegistrationForm) {
	form.on_field_blur(FieldName::Username, "testuser");

	form.on_field_change(FieldName::Username, "usr");
	assert_eq!(form.error(FieldName::Username), USERNAME_LENGTH_MESSAGE);

	form.on_field_change(FieldName::Username, "1user");
	assert_eq!(form.error(FieldName::Username), USERNAME_START_MESSAGE);

	form.on_field_change(FieldName::Username, "validuser");
	assert_eq!(form.error(FieldName::Username), "");
}

#[rstest]
fn test_touched_password_validates_live(mut form: RegistrationForm) {
	form.on_field_blur(FieldName::Password, "Password123!");

	form.on_field_change(FieldName::Password, "weak");
	assert_eq!(form.error(FieldName::Password), PASSWORD_LENGTH_MESSAGE);

	form.on_field_change(FieldName::Password, "password123!");
	assert_eq!(form.error(FieldName::Password), PASSWORD_UPPERCASE_MESSAGE);
}

#[rstest]
fn test_live_change_to_empty_clears_error(mut form: RegistrationForm) {
	form.on_field_blur(FieldName::Username, "");
	assert_eq!(form.error(FieldName::Username), "Username is required");

	form.on_field_change(FieldName::Username, "ab");
	assert_eq!(form.error(FieldName::Username), USERNAME_LENGTH_MESSAGE);

	// Emptiness is only reported again on blur or submit.
	form.on_field_change(FieldName::Username, "");
	assert_eq!(form.error(FieldName::Username), "");
}

#[rstest]
fn test_blur_then_valid_change_clears_error(mut form: RegistrationForm) {
	form.on_field_blur(FieldName::Email, "bad");
	assert!(!form.error(FieldName::Email).is_empty());

	form.on_field_change(FieldName::Email, "good@example.com");
	assert_eq!(form.error(FieldName::Email), "");
}

// ============================================================================
// on_field_blur
// ============================================================================

#[rstest]
fn test_blur_touches_and_validates(mut form: RegistrationForm) {
	form.on_field_change(FieldName::Email, "invalid");
	form.on_field_blur(FieldName::Email, "invalid");

	assert!(form.is_touched(FieldName::Email));
	assert_eq!(form.field_state(FieldName::Email), FieldState::Touched);
	assert_eq!(form.error(FieldName::Email), EMAIL_INVALID_MESSAGE);
	assert_eq!(form.visible_error(FieldName::Email), Some(EMAIL_INVALID_MESSAGE));

	assert!(!form.is_touched(FieldName::Username));
	assert!(!form.is_touched(FieldName::Password));
}

#[rstest]
#[case(FieldName::Email, "", "Email is required")]
#[case(FieldName::Email, "   ", "Email is required")]
#[case(FieldName::Username, "", "Username is required")]
#[case(FieldName::Username, " \t ", "Username is required")]
#[case(FieldName::Password, "", "Password is required")]
#[case(FieldName::Password, "          ", "Password is required")]
fn test_blur_requires_non_blank(
	mut form: RegistrationForm,
	#[case] name: FieldName,
	#[case] value: &str,
	#[case] expected: &str,
) {
	form.on_field_blur(name, value);
	assert_eq!(form.error(name), expected);
}

#[rstest]
fn test_blur_with_valid_values_clears_errors(mut filled_form: RegistrationForm) {
	for name in FieldName::ALL {
		let value = filled_form.value(name).to_string();
		filled_form.on_field_blur(name, &value);
		assert_eq!(filled_form.error(name), "");
		assert_eq!(filled_form.visible_error(name), None);
	}
}

#[rstest]
fn test_touched_is_never_reset(mut form: RegistrationForm) {
	form.on_field_blur(FieldName::Password, "Password123!");
	form.on_field_change(FieldName::Password, "");
	form.toggle_tooltip(FieldName::Password);
	form.close_all_tooltips();
	form.validate_form();
	assert!(form.is_touched(FieldName::Password));
}

// ============================================================================
// validate_form
// ============================================================================

#[rstest]
fn test_validate_empty_form(mut form: RegistrationForm) {
	assert!(!form.validate_form());

	assert_eq!(form.touched(), &FieldMap::splat(true));
	assert_eq!(form.error(FieldName::Email), "Email is required");
	assert_eq!(form.error(FieldName::Username), "Username is required");
	assert_eq!(form.error(FieldName::Password), "Password is required");
}

#[rstest]
fn test_validate_filled_form(mut filled_form: RegistrationForm) {
	assert!(filled_form.validate_form());
	assert_eq!(filled_form.errors(), &FieldMap::splat(String::new()));
	assert_eq!(filled_form.touched(), &FieldMap::splat(true));
}

#[rstest]
fn test_validate_reports_each_invalid_field(mut form: RegistrationForm) {
	form.on_field_change(FieldName::Email, "invalid-email");
	form.on_field_change(FieldName::Username, "usr");
	form.on_field_change(FieldName::Password, "weak");

	assert!(!form.validate_form());
	assert_eq!(form.error(FieldName::Email), EMAIL_INVALID_MESSAGE);
	assert_eq!(form.error(FieldName::Username), USERNAME_LENGTH_MESSAGE);
	assert_eq!(form.error(FieldName::Password), PASSWORD_LENGTH_MESSAGE);
}

#[rstest]
fn test_validate_one_invalid_field_fails(mut filled_form: RegistrationForm) {
	filled_form.on_field_change(FieldName::Password, "password123!");
	assert!(!filled_form.validate_form());
	assert_eq!(filled_form.error(FieldName::Email), "");
	assert_eq!(filled_form.error(FieldName::Username), "");
	assert_eq!(filled_form.error(FieldName::Password), PASSWORD_UPPERCASE_MESSAGE);
}

#[rstest]
fn test_validate_too_long_email(mut filled_form: RegistrationForm) {
	filled_form.on_field_change(FieldName::Email, format!("{}@example.com", "a".repeat(310)));
	assert!(!filled_form.validate_form());
	assert_eq!(filled_form.error(FieldName::Email), EMAIL_TOO_LONG_MESSAGE);
}

#[rstest]
fn test_submission_builds_request(mut filled_form: RegistrationForm) {
	let request = filled_form.submission().unwrap();
	assert_eq!(request.email, "test@example.com");
	assert_eq!(request.username, "testuser");
	assert_eq!(request.password, "Password123!");

	let body = serde_json::to_value(&request).unwrap();
	assert_eq!(
		body,
		serde_json::json!({
			"username": "testuser",
			"email": "test@example.com",
			"password": "Password123!",
		})
	);
}

#[rstest]
fn test_submission_rejects_invalid_form(mut form: RegistrationForm) {
	form.on_field_change(FieldName::Email, "test@example.com");

	match form.submission() {
		Err(FormError::Invalid(errors)) => {
			assert_eq!(errors.email, "");
			assert_eq!(errors.username, "Username is required");
			assert_eq!(errors.password, "Password is required");
		}
		other => panic!("expected FormError::Invalid, got {other:?}"),
	}
}

// ============================================================================
// Tooltips
// ============================================================================

#[rstest]
#[case(FieldName::Email)]
#[case(FieldName::Username)]
#[case(FieldName::Password)]
fn test_toggle_tooltip_is_independent(mut form: RegistrationForm, #[case] name: FieldName) {
	form.toggle_tooltip(name);
	for other in FieldName::ALL {
		assert_eq!(form.is_tooltip_visible(other), other == name);
	}

	form.toggle_tooltip(name);
	assert_eq!(form.tooltips(), &FieldMap::splat(false));
}

#[rstest]
fn test_close_all_tooltips(mut form: RegistrationForm) {
	form.toggle_tooltip(FieldName::Email);
	form.toggle_tooltip(FieldName::Password);
	form.close_all_tooltips();
	assert_eq!(form.tooltips(), &FieldMap::splat(false));
}
