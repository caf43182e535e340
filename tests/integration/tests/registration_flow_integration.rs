//! End-to-end registration page flow
//!
//! Drives a mounted registration form the way a user on a phone would:
//! filling fields, opening requirement tooltips, tapping elsewhere,
//! submitting, and storing the tokens returned by the backend.

use rstest::{fixture, rstest};
use serde_json::json;
use skywise_conf::{Settings, SettingsBuilder};
use skywise_forms::{FieldName, FormError, RegistrationRequest};
use skywise_integration_tests::{PHONE_WIDTH, RegistrationPage};
use skywise_pages::auth::{
	AuthSession, REGISTRATION_FAILED_MESSAGE, TokenPair, error_message,
};
use skywise_pages::storage::MemoryStorage;
use std::rc::Rc;

#[fixture]
fn settings() -> Settings {
	SettingsBuilder::new().build().unwrap()
}

#[fixture]
fn page(settings: Settings) -> RegistrationPage {
	RegistrationPage::mount(&settings, PHONE_WIDTH)
}

#[rstest]
fn test_successful_registration(page: RegistrationPage) {
	page.fill(FieldName::Email, "pilot@skywise.test");
	page.fill(FieldName::Username, "pilot1");
	page.fill(FieldName::Password, "Str0ng!Pass");

	let request = page.form.borrow_mut().submission().unwrap();
	assert_eq!(
		request,
		RegistrationRequest {
			username: "pilot1".to_string(),
			email: "pilot@skywise.test".to_string(),
			password: "Str0ng!Pass".to_string(),
		}
	);
	assert_eq!(
		serde_json::to_value(&request).unwrap(),
		json!({"username": "pilot1", "email": "pilot@skywise.test", "password": "Str0ng!Pass"})
	);

	let storage = Rc::new(MemoryStorage::new());
	let mut session = AuthSession::restore(Rc::clone(&storage)).unwrap();
	let response = json!({"access_token": "acc", "refresh_token": "ref"});
	let tokens: TokenPair = serde_json::from_value(response).unwrap();
	session.set_tokens(&tokens).unwrap();

	let restored = AuthSession::restore(storage).unwrap();
	assert!(restored.is_authenticated());
	assert_eq!(restored.authorization_header().as_deref(), Some("Bearer acc"));
}

#[rstest]
fn test_empty_submit_reveals_required_errors(page: RegistrationPage) {
	let err = page.form.borrow_mut().submission().unwrap_err();

	let FormError::Invalid(errors) = err else {
		panic!("expected invalid form");
	};
	assert_eq!(errors.email, "Email is required");
	assert_eq!(errors.username, "Username is required");
	assert_eq!(errors.password, "Password is required");

	let form = page.form.borrow();
	for name in FieldName::ALL {
		assert!(form.is_touched(name));
		assert!(form.visible_error(name).is_some());
	}
}

#[rstest]
fn test_fixing_a_field_clears_its_error_while_typing(page: RegistrationPage) {
	page.fill(FieldName::Username, "1pilot");
	assert_eq!(
		page.form.borrow().visible_error(FieldName::Username),
		Some("Username must start with a letter")
	);

	page.form
		.borrow_mut()
		.on_field_change(FieldName::Username, "pilot");
	assert_eq!(page.form.borrow().visible_error(FieldName::Username), None);
}

#[rstest]
fn test_tooltips_close_on_outside_tap_but_not_on_triggers(page: RegistrationPage) {
	page.tap_trigger(FieldName::Email);
	page.tap_trigger(FieldName::Password);
	assert_eq!(page.open_tooltips(), 2);

	page.click_outside();
	assert_eq!(page.open_tooltips(), 0);

	page.tap_trigger(FieldName::Username);
	assert_eq!(page.open_tooltips(), 1);
}

#[rstest]
fn test_unmounted_page_stops_listening(mut page: RegistrationPage) {
	assert_eq!(page.document.listener_count(), 2);
	page.unmount();
	assert_eq!(page.document.listener_count(), 0);

	page.form.borrow_mut().toggle_tooltip(FieldName::Email);
	page.click_outside();
	assert_eq!(page.open_tooltips(), 1);
}

#[rstest]
#[case(json!({"message": "Username already taken"}), "Username already taken")]
#[case(json!({"detail": "nope"}), REGISTRATION_FAILED_MESSAGE)]
fn test_backend_rejection_message(#[case] body: serde_json::Value, #[case] expected: &str) {
	assert_eq!(error_message(&body, REGISTRATION_FAILED_MESSAGE), expected);
}
