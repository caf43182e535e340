//! Tooltip dismissal configured through layered settings

use rstest::rstest;
use skywise::prelude::*;
use skywise::pages::events::{ElementNode, EventType, PointerEvent};
use skywise_conf::{EnvSource, TomlFileSource};
use skywise_integration_tests::{LAPTOP_WIDTH, PHONE_WIDTH, RegistrationPage};
use std::fs;
use tempfile::TempDir;

fn settings_with_file(contents: &str, env: &[(&str, &str)]) -> Settings {
	let dir = TempDir::new().unwrap();
	let path = dir.path().join("skywise.toml");
	fs::write(&path, contents).unwrap();

	SettingsBuilder::new()
		.add_source(TomlFileSource::new(&path))
		.add_source(EnvSource::from_vars(env.iter().copied()))
		.build()
		.unwrap()
}

#[rstest]
#[case(PHONE_WIDTH, 0)]
#[case(LAPTOP_WIDTH, 1)]
fn test_default_breakpoint(#[case] width: u32, #[case] still_open: usize) {
	let settings = SettingsBuilder::new().build().unwrap();
	let page = RegistrationPage::mount(&settings, width);

	page.tap_trigger(FieldName::Email);
	page.click_outside();

	assert_eq!(page.open_tooltips(), still_open);
}

#[rstest]
fn test_file_raises_breakpoint_to_cover_laptops() {
	let settings = settings_with_file("[forms]\nmobile_breakpoint = 1400\n", &[]);
	let page = RegistrationPage::mount(&settings, LAPTOP_WIDTH);

	page.tap_trigger(FieldName::Password);
	page.click_outside();

	assert_eq!(page.open_tooltips(), 0);
}

#[rstest]
fn test_env_overrides_file_breakpoint() {
	let settings = settings_with_file(
		"[forms]\nmobile_breakpoint = 1400\n",
		&[("SKYWISE_FORMS__MOBILE_BREAKPOINT", "320")],
	);
	assert_eq!(settings.forms.mobile_breakpoint, 320);

	let page = RegistrationPage::mount(&settings, PHONE_WIDTH);
	page.tap_trigger(FieldName::Username);
	page.click_outside();

	assert_eq!(page.open_tooltips(), 1);
}

#[rstest]
fn test_custom_trigger_keyword_changes_what_counts_as_outside() {
	let settings = settings_with_file("[forms]\ntooltip_trigger_keyword = \"hints\"\n", &[]);
	let page = RegistrationPage::mount(&settings, PHONE_WIDTH);

	// Field buttons are still labelled "Show ... requirements", so tapping
	// one no longer counts as a trigger and closes the open tooltip.
	page.form.borrow_mut().toggle_tooltip(FieldName::Email);
	page.document.dispatch(&PointerEvent::new(
		EventType::TouchStart,
		vec![ElementNode::new("button").with_aria_label(FieldName::Password.tooltip_aria_label())],
	));

	assert_eq!(page.open_tooltips(), 0);
}

#[rstest]
fn test_policy_matches_settings() {
	let settings = settings_with_file("[forms]\nmobile_breakpoint = 600\n", &[]);
	let policy = DismissalPolicy::from_settings(&settings.forms);

	assert_eq!(policy.mobile_breakpoint, 600);
	assert_eq!(policy.trigger_keyword, "requirements");
}
