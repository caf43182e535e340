//! Integration test utilities for SkyWise
//!
//! Shared setup for tests that drive the registration page across the
//! forms, pages and conf crates.

use skywise_conf::Settings;
use skywise_forms::{FieldName, RegistrationForm};
use skywise_pages::dismissal::{DismissalPolicy, mount_registration_form};
use skywise_pages::events::{Document, ElementNode, EventType, ListenerGuard, PointerEvent};
use std::cell::RefCell;
use std::rc::Rc;

/// Viewport width of a typical phone.
pub const PHONE_WIDTH: u32 = 390;

/// Viewport width of a typical laptop.
pub const LAPTOP_WIDTH: u32 = 1366;

/// A registration form mounted on an in-memory document.
pub struct RegistrationPage {
	pub document: Rc<Document>,
	pub form: Rc<RefCell<RegistrationForm>>,
	pub guard: Option<ListenerGuard>,
}

impl RegistrationPage {
	/// Mounts a fresh form using the form settings from `settings`.
	pub fn mount(settings: &Settings, viewport_width: u32) -> Self {
		let document = Rc::new(Document::new(viewport_width));
		let form = Rc::new(RefCell::new(RegistrationForm::new()));
		let guard = mount_registration_form(
			document.clone(),
			DismissalPolicy::from_settings(&settings.forms),
			form.clone(),
		);
		Self {
			document,
			form,
			guard: Some(guard),
		}
	}

	/// Types `value` into `name` and then leaves the field.
	pub fn fill(&self, name: FieldName, value: &str) {
		let mut form = self.form.borrow_mut();
		form.on_field_change(name, value);
		form.on_field_blur(name, value);
	}

	/// Taps the tooltip trigger next to `name`.
	pub fn tap_trigger(&self, name: FieldName) {
		self.document.dispatch(&PointerEvent::new(
			EventType::TouchStart,
			vec![
				ElementNode::new("svg"),
				ElementNode::new("button").with_aria_label(name.tooltip_aria_label()),
				ElementNode::new("div"),
				ElementNode::new("form"),
			],
		));
		self.form.borrow_mut().toggle_tooltip(name);
	}

	/// Clicks empty page space.
	pub fn click_outside(&self) {
		self.document.dispatch(&PointerEvent::new(
			EventType::MouseDown,
			vec![ElementNode::new("main"), ElementNode::new("body")],
		));
	}

	/// Number of tooltips currently open.
	pub fn open_tooltips(&self) -> usize {
		self.form
			.borrow()
			.tooltips()
			.iter()
			.filter(|(_, visible)| **visible)
			.count()
	}

	/// Unmounts the form, releasing its document listeners.
	pub fn unmount(&mut self) {
		self.guard.take();
	}
}
