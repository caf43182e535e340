//! Click-outside tooltip dismissal
//!
//! On narrow viewports the field tooltips open on tap rather than on hover,
//! so they need another way to close. While a form is mounted, any pointer
//! down or touch start outside a tooltip trigger closes every tooltip. On
//! viewports at or above the mobile breakpoint the behavior is inert.
//!
//! Tooltip triggers are recognised by their accessible label: a `button`
//! whose `aria-label` contains the trigger keyword ("requirements" by
//! default), on the target itself or on one of its ancestors.

use crate::events::{ElementNode, EventHost, EventType, ListenerGuard, PointerEvent, handler};
use skywise_conf::FormSettings;
use skywise_forms::RegistrationForm;
use std::cell::RefCell;
use std::rc::Rc;

/// Decides which interactions close the tooltips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DismissalPolicy {
	/// Viewports narrower than this, in logical pixels, dismiss on outside clicks.
	pub mobile_breakpoint: u32,
	/// Substring identifying tooltip trigger buttons by their `aria-label`.
	pub trigger_keyword: String,
}

impl DismissalPolicy {
	pub fn new(mobile_breakpoint: u32, trigger_keyword: impl Into<String>) -> Self {
		Self {
			mobile_breakpoint,
			trigger_keyword: trigger_keyword.into(),
		}
	}

	pub fn from_settings(settings: &FormSettings) -> Self {
		Self::new(settings.mobile_breakpoint, settings.tooltip_trigger_keyword.clone())
	}

	/// Returns true if `element` is a tooltip trigger control.
	pub fn is_trigger(&self, element: &ElementNode) -> bool {
		element.tag == "button"
			&& element
				.aria_label
				.as_deref()
				.is_some_and(|label| label.contains(self.trigger_keyword.as_str()))
	}

	/// Returns true if `event` on a viewport of `viewport_width` should close
	/// every tooltip.
	///
	/// # Examples
	///
	/// ```
	/// use skywise_pages::dismissal::DismissalPolicy;
	/// use skywise_pages::events::{ElementNode, EventType, PointerEvent};
	///
	/// let policy = DismissalPolicy::default();
	/// let outside = PointerEvent::new(EventType::MouseDown, vec![ElementNode::new("div")]);
	/// let trigger = PointerEvent::new(
	///     EventType::TouchStart,
	///     vec![
	///         ElementNode::new("svg"),
	///         ElementNode::new("button").with_aria_label("Show email requirements"),
	///     ],
	/// );
	///
	/// assert!(policy.should_dismiss(375, &outside));
	/// assert!(!policy.should_dismiss(375, &trigger));
	/// assert!(!policy.should_dismiss(768, &outside));
	/// ```
	pub fn should_dismiss(&self, viewport_width: u32, event: &PointerEvent) -> bool {
		if viewport_width >= self.mobile_breakpoint {
			return false;
		}
		event.closest(|element| self.is_trigger(element)).is_none()
	}
}

impl Default for DismissalPolicy {
	fn default() -> Self {
		Self::from_settings(&FormSettings::default())
	}
}

/// Listens for outside interactions and calls `on_dismiss` when the policy
/// says the tooltips should close.
///
/// Both the `mousedown` and `touchstart` listeners are owned by the returned
/// guard and are removed when it is dropped.
pub fn mount_tooltip_dismissal<F>(
	host: Rc<dyn EventHost>,
	policy: DismissalPolicy,
	on_dismiss: F,
) -> ListenerGuard
where
	F: Fn() + 'static,
{
	let policy = Rc::new(policy);
	let on_dismiss = Rc::new(on_dismiss);
	let mut guard = ListenerGuard::new(Rc::clone(&host));

	for event_type in [EventType::MouseDown, EventType::TouchStart] {
		let host = Rc::downgrade(&host);
		let policy = Rc::clone(&policy);
		let on_dismiss = Rc::clone(&on_dismiss);

		guard.listen(
			event_type,
			handler(move |event| {
				let Some(host) = host.upgrade() else {
					return;
				};
				if policy.should_dismiss(host.viewport_width(), event) {
					tracing::debug!(event = %event.event_type, "dismissing tooltips");
					on_dismiss();
				}
			}),
		);
	}

	guard
}

/// Mounts the registration form's tooltip dismissal.
///
/// The returned guard must be kept for as long as the form is shown.
///
/// # Examples
///
/// ```
/// use skywise_forms::{FieldName, RegistrationForm};
/// use skywise_pages::dismissal::{DismissalPolicy, mount_registration_form};
/// use skywise_pages::events::{Document, ElementNode, EventType, PointerEvent};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let document = Rc::new(Document::new(375));
/// let form = Rc::new(RefCell::new(RegistrationForm::new()));
/// let guard = mount_registration_form(document.clone(), DismissalPolicy::default(), form.clone());
///
/// form.borrow_mut().toggle_tooltip(FieldName::Email);
/// document.dispatch(&PointerEvent::new(EventType::MouseDown, vec![ElementNode::new("main")]));
/// assert!(!form.borrow().is_tooltip_visible(FieldName::Email));
///
/// drop(guard);
/// assert_eq!(document.listener_count(), 0);
/// ```
pub fn mount_registration_form(
	host: Rc<dyn EventHost>,
	policy: DismissalPolicy,
	form: Rc<RefCell<RegistrationForm>>,
) -> ListenerGuard {
	let form = Rc::downgrade(&form);
	mount_tooltip_dismissal(host, policy, move || {
		if let Some(form) = form.upgrade() {
			form.borrow_mut().close_all_tooltips();
		}
	})
}
