//! Document-level event listeners
//!
//! This module models the small slice of the DOM event system the client
//! needs: global pointer-down and touch-start listeners on the document, and
//! the element path of each event for `closest`-style lookups.
//!
//! [`EventHost`] abstracts the document. [`Document`] is an in-memory host
//! used on native targets and in tests; the browser host lives in
//! [`crate::dom`] on wasm32.
//!
//! Listeners are owned by a [`ListenerGuard`], which removes them when it is
//! dropped, so a listener can never outlive the component that registered it.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Global interaction events the client listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
	MouseDown,
	TouchStart,
}

impl EventType {
	/// DOM event name.
	pub fn as_str(self) -> &'static str {
		match self {
			EventType::MouseDown => "mousedown",
			EventType::TouchStart => "touchstart",
		}
	}
}

impl fmt::Display for EventType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// The parts of an element that event handling inspects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementNode {
	/// Lowercase tag name.
	pub tag: String,
	/// Value of the `aria-label` attribute, if any.
	pub aria_label: Option<String>,
}

impl ElementNode {
	pub fn new(tag: impl Into<String>) -> Self {
		Self {
			tag: tag.into().to_ascii_lowercase(),
			aria_label: None,
		}
	}

	pub fn with_aria_label(mut self, label: impl Into<String>) -> Self {
		self.aria_label = Some(label.into());
		self
	}
}

/// A pointer or touch interaction.
///
/// `path` starts at the event target and walks up through its ancestors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerEvent {
	pub event_type: EventType,
	pub path: Vec<ElementNode>,
}

impl PointerEvent {
	pub fn new(event_type: EventType, path: Vec<ElementNode>) -> Self {
		Self { event_type, path }
	}

	/// The element the event was dispatched to.
	pub fn target(&self) -> Option<&ElementNode> {
		self.path.first()
	}

	/// The target or nearest ancestor matching `pred`, like `Element.closest`.
	///
	/// # Examples
	///
	/// ```
	/// use skywise_pages::events::{ElementNode, EventType, PointerEvent};
	///
	/// let event = PointerEvent::new(
	///     EventType::MouseDown,
	///     vec![ElementNode::new("svg"), ElementNode::new("button"), ElementNode::new("form")],
	/// );
	/// assert_eq!(event.closest(|el| el.tag == "button").map(|el| el.tag.as_str()), Some("button"));
	/// assert!(event.closest(|el| el.tag == "input").is_none());
	/// ```
	pub fn closest(&self, pred: impl Fn(&ElementNode) -> bool) -> Option<&ElementNode> {
		self.path.iter().find(|element| pred(element))
	}
}

/// Identifies a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
	pub(crate) fn new(raw: u64) -> Self {
		Self(raw)
	}
}

/// Handler invoked for every matching event.
pub type EventHandler = Rc<dyn Fn(&PointerEvent)>;

/// Wraps a closure as an [`EventHandler`].
pub fn handler<F>(f: F) -> EventHandler
where
	F: Fn(&PointerEvent) + 'static,
{
	Rc::new(f)
}

/// A document that accepts global event listeners.
pub trait EventHost {
	/// Registers `handler` for `event_type` and returns its id.
	fn add_listener(&self, event_type: EventType, handler: EventHandler) -> ListenerId;

	/// Unregisters a listener. Returns false if it was not registered.
	fn remove_listener(&self, id: ListenerId) -> bool;

	/// Current viewport width in logical pixels.
	fn viewport_width(&self) -> u32;
}

struct Registration {
	id: ListenerId,
	event_type: EventType,
	handler: EventHandler,
}

/// In-memory document.
///
/// # Examples
///
/// ```
/// use skywise_pages::events::{Document, ElementNode, EventHost, EventType, PointerEvent, handler};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let document = Document::new(1024);
/// let hits = Rc::new(Cell::new(0));
///
/// let id = document.add_listener(EventType::MouseDown, {
///     let hits = Rc::clone(&hits);
///     handler(move |_| hits.set(hits.get() + 1))
/// });
///
/// document.dispatch(&PointerEvent::new(EventType::MouseDown, vec![ElementNode::new("div")]));
/// assert_eq!(hits.get(), 1);
///
/// assert!(document.remove_listener(id));
/// assert_eq!(document.listener_count(), 0);
/// ```
pub struct Document {
	listeners: RefCell<Vec<Registration>>,
	next_id: Cell<u64>,
	viewport_width: Cell<u32>,
}

impl Document {
	pub fn new(viewport_width: u32) -> Self {
		Self {
			listeners: RefCell::new(Vec::new()),
			next_id: Cell::new(0),
			viewport_width: Cell::new(viewport_width),
		}
	}

	pub fn set_viewport_width(&self, width: u32) {
		self.viewport_width.set(width);
	}

	/// Number of registered listeners across all event types.
	pub fn listener_count(&self) -> usize {
		self.listeners.borrow().len()
	}

	/// Number of registered listeners for `event_type`.
	pub fn listener_count_for(&self, event_type: EventType) -> usize {
		self.listeners
			.borrow()
			.iter()
			.filter(|registration| registration.event_type == event_type)
			.count()
	}

	/// Delivers `event` to every listener of its type and returns how many ran.
	///
	/// The listener list is snapshotted first, so handlers may add or remove
	/// listeners while the event is being delivered.
	pub fn dispatch(&self, event: &PointerEvent) -> usize {
		let handlers: Vec<EventHandler> = self
			.listeners
			.borrow()
			.iter()
			.filter(|registration| registration.event_type == event.event_type)
			.map(|registration| Rc::clone(&registration.handler))
			.collect();

		for handler in &handlers {
			handler(event);
		}
		handlers.len()
	}
}

impl Default for Document {
	fn default() -> Self {
		Self::new(1024)
	}
}

impl fmt::Debug for Document {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Document")
			.field("listeners", &self.listener_count())
			.field("viewport_width", &self.viewport_width.get())
			.finish()
	}
}

impl EventHost for Document {
	fn add_listener(&self, event_type: EventType, handler: EventHandler) -> ListenerId {
		let id = ListenerId::new(self.next_id.get());
		self.next_id.set(self.next_id.get() + 1);
		self.listeners.borrow_mut().push(Registration {
			id,
			event_type,
			handler,
		});
		id
	}

	fn remove_listener(&self, id: ListenerId) -> bool {
		let mut listeners = self.listeners.borrow_mut();
		let before = listeners.len();
		listeners.retain(|registration| registration.id != id);
		listeners.len() != before
	}

	fn viewport_width(&self) -> u32 {
		self.viewport_width.get()
	}
}

/// Owns a set of listeners and removes them on drop.
///
/// Dropping the guard is the only way to release its listeners, which ties
/// their lifetime to whatever holds the guard.
pub struct ListenerGuard {
	host: Rc<dyn EventHost>,
	ids: Vec<ListenerId>,
}

impl ListenerGuard {
	pub fn new(host: Rc<dyn EventHost>) -> Self {
		Self {
			host,
			ids: Vec::new(),
		}
	}

	/// Registers `handler` on the guarded host.
	pub fn listen(&mut self, event_type: EventType, handler: EventHandler) -> ListenerId {
		let id = self.host.add_listener(event_type, handler);
		self.ids.push(id);
		id
	}

	/// Ids of the listeners this guard owns.
	pub fn ids(&self) -> &[ListenerId] {
		&self.ids
	}

	pub fn len(&self) -> usize {
		self.ids.len()
	}

	pub fn is_empty(&self) -> bool {
		self.ids.is_empty()
	}
}

impl fmt::Debug for ListenerGuard {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ListenerGuard").field("ids", &self.ids).finish()
	}
}

impl Drop for ListenerGuard {
	fn drop(&mut self) {
		for id in self.ids.drain(..) {
			if !self.host.remove_listener(id) {
				tracing::warn!(?id, "listener already removed from host");
			}
		}
	}
}
