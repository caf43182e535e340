//! Browser event host (wasm32 only)
//!
//! [`WebDocument`] registers listeners on the real `document` and converts
//! each DOM event into a [`PointerEvent`] by walking from the event target up
//! through its ancestors.

use crate::events::{
	ElementNode, EventHandler, EventHost, EventType, ListenerId, PointerEvent,
};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

type DomCallback = Closure<dyn FnMut(web_sys::Event)>;

/// Event host backed by the browser document.
pub struct WebDocument {
	window: web_sys::Window,
	document: web_sys::Document,
	callbacks: RefCell<HashMap<ListenerId, (EventType, DomCallback)>>,
	next_id: Cell<u64>,
}

impl WebDocument {
	/// Returns the host for the current window, or `None` outside a browser.
	pub fn from_window() -> Option<Self> {
		let window = web_sys::window()?;
		let document = window.document()?;
		Some(Self {
			window,
			document,
			callbacks: RefCell::new(HashMap::new()),
			next_id: Cell::new(0),
		})
	}
}

fn event_path(event: &web_sys::Event) -> Vec<ElementNode> {
	let mut path = Vec::new();
	let mut current = event
		.target()
		.and_then(|target| target.dyn_into::<web_sys::Element>().ok());

	while let Some(element) = current {
		let mut node = ElementNode::new(element.tag_name());
		node.aria_label = element.get_attribute("aria-label");
		path.push(node);
		current = element.parent_element();
	}
	path
}

impl EventHost for WebDocument {
	fn add_listener(&self, event_type: EventType, handler: EventHandler) -> ListenerId {
		let id = ListenerId::new(self.next_id.get());
		self.next_id.set(self.next_id.get() + 1);

		let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
			handler(&PointerEvent::new(event_type, event_path(&event)));
		});

		if let Err(err) = self
			.document
			.add_event_listener_with_callback(event_type.as_str(), callback.as_ref().unchecked_ref())
		{
			tracing::warn!(event = %event_type, ?err, "failed to attach document listener");
		}

		self.callbacks
			.borrow_mut()
			.insert(id, (event_type, callback));
		id
	}

	fn remove_listener(&self, id: ListenerId) -> bool {
		let Some((event_type, callback)) = self.callbacks.borrow_mut().remove(&id) else {
			return false;
		};

		if let Err(err) = self.document.remove_event_listener_with_callback(
			event_type.as_str(),
			callback.as_ref().unchecked_ref(),
		) {
			tracing::warn!(event = %event_type, ?err, "failed to detach document listener");
		}
		true
	}

	fn viewport_width(&self) -> u32 {
		// An unknown width is treated as a wide viewport, which keeps
		// dismissal inert.
		self.window
			.inner_width()
			.ok()
			.and_then(|width| width.as_f64())
			.map_or(u32::MAX, |width| width as u32)
	}
}
