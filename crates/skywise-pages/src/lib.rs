//! SkyWise Pages - browser runtime for the SkyWise client
//!
//! Glue between the form state in `skywise-forms` and the page it is
//! rendered into.
//!
//! ## Modules
//!
//! - [`events`]: Document-level listener registration with RAII cleanup
//! - [`dismissal`]: Closing field tooltips on outside taps on narrow viewports
//! - [`storage`]: Web Storage abstraction with an in-memory backend
//! - [`accessibility`]: Persisted font scaling preferences
//! - [`auth`]: Session token bookkeeping and unauthorized-response handling
//! - `dom`: `web_sys` backed event host (wasm32 only)
//!
//! ## Example
//!
//! ```
//! use skywise_forms::{FieldName, RegistrationForm};
//! use skywise_pages::dismissal::{DismissalPolicy, mount_registration_form};
//! use skywise_pages::events::{Document, ElementNode, EventType, PointerEvent};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let document = Rc::new(Document::new(390));
//! let form = Rc::new(RefCell::new(RegistrationForm::new()));
//! let _guard = mount_registration_form(document.clone(), DismissalPolicy::default(), form.clone());
//!
//! form.borrow_mut().toggle_tooltip(FieldName::Password);
//! document.dispatch(&PointerEvent::new(EventType::TouchStart, vec![ElementNode::new("body")]));
//! assert!(!form.borrow().is_tooltip_visible(FieldName::Password));
//! ```

pub mod accessibility;
pub mod auth;
pub mod dismissal;
#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod events;
pub mod storage;

pub use accessibility::{AccessibilitySettings, AccessibilityStore};
pub use auth::{AuthSession, TokenPair, UnauthorizedAction, UserProfile};
pub use dismissal::{DismissalPolicy, mount_registration_form, mount_tooltip_dismissal};
#[cfg(target_arch = "wasm32")]
pub use dom::WebDocument;
pub use events::{
	Document, ElementNode, EventHandler, EventHost, EventType, ListenerGuard, ListenerId,
	PointerEvent, handler,
};
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
pub use storage::{MemoryStorage, Storage, StorageError, StorageResult};
