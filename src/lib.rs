//! # SkyWise
//!
//! Client-side core of the SkyWise learning platform: registration form
//! validation, the browser glue around it, and client settings.
//!
//! ## Feature Flags
//!
//! - `forms` - Field validators and the registration form state machine
//! - `pages` - Document listeners, tooltip dismissal, storage and session state
//! - `conf` - Layered settings and logging initialisation
//! - `full` (default) - All of the above
//!
//! ## Example
//!
//! ```rust
//! use skywise::prelude::*;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let settings = SettingsBuilder::new().build().unwrap();
//! let document = Rc::new(Document::new(375));
//! let form = Rc::new(RefCell::new(RegistrationForm::new()));
//! let _guard = mount_registration_form(
//!     document.clone(),
//!     DismissalPolicy::from_settings(&settings.forms),
//!     form.clone(),
//! );
//!
//! form.borrow_mut().on_field_change(FieldName::Email, "pilot@skywise.test");
//! form.borrow_mut().on_field_change(FieldName::Username, "pilot1");
//! form.borrow_mut().on_field_change(FieldName::Password, "Str0ng!Pass");
//! assert!(form.borrow_mut().validate_form());
//! ```

#[cfg(feature = "conf")]
pub mod conf;
#[cfg(feature = "forms")]
pub mod forms;
#[cfg(feature = "pages")]
pub mod pages;

#[cfg(feature = "conf")]
pub use skywise_conf::{Settings, SettingsBuilder, SettingsError, init_logging};
#[cfg(feature = "forms")]
pub use skywise_forms::{FieldName, FormError, RegistrationForm};

/// Commonly used types.
pub mod prelude {
	#[cfg(feature = "conf")]
	pub use skywise_conf::{FormSettings, Settings, SettingsBuilder, init_logging};

	#[cfg(feature = "forms")]
	pub use skywise_forms::{
		FieldMap, FieldName, FieldState, FormError, FormResult, RegistrationForm,
		RegistrationRequest, ValidationMode, validate_email, validate_password, validate_username,
	};

	#[cfg(feature = "pages")]
	pub use skywise_pages::{
		AuthSession, DismissalPolicy, Document, EventHost, ListenerGuard, MemoryStorage, Storage,
		mount_registration_form, mount_tooltip_dismissal,
	};
}
