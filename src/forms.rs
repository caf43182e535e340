//! Registration form validation module.
//!
//! # Examples
//!
//! ```rust
//! use skywise::forms::{FieldName, RegistrationForm};
//!
//! let mut form = RegistrationForm::new();
//! form.on_field_blur(FieldName::Email, "");
//! assert_eq!(form.visible_error(FieldName::Email), Some("Email is required"));
//! ```

pub use skywise_forms::*;
