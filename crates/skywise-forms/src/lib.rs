//! Registration form validation for the SkyWise client
//!
//! This crate holds the framework-independent part of the sign-up form:
//! - Email, username and password validators with fixed, ordered rules
//! - A per-field touched/untouched state machine deciding when errors appear
//! - Tooltip visibility and the registration request payload
//!
//! Rendering and event wiring live in `skywise-pages`.

pub mod field;
pub mod registration;
pub mod validators;

pub use field::{FieldMap, FieldName, FieldState};
pub use registration::{
	FormError, FormResult, RegistrationForm, RegistrationRequest, ValidationMode, field_error,
};
pub use validators::{ValidationOutcome, validate_email, validate_password, validate_username};
