//! Settings module.
//!
//! # Examples
//!
//! ```rust,no_run
//! use skywise::conf::{Settings, init_logging};
//!
//! let settings = Settings::load("skywise.toml").unwrap();
//! init_logging(&settings.logging).unwrap();
//! ```

pub use skywise_conf::*;
