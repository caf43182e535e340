//! Browser runtime module.
//!
//! Document listeners, tooltip dismissal, local storage, accessibility
//! preferences and session tokens.
//!
//! # Examples
//!
//! ```rust
//! use skywise::pages::dismissal::DismissalPolicy;
//! use skywise::pages::events::{ElementNode, EventType, PointerEvent};
//!
//! let policy = DismissalPolicy::default();
//! let tap = PointerEvent::new(EventType::TouchStart, vec![ElementNode::new("main")]);
//! assert!(policy.should_dismiss(360, &tap));
//! ```

// Re-export all skywise-pages functionality
pub use skywise_pages::*;
