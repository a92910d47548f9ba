//! Parsed message templates and the cache that shares them
//!
//! A [`MessageTemplate`] is parsed once and rendered many times. The
//! [`TemplateCache`] maps raw template strings to shared parsed instances.
//!
//! # Example
//!
//! ```rust
//! use message_templates::{ScalarValue, TemplateCache};
//! use std::collections::HashMap;
//!
//! let cache = TemplateCache::new();
//! let template = cache.get_or_parse("User {UserId} logged in");
//!
//! let mut properties = HashMap::new();
//! properties.insert("UserId", ScalarValue::from(42));
//! let text = template.render_to_string(&properties, None).unwrap();
//! assert_eq!(text, "User 42 logged in");
//! ```

mod cache;
mod message;

pub use cache::{CacheConfig, TemplateCache};
pub use message::MessageTemplate;
