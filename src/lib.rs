//! Message Templates - parse once, render many times
//!
//! This library turns a template such as `"User {UserId} logged in from {IPAddress}"`
//! into an immutable token sequence and renders it against named property
//! values. It is the text layer of structured logging: templates are parsed
//! once, cached, and rendered for every event.
//!
//! # Example
//!
//! ```rust
//! use message_templates::{render, ScalarValue};
//! use std::collections::HashMap;
//!
//! let mut properties = HashMap::new();
//! properties.insert("UserId", ScalarValue::from(42));
//! properties.insert("IPAddress", ScalarValue::from("10.0.0.1"));
//!
//! let text = render("User {UserId} logged in from {IPAddress:l}", &properties).unwrap();
//! assert_eq!(text, "User 42 logged in from 10.0.0.1");
//! ```
//!
//! # Template syntax
//!
//! - `{Name}` inserts a property; `{0}` inserts a positional one
//! - `{@Name}` / `{$Name}` carry a destructure / stringify hint
//! - `{Name,10}` right-aligns in 10 chars, `{Name,-10}` left-aligns
//! - `{Name:F2}` passes a format specifier to the value
//! - `{{` and `}}` are literal braces
//!
//! Malformed placeholders are rendered as written; see [`diagnostics`].

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod parser;
pub mod renderer;
pub mod template;

pub use config::{Config, ConfigError};
pub use diagnostics::{check, DiagnosticKind, TemplateDiagnostic};
pub use error::{FormatError, RenderError};
pub use parser::{
    parse, Alignment, AlignmentDirection, Destructuring, LiteralToken, PlaceholderToken, Token,
};
pub use renderer::{
    Culture, FormatProvider, FormatValue, Invariant, PropertyLookup, ScalarValue,
};
pub use template::{CacheConfig, MessageTemplate, TemplateCache};

/// Render a template with the invariant culture
///
/// The template is parsed through the process-wide [`TemplateCache`].
pub fn render<P>(template: &str, properties: &P) -> Result<String, RenderError>
where
    P: PropertyLookup + ?Sized,
{
    TemplateCache::global()
        .get_or_parse(template)
        .render_to_string(properties, None)
}

/// Render a template with a specific format provider
///
/// # Example
///
/// ```rust
/// use message_templates::{render_with_provider, Culture, ScalarValue};
/// use std::collections::HashMap;
///
/// let culture = Culture::new("de-DE")
///     .with_decimal_separator(",")
///     .with_group_separator(".");
/// let mut properties = HashMap::new();
/// properties.insert("Total", ScalarValue::from(1234.5));
///
/// let text = render_with_provider("Total: {Total:N2}", &properties, &culture).unwrap();
/// assert_eq!(text, "Total: 1.234,50");
/// ```
pub fn render_with_provider<P>(
    template: &str,
    properties: &P,
    provider: &dyn FormatProvider,
) -> Result<String, RenderError>
where
    P: PropertyLookup + ?Sized,
{
    TemplateCache::global()
        .get_or_parse(template)
        .render_to_string(properties, Some(provider))
}
