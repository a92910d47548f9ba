//! The parsed, reusable form of a message template

use std::fmt::{self, Write};
use std::hash::{Hash, Hasher};

use log::debug;

use crate::error::RenderError;
use crate::parser::{parse, PlaceholderToken, Token};
use crate::renderer::{self, FormatProvider, PropertyLookup};

/// A template string together with its token sequence
///
/// Two templates are equal when their source text is equal.
#[derive(Debug, Clone)]
pub struct MessageTemplate {
    text: String,
    tokens: Vec<Token>,
}

impl MessageTemplate {
    /// Parse a template string
    pub fn parse(text: impl Into<String>) -> Self {
        let text = text.into();
        let tokens = parse(&text);
        Self { text, tokens }
    }

    /// Build a template from tokens that were produced elsewhere.
    ///
    /// The tokens are taken as given; they are not checked against `text`.
    pub fn from_tokens(text: impl Into<String>, tokens: impl IntoIterator<Item = Token>) -> Self {
        Self {
            text: text.into(),
            tokens: tokens.into_iter().collect(),
        }
    }

    /// The source text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Tokens in source order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// All placeholders in source order
    pub fn placeholders(&self) -> impl Iterator<Item = &PlaceholderToken> + '_ {
        self.tokens.iter().filter_map(Token::as_placeholder)
    }

    fn all_positional(&self) -> bool {
        let mut placeholders = self.placeholders().peekable();
        placeholders.peek().is_some() && placeholders.all(PlaceholderToken::is_positional)
    }

    /// Placeholders addressed by name.
    ///
    /// Empty when every placeholder is positional.
    pub fn named_properties(&self) -> Vec<&PlaceholderToken> {
        if self.all_positional() {
            return Vec::new();
        }
        if self.placeholders().any(PlaceholderToken::is_positional) {
            debug!(
                "template {:?} mixes named and positional placeholders",
                self.text
            );
        }
        self.placeholders().collect()
    }

    /// Placeholders addressed by position, when all of them are positional
    pub fn positional_properties(&self) -> Vec<&PlaceholderToken> {
        if self.all_positional() {
            self.placeholders().collect()
        } else {
            Vec::new()
        }
    }

    /// Render into `output`; see [`renderer::render`]
    pub fn render<P>(
        &self,
        properties: &P,
        output: &mut dyn Write,
        provider: Option<&dyn FormatProvider>,
    ) -> Result<(), RenderError>
    where
        P: PropertyLookup + ?Sized,
    {
        renderer::render(self, properties, output, provider)
    }

    /// Render into a new string
    pub fn render_to_string<P>(
        &self,
        properties: &P,
        provider: Option<&dyn FormatProvider>,
    ) -> Result<String, RenderError>
    where
        P: PropertyLookup + ?Sized,
    {
        renderer::render_to_string(self, properties, provider)
    }
}

impl PartialEq for MessageTemplate {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for MessageTemplate {}

impl Hash for MessageTemplate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl fmt::Display for MessageTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::LiteralToken;

    #[test]
    fn test_parse_keeps_text_and_tokens() {
        let template = MessageTemplate::parse("Hello {Name}!");
        assert_eq!(template.text(), "Hello {Name}!");
        assert_eq!(template.tokens().len(), 3);
        assert_eq!(template.to_string(), "Hello {Name}!");
    }

    #[test]
    fn test_equality_is_by_text() {
        let parsed = MessageTemplate::parse("{A}");
        let built = MessageTemplate::from_tokens("{A}", vec![Token::from(LiteralToken::new("x", 0))]);
        assert_eq!(parsed, built);
        assert_ne!(parsed, MessageTemplate::parse("{ A}"));
    }

    #[test]
    fn test_named_properties() {
        let template = MessageTemplate::parse("{A} {B} {A}");
        let names: Vec<_> = template.named_properties().into_iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["A", "B", "A"]);
        assert!(template.positional_properties().is_empty());
    }

    #[test]
    fn test_positional_properties() {
        let template = MessageTemplate::parse("{1} then {0}");
        let names: Vec<_> = template
            .positional_properties()
            .into_iter()
            .map(|p| p.positional_index())
            .collect();
        assert_eq!(names, vec![Some(1), Some(0)]);
        assert!(template.named_properties().is_empty());
    }

    #[test]
    fn test_mixed_placeholders_are_all_named() {
        let template = MessageTemplate::parse("{0} {Name}");
        assert_eq!(template.named_properties().len(), 2);
        assert!(template.positional_properties().is_empty());
    }

    #[test]
    fn test_template_without_placeholders() {
        let template = MessageTemplate::parse("plain");
        assert!(template.named_properties().is_empty());
        assert!(template.positional_properties().is_empty());
    }
}
