//! Token types produced by the tokenizer
//!
//! A parsed template is a flat sequence of [`Token`]s. Literal text and
//! property placeholders share one render contract, so a renderer only has
//! to walk the sequence in order.

use std::fmt::{self, Write};
use std::hash::{Hash, Hasher};

use super::lexer::Span;
use crate::error::RenderError;
use crate::renderer::padding;
use crate::renderer::provider::{FormatProvider, INVARIANT};
use crate::renderer::value::PropertyLookup;

/// How a captured value should be structured by the capturing layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Destructuring {
    /// No sigil: capture using the default conversion
    #[default]
    Default,
    /// `$` sigil: force the value to its string representation
    Stringify,
    /// `@` sigil: capture the value's structure
    Destructure,
}

impl Destructuring {
    /// Map a leading sigil to its hint
    pub fn from_sigil(c: char) -> Option<Self> {
        match c {
            '$' => Some(Destructuring::Stringify),
            '@' => Some(Destructuring::Destructure),
            _ => None,
        }
    }

    /// The sigil written in front of the property name, if any
    pub fn sigil(self) -> Option<char> {
        match self {
            Destructuring::Default => None,
            Destructuring::Stringify => Some('$'),
            Destructuring::Destructure => Some('@'),
        }
    }
}

/// Side of the padded field the content sticks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlignmentDirection {
    Left,
    Right,
}

/// Alignment directive of a placeholder (`{Name,-10}` / `{Name,10}`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alignment {
    pub direction: AlignmentDirection,
    /// Minimum field width in chars
    pub width: usize,
}

impl Alignment {
    pub fn new(direction: AlignmentDirection, width: usize) -> Self {
        Self { direction, width }
    }

    /// Build from the signed template form: negative widths left-align.
    ///
    /// Returns `None` for zero, which has no direction.
    pub fn from_signed(width: i32) -> Option<Self> {
        match width {
            0 => None,
            w if w < 0 => Some(Self::new(
                AlignmentDirection::Left,
                w.unsigned_abs() as usize,
            )),
            w => Some(Self::new(AlignmentDirection::Right, w as usize)),
        }
    }

    /// The signed template form of this alignment
    pub fn signed_width(&self) -> i64 {
        match self.direction {
            AlignmentDirection::Left => -(self.width as i64),
            AlignmentDirection::Right => self.width as i64,
        }
    }
}

/// Literal text of a template
///
/// Escaped braces are already collapsed, so `text` is exactly what the token
/// writes when rendered.
#[derive(Debug, Clone)]
pub struct LiteralToken {
    text: String,
    span: Span,
}

impl LiteralToken {
    /// Create a literal starting at `start_index` whose source is the text itself
    pub fn new(text: impl Into<String>, start_index: usize) -> Self {
        let text = text.into();
        let span = start_index..start_index + text.len();
        Self { text, span }
    }

    /// Create a literal covering an explicit source range (escapes make the
    /// range longer than the text)
    pub(crate) fn with_span(text: String, span: Span) -> Self {
        Self { text, span }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn start_index(&self) -> usize {
        self.span.start
    }

    /// Length of the unescaped text in bytes (not chars), matching the
    /// byte offsets used by `start_index`
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn span(&self) -> Span {
        self.span.clone()
    }

    /// Write the text verbatim
    pub fn render(&self, output: &mut dyn Write) -> Result<(), RenderError> {
        output.write_str(&self.text)?;
        Ok(())
    }
}

impl PartialEq for LiteralToken {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for LiteralToken {}

impl Hash for LiteralToken {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl fmt::Display for LiteralToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A property placeholder such as `{@User,-10:l}`
#[derive(Debug, Clone)]
pub struct PlaceholderToken {
    name: String,
    raw_text: String,
    alignment: Option<Alignment>,
    format: Option<String>,
    destructuring: Destructuring,
    start_index: usize,
}

impl PlaceholderToken {
    /// Create a placeholder for `name`; the raw text is synthesized
    pub fn new(name: impl Into<String>, start_index: usize) -> Self {
        let mut token = Self {
            name: name.into(),
            raw_text: String::new(),
            alignment: None,
            format: None,
            destructuring: Destructuring::Default,
            start_index,
        };
        token.raw_text = token.synthesize_raw_text();
        token
    }

    /// Create a placeholder keeping the exact source text it was parsed from
    pub(crate) fn from_parts(
        name: String,
        raw_text: String,
        alignment: Option<Alignment>,
        format: Option<String>,
        destructuring: Destructuring,
        start_index: usize,
    ) -> Self {
        Self {
            name,
            raw_text,
            alignment,
            format,
            destructuring,
            start_index,
        }
    }

    /// Set the alignment directive
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self.raw_text = self.synthesize_raw_text();
        self
    }

    /// Set the format specifier
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self.raw_text = self.synthesize_raw_text();
        self
    }

    /// Set the destructuring hint
    pub fn with_destructuring(mut self, destructuring: Destructuring) -> Self {
        self.destructuring = destructuring;
        self.raw_text = self.synthesize_raw_text();
        self
    }

    fn synthesize_raw_text(&self) -> String {
        let mut raw = String::with_capacity(self.name.len() + 2);
        raw.push('{');
        if let Some(sigil) = self.destructuring.sigil() {
            raw.push(sigil);
        }
        raw.push_str(&self.name);
        if let Some(alignment) = &self.alignment {
            raw.push(',');
            raw.push_str(&alignment.signed_width().to_string());
        }
        if let Some(format) = &self.format {
            raw.push(':');
            raw.push_str(format);
        }
        raw.push('}');
        raw
    }

    /// Property name without the destructuring sigil
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The placeholder exactly as written in the template, braces included
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn alignment(&self) -> Option<Alignment> {
        self.alignment
    }

    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    pub fn destructuring(&self) -> Destructuring {
        self.destructuring
    }

    pub fn start_index(&self) -> usize {
        self.start_index
    }

    pub fn len(&self) -> usize {
        self.raw_text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw_text.is_empty()
    }

    pub fn span(&self) -> Span {
        self.start_index..self.start_index + self.raw_text.len()
    }

    /// Index of a positional placeholder (`{0}`, `{1}`, ...)
    pub fn positional_index(&self) -> Option<usize> {
        if self.name.bytes().all(|b| b.is_ascii_digit()) {
            self.name.parse().ok()
        } else {
            None
        }
    }

    pub fn is_positional(&self) -> bool {
        self.positional_index().is_some()
    }

    /// Render the property value, or the raw placeholder when it is missing.
    pub fn render<P>(
        &self,
        properties: &P,
        output: &mut dyn Write,
        provider: Option<&dyn FormatProvider>,
    ) -> Result<(), RenderError>
    where
        P: PropertyLookup + ?Sized,
    {
        let Some(value) = properties.lookup(&self.name) else {
            output.write_str(&self.raw_text)?;
            return Ok(());
        };
        let provider: &dyn FormatProvider = match provider {
            Some(provider) => provider,
            None => &INVARIANT,
        };
        let format = self.format.as_deref();

        match self.alignment {
            None => value
                .format_to(format, provider, output)
                .map_err(|err| RenderError::from_value(&self.name, err)),
            Some(alignment) => {
                let mut buffer = String::new();
                value
                    .format_to(format, provider, &mut buffer)
                    .map_err(|err| RenderError::from_value(&self.name, err))?;
                padding::write_aligned(output, &buffer, alignment)?;
                Ok(())
            }
        }
    }
}

impl PartialEq for PlaceholderToken {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.alignment == other.alignment
            && self.format == other.format
            && self.destructuring == other.destructuring
    }
}

impl Eq for PlaceholderToken {}

impl Hash for PlaceholderToken {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.alignment.hash(state);
        self.format.hash(state);
        self.destructuring.hash(state);
    }
}

impl fmt::Display for PlaceholderToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw_text)
    }
}

/// A single unit of a parsed template
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Literal(LiteralToken),
    Placeholder(PlaceholderToken),
}

impl Token {
    pub fn start_index(&self) -> usize {
        match self {
            Token::Literal(t) => t.start_index(),
            Token::Placeholder(t) => t.start_index(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Token::Literal(t) => t.len(),
            Token::Placeholder(t) => t.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Source bytes this token was produced from
    pub fn span(&self) -> Span {
        match self {
            Token::Literal(t) => t.span(),
            Token::Placeholder(t) => t.span(),
        }
    }

    pub fn as_placeholder(&self) -> Option<&PlaceholderToken> {
        match self {
            Token::Placeholder(t) => Some(t),
            Token::Literal(_) => None,
        }
    }

    /// Write this token's output for the given properties.
    ///
    /// Literals ignore `properties` and `provider`.
    pub fn render<P>(
        &self,
        properties: &P,
        output: &mut dyn Write,
        provider: Option<&dyn FormatProvider>,
    ) -> Result<(), RenderError>
    where
        P: PropertyLookup + ?Sized,
    {
        match self {
            Token::Literal(t) => t.render(output),
            Token::Placeholder(t) => t.render(properties, output, provider),
        }
    }
}

impl From<LiteralToken> for Token {
    fn from(token: LiteralToken) -> Self {
        Token::Literal(token)
    }
}

impl From<PlaceholderToken> for Token {
    fn from(token: PlaceholderToken) -> Self {
        Token::Placeholder(token)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(t) => t.fmt(f),
            Token::Placeholder(t) => t.fmt(f),
        }
    }
}
