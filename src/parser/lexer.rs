//! Lexer for message templates using logos
//!
//! The lexer only knows about braces. It splits a template into runs of
//! plain text and the four brace lexemes; the tokenizer decides what a
//! sequence of lexemes means.

use logos::Logos;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lexeme {
    // Escapes (longer patterns win over the single braces)
    #[token("{{")]
    EscapedOpen,
    #[token("}}")]
    EscapedClose,

    // Delimiters
    #[token("{")]
    Open,
    #[token("}")]
    Close,

    /// Any run of characters that contains no brace
    #[regex(r"[^{}]+")]
    Text,
}

/// Lex input string into lexemes with spans
pub fn lex(input: &str) -> impl Iterator<Item = (Lexeme, Span)> + '_ {
    Lexeme::lexer(input)
        .spanned()
        // every char is covered by a pattern, so errors only surface as text
        .map(|(lexeme, span)| (lexeme.unwrap_or(Lexeme::Text), span))
}
